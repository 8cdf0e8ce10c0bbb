//! Configuration loading and environment variable interpolation

use crate::error::Result;
use regex::Regex;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::{changas_home, Config};

const CONFIG_FILENAME: &str = "changas.toml";

/// Load configuration from changas.toml.
///
/// Searches upward from the current directory, then falls back to
/// `$HOME/.changas/changas.toml`. A missing file is not an error: the client
/// runs against the default local API with defaults for everything else.
pub fn load_config() -> Result<Config> {
    match find_config_file() {
        Some(path) => load_config_from_path(&path),
        None => {
            tracing::debug!("no {} found, using defaults", CONFIG_FILENAME);
            Ok(Config::default())
        }
    }
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let content = interpolate_env_vars(&content);
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Find the configuration file, searching upward from the current directory
/// and finally in the per-user data directory.
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = env::current_dir() {
        loop {
            let config_path = current.join(CONFIG_FILENAME);
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    let home_path = changas_home().join(CONFIG_FILENAME);
    home_path.exists().then_some(home_path)
}

/// Interpolate environment variables in the format ${VAR_NAME} or ${VAR_NAME:-default}
fn interpolate_env_vars(content: &str) -> String {
    // This regex is a compile-time constant, panicking is acceptable here
    // as it indicates a programming error in the codebase, not a runtime issue
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
        .expect("Invalid regex pattern - this is a bug in the codebase");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        env::var(var_name).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

/// Generate a default configuration file content
pub fn default_config_content() -> &'static str {
    r#"# Changas CLI configuration

[api]
# Base URL of the marketplace API
base_url = "http://localhost:8081"
# Per-request timeout in seconds
timeout_secs = 30

[session]
# Where the login session is persisted. Delete this file to force a logout.
# file = "~/.changas/session.json"

[output]
# Colored terminal output: "auto", "always" or "never"
color = "auto"

# Secrets can be pulled from the environment:
# base_url = "${CHANGAS_API_URL:-http://localhost:8081}"
"#
}
