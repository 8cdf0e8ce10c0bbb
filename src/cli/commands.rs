//! CLI command implementations

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use std::fs;

use crate::api::{ApiClient, CreateAdminRequest, UserProfile, WorkerProfileUpdate};
use crate::auth::{visible_actions, AuthContext, Credentials, SessionStore};
use crate::cli::{
    apply_color_mode, confirm, error, info, network_spinner, print_menu, print_profile,
    print_session, print_worker_table, success, warn, CreateAdminArgs, EditWorkerArgs,
    OutputFormat, ProfileEditArgs,
};
use crate::config::{self, Config};
use crate::error::Error;
use crate::forms::{self, rules, FieldCheck};
use crate::profile::{ProfileEditor, ProfileField};

/// Initialize a changas.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new("changas.toml");

    if config_path.exists() {
        warn("changas.toml already exists");
        return Ok(());
    }

    fs::write(config_path, config::loader::default_config_content())?;

    success("Created changas.toml");
    info("Edit the configuration file and run 'changas login' to get started");

    Ok(())
}

/// Log in to the marketplace
pub async fn login(username: Option<String>) -> Result<()> {
    let config = load_config()?;
    let client = api_client(&config)?;
    let mut auth = auth_context(&config);

    if let Some(session) = auth.current_session() {
        warn(&format!(
            "Already logged in as {}. Logging in again replaces that session.",
            session.username
        ));
    }

    let theme = ColorfulTheme::default();
    let username = match username {
        Some(username) => username,
        None => Input::with_theme(&theme)
            .with_prompt("Username")
            .validate_with(|input: &String| check_to_result(rules::login_username(input)))
            .interact_text()?,
    };

    let password = Password::with_theme(&theme)
        .with_prompt("Password")
        .interact()?;

    let credentials = Credentials { username, password };

    let pb = network_spinner("Logging in...");
    let result = auth.login(&client, &credentials).await;
    pb.finish_and_clear();

    match result {
        Ok(session) => {
            success(&format!(
                "Logged in as {} ({})",
                session.username, session.role
            ));
            if auth.is_degraded() {
                warn("The session could not be persisted and will last for this run only");
            }
            Ok(())
        }
        Err(e @ Error::Validation { .. }) => {
            error(&e.to_string());
            Err(e.into())
        }
        Err(Error::AuthRejected) => {
            error("Invalid username or password.");
            Err(Error::AuthRejected.into())
        }
        Err(Error::Http(e)) => {
            error("Could not reach the server. Try again.");
            Err(e.into())
        }
        Err(e) => {
            error(&format!("Login failed: {}", e));
            Err(e.into())
        }
    }
}

/// Log out, clearing the stored session
pub async fn logout(force: bool) -> Result<()> {
    let config = load_config()?;
    let mut auth = auth_context(&config);

    if !auth.is_authenticated() {
        info("Not logged in.");
        return Ok(());
    }

    if !force && !confirm("Log out and discard the stored session?") {
        info("Cancelled");
        return Ok(());
    }

    auth.logout();
    success("Logged out");
    Ok(())
}

/// Show the current session
pub async fn whoami() -> Result<()> {
    let config = load_config()?;
    let auth = auth_context(&config);

    match auth.current_session() {
        Some(session) => print_session(session),
        None => info("Not logged in."),
    }

    Ok(())
}

/// Show the actions available to the current role
pub async fn menu() -> Result<()> {
    let config = load_config()?;
    let auth = auth_context(&config);

    let role = auth.current_session().map(|s| s.role);
    print_menu(&visible_actions(role));

    Ok(())
}

/// Fetch and display the user's profile
pub async fn profile_show(format: OutputFormat) -> Result<()> {
    let config = load_config()?;
    let client = api_client(&config)?;
    let auth = auth_context(&config);
    let token = require_token(&auth)?;

    let pb = network_spinner("Fetching profile...");
    let result = client.fetch_profile(&token).await;
    pb.finish_and_clear();

    match result {
        Ok(profile) => {
            match format {
                OutputFormat::Table => print_profile(&profile),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
                OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&profile)?),
            }
            Ok(())
        }
        Err(e) => {
            error(&format!("Failed to fetch profile: {}", e));
            Err(e.into())
        }
    }
}

/// Edit the user's profile and save after confirmation
pub async fn profile_edit(args: ProfileEditArgs) -> Result<()> {
    let config = load_config()?;
    let client = api_client(&config)?;
    let auth = auth_context(&config);
    let token = require_token(&auth)?;

    let pb = network_spinner("Fetching profile...");
    let result = client.fetch_profile(&token).await;
    pb.finish_and_clear();

    let baseline = match result {
        Ok(profile) => profile,
        Err(e) => {
            error(&format!("Failed to fetch profile: {}", e));
            return Err(e.into());
        }
    };

    let mut editor = ProfileEditor::new(baseline);
    editor.begin_edit();

    let interactive = args.username.is_none()
        && args.name.is_none()
        && args.lastname.is_none()
        && args.email.is_none();

    if interactive {
        let theme = ColorfulTheme::default();
        for field in ProfileField::ALL {
            let current = field_value(editor.draft().expect("editing"), field).to_string();
            let value: String = Input::with_theme(&theme)
                .with_prompt(field.label())
                .default(current)
                .interact_text()?;
            editor.set_field(field, value);
        }
    } else {
        if let Some(username) = args.username {
            editor.set_field(ProfileField::Username, username);
        }
        if let Some(name) = args.name {
            editor.set_field(ProfileField::Name, name);
        }
        if let Some(lastname) = args.lastname {
            editor.set_field(ProfileField::Lastname, lastname);
        }
        if let Some(email) = args.email {
            editor.set_field(ProfileField::Email, email);
        }
    }

    if !editor.is_dirty() {
        info("No changes to save.");
        return Ok(());
    }

    print_changes(&editor);

    if !args.yes && !confirm("Save these changes to your profile?") {
        editor.cancel();
        info("Cancelled");
        return Ok(());
    }

    let pb = network_spinner("Saving profile...");
    let result = editor.save(&client, &token).await;
    pb.finish_and_clear();

    match result {
        Ok(updated) => {
            success("Profile updated");
            print_profile(&updated);
            Ok(())
        }
        Err(e) => {
            error(&format!("Failed to update profile: {}", e));
            warn("Your edits were kept; re-run the command to try again:");
            if let Some(draft) = editor.draft() {
                println!("  changas profile edit{}", edit_flags(&editor, draft));
            }
            Err(e.into())
        }
    }
}

/// List all marketplace workers
pub async fn workers_list(format: OutputFormat) -> Result<()> {
    let config = load_config()?;
    let client = api_client(&config)?;
    let auth = auth_context(&config);
    let token = require_token(&auth)?;

    let pb = network_spinner("Fetching workers...");
    let result = client.list_workers(&token).await;
    pb.finish_and_clear();

    match result {
        Ok(workers) => {
            match format {
                OutputFormat::Table => print_worker_table(&workers),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&workers)?),
                OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&workers)?),
            }
            Ok(())
        }
        Err(e) => {
            error(&format!("Failed to fetch workers: {}", e));
            Err(e.into())
        }
    }
}

/// Delete a worker's user account
pub async fn admin_delete(user_id: u64, force: bool) -> Result<()> {
    let config = load_config()?;
    let client = api_client(&config)?;
    let auth = auth_context(&config);
    let token = require_token(&auth)?;

    if !force {
        let message = format!(
            "Are you sure you want to delete user {}? This action cannot be undone.",
            user_id
        );
        if !confirm(&message) {
            info("Cancelled");
            return Ok(());
        }
    }

    let pb = network_spinner("Deleting user...");
    let result = client.delete_user(&token, user_id).await;
    pb.finish_and_clear();

    match result {
        Ok(()) => {
            success(&format!("Deleted user {}", user_id));
            Ok(())
        }
        Err(e) => {
            error(&format!("Failed to delete user {}: {}", user_id, e));
            Err(e.into())
        }
    }
}

/// Edit a worker's profile
pub async fn admin_edit_worker(args: EditWorkerArgs) -> Result<()> {
    let config = load_config()?;
    let client = api_client(&config)?;
    let auth = auth_context(&config);
    let token = require_token(&auth)?;

    let theme = ColorfulTheme::default();

    let description = match args.description {
        Some(description) => description,
        None => Input::with_theme(&theme)
            .with_prompt("Description")
            .validate_with(|input: &String| check_to_result(rules::required("description", input)))
            .interact_text()?,
    };

    let phone_number = match args.phone_number {
        Some(phone_number) => phone_number,
        None => Input::with_theme(&theme)
            .with_prompt("Phone number")
            .validate_with(|input: &String| check_to_result(rules::phone_number(input)))
            .interact_text()?,
    };

    let address = match args.address {
        Some(address) => address,
        None => Input::with_theme(&theme)
            .with_prompt("Address")
            .validate_with(|input: &String| check_to_result(rules::required("address", input)))
            .interact_text()?,
    };

    let update = WorkerProfileUpdate {
        description,
        phone_number,
        address,
    };

    if let Err(e) = forms::validate_worker_profile(&update) {
        error(&e.to_string());
        return Err(e.into());
    }

    if !args.yes && !confirm(&format!("Save these changes to worker {}'s profile?", args.user_id)) {
        info("Cancelled");
        return Ok(());
    }

    let pb = network_spinner("Saving worker profile...");
    let result = client
        .update_worker_profile(&token, args.user_id, &update)
        .await;
    pb.finish_and_clear();

    match result {
        Ok(()) => {
            success(&format!("Updated worker {}'s profile", args.user_id));
            Ok(())
        }
        Err(e) => {
            error(&format!("Failed to update worker profile: {}", e));
            Err(e.into())
        }
    }
}

/// Create a new administrator account
pub async fn admin_create_admin(args: CreateAdminArgs) -> Result<()> {
    let config = load_config()?;
    let client = api_client(&config)?;
    let auth = auth_context(&config);
    let token = require_token(&auth)?;

    let theme = ColorfulTheme::default();

    let username = match args.username {
        Some(username) => username,
        None => Input::with_theme(&theme)
            .with_prompt("Username")
            .validate_with(|input: &String| check_to_result(rules::admin_username(input)))
            .interact_text()?,
    };

    let name = match args.name {
        Some(name) => name,
        None => Input::with_theme(&theme)
            .with_prompt("Name")
            .validate_with(|input: &String| check_to_result(rules::required("name", input)))
            .interact_text()?,
    };

    let lastname = match args.lastname {
        Some(lastname) => lastname,
        None => Input::with_theme(&theme)
            .with_prompt("Last name")
            .validate_with(|input: &String| check_to_result(rules::required("lastname", input)))
            .interact_text()?,
    };

    let email = match args.email {
        Some(email) => email,
        None => Input::with_theme(&theme)
            .with_prompt("Email")
            .validate_with(|input: &String| check_to_result(rules::email(input)))
            .interact_text()?,
    };

    // The password is always prompted for so it never lands in shell history
    let password = Password::with_theme(&theme)
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let request = CreateAdminRequest {
        username,
        name,
        lastname,
        email,
        password,
    };

    if let Err(e) = forms::validate_new_admin(&request) {
        error(&e.to_string());
        return Err(e.into());
    }

    if !args.yes && !confirm(&format!("Create admin user '{}'?", request.username)) {
        info("Cancelled");
        return Ok(());
    }

    let pb = network_spinner("Creating admin...");
    let result = client.create_admin(&token, &request).await;
    pb.finish_and_clear();

    match result {
        Ok(()) => {
            success(&format!("Created admin user '{}'", request.username));
            Ok(())
        }
        Err(e) => {
            error(&format!("Failed to create admin: {}", e));
            Err(e.into())
        }
    }
}

// Helper functions

fn load_config() -> Result<Config> {
    let config = config::load_config().map_err(|e| anyhow::anyhow!("{}", e))?;
    apply_color_mode(config.output.color);
    Ok(config)
}

fn auth_context(config: &Config) -> AuthContext {
    AuthContext::initialize(SessionStore::new(config.session.file.clone()))
}

fn api_client(config: &Config) -> Result<ApiClient> {
    ApiClient::new(&config.api).map_err(|e| anyhow::anyhow!("{}", e))
}

fn require_token(auth: &AuthContext) -> Result<String> {
    match auth.current_token() {
        Some(token) => Ok(token.to_string()),
        None => {
            error(&Error::Unauthenticated.to_string());
            Err(Error::Unauthenticated.into())
        }
    }
}

fn check_to_result(check: FieldCheck) -> std::result::Result<(), String> {
    match check {
        FieldCheck::Valid => Ok(()),
        FieldCheck::Invalid(reason) => Err(reason),
    }
}

fn field_value<'a>(profile: &'a UserProfile, field: ProfileField) -> &'a str {
    match field {
        ProfileField::Username => &profile.username,
        ProfileField::Name => &profile.name,
        ProfileField::Lastname => &profile.lastname,
        ProfileField::Email => &profile.email,
    }
}

/// Show the staged changes before the confirmation prompt
fn print_changes(editor: &ProfileEditor) {
    let Some(draft) = editor.draft() else {
        return;
    };

    info("Staged changes:");
    for field in ProfileField::ALL {
        let before = field_value(editor.profile(), field);
        let after = field_value(draft, field);
        if before != after {
            println!("  {}: {} -> {}", field.label(), before, after);
        }
    }
}

/// Flags that reproduce the retained draft after a failed save
fn edit_flags(editor: &ProfileEditor, draft: &UserProfile) -> String {
    let mut flags = String::new();
    for field in ProfileField::ALL {
        let before = field_value(editor.profile(), field);
        let after = field_value(draft, field);
        if before != after {
            let flag = match field {
                ProfileField::Username => "--username",
                ProfileField::Name => "--name",
                ProfileField::Lastname => "--lastname",
                ProfileField::Email => "--email",
            };
            flags.push_str(&format!(" {} '{}'", flag, after));
        }
    }
    flags
}
