//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::api::{UserProfile, Worker};
use crate::auth::{MenuAction, Session};
use crate::config::ColorMode;

/// Apply the configured color mode
pub fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Auto => {}
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
    }
}

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Spinner shown while a request is in flight
pub fn network_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    pb
}

/// Print a table of workers
pub fn print_worker_table(workers: &[Worker]) {
    if workers.is_empty() {
        info("No workers found.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("User ID").fg(Color::Cyan),
            Cell::new("Username").fg(Color::Cyan),
            Cell::new("Name").fg(Color::Cyan),
            Cell::new("Email").fg(Color::Cyan),
            Cell::new("Description").fg(Color::Cyan),
            Cell::new("Phone").fg(Color::Cyan),
            Cell::new("Address").fg(Color::Cyan),
        ]);

    for worker in workers {
        let full_name = format!("{} {}", worker.user.name, worker.user.lastname);
        table.add_row(vec![
            Cell::new(worker.user.id),
            Cell::new(&worker.user.username),
            Cell::new(full_name),
            Cell::new(&worker.user.email),
            Cell::new(worker.description.as_deref().unwrap_or("-")),
            Cell::new(worker.phone_number.as_deref().unwrap_or("-")),
            Cell::new(worker.address.as_deref().unwrap_or("-")),
        ]);
    }

    println!("{table}");
}

/// Print profile details
pub fn print_profile(profile: &UserProfile) {
    println!("{}", "Profile".bold().underline());
    println!();
    println!("  {} {}", "Username:".bold(), profile.username);
    println!("  {} {}", "Name:".bold(), profile.name);
    println!("  {} {}", "Last name:".bold(), profile.lastname);
    println!("  {} {}", "Email:".bold(), profile.email);
}

/// Print the current session
pub fn print_session(session: &Session) {
    println!(
        "Logged in as {} ({}) since {}",
        session.username.bold(),
        session.role.to_string().cyan(),
        session.logged_in_at.format("%Y-%m-%d %H:%M UTC")
    );
}

/// Print the menu of available actions
pub fn print_menu(actions: &[MenuAction]) {
    println!("{}", "Available actions".bold().underline());
    println!();
    for action in actions {
        println!(
            "  {}  {}",
            format!("{:<28}", action.command()).cyan(),
            action.description()
        );
    }
}

/// Confirm an action with the user
pub fn confirm(message: &str) -> bool {
    use std::io::{self, Write};

    print!("{} [y/N] ", message);
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
