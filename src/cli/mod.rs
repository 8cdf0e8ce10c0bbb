//! CLI interface for the Changas client

pub mod commands;
mod output;

pub use output::*;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "changas")]
#[command(version = "0.1.0")]
#[command(about = "CLI client for the Changas services marketplace", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a changas.toml configuration file
    Init,

    /// Log in to the marketplace
    Login {
        /// Username (prompted for when omitted)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Log out and discard the stored session
    Logout {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show the current session
    Whoami,

    /// Show the actions available to the current role
    Menu,

    /// View and edit your profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Browse marketplace workers
    Workers {
        #[command(subcommand)]
        action: WorkersAction,
    },

    /// Administrative operations over workers and admins
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Fetch and display your profile
    Show {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Edit profile fields and save after confirmation
    Edit(ProfileEditArgs),
}

#[derive(Args, Default)]
pub struct ProfileEditArgs {
    /// New username
    #[arg(long)]
    pub username: Option<String>,

    /// New first name
    #[arg(long)]
    pub name: Option<String>,

    /// New last name
    #[arg(long)]
    pub lastname: Option<String>,

    /// New email address
    #[arg(long)]
    pub email: Option<String>,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum WorkersAction {
    /// List all workers
    List {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
pub enum AdminAction {
    /// Delete a worker's user account
    Delete {
        /// The user id to delete
        user_id: u64,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Edit a worker's profile
    EditWorker(EditWorkerArgs),

    /// Create a new administrator account
    CreateAdmin(CreateAdminArgs),
}

#[derive(Args)]
pub struct EditWorkerArgs {
    /// The user id of the worker to edit
    pub user_id: u64,

    /// Worker description
    #[arg(long)]
    pub description: Option<String>,

    /// Phone number (digits only)
    #[arg(long)]
    pub phone_number: Option<String>,

    /// Address
    #[arg(long)]
    pub address: Option<String>,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct CreateAdminArgs {
    /// Username for the new admin
    #[arg(long)]
    pub username: Option<String>,

    /// First name
    #[arg(long)]
    pub name: Option<String>,

    /// Last name
    #[arg(long)]
    pub lastname: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
