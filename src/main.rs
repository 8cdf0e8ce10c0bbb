use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use changas::cli::{commands, AdminAction, Cli, Commands, ProfileAction, WorkersAction};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "changas=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init().await,
        Commands::Login { username } => commands::login(username).await,
        Commands::Logout { force } => commands::logout(force).await,
        Commands::Whoami => commands::whoami().await,
        Commands::Menu => commands::menu().await,
        Commands::Profile { action } => match action {
            ProfileAction::Show { format } => commands::profile_show(format).await,
            ProfileAction::Edit(args) => commands::profile_edit(args).await,
        },
        Commands::Workers { action } => match action {
            WorkersAction::List { format } => commands::workers_list(format).await,
        },
        Commands::Admin { action } => match action {
            AdminAction::Delete { user_id, force } => commands::admin_delete(user_id, force).await,
            AdminAction::EditWorker(args) => commands::admin_edit_worker(args).await,
            AdminAction::CreateAdmin(args) => commands::admin_create_admin(args).await,
        },
    }
}
