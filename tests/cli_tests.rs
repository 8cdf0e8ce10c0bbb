//! CLI argument parsing tests

use clap::Parser;

use changas::cli::{AdminAction, Cli, Commands, ProfileAction, WorkersAction};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args.iter().copied()).expect("arguments should parse")
}

#[test]
fn test_parse_login_with_username() {
    let cli = parse(&["changas", "login", "--username", "alice"]);
    match cli.command {
        Commands::Login { username } => assert_eq!(username.as_deref(), Some("alice")),
        _ => panic!("expected login"),
    }
}

#[test]
fn test_parse_logout_force() {
    let cli = parse(&["changas", "logout", "--force"]);
    match cli.command {
        Commands::Logout { force } => assert!(force),
        _ => panic!("expected logout"),
    }
}

#[test]
fn test_parse_profile_show_default_format() {
    let cli = parse(&["changas", "profile", "show"]);
    match cli.command {
        Commands::Profile {
            action: ProfileAction::Show { format },
        } => assert!(matches!(format, changas::cli::OutputFormat::Table)),
        _ => panic!("expected profile show"),
    }
}

#[test]
fn test_parse_profile_edit_flags() {
    let cli = parse(&[
        "changas", "profile", "edit", "--email", "a@b.com", "--yes",
    ]);
    match cli.command {
        Commands::Profile {
            action: ProfileAction::Edit(args),
        } => {
            assert_eq!(args.email.as_deref(), Some("a@b.com"));
            assert!(args.username.is_none());
            assert!(args.yes);
        }
        _ => panic!("expected profile edit"),
    }
}

#[test]
fn test_parse_workers_list_yaml() {
    let cli = parse(&["changas", "workers", "list", "--format", "yaml"]);
    match cli.command {
        Commands::Workers {
            action: WorkersAction::List { format },
        } => assert!(matches!(format, changas::cli::OutputFormat::Yaml)),
        _ => panic!("expected workers list"),
    }
}

#[test]
fn test_parse_admin_delete() {
    let cli = parse(&["changas", "admin", "delete", "42", "--force"]);
    match cli.command {
        Commands::Admin {
            action: AdminAction::Delete { user_id, force },
        } => {
            assert_eq!(user_id, 42);
            assert!(force);
        }
        _ => panic!("expected admin delete"),
    }
}

#[test]
fn test_parse_admin_edit_worker() {
    let cli = parse(&[
        "changas",
        "admin",
        "edit-worker",
        "42",
        "--description",
        "Plumber",
        "--phone-number",
        "1155551234",
        "--address",
        "Av. Siempre Viva 742",
        "--yes",
    ]);
    match cli.command {
        Commands::Admin {
            action: AdminAction::EditWorker(args),
        } => {
            assert_eq!(args.user_id, 42);
            assert_eq!(args.description.as_deref(), Some("Plumber"));
            assert_eq!(args.phone_number.as_deref(), Some("1155551234"));
            assert!(args.yes);
        }
        _ => panic!("expected admin edit-worker"),
    }
}

#[test]
fn test_parse_admin_create_admin() {
    let cli = parse(&[
        "changas",
        "admin",
        "create-admin",
        "--username",
        "newadmin",
        "--email",
        "ana@example.com",
    ]);
    match cli.command {
        Commands::Admin {
            action: AdminAction::CreateAdmin(args),
        } => {
            assert_eq!(args.username.as_deref(), Some("newadmin"));
            assert_eq!(args.email.as_deref(), Some("ana@example.com"));
            assert!(!args.yes);
        }
        _ => panic!("expected admin create-admin"),
    }
}

#[test]
fn test_delete_requires_user_id() {
    assert!(Cli::try_parse_from(["changas", "admin", "delete"]).is_err());
}

#[test]
fn test_unknown_command_is_rejected() {
    assert!(Cli::try_parse_from(["changas", "reboot"]).is_err());
}
