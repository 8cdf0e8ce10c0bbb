//! Authentication and role gating tests

use changas::auth::{visible_actions, MenuAction, Role, Session};

#[test]
fn test_role_display() {
    assert_eq!(Role::User.to_string(), "user");
    assert_eq!(Role::Worker.to_string(), "worker");
    assert_eq!(Role::Admin.to_string(), "admin");
}

#[test]
fn test_role_wire_format() {
    let role: Role = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(role, Role::Admin);
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}

#[test]
fn test_session_is_fully_populated() {
    let session = Session::new("alice".to_string(), "abc123".to_string(), Role::Worker);
    assert_eq!(session.username, "alice");
    assert_eq!(session.token, "abc123");
    assert_eq!(session.role, Role::Worker);
}

#[test]
fn test_logged_out_menu() {
    assert_eq!(visible_actions(None), vec![MenuAction::Login]);
}

#[test]
fn test_user_menu() {
    let actions = visible_actions(Some(Role::User));
    assert!(actions.contains(&MenuAction::BecomeWorker));
    assert!(actions.contains(&MenuAction::ViewProfile));
    assert!(actions.contains(&MenuAction::Logout));
    assert!(!actions.contains(&MenuAction::EditWorkerProfile));
    assert!(!actions.contains(&MenuAction::ManageWorkers));
    assert!(!actions.contains(&MenuAction::CreateAdmin));
}

#[test]
fn test_worker_menu_swaps_become_worker_for_edit() {
    let actions = visible_actions(Some(Role::Worker));
    assert!(actions.contains(&MenuAction::EditWorkerProfile));
    assert!(!actions.contains(&MenuAction::BecomeWorker));
    assert!(!actions.contains(&MenuAction::ManageWorkers));
}

#[test]
fn test_admin_menu_has_admin_entries_only() {
    let actions = visible_actions(Some(Role::Admin));
    assert!(actions.contains(&MenuAction::ManageWorkers));
    assert!(actions.contains(&MenuAction::CreateAdmin));
    assert!(!actions.contains(&MenuAction::BecomeWorker));
    assert!(!actions.contains(&MenuAction::EditWorkerProfile));
}

#[test]
fn test_menu_is_a_pure_function_of_role() {
    for role in [None, Some(Role::User), Some(Role::Worker), Some(Role::Admin)] {
        assert_eq!(visible_actions(role), visible_actions(role));
    }
}

#[test]
fn test_every_action_maps_to_a_command() {
    for role in [None, Some(Role::User), Some(Role::Worker), Some(Role::Admin)] {
        for action in visible_actions(role) {
            assert!(!action.command().is_empty());
            assert!(!action.description().is_empty());
        }
    }
}
