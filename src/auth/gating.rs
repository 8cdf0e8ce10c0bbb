//! Role-derived action gating
//!
//! The set of actions offered to a user is a pure function of their role.
//! This is a UX convenience, not a security boundary: every request still
//! carries the bearer token and the server independently rejects anything
//! unauthorized.

use crate::auth::models::Role;

/// An action offered in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Login,
    Logout,
    ViewProfile,
    EditProfile,
    BecomeWorker,
    EditWorkerProfile,
    ManageWorkers,
    CreateAdmin,
}

impl MenuAction {
    /// The command that performs this action
    pub fn command(&self) -> &'static str {
        match self {
            MenuAction::Login => "changas login",
            MenuAction::Logout => "changas logout",
            MenuAction::ViewProfile => "changas profile show",
            MenuAction::EditProfile => "changas profile edit",
            MenuAction::BecomeWorker => "changas profile edit",
            MenuAction::EditWorkerProfile => "changas admin edit-worker",
            MenuAction::ManageWorkers => "changas workers list",
            MenuAction::CreateAdmin => "changas admin create-admin",
        }
    }

    /// Short human description
    pub fn description(&self) -> &'static str {
        match self {
            MenuAction::Login => "Log in to the marketplace",
            MenuAction::Logout => "Log out",
            MenuAction::ViewProfile => "View your profile",
            MenuAction::EditProfile => "Edit your profile",
            MenuAction::BecomeWorker => "Become a worker",
            MenuAction::EditWorkerProfile => "Edit your worker profile",
            MenuAction::ManageWorkers => "Manage workers",
            MenuAction::CreateAdmin => "Create a new admin",
        }
    }
}

/// Actions visible for the given role. Pure and deterministic: no hidden
/// state, no server round-trip.
pub fn visible_actions(role: Option<Role>) -> Vec<MenuAction> {
    let Some(role) = role else {
        return vec![MenuAction::Login];
    };

    let mut actions = vec![
        MenuAction::ViewProfile,
        MenuAction::EditProfile,
    ];

    match role {
        Role::User => actions.push(MenuAction::BecomeWorker),
        Role::Worker => actions.push(MenuAction::EditWorkerProfile),
        Role::Admin => {
            actions.push(MenuAction::ManageWorkers);
            actions.push(MenuAction::CreateAdmin);
        }
    }

    actions.push(MenuAction::Logout);
    actions
}
