//! Authentication and session management

pub mod context;
pub mod gating;
pub mod models;
pub mod store;

pub use context::AuthContext;
pub use gating::{visible_actions, MenuAction};
pub use models::{Credentials, Role, Session};
pub use store::SessionStore;
