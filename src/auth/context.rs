//! Authentication context
//!
//! Single source of truth for "is a user logged in, and with what role". The
//! context owns the in-memory session and is the only writer of the durable
//! store. It is constructed over an injected [`SessionStore`] rather than
//! ambient global state, so tests can substitute a store rooted in a
//! temporary directory.

use crate::api::ApiClient;
use crate::auth::models::{Credentials, Role, Session};
use crate::auth::store::SessionStore;
use crate::error::Result;
use crate::forms;
use tracing::{debug, warn};

/// Process-wide authentication state.
///
/// The session is a single value replaced atomically on login and logout:
/// one authenticated identity per process at a time.
pub struct AuthContext {
    store: SessionStore,
    session: Option<Session>,
    /// Set when the durable store failed a write. The session then lives
    /// in memory only and is lost when the process exits.
    degraded: bool,
}

impl AuthContext {
    /// Initialize from the durable store.
    ///
    /// A missing session file is the normal logged-out state. An unreadable
    /// file is logged and treated as logged out rather than failing startup.
    pub fn initialize(store: SessionStore) -> Self {
        let session = match store.load() {
            Ok(session) => session,
            Err(e) => {
                warn!("ignoring unreadable session file: {}", e);
                None
            }
        };

        Self {
            store,
            session,
            degraded: false,
        }
    }

    /// Log in against the remote API.
    ///
    /// Client-side validation runs first; a failing field never reaches the
    /// network. The session transitions only on a response carrying both
    /// token and role. On rejection or network failure the current session
    /// (in memory and on disk) is left exactly as it was.
    pub async fn login(&mut self, client: &ApiClient, credentials: &Credentials) -> Result<Session> {
        forms::validate_login(&credentials.username, &credentials.password)?;

        let response = client.login(credentials).await?;
        let session = Session::new(credentials.username.clone(), response.token, response.role);

        if let Err(e) = self.store.save(&session) {
            warn!(
                "could not persist session, it will last for this run only: {}",
                e
            );
            self.degraded = true;
        }

        debug!(username = %session.username, role = %session.role, "logged in");
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Log out.
    ///
    /// Purely local: clears memory and the durable store. Idempotent, and
    /// has no network error condition.
    pub fn logout(&mut self) {
        self.session = None;
        if let Err(e) = self.store.clear() {
            warn!("could not remove session file: {}", e);
        }
    }

    /// Current bearer token, if logged in
    pub fn current_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Current session, if logged in
    pub fn current_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether a session is held for the given role
    pub fn has_role(&self, role: Role) -> bool {
        self.session.as_ref().is_some_and(|s| s.role == role)
    }

    /// Whether any session is held
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the session could not be persisted and lives in memory only
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}
