//! Profile edit workflow
//!
//! Viewing -> Editing(draft) -> [cancel -> Viewing(original)
//!                              | confirm -> Saving -> Viewing(updated)
//!                              | save fails -> Editing(draft retained)]
//!
//! Edits stage into a local draft; nothing is sent to the server until the
//! explicit confirmation step completes. On success the server's response
//! becomes the new baseline. On failure the draft is retained so the user's
//! input is not lost.

use crate::api::{ApiClient, UserProfile};
use crate::error::{Error, Result};

/// Current workflow state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Viewing,
    Editing,
}

/// A profile field that can be edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Username,
    Name,
    Lastname,
    Email,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::Username,
        ProfileField::Name,
        ProfileField::Lastname,
        ProfileField::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Username => "Username",
            ProfileField::Name => "Name",
            ProfileField::Lastname => "Last name",
            ProfileField::Email => "Email",
        }
    }
}

/// Staged edit over a profile
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    baseline: UserProfile,
    draft: Option<UserProfile>,
    last_error: Option<String>,
}

impl ProfileEditor {
    /// Start in Viewing over the fetched profile
    pub fn new(baseline: UserProfile) -> Self {
        Self {
            baseline,
            draft: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> EditorState {
        if self.draft.is_some() {
            EditorState::Editing
        } else {
            EditorState::Viewing
        }
    }

    /// The profile currently on display: the baseline while viewing
    pub fn profile(&self) -> &UserProfile {
        &self.baseline
    }

    /// The staged draft, while editing
    pub fn draft(&self) -> Option<&UserProfile> {
        self.draft.as_ref()
    }

    /// Error from the last failed save, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Begin editing: the draft starts as a copy of the baseline
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.baseline.clone());
        }
    }

    /// Stage a field value into the draft. Starts an edit if none is open.
    pub fn set_field(&mut self, field: ProfileField, value: String) {
        self.begin_edit();
        let draft = self.draft.as_mut().expect("draft opened above");
        match field {
            ProfileField::Username => draft.username = value,
            ProfileField::Name => draft.name = value,
            ProfileField::Lastname => draft.lastname = value,
            ProfileField::Email => draft.email = value,
        }
    }

    /// Whether the draft differs from the baseline
    pub fn is_dirty(&self) -> bool {
        self.draft.as_ref().is_some_and(|d| *d != self.baseline)
    }

    /// Drop the draft and return to Viewing over the original values
    pub fn cancel(&mut self) {
        self.draft = None;
        self.last_error = None;
    }

    /// Send the draft to the server.
    ///
    /// On success the returned profile becomes the new baseline and the
    /// workflow returns to Viewing. On failure the draft stays staged and
    /// the error is recorded. The session is left untouched either way.
    pub async fn save(&mut self, client: &ApiClient, token: &str) -> Result<UserProfile> {
        let draft = match self.draft.clone() {
            Some(draft) => draft,
            None => {
                return Err(Error::Other("no edit in progress".to_string()));
            }
        };

        match client.update_profile(token, &draft).await {
            Ok(updated) => {
                self.baseline = updated.clone();
                self.draft = None;
                self.last_error = None;
                Ok(updated)
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            username: "alice".to_string(),
            name: "Alice".to_string(),
            lastname: "Paz".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[test]
    fn test_starts_viewing() {
        let editor = ProfileEditor::new(profile());
        assert_eq!(editor.state(), EditorState::Viewing);
        assert!(editor.draft().is_none());
    }

    #[test]
    fn test_set_field_stages_into_draft_only() {
        let mut editor = ProfileEditor::new(profile());
        editor.set_field(ProfileField::Email, "new@example.com".to_string());

        assert_eq!(editor.state(), EditorState::Editing);
        assert!(editor.is_dirty());
        assert_eq!(editor.draft().unwrap().email, "new@example.com");
        // Baseline untouched until a save succeeds
        assert_eq!(editor.profile().email, "alice@example.com");
    }

    #[test]
    fn test_cancel_restores_original_values() {
        let mut editor = ProfileEditor::new(profile());
        editor.set_field(ProfileField::Name, "Alicia".to_string());
        editor.set_field(ProfileField::Email, "other@example.com".to_string());

        editor.cancel();
        assert_eq!(editor.state(), EditorState::Viewing);
        assert_eq!(*editor.profile(), profile());
    }

    #[test]
    fn test_unchanged_draft_is_not_dirty() {
        let mut editor = ProfileEditor::new(profile());
        editor.begin_edit();
        assert!(!editor.is_dirty());
        editor.set_field(ProfileField::Username, "alice".to_string());
        assert!(!editor.is_dirty());
    }
}
