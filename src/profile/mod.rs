//! Profile self-service

pub mod editor;

pub use editor::{EditorState, ProfileEditor, ProfileField};
