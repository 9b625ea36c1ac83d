//! Application-level modules for the Quill editor.
//!
//! This module contains the main application coordinators and centralized state management.

mod app_state;
mod application_coordinator;
mod editor_state;
mod theme_coordinator;

pub use app_state::{AppState, DialogState};
pub use application_coordinator::ApplicationCoordinator;
pub use editor_state::EditorState;
pub use theme_coordinator::ThemeCoordinator;
