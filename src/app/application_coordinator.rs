//! Application-level coordination and workflow management.
//!
//! Handles high-level application operations like file open/save workflows
//! and error handling. File IO failures land in the status bar, never panic.

use std::path::PathBuf;

use crate::app::AppState;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Opens a file picked through the platform file dialog.
    pub fn open_file_dialog(state: &mut AppState) {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Text files", &["txt", "md", "rs", "toml", "json"])
            .add_filter("All files", &["*"]);
        if let Some(dir) = state.editor.file_path().and_then(|p| p.parent()) {
            dialog = dialog.set_directory(dir);
        }

        if let Some(path) = dialog.pick_file() {
            Self::open_file(state, path);
        }
    }

    /// Loads a file into the editor buffer.
    pub fn open_file(state: &mut AppState, path: PathBuf) {
        match state.editor.load_from(path) {
            Ok(()) => {
                state.error_message = None;
                tracing::info!("opened {}", state.editor.display_name());
            }
            Err(e) => {
                state.error_message = Some(format!("Error opening file: {e:#}"));
            }
        }
    }

    /// Saves the buffer to its backing file, or prompts for one.
    pub fn save_file(state: &mut AppState) {
        match state.editor.file_path() {
            Some(path) => {
                let path = path.to_path_buf();
                Self::save_to(state, path);
            }
            None => Self::save_file_as(state),
        }
    }

    /// Saves the buffer to a file picked through the platform file dialog.
    pub fn save_file_as(state: &mut AppState) {
        let picked = rfd::FileDialog::new()
            .set_file_name(state.editor.display_name())
            .save_file();

        if let Some(path) = picked {
            Self::save_to(state, path);
        }
    }

    fn save_to(state: &mut AppState, path: PathBuf) {
        match state.editor.save_to(path) {
            Ok(()) => {
                state.error_message = None;
                tracing::info!("saved {}", state.editor.display_name());
            }
            Err(e) => {
                state.error_message = Some(format!("Error saving file: {e:#}"));
            }
        }
    }
}
