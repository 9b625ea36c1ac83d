//! UI panel rendering subsystem
//!
//! This module contains all UI rendering logic for the Quill editor:
//! - Title bar (custom window chrome, file controls, window buttons)
//! - Editor panel (the text buffer, painted over the themed background)
//! - Settings dialog (modal theme and accent controls)
//! - Status bar (file info, caret stats, theme readout)

pub mod editor_panel;
pub mod settings_dialog;
pub mod status_bar;
pub mod title_bar;

/// Interaction results bubbled up from panels to the application loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    OpenFileRequested,
    SaveFileRequested,
    SaveFileAsRequested,
    SettingsToggled,
}
