//! Centralized application state for the Quill editor.
//!
//! Composes focused state components: the editor buffer, the theme context
//! (owned here, at the composition root), the window chrome it writes into,
//! and the modal settings dialog state.

use rquill::{DialogTheming, ThemeContext, ThemeMode, WindowChrome};

use crate::app::{EditorState, ThemeCoordinator};

/// State of the modal settings dialog.
///
/// The dialog keeps its own requested theme so an open dialog is retinted
/// when the app theme changes underneath it.
#[derive(Debug)]
pub struct DialogState {
    /// Whether the dialog is currently shown
    pub open: bool,
    mode: ThemeMode,
}

impl DialogState {
    pub fn new(mode: ThemeMode) -> Self {
        Self { open: false, mode }
    }

    /// The dialog's own requested theme.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }
}

impl DialogTheming for DialogState {
    fn set_theme(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }
}

/// Main application state composed of focused state components.
pub struct AppState {
    /// Text buffer and file state
    pub editor: EditorState,

    /// Theme context owning theme mode, accent, opacity, and brushes
    pub theme: ThemeContext,

    /// Window chrome the theme context writes into
    pub chrome: WindowChrome,

    /// Modal settings dialog state
    pub dialog: DialogState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates application state with the theme context loaded from the
    /// default settings store.
    pub fn new() -> Self {
        Self::with_theme(ThemeCoordinator::build_context())
    }

    /// Creates application state around an existing theme context.
    pub fn with_theme(theme: ThemeContext) -> Self {
        let mode = theme.mode();
        Self {
            editor: EditorState::new(),
            theme,
            chrome: WindowChrome::for_mode(mode),
            dialog: DialogState::new(mode),
            error_message: None,
        }
    }
}
