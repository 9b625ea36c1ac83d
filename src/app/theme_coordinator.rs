//! Theme construction and per-frame application.
//!
//! Builds the theme context at startup from the persisted settings file and
//! applies the current theme to the egui context and window chrome.

use rquill::{
    DialogTheming, FileSettingsStore, StaticSystemColors, ThemeConfig, ThemeContext, ThemeEvent,
};

use crate::app::AppState;

const APP_NAME: &str = "quill";

/// Coordinates theme context construction and application.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Builds the theme context from the default settings file.
    ///
    /// Falls back to a settings file in the working directory when no
    /// config directory exists. No theme pin: the full Light/Dark/system
    /// surface is exposed.
    pub fn build_context() -> ThemeContext {
        let path = FileSettingsStore::default_path(APP_NAME)
            .unwrap_or_else(|| std::path::PathBuf::from("quill-settings.json"));
        tracing::debug!("theme settings at {}", path.display());

        let mut theme = ThemeContext::new(
            ThemeConfig::default(),
            Box::new(FileSettingsStore::open(path)),
            Box::new(StaticSystemColors::default()),
        );

        theme.subscribe(Box::new(|event| match event {
            ThemeEvent::ThemeChanged(mode) => tracing::info!("theme changed to {mode:?}"),
            ThemeEvent::AccentColorChanged(color) => {
                tracing::debug!("accent color changed to {color:?}")
            }
            ThemeEvent::BackgroundChanged(_) => tracing::debug!("background brush changed"),
        }));

        theme
    }

    /// Applies the current theme to the egui context and window chrome.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &mut AppState) {
        let mut visuals = if state.theme.mode().is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        let dialog: Option<&mut dyn DialogTheming> = if state.dialog.open {
            Some(&mut state.dialog)
        } else {
            None
        };

        state.theme.apply_theme(&mut state.chrome, &mut visuals, dialog);
        ctx.set_visuals(visuals);
    }
}
