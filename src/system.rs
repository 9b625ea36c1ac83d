//! System theme and accent color sources.
//!
//! The operating system is an external collaborator: the theme context only
//! samples it through this trait and receives change notifications through
//! `ThemeContext::on_system_theme_changed` / `on_system_accent_changed`.
//! Platform glue lives outside this crate.

use egui::Color32;

use crate::theme::ThemeMode;

/// Stock accent used when no platform accent source is wired up.
pub const DEFAULT_ACCENT: Color32 = Color32::from_rgb(0, 120, 212);

/// Source of the system's current accent color and theme.
pub trait SystemColorSource {
    fn accent_color(&self) -> Color32;
    fn system_theme(&self) -> ThemeMode;
}

/// Fixed-value system source.
///
/// Used as the default when no platform integration exists, and by tests
/// that need a known system accent.
#[derive(Debug, Clone, Copy)]
pub struct StaticSystemColors {
    accent: Color32,
    theme: ThemeMode,
}

impl StaticSystemColors {
    pub fn new(accent: Color32, theme: ThemeMode) -> Self {
        Self { accent, theme }
    }
}

impl Default for StaticSystemColors {
    fn default() -> Self {
        Self {
            accent: DEFAULT_ACCENT,
            theme: ThemeMode::Dark,
        }
    }
}

impl SystemColorSource for StaticSystemColors {
    fn accent_color(&self) -> Color32 {
        self.accent
    }

    fn system_theme(&self) -> ThemeMode {
        self.theme
    }
}
