//! Theme definitions for the Quill editor.
//!
//! This module provides the theme mode enum, the built-in light and dark
//! palettes, the fixed title-bar chrome palettes, and the application of a
//! palette to egui visuals.
//!
//! # Examples
//!
//! ```
//! use rquill::theme::{ThemeMode, ThemePalette};
//!
//! let palette = ThemePalette::for_mode(ThemeMode::Dark);
//! println!("Dark background: {:?}", palette.background);
//! ```

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::brushes::BackgroundBrush;

/// Requested theme mode.
///
/// `System` means "follow the system theme" and only appears as a request;
/// resolved palettes are always light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    /// Follow the system theme.
    System,
}

impl ThemeMode {
    /// Stable string form used for the persisted `requested_theme` key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    /// Parses the persisted string form. Unknown values yield `None` so the
    /// caller falls back to its default.
    pub fn parse(s: &str) -> Option<ThemeMode> {
        match s {
            "Light" => Some(ThemeMode::Light),
            "Dark" => Some(ThemeMode::Dark),
            "System" => Some(ThemeMode::System),
            _ => None,
        }
    }

    /// Whether this mode uses the dark palette. `System` requests resolve
    /// before palettes are looked up, so it counts as dark here.
    pub fn is_dark(&self) -> bool {
        !matches!(self, ThemeMode::Light)
    }
}

/// Color palette for one theme mode, covering the accent-independent UI.
#[derive(Debug, Clone)]
pub struct ThemePalette {
    /// App background base color, also the backdrop luminosity color.
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    pub text: Color32,
    pub text_dim: Color32,

    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    pub error: Color32,
    pub warning: Color32,
}

impl ThemePalette {
    /// Returns the built-in palette for a theme mode.
    pub fn for_mode(mode: ThemeMode) -> ThemePalette {
        if mode.is_dark() {
            dark_palette()
        } else {
            light_palette()
        }
    }
}

fn dark_palette() -> ThemePalette {
    ThemePalette {
        background: Color32::from_rgb(46, 46, 46),
        panel_background: Color32::from_rgb(39, 39, 39),
        extreme_background: Color32::from_rgb(16, 16, 16),

        text: Color32::from_rgb(255, 255, 255),
        text_dim: Color32::from_rgb(160, 160, 160),

        selection: Color32::from_rgb(50, 80, 120),
        hover: Color32::from_rgb(70, 70, 70),
        border: Color32::from_rgb(100, 100, 100),

        error: Color32::from_rgb(231, 76, 60),
        warning: Color32::from_rgb(243, 156, 18),
    }
}

fn light_palette() -> ThemePalette {
    ThemePalette {
        background: Color32::from_rgb(240, 240, 240),
        panel_background: Color32::from_rgb(248, 248, 248),
        extreme_background: Color32::from_rgb(255, 255, 255),

        text: Color32::from_rgb(0, 0, 0),
        text_dim: Color32::from_rgb(120, 120, 120),

        selection: Color32::from_rgb(180, 200, 255),
        hover: Color32::from_rgb(220, 220, 220),
        border: Color32::from_rgb(160, 160, 160),

        error: Color32::from_rgb(200, 40, 40),
        warning: Color32::from_rgb(230, 120, 20),
    }
}

/// Applies a palette to egui visuals.
///
/// The caller picks `Visuals::light()` or `Visuals::dark()` as the base so
/// widget defaults not covered here stay consistent with the mode.
pub fn apply_visuals(palette: &ThemePalette, visuals: &mut egui::Visuals) {
    visuals.panel_fill = palette.panel_background;
    visuals.window_fill = palette.panel_background;
    visuals.extreme_bg_color = palette.extreme_background;
    visuals.faint_bg_color = palette.hover;

    visuals.override_text_color = Some(palette.text);

    visuals.selection.bg_fill = palette.selection;

    visuals.widgets.noninteractive.bg_fill = palette.panel_background;
    visuals.widgets.inactive.bg_fill = palette.hover;
    visuals.widgets.hovered.bg_fill = palette.hover;
    visuals.widgets.active.bg_fill = palette.selection;

    visuals.error_fg_color = palette.error;
    visuals.warn_fg_color = palette.warning;
}

/// Title-bar chrome palette for one theme mode.
///
/// The title bar is custom drawn, so its caption and button colors are
/// themed independently of the window content.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleBarTheme {
    pub background: Color32,

    // Active window button colors
    pub button_foreground: Color32,
    pub button_background: Color32,
    pub button_hover_foreground: Color32,
    pub button_hover_background: Color32,
    pub button_pressed_foreground: Color32,
    pub button_pressed_background: Color32,

    // Inactive window colors
    pub inactive_foreground: Color32,
    pub inactive_background: Color32,
    pub button_inactive_foreground: Color32,
    pub button_inactive_background: Color32,
}

impl TitleBarTheme {
    /// Returns the fixed title-bar palette for a theme mode.
    pub fn for_mode(mode: ThemeMode) -> TitleBarTheme {
        if mode.is_dark() {
            TitleBarTheme {
                background: Color32::from_rgb(45, 45, 45),

                button_foreground: Color32::WHITE,
                button_background: Color32::TRANSPARENT,
                button_hover_foreground: Color32::WHITE,
                button_hover_background: Color32::from_rgb(90, 90, 90),
                button_pressed_foreground: Color32::WHITE,
                button_pressed_background: Color32::from_rgb(120, 120, 120),

                inactive_foreground: Color32::GRAY,
                inactive_background: Color32::TRANSPARENT,
                button_inactive_foreground: Color32::GRAY,
                button_inactive_background: Color32::TRANSPARENT,
            }
        } else {
            TitleBarTheme {
                background: Color32::from_rgb(210, 210, 210),

                button_foreground: Color32::BLACK,
                button_background: Color32::TRANSPARENT,
                button_hover_foreground: Color32::BLACK,
                button_hover_background: Color32::from_rgb(180, 180, 180),
                button_pressed_foreground: Color32::BLACK,
                button_pressed_background: Color32::from_rgb(150, 150, 150),

                inactive_foreground: Color32::from_rgb(105, 105, 105),
                inactive_background: Color32::TRANSPARENT,
                button_inactive_foreground: Color32::from_rgb(105, 105, 105),
                button_inactive_background: Color32::TRANSPARENT,
            }
        }
    }
}

/// Dimming overlay color painted behind modal dialogs.
pub fn dialog_overlay_color(mode: ThemeMode) -> Color32 {
    if mode.is_dark() {
        Color32::from_rgba_unmultiplied(0, 0, 0, 153)
    } else {
        Color32::from_rgba_unmultiplied(255, 255, 255, 153)
    }
}

/// Window chrome sink the theme context writes into when applying a theme.
///
/// Owned by the application shell; the title bar renderer and background
/// painter read from it every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowChrome {
    pub background: BackgroundBrush,
    pub title_bar: TitleBarTheme,
}

impl WindowChrome {
    /// Creates chrome seeded for a theme mode with an opaque background.
    pub fn for_mode(mode: ThemeMode) -> WindowChrome {
        WindowChrome {
            background: BackgroundBrush::Solid(ThemePalette::for_mode(mode).background),
            title_bar: TitleBarTheme::for_mode(mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_string_round_trip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(ThemeMode::parse("Sepia"), None);
    }

    #[test]
    fn test_title_bar_palettes_differ() {
        let dark = TitleBarTheme::for_mode(ThemeMode::Dark);
        let light = TitleBarTheme::for_mode(ThemeMode::Light);
        assert_ne!(dark, light);
        assert_eq!(dark.background, Color32::from_rgb(45, 45, 45));
        assert_eq!(light.background, Color32::from_rgb(210, 210, 210));
    }

    #[test]
    fn test_dialog_overlay_alpha() {
        assert_eq!(
            dialog_overlay_color(ThemeMode::Dark).to_srgba_unmultiplied(),
            [0, 0, 0, 153]
        );
        assert_eq!(
            dialog_overlay_color(ThemeMode::Light).to_srgba_unmultiplied(),
            [255, 255, 255, 153]
        );
    }
}
