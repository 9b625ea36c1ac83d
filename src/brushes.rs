//! Brush resources for themed UI surfaces.
//!
//! Replaces string-keyed resource-dictionary lookups with a typed table
//! mapping logical brush roles to owned brush values, built once when the
//! theme context is constructed. Accent application walks a fixed role list
//! and tolerates individual update failures.

use std::collections::HashMap;

use egui::Color32;
use thiserror::Error;

/// Translucent backdrop fill sampling content behind the window, tinted by
/// a luminosity color and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropBrush {
    pub luminosity: Color32,
    pub tint_opacity: f32,
}

/// App background fill: opaque solid, or a translucent backdrop where the
/// platform supports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundBrush {
    Solid(Color32),
    Backdrop(BackdropBrush),
}

impl BackgroundBrush {
    /// Flattened fill color for painters that cannot composite a backdrop.
    pub fn fill_color(&self) -> Color32 {
        match self {
            BackgroundBrush::Solid(color) => *color,
            BackgroundBrush::Backdrop(backdrop) => {
                let alpha = (backdrop.tint_opacity.clamp(0.0, 1.0) * 255.0) as u8;
                crate::color::with_alpha(backdrop.luminosity, alpha)
            }
        }
    }
}

/// Logical roles of the named brushes the theme system owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrushRole {
    // Accent-dependent solid brushes
    AccentBackground,
    AccentDisabled,
    AccentForeground,
    Highlight,
    HighlightAlt,
    ListAccentHigh,
    ListAccentLow,
    ListAccentMedium,
    ListAccentAltHigh,
    ListAccentAltLow,
    ListAccentAltMedium,
    HyperlinkText,
    DialogBorder,
    JumpListBackground,

    /// Reveal-style flyout highlight, recolored on a best-effort basis.
    RevealHighlight,
    /// Dimming overlay painted behind modal dialogs.
    DialogOverlay,
}

/// The fixed list of solid brushes that follow the accent color.
pub const ACCENT_BRUSH_ROLES: [BrushRole; 14] = [
    BrushRole::AccentBackground,
    BrushRole::AccentDisabled,
    BrushRole::AccentForeground,
    BrushRole::Highlight,
    BrushRole::HighlightAlt,
    BrushRole::ListAccentHigh,
    BrushRole::ListAccentLow,
    BrushRole::ListAccentMedium,
    BrushRole::ListAccentAltHigh,
    BrushRole::ListAccentAltLow,
    BrushRole::ListAccentAltMedium,
    BrushRole::HyperlinkText,
    BrushRole::DialogBorder,
    BrushRole::JumpListBackground,
];

/// A brush registered in the table. Reveal brushes carry the same color
/// payload but are a distinct kind, so recoloring one as a solid fails the
/// same way the original dictionary cast did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Brush {
    Solid(Color32),
    Reveal(Color32),
}

impl Brush {
    pub fn color(&self) -> Color32 {
        match self {
            Brush::Solid(color) | Brush::Reveal(color) => *color,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrushError {
    #[error("no brush registered for role {0:?}")]
    Missing(BrushRole),
    #[error("brush for role {0:?} is not a solid brush")]
    NotSolid(BrushRole),
    #[error("brush for role {0:?} is not a reveal brush")]
    NotReveal(BrushRole),
}

/// Typed table of named brushes plus the accent-color resource value.
///
/// Built once at theme-context construction; the UI reads colors from it
/// when painting, the context rewrites it when the accent changes.
#[derive(Debug, Clone)]
pub struct BrushTable {
    accent: Color32,
    entries: HashMap<BrushRole, Brush>,
}

impl BrushTable {
    /// Creates a table with every role registered: accent roles and the
    /// reveal highlight seeded with the accent, the dialog overlay with the
    /// given overlay color.
    pub fn with_defaults(accent: Color32, dialog_overlay: Color32) -> Self {
        let mut entries = HashMap::new();
        for role in ACCENT_BRUSH_ROLES {
            entries.insert(role, Brush::Solid(accent));
        }
        entries.insert(BrushRole::RevealHighlight, Brush::Reveal(accent));
        entries.insert(BrushRole::DialogOverlay, Brush::Solid(dialog_overlay));

        Self { accent, entries }
    }

    /// Current value of the accent-color resource.
    pub fn accent_color(&self) -> Color32 {
        self.accent
    }

    pub(crate) fn set_accent_color(&mut self, color: Color32) {
        self.accent = color;
    }

    /// Color of a brush, if one is registered for the role.
    pub fn color(&self, role: BrushRole) -> Option<Color32> {
        self.entries.get(&role).map(Brush::color)
    }

    /// Registers or replaces a brush. Used by the shell to customize the
    /// table after construction.
    pub fn insert(&mut self, role: BrushRole, brush: Brush) {
        self.entries.insert(role, brush);
    }

    /// Removes a brush from the table.
    pub fn remove(&mut self, role: BrushRole) -> Option<Brush> {
        self.entries.remove(&role)
    }

    /// Recolors a solid brush in place.
    pub fn set_solid_color(&mut self, role: BrushRole, color: Color32) -> Result<(), BrushError> {
        match self.entries.get_mut(&role) {
            Some(Brush::Solid(current)) => {
                *current = color;
                Ok(())
            }
            Some(_) => Err(BrushError::NotSolid(role)),
            None => Err(BrushError::Missing(role)),
        }
    }

    /// Recolors a reveal brush in place.
    pub fn set_reveal_color(&mut self, role: BrushRole, color: Color32) -> Result<(), BrushError> {
        match self.entries.get_mut(&role) {
            Some(Brush::Reveal(current)) => {
                *current = color;
                Ok(())
            }
            Some(_) => Err(BrushError::NotReveal(role)),
            None => Err(BrushError::Missing(role)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_all_accent_roles() {
        let accent = Color32::from_rgb(0, 120, 212);
        let table = BrushTable::with_defaults(accent, Color32::BLACK);
        for role in ACCENT_BRUSH_ROLES {
            assert_eq!(table.color(role), Some(accent), "missing {role:?}");
        }
        assert_eq!(table.color(BrushRole::RevealHighlight), Some(accent));
    }

    #[test]
    fn test_set_solid_rejects_reveal_brush() {
        let mut table = BrushTable::with_defaults(Color32::RED, Color32::BLACK);
        let err = table
            .set_solid_color(BrushRole::RevealHighlight, Color32::GREEN)
            .unwrap_err();
        assert_eq!(err, BrushError::NotSolid(BrushRole::RevealHighlight));
        // Failed update leaves the brush untouched
        assert_eq!(table.color(BrushRole::RevealHighlight), Some(Color32::RED));
    }

    #[test]
    fn test_set_solid_reports_missing_brush() {
        let mut table = BrushTable::with_defaults(Color32::RED, Color32::BLACK);
        table.remove(BrushRole::HyperlinkText);
        let err = table
            .set_solid_color(BrushRole::HyperlinkText, Color32::GREEN)
            .unwrap_err();
        assert_eq!(err, BrushError::Missing(BrushRole::HyperlinkText));
    }

    #[test]
    fn test_backdrop_fill_color_applies_tint_opacity() {
        let brush = BackgroundBrush::Backdrop(BackdropBrush {
            luminosity: Color32::from_rgb(46, 46, 46),
            tint_opacity: 0.5,
        });
        let [r, g, b, a] = brush.fill_color().to_srgba_unmultiplied();
        assert_eq!((r, g, b), (46, 46, 46));
        assert_eq!(a, 127);
    }
}
