//! Color conversion helpers shared by the theme system.
//!
//! Persisted colors use `#AARRGGBB` hex strings; `#RRGGBB` is accepted on
//! input for hand-edited settings files.

use egui::Color32;

/// Parses a hex color string into a `Color32`.
///
/// Accepts `#RRGGBB` (opaque) and `#AARRGGBB`. Returns `None` for anything
/// else so callers can fall back to their defaults.
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let hex = hex.trim().trim_start_matches('#');

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        8 => {
            let a = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let r = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let g = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let b = u8::from_str_radix(&hex[6..8], 16).ok()?;
            Some(Color32::from_rgba_unmultiplied(r, g, b, a))
        }
        _ => None,
    }
}

/// Converts a hex color string to a `Color32`, falling back to black.
///
/// Convenience for palette constants where a parse failure is a typo,
/// not user data.
pub fn hex_to_color32(hex: &str) -> Color32 {
    parse_hex(hex).unwrap_or(Color32::BLACK)
}

/// Formats a color as an `#AARRGGBB` hex string for persistence.
pub fn color32_to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b)
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb_hex() {
        assert_eq!(parse_hex("#2E2E2E"), Some(Color32::from_rgb(46, 46, 46)));
        assert_eq!(parse_hex("f0f0f0"), Some(Color32::from_rgb(240, 240, 240)));
    }

    #[test]
    fn test_parse_argb_hex() {
        let color = parse_hex("#99000000").unwrap();
        assert_eq!(color.to_srgba_unmultiplied(), [0, 0, 0, 0x99]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#GGGGGG"), None);
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Color32::from_rgba_unmultiplied(0, 120, 212, 255);
        assert_eq!(parse_hex(&color32_to_hex(color)), Some(color));
    }

    #[test]
    fn test_with_alpha() {
        let dimmed = with_alpha(Color32::WHITE, 0x99);
        assert_eq!(dimmed.to_srgba_unmultiplied(), [255, 255, 255, 0x99]);
    }
}
