pub mod brushes;
pub mod color;
pub mod context;
pub mod settings;
pub mod system;
pub mod theme;

// Export theme types
pub use theme::{
    apply_visuals, dialog_overlay_color, ThemeMode, ThemePalette, TitleBarTheme, WindowChrome,
};

// Export brush table types
pub use brushes::{
    BackdropBrush, BackgroundBrush, Brush, BrushError, BrushRole, BrushTable, ACCENT_BRUSH_ROLES,
};

// Export the theme context facade
pub use context::{
    DialogTheming, ThemeConfig, ThemeContext, ThemeEvent, ThemeObserver, DEFAULT_TINT_OPACITY,
};

// Export settings stores
pub use settings::{keys, FileSettingsStore, MemorySettingsStore, SettingsStore};

// Export system color seam
pub use system::{StaticSystemColors, SystemColorSource, DEFAULT_ACCENT};

// Export color helpers
pub use color::{adjust_brightness, color32_to_hex, hex_to_color32, parse_hex, with_alpha};
