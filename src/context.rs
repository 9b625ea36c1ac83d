//! Theme context: the application-owned facade over theme state.
//!
//! Owns the requested theme mode, accent color, custom accent override, and
//! background tint opacity. Every setter persists its key to the settings
//! store; value changes are announced to an observer list. The context also
//! owns the typed brush table and performs the two apply operations: theme
//! to window chrome, and accent color to the brush table.
//!
//! All state lives on the GUI thread; callbacks are serialized by the UI
//! framework, so no locking is needed.

use egui::Color32;

use crate::brushes::{
    BackdropBrush, BackgroundBrush, BrushRole, BrushTable, ACCENT_BRUSH_ROLES,
};
use crate::color::{color32_to_hex, parse_hex};
use crate::settings::{keys, read_value, write_value, SettingsStore};
use crate::system::SystemColorSource;
use crate::theme::{
    apply_visuals, dialog_overlay_color, ThemeMode, ThemePalette, TitleBarTheme, WindowChrome,
};

/// Default background tint opacity when nothing is persisted.
pub const DEFAULT_TINT_OPACITY: f64 = 0.75;

/// Change notifications raised by the theme context.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeEvent {
    ThemeChanged(ThemeMode),
    BackgroundChanged(BackgroundBrush),
    AccentColorChanged(Color32),
}

/// Observer callback registered with [`ThemeContext::subscribe`].
pub type ThemeObserver = Box<dyn FnMut(&ThemeEvent)>;

/// Anything that hosts a modal dialog whose theme must track the app theme.
pub trait DialogTheming {
    fn set_theme(&mut self, mode: ThemeMode);
}

/// Static configuration for the theme context.
///
/// A product build that pins the app to one theme sets `forced_mode`; the
/// full theming mechanism stays in place underneath the pin.
#[derive(Debug, Clone, Copy)]
pub struct ThemeConfig {
    /// When set, theme mode is pinned: mode changes and follow-system
    /// requests are ignored.
    pub forced_mode: Option<ThemeMode>,
    /// Whether the platform can composite a translucent backdrop.
    pub backdrop_supported: bool,
    /// Restricted embedding context (widget host); translucency is
    /// unavailable there.
    pub embedded: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            forced_mode: None,
            backdrop_supported: true,
            embedded: false,
        }
    }
}

/// Theme state owned by the application's composition root.
pub struct ThemeContext {
    config: ThemeConfig,
    store: Box<dyn SettingsStore>,
    system: Box<dyn SystemColorSource>,

    mode: ThemeMode,
    use_system_theme: bool,
    use_system_accent: bool,
    accent: Color32,
    custom_accent: Color32,
    tint_opacity: f64,

    // Reused across background recomputes so translucency changes retint
    // the existing brush instead of building a new one.
    backdrop: Option<BackdropBrush>,
    brushes: BrushTable,
    observers: Vec<ThemeObserver>,
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("mode", &self.mode)
            .field("use_system_theme", &self.use_system_theme)
            .field("use_system_accent", &self.use_system_accent)
            .field("accent", &self.accent)
            .field("tint_opacity", &self.tint_opacity)
            .finish_non_exhaustive()
    }
}

impl ThemeContext {
    /// Builds a theme context from persisted settings.
    ///
    /// Missing or malformed values fall back to defaults: follow the system
    /// theme and accent, tint opacity 0.75. A configured `forced_mode`
    /// overrides both the persisted mode and the follow-system flag.
    pub fn new(
        config: ThemeConfig,
        store: Box<dyn SettingsStore>,
        system: Box<dyn SystemColorSource>,
    ) -> Self {
        let use_system_theme = if config.forced_mode.is_some() {
            false
        } else {
            read_value::<bool>(store.as_ref(), keys::USE_SYSTEM_THEME).unwrap_or(true)
        };

        let mode = if let Some(forced) = config.forced_mode {
            forced
        } else if use_system_theme {
            system.system_theme()
        } else {
            store
                .get_string(keys::REQUESTED_THEME)
                .and_then(|s| ThemeMode::parse(&s))
                .map(|m| match m {
                    ThemeMode::System => system.system_theme(),
                    other => other,
                })
                .unwrap_or(ThemeMode::Dark)
        };

        let use_system_accent =
            read_value::<bool>(store.as_ref(), keys::USE_SYSTEM_ACCENT_COLOR).unwrap_or(true);

        let mut accent = system.accent_color();
        if !use_system_accent {
            if let Some(stored) = store
                .get_string(keys::APP_ACCENT_COLOR)
                .and_then(|s| parse_hex(&s))
            {
                accent = stored;
            }
        }

        let custom_accent = store
            .get_string(keys::CUSTOM_ACCENT_COLOR)
            .and_then(|s| parse_hex(&s))
            .unwrap_or(accent);

        let tint_opacity = read_value::<f64>(store.as_ref(), keys::BACKGROUND_TINT_OPACITY)
            .filter(|v| (0.0..=1.0).contains(v))
            .unwrap_or(DEFAULT_TINT_OPACITY);

        let brushes = BrushTable::with_defaults(accent, dialog_overlay_color(mode));

        Self {
            config,
            store,
            system,
            mode,
            use_system_theme,
            use_system_accent,
            accent,
            custom_accent,
            tint_opacity,
            backdrop: None,
            brushes,
            observers: Vec::new(),
        }
    }

    // ===== Queries =====

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Whether the app follows the system theme. Always false when the mode
    /// is pinned by configuration.
    pub fn use_system_theme(&self) -> bool {
        if self.config.forced_mode.is_some() {
            false
        } else {
            self.use_system_theme
        }
    }

    pub fn use_system_accent(&self) -> bool {
        self.use_system_accent
    }

    pub fn accent_color(&self) -> Color32 {
        self.accent
    }

    pub fn custom_accent_color(&self) -> Color32 {
        self.custom_accent
    }

    pub fn background_tint_opacity(&self) -> f64 {
        self.tint_opacity
    }

    pub fn palette(&self) -> ThemePalette {
        ThemePalette::for_mode(self.mode)
    }

    pub fn brushes(&self) -> &BrushTable {
        &self.brushes
    }

    /// Mutable brush table access for the shell to customize registered
    /// brushes after construction.
    pub fn brushes_mut(&mut self) -> &mut BrushTable {
        &mut self.brushes
    }

    // ===== Observers =====

    /// Registers an observer for theme change notifications.
    pub fn subscribe(&mut self, observer: ThemeObserver) {
        self.observers.push(observer);
    }

    fn notify(&mut self, event: ThemeEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    // ===== Mutations =====

    /// Sets the requested theme mode.
    ///
    /// A `System` request resolves against the system source first. The
    /// persisted key is written and `ThemeChanged` raised only when the
    /// resolved mode actually differs from the current one.
    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        let mut mode = match mode {
            ThemeMode::System => self.system.system_theme(),
            other => other,
        };
        if let Some(forced) = self.config.forced_mode {
            mode = forced;
        }
        if self.mode != mode {
            self.mode = mode;
            self.store
                .set_string(keys::REQUESTED_THEME, mode.as_str().to_string());
            self.store.flush();
            self.notify(ThemeEvent::ThemeChanged(mode));
        }
    }

    /// Enables or disables following the system theme.
    ///
    /// Under a pinned mode the caller's intent is ignored and `false` is
    /// persisted, matching builds that ship with one theme.
    pub fn set_use_system_theme(&mut self, value: bool) {
        if let Some(forced) = self.config.forced_mode {
            self.use_system_theme = false;
            write_value(self.store.as_mut(), keys::USE_SYSTEM_THEME, &false);
            self.set_theme_mode(forced);
            return;
        }

        self.use_system_theme = value;
        write_value(self.store.as_mut(), keys::USE_SYSTEM_THEME, &value);
        if value {
            let system_mode = self.system.system_theme();
            self.set_theme_mode(system_mode);
        }
    }

    /// Enables or disables following the system accent color.
    ///
    /// Enabling immediately resamples the system accent; disabling leaves
    /// the current accent in place.
    pub fn set_use_system_accent(&mut self, value: bool) {
        self.use_system_accent = value;
        if value {
            let accent = self.system.accent_color();
            self.set_accent_color(accent);
        }
        write_value(self.store.as_mut(), keys::USE_SYSTEM_ACCENT_COLOR, &value);
    }

    /// Sets the active accent color, persists it, and notifies observers.
    pub fn set_accent_color(&mut self, color: Color32) {
        self.accent = color;
        self.store
            .set_string(keys::APP_ACCENT_COLOR, color32_to_hex(color));
        self.store.flush();
        self.notify(ThemeEvent::AccentColorChanged(color));
    }

    /// Sets the user-chosen custom accent. Persisted, no notification.
    pub fn set_custom_accent_color(&mut self, color: Color32) {
        self.custom_accent = color;
        self.store
            .set_string(keys::CUSTOM_ACCENT_COLOR, color32_to_hex(color));
        self.store.flush();
    }

    /// Sets the background tint opacity, clamped to [0, 1].
    ///
    /// Notifies observers with a freshly computed background brush.
    pub fn set_background_tint_opacity(&mut self, opacity: f64) {
        self.tint_opacity = opacity.clamp(0.0, 1.0);
        let brush = self.background_brush();
        self.notify(ThemeEvent::BackgroundChanged(brush));
        write_value(
            self.store.as_mut(),
            keys::BACKGROUND_TINT_OPACITY,
            &self.tint_opacity,
        );
    }

    // ===== System notifications (called by platform glue) =====

    /// System accent changed. Adopted only while following the system accent.
    pub fn on_system_accent_changed(&mut self, color: Color32) {
        if self.use_system_accent {
            self.set_accent_color(color);
        }
    }

    /// System theme changed. Adopted only while following the system theme.
    pub fn on_system_theme_changed(&mut self, mode: ThemeMode) {
        if self.use_system_theme() {
            self.set_theme_mode(mode);
        }
    }

    // ===== Derived operations =====

    /// Computes the app background brush for the current mode and opacity.
    ///
    /// Fully opaque tint, missing backdrop support, or a restricted
    /// embedding context all yield an opaque solid; otherwise the cached
    /// backdrop brush is retinted in place.
    pub fn background_brush(&mut self) -> BackgroundBrush {
        let base = self.palette().background;

        if self.tint_opacity >= 0.99 || !self.config.backdrop_supported || self.config.embedded {
            return BackgroundBrush::Solid(base);
        }

        let tint = self.tint_opacity as f32;
        let backdrop = self.backdrop.get_or_insert(BackdropBrush {
            luminosity: base,
            tint_opacity: tint,
        });
        backdrop.luminosity = base;
        backdrop.tint_opacity = tint;
        BackgroundBrush::Backdrop(*backdrop)
    }

    /// Applies the current theme to window chrome and the visual tree.
    ///
    /// Recomputes the background brush, propagates the palette to egui
    /// visuals, recolors the title bar and the dialog dimming overlay,
    /// retints an open modal dialog if one is active, and re-applies the
    /// accent color.
    pub fn apply_theme(
        &mut self,
        chrome: &mut WindowChrome,
        visuals: &mut egui::Visuals,
        active_dialog: Option<&mut dyn DialogTheming>,
    ) {
        chrome.background = self.background_brush();

        apply_visuals(&self.palette(), visuals);

        chrome.title_bar = TitleBarTheme::for_mode(self.mode);

        let overlay = dialog_overlay_color(self.mode);
        if let Err(e) = self.brushes.set_solid_color(BrushRole::DialogOverlay, overlay) {
            tracing::warn!("failed to recolor dialog overlay: {e}");
        }

        if let Some(dialog) = active_dialog {
            dialog.set_theme(self.mode);
        }

        self.apply_accent();
    }

    /// Applies the active accent color to the brush table.
    ///
    /// No-op when the accent resource already holds this color. Individual
    /// brush failures are logged and skipped so the remaining brushes still
    /// update; the reveal highlight is best-effort.
    pub fn apply_accent(&mut self) {
        let color = self.accent;
        if self.brushes.accent_color() == color {
            return;
        }
        self.brushes.set_accent_color(color);

        for role in ACCENT_BRUSH_ROLES {
            if let Err(e) = self.brushes.set_solid_color(role, color) {
                tracing::warn!("failed to apply accent color to brush {role:?}: {e}");
            }
        }

        let _ = self
            .brushes
            .set_reveal_color(BrushRole::RevealHighlight, color);
    }
}
