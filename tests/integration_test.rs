use anyhow::Result;
use egui::Color32;
use rquill::{
    dialog_overlay_color, keys, BackgroundBrush, BrushRole, FileSettingsStore, SettingsStore,
    StaticSystemColors, ThemeConfig, ThemeContext, ThemeEvent, ThemeMode, ThemePalette,
    TitleBarTheme, WindowChrome, ACCENT_BRUSH_ROLES,
};
use std::cell::RefCell;
use std::env;
use std::fs;
use std::rc::Rc;

fn temp_settings_path(name: &str) -> std::path::PathBuf {
    env::temp_dir().join(name)
}

fn context_on(store: FileSettingsStore) -> ThemeContext {
    ThemeContext::new(
        ThemeConfig::default(),
        Box::new(store),
        Box::new(StaticSystemColors::default()),
    )
}

#[test]
fn test_theme_settings_persist_across_sessions() -> Result<()> {
    let path = temp_settings_path("quill_theme_persist_test.json");
    let _ = fs::remove_file(&path);

    // First session: change everything away from the defaults
    {
        let mut theme = context_on(FileSettingsStore::open(path.clone()));
        theme.set_use_system_theme(false);
        theme.set_theme_mode(ThemeMode::Light);
        theme.set_use_system_accent(false);
        theme.set_accent_color(Color32::from_rgb(200, 60, 30));
        theme.set_custom_accent_color(Color32::from_rgb(200, 60, 30));
        theme.set_background_tint_opacity(0.42);
    }

    // The settings file exists and holds the individual keys
    let store = FileSettingsStore::open(path.clone());
    assert_eq!(store.get_string(keys::REQUESTED_THEME).as_deref(), Some("Light"));
    assert!(store.get_string(keys::APP_ACCENT_COLOR).is_some());

    // Second session: everything is restored
    let theme = context_on(store);
    assert_eq!(theme.mode(), ThemeMode::Light);
    assert!(!theme.use_system_theme());
    assert!(!theme.use_system_accent());
    assert_eq!(theme.accent_color(), Color32::from_rgb(200, 60, 30));
    assert_eq!(theme.custom_accent_color(), Color32::from_rgb(200, 60, 30));
    assert_eq!(theme.background_tint_opacity(), 0.42);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_corrupt_settings_file_falls_back_to_defaults() -> Result<()> {
    let path = temp_settings_path("quill_theme_corrupt_test.json");
    fs::write(&path, "{ not json")?;

    let theme = context_on(FileSettingsStore::open(path.clone()));
    assert_eq!(theme.mode(), ThemeMode::Dark);
    assert!(theme.use_system_theme());
    assert_eq!(theme.background_tint_opacity(), rquill::DEFAULT_TINT_OPACITY);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_full_theme_application_flow() -> Result<()> {
    let path = temp_settings_path("quill_theme_apply_test.json");
    let _ = fs::remove_file(&path);

    let mut theme = context_on(FileSettingsStore::open(path.clone()));
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    theme.subscribe(Box::new(move |e| sink.borrow_mut().push(e.clone())));

    // Switch to light mode with a custom accent and a translucent background
    theme.set_use_system_theme(false);
    theme.set_theme_mode(ThemeMode::Light);
    theme.set_use_system_accent(false);
    theme.set_accent_color(Color32::from_rgb(10, 130, 80));
    theme.set_background_tint_opacity(0.6);

    let mut chrome = WindowChrome::for_mode(ThemeMode::Dark);
    let mut visuals = egui::Visuals::light();
    theme.apply_theme(&mut chrome, &mut visuals, None);

    // Chrome follows the light palette table
    assert_eq!(chrome.title_bar, TitleBarTheme::for_mode(ThemeMode::Light));
    match chrome.background {
        BackgroundBrush::Backdrop(backdrop) => {
            assert_eq!(
                backdrop.luminosity,
                ThemePalette::for_mode(ThemeMode::Light).background
            );
            assert!((backdrop.tint_opacity - 0.6).abs() < 1e-6);
        }
        other => panic!("expected a backdrop brush, got {other:?}"),
    }

    // Every accent brush picked up the new color
    for role in ACCENT_BRUSH_ROLES {
        assert_eq!(
            theme.brushes().color(role),
            Some(Color32::from_rgb(10, 130, 80)),
            "role {role:?}"
        );
    }
    assert_eq!(
        theme.brushes().color(BrushRole::DialogOverlay),
        Some(dialog_overlay_color(ThemeMode::Light))
    );

    // The notifications fired in order: theme, accent, background
    let events = events.borrow();
    assert!(events.contains(&ThemeEvent::ThemeChanged(ThemeMode::Light)));
    assert!(events.contains(&ThemeEvent::AccentColorChanged(Color32::from_rgb(10, 130, 80))));
    assert!(events
        .iter()
        .any(|e| matches!(e, ThemeEvent::BackgroundChanged(_))));

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_pinned_dark_build_keeps_property_surface() -> Result<()> {
    let path = temp_settings_path("quill_theme_pinned_test.json");
    let _ = fs::remove_file(&path);

    let mut theme = ThemeContext::new(
        ThemeConfig {
            forced_mode: Some(ThemeMode::Dark),
            ..Default::default()
        },
        Box::new(FileSettingsStore::open(path.clone())),
        Box::new(StaticSystemColors::default()),
    );

    // Mode requests and follow-system requests are ignored, but the rest of
    // the property surface keeps working.
    theme.set_theme_mode(ThemeMode::Light);
    theme.set_use_system_theme(true);
    assert_eq!(theme.mode(), ThemeMode::Dark);
    assert!(!theme.use_system_theme());

    theme.set_use_system_accent(false);
    theme.set_accent_color(Color32::from_rgb(90, 90, 200));
    assert_eq!(theme.accent_color(), Color32::from_rgb(90, 90, 200));

    fs::remove_file(&path)?;
    Ok(())
}
