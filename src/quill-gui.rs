//! Quill Text Editor GUI Application
//!
//! A small desktop text editor built with the egui framework. The editor
//! runs undecorated with a custom-drawn title bar so window chrome colors
//! follow the app theme. Features:
//! - Light/Dark/follow-system theme modes with persistent preferences
//! - System-derived or custom accent color propagated to named brushes
//! - Translucent app background with adjustable tint opacity

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `ui/` - Title bar, editor panel, settings dialog, status bar
//! - the `rquill` library - theme context, palettes, brush table, settings

use eframe::egui;
use std::path::PathBuf;

mod app;
mod ui;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use ui::UiAction;

/// Main application entry point that initializes and launches the Quill editor GUI.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments to check for initial file to load
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([400.0, 300.0])
            .with_decorations(false)
            .with_transparent(true)
            .with_title("Quill"),
        ..Default::default()
    };

    eframe::run_native(
        "Quill",
        options,
        Box::new(move |_cc| Ok(Box::new(QuillApp::new(initial_file)))),
    )
}

/// The main Quill editor application.
///
/// Delegates most functionality to coordinators:
/// - `ThemeCoordinator` builds the theme context and applies it each frame
/// - `ApplicationCoordinator` handles file open/save workflows
struct QuillApp {
    /// Centralized application state
    state: AppState,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl QuillApp {
    /// Creates a new editor instance with the theme context loaded from
    /// persistent storage. Optionally accepts an initial file path to load
    /// on startup.
    fn new(initial_file: Option<PathBuf>) -> Self {
        Self {
            state: AppState::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::OpenFileRequested => {
                ApplicationCoordinator::open_file_dialog(&mut self.state);
            }
            UiAction::SaveFileRequested => {
                ApplicationCoordinator::save_file(&mut self.state);
            }
            UiAction::SaveFileAsRequested => {
                ApplicationCoordinator::save_file_as(&mut self.state);
            }
            UiAction::SettingsToggled => {
                self.state.dialog.open = !self.state.dialog.open;
            }
        }
    }

    /// Checks global keyboard shortcuts.
    fn shortcut_action(&self, ctx: &egui::Context) -> Option<UiAction> {
        let open = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
        let save = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
        let save_as = egui::KeyboardShortcut::new(
            egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
            egui::Key::S,
        );

        ctx.input_mut(|i| {
            if i.consume_shortcut(&save_as) {
                Some(UiAction::SaveFileAsRequested)
            } else if i.consume_shortcut(&save) {
                Some(UiAction::SaveFileRequested)
            } else if i.consume_shortcut(&open) {
                Some(UiAction::OpenFileRequested)
            } else {
                None
            }
        })
    }
}

impl eframe::App for QuillApp {
    /// Keeps the window backdrop translucent where the theme asks for it.
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    /// Main update loop that renders all UI panels and handles application state.
    ///
    /// 1. Apply the current theme to visuals and window chrome
    /// 2. Load initial file if specified via command line
    /// 3. Render title bar, status bar, settings dialog, editor panel
    /// 4. Handle panel interactions and keyboard shortcuts
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply current theme (recomputes chrome and re-applies accent)
        ThemeCoordinator::apply_current_theme(ctx, &mut self.state);

        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, path);
        }

        let mut action = self.shortcut_action(ctx);

        if let Some(title_action) = ui::title_bar::render_title_bar(ctx, &self.state) {
            action = Some(title_action);
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui::status_bar::render_status_bar(ui, &self.state);
        });

        ui::settings_dialog::render_settings_dialog(ctx, &mut self.state);

        ui::editor_panel::render_editor_panel(ctx, &mut self.state);

        if let Some(action) = action {
            self.handle_action(action);
        }
    }
}
