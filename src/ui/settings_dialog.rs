//! Modal settings dialog
//!
//! Theme and accent controls: theme mode, follow-system toggles, custom
//! accent picker, and the background tint opacity slider. The content
//! behind the dialog is dimmed with the dialog overlay brush.

use eframe::egui;
use egui::{Color32, RichText};
use rquill::{BrushRole, ThemeMode};

use crate::app::AppState;

/// Renders the modal settings dialog when it is open.
pub fn render_settings_dialog(ctx: &egui::Context, state: &mut AppState) {
    if !state.dialog.open {
        return;
    }

    // Dim the content behind the dialog
    let overlay = state
        .theme
        .brushes()
        .color(BrushRole::DialogOverlay)
        .unwrap_or(Color32::from_rgba_unmultiplied(0, 0, 0, 153));
    ctx.layer_painter(egui::LayerId::new(
        egui::Order::Middle,
        egui::Id::new("settings_dim_overlay"),
    ))
    .rect_filled(ctx.screen_rect(), 0, overlay);

    let accent = state.theme.accent_color();
    let mut open = state.dialog.open;

    // The dialog carries its own requested theme, retinted by apply_theme
    // while it is open.
    let dialog_fill = rquill::ThemePalette::for_mode(state.dialog.mode()).panel_background;

    egui::Window::new("Settings")
        .open(&mut open)
        .frame(egui::Frame::window(&ctx.style()).fill(dialog_fill))
        .collapsible(false)
        .resizable(false)
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.heading("Theme");

            let mut follow_system = state.theme.use_system_theme();
            if ui
                .checkbox(&mut follow_system, "Follow system theme")
                .changed()
            {
                state.theme.set_use_system_theme(follow_system);
            }

            if !state.theme.use_system_theme() {
                let current = state.theme.mode();
                ui.horizontal(|ui| {
                    for mode in [ThemeMode::Light, ThemeMode::Dark] {
                        if ui
                            .selectable_label(current == mode, mode.as_str())
                            .clicked()
                        {
                            state.theme.set_theme_mode(mode);
                        }
                    }
                });
            }

            ui.separator();
            ui.heading("Accent color");

            let mut use_system_accent = state.theme.use_system_accent();
            if ui
                .checkbox(&mut use_system_accent, "Use system accent color")
                .changed()
            {
                state.theme.set_use_system_accent(use_system_accent);
            }

            if !state.theme.use_system_accent() {
                let mut custom = state.theme.custom_accent_color();
                ui.horizontal(|ui| {
                    if ui.color_edit_button_srgba(&mut custom).changed() {
                        state.theme.set_custom_accent_color(custom);
                        state.theme.set_accent_color(custom);
                    }
                    ui.label(RichText::new("Custom accent").color(accent));
                });
            }

            ui.separator();
            ui.heading("Background");

            let mut opacity = state.theme.background_tint_opacity();
            let slider = egui::Slider::new(&mut opacity, 0.0..=1.0)
                .text("Tint opacity")
                .step_by(0.01);
            if ui.add(slider).changed() {
                state.theme.set_background_tint_opacity(opacity);
            }
            ui.label(
                RichText::new("Full opacity disables window translucency")
                    .color(state.theme.palette().text_dim)
                    .small(),
            );
        });

    state.dialog.open = open;
}
