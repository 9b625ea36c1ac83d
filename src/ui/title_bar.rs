//! Custom title bar rendering
//!
//! The window runs undecorated; this panel draws the caption, the file
//! controls, and the window buttons using the title-bar palette from the
//! current window chrome.

use eframe::egui;
use egui::{Color32, RichText, ViewportCommand};

use crate::app::AppState;
use crate::ui::UiAction;

const TITLE_BAR_HEIGHT: f32 = 32.0;

/// Renders the custom title bar.
///
/// # Arguments
/// * `ctx` - The egui context
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<UiAction>` - User interaction result
pub fn render_title_bar(ctx: &egui::Context, state: &AppState) -> Option<UiAction> {
    let mut action = None;
    let palette = state.chrome.title_bar.clone();

    let focused = ctx.input(|i| i.viewport().focused.unwrap_or(true));
    let (background, foreground) = if focused {
        (palette.background, palette.button_foreground)
    } else {
        (palette.inactive_background, palette.button_inactive_foreground)
    };
    // An inactive title bar keeps the chrome backdrop visible underneath
    let fill = if background == Color32::TRANSPARENT {
        palette.background
    } else {
        background
    };

    egui::TopBottomPanel::top("title_bar")
        .exact_height(TITLE_BAR_HEIGHT)
        .frame(egui::Frame::default().fill(fill))
        .show(ctx, |ui| {
            // Register the drag region first so the buttons added on top of
            // it keep click priority
            let response = ui.interact(
                ui.max_rect(),
                egui::Id::new("title_bar_drag"),
                egui::Sense::click_and_drag(),
            );
            if response.drag_started() {
                ui.ctx().send_viewport_cmd(ViewportCommand::StartDrag);
            }
            if response.double_clicked() {
                let maximized = ui.ctx().input(|i| i.viewport().maximized.unwrap_or(false));
                ui.ctx()
                    .send_viewport_cmd(ViewportCommand::Maximized(!maximized));
            }

            // Button hover/pressed fills come from the title-bar palette
            let visuals = ui.visuals_mut();
            visuals.widgets.inactive.weak_bg_fill = palette.button_background;
            visuals.widgets.hovered.weak_bg_fill = palette.button_hover_background;
            visuals.widgets.active.weak_bg_fill = palette.button_pressed_background;

            ui.horizontal_centered(|ui| {
                if ui
                    .button(RichText::new("📁 Open").color(foreground))
                    .clicked()
                {
                    action = Some(UiAction::OpenFileRequested);
                }
                if ui
                    .button(RichText::new("💾 Save").color(foreground))
                    .clicked()
                {
                    action = Some(UiAction::SaveFileRequested);
                }
                if ui
                    .button(RichText::new("⚙ Settings").color(foreground))
                    .clicked()
                {
                    action = Some(UiAction::SettingsToggled);
                }

                ui.separator();

                let modified_marker = if state.editor.is_modified() { "●" } else { "" };
                ui.label(
                    RichText::new(format!(
                        "{} {} - Quill",
                        state.editor.display_name(),
                        modified_marker
                    ))
                    .color(foreground),
                );

                // Window buttons on the right
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(RichText::new("✕").color(foreground)).clicked() {
                        ui.ctx().send_viewport_cmd(ViewportCommand::Close);
                    }
                    let maximized = ui.ctx().input(|i| i.viewport().maximized.unwrap_or(false));
                    if ui.button(RichText::new("🗖").color(foreground)).clicked() {
                        ui.ctx()
                            .send_viewport_cmd(ViewportCommand::Maximized(!maximized));
                    }
                    if ui.button(RichText::new("🗕").color(foreground)).clicked() {
                        ui.ctx().send_viewport_cmd(ViewportCommand::Minimized(true));
                    }
                });
            });
        });

    action
}
