//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying file info, buffer stats, and
//! the active theme.

use eframe::egui;
use egui::RichText;
use rquill::BrushRole;

use crate::app::AppState;

/// Renders the status panel at the bottom of the window.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let name = state.editor.display_name();
        let modified = if state.editor.is_modified() {
            " (modified)"
        } else {
            ""
        };
        ui.label(RichText::new(format!("{name}{modified}")).strong());

        ui.label(RichText::new("|").strong());
        ui.label(format!(
            "Lines: {} | Chars: {}",
            state.editor.line_count(),
            state.editor.char_count()
        ));

        if let Some(err) = &state.error_message {
            ui.label(RichText::new("|").strong());
            ui.colored_label(state.theme.palette().error, err);
        }

        // Theme readout on the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(accent) = state.theme.brushes().color(BrushRole::AccentBackground) {
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                let swatch = if response.hovered() {
                    rquill::adjust_brightness(accent, 1.2)
                } else {
                    accent
                };
                ui.painter().rect_filled(rect, 2, swatch);
            }
            ui.label(format!("Theme: {}", state.theme.mode().as_str()));
            ui.label(format!(
                "Tint: {:.0}%",
                state.theme.background_tint_opacity() * 100.0
            ));
        });
    });
}
