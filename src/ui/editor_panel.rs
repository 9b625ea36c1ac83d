//! Editor panel UI rendering
//!
//! The central text buffer, painted over the themed background brush.

use eframe::egui;

use crate::app::AppState;

/// Renders the central editor panel.
///
/// The panel fill comes from the computed background brush: opaque solid,
/// or the backdrop's luminosity color at its tint opacity when translucency
/// is in effect.
pub fn render_editor_panel(ctx: &egui::Context, state: &mut AppState) {
    let fill = state.chrome.background.fill_color();
    let text_color = state.theme.palette().text;

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(fill).inner_margin(egui::Margin::same(8)))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let response = ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::multiline(&mut state.editor.text)
                        .frame(false)
                        .text_color(text_color)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    state.editor.mark_modified();
                }
            });
        });
}
