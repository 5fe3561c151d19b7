/// Log panel -- timestamped activity lines, newest at the bottom.
use crate::state::AppState;
use crate::theme::WimUpdaterTheme;
use egui::Ui;

pub fn log_panel(ui: &mut Ui, state: &AppState, theme: &WimUpdaterTheme) {
    ui.add_space(4.0);
    ui.heading("Log");
    ui.add_space(4.0);

    egui::Frame::default()
        .fill(theme.log_background)
        .stroke(egui::Stroke::new(1.0, theme.separator))
        .inner_margin(6.0)
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in &state.log {
                        ui.label(
                            egui::RichText::new(line)
                                .monospace()
                                .size(12.0)
                                .color(theme.text_secondary),
                        );
                    }
                });
        });
}
