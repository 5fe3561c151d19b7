/// Top bar -- branding and privilege badge.
use crate::state::AppState;
use crate::theme::WimUpdaterTheme;
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &AppState, theme: &WimUpdaterTheme) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("WimUpdater")
                .size(18.0)
                .strong()
                .color(theme.accent),
        );
        ui.label(
            egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                .size(12.0)
                .color(theme.text_muted),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.elevated {
                ui.label(
                    egui::RichText::new("Administrator")
                        .size(12.0)
                        .color(theme.success),
                );
            } else {
                ui.label(
                    egui::RichText::new("Not elevated")
                        .size(12.0)
                        .color(theme.warning),
                )
                .on_hover_text("DISM needs administrator rights to read image metadata");
            }
        });
    });
}
