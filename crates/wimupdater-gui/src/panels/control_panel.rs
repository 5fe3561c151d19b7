/// Control panel -- start/cancel buttons, status line and overall progress.
use crate::state::{AppPhase, AppState};
use crate::theme::WimUpdaterTheme;
use egui::Ui;

/// Draw the update controls.
pub fn control_panel(ui: &mut Ui, state: &mut AppState, theme: &WimUpdaterTheme) {
    ui.horizontal(|ui| {
        let start = ui
            .add_enabled(state.can_start_update(), theme.primary_button("Start Update"))
            .on_disabled_hover_text("Select at least one WIM file and wait for the scan to finish");
        if start.clicked() {
            state.start_update();
        }

        let cancel = ui.add_enabled(state.is_busy(), theme.danger_button("Cancel"));
        if cancel.clicked() {
            match state.phase {
                AppPhase::Updating => state.cancel_update(),
                AppPhase::Scanning => state.cancel_scan(),
                AppPhase::Idle => {}
            }
        }

        ui.add_space(8.0);
        ui.label(egui::RichText::new(&state.status_message).color(theme.text_secondary));
    });

    ui.add_space(6.0);
    ui.add(
        egui::ProgressBar::new(f32::from(state.progress_percent) / 100.0)
            .show_percentage()
            .fill(theme.accent),
    );
}
