/// Bottom status bar -- current phase and list statistics.
use crate::state::{AppPhase, AppState};
use crate::theme::WimUpdaterTheme;
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState, theme: &WimUpdaterTheme) {
    ui.horizontal(|ui| {
        match state.phase {
            AppPhase::Idle => {
                ui.label(egui::RichText::new("Ready").size(12.0).color(theme.text_muted));
            }
            AppPhase::Scanning => {
                ui.spinner();
                ui.label(
                    egui::RichText::new("Scanning")
                        .size(12.0)
                        .color(theme.text_primary),
                );
            }
            AppPhase::Updating => {
                ui.spinner();
                ui.label(
                    egui::RichText::new(format!("Updating {}%", state.progress_percent))
                        .size(12.0)
                        .color(theme.accent),
                );
            }
        }

        if !state.images.is_empty() {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{} image(s)", state.images.len()))
                    .size(12.0)
                    .color(theme.text_secondary),
            );
        }

        if let Some(duration) = state.scan_duration {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("scan {:.1}s", duration.as_secs_f64()))
                    .size(12.0)
                    .color(theme.text_muted),
            );
        }

        if state.scan_was_cancelled {
            ui.separator();
            ui.label(
                egui::RichText::new("partial results")
                    .size(12.0)
                    .color(theme.warning),
            );
        }

        if state.scan_error_count > 0 {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{} failed", state.scan_error_count))
                    .size(12.0)
                    .color(theme.danger),
            );
        }
    });
}
