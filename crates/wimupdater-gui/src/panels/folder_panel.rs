/// Folder panel -- choose the folder whose WIM files are listed.
use crate::state::{AppPhase, AppState};
use crate::theme::WimUpdaterTheme;
use egui::Ui;

/// Draw the folder picker row.
pub fn folder_panel(ui: &mut Ui, state: &mut AppState, theme: &WimUpdaterTheme) {
    ui.heading("WIM folder");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        // A running scan is superseded by a new pick; an update is not.
        let can_pick = state.phase != AppPhase::Updating;
        let pick = ui
            .add_enabled(can_pick, theme.primary_button("Select Folder..."))
            .on_disabled_hover_text("Cannot change folder while an update is running");
        if pick.clicked() {
            let mut dialog =
                rfd::FileDialog::new().set_title("Select folder containing WIM files");
            if let Some(ref current) = state.selected_folder {
                dialog = dialog.set_directory(current);
            }
            if let Some(folder) = dialog.pick_folder() {
                tracing::info!("Folder selected: {}", folder.display());
                state.select_folder(folder);
            }
        }

        match state.selected_folder {
            Some(ref folder) => {
                ui.label(
                    egui::RichText::new(folder.display().to_string())
                        .color(theme.text_primary),
                );
            }
            None => {
                ui.label(egui::RichText::new("No folder selected").color(theme.text_muted));
            }
        }
    });
}
