/// Image list panel -- scanned WIM images with per-item and bulk selection.
use crate::state::{AppPhase, AppState};
use crate::theme::WimUpdaterTheme;
use crate::widgets::image_row::image_row;
use egui::Ui;
use wimupdater_core::model::SelectAllState;

/// Draw the list header and the scrollable image rows.
pub fn image_list_panel(ui: &mut Ui, state: &mut AppState, theme: &WimUpdaterTheme) {
    let editable = state.phase != AppPhase::Updating;

    ui.horizontal(|ui| {
        let select_all = state.select_all_state();
        let mut checked = select_all == SelectAllState::All;
        let toggled = ui
            .add_enabled(
                editable && select_all != SelectAllState::Empty,
                egui::Checkbox::new(&mut checked, "Select all")
                    .indeterminate(select_all == SelectAllState::Partial),
            )
            .clicked();
        if toggled {
            // A partial selection resolves to "everything".
            state.set_all(select_all != SelectAllState::All);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(state.selection_summary())
                    .color(theme.text_secondary),
            );
        });
    });

    ui.add_space(4.0);
    ui.separator();

    if state.phase == AppPhase::Scanning {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new(&state.status_message).color(theme.text_secondary));
        });
    }

    if state.images.is_empty() {
        if state.phase != AppPhase::Scanning {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                let hint = if state.selected_folder.is_some() {
                    "No WIM file information to display."
                } else {
                    "Choose a folder to scan for WIM files."
                };
                ui.label(egui::RichText::new(hint).color(theme.text_muted));
            });
        }
        return;
    }

    let mut clicked_row = None;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, item) in state.images.items().iter().enumerate() {
                if image_row(ui, item, editable, theme) {
                    clicked_row = Some(index);
                }
                ui.separator();
            }
        });

    if let Some(index) = clicked_row {
        if let Err(e) = state.toggle_item(index) {
            tracing::error!("{e}");
        }
    }
}
