/// One row of the image list: checkbox, edition name and a detail line.
use crate::theme::WimUpdaterTheme;
use egui::Ui;
use wimupdater_core::model::SelectableItem;

/// Draw a row. Returns `true` if the checkbox was clicked.
pub fn image_row(
    ui: &mut Ui,
    item: &SelectableItem,
    enabled: bool,
    theme: &WimUpdaterTheme,
) -> bool {
    let mut included = item.included;
    let record = &item.record;

    let response = ui.horizontal(|ui| {
        let clicked = ui
            .add_enabled(enabled, egui::Checkbox::without_text(&mut included))
            .clicked();

        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(record.name.as_str())
                    .size(14.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.label(
                egui::RichText::new(format!(
                    "{}  |  Version {}  |  Build {}  |  {}",
                    record.file_name(),
                    record.version,
                    record.build,
                    item.size_display
                ))
                .size(12.0)
                .color(theme.text_muted),
            );
        });

        clicked
    });

    response
        .response
        .on_hover_text(record.file_path.display().to_string());
    response.inner
}
