//! WimUpdater — list the WIM images in a folder and run updates on them.
//!
//! Thin binary entry point. All logic lives in the `wimupdater-core`
//! and `wimupdater-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("WimUpdater starting");

    // Resolve settings before opening the window so the first frame can
    // render immediately.
    let state = wimupdater_gui::WimUpdaterState::build();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("WimUpdater -- WIM Image Update Manager")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([760.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "WimUpdater",
        options,
        Box::new(|cc| {
            Ok(Box::new(wimupdater_gui::WimUpdaterApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
