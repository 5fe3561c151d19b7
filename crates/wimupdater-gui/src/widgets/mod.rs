/// UI widgets for WimUpdater.
pub mod image_row;
pub mod status_bar;
pub mod toolbar;
