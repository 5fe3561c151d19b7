/// WimUpdater GUI — egui-based desktop frontend.
///
/// This crate contains all UI code. Scanning, metadata extraction and the
/// update runner live in `wimupdater-core`.
pub mod app;
pub mod panels;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{WimUpdaterApp, WimUpdaterState};
