/// WimUpdater Core — WIM discovery, metadata extraction, batch updates
/// and the selection model.
///
/// This crate contains all business logic with zero UI dependencies.
/// Every long-running operation runs on its own background thread and
/// reports through a channel, so any frontend (GUI, CLI) can drive it.
///
/// # Modules
///
/// - [`model`] — Image records, the selection list, and size formatting.
/// - [`extractor`] — Runs the imaging tool and parses its text report.
/// - [`scanner`] — Background folder scan with cancellation.
/// - [`updater`] — Background batch update with progress reporting.
/// - [`platform`] — Elevation checks for the imaging tool.
/// - [`config`] — Runtime settings (defaults plus environment overrides).
/// - [`error`] — The crate-wide error type.
pub mod config;
pub mod error;
pub mod extractor;
pub mod model;
pub mod platform;
pub mod scanner;
pub mod updater;

pub use error::WimError;
