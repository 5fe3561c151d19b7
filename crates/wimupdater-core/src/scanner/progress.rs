/// Scan progress reporting — messages sent from the scan thread to the UI
/// thread via a crossbeam channel.
use crate::model::ImageRecord;
use std::path::PathBuf;
use std::time::Duration;

/// Progress updates sent from the scan thread to the UI.
///
/// Every scan ends with exactly one terminal message, either
/// [`ScanProgress::Complete`] or [`ScanProgress::Cancelled`].
#[derive(Debug)]
pub enum ScanProgress {
    /// The scan thread is running; the UI should enter scan mode.
    Started { folder: PathBuf },
    /// A human-readable log line.
    Log(String),
    /// One image could not be queried. The scan continues.
    FileFailed { path: PathBuf, message: String },
    /// Every matching file was processed.
    Complete {
        records: Vec<ImageRecord>,
        duration: Duration,
        error_count: u64,
    },
    /// The scan was cancelled; `records` holds what was gathered so far.
    Cancelled { records: Vec<ImageRecord> },
}

impl ScanProgress {
    /// The log line this message should produce, if any.
    pub fn log_line(&self) -> Option<String> {
        match self {
            Self::Log(line) => Some(line.clone()),
            Self::FileFailed { path, message } => Some(format!(
                "Failed to query '{}': {message}",
                crate::model::image::display_file_name(path)
            )),
            _ => None,
        }
    }

    /// `true` for `Complete` and `Cancelled`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete { .. } | Self::Cancelled { .. })
    }
}
