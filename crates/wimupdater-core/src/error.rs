/// Error taxonomy for the core crate.
///
/// Per-file extraction failures and folder access failures are recovered by
/// the scanner and turned into log lines. Selection index errors are caller
/// defects and are returned to the caller unchanged.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WimError {
    /// The imaging tool could not be started at all.
    #[error("failed to run imaging tool for {}: {source}", .path.display())]
    ToolLaunch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The imaging tool ran but exited with a non-zero status.
    #[error("imaging tool failed for {} (exit code {code}): {stderr}", .path.display())]
    ToolFailed {
        path: PathBuf,
        code: i32,
        stderr: String,
    },

    /// The scan folder could not be listed.
    #[error("cannot read folder {}: {source}", .path.display())]
    FolderAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A selection operation referenced an item that does not exist.
    #[error("selection index {index} out of range (list has {len} items)")]
    SelectionOutOfRange { index: usize, len: usize },
}

impl WimError {
    /// `true` for errors that only affect a single image file.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::ToolLaunch { .. } | Self::ToolFailed { .. })
    }
}
