/// Metadata extraction — asks the imaging tool about a WIM file and turns
/// its text report into an [`ImageRecord`].
///
/// The tool is reached through the [`ImageInfoSource`] trait so the scanner
/// can be driven by something other than a real `dism` process (tests, or a
/// different tool with the same report format).
pub mod dism;
pub mod parse;

pub use dism::DismTool;
pub use parse::parse_wim_info;

use crate::error::WimError;
use crate::model::ImageRecord;
use std::path::Path;

/// Anything that can produce a `/Get-WimInfo`-style text report for a file.
pub trait ImageInfoSource: Send + Sync {
    /// Return the raw report text for `path`.
    ///
    /// Blocking; called from the scanner thread.
    fn query(&self, path: &Path) -> Result<String, WimError>;
}

/// Query `source` for `path` and parse the report.
///
/// A failed query is an error for this one file only. A report that cannot
/// be understood is not an error: the record simply keeps its placeholders.
pub fn extract(source: &dyn ImageInfoSource, path: &Path) -> Result<ImageRecord, WimError> {
    let report = source.query(path)?;
    let info = parse_wim_info(&report);
    if info.is_unknown() {
        tracing::debug!("No index 1 metadata found for {}", path.display());
    }
    Ok(ImageRecord::new(info, path.to_path_buf()))
}
