/// Image metadata records.
///
/// `ImageInfo` is what the parser pulls out of the imaging tool's report;
/// `ImageRecord` attaches the file it came from. Both are plain values and
/// are never mutated after the scanner hands them to the UI.
use compact_str::CompactString;
use std::path::{Path, PathBuf};

/// Placeholder for any field the parser could not locate.
pub const UNKNOWN: &str = "N/A";

/// Edition metadata of the first image inside a WIM container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// Edition name, e.g. "Windows 11 Pro".
    pub name: CompactString,
    /// Major.minor, e.g. "10.0".
    pub version: CompactString,
    /// Build number, e.g. "22631".
    pub build: CompactString,
}

impl Default for ImageInfo {
    fn default() -> Self {
        Self {
            name: CompactString::const_new(UNKNOWN),
            version: CompactString::const_new(UNKNOWN),
            build: CompactString::const_new(UNKNOWN),
        }
    }
}

impl ImageInfo {
    /// `true` if every field still holds the placeholder.
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN && self.version == UNKNOWN && self.build == UNKNOWN
    }
}

/// One scanned WIM file and its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub name: CompactString,
    pub version: CompactString,
    pub build: CompactString,
    pub file_path: PathBuf,
}

impl ImageRecord {
    pub fn new(info: ImageInfo, file_path: PathBuf) -> Self {
        Self {
            name: info.name,
            version: info.version,
            build: info.build,
            file_path,
        }
    }

    /// File name component of the path, for display and log lines.
    pub fn file_name(&self) -> String {
        display_file_name(&self.file_path)
    }
}

/// File name of `path` as a lossy string, falling back to the whole path.
pub fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
