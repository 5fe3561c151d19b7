/// Folder discovery — lists the image files directly inside a folder.
///
/// Non-recursive: images in subfolders are not picked up. Entries come back
/// in directory-listing order, which is whatever the OS returns.
use crate::error::WimError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// List regular files in `folder` whose extension equals `extension`
/// (case-insensitive, without the leading dot).
pub fn list_image_files(folder: &Path, extension: &str) -> Result<Vec<PathBuf>, WimError> {
    let folder_error = |source| WimError::FolderAccess {
        path: folder.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder).map_err(folder_error)? {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!("Skipping unreadable entry in {}: {err}", folder.display());
                continue;
            }
        };

        let path = entry.path();
        if !has_extension(&path, extension) {
            continue;
        }
        // Follows symlinks so a linked image still counts.
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => files.push(path),
            Ok(_) => {}
            Err(err) => debug!("Skipping {}: {err}", path.display()),
        }
    }

    Ok(files)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
