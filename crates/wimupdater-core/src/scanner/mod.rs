/// Scanner module — finds WIM files in a folder and collects their metadata
/// on a background thread.
///
/// The scan thread owns nothing the UI touches. It reports through a
/// bounded channel and checks a shared cancel flag before every file; the
/// imaging tool call for the current file always runs to completion.
pub mod discovery;
pub mod progress;

use crate::extractor::{self, ImageInfoSource};
use crate::model::image::display_file_name;
use progress::ScanProgress;

use crossbeam_channel::{Receiver, Sender};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{info, warn};

/// Maximum number of progress messages that may queue up in the channel.
///
/// A scan sends at most a few messages per file, and the UI drains the
/// channel every frame, so the scanner never waits on a live UI.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Handle to a running or completed scan. Allows cancellation and
/// receiving progress updates.
pub struct ScanHandle {
    /// Receiver for progress updates from the scan thread.
    pub progress_rx: Receiver<ScanProgress>,
    /// Folder being scanned.
    pub folder: PathBuf,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the scan thread.
    thread: Option<thread::JoinHandle<()>>,
}

impl ScanHandle {
    /// Request the scan to stop before its next file.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// Cancel the scan and block until its thread has exited.
    ///
    /// Pending messages are discarded while waiting so the scan thread can
    /// never stall on a full channel.
    pub fn cancel_and_wait(mut self) {
        self.cancel();
        while self.progress_rx.recv().is_ok() {}
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("Scanner thread panicked while shutting down");
            }
        }
    }
}

/// Settings a scan needs besides the folder itself.
#[derive(Clone)]
pub struct ScanOptions {
    /// Image extension without the dot.
    pub extension: String,
    /// Warn in the log when the process is not elevated.
    pub check_elevation: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: crate::config::DEFAULT_IMAGE_EXTENSION.to_string(),
            check_elevation: true,
        }
    }
}

/// Start a new scan of `folder` on a background thread.
///
/// Returns a `ScanHandle` for receiving progress and requesting cancellation.
pub fn start_scan(
    folder: PathBuf,
    source: Arc<dyn ImageInfoSource>,
    options: ScanOptions,
) -> ScanHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<ScanProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();
    let folder_clone = folder.clone();

    let thread = thread::Builder::new()
        .name("wimupdater-scanner".into())
        .spawn(move || {
            run_scan(
                folder_clone,
                source.as_ref(),
                &options,
                &progress_tx,
                &cancel_clone,
            );
        })
        .expect("failed to spawn scanner thread");

    ScanHandle {
        progress_rx,
        folder,
        cancel_flag,
        thread: Some(thread),
    }
}

/// Run a complete scan on the calling thread.
///
/// Always ends by sending exactly one terminal message. Send failures are
/// ignored: a dropped receiver just means nobody is listening any more.
pub fn run_scan(
    folder: PathBuf,
    source: &dyn ImageInfoSource,
    options: &ScanOptions,
    progress_tx: &Sender<ScanProgress>,
    cancel_flag: &AtomicBool,
) {
    let start = Instant::now();
    let log = |line: String| {
        let _ = progress_tx.send(ScanProgress::Log(line));
    };

    info!("Starting scan of {}", folder.display());
    let _ = progress_tx.send(ScanProgress::Started {
        folder: folder.clone(),
    });
    log(format!("Scanning '{}' for WIM files...", folder.display()));

    if options.check_elevation && !crate::platform::is_elevated() {
        log("Not running as administrator; the imaging tool may refuse to read images.".into());
    }

    let files = match discovery::list_image_files(&folder, &options.extension) {
        Ok(files) => files,
        Err(err) => {
            warn!("{err}");
            log(format!("Error while scanning folder: {err}"));
            let _ = progress_tx.send(ScanProgress::Complete {
                records: Vec::new(),
                duration: start.elapsed(),
                error_count: 1,
            });
            return;
        }
    };

    if files.is_empty() {
        log("No WIM files to scan.".into());
        let _ = progress_tx.send(ScanProgress::Complete {
            records: Vec::new(),
            duration: start.elapsed(),
            error_count: 0,
        });
        return;
    }

    let total = files.len();
    let mut records = Vec::with_capacity(total);
    let mut error_count: u64 = 0;

    for (i, path) in files.into_iter().enumerate() {
        if cancel_flag.load(Ordering::Relaxed) {
            info!("Scan cancelled after {i} of {total} files");
            log("Scan cancelled by user.".into());
            let _ = progress_tx.send(ScanProgress::Cancelled { records });
            return;
        }

        log(format!(
            "({}/{total}) Querying '{}'...",
            i + 1,
            display_file_name(&path)
        ));

        match extractor::extract(source, &path) {
            Ok(record) => records.push(record),
            Err(err) => {
                error_count += 1;
                warn!("{err}");
                let _ = progress_tx.send(ScanProgress::FileFailed {
                    path,
                    message: err.to_string(),
                });
            }
        }
    }

    let duration = start.elapsed();
    info!(
        "Scan complete: {} of {total} images read in {duration:?}",
        records.len()
    );
    let _ = progress_tx.send(ScanProgress::Complete {
        records,
        duration,
        error_count,
    });
}
