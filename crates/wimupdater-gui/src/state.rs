/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. The scan and
/// update threads communicate via channels; state updates happen in
/// `process_scan_messages()` / `process_update_messages()`, which run once
/// per frame on the UI thread. The selection list is only ever touched here.
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use wimupdater_core::config::Settings;
use wimupdater_core::extractor::{DismTool, ImageInfoSource};
use wimupdater_core::model::{ImageRecord, SelectAllState, SelectionList};
use wimupdater_core::scanner::progress::ScanProgress;
use wimupdater_core::scanner::{ScanHandle, ScanOptions};
use wimupdater_core::updater::progress::{UpdateOutcome, UpdateProgress};
use wimupdater_core::updater::{UpdateHandle, UpdatePlan};
use wimupdater_core::WimError;

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Nothing running; the image list (if any) can be edited.
    Idle,
    /// A folder scan is in progress.
    Scanning,
    /// An update run is in progress; the list is locked.
    Updating,
}

/// Maximum number of progress messages drained from a channel per frame.
///
/// Prevents a backlog (e.g. after the window was hidden) from blocking the
/// render thread for a perceptible duration when it is eventually shown again.
const MAX_MESSAGES_PER_FRAME: usize = 300;

/// Maximum log lines retained; the oldest are dropped first.
pub const MAX_LOG_LINES: usize = 1_000;

/// Status line shown while nothing is running.
pub const STATUS_IDLE: &str = "Waiting...";

/// All application state.
pub struct AppState {
    pub settings: Settings,
    source: Arc<dyn ImageInfoSource>,
    /// Warn at scan start when the process is not elevated.
    pub check_elevation: bool,
    /// Whether the process holds administrator rights.
    pub elevated: bool,

    // ── Scan ───────────────────────────────────────────
    pub phase: AppPhase,
    pub selected_folder: Option<PathBuf>,
    pub scan_handle: Option<ScanHandle>,
    pub scan_error_count: u64,
    pub scan_duration: Option<Duration>,
    /// True if the most recent scan was cancelled (partial results).
    pub scan_was_cancelled: bool,

    // ── Images ─────────────────────────────────────────
    pub images: SelectionList,

    // ── Update ─────────────────────────────────────────
    pub update_handle: Option<UpdateHandle>,
    pub progress_percent: u8,
    pub status_message: String,
    pub last_update_outcome: Option<UpdateOutcome>,

    // ── Log ────────────────────────────────────────────
    pub log: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create initial application state using the real imaging tool.
    pub fn new() -> Self {
        let settings = Settings::from_env();
        let source = Arc::new(DismTool::new(settings.tool_program.clone()));
        Self::with_source(settings, source)
    }

    /// Create state backed by an arbitrary metadata source.
    pub fn with_source(settings: Settings, source: Arc<dyn ImageInfoSource>) -> Self {
        let mut state = Self {
            settings,
            source,
            check_elevation: true,
            elevated: wimupdater_core::platform::is_elevated(),
            phase: AppPhase::Idle,
            selected_folder: None,
            scan_handle: None,
            scan_error_count: 0,
            scan_duration: None,
            scan_was_cancelled: false,
            images: SelectionList::new(),
            update_handle: None,
            progress_percent: 0,
            status_message: STATUS_IDLE.to_string(),
            last_update_outcome: None,
            log: VecDeque::with_capacity(MAX_LOG_LINES),
        };
        state.add_log("WimUpdater started.");
        state.add_log("Choose a folder to scan for WIM files.");
        state
    }

    /// Append a timestamped line to the log.
    pub fn add_log(&mut self, message: impl AsRef<str>) {
        let timestamp = chrono::Local::now().format("%H:%M:%S");
        if self.log.len() >= MAX_LOG_LINES {
            self.log.pop_front();
        }
        self.log
            .push_back(format!("[{timestamp}] {}", message.as_ref()));
    }

    // ── Scan ───────────────────────────────────────────

    /// Start scanning `folder`, replacing any scan already running.
    ///
    /// Ignored while an update is running. The previous scan (if any) is
    /// cancelled and joined before the new one starts, so two scans never
    /// read the file system at the same time.
    pub fn select_folder(&mut self, folder: PathBuf) {
        if self.phase == AppPhase::Updating {
            tracing::debug!("Folder selection ignored while updating");
            return;
        }

        if let Some(previous) = self.scan_handle.take() {
            tracing::info!("Superseding scan of {}", previous.folder.display());
            previous.cancel_and_wait();
        }

        // Reset scan state.
        self.phase = AppPhase::Scanning;
        self.selected_folder = Some(folder.clone());
        self.scan_error_count = 0;
        self.scan_duration = None;
        self.scan_was_cancelled = false;
        self.images.clear();
        self.progress_percent = 0;
        self.status_message = "Scanning WIM file information...".to_string();

        let options = ScanOptions {
            extension: self.settings.image_extension.clone(),
            check_elevation: self.check_elevation,
        };
        let handle = wimupdater_core::scanner::start_scan(folder, self.source.clone(), options);
        self.scan_handle = Some(handle);
    }

    /// Ask the running scan to stop after its current file.
    pub fn cancel_scan(&mut self) {
        if let Some(ref handle) = self.scan_handle {
            handle.cancel();
        }
    }

    /// Process pending scan progress messages. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint (new data arrived).
    pub fn process_scan_messages(&mut self) -> bool {
        let mut repaint = false;
        let mut messages_this_frame = 0usize;

        while messages_this_frame < MAX_MESSAGES_PER_FRAME {
            let msg = match self.scan_handle.as_ref() {
                Some(handle) => match handle.progress_rx.try_recv() {
                    Ok(m) => m,
                    Err(_) => break,
                },
                None => break,
            };
            messages_this_frame += 1;
            repaint = true;

            if let Some(line) = msg.log_line() {
                self.add_log(line);
            }

            match msg {
                ScanProgress::Started { folder } => {
                    tracing::debug!("Scan thread started for {}", folder.display());
                    self.phase = AppPhase::Scanning;
                }
                ScanProgress::Log(_) => {}
                ScanProgress::FileFailed { .. } => {
                    self.scan_error_count += 1;
                }
                ScanProgress::Complete {
                    records,
                    duration,
                    error_count,
                } => {
                    self.scan_error_count = error_count;
                    self.scan_duration = Some(duration);
                    self.finish_scan(records);
                    return true;
                }
                ScanProgress::Cancelled { records } => {
                    self.scan_was_cancelled = true;
                    self.finish_scan(records);
                    return true;
                }
            }
        }

        repaint
    }

    /// Publish scan results and leave scan mode.
    fn finish_scan(&mut self, records: Vec<ImageRecord>) {
        if records.is_empty() {
            self.add_log("No WIM file information to display.");
        } else if self.scan_was_cancelled {
            self.add_log(format!(
                "Scan stopped early; showing {} partial result(s).",
                records.len()
            ));
        } else {
            self.add_log(format!("Loaded {} WIM file(s).", records.len()));
        }
        self.images.add_all(records);

        self.phase = AppPhase::Idle;
        self.progress_percent = 0;
        self.status_message = STATUS_IDLE.to_string();
        self.scan_handle = None;
    }

    // ── Selection ──────────────────────────────────────

    /// Flip the inclusion flag of one image. No-op while updating.
    pub fn toggle_item(&mut self, index: usize) -> Result<(), WimError> {
        if self.phase == AppPhase::Updating {
            return Ok(());
        }
        self.images.toggle(index)?;
        Ok(())
    }

    /// Include or exclude every image. No-op while updating.
    pub fn set_all(&mut self, included: bool) {
        if self.phase == AppPhase::Updating || self.images.is_empty() {
            return;
        }
        self.images.set_all(included);
        self.add_log(if included {
            "All files selected"
        } else {
            "All files deselected"
        });
    }

    /// "Selected: x/y" for the list header.
    pub fn selection_summary(&self) -> String {
        let (selected, total) = self.images.counts();
        format!("Selected: {selected}/{total}")
    }

    pub fn select_all_state(&self) -> SelectAllState {
        self.images.select_all_state()
    }

    // ── Update ─────────────────────────────────────────

    /// `true` when the start button should be enabled.
    pub fn can_start_update(&self) -> bool {
        self.phase == AppPhase::Idle && self.images.counts().0 > 0
    }

    /// Start updating the currently selected images.
    ///
    /// The selection is snapshotted; toggling items afterwards does not
    /// affect the running batch. Returns `false` if nothing was started.
    pub fn start_update(&mut self) -> bool {
        if self.phase != AppPhase::Idle {
            tracing::debug!("Update not started: phase is {:?}", self.phase);
            return false;
        }

        let files = self.images.selected_paths();
        if files.is_empty() {
            self.add_log("Select at least one WIM file to update.");
            return false;
        }

        self.add_log(format!("Starting update of {} file(s)...", files.len()));
        self.phase = AppPhase::Updating;
        self.progress_percent = 0;
        self.status_message = "Update in progress...".to_string();
        self.last_update_outcome = None;

        let plan = UpdatePlan::from(&self.settings);
        self.update_handle = Some(wimupdater_core::updater::start_update(files, plan));
        true
    }

    /// Ask the running update to stop at its next tick.
    pub fn cancel_update(&mut self) {
        if let Some(ref handle) = self.update_handle {
            handle.cancel();
        }
    }

    /// Process pending update messages. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint.
    pub fn process_update_messages(&mut self) -> bool {
        let mut repaint = false;
        let mut messages_this_frame = 0usize;

        while messages_this_frame < MAX_MESSAGES_PER_FRAME {
            let msg = match self.update_handle.as_ref() {
                Some(handle) => match handle.progress_rx.try_recv() {
                    Ok(m) => m,
                    Err(_) => break,
                },
                None => break,
            };
            messages_this_frame += 1;
            repaint = true;

            match msg {
                UpdateProgress::Log(line) => self.add_log(line),
                UpdateProgress::Progress { percent, message } => {
                    self.progress_percent = percent;
                    self.status_message = message;
                }
                UpdateProgress::Finished(outcome) => {
                    self.finish_update(outcome);
                    return true;
                }
            }
        }

        repaint
    }

    fn finish_update(&mut self, outcome: UpdateOutcome) {
        match outcome {
            UpdateOutcome::Completed => {
                self.add_log("All updates completed.");
                self.progress_percent = 100;
                self.status_message = "Update complete".to_string();
            }
            UpdateOutcome::Cancelled => {
                self.add_log("Update cancelled by user.");
                self.progress_percent = 0;
                self.status_message = "Update cancelled.".to_string();
            }
        }
        self.last_update_outcome = Some(outcome);
        self.phase = AppPhase::Idle;
        self.update_handle = None;
    }

    /// `true` while a background operation is running.
    pub fn is_busy(&self) -> bool {
        self.phase != AppPhase::Idle
    }
}
