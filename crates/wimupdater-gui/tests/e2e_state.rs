/// End-to-end tests for `AppState` — the GUI application state machine.
///
/// These tests exercise the real business-logic paths of `AppState` without
/// spinning up an egui window, keeping them fast and deterministic.
///
/// **Scope:** All user-visible state transitions are covered:
///   - Scan lifecycle (start, completion, failures, superseding scans)
///   - Selection (toggle, select all, summary, locking during updates)
///   - Update lifecycle (guards, completion, cancellation)
///   - Log timestamping and the `MAX_LOG_LINES` cap
///
/// The real scan and update threads run; only the imaging tool is faked.
use wimupdater_core::config::Settings;
use wimupdater_core::extractor::ImageInfoSource;
use wimupdater_core::model::SelectAllState;
use wimupdater_core::updater::progress::UpdateOutcome;
use wimupdater_core::WimError;
use wimupdater_gui::state::{AppPhase, AppState, MAX_LOG_LINES};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Fake imaging tool. Files named `broken*` fail; the rest report their
/// stem as the edition name.
struct FakeDism {
    delay: Duration,
}

impl ImageInfoSource for FakeDism {
    fn query(&self, path: &Path) -> Result<String, WimError> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let stem = path.file_stem().unwrap().to_string_lossy().into_owned();
        if stem.starts_with("broken") {
            return Err(WimError::ToolFailed {
                path: path.to_path_buf(),
                code: 87,
                stderr: "The parameter is incorrect.".into(),
            });
        }
        Ok(format!("Index : 1\nName : {stem}\nVersion : 10.0.19045.1.0\n"))
    }
}

fn settings(step_delay: Duration) -> Settings {
    Settings {
        update_steps: 10,
        step_delay,
        ..Settings::default()
    }
}

fn make_state(scan_delay: Duration, step_delay: Duration) -> AppState {
    let mut state = AppState::with_source(
        settings(step_delay),
        Arc::new(FakeDism { delay: scan_delay }),
    );
    state.check_elevation = false;
    state
}

fn fast_state() -> AppState {
    make_state(Duration::ZERO, Duration::ZERO)
}

fn make_folder(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        fs::write(tmp.path().join(name), vec![0u8; 1024]).unwrap();
    }
    tmp
}

fn wait_while(state: &mut AppState, phase: AppPhase) {
    let deadline = Instant::now() + Duration::from_secs(30);
    while state.phase == phase {
        assert!(
            Instant::now() < deadline,
            "{phase:?} did not finish within 30 seconds"
        );
        state.process_scan_messages();
        state.process_update_messages();
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn scan(state: &mut AppState, folder: &Path) {
    state.select_folder(folder.to_path_buf());
    wait_while(state, AppPhase::Scanning);
}

fn log_contains(state: &AppState, needle: &str) -> bool {
    state.log.iter().any(|line| line.contains(needle))
}

// ── Startup and log ───────────────────────────────────────────────────────────

#[test]
fn startup_writes_greeting_lines() {
    let state = fast_state();
    assert_eq!(state.phase, AppPhase::Idle);
    assert_eq!(state.log.len(), 2);
    assert!(state.log[0].ends_with("WimUpdater started."));
    assert!(state.log[1].ends_with("Choose a folder to scan for WIM files."));
}

/// Lines look like `[HH:MM:SS] message`.
#[test]
fn log_lines_are_timestamped() {
    let state = fast_state();
    let line = &state.log[0];
    let bytes = line.as_bytes();
    assert_eq!(bytes[0], b'[');
    assert_eq!(bytes[3], b':');
    assert_eq!(bytes[6], b':');
    assert_eq!(&line[9..11], "] ");
}

#[test]
fn log_is_capped() {
    let mut state = fast_state();
    for i in 0..MAX_LOG_LINES + 100 {
        state.add_log(format!("line {i}"));
    }
    assert_eq!(state.log.len(), MAX_LOG_LINES);
    // The two greeting lines and the first 100 numbered lines were dropped.
    assert!(state.log.front().unwrap().ends_with("line 100"));
    assert!(state
        .log
        .back()
        .unwrap()
        .ends_with(&format!("line {}", MAX_LOG_LINES + 99)));
}

// ── Scan lifecycle ────────────────────────────────────────────────────────────

#[test]
fn select_folder_sets_scanning_phase() {
    let tmp = make_folder(&["a.wim"]);
    let mut state = make_state(Duration::from_millis(50), Duration::ZERO);
    state.select_folder(tmp.path().to_path_buf());
    assert_eq!(state.phase, AppPhase::Scanning);
    assert!(state.is_busy());
    assert!(!state.can_start_update());
    wait_while(&mut state, AppPhase::Scanning);
}

#[test]
fn scan_populates_list_with_everything_selected() {
    let tmp = make_folder(&["a.wim", "b.WIM", "c.wim", "readme.txt"]);
    let mut state = fast_state();
    scan(&mut state, tmp.path());

    assert_eq!(state.phase, AppPhase::Idle);
    assert_eq!(state.images.len(), 3);
    assert_eq!(state.selection_summary(), "Selected: 3/3");
    assert_eq!(state.select_all_state(), SelectAllState::All);
    assert!(log_contains(&state, "Loaded 3 WIM file(s)."));

    let item = &state.images.items()[0];
    assert_eq!(item.record.version, "10.0");
    assert_eq!(item.record.build, "19045");
    assert_eq!(item.size_display, "1.0 KB");
}

#[test]
fn empty_folder_reports_nothing_to_display() {
    let tmp = make_folder(&[]);
    let mut state = fast_state();
    scan(&mut state, tmp.path());

    assert!(state.images.is_empty());
    assert_eq!(state.select_all_state(), SelectAllState::Empty);
    assert!(log_contains(&state, "No WIM files to scan."));
    assert!(log_contains(&state, "No WIM file information to display."));
}

#[test]
fn failed_file_is_logged_and_skipped() {
    let tmp = make_folder(&["broken.wim", "good.wim"]);
    let mut state = fast_state();
    scan(&mut state, tmp.path());

    assert_eq!(state.images.len(), 1);
    assert_eq!(state.images.items()[0].record.name, "good");
    assert_eq!(state.scan_error_count, 1);
    assert!(log_contains(&state, "Failed to query 'broken.wim'"));
}

#[test]
fn missing_folder_is_logged() {
    let tmp = TempDir::new().unwrap();
    let mut state = fast_state();
    scan(&mut state, &tmp.path().join("gone"));

    assert_eq!(state.phase, AppPhase::Idle);
    assert!(state.images.is_empty());
    assert!(log_contains(&state, "Error while scanning folder"));
}

/// Picking a new folder mid-scan replaces the old results entirely.
#[test]
fn new_folder_supersedes_running_scan() {
    let first = make_folder(&["a1.wim", "a2.wim", "a3.wim", "a4.wim", "a5.wim"]);
    let second = make_folder(&["b1.wim"]);
    let mut state = make_state(Duration::from_millis(30), Duration::ZERO);

    state.select_folder(first.path().to_path_buf());
    state.select_folder(second.path().to_path_buf());
    wait_while(&mut state, AppPhase::Scanning);

    assert_eq!(state.selected_folder.as_deref(), Some(second.path()));
    assert_eq!(state.images.len(), 1);
    assert_eq!(state.images.items()[0].record.name, "b1");
}

#[test]
fn cancel_scan_keeps_partial_results() {
    let names: Vec<String> = (0..20).map(|i| format!("img{i:02}.wim")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let tmp = make_folder(&refs);
    let mut state = make_state(Duration::from_millis(20), Duration::ZERO);

    state.select_folder(tmp.path().to_path_buf());
    std::thread::sleep(Duration::from_millis(50));
    state.cancel_scan();
    wait_while(&mut state, AppPhase::Scanning);

    assert!(state.scan_was_cancelled);
    assert!(state.images.len() < 20);
    assert!(log_contains(&state, "Scan cancelled by user."));
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[test]
fn toggle_and_select_all() {
    let tmp = make_folder(&["a.wim", "b.wim", "c.wim"]);
    let mut state = fast_state();
    scan(&mut state, tmp.path());

    state.toggle_item(1).unwrap();
    assert_eq!(state.selection_summary(), "Selected: 2/3");
    assert_eq!(state.select_all_state(), SelectAllState::Partial);

    state.set_all(false);
    assert_eq!(state.selection_summary(), "Selected: 0/3");
    assert!(log_contains(&state, "All files deselected"));
    assert!(!state.can_start_update());

    state.set_all(true);
    assert_eq!(state.selection_summary(), "Selected: 3/3");
    assert!(log_contains(&state, "All files selected"));
}

#[test]
fn toggle_out_of_range_is_reported() {
    let tmp = make_folder(&["a.wim"]);
    let mut state = fast_state();
    scan(&mut state, tmp.path());

    assert!(matches!(
        state.toggle_item(3),
        Err(WimError::SelectionOutOfRange { index: 3, len: 1 })
    ));
}

// ── Update lifecycle ──────────────────────────────────────────────────────────

#[test]
fn start_update_requires_a_selection() {
    let tmp = make_folder(&["a.wim"]);
    let mut state = fast_state();
    scan(&mut state, tmp.path());
    state.set_all(false);

    assert!(!state.start_update());
    assert_eq!(state.phase, AppPhase::Idle);
    assert!(log_contains(&state, "Select at least one WIM file to update."));
}

#[test]
fn start_update_refused_while_scanning() {
    let tmp = make_folder(&["a.wim", "b.wim"]);
    let mut state = make_state(Duration::from_millis(50), Duration::ZERO);
    state.select_folder(tmp.path().to_path_buf());

    assert!(!state.start_update());
    assert!(state.update_handle.is_none());
    wait_while(&mut state, AppPhase::Scanning);
}

#[test]
fn update_runs_selected_files_to_completion() {
    let tmp = make_folder(&["a.wim", "b.wim", "c.wim"]);
    let mut state = fast_state();
    scan(&mut state, tmp.path());
    let a = state
        .images
        .items()
        .iter()
        .position(|item| item.record.name == "a")
        .unwrap();
    state.toggle_item(a).unwrap();

    assert!(state.start_update());
    assert_eq!(state.phase, AppPhase::Updating);
    let snapshot: Vec<PathBuf> = state.update_handle.as_ref().unwrap().files.to_vec();
    assert_eq!(snapshot.len(), 2);
    wait_while(&mut state, AppPhase::Updating);

    assert_eq!(state.last_update_outcome, Some(UpdateOutcome::Completed));
    assert_eq!(state.progress_percent, 100);
    assert_eq!(state.status_message, "Update complete");
    assert!(log_contains(&state, "Finished updating 'b.wim'."));
    assert!(log_contains(&state, "Finished updating 'c.wim'."));
    assert!(!log_contains(&state, "Starting update of 'a.wim'"));
}

#[test]
fn selection_is_locked_while_updating() {
    let tmp = make_folder(&["a.wim", "b.wim"]);
    let other = make_folder(&["z.wim"]);
    let mut state = make_state(Duration::ZERO, Duration::from_millis(20));
    scan(&mut state, tmp.path());

    assert!(state.start_update());
    state.toggle_item(0).unwrap();
    state.set_all(false);
    state.select_folder(other.path().to_path_buf());

    assert_eq!(state.selection_summary(), "Selected: 2/2");
    assert_eq!(state.selected_folder.as_deref(), Some(tmp.path()));
    assert_eq!(state.phase, AppPhase::Updating);
    assert!(!state.start_update(), "a second update must not start");

    state.cancel_update();
    wait_while(&mut state, AppPhase::Updating);
}

#[test]
fn cancel_update_resets_progress() {
    let tmp = make_folder(&["a.wim", "b.wim"]);
    let mut state = make_state(Duration::ZERO, Duration::from_millis(20));
    scan(&mut state, tmp.path());

    assert!(state.start_update());
    std::thread::sleep(Duration::from_millis(60));
    state.cancel_update();
    wait_while(&mut state, AppPhase::Updating);

    assert_eq!(state.last_update_outcome, Some(UpdateOutcome::Cancelled));
    assert_eq!(state.progress_percent, 0);
    assert_eq!(state.status_message, "Update cancelled.");
    assert!(log_contains(&state, "Update cancelled by user."));
    assert!(!log_contains(&state, "Finished updating 'b.wim'."));
    assert!(state.update_handle.is_none());
}
