/// Update runner — walks the selected images one at a time on a background
/// thread, reporting overall progress for the whole batch.
///
/// The per-file update itself is a placeholder: each file is a fixed number
/// of timed progress ticks and nothing on disk is touched. Cancellation is
/// checked before every tick, so a cancelled run stops inside the current
/// file and never logs it as finished.
pub mod progress;

use crate::model::image::display_file_name;
use progress::{UpdateOutcome, UpdateProgress};

use crossbeam_channel::{Receiver, Sender};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

/// Capacity of the progress channel. A run sends `steps + 3` messages per
/// file; the UI drains the channel every frame.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Shape of the simulated per-file update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdatePlan {
    /// Progress increments per file; `steps + 1` ticks are emitted.
    pub steps: u32,
    /// Sleep before each tick.
    pub step_delay: Duration,
}

impl Default for UpdatePlan {
    fn default() -> Self {
        Self {
            steps: crate::config::DEFAULT_UPDATE_STEPS,
            step_delay: crate::config::DEFAULT_STEP_DELAY,
        }
    }
}

impl From<&crate::config::Settings> for UpdatePlan {
    fn from(settings: &crate::config::Settings) -> Self {
        Self {
            steps: settings.update_steps.max(1),
            step_delay: settings.step_delay,
        }
    }
}

/// Handle to a running or completed update.
pub struct UpdateHandle {
    /// Receiver for progress updates from the update thread.
    pub progress_rx: Receiver<UpdateProgress>,
    /// Snapshot of the files this run works on.
    pub files: Arc<[PathBuf]>,
    cancel_flag: Arc<AtomicBool>,
    thread: Option<thread::JoinHandle<()>>,
}

impl UpdateHandle {
    /// Request the run to stop before its next tick.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// Cancel and block until the update thread has exited, discarding
    /// any messages still in flight.
    pub fn cancel_and_wait(mut self) {
        self.cancel();
        while self.progress_rx.recv().is_ok() {}
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("Updater thread panicked while shutting down");
            }
        }
    }
}

/// Start updating `files` (in the given order) on a background thread.
pub fn start_update(files: Vec<PathBuf>, plan: UpdatePlan) -> UpdateHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<UpdateProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();
    let files: Arc<[PathBuf]> = files.into();
    let files_clone = files.clone();

    let thread = thread::Builder::new()
        .name("wimupdater-updater".into())
        .spawn(move || {
            run_update(&files_clone, plan, &progress_tx, &cancel_clone);
        })
        .expect("failed to spawn updater thread");

    UpdateHandle {
        progress_rx,
        files,
        cancel_flag,
        thread: Some(thread),
    }
}

/// Overall batch percentage after `step` of `steps` ticks of file `index`
/// out of `total`. Integer arithmetic, floored.
pub fn overall_percent(index: usize, step: u32, steps: u32, total: usize) -> u8 {
    if total == 0 || steps == 0 {
        return 100;
    }
    let done = index as u64 * 100 + u64::from(step) * 100 / u64::from(steps);
    (done / total as u64).min(100) as u8
}

/// Run a complete update on the calling thread. Returns how it ended; the
/// same outcome is sent as the final [`UpdateProgress::Finished`] message.
pub fn run_update(
    files: &[PathBuf],
    plan: UpdatePlan,
    progress_tx: &Sender<UpdateProgress>,
    cancel_flag: &AtomicBool,
) -> UpdateOutcome {
    let total = files.len();
    let steps = plan.steps.max(1);
    let mut outcome = UpdateOutcome::Completed;

    info!("Starting update of {total} file(s)");

    'files: for (i, path) in files.iter().enumerate() {
        if cancel_flag.load(Ordering::Relaxed) {
            outcome = UpdateOutcome::Cancelled;
            break;
        }

        let file_name = display_file_name(path);
        let _ = progress_tx.send(UpdateProgress::Log(format!(
            "Starting update of '{file_name}'..."
        )));

        for step in 0..=steps {
            if cancel_flag.load(Ordering::Relaxed) {
                outcome = UpdateOutcome::Cancelled;
                break 'files;
            }
            if !plan.step_delay.is_zero() {
                thread::sleep(plan.step_delay);
            }

            let step_percent = u64::from(step) * 100 / u64::from(steps);
            let _ = progress_tx.send(UpdateProgress::Progress {
                percent: overall_percent(i, step, steps, total),
                message: format!(
                    "({}/{total}) {file_name} processing... {step_percent}%",
                    i + 1
                ),
            });
        }

        if cancel_flag.load(Ordering::Relaxed) {
            outcome = UpdateOutcome::Cancelled;
            break;
        }
        let _ = progress_tx.send(UpdateProgress::Log(format!(
            "Finished updating '{file_name}'."
        )));
    }

    info!("Update run ended: {outcome:?}");
    let _ = progress_tx.send(UpdateProgress::Finished(outcome));
    outcome
}
