/// Update progress reporting — messages sent from the update thread to the
/// UI thread.

/// How an update run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Every file went through the full update pass.
    Completed,
    /// The run stopped early because cancellation was requested.
    Cancelled,
}

/// Progress updates sent from the update thread to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateProgress {
    /// A human-readable log line.
    Log(String),
    /// Overall batch progress (0–100) and a status message for the current file.
    Progress { percent: u8, message: String },
    /// The run is over. Always the last message.
    Finished(UpdateOutcome),
}
