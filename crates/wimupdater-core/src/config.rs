/// Runtime settings.
///
/// There is no configuration file. Every value has a built-in default and a
/// few can be overridden through environment variables, which is handy for
/// pointing the scanner at a different imaging tool or speeding up the
/// simulated update pass.
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Environment variable overriding the imaging tool program.
pub const ENV_TOOL: &str = "WIMUPDATER_DISM";

/// Environment variable overriding the updater sub-step delay (milliseconds).
pub const ENV_STEP_DELAY_MS: &str = "WIMUPDATER_STEP_DELAY_MS";

/// File extension (without the dot) of the images the scanner looks for.
pub const DEFAULT_IMAGE_EXTENSION: &str = "wim";

/// Number of progress increments per file. The runner emits `steps + 1` ticks.
pub const DEFAULT_UPDATE_STEPS: u32 = 100;

/// Delay between two progress ticks of the simulated update.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(50);

#[cfg(windows)]
const DEFAULT_TOOL: &str = "dism.exe";
#[cfg(not(windows))]
const DEFAULT_TOOL: &str = "dism";

/// All tunables used by the scanner and the updater.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Program invoked as `<tool> /Get-WimInfo /WimFile:"<path>"`.
    pub tool_program: PathBuf,
    /// Extension matched case-insensitively during the folder scan.
    pub image_extension: String,
    /// Progress increments per file.
    pub update_steps: u32,
    /// Sleep between progress increments.
    pub step_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tool_program: PathBuf::from(DEFAULT_TOOL),
            image_extension: DEFAULT_IMAGE_EXTENSION.to_string(),
            update_steps: DEFAULT_UPDATE_STEPS,
            step_delay: DEFAULT_STEP_DELAY,
        }
    }
}

impl Settings {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(tool) = lookup(ENV_TOOL) {
            let tool = tool.trim();
            if tool.is_empty() {
                warn!("{ENV_TOOL} is set but empty -- using {}", DEFAULT_TOOL);
            } else {
                settings.tool_program = PathBuf::from(tool);
            }
        }

        if let Some(raw) = lookup(ENV_STEP_DELAY_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => settings.step_delay = Duration::from_millis(ms),
                Err(e) => warn!("Ignoring {ENV_STEP_DELAY_MS}={raw:?}: {e}"),
            }
        }

        settings
    }
}
