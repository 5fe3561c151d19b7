/// `dism /Get-WimInfo` runner.
///
/// DISM prints its report on stdout and reports failure through the exit
/// code. On Windows the child is created with `CREATE_NO_WINDOW` so a GUI
/// host does not flash a console window for every scanned file.
use super::ImageInfoSource;
use crate::error::WimError;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// The external imaging tool.
#[derive(Debug, Clone)]
pub struct DismTool {
    program: PathBuf,
}

impl DismTool {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments for querying `path`.
    pub fn arguments(path: &Path) -> [String; 2] {
        [
            "/Get-WimInfo".to_string(),
            format!("/WimFile:{}", path.display()),
        ]
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(Self::arguments(path));
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            use windows::Win32::System::Threading::CREATE_NO_WINDOW;
            cmd.creation_flags(CREATE_NO_WINDOW.0);
        }
        cmd
    }
}

impl Default for DismTool {
    fn default() -> Self {
        Self::new(crate::config::Settings::default().tool_program)
    }
}

impl ImageInfoSource for DismTool {
    fn query(&self, path: &Path) -> Result<String, WimError> {
        debug!("Running {} for {}", self.program.display(), path.display());

        let output = self
            .command(path)
            .output()
            .map_err(|source| WimError::ToolLaunch {
                path: path.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            // DISM writes most of its errors to stdout, not stderr.
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let detail = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(WimError::ToolFailed {
                path: path.to_path_buf(),
                code: output.status.code().unwrap_or(-1),
                stderr: detail,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
