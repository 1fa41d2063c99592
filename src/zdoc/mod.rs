//! Driving the external Lua annotator.
//!
//! The annotator is a separate executable (resolved via the `zdocTool`
//! local property) that reads the game's vanilla Lua and writes an
//! annotated copy for IDE completion. Capsid treats it as a black box:
//! it is invoked with an input and an output directory, its exit code
//! decides success, and its stderr is surfaced verbatim on failure.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::config::validate::SemVer;
use crate::{Error, Result};

/// How long to wait for the annotator's `version` query before giving up.
/// The annotate run itself is unbounded; version is a sanity check.
pub const VERSION_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Handle for invoking the external annotator tool.
#[derive(Debug, Clone)]
pub struct Annotator {
    command: String,
}

impl Annotator {
    /// Create a handle that shells out to the given command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The command this handle invokes.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Annotate the Lua tree under `input`, writing results under `output`.
    ///
    /// Runs `<tool> annotate -i <input> -o <output>` with inherited stdout
    /// so the tool's own progress output reaches the user.
    pub fn annotate(&self, input: &Path, output: &Path) -> Result<()> {
        let status = Command::new(&self.command)
            .arg("annotate")
            .arg("-i")
            .arg(input)
            .arg("-o")
            .arg(output)
            .status()
            .map_err(|e| Error::Annotator(format!("failed to run '{}': {}", self.command, e)))?;

        if !status.success() {
            return Err(Error::Annotator(format!(
                "'{} annotate' exited with {}",
                self.command, status
            )));
        }
        Ok(())
    }

    /// Query the tool's version, bounded by `timeout`.
    ///
    /// Runs `<tool> version` and parses the first semantic version out of
    /// its stdout banner. The child is killed if it exceeds the timeout.
    pub fn version(&self, timeout: Duration) -> Result<SemVer> {
        let mut child = Command::new(&self.command)
            .arg("version")
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Annotator(format!("failed to run '{}': {}", self.command, e)))?;

        let status = match child.wait_timeout(timeout) {
            Ok(Some(status)) => status,
            Ok(None) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(Error::Annotator(format!(
                    "'{} version' did not finish within {}s",
                    self.command,
                    timeout.as_secs()
                )));
            }
            Err(e) => {
                return Err(Error::Annotator(format!(
                    "failed to wait for '{}': {}",
                    self.command, e
                )));
            }
        };

        if !status.success() {
            return Err(Error::Annotator(format!(
                "'{} version' exited with {}",
                self.command, status
            )));
        }

        let mut stdout = String::new();
        if let Some(mut out) = child.stdout.take() {
            use std::io::Read;
            out.read_to_string(&mut stdout)
                .map_err(|e| Error::Annotator(format!("failed to read version output: {}", e)))?;
        }

        SemVer::find_in(&stdout).ok_or_else(|| {
            Error::Annotator(format!(
                "could not find a version in '{} version' output: {}",
                self.command,
                stdout.trim()
            ))
        })
    }
}
