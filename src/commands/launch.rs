//! `capsid launch-configs` - generate IDEA run configurations.

use std::path::PathBuf;

use serde::Serialize;

use crate::commands::CommandResult;
use crate::config::resolver::resolve_required;
use crate::config::{GAME_DIR, LocalStore, validate};
use crate::idea::LAUNCH_RUN_CONFIGS;
use crate::project::Project;
use crate::{Error, Result};

/// Outcome of `capsid launch-configs`.
#[derive(Debug, Serialize)]
pub struct LaunchConfigsResult {
    /// The run configuration files that were written.
    pub files: Vec<PathBuf>,
    pub game_dir: PathBuf,
}

impl CommandResult for LaunchConfigsResult {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Wrote {} run configurations (gameDir={}):",
            self.files.len(),
            self.game_dir.display()
        )];
        for file in &self.files {
            lines.push(format!("  {}", file.display()));
        }
        lines.join("\n")
    }
}

/// Generate the four game launch configurations under
/// `.idea/runConfigurations/`, overwriting stale ones.
pub fn launch_configs(project: &Project, store: &LocalStore) -> Result<LaunchConfigsResult> {
    let resolved = resolve_required(&GAME_DIR, store)?;
    let game_dir = resolved
        .value
        .as_path()
        .map(PathBuf::from)
        .ok_or_else(|| Error::Other("gameDir did not resolve to a path".to_string()))?;

    validate::directory("game install", &game_dir)?;

    let mut files = Vec::with_capacity(LAUNCH_RUN_CONFIGS.len());
    for config in LAUNCH_RUN_CONFIGS {
        files.push(config.write(project, &game_dir)?);
    }

    Ok(LaunchConfigsResult { files, game_dir })
}
