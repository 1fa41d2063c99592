//! `capsid annotate` - run the external Lua annotator over the game's
//! vanilla Lua.

use std::path::PathBuf;

use serde::Serialize;

use crate::commands::CommandResult;
use crate::config::resolver::resolve_required;
use crate::config::{GAME_DIR, LocalStore, ZDOC_TOOL, validate};
use crate::project::Project;
use crate::zdoc::{Annotator, VERSION_QUERY_TIMEOUT};
use crate::{Error, Result};

/// Outcome of `capsid annotate`.
#[derive(Debug, Serialize)]
pub struct AnnotateResult {
    pub input: PathBuf,
    pub output: PathBuf,
    /// The annotator version recorded in `zdoc.version`.
    pub version: String,
}

impl CommandResult for AnnotateResult {
    fn to_human(&self) -> String {
        format!(
            "Annotated {} -> {} (annotator {})",
            self.input.display(),
            self.output.display(),
            self.version
        )
    }
}

/// Annotate `<gameDir>/media/lua` into the project's generated-sources
/// tree, then record the annotator version in `zdoc.version`.
pub fn annotate(project: &Project, store: &LocalStore) -> Result<AnnotateResult> {
    let game_dir = resolve_required(&GAME_DIR, store)?
        .value
        .as_path()
        .map(PathBuf::from)
        .ok_or_else(|| Error::Other("gameDir did not resolve to a path".to_string()))?;

    let tool = resolve_required(&ZDOC_TOOL, store)?.value.display();

    let input = game_dir.join("media/lua");
    validate::directory("vanilla Lua", &input)?;

    let output = project.zdoc_lua_dir().join("media/lua");
    std::fs::create_dir_all(&output)?;

    let annotator = Annotator::new(tool);
    annotator.annotate(&input, &output)?;

    let version = annotator.version(VERSION_QUERY_TIMEOUT)?;
    std::fs::write(project.zdoc_version_file(), format!("{}\n", version))?;

    Ok(AnnotateResult {
        input,
        output,
        version: version.to_string(),
    })
}
