//! `capsid init` - write the gitignored `local.properties` file.

use std::path::PathBuf;

use serde::Serialize;

use crate::commands::CommandResult;
use crate::config::resolver::resolve;
use crate::config::store::format_properties;
use crate::config::{GAME_DIR, IDEA_HOME, LocalStore, PropertyValue};
use crate::project::Project;
use crate::{Error, Result};

/// Outcome of `capsid init`.
#[derive(Debug, Serialize)]
pub struct InitResult {
    /// Path of the properties file.
    pub path: PathBuf,
    /// False when the file already existed and was left untouched.
    pub created: bool,
    pub game_dir: Option<PathBuf>,
    pub idea_home: Option<PathBuf>,
}

impl CommandResult for InitResult {
    fn to_human(&self) -> String {
        if self.created {
            format!(
                "Wrote {}\n  gameDir={}\n  ideaHome={}",
                self.path.display(),
                self.game_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
                self.idea_home
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            )
        } else {
            format!("{} already exists, nothing to do", self.path.display())
        }
    }
}

/// Write `local.properties` from flags or already-resolvable values.
///
/// A present file is reported as-is, never overwritten. Missing values
/// fall back to whatever the resolver can see short of the file itself
/// (`-P` overrides, environment variables) and, for the game directory,
/// to a scan of conventional Steam install locations.
pub fn init(
    project: &Project,
    store: &LocalStore,
    game_dir: Option<PathBuf>,
    idea_home: Option<PathBuf>,
) -> Result<InitResult> {
    let path = project.local_properties_file();
    if path.exists() {
        return Ok(InitResult {
            path,
            created: false,
            game_dir: None,
            idea_home: None,
        });
    }

    let game_dir = match game_dir {
        Some(dir) => dir,
        None => resolve_path_or(store, &GAME_DIR, detect_game_dir)?,
    };
    let idea_home = match idea_home {
        Some(dir) => dir,
        None => resolve_path_or(store, &IDEA_HOME, || None)?,
    };

    let contents = format_properties(&[
        (GAME_DIR.name, game_dir.display().to_string()),
        (IDEA_HOME.name, idea_home.display().to_string()),
    ]);
    std::fs::write(&path, contents)?;

    ensure_gitignored(project)?;

    Ok(InitResult {
        path,
        created: true,
        game_dir: Some(game_dir),
        idea_home: Some(idea_home),
    })
}

/// Resolve a path property, falling back to `detect` before failing.
fn resolve_path_or(
    store: &LocalStore,
    property: &'static crate::config::LocalProperty,
    detect: impl FnOnce() -> Option<PathBuf>,
) -> Result<PathBuf> {
    match resolve(property, store) {
        Ok(Some(resolved)) => match resolved.value {
            PropertyValue::Path(p) => Ok(p),
            PropertyValue::Text(s) => Ok(PathBuf::from(s)),
        },
        Ok(None) | Err(Error::MissingProperty { .. }) => detect().ok_or_else(|| {
            Error::MissingProperty {
                name: property.name.to_string(),
                sources: format!(
                    "--{} flag, -P overrides, environment variable {}, and known install locations",
                    flag_name(property.name),
                    property.env_name()
                ),
            }
        }),
        Err(e) => Err(e),
    }
}

fn flag_name(property_name: &str) -> String {
    // gameDir -> game-dir
    let mut out = String::new();
    for c in property_name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Scan conventional Steam library locations for a Project Zomboid install.
fn detect_game_dir() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    let candidates = [
        home.join(".steam/steam/steamapps/common/ProjectZomboid"),
        home.join(".local/share/Steam/steamapps/common/ProjectZomboid"),
        home.join("Library/Application Support/Steam/steamapps/common/Project Zomboid"),
        PathBuf::from("C:\\Program Files (x86)\\Steam\\steamapps\\common\\ProjectZomboid"),
    ];
    candidates.into_iter().find(|p| p.is_dir())
}

/// Append `local.properties` to the project's `.gitignore` when missing.
fn ensure_gitignored(project: &Project) -> Result<()> {
    let gitignore = project.root().join(".gitignore");
    let entry = crate::config::store::LOCAL_PROPERTIES_FILE;

    let existing = match std::fs::read_to_string(&gitignore) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    if existing.lines().any(|line| line.trim() == entry) {
        return Ok(());
    }

    let mut updated = existing;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(entry);
    updated.push('\n');
    std::fs::write(&gitignore, updated)?;
    Ok(())
}
