//! `capsid scaffold` - create the default mod directory structure.

use std::path::PathBuf;

use serde::Serialize;

use crate::commands::CommandResult;
use crate::config::validate;
use crate::project::Project;
use crate::Result;

/// The conventional directory tree of a Project Zomboid mod, relative to
/// the project root.
pub const MOD_STRUCTURE: [&str; 8] = [
    "media/lua/client",
    "media/lua/server",
    "media/lua/shared",
    "media/maps",
    "media/models",
    "media/scripts",
    "media/sound",
    "media/textures",
];

/// Outcome of `capsid scaffold`.
#[derive(Debug, Serialize)]
pub struct ScaffoldResult {
    /// Directories created by this run (relative to the project root).
    pub created_dirs: Vec<String>,
    /// Whether a new `mod.info` was written.
    pub mod_info_created: bool,
    pub mod_info_path: PathBuf,
}

impl CommandResult for ScaffoldResult {
    fn to_human(&self) -> String {
        let mut lines = Vec::new();
        if self.created_dirs.is_empty() {
            lines.push("Mod directory structure already in place".to_string());
        } else {
            lines.push(format!("Created {} directories:", self.created_dirs.len()));
            for dir in &self.created_dirs {
                lines.push(format!("  {}", dir));
            }
        }
        if self.mod_info_created {
            lines.push(format!("Wrote {}", self.mod_info_path.display()));
        }
        lines.join("\n")
    }
}

/// Create the mod directory tree and a `mod.info` when absent.
///
/// Idempotent: existing directories and an existing `mod.info` are left
/// untouched.
pub fn scaffold(
    project: &Project,
    name: Option<String>,
    description: Option<String>,
    url: Option<String>,
) -> Result<ScaffoldResult> {
    if let Some(ref url) = url {
        validate::url(url)?;
    }

    let mut created_dirs = Vec::new();
    for rel in MOD_STRUCTURE {
        let dir = project.root().join(rel);
        if !dir.is_dir() {
            std::fs::create_dir_all(&dir)?;
            created_dirs.push(rel.to_string());
        }
    }

    let mod_info_path = project.mod_info_file();
    let mod_info_created = if mod_info_path.exists() {
        false
    } else {
        let name = name.unwrap_or_else(|| project.dir_name());
        let contents = render_mod_info(
            &name,
            description.as_deref().unwrap_or_default(),
            url.as_deref().unwrap_or_default(),
        );
        std::fs::write(&mod_info_path, contents)?;
        true
    };

    Ok(ScaffoldResult {
        created_dirs,
        mod_info_created,
        mod_info_path,
    })
}

/// Render the flat `key=value` contents of `mod.info`.
fn render_mod_info(name: &str, description: &str, url: &str) -> String {
    format!(
        "name={name}\nid={id}\ndescription={description}\nurl={url}\nposter=poster.png\n",
        id = slugify(name),
    )
}

/// Lowercase alphanumerics with single hyphens, for the mod id.
fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_hyphen = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            out.push('-');
            last_was_hyphen = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
