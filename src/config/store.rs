//! The production property source: `local.properties` plus `-P` overrides
//! plus the process environment.
//!
//! The properties file is a flat `key=value` text file at the project
//! root. It holds machine-specific paths and is never committed to
//! version control, so a missing file is a normal, expected state and
//! reads back as an empty snapshot. The file is loaded lazily, exactly
//! once per store, under a [`OnceLock`] guard; later edits to the file
//! are not observed by this process.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::resolver::PropertySources;
use crate::{Error, Result};

/// Conventional file name for persisted local properties.
pub const LOCAL_PROPERTIES_FILE: &str = "local.properties";

/// Property source backed by the project's `local.properties` file,
/// command-line `-P` overrides, and the process environment.
pub struct LocalStore {
    /// Path to the `local.properties` file.
    path: PathBuf,
    /// Overrides passed as `-P key=value` flags.
    overrides: HashMap<String, String>,
    /// Lazily loaded, immutable snapshot of the properties file.
    snapshot: OnceLock<HashMap<String, String>>,
}

impl LocalStore {
    /// Create a store for the given project root.
    pub fn new(project_root: &Path, overrides: HashMap<String, String>) -> Self {
        Self {
            path: project_root.join(LOCAL_PROPERTIES_FILE),
            overrides,
            snapshot: OnceLock::new(),
        }
    }

    /// Parse `-P key=value` flags into an override map.
    pub fn parse_overrides(flags: &[String]) -> Result<HashMap<String, String>> {
        let mut overrides = HashMap::new();
        for flag in flags {
            let Some((key, value)) = flag.split_once('=') else {
                return Err(Error::InvalidOverride(flag.clone()));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(Error::InvalidOverride(flag.clone()));
            }
            overrides.insert(key.to_string(), value.trim().to_string());
        }
        Ok(overrides)
    }

    /// Whether the properties file exists on disk.
    pub fn file_exists(&self) -> bool {
        self.path.exists()
    }

    /// Path to the backing properties file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn snapshot(&self) -> &HashMap<String, String> {
        self.snapshot.get_or_init(|| {
            match std::fs::read_to_string(&self.path) {
                Ok(contents) => parse_properties(&contents),
                // A missing file is the normal pre-`capsid init` state.
                Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
                Err(e) => {
                    eprintln!("warning: could not read {}: {}", self.path.display(), e);
                    HashMap::new()
                }
            }
        })
    }
}

impl PropertySources for LocalStore {
    fn persisted(&self, name: &str) -> Option<String> {
        self.snapshot()
            .get(name)
            .cloned()
            .filter(|v| !v.is_empty())
    }

    fn override_value(&self, name: &str) -> Option<String> {
        self.overrides
            .get(name)
            .cloned()
            .filter(|v| !v.is_empty())
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}

/// Parse flat `key=value` property text.
///
/// Blank lines and lines starting with `#` or `!` are ignored. Lines
/// without a `=` separator are skipped rather than rejected; the file is
/// hand-edited and a stray line should not brick every command.
pub fn parse_properties(contents: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if !key.is_empty() {
                map.insert(key.to_string(), value.trim().to_string());
            }
        }
    }
    map
}

/// Serialize properties to `key=value` text with a commented header.
///
/// Entries are written in the order given so the file matches the
/// registry's display order.
pub fn format_properties(entries: &[(&str, String)]) -> String {
    let mut out = String::new();
    out.push_str("# Machine-specific paths for Project Zomboid mod development.\n");
    out.push_str("# This file is not tracked by version control.\n");
    for (key, value) in entries {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}
