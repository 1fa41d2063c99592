//! Project layout conventions.
//!
//! A Capsid project is an ordinary directory holding one mod. All derived
//! paths hang off the project root by convention; nothing here touches
//! the filesystem, so a [`Project`] can describe a directory that does
//! not exist yet.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::LocalStore;

/// File where mod metadata is stored.
pub const MOD_INFO_FILE: &str = "mod.info";

/// File containing the last annotator version text.
pub const ZDOC_VERSION_FILE: &str = "zdoc.version";

/// A project root with its derived conventional paths.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Create a project rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory containing Project Zomboid classes extracted for the IDE.
    pub fn zomboid_classes_dir(&self) -> PathBuf {
        self.root.join("build/classes/zomboid")
    }

    /// Directory containing decompiled Project Zomboid sources.
    pub fn zomboid_sources_dir(&self) -> PathBuf {
        self.root.join("build/generated/sources/zomboid")
    }

    /// Directory containing the Lua library compiled by the annotator.
    pub fn zdoc_lua_dir(&self) -> PathBuf {
        self.root.join("build/generated/sources/zdoc")
    }

    /// File containing the last annotator version text.
    pub fn zdoc_version_file(&self) -> PathBuf {
        self.root.join(ZDOC_VERSION_FILE)
    }

    /// File where mod properties are stored.
    pub fn mod_info_file(&self) -> PathBuf {
        self.root.join(MOD_INFO_FILE)
    }

    /// The gitignored `local.properties` file.
    pub fn local_properties_file(&self) -> PathBuf {
        self.root.join(crate::config::store::LOCAL_PROPERTIES_FILE)
    }

    /// Directory where IDEA run configurations are generated.
    pub fn run_configs_dir(&self) -> PathBuf {
        self.root.join(".idea/runConfigurations")
    }

    /// The directory name of the project root, used as the default mod
    /// name and the IDEA module name.
    pub fn dir_name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mod".to_string())
    }

    /// Build the property store for this project.
    pub fn store(&self, overrides: HashMap<String, String>) -> LocalStore {
        LocalStore::new(&self.root, overrides)
    }
}
