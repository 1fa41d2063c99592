//! Common test utilities for capsid integration tests.
//!
//! Provides `TestEnv` for isolated test environments so tests never pick
//! up the developer's real game paths from the host environment.

#![allow(dead_code)]

use assert_cmd::Command;
pub use tempfile::TempDir;

/// Environment variables capsid consults; scrubbed from every command so
/// the host machine cannot leak values into a test.
const SCRUBBED_VARS: [&str; 4] = ["PZ_GAME_DIR", "IDEA_HOME", "ZDOC_TOOL", "CAPSID_PROJECT"];

/// A test environment with an isolated project directory.
///
/// The `capsid()` method returns a `Command` that runs inside the project
/// directory with capsid's environment variables removed, making tests
/// parallel-safe; tests that need an env var set it per-command.
pub struct TestEnv {
    pub project_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with an isolated project directory.
    pub fn new() -> Self {
        Self {
            project_dir: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the capsid binary rooted at the project dir.
    pub fn capsid(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_capsid"));
        cmd.current_dir(self.project_dir.path());
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the path to the project directory.
    pub fn path(&self) -> &std::path::Path {
        self.project_dir.path()
    }

    /// Write a `local.properties` file with the given contents.
    pub fn write_properties(&self, contents: &str) {
        std::fs::write(self.path().join("local.properties"), contents).unwrap();
    }

    /// Read a file relative to the project root.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path().join(rel)).unwrap()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
