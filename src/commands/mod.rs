//! Command implementations for the Capsid CLI.
//!
//! Each command is a plain function taking the [`Project`](crate::project::Project)
//! and its property store, returning a serializable result struct. The
//! binary decides whether to render the result as JSON or human text via
//! [`render`].

pub mod annotate;
pub mod config;
pub mod init;
pub mod launch;
pub mod scaffold;

pub use annotate::{AnnotateResult, annotate};
pub use config::{ConfigEntry, ConfigListResult, config_get, config_list};
pub use init::{InitResult, init};
pub use launch::{LaunchConfigsResult, launch_configs};
pub use scaffold::{ScaffoldResult, scaffold};

use crate::Result;

/// Command results that can be serialized to JSON or formatted for humans.
pub trait CommandResult: serde::Serialize {
    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

/// Render a command result in the requested format.
pub fn render<R: CommandResult>(result: &R, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(result.to_human())
    }
}
