//! CLI argument definitions for Capsid.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Version string with build metadata injected by `build.rs`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CAPSID_GIT_COMMIT"),
    " ",
    env!("CAPSID_BUILD_TIMESTAMP"),
    ")"
);

/// Capsid - a Project Zomboid mod development tool.
///
/// Start with `capsid init` to record your local paths, then `capsid
/// scaffold` to lay out the mod.
#[derive(Parser, Debug)]
#[command(name = "capsid")]
#[command(author, version, long_version = LONG_VERSION, about = "A CLI tool for Project Zomboid mod development", long_about = None)]
pub struct Cli {
    /// Output in JSON format instead of human-readable text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Run as if capsid was started in <path> instead of the current
    /// directory. The path must exist.
    /// Can also be set via the CAPSID_PROJECT environment variable.
    #[arg(short = 'C', long = "project", global = true, env = "CAPSID_PROJECT")]
    pub project: Option<PathBuf>,

    /// Override a local property for this invocation (repeatable),
    /// e.g. -P gameDir=/opt/pz
    #[arg(short = 'P', long = "property", global = true, value_name = "KEY=VALUE")]
    pub properties: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write local.properties with the paths to your game and IDE installs
    ///
    /// Does nothing when the file already exists. Values come from the
    /// flags below, or from whatever the resolver can already see
    /// (overrides, environment variables, detected Steam installs).
    Init {
        /// Path to the Project Zomboid installation directory
        #[arg(long, value_name = "DIR")]
        game_dir: Option<PathBuf>,

        /// Path to the IntelliJ IDEA installation directory
        #[arg(long, value_name = "DIR")]
        idea_home: Option<PathBuf>,
    },

    /// Create the default mod directory structure and mod.info
    Scaffold {
        /// Mod name (defaults to the project directory name)
        #[arg(long)]
        name: Option<String>,

        /// Mod description recorded in mod.info
        #[arg(long)]
        description: Option<String>,

        /// Project URL recorded in mod.info (must be an http(s) URL)
        #[arg(long)]
        url: Option<String>,
    },

    /// Generate IntelliJ IDEA run configurations for the game
    LaunchConfigs,

    /// Annotate the game's vanilla Lua with the external annotator tool
    Annotate,

    /// Inspect resolved local properties
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Resolve and display one property
    Get {
        /// Property name (e.g. gameDir)
        name: String,
    },

    /// Resolve and display every known property
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_property_overrides() {
        let cli = Cli::parse_from([
            "capsid",
            "-P",
            "gameDir=/opt/pz",
            "-P",
            "zdocTool=zdoc-nightly",
            "config",
            "list",
        ]);
        assert_eq!(cli.properties.len(), 2);
        assert!(matches!(
            cli.command,
            Commands::Config {
                command: ConfigCommands::List
            }
        ));
    }
}
