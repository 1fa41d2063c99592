//! Capsid CLI - a Project Zomboid mod development tool.

use std::env;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use capsid::cli::{Cli, Commands, ConfigCommands};
use capsid::commands::{self, render};
use capsid::config::LocalStore;
use capsid::project::Project;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    // Determine project root: --project flag > CAPSID_PROJECT env > cwd
    let root = resolve_project_root(cli.project, json);
    let project = Project::new(root);

    let overrides = match LocalStore::parse_overrides(&cli.properties) {
        Ok(overrides) => overrides,
        Err(e) => {
            report_error(&e, json);
            process::exit(1);
        }
    };
    let store = project.store(overrides);

    if let Err(e) = run_command(cli.command, &project, &store, json) {
        report_error(&e, json);
        process::exit(1);
    }
}

/// Resolve the project root from an explicit flag/env value or fall back
/// to the current working directory. Explicit paths must exist.
fn resolve_project_root(explicit: Option<PathBuf>, json: bool) -> PathBuf {
    match explicit {
        Some(path) => {
            if !path.exists() {
                let e = capsid::Error::InvalidInput(format!(
                    "specified project path does not exist: {}",
                    path.display()
                ));
                report_error(&e, json);
                process::exit(1);
            }
            path
        }
        None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

fn run_command(
    command: Commands,
    project: &Project,
    store: &LocalStore,
    json: bool,
) -> Result<(), capsid::Error> {
    match command {
        Commands::Init {
            game_dir,
            idea_home,
        } => {
            let result = commands::init(project, store, game_dir, idea_home)?;
            println!("{}", render(&result, json)?);
        }
        Commands::Scaffold {
            name,
            description,
            url,
        } => {
            let result = commands::scaffold(project, name, description, url)?;
            println!("{}", render(&result, json)?);
        }
        Commands::LaunchConfigs => {
            let result = commands::launch_configs(project, store)?;
            println!("{}", render(&result, json)?);
        }
        Commands::Annotate => {
            let result = commands::annotate(project, store)?;
            println!("{}", render(&result, json)?);
        }
        Commands::Config { command } => match command {
            ConfigCommands::Get { name } => {
                let result = commands::config_get(store, &name)?;
                println!("{}", render(&result, json)?);
            }
            ConfigCommands::List => {
                let result = commands::config_list(store)?;
                println!("{}", render(&result, json)?);
            }
        },
    }
    Ok(())
}

fn report_error(e: &capsid::Error, json: bool) {
    if json {
        // Keep the shape parseable even for messages containing quotes.
        let payload = serde_json::json!({ "error": e.to_string() });
        eprintln!("{}", payload);
    } else {
        eprintln!("Error: {}", e);
    }
}
