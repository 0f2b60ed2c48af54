//! Configuration management CLI commands.
//!
//! Provides `config path`, `config init` and `config show`.

use std::path::Path;

use cartnav::config::ConfigFile;
use clap::Subcommand;

use crate::error::CliError;
use crate::runner::resolve_config_path;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Write a default configuration file if none exists
    Init,

    /// Print the effective configuration as INI
    ///
    /// Values missing from the file are shown with their defaults.
    Show,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands, config_path: Option<&Path>) -> Result<(), CliError> {
    let path = resolve_config_path(config_path);
    match command {
        ConfigCommands::Path => run_path(&path),
        ConfigCommands::Init => run_init(&path),
        ConfigCommands::Show => run_show(&path),
    }
}

/// Show the configuration file path.
fn run_path(path: &Path) -> Result<(), CliError> {
    println!("{}", path.display());
    Ok(())
}

/// Create the configuration file with defaults.
fn run_init(path: &Path) -> Result<(), CliError> {
    if ConfigFile::ensure_exists_at(path)? {
        println!("Created {}", path.display());
    } else {
        println!("Configuration already exists at {}", path.display());
    }
    Ok(())
}

/// Print the effective configuration.
fn run_show(path: &Path) -> Result<(), CliError> {
    let config = ConfigFile::load_from(path)?;
    print!("{}", config.to_config_string()?);
    Ok(())
}
