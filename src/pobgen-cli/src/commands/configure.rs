//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up pobgen CLI defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `dictionary` - Optional dictionary path to set as default
/// * `target_version` - Optional target game version to set as default
/// * `show` - If true, show current configuration
pub fn handle(dictionary: Option<PathBuf>, target_version: Option<String>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if apply(&mut config, dictionary, target_version) {
        config.save()?;
        show_config(&config);
    } else {
        show_usage();
    }

    Ok(())
}

/// Apply the given settings; returns false when there was nothing to set
fn apply(config: &mut Config, dictionary: Option<PathBuf>, target_version: Option<String>) -> bool {
    let changed = dictionary.is_some() || target_version.is_some();

    if let Some(path) = dictionary {
        config.dictionary = Some(path);
    }
    if let Some(version) = target_version {
        config.target_version = Some(version);
    }

    changed
}

/// Display current configuration
fn show_config(config: &Config) {
    match &config.dictionary {
        Some(path) => println!("Dictionary: {}", path.display()),
        None => println!("No dictionary configured"),
    }
    match &config.target_version {
        Some(version) => println!("Target version: {}", version),
        None => println!("Target version: {} (default)", pobgen::document::DEFAULT_TARGET_VERSION),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: pobgen configure --dictionary PATH");
    println!("   or: pobgen configure --target-version VERSION");
    println!("   or: pobgen configure --show");
    println!();
    println!("Note: The dictionary maps localized item names and modifiers to English.");
    println!("      Without one, names are copied into the build unchanged.");
}
