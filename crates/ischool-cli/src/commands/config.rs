//! Configuration management commands

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a default ischool.toml in the current directory
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn run(cmd: ConfigCommands, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(config),
        ConfigCommands::Init { force } => init(force),
    }
}

fn show(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    match Config::find_config_file() {
        Some(path) => println!("Config file: {}\n", path.display()),
        None => println!("No configuration file found. Using defaults.\n"),
    }
    println!("{}", config.to_toml()?);
    Ok(())
}

fn init(force: bool) -> Result<()> {
    let config_path = Path::new("ischool.toml");

    if config_path.exists() && !force {
        println!("Configuration file already exists: {}", config_path.display());
        println!("Use --force to overwrite");
        return Ok(());
    }

    std::fs::write(config_path, Config::default().to_toml()?)?;
    println!("Configuration file created: {}", config_path.display());
    Ok(())
}
