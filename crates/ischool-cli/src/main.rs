//! iSchool CLI - department information page in the terminal
//!
//! Fetches about text, degrees, employment tables, the faculty directory
//! and news from the department API and renders them as one page.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unused_async)]
#![allow(clippy::too_many_lines)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod browse;
mod commands;
mod config;
mod page;
mod site;
#[cfg(test)]
mod test_support;
mod views;

use commands::sections::{AboutArgs, DegreesArgs, EmploymentArgs, FacultyArgs, PageArgs};
use config::Config;
use site::Site;

#[derive(Parser)]
#[command(name = "ischool")]
#[command(author, version, about = "iSchool @ RIT - department information", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Path to a configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Show(ShowCommands),

    /// Configuration management
    #[command(subcommand)]
    Config(commands::config::ConfigCommands),
}

/// Commands that fetch and render page content
#[derive(Subcommand)]
enum ShowCommands {
    /// Render the whole page
    Page(PageArgs),

    /// About text and quote
    About(AboutArgs),

    /// Undergraduate and graduate degrees
    Degrees(DegreesArgs),

    /// Employment and co-op tables
    Employment(EmploymentArgs),

    /// Faculty directory
    Faculty(FacultyArgs),

    /// Recent news
    News,

    /// Browse the page interactively
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity; logs go to stderr, pages to stdout
    let log_level = if cli.verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("ischool_cli={log_level},ischool_core={log_level},ischool_client={log_level}")
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    match cli.command {
        Commands::Config(cmd) => commands::config::run(cmd, &config),
        Commands::Show(command) => show(command, &config).await,
    }
}

/// Fetch and render the sections a command asks for
async fn show(command: ShowCommands, config: &Config) -> Result<()> {
    let client = config.client()?;
    let opts = config.view_options();
    let mut site = Site::new(config.display.error_mode);

    match command {
        ShowCommands::Page(args) => commands::sections::page(&mut site, &client, args, &opts).await,
        ShowCommands::About(args) => commands::sections::about(&mut site, &client, args, &opts).await,
        ShowCommands::Degrees(args) => {
            commands::sections::degrees(&mut site, &client, args, &opts).await
        }
        ShowCommands::Employment(args) => {
            commands::sections::employment(&mut site, &client, args, &opts).await
        }
        ShowCommands::Faculty(args) => {
            commands::sections::faculty(&mut site, &client, args, &opts).await
        }
        ShowCommands::News => commands::sections::news(&mut site, &client, &opts).await,
        ShowCommands::Browse => {
            site.load(&client).await;
            browse::run(browse::Session::new(site, opts), &client).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use ischool_core::FilterKey;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_section_commands_parse_as_show() {
        let cli = Cli::try_parse_from(["ischool", "faculty", "--filter", "b"]).unwrap();
        match cli.command {
            Commands::Show(ShowCommands::Faculty(args)) => {
                assert_eq!(args.filter, FilterKey::Letter('B'));
            }
            _ => panic!("expected the faculty command"),
        }

        let cli = Cli::try_parse_from(["ischool", "--verbose", "browse"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Show(ShowCommands::Browse)));
    }

    #[test]
    fn test_config_command_is_separate() {
        let cli = Cli::try_parse_from(["ischool", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(commands::config::ConfigCommands::Init { force: true })
        ));
    }
}
