//! Venues - enter one or more venue locations from the terminal
//!
//! A keyboard and mouse driven form with:
//! - Repeating location cards with copy and append
//! - Per-field validation on save
//! - State dropdown and searchable country picker

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use venue_core::{paths, Config, CountryCatalog, RegionCatalog};

mod tui;

/// Venues - location entry form
#[derive(Parser)]
#[command(name = "venues")]
#[command(about = "Enter venue locations in a terminal form", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// JSON file with the state/region list
    #[arg(short, long)]
    regions: Option<PathBuf>,

    /// Config file (defaults to ~/.venues/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the states offered by the state picker
    Regions,

    /// List the countries offered by the country picker
    Countries,

    /// List available themes
    Themes,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Log to a file so output never lands on the TUI
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false);

    let log_dir = paths::logs_dir();
    let log_file = std::fs::create_dir_all(&log_dir)
        .and_then(|_| std::fs::File::create(log_dir.join(venue_core::constants::config::LOG_FILE_NAME)));
    match log_file {
        Ok(file) => builder.with_writer(std::sync::Mutex::new(file)).init(),
        Err(_) => builder.with_writer(std::io::sink).init(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    }
    .context("Failed to load config")?
    .with_overrides(cli.theme.clone(), cli.regions.clone());

    let regions = RegionCatalog::load_or_builtin(config.regions_file.as_deref())
        .context("Failed to load region catalog")?;

    match cli.command {
        Some(Commands::Regions) => {
            println!("States ({}):", regions.len());
            for region in regions.regions() {
                println!("  {:<4} {}", region.id, region.name);
            }
        }
        Some(Commands::Countries) => {
            let catalog = CountryCatalog::builtin();
            println!("Countries ({}):", catalog.len());
            for country in catalog.countries() {
                println!("  {:<4} {}", country.code, country.name);
            }
        }
        Some(Commands::Themes) => {
            let themes = tui::THEME_REGISTRY.list();
            println!("Available themes ({}):", themes.len());
            for theme in themes {
                let marker = if theme.name == config.theme { "*" } else { " " };
                println!(" {} {} - {}", marker, theme.name, theme.display_name);
            }
        }
        None => {
            let theme = tui::THEME_REGISTRY.get_or_default(&config.theme).clone();
            tracing::info!(
                theme = %theme.name,
                regions = regions.len(),
                "Starting venues"
            );

            let mut app = tui::App::new(regions, theme);
            app.run().await?;
        }
    }

    Ok(())
}
