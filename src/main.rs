//! flashdeck - Entry Point

use clap::Parser;
use flashdeck::config::ResolvedConfig;
use flashdeck::model::AppError;
use flashdeck::state::CardStore;
use std::path::PathBuf;
use tracing::info;

/// flashdeck - study programming flashcards in the terminal
#[derive(Parser, Debug)]
#[command(name = "flashdeck")]
#[command(version)]
#[command(about = "TUI flashcard viewer for programming question/answer cards")]
pub struct Args {
    /// Start on this category (e.g. Java, HTML, CSS, or All)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

/// Resolve configuration with the full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    // 1. Load config file (or None if missing)
    let config_file = flashdeck::config::load_config_with_precedence(args.config.clone())?;

    // 2. Merge with defaults
    let merged = flashdeck::config::merge_config(config_file);

    // 3. Apply environment variable overrides
    let with_env = flashdeck::config::apply_env_overrides(merged);

    // 4. Apply CLI argument overrides
    Ok(flashdeck::config::apply_cli_overrides(
        with_env,
        args.category.clone(),
        args.no_color,
    ))
}

fn run(args: Args) -> Result<(), AppError> {
    let config = resolve_config(&args)?;

    // Logs go to a file; the terminal belongs to the TUI
    flashdeck::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let store = CardStore::seeded()?;
    info!(
        cards = store.len(),
        categories = ?store.categories(),
        "Catalog loaded"
    );

    let cli_args = flashdeck::view::CliArgs::new(config.category, config.color);
    flashdeck::view::run_with_store(store, cli_args)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}
