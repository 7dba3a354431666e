use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelf::cli::App;
use shelf::config::{CatalogKind, Config};
use shelf::models::{Games, Kind, Notes};
use shelf::persistence::JsonFile;
use shelf::store::Catalog;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Console catalog for tabletop games and to-do notes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Data file used by save and load
    #[arg(short, long, env = "SHELF_FILE", global = true)]
    file: Option<std::path::PathBuf>,

    /// Load the data file before showing the menu
    #[arg(short, long, global = true)]
    load: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage games and their plays (default)
    Games,
    /// Manage notes and their to-do items
    Notes,
}

/// Initialize tracing on stderr; stdout belongs to the menu.
fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_session<K: Kind>(config: &Config) -> anyhow::Result<()> {
    let catalog = Catalog::<K>::new(JsonFile::new(config.data_file.clone()));
    let stdin = io::stdin();
    let mut app = App::new(catalog, stdin.lock(), io::stdout());

    if config.load_on_start {
        app.load().context("Failed to write to terminal")?;
    }
    app.run().context("Terminal I/O failed")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let kind = match cli.command {
        Some(Commands::Notes) => CatalogKind::Notes,
        Some(Commands::Games) | None => CatalogKind::Games,
    };
    let config = Config::resolve(kind, cli.file, cli.load, cli.verbose)?;
    init_tracing(config.default_log_filter());

    tracing::info!(
        "Starting {} session with {}",
        config.kind.as_str(),
        config.data_file.display()
    );

    match config.kind {
        CatalogKind::Games => run_session::<Games>(&config),
        CatalogKind::Notes => run_session::<Notes>(&config),
    }
}
