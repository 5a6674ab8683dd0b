//! Grid placement development tools.
//!
//! # Usage
//!
//! ```bash
//! # Check a layout and a template catalog
//! placement-tools validate data/meadow.ron --templates data/templates.ron
//!
//! # Print a layout in the ASCII legend
//! placement-tools render data/meadow.ron
//!
//! # Replay a drag script, one JSON event per line on stdout
//! placement-tools run data/meadow.ron data/farm_script.ron --templates data/templates.ron
//! ```
//!
//! Logs go to stderr; stdout carries only command output.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use placement_tools::{
    loader::{load_catalog, load_layout, load_script},
    runner::{write_events, ScriptRunner},
    validate::validate_files,
    ToolError,
};

#[derive(Parser)]
#[command(name = "placement-tools")]
#[command(about = "Development tools for grid building placement")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a layout and optional template catalog
    Validate {
        /// Map layout file
        layout: PathBuf,

        /// Building template catalog
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },

    /// Print a layout as ASCII
    Render {
        /// Map layout file
        layout: PathBuf,
    },

    /// Replay a drag script and print JSON events
    Run {
        /// Map layout file
        layout: PathBuf,

        /// Drag script file
        script: PathBuf,

        /// Building template catalog
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging to stderr (stdout is for output).
    // RUST_LOG overrides the default level.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true),
        )
        .with(filter)
        .init();

    let result = match cli.command {
        Commands::Validate { layout, templates } => validate(&layout, templates.as_deref()),
        Commands::Render { layout } => render(&layout),
        Commands::Run {
            layout,
            script,
            templates,
        } => run(&layout, &script, templates.as_deref()),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn validate(layout: &Path, templates: Option<&Path>) -> Result<(), ToolError> {
    tracing::info!("Validating {}", layout.display());
    let summary = validate_files(layout, templates)?;
    tracing::info!(
        width = summary.width,
        height = summary.height,
        placeable = summary.placeable,
        templates = summary.templates,
        "Validation passed"
    );
    Ok(())
}

fn render(layout: &Path) -> Result<(), ToolError> {
    let grid = load_layout(layout)?.build_grid()?;
    print!("{}", placement_core::ascii::render_ascii(&grid, None));
    Ok(())
}

fn run(layout: &Path, script: &Path, templates: Option<&Path>) -> Result<(), ToolError> {
    let layout = load_layout(layout)?;
    let script = load_script(script)?;
    let catalog = templates.map(load_catalog).transpose()?;

    let events = ScriptRunner::new(&layout, &script, catalog.as_ref())?.run();
    write_events(&events, std::io::stdout().lock())
}
