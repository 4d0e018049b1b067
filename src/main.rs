//! shapecast: script-driven 2D polygon rasterizer
//!
//! Reads a scene script (a size header plus one regular polygon per line),
//! transforms each unit polygon into place and prints the resulting pixel
//! grid to the terminal.
//!
//! Usage:
//!   shapecast render square.txt              # Draw with the configured glyphs
//!   shapecast render scene.txt --mode default --png out.png
//!   shapecast inspect scene.txt              # Dump the parsed scene as RON

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod math;
mod rasterizer;
mod scene;
mod script;
mod shapes;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

use config::RenderConfig;
use rasterizer::DisplayMode;
use scene::{RenderOptions, ShapeSpec};
use script::{load_script, resolve_script_path, ParsedScript};

#[derive(Parser)]
#[command(name = "shapecast", version = VERSION)]
#[command(about = "Rasterize scripted 2D polygon scenes to the terminal")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Config file (defaults to ./shapecast.ron, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a script and print the pixel grid
    Render {
        /// Script path, or a name inside the configured script directory
        script: PathBuf,
        /// Glyph set for the printed grid
        #[arg(long, value_enum)]
        mode: Option<DisplayMode>,
        /// Maximum pixel-to-edge distance that lights a pixel
        #[arg(long)]
        threshold: Option<f64>,
        /// Also save the grid as a PNG
        #[arg(long)]
        png: Option<PathBuf>,
        /// Show a progress bar while drawing
        #[arg(long)]
        progress: bool,
    },
    /// Parse a script and print the resulting scene as RON
    Inspect {
        script: PathBuf,
    },
}

fn main() -> Result<()> {
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;
    tracing::debug!(version = VERSION, "Starting");

    let config = RenderConfig::resolve(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Render { script, mode, threshold, png, progress } => {
            let mut config = config;
            if let Some(mode) = mode {
                config.display_mode = mode;
            }
            if let Some(threshold) = threshold {
                config.threshold = threshold;
            }
            config.validate().context("Invalid render settings")?;
            render(&config, &script, png.as_deref(), progress)
        }
        Commands::Inspect { script } => inspect(&config, &script),
    }
}

/// Install the global tracing subscriber
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let builder = tracing_subscriber::fmt().with_max_level(level).with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn load(config: &RenderConfig, name: &Path) -> Result<ParsedScript> {
    let path = resolve_script_path(name, &config.script_dir);
    let parsed = load_script(&path, config.default_size())?;
    if !parsed.header_valid {
        tracing::warn!(
            height = parsed.scene.height,
            width = parsed.scene.width,
            "Unusable size header, using default size"
        );
    }
    Ok(parsed)
}

fn render(config: &RenderConfig, name: &Path, png: Option<&Path>, progress: bool) -> Result<()> {
    let parsed = load(config, name)?;

    let options = RenderOptions {
        threshold: config.threshold,
        progress,
    };
    let buffer = parsed.scene.render(&options).context("Failed to rasterize scene")?;
    buffer.display(config.display_mode);

    if let Some(path) = png {
        buffer
            .save_png(path, config.png_scale)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        tracing::info!(path = %path.display(), scale = config.png_scale, "Saved PNG");
    }

    if !parsed.diagnostics.is_empty() {
        eprintln!("Skipped {} script line(s):", parsed.diagnostics.len());
        for diagnostic in &parsed.diagnostics {
            eprintln!("  {}", diagnostic);
        }
    }
    Ok(())
}

/// Parsed-script summary printed by `inspect`
#[derive(Serialize)]
struct InspectReport {
    height: usize,
    width: usize,
    header_valid: bool,
    shapes: Vec<ShapeSpec>,
    diagnostics: Vec<String>,
}

fn inspect(config: &RenderConfig, name: &Path) -> Result<()> {
    let parsed = load(config, name)?;

    let report = InspectReport {
        height: parsed.scene.height,
        width: parsed.scene.width,
        header_valid: parsed.header_valid,
        shapes: parsed.scene.shapes.iter().map(|s| s.spec).collect(),
        diagnostics: parsed.diagnostics.iter().map(|d| d.to_string()).collect(),
    };
    let text = ron::ser::to_string_pretty(&report, ron::ser::PrettyConfig::default())
        .context("Failed to serialize scene")?;
    println!("{}", text);
    Ok(())
}
