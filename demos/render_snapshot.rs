//! Render one arrivals snapshot the way the sign would.
//!
//! ```bash
//! cargo run --features demo --bin render_snapshot -- --input snapshot.json --png sign.png
//! ```
//!
//! The frame is printed to stdout one row per line. With `--png`, the same frame is also
//! rendered into a preview image of the 64x32 matrix. An unreadable or malformed snapshot
//! shows `NO DATA`, exactly as the sign would.

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use subway_sign::Result;
use subway_sign::config::SignConfig;
use subway_sign::console::ConsoleSurface;
use subway_sign::matrix::MatrixCanvas;
use subway_sign::png_panel::PngPanel;
use subway_sign::renderer::SignRenderer;
use subway_sign::snapshot::Snapshot;

/// Render an arrivals snapshot to the console and optionally to a PNG preview
#[derive(Parser)]
#[command(name = "render_snapshot")]
#[command(about = "Render a subway arrivals snapshot as the LED sign would show it")]
struct Cli {
    /// Sign configuration file (JSON). Built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Arrivals snapshot file (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Also write the frame as a PNG preview
    #[arg(short, long)]
    png: Option<PathBuf>,

    /// Clear the sign after rendering, as on shutdown
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SignConfig::load(path)?,
        None => SignConfig::default(),
    };

    let snapshot = match std::fs::read_to_string(&cli.input) {
        Ok(json) => Snapshot::from_json_str(&json),
        Err(err) => {
            warn!("cannot read {}: {err}", cli.input.display());
            None
        }
    };

    let console = ConsoleSurface::new(std::io::stdout(), &config.geometry());
    let mut renderer = SignRenderer::from_config(console, &config);
    let frame = renderer.render(snapshot.as_ref())?;
    info!("rendered {} draw operations", frame.ops().count());

    if let Some(png_path) = &cli.png {
        let panel = PngPanel::from_display(png_path, &config.display)?;
        let canvas = MatrixCanvas::<_, 64, 32>::for_display(panel, &config.display)?;
        let mut preview = SignRenderer::from_config(canvas, &config);
        preview.render(snapshot.as_ref())?;
    }

    if cli.clear {
        renderer.clear()?;
    }
    Ok(())
}
