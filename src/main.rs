use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pixel_town::config::{locations_or_default, ViewerConfig};
use pixel_town::viewer;

#[derive(Parser, Debug)]
#[command(name = "pixel_town")]
#[command(about = "Walk around a procedurally generated pixel town")]
struct Args {
    /// JSON configuration file (window, generator and demo sections)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON array of anchor locations (uses the stock town if not specified)
    #[arg(short, long)]
    anchors: Option<PathBuf>,

    /// Window width in pixels
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Number of demo characters
    #[arg(short = 'n', long)]
    characters: Option<usize>,

    /// Demo random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Master seed for world generation (derives every stage seed)
    #[arg(long)]
    world_seed: Option<u64>,

    /// Initial camera zoom
    #[arg(short, long)]
    zoom: Option<f32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ViewerConfig::from_file(path)?,
        None => ViewerConfig::default(),
    };
    // Command line wins over the file
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    if let Some(characters) = args.characters {
        config.demo.characters = characters;
    }
    if let Some(zoom) = args.zoom {
        config.window.zoom = zoom;
    }
    if let Some(master) = args.world_seed {
        config.generator = config.generator.with_master_seed(master);
    }
    if args.seed.is_some() {
        config.demo.seed = args.seed;
    }

    let locations = locations_or_default(args.anchors.as_deref())?;
    info!(
        anchors = locations.len(),
        seeds = %config.generator.seeds,
        width = config.window.width,
        height = config.window.height,
        "pixel town starting"
    );
    println!("Controls: drag to pan, scroll to zoom, click a villager to select");
    println!("  Space: pause   C: recentre   Esc: exit");

    viewer::run_viewer(&config, &locations)?;
    Ok(())
}
