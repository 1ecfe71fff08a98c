//! Generate a town without opening a window and write it to disk.
//!
//! Usage: dump_world [--png town.png] [--ascii town.txt] [--json layout.json]

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pixel_town::ascii::{self, AsciiMode};
use pixel_town::config::{locations_or_default, ViewerConfig};
use pixel_town::export;
use pixel_town::worldgen::WorldGenerator;

#[derive(Parser, Debug)]
#[command(name = "dump_world")]
#[command(about = "Render a generated town to PNG, ASCII or JSON")]
struct Args {
    /// JSON configuration file; only the generator section is used
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON array of anchor locations
    #[arg(short, long)]
    anchors: Option<PathBuf>,

    /// Master seed for world generation (derives every stage seed)
    #[arg(long)]
    world_seed: Option<u64>,

    /// Number of characters the houses are plotted for
    #[arg(short = 'n', long, default_value = "8")]
    characters: usize,

    /// Write a full-world PNG here
    #[arg(long)]
    png: Option<PathBuf>,

    /// Zoom for the PNG (0.5 to 3)
    #[arg(long, default_value = "0.5")]
    zoom: f32,

    /// Write an ASCII map with legend and statistics here
    #[arg(long)]
    ascii: Option<String>,

    /// Write the tile layout as JSON here
    #[arg(long)]
    json: Option<PathBuf>,
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
    if let Some(master) = args.world_seed {
        config.generator = config.generator.with_master_seed(master);
    }
    let locations = locations_or_default(args.anchors.as_deref())?;

    let mut generator = WorldGenerator::new(config.generator);
    let world = generator.generate(&locations, args.characters);
    info!(
        signature = %format!("{:016x}", world.signature),
        sprites = world.sprite_count(),
        houses = world.layout.houses.len(),
        "town generated"
    );

    if let Some(path) = &args.png {
        export::export_world_png(&world, &[], args.zoom, path)?;
    }
    if let Some(path) = &args.ascii {
        ascii::export_layout_file(&world, path)?;
        info!(path = %path, "saved ascii map");
    }
    if let Some(path) = &args.json {
        export::export_layout_json(&world, path)?;
    }
    if args.png.is_none() && args.ascii.is_none() && args.json.is_none() {
        print!("{}", ascii::render_layout(&world.layout, AsciiMode::Full));
    }
    Ok(())
}
