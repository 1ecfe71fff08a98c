//! ASCII rendering and export module for town layouts
//!
//! Provides functions to render a generated layout as text and export it to
//! files. Useful for eyeballing a seed change without opening a window.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Write};

use chrono::Local;

use crate::terrain::TileType;
use crate::world::{WorldData, WorldLayout};

/// ASCII rendering modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AsciiMode {
    /// Ground tiles only
    Terrain,
    /// Ground with decorations, houses and landmarks drawn over it
    Full,
}

impl AsciiMode {
    pub fn name(&self) -> &'static str {
        match self {
            AsciiMode::Terrain => "Terrain",
            AsciiMode::Full => "Full",
        }
    }

    pub fn all() -> &'static [AsciiMode] {
        &[AsciiMode::Terrain, AsciiMode::Full]
    }
}

/// Render a layout to an ASCII string, one character per tile.
///
/// In [`AsciiMode::Full`] objects overwrite the ground in draw order:
/// decorations, then houses, then landmarks. Off-grid objects are skipped.
pub fn render_layout(layout: &WorldLayout, mode: AsciiMode) -> String {
    let width = layout.width();
    let height = layout.height();
    let mut grid: Vec<Vec<char>> = (0..height)
        .map(|row| (0..width).map(|col| layout.tiles.get(col, row).kind.ascii_char()).collect())
        .collect();

    if mode == AsciiMode::Full {
        let mut stamp = |col: i32, row: i32, ch: char| {
            if layout.tiles.in_bounds(col, row) {
                grid[row as usize][col as usize] = ch;
            }
        };
        for deco in &layout.decorations {
            stamp(deco.col, deco.row, deco.object.ascii_char());
        }
        for house in &layout.houses {
            stamp(house.col, house.row, house.building.ascii_char());
        }
        for landmark in &layout.landmarks {
            stamp(landmark.col, landmark.row, landmark.building.ascii_char());
        }
    }

    let mut result = String::with_capacity((width + 1) * height);
    for row in grid {
        result.extend(row);
        result.push('\n');
    }
    result
}

/// Generate legend for tile and object characters
pub fn legend() -> String {
    let mut legend = String::new();
    legend.push_str("=== LEGEND ===\n");
    legend.push_str("GROUND:\n");
    legend.push_str("  . Grass        , Grass2      ` Grass3      \" Forest floor\n");
    legend.push_str("  : Dirt         # Cobblestone ~ Water       _ Sand        * Flowers\n");
    legend.push_str("OBJECTS:\n");
    legend.push_str("  T Tree         P Pine        b Bush        o Rock\n");
    legend.push_str("  = Fence        i Lamp        f Flower patch  B Bridge\n");
    legend.push_str("BUILDINGS:\n");
    legend.push_str("  h House        S Shop        A Arena       C Council\n");
    legend.push_str("  L Library      V Tavern      W Well        F Fountain\n");
    legend
}

/// Count tiles of each kind.
pub fn tile_stats(layout: &WorldLayout) -> BTreeMap<String, usize> {
    let mut stats = BTreeMap::new();
    for (_, _, cell) in layout.tiles.iter() {
        let key = match cell.kind {
            TileType::Water | TileType::Water2 => "Water".to_string(),
            kind => format!("{kind:?}"),
        };
        *stats.entry(key).or_insert(0) += 1;
    }
    stats
}

/// Export a world to an ASCII file with a header, map, legend and statistics.
pub fn export_layout_file(world: &WorldData, path: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    let layout = &world.layout;
    let total = layout.width() * layout.height();

    // Header
    writeln!(file, "=== PIXEL TOWN LAYOUT ===")?;
    writeln!(file, "Seeds: {}", world.seeds)?;
    writeln!(file, "Signature: {:016x}", world.signature)?;
    writeln!(file, "Size: {}x{} tiles", layout.width(), layout.height())?;
    writeln!(file, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file)?;

    writeln!(file, "=== MAP ===")?;
    write!(file, "{}", render_layout(layout, AsciiMode::Full))?;
    writeln!(file)?;

    write!(file, "{}", legend())?;
    writeln!(file)?;

    writeln!(file, "=== STATISTICS ===")?;
    for (kind, count) in tile_stats(layout) {
        writeln!(file, "  {:<12} {:>5} ({:.1}%)", kind, count, count as f32 / total as f32 * 100.0)?;
    }
    writeln!(file, "  Landmarks    {:>5}", layout.landmarks.len())?;
    writeln!(file, "  Decorations  {:>5}", layout.decorations.len())?;
    writeln!(file, "  Houses       {:>5}", layout.houses.len())?;

    Ok(())
}
