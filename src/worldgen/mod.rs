//! Procedural town generation
//!
//! Turns a list of anchor locations and a population size into a finished
//! [`WorldData`]. The pipeline runs in a fixed order, and each stage owns its
//! own seeded stream:
//!
//! 1. **Tiles**: base grass scatter, river, roads, forest border, anchor aprons
//! 2. **Decorations**: trees, bushes, rocks, lamps, flowers and fences
//! 3. **Houses**: residential plots and their dirt aprons
//! 4. **Batching**: chunked terrain sprites plus object sprites
//!
//! [`WorldGenerator`] caches the last result keyed by the anchor signature so
//! repeated calls with an unchanged anchor set are free.

pub mod batching;
pub mod decorations;
pub mod houses;
pub mod roads;
pub mod tiles;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::coords::{CoordMap, WORLD_TILES};
use crate::seeds::WorldSeeds;
use crate::world::{Landmark, Location, WorldData, WorldLayout};

/// Parameters for town generation.
///
/// The defaults reproduce the stock town exactly; changing any of them
/// changes the layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenParams {
    pub seeds: WorldSeeds,

    // =========================================================================
    // Grid
    // =========================================================================

    /// Tiles along each side of the square grid (default: 80)
    pub world_tiles: usize,
    /// Tiles along each side of a terrain batch (default: 10)
    pub chunk_size: usize,

    // =========================================================================
    // Tiles
    // =========================================================================

    /// Column the river meanders around (default: 55)
    pub river_column: i32,
    /// Meander amplitude in tiles (default: 3)
    pub river_amplitude: f32,
    /// Meander frequency per row (default: 0.15)
    pub river_frequency: f32,
    /// Anchor pairs closer than this Manhattan distance get a direct road (default: 30)
    pub road_link_distance: i32,
    /// Grass within this many tiles of the edge darkens to forest (default: 4)
    pub forest_border: usize,
    /// Half-size of the dirt square around each anchor (default: 2)
    pub apron_radius: i32,

    // =========================================================================
    // Decorations
    // =========================================================================

    /// Chebyshev radius around anchors kept free of scatter (default: 4)
    pub no_spawn_radius: i32,
    /// Depth of the border forest band (default: 8)
    pub forest_depth: usize,
    pub forest_draws: u32,
    pub meadow_tree_draws: u32,
    pub bush_draws: u32,
    pub rock_draws: u32,
    pub flower_draws: u32,
    /// Distance of lamp posts from their anchor (default: 3)
    pub lamp_offset: i32,
    /// Only the first N anchors get fences (default: 3)
    pub fenced_anchors: usize,

    // =========================================================================
    // Houses
    // =========================================================================

    /// Houses are built even for a tiny population (default: 6)
    pub min_houses: usize,
    /// Houses per row of the residential grid (default: 6)
    pub houses_per_row: usize,
    /// Grid tile of the first residential lot (default: (15, 50))
    pub residential_origin: (i32, i32),
    /// Tile spacing between lots (default: 5)
    pub lot_spacing: i32,
    /// Lots are clamped into `[margin, world_tiles - 2 * margin]` (default: 5)
    pub lot_margin: i32,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            seeds: WorldSeeds::default(),
            world_tiles: WORLD_TILES,
            chunk_size: 10,
            river_column: 55,
            river_amplitude: 3.0,
            river_frequency: 0.15,
            road_link_distance: 30,
            forest_border: 4,
            apron_radius: 2,
            no_spawn_radius: 4,
            forest_depth: 8,
            forest_draws: 120,
            meadow_tree_draws: 30,
            bush_draws: 25,
            rock_draws: 15,
            flower_draws: 12,
            lamp_offset: 3,
            fenced_anchors: 3,
            min_houses: 6,
            houses_per_row: 6,
            residential_origin: (15, 50),
            lot_spacing: 5,
            lot_margin: 5,
        }
    }
}

impl GenParams {
    /// Map between simulation space and this grid's world pixels.
    pub fn coord_map(&self) -> CoordMap {
        CoordMap::for_tiles(self.world_tiles)
    }

    /// Replace every stage seed with one derived from `master`.
    pub fn with_master_seed(mut self, master: u64) -> Self {
        self.seeds = WorldSeeds::from_master(master);
        self
    }
}

/// Hash of the anchor set: FNV-1a 64 over `name:x:y` joined by `|`.
///
/// Only the anchors key the cache; the population size does not.
pub fn anchor_signature(locations: &[Location]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let key = locations
        .iter()
        .map(|l| format!("{}:{}:{}", l.name, l.x, l.y))
        .collect::<Vec<_>>()
        .join("|");

    key.bytes().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Town generator with a single-entry cache keyed by anchor signature.
#[derive(Debug, Default)]
pub struct WorldGenerator {
    params: GenParams,
    cached: Option<(u64, Arc<WorldData>)>,
}

impl WorldGenerator {
    pub fn new(params: GenParams) -> Self {
        Self { params, cached: None }
    }

    pub fn params(&self) -> &GenParams {
        &self.params
    }

    /// Signature of the cached world, if any.
    pub fn cached_signature(&self) -> Option<u64> {
        self.cached.as_ref().map(|(sig, _)| *sig)
    }

    /// Generate the town for `locations`, or return the cached one when the
    /// anchor set is unchanged. A cache hit returns the same `Arc`.
    pub fn generate(&mut self, locations: &[Location], character_count: usize) -> Arc<WorldData> {
        let signature = anchor_signature(locations);
        if let Some((cached_sig, world)) = &self.cached {
            if *cached_sig == signature {
                debug!(signature, "world cache hit");
                return Arc::clone(world);
            }
        }

        info!(signature, anchors = locations.len(), character_count, "generating world");
        let world = Arc::new(Self::build(&self.params, locations, character_count));
        self.cached = Some((signature, Arc::clone(&world)));
        world
    }

    /// Drop the cached world so the next `generate` rebuilds it.
    pub fn invalidate(&mut self) {
        if self.cached.take().is_some() {
            debug!("world cache invalidated");
        }
    }

    /// Run the whole pipeline, bypassing any cache.
    pub fn build(params: &GenParams, locations: &[Location], character_count: usize) -> WorldData {
        let coords = params.coord_map();
        let landmarks: Vec<Landmark> = locations
            .iter()
            .map(|loc| {
                let (col, row) = coords.sim_to_tile(loc.x, loc.y);
                Landmark {
                    name: loc.name.clone(),
                    col,
                    row,
                    building: loc.building(),
                }
            })
            .collect();
        let anchors: Vec<(i32, i32)> = landmarks.iter().map(|l| (l.col, l.row)).collect();

        // Stage 1: tiles
        let mut tiles = tiles::base_terrain(params);
        tiles::carve_river(&mut tiles, params);
        let road_cells = roads::carve_roads(&mut tiles, &anchors, params);
        tiles::darken_forest_border(&mut tiles, params);
        tiles::stamp_anchor_aprons(&mut tiles, &anchors, params);
        debug!(road_cells, "tiles stamped");

        // Stage 2: decorations read the tiles before house aprons exist
        let decorations = decorations::scatter(&tiles, &anchors, params);
        debug!(count = decorations.len(), "decorations scattered");

        // Stage 3: houses
        let houses = houses::plot_houses(character_count, params);
        houses::stamp_house_aprons(&mut tiles, &houses);
        debug!(count = houses.len(), "houses plotted");

        let layout = WorldLayout {
            tiles,
            landmarks,
            decorations,
            houses,
        };
        let world = batching::package(layout, locations, params, anchor_signature(locations));
        info!(
            chunks = world.terrain_batches.len(),
            sprites = world.sprite_count(),
            "world ready"
        );
        world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::TileType;

    fn scenario() -> Vec<Location> {
        vec![
            Location::new("Hub", 0.0, 0.0, "trade"),
            Location::new("East", 50.0, 0.0, "knowledge"),
            Location::new("West", -40.0, 30.0, "diplomacy"),
        ]
    }

    /// Cells of the L-shaped road from `a` to `b`.
    fn l_path(a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
        let mut cells = Vec::new();
        for c in a.0.min(b.0)..=a.0.max(b.0) {
            cells.push((c, a.1));
        }
        for r in a.1.min(b.1)..=a.1.max(b.1) {
            cells.push((b.0, r));
        }
        cells
    }

    #[test]
    fn test_generation_is_deterministic() {
        let params = GenParams::default();
        let a = WorldGenerator::build(&params, &scenario(), 8);
        let b = WorldGenerator::build(&params, &scenario(), 8);
        assert_eq!(a, b);
    }

    #[test]
    fn test_master_seed_reseeds_every_stage() {
        let params = GenParams::default().with_master_seed(2024);
        assert_eq!(params.seeds, WorldSeeds::from_master(2024));

        let a = WorldGenerator::build(&params, &scenario(), 5);
        let b = WorldGenerator::build(&params.clone(), &scenario(), 5);
        assert_eq!(a, b);

        let stock = WorldGenerator::build(&GenParams::default(), &scenario(), 5);
        assert_ne!(a.layout.tiles, stock.layout.tiles);
        assert_ne!(a.layout.houses, stock.layout.houses);
    }

    #[test]
    fn test_cache_returns_same_world() {
        let mut generator = WorldGenerator::default();
        let first = generator.generate(&scenario(), 8);
        let second = generator.generate(&scenario(), 8);
        assert!(Arc::ptr_eq(&first, &second));

        // Population size does not key the cache
        let third = generator.generate(&scenario(), 40);
        assert!(Arc::ptr_eq(&first, &third));
    }

    #[test]
    fn test_cache_misses_on_changed_anchors_and_after_invalidate() {
        let mut generator = WorldGenerator::default();
        let first = generator.generate(&scenario(), 8);

        let mut moved = scenario();
        moved[2].x = -41.0;
        let second = generator.generate(&moved, 8);
        assert!(!Arc::ptr_eq(&first, &second));

        generator.invalidate();
        assert_eq!(generator.cached_signature(), None);
        let third = generator.generate(&moved, 8);
        assert!(!Arc::ptr_eq(&second, &third));
        assert_eq!(*second, *third);
    }

    #[test]
    fn test_signature_depends_on_name_and_position() {
        let base = scenario();
        let mut renamed = scenario();
        renamed[0].name = "Plaza".into();
        assert_ne!(anchor_signature(&base), anchor_signature(&renamed));
        assert_eq!(anchor_signature(&base), anchor_signature(&scenario()));
    }

    #[test]
    fn test_three_anchor_scenario() {
        let world = WorldGenerator::build(&GenParams::default(), &scenario(), 5);
        let tiles = &world.layout.tiles;
        let anchors: Vec<(i32, i32)> =
            world.layout.landmarks.iter().map(|l| (l.col, l.row)).collect();
        assert_eq!(anchors, vec![(40, 40), (56, 40), (26, 50)]);

        // Hub reaches both other anchors; the east road fords the river
        for target in &anchors[1..] {
            for (c, r) in l_path(anchors[0], *target) {
                let kind = tiles.get(c as usize, r as usize).kind;
                assert!(
                    kind == TileType::Cobblestone || kind.is_water(),
                    "road cell ({c},{r}) is {kind:?}"
                );
            }
        }

        // No grass survives inside an anchor apron
        for &(ac, ar) in &anchors {
            for dr in -2..=2 {
                for dc in -2..=2 {
                    let cell = tiles.get_checked(ac + dc, ar + dr).unwrap();
                    assert!(!cell.kind.is_grass(), "apron cell at ({},{})", ac + dc, ar + dr);
                }
            }
        }

        // No scatter inside the exclusion zone (rocks, lamps and fences are exempt)
        for deco in &world.layout.decorations {
            use crate::terrain::ObjectType::*;
            if matches!(deco.object, Tree | Pine | Bush | FlowerPatch) {
                for &(ac, ar) in &anchors {
                    let near = (deco.col - ac).abs() <= 4 && (deco.row - ar).abs() <= 4;
                    assert!(!near, "{:?} at ({},{}) inside exclusion zone", deco.object, deco.col, deco.row);
                }
            }
        }

        assert_eq!(world.terrain_batches.len(), 64);
        assert_eq!(world.layout.houses.len(), 6);
    }

    #[test]
    fn test_zero_anchors_still_builds_a_town() {
        let world = WorldGenerator::build(&GenParams::default(), &[], 0);
        assert_eq!(world.terrain_batches.len(), 64);
        assert!(world.location_buildings.is_empty());
        assert_eq!(world.layout.houses.len(), 6);
        assert!(!world.decorations.is_empty());
    }
}
