//! Mapping between simulation space and world pixel space.
//!
//! The simulation reasons in a fixed square range (`-120..=120` by default);
//! the renderer works in world pixels, where one tile is `TILE_PX * SCALE`
//! pixels wide. A single linear map converts in both directions and is used
//! both to place generated content and to re-project live characters.

/// Art pixels per tile edge.
pub const TILE_PX: u32 = 16;

/// Art pixels are drawn at this scale for the chunky pixel look.
pub const SCALE: f32 = 2.0;

/// Tiles across the generated world.
pub const WORLD_TILES: usize = 80;

/// World pixels per tile edge.
pub const TILE_WORLD_PX: f32 = TILE_PX as f32 * SCALE;

/// Lower bound of the simulation coordinate range.
pub const SIM_MIN: f32 = -120.0;

/// Upper bound of the simulation coordinate range.
pub const SIM_MAX: f32 = 120.0;

/// Linear map between simulation coordinates and world pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordMap {
    sim_min: f32,
    sim_range: f32,
    world_px: f32,
}

impl CoordMap {
    /// Build a map for a simulation range and a world extent in pixels.
    pub fn new(sim_min: f32, sim_max: f32, world_px: f32) -> Self {
        Self {
            sim_min,
            sim_range: sim_max - sim_min,
            world_px,
        }
    }

    /// The stock mapping: `-120..120` onto an `80`-tile world.
    pub fn standard() -> Self {
        Self::for_tiles(WORLD_TILES)
    }

    /// Standard simulation range onto a world `tiles` tiles across.
    pub fn for_tiles(tiles: usize) -> Self {
        Self::new(SIM_MIN, SIM_MAX, tiles as f32 * TILE_WORLD_PX)
    }

    /// World extent in pixels (both axes).
    pub fn world_px(&self) -> f32 {
        self.world_px
    }

    pub fn sim_to_world(&self, sx: f32, sy: f32) -> (f32, f32) {
        (
            (sx - self.sim_min) / self.sim_range * self.world_px,
            (sy - self.sim_min) / self.sim_range * self.world_px,
        )
    }

    pub fn world_to_sim(&self, wx: f32, wy: f32) -> (f32, f32) {
        (
            wx / self.world_px * self.sim_range + self.sim_min,
            wy / self.world_px * self.sim_range + self.sim_min,
        )
    }

    /// Tile `(col, row)` containing a simulation point. May lie off the grid.
    pub fn sim_to_tile(&self, sx: f32, sy: f32) -> (i32, i32) {
        let (wx, wy) = self.sim_to_world(sx, sy);
        world_to_tile(wx, wy)
    }
}

impl Default for CoordMap {
    fn default() -> Self {
        Self::standard()
    }
}

/// Tile `(col, row)` containing a world pixel.
pub fn world_to_tile(wx: f32, wy: f32) -> (i32, i32) {
    (
        (wx / TILE_WORLD_PX).floor() as i32,
        (wy / TILE_WORLD_PX).floor() as i32,
    )
}

/// Top-left world pixel of a tile.
pub fn tile_to_world(col: i32, row: i32) -> (f32, f32) {
    (col as f32 * TILE_WORLD_PX, row as f32 * TILE_WORLD_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_extent() {
        let map = CoordMap::standard();
        assert_eq!(map.world_px(), 2560.0);
        assert_eq!(map.sim_to_world(-120.0, -120.0), (0.0, 0.0));
        assert_eq!(map.sim_to_world(120.0, 120.0), (2560.0, 2560.0));
        assert_eq!(map.sim_to_world(0.0, 0.0), (1280.0, 1280.0));
    }

    #[test]
    fn test_round_trip_over_sim_range() {
        let map = CoordMap::standard();
        let mut x = SIM_MIN;
        while x <= SIM_MAX {
            let mut y = SIM_MIN;
            while y <= SIM_MAX {
                let (wx, wy) = map.sim_to_world(x, y);
                let (sx, sy) = map.world_to_sim(wx, wy);
                assert!((sx - x).abs() < 1e-3, "x {} -> {}", x, sx);
                assert!((sy - y).abs() < 1e-3, "y {} -> {}", y, sy);
                y += 7.3;
            }
            x += 5.9;
        }
    }

    #[test]
    fn test_anchor_tiles() {
        let map = CoordMap::standard();
        assert_eq!(map.sim_to_tile(0.0, 0.0), (40, 40));
        assert_eq!(map.sim_to_tile(50.0, 0.0), (56, 40));
        assert_eq!(map.sim_to_tile(-40.0, 30.0), (26, 50));
    }

    #[test]
    fn test_tile_world_inverse() {
        for col in [0, 7, 40, 79] {
            let (wx, wy) = tile_to_world(col, col);
            assert_eq!(world_to_tile(wx + 1.0, wy + 31.0), (col, col));
        }
    }
}
