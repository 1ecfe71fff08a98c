//! Tile stages: base terrain, river, forest border and anchor aprons.
//!
//! Stages run in a fixed order and each later stage overwrites the earlier
//! ones where its rules allow. Roads live in [`super::roads`].

use crate::seeds::MinStdRng;
use crate::terrain::{TileCell, TileType};
use crate::tilemap::Tilemap;

use super::GenParams;

/// Grass scatter over the whole grid.
///
/// Two draws per cell in row-major order: the kind, then the variant.
pub fn base_terrain(params: &GenParams) -> Tilemap<TileCell> {
    let mut rng = MinStdRng::new(params.seeds.terrain);
    let n = params.world_tiles;
    Tilemap::from_fn(n, n, |_, _| {
        let v = rng.next_f64();
        let kind = if v < 0.10 {
            TileType::Grass2
        } else if v < 0.20 {
            TileType::Grass3
        } else if v < 0.22 {
            TileType::Flowers
        } else {
            TileType::Grass
        };
        let variant = rng.below(3) as u8;
        TileCell::new(kind, variant)
    })
}

/// Column of the river's centre on `row`.
pub fn river_center(row: usize, params: &GenParams) -> i32 {
    let meander = (row as f32 * params.river_frequency).sin() * params.river_amplitude;
    params.river_column + meander.floor() as i32
}

/// Carve a three-wide meandering river with sand banks on both sides.
pub fn carve_river(tiles: &mut Tilemap<TileCell>, params: &GenParams) {
    for row in 0..tiles.height {
        let center = river_center(row, params);
        for c in center - 1..=center + 1 {
            let kind = if (row as i32 + c) % 2 == 0 {
                TileType::Water
            } else {
                TileType::Water2
            };
            if let Some(cell) = tiles.get_checked_mut(c, row as i32) {
                *cell = TileCell::plain(kind);
            }
        }
        for c in [center - 2, center + 2] {
            if let Some(cell) = tiles.get_checked_mut(c, row as i32) {
                *cell = TileCell::plain(TileType::Sand);
            }
        }
    }
}

/// Grass near the map edge becomes dark forest floor.
pub fn darken_forest_border(tiles: &mut Tilemap<TileCell>, params: &GenParams) {
    let (width, height) = (tiles.width, tiles.height);
    for (col, row, cell) in tiles.iter_mut() {
        let edge = col.min(row).min(width - 1 - col).min(height - 1 - row);
        if edge < params.forest_border && cell.kind.is_grass() {
            *cell = TileCell::plain(TileType::GrassDark);
        }
    }
}

/// Dirt square around every anchor, over grass only.
pub fn stamp_anchor_aprons(tiles: &mut Tilemap<TileCell>, anchors: &[(i32, i32)], params: &GenParams) {
    let r = params.apron_radius;
    for &(ac, ar) in anchors {
        for dr in -r..=r {
            for dc in -r..=r {
                stamp_dirt(tiles, ac + dc, ar + dr);
            }
        }
    }
}

/// Turn one grass cell into dirt. Off-grid and non-grass cells are left alone.
pub fn stamp_dirt(tiles: &mut Tilemap<TileCell>, col: i32, row: i32) {
    if let Some(cell) = tiles.get_checked_mut(col, row) {
        if cell.kind.is_grass() {
            *cell = TileCell::plain(TileType::Dirt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_terrain_consumes_two_draws_per_cell() {
        let params = GenParams::default();
        let tiles = base_terrain(&params);

        let mut rng = MinStdRng::new(params.seeds.terrain);
        for _ in 0..2 * 79 {
            rng.next_f64();
        }
        let v = rng.next_f64();
        let variant = rng.below(3) as u8;
        let last = tiles.get(79, 0);
        assert_eq!(last.variant, variant);
        assert_eq!(last.kind == TileType::Grass, v >= 0.22);
    }

    #[test]
    fn test_base_terrain_is_mostly_grass() {
        let tiles = base_terrain(&GenParams::default());
        let grass = tiles.iter().filter(|(_, _, c)| c.kind == TileType::Grass).count();
        let flowers = tiles.iter().filter(|(_, _, c)| c.kind == TileType::Flowers).count();
        assert!(grass > 80 * 80 * 7 / 10);
        assert!(flowers > 0 && flowers < 80 * 80 / 10);
    }

    #[test]
    fn test_river_shape() {
        let params = GenParams::default();
        let mut tiles = base_terrain(&params);
        carve_river(&mut tiles, &params);

        // sin(40 * 0.15) is just below zero, pulling the river one column west
        assert_eq!(river_center(40, &params), 54);
        for c in 53..=55 {
            assert!(tiles.get(c, 40).kind.is_water());
        }
        assert_eq!(tiles.get(52, 40).kind, TileType::Sand);
        assert_eq!(tiles.get(56, 40).kind, TileType::Sand);
        assert_eq!(tiles.get(54, 40).kind, TileType::Water);
        assert_eq!(tiles.get(53, 40).kind, TileType::Water2);

        for row in 0..80 {
            let water = (0..80).filter(|&c| tiles.get(c, row).kind.is_water()).count();
            assert_eq!(water, 3, "row {row}");
        }
    }

    #[test]
    fn test_forest_border_only_replaces_grass() {
        let params = GenParams::default();
        let mut tiles = Tilemap::new_with(80, 80, TileCell::plain(TileType::Grass));
        tiles.set(0, 0, TileCell::plain(TileType::Flowers));
        darken_forest_border(&mut tiles, &params);

        assert_eq!(tiles.get(0, 0).kind, TileType::Flowers);
        assert_eq!(tiles.get(3, 40).kind, TileType::GrassDark);
        assert_eq!(tiles.get(76, 40).kind, TileType::GrassDark);
        assert_eq!(tiles.get(4, 40).kind, TileType::Grass);
        assert_eq!(tiles.get(75, 40).kind, TileType::Grass);
    }

    #[test]
    fn test_aprons_skip_non_grass_and_off_grid() {
        let params = GenParams::default();
        let mut tiles = Tilemap::new_with(80, 80, TileCell::plain(TileType::Grass));
        tiles.set(11, 10, TileCell::plain(TileType::Cobblestone));
        stamp_anchor_aprons(&mut tiles, &[(10, 10), (0, 79)], &params);

        assert_eq!(tiles.get(8, 8).kind, TileType::Dirt);
        assert_eq!(tiles.get(12, 12).kind, TileType::Dirt);
        assert_eq!(tiles.get(11, 10).kind, TileType::Cobblestone);
        assert_eq!(tiles.get(13, 10).kind, TileType::Grass);
        assert_eq!(tiles.get(2, 77).kind, TileType::Dirt);
    }
}
