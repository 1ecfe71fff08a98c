//! Residential plots.

use crate::buildings::BuildingType;
use crate::coords::tile_to_world;
use crate::seeds::MinStdRng;
use crate::terrain::TileCell;
use crate::tilemap::Tilemap;
use crate::world::HousePlot;

use super::tiles::stamp_dirt;
use super::GenParams;

/// Houses to build for a population: `max(min, ceil(characters * 1.2))`.
pub fn house_count(character_count: usize, params: &GenParams) -> usize {
    let scaled = (character_count * 6).div_ceil(5);
    scaled.max(params.min_houses)
}

/// Lay houses out on a jittered grid in the residential quarter.
///
/// Three draws per house: column jitter, row jitter, size.
pub fn plot_houses(character_count: usize, params: &GenParams) -> Vec<HousePlot> {
    let mut rng = MinStdRng::new(params.seeds.houses);
    let (origin_col, origin_row) = params.residential_origin;
    let lo = params.lot_margin;
    let hi = params.world_tiles as i32 - 2 * params.lot_margin;
    let per_row = params.houses_per_row.max(1);

    (0..house_count(character_count, params))
        .map(|i| {
            let grid_col = (i % per_row) as i32;
            let grid_row = (i / per_row) as i32;
            let col = origin_col + grid_col * params.lot_spacing + rng.below(3) as i32 - 1;
            let row = origin_row + grid_row * params.lot_spacing + rng.below(3) as i32 - 1;
            let col = col.clamp(lo, hi);
            let row = row.clamp(lo, hi);

            let roll = rng.next_f64();
            let building = if roll > 0.7 {
                BuildingType::HouseLarge
            } else if roll > 0.4 {
                BuildingType::HouseMedium
            } else {
                BuildingType::HouseSmall
            };

            let (world_x, world_y) = tile_to_world(col, row);
            HousePlot {
                col,
                row,
                world_x,
                world_y,
                building,
            }
        })
        .collect()
}

/// Dirt yard under and around each house, over grass only.
pub fn stamp_house_aprons(tiles: &mut Tilemap<TileCell>, houses: &[HousePlot]) {
    for house in houses {
        for dr in -1..=2 {
            for dc in -1..=2 {
                stamp_dirt(tiles, house.col + dc, house.row + dr);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::TileType;

    #[test]
    fn test_house_count() {
        let params = GenParams::default();
        assert_eq!(house_count(0, &params), 6);
        assert_eq!(house_count(5, &params), 6);
        assert_eq!(house_count(6, &params), 8);
        assert_eq!(house_count(8, &params), 10);
        assert_eq!(house_count(10, &params), 12);
    }

    #[test]
    fn test_plots_stay_in_the_residential_quarter() {
        let params = GenParams::default();
        let plots = plot_houses(60, &params);
        assert_eq!(plots.len(), 72);
        for p in &plots {
            assert!((5..=70).contains(&p.col) && (5..=70).contains(&p.row));
            assert_eq!(p.world_x, p.col as f32 * 32.0);
            assert!(p.building.is_house());
        }

        // First lot sits on the origin give or take one tile
        assert!((14..=16).contains(&plots[0].col));
        assert!((49..=51).contains(&plots[0].row));
        // Lots past the sixth row are clamped to the bottom margin
        assert_eq!(plots[71].row, 70);
    }

    #[test]
    fn test_house_aprons() {
        let mut tiles = Tilemap::new_with(80, 80, TileCell::plain(TileType::Grass));
        tiles.set(21, 31, TileCell::plain(TileType::Cobblestone));
        let plot = HousePlot {
            col: 20,
            row: 30,
            world_x: 640.0,
            world_y: 960.0,
            building: BuildingType::HouseSmall,
        };
        stamp_house_aprons(&mut tiles, &[plot]);
        assert_eq!(tiles.get(19, 29).kind, TileType::Dirt);
        assert_eq!(tiles.get(22, 32).kind, TileType::Dirt);
        assert_eq!(tiles.get(21, 31).kind, TileType::Cobblestone);
        assert_eq!(tiles.get(23, 30).kind, TileType::Grass);
    }
}
