//! Decoration scatter: trees, bushes, rocks, lamps, flowers and fences.
//!
//! Every pass is single-shot: a rejected draw is not retried, and accepted
//! placements may overlap earlier ones. The kind-choice draw is taken only
//! after a placement is accepted, so the stream position depends on the
//! tiles underneath.

use std::collections::HashSet;

use crate::seeds::MinStdRng;
use crate::terrain::{ObjectType, TileCell, TileType};
use crate::tilemap::Tilemap;
use crate::world::Decoration;

use super::GenParams;

/// Scatter all decorations over the finished tile grid.
pub fn scatter(tiles: &Tilemap<TileCell>, anchors: &[(i32, i32)], params: &GenParams) -> Vec<Decoration> {
    let mut rng = MinStdRng::new(params.seeds.decorations);
    let no_spawn = no_spawn_zone(anchors, params.no_spawn_radius);
    let mut out = Vec::new();
    let n = params.world_tiles as u32;

    // Border forest
    for _ in 0..params.forest_draws {
        let (col, row) = random_cell(&mut rng, n);
        let edge = tiles.edge_distance(col as usize, row as usize);
        if edge < params.forest_depth && !no_spawn.contains(&(col, row)) {
            let kind = tiles.get(col as usize, row as usize).kind;
            if !kind.is_water() && kind != TileType::Cobblestone && kind != TileType::Sand {
                let object = if rng.chance(0.5) { ObjectType::Pine } else { ObjectType::Tree };
                place(&mut out, object, col, row);
            }
        }
    }

    // Meadow trees
    for _ in 0..params.meadow_tree_draws {
        let (col, row) = random_cell(&mut rng, n);
        if open_grass(tiles, &no_spawn, col, row) {
            let object = if rng.chance(0.3) { ObjectType::Pine } else { ObjectType::Tree };
            place(&mut out, object, col, row);
        }
    }

    for _ in 0..params.bush_draws {
        let (col, row) = random_cell(&mut rng, n);
        if open_grass(tiles, &no_spawn, col, row) {
            place(&mut out, ObjectType::Bush, col, row);
        }
    }

    // Rocks ignore the exclusion zone
    for _ in 0..params.rock_draws {
        let (col, row) = random_cell(&mut rng, n);
        let kind = tiles.get(col as usize, row as usize).kind;
        if kind == TileType::Sand || kind == TileType::Dirt {
            let object = if rng.chance(0.5) { ObjectType::RockSmall } else { ObjectType::RockLarge };
            place(&mut out, object, col, row);
        }
    }

    // Lamp posts on paved ground around each anchor
    let d = params.lamp_offset;
    for &(ac, ar) in anchors {
        for (dr, dc) in [(d, 0), (-d, 0), (0, d), (0, -d)] {
            let (col, row) = (ac + dc, ar + dr);
            if let Some(cell) = tiles.get_checked(col, row) {
                if cell.kind == TileType::Cobblestone || cell.kind == TileType::Dirt {
                    place(&mut out, ObjectType::LampPost, col, row);
                }
            }
        }
    }

    for _ in 0..params.flower_draws {
        let (col, row) = random_cell(&mut rng, n);
        if open_grass(tiles, &no_spawn, col, row) {
            place(&mut out, ObjectType::FlowerPatch, col, row);
        }
    }

    // Fences are unconditional and may hang off the grid
    for &(ac, ar) in anchors.iter().take(params.fenced_anchors) {
        place(&mut out, ObjectType::FenceH, ac - 3, ar + 3);
        place(&mut out, ObjectType::FenceH, ac + 1, ar + 3);
    }

    out
}

/// All cells within Chebyshev `radius` of any anchor.
pub fn no_spawn_zone(anchors: &[(i32, i32)], radius: i32) -> HashSet<(i32, i32)> {
    let mut zone = HashSet::new();
    for &(ac, ar) in anchors {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                zone.insert((ac + dc, ar + dr));
            }
        }
    }
    zone
}

fn place(out: &mut Vec<Decoration>, object: ObjectType, col: i32, row: i32) {
    out.push(Decoration { object, col, row });
}

/// Row is drawn before column.
fn random_cell(rng: &mut MinStdRng, n: u32) -> (i32, i32) {
    let row = rng.below(n) as i32;
    let col = rng.below(n) as i32;
    (col, row)
}

fn open_grass(tiles: &Tilemap<TileCell>, no_spawn: &HashSet<(i32, i32)>, col: i32, row: i32) -> bool {
    !no_spawn.contains(&(col, row))
        && tiles
            .get_checked(col, row)
            .is_some_and(|cell| cell.kind.is_grass())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meadow() -> Tilemap<TileCell> {
        Tilemap::new_with(80, 80, TileCell::plain(TileType::Grass))
    }

    #[test]
    fn test_no_spawn_zone_is_nine_by_nine() {
        let zone = no_spawn_zone(&[(40, 40)], 4);
        assert_eq!(zone.len(), 81);
        assert!(zone.contains(&(36, 44)));
        assert!(!zone.contains(&(35, 40)));
    }

    #[test]
    fn test_scatter_is_deterministic() {
        let params = GenParams::default();
        let a = scatter(&meadow(), &[(40, 40)], &params);
        let b = scatter(&meadow(), &[(40, 40)], &params);
        assert_eq!(a, b);
    }

    #[test]
    fn test_border_forest_stays_near_edges() {
        let params = GenParams {
            meadow_tree_draws: 0,
            ..GenParams::default()
        };
        let decorations = scatter(&meadow(), &[], &params);
        let trees: Vec<_> = decorations
            .iter()
            .filter(|d| matches!(d.object, ObjectType::Tree | ObjectType::Pine))
            .collect();
        assert!(!trees.is_empty());
        for t in trees {
            let edge = t.col.min(t.row).min(79 - t.col).min(79 - t.row);
            assert!(edge < 8, "tree at ({},{})", t.col, t.row);
        }
    }

    #[test]
    fn test_rocks_need_sand_or_dirt() {
        // A pure meadow never grows rocks; lamps need paving
        let decorations = scatter(&meadow(), &[(40, 40)], &GenParams::default());
        assert!(decorations.iter().all(|d| !matches!(
            d.object,
            ObjectType::RockSmall | ObjectType::RockLarge | ObjectType::LampPost
        )));
    }

    #[test]
    fn test_lamps_on_paving() {
        let mut tiles = meadow();
        tiles.set(40, 43, TileCell::plain(TileType::Cobblestone));
        tiles.set(43, 40, TileCell::plain(TileType::Dirt));
        let decorations = scatter(&tiles, &[(40, 40)], &GenParams::default());
        let lamps: Vec<_> = decorations
            .iter()
            .filter(|d| d.object == ObjectType::LampPost)
            .map(|d| (d.col, d.row))
            .collect();
        assert_eq!(lamps, vec![(40, 43), (43, 40)]);
    }

    #[test]
    fn test_fences_for_first_three_anchors() {
        let anchors = [(10, 10), (20, 20), (30, 30), (40, 40), (1, 78)];
        let decorations = scatter(&meadow(), &anchors, &GenParams::default());
        let fences: Vec<_> = decorations
            .iter()
            .filter(|d| d.object == ObjectType::FenceH)
            .map(|d| (d.col, d.row))
            .collect();
        assert_eq!(fences, vec![(7, 13), (11, 13), (17, 23), (21, 23), (27, 33), (31, 33)]);
    }
}
