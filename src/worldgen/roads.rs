//! Cobblestone roads between anchors.

use crate::terrain::{TileCell, TileType};
use crate::tilemap::Tilemap;

use super::GenParams;

/// Anchor index pairs that get a road, in stamping order.
///
/// The first anchor is the hub and links to every other anchor; non-hub
/// pairs closer than `road_link_distance` (Manhattan, in tiles) link too.
pub fn road_links(anchors: &[(i32, i32)], params: &GenParams) -> Vec<(usize, usize)> {
    let mut links: Vec<(usize, usize)> = (1..anchors.len()).map(|i| (0, i)).collect();
    for i in 1..anchors.len() {
        for j in i + 1..anchors.len() {
            let (a, b) = (anchors[i], anchors[j]);
            if (a.0 - b.0).abs() + (a.1 - b.1).abs() < params.road_link_distance {
                links.push((i, j));
            }
        }
    }
    links
}

/// Stamp every road link. Returns the number of cells paved.
pub fn carve_roads(tiles: &mut Tilemap<TileCell>, anchors: &[(i32, i32)], params: &GenParams) -> usize {
    road_links(anchors, params)
        .into_iter()
        .map(|(i, j)| carve_l_path(tiles, anchors[i], anchors[j]))
        .sum()
}

/// L-shaped road: along the source row to the target column, then along the
/// target column to the target row. Water is bridged over, not paved.
pub fn carve_l_path(tiles: &mut Tilemap<TileCell>, from: (i32, i32), to: (i32, i32)) -> usize {
    let (c1, r1) = from;
    let (c2, r2) = to;
    let mut paved = 0;
    for c in c1.min(c2)..=c1.max(c2) {
        paved += pave(tiles, c, r1) as usize;
    }
    for r in r1.min(r2)..=r1.max(r2) {
        paved += pave(tiles, c2, r) as usize;
    }
    paved
}

fn pave(tiles: &mut Tilemap<TileCell>, col: i32, row: i32) -> bool {
    match tiles.get_checked_mut(col, row) {
        Some(cell) if !cell.kind.is_water() => {
            *cell = TileCell::plain(TileType::Cobblestone);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_links_everyone_and_near_pairs_link() {
        let params = GenParams::default();
        let anchors = [(40, 40), (56, 40), (26, 50), (60, 45)];
        let links = road_links(&anchors, &params);
        // (56,40)-(60,45) is 9 apart; (26,50) is far from both
        assert_eq!(links, vec![(0, 1), (0, 2), (0, 3), (1, 3)]);
    }

    #[test]
    fn test_l_path_shape() {
        let mut tiles = Tilemap::new_with(20, 20, TileCell::plain(TileType::Grass));
        let paved = carve_l_path(&mut tiles, (2, 3), (8, 10));
        assert_eq!(paved, 7 + 8);
        assert_eq!(tiles.get(5, 3).kind, TileType::Cobblestone);
        assert_eq!(tiles.get(8, 7).kind, TileType::Cobblestone);
        assert_eq!(tiles.get(2, 10).kind, TileType::Grass);
    }

    #[test]
    fn test_roads_skip_water_and_off_grid() {
        let mut tiles = Tilemap::new_with(10, 10, TileCell::plain(TileType::Grass));
        tiles.set(4, 2, TileCell::plain(TileType::Water));
        tiles.set(6, 2, TileCell::plain(TileType::Sand));
        carve_l_path(&mut tiles, (-3, 2), (8, 12));

        assert_eq!(tiles.get(4, 2).kind, TileType::Water);
        assert_eq!(tiles.get(6, 2).kind, TileType::Cobblestone);
        assert_eq!(tiles.get(0, 2).kind, TileType::Cobblestone);
        assert_eq!(tiles.get(8, 9).kind, TileType::Cobblestone);
    }

    #[test]
    fn test_single_anchor_has_no_roads() {
        let mut tiles = Tilemap::new_with(10, 10, TileCell::plain(TileType::Grass));
        assert_eq!(carve_roads(&mut tiles, &[(5, 5)], &GenParams::default()), 0);
    }
}
