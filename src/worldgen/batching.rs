//! Packaging the layout as renderer sprites.
//!
//! The terrain grid becomes one sprite per square chunk rather than one per
//! tile; objects and buildings become one sprite each.

use std::sync::Arc;

use crate::coords::{CoordMap, SCALE, TILE_WORLD_PX};
use crate::sprite::{Layer, Rect, Sprite, SpriteKind, TerrainChunk};
use crate::terrain::TileCell;
use crate::tilemap::Tilemap;
use crate::world::{Decoration, HousePlot, Location, WorldData, WorldLayout};

use super::GenParams;

/// Height of a location name label in world pixels.
pub const LABEL_HEIGHT: f32 = 16.0;

/// Turn a finished layout into `WorldData`.
pub fn package(layout: WorldLayout, locations: &[Location], params: &GenParams, signature: u64) -> WorldData {
    let coords = params.coord_map();
    WorldData {
        seeds: params.seeds,
        signature,
        world_px: coords.world_px(),
        terrain_batches: chunk_sprites(&layout.tiles, params.chunk_size),
        decorations: layout.decorations.iter().map(decoration_sprite).collect(),
        location_buildings: location_sprites(locations, &coords),
        houses: layout.houses.iter().map(house_sprite).collect(),
        layout,
    }
}

/// One layer-0 sprite per `size`×`size` block. Edge chunks are cropped to the grid.
pub fn chunk_sprites(tiles: &Tilemap<TileCell>, size: usize) -> Vec<Sprite> {
    let size = size.max(1);
    let mut sprites = Vec::new();
    for origin_row in (0..tiles.height).step_by(size) {
        for origin_col in (0..tiles.width).step_by(size) {
            let cols = size.min(tiles.width - origin_col);
            let rows = size.min(tiles.height - origin_row);
            let mut cells = Vec::with_capacity(cols * rows);
            for row in origin_row..origin_row + rows {
                for col in origin_col..origin_col + cols {
                    cells.push(*tiles.get(col, row));
                }
            }

            let bounds = Rect::new(
                origin_col as f32 * TILE_WORLD_PX,
                origin_row as f32 * TILE_WORLD_PX,
                cols as f32 * TILE_WORLD_PX,
                rows as f32 * TILE_WORLD_PX,
            );
            let chunk = TerrainChunk {
                origin_col,
                origin_row,
                cols,
                rows,
                cells,
            };
            sprites.push(Sprite::new(bounds, Layer::Terrain, SpriteKind::TerrainChunk(Arc::new(chunk))));
        }
    }
    sprites
}

pub fn decoration_sprite(deco: &Decoration) -> Sprite {
    let (w, h) = deco.object.art_size();
    let bounds = Rect::new(
        deco.col as f32 * TILE_WORLD_PX,
        deco.row as f32 * TILE_WORLD_PX,
        w as f32 * SCALE,
        h as f32 * SCALE,
    );
    let variant = (deco.col + deco.row).rem_euclid(3) as u8;
    Sprite::new(
        bounds,
        Layer::Structures,
        SpriteKind::Decoration {
            object: deco.object,
            variant,
        },
    )
}

/// Building centred on each anchor, plus its name label just below.
pub fn location_sprites(locations: &[Location], coords: &CoordMap) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(locations.len() * 2);
    for loc in locations {
        let building = loc.building();
        let (wx, wy) = coords.sim_to_world(loc.x, loc.y);
        let (w, h) = building.art_size();
        let (w, h) = (w as f32 * SCALE, h as f32 * SCALE);
        let (bx, by) = (wx - w / 2.0, wy - h / 2.0);

        sprites.push(Sprite::new(
            Rect::new(bx, by, w, h),
            Layer::Structures,
            SpriteKind::Building { building },
        ));
        sprites.push(Sprite::new(
            Rect::new(bx, by + h, w, LABEL_HEIGHT),
            Layer::Overlay,
            SpriteKind::Label {
                text: loc.name.clone(),
            },
        ));
    }
    sprites
}

pub fn house_sprite(plot: &HousePlot) -> Sprite {
    let (w, h) = plot.building.art_size();
    Sprite::new(
        Rect::new(plot.world_x, plot.world_y, w as f32 * SCALE, h as f32 * SCALE),
        Layer::Structures,
        SpriteKind::Building {
            building: plot.building,
        },
    )
}
