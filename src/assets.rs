//! Art layer contract and the per-kind sprite dispatch.
//!
//! The engine never looks at pixel content. It hands positions, a discrete
//! visual variant, the animation frame and a pixel scale to a
//! [`SpriteAssets`] implementation. [`PixelAssets`] is a flat-colour stand-in
//! good enough for the viewer and the exporter.

use image::Rgba;

use crate::buildings::BuildingType;
use crate::coords::{tile_to_world, SCALE, TILE_PX};
use crate::sprite::{CharacterLook, Facing, Sprite, SpriteKind};
use crate::surface::{Color, Surface};
use crate::terrain::{ObjectType, TileType};

/// Rasterization calls consumed from the art tables.
///
/// Each call is pure with respect to the engine: it may only paint on the
/// surface it is given.
#[allow(clippy::too_many_arguments)]
pub trait SpriteAssets {
    fn draw_tile(
        &self,
        surface: &mut dyn Surface,
        x: f32,
        y: f32,
        tile: TileType,
        variant: u8,
        frame: u32,
        scale: f32,
    );

    fn draw_object(
        &self,
        surface: &mut dyn Surface,
        x: f32,
        y: f32,
        object: ObjectType,
        variant: u8,
        frame: u32,
        scale: f32,
    );

    fn draw_building(
        &self,
        surface: &mut dyn Surface,
        x: f32,
        y: f32,
        building: BuildingType,
        frame: u32,
        scale: f32,
    );

    fn draw_character(
        &self,
        surface: &mut dyn Surface,
        x: f32,
        y: f32,
        look: &CharacterLook,
        frame: u32,
        scale: f32,
    );

    /// Draw a single line of text with its top-left corner at `(x, y)`.
    fn draw_text(&self, surface: &mut dyn Surface, x: f32, y: f32, text: &str, color: Color, scale: f32);

    /// Width in world pixels of `text` as drawn by `draw_text`.
    fn text_width(&self, text: &str, scale: f32) -> f32 {
        let n = text.chars().count() as f32;
        if n == 0.0 {
            0.0
        } else {
            (n * 4.0 - 1.0) * scale
        }
    }
}

/// Paint one sprite. Dispatches on the sprite kind; no other state is read.
pub fn paint_sprite(sprite: &Sprite, surface: &mut dyn Surface, assets: &dyn SpriteAssets, frame: u32) {
    let b = sprite.bounds;
    match &sprite.kind {
        SpriteKind::TerrainChunk(chunk) => {
            for (col, row, cell) in chunk.iter() {
                let (tx, ty) = tile_to_world(col as i32, row as i32);
                assets.draw_tile(surface, tx, ty, cell.kind, cell.variant, frame, SCALE);
            }
        }
        SpriteKind::Decoration { object, variant } => {
            assets.draw_object(surface, b.x, b.y, *object, *variant, frame, SCALE);
        }
        SpriteKind::Building { building } => {
            assets.draw_building(surface, b.x, b.y, *building, frame, SCALE);
        }
        SpriteKind::Label { text } => {
            let label_w = assets.text_width(text, 1.0) + 8.0;
            let label_x = b.x + b.width / 2.0 - label_w / 2.0;
            surface.fill_rect(label_x, b.y + 2.0, label_w, 11.0, Rgba([0, 0, 0, 153]));
            assets.draw_text(surface, label_x + 4.0, b.y + 5.0, text, WHITE, 1.0);
        }
        SpriteKind::Character(look) => {
            assets.draw_character(surface, b.x, b.y, look, frame, SCALE);

            // Name pill above the head
            let name_w = assets.text_width(&look.name, 1.0) + 6.0;
            let name_x = b.x + b.width / 2.0 - name_w / 2.0;
            let (pill, ink) = if look.selected {
                (Rgba([255, 215, 0, 178]), Rgba([26, 26, 42, 255]))
            } else {
                (Rgba([0, 0, 0, 128]), WHITE)
            };
            surface.fill_rect(name_x, b.y - 10.0, name_w, 9.0, pill);
            assets.draw_text(surface, name_x + 3.0, b.y - 8.0, &look.name, ink, 1.0);
        }
        SpriteKind::SpeechBubble { text, thought } => {
            let (fill, ink) = if *thought {
                (Rgba([100, 100, 180, 217]), Rgba([204, 204, 255, 255]))
            } else {
                (Rgba([255, 255, 255, 230]), Rgba([34, 34, 34, 255]))
            };
            surface.fill_rect(b.x, b.y, b.width, b.height, fill);

            // Pointer towards the speaker
            let mid = b.x + b.width / 2.0;
            surface.fill_rect(mid - 4.0, b.bottom(), 8.0, 2.0, fill);
            surface.fill_rect(mid - 2.0, b.bottom() + 2.0, 4.0, 2.0, fill);
            surface.fill_rect(mid - 1.0, b.bottom() + 4.0, 2.0, 2.0, fill);

            let text_w = assets.text_width(text, 1.0);
            assets.draw_text(surface, mid - text_w / 2.0, b.y + 7.0, text, ink, 1.0);
        }
        SpriteKind::RelationshipLine { from, to, affinity } => {
            let strength = affinity.abs().min(1.0);
            let alpha = ((0.3 + strength * 0.4) * 255.0) as u8;
            let (color, dash) = if *affinity > 0.0 {
                (Rgba([0, 255, 136, alpha]), None)
            } else {
                (Rgba([255, 51, 102, alpha]), Some(6.0))
            };
            surface.stroke_line(*from, *to, 1.0 + strength * 2.0, color, dash);
        }
    }
}

const WHITE: Color = Rgba([255, 255, 255, 255]);

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Rgba([r, g, b, 255])
}

const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Rgba([r, g, b, a])
}

/// Character colour sets: (skin, hair, shirt, pants)
const CHARACTER_PALETTES: [(Color, Color, Color, Color); 8] = [
    (rgb(0xFF, 0xD5, 0xB8), rgb(0x00, 0xAA, 0xCC), rgb(0x00, 0x77, 0xAA), rgb(0x33, 0x44, 0x55)),
    (rgb(0xFF, 0xD5, 0xB8), rgb(0xCC, 0x22, 0x55), rgb(0xAA, 0x00, 0x44), rgb(0x44, 0x22, 0x33)),
    (rgb(0xFF, 0xD5, 0xB8), rgb(0x22, 0xAA, 0x66), rgb(0x00, 0x88, 0x44), rgb(0x22, 0x33, 0x44)),
    (rgb(0xFF, 0xD5, 0xB8), rgb(0xCC, 0xAA, 0x00), rgb(0xAA, 0x88, 0x00), rgb(0x44, 0x33, 0x22)),
    (rgb(0xE8, 0xC4, 0xA0), rgb(0xCC, 0x33, 0x33), rgb(0xAA, 0x22, 0x22), rgb(0x44, 0x22, 0x22)),
    (rgb(0xE8, 0xC4, 0xA0), rgb(0x44, 0x44, 0xCC), rgb(0x33, 0x33, 0xAA), rgb(0x22, 0x22, 0x44)),
    (rgb(0xC8, 0xA8, 0x82), rgb(0x88, 0x44, 0xCC), rgb(0x66, 0x33, 0xAA), rgb(0x33, 0x22, 0x44)),
    (rgb(0xC8, 0xA8, 0x82), rgb(0xCC, 0x66, 0x33), rgb(0xAA, 0x55, 0x22), rgb(0x44, 0x33, 0x22)),
];

/// Number of distinct character palettes.
pub const PALETTE_COUNT: usize = CHARACTER_PALETTES.len();

/// Flat-colour placeholder art.
#[derive(Clone, Copy, Debug, Default)]
pub struct PixelAssets;

impl PixelAssets {
    fn tile_colors(tile: TileType, variant: u8, frame: u32) -> (Color, Color) {
        match tile {
            TileType::Grass => match variant % 3 {
                0 => (rgb(0x2a, 0x6a, 0x2a), rgb(0x3a, 0x7a, 0x3a)),
                1 => (rgb(0x2a, 0x5a, 0x2a), rgb(0x3a, 0x7a, 0x3a)),
                _ => (rgb(0x2a, 0x6a, 0x2a), rgb(0x1a, 0x4a, 0x1a)),
            },
            TileType::Grass2 => (rgb(0x2a, 0x5a, 0x2a), rgb(0x3a, 0x7a, 0x3a)),
            TileType::Grass3 => (rgb(0x2a, 0x6a, 0x2a), rgb(0x1a, 0x4a, 0x1a)),
            TileType::GrassDark => (rgb(0x14, 0x3a, 0x14), rgb(0x1a, 0x3a, 0x1a)),
            TileType::Dirt => (rgb(0x5a, 0x4a, 0x30), rgb(0x7a, 0x6a, 0x50)),
            TileType::Cobblestone => (rgb(0x5a, 0x5a, 0x6a), rgb(0x7a, 0x7a, 0x8a)),
            TileType::Water | TileType::Water2 => {
                // Two-frame flow; the second kind runs half a cycle behind
                let phase = (frame + u32::from(tile == TileType::Water2)) % 2;
                if phase == 0 {
                    (rgb(0x1a, 0x3a, 0x6a), rgb(0x3a, 0x5a, 0x8a))
                } else {
                    (rgb(0x1a, 0x3a, 0x6a), rgb(0x2a, 0x4a, 0x7a))
                }
            }
            TileType::Sand => (rgb(0x8a, 0x7a, 0x5a), rgb(0x9a, 0x8a, 0x6a)),
            TileType::Flowers => (rgb(0x2a, 0x5a, 0x2a), rgb(0xcc, 0x44, 0x66)),
        }
    }

    fn building_colors(building: BuildingType) -> (Color, Color) {
        match building {
            BuildingType::HouseSmall | BuildingType::HouseMedium | BuildingType::HouseLarge => {
                (rgb(0xb0, 0x8a, 0x5a), rgb(0x8a, 0x3a, 0x2a))
            }
            BuildingType::Shop => (rgb(0xc8, 0xa0, 0x40), rgb(0x8c, 0x70, 0x2c)),
            BuildingType::Arena => (rgb(0xa0, 0x30, 0x30), rgb(0x70, 0x21, 0x21)),
            BuildingType::Council => (rgb(0x30, 0x60, 0xa0), rgb(0x21, 0x43, 0x70)),
            BuildingType::Library => (rgb(0x70, 0x40, 0xa0), rgb(0x4e, 0x2c, 0x70)),
            BuildingType::Tavern => (rgb(0x8a, 0x5a, 0x30), rgb(0x5a, 0x3a, 0x20)),
            BuildingType::Well | BuildingType::Fountain => (rgb(0x7a, 0x7a, 0x8a), rgb(0x5a, 0x5a, 0x6a)),
        }
    }
}

impl SpriteAssets for PixelAssets {
    fn draw_tile(
        &self,
        surface: &mut dyn Surface,
        x: f32,
        y: f32,
        tile: TileType,
        variant: u8,
        frame: u32,
        scale: f32,
    ) {
        let size = TILE_PX as f32 * scale;
        let (base, accent) = Self::tile_colors(tile, variant, frame);
        surface.fill_rect(x, y, size, size, base);

        // A few fixed speckles so neighbouring tiles don't read as one slab
        let offset = f32::from(variant % 3) * 2.0 * scale;
        for (dx, dy) in [(2.0, 3.0), (9.0, 7.0), (5.0, 12.0), (13.0, 1.0)] {
            let sx = x + (dx * scale + offset) % size;
            surface.fill_rect(sx, y + dy * scale, scale, scale, accent);
        }
    }

    fn draw_object(
        &self,
        surface: &mut dyn Surface,
        x: f32,
        y: f32,
        object: ObjectType,
        _variant: u8,
        frame: u32,
        scale: f32,
    ) {
        let s = scale;
        let px = |surface: &mut dyn Surface, cx: f32, cy: f32, w: f32, h: f32, color: Color| {
            surface.fill_rect(x + cx * s, y + cy * s, w * s, h * s, color);
        };
        match object {
            ObjectType::Tree | ObjectType::Tree2 | ObjectType::Tree3 => {
                let sway = if frame % 4 < 2 { 0.0 } else { 1.0 };
                px(surface, 6.0, 16.0, 4.0, 8.0, rgb(0x5a, 0x3a, 0x1a));
                px(surface, 1.0 + sway, 4.0, 14.0, 12.0, rgb(0x1a, 0x6b, 0x1a));
                px(surface, 3.0 + sway, 1.0, 10.0, 6.0, rgb(0x22, 0x8b, 0x22));
            }
            ObjectType::Pine => {
                px(surface, 5.0, 22.0, 2.0, 6.0, rgb(0x5a, 0x3a, 0x1a));
                px(surface, 0.0, 14.0, 12.0, 8.0, rgb(0x14, 0x50, 0x24));
                px(surface, 2.0, 7.0, 8.0, 8.0, rgb(0x1a, 0x5e, 0x2a));
                px(surface, 4.0, 0.0, 4.0, 8.0, rgb(0x22, 0x6e, 0x32));
            }
            ObjectType::Bush => {
                px(surface, 0.0, 2.0, 12.0, 6.0, rgb(0x1a, 0x5a, 0x1a));
                px(surface, 2.0, 0.0, 8.0, 3.0, rgb(0x2a, 0x7a, 0x2a));
            }
            ObjectType::RockSmall => px(surface, 0.0, 1.0, 8.0, 5.0, rgb(0x6a, 0x6a, 0x7a)),
            ObjectType::RockLarge => {
                px(surface, 0.0, 3.0, 14.0, 7.0, rgb(0x5a, 0x5a, 0x6a));
                px(surface, 2.0, 0.0, 9.0, 4.0, rgb(0x7a, 0x7a, 0x8a));
            }
            ObjectType::RockMossy => {
                px(surface, 0.0, 2.0, 12.0, 6.0, rgb(0x5a, 0x5a, 0x6a));
                px(surface, 1.0, 1.0, 6.0, 2.0, rgb(0x3a, 0x7a, 0x3a));
            }
            ObjectType::FenceH => {
                px(surface, 0.0, 2.0, 16.0, 2.0, rgb(0x8a, 0x6a, 0x40));
                px(surface, 0.0, 6.0, 16.0, 2.0, rgb(0x8a, 0x6a, 0x40));
                px(surface, 1.0, 0.0, 2.0, 10.0, rgb(0x6a, 0x4a, 0x2a));
                px(surface, 13.0, 0.0, 2.0, 10.0, rgb(0x6a, 0x4a, 0x2a));
            }
            ObjectType::FencePost => px(surface, 0.0, 0.0, 4.0, 12.0, rgb(0x6a, 0x4a, 0x2a)),
            ObjectType::BridgeH => {
                px(surface, 0.0, 2.0, 32.0, 12.0, rgb(0x8a, 0x6a, 0x40));
                px(surface, 0.0, 0.0, 32.0, 2.0, rgb(0x5a, 0x3a, 0x1a));
                px(surface, 0.0, 14.0, 32.0, 2.0, rgb(0x5a, 0x3a, 0x1a));
            }
            ObjectType::BridgeV => {
                px(surface, 2.0, 0.0, 12.0, 32.0, rgb(0x8a, 0x6a, 0x40));
                px(surface, 0.0, 0.0, 2.0, 32.0, rgb(0x5a, 0x3a, 0x1a));
                px(surface, 14.0, 0.0, 2.0, 32.0, rgb(0x5a, 0x3a, 0x1a));
            }
            ObjectType::LampPost => {
                // Glow pulses over an eight-frame cycle
                let glow = 40 + (frame % 8).abs_diff(4) as u8 * 8;
                surface.fill_rect(x - 9.0 * s, y - 10.0 * s, 24.0 * s, 24.0 * s, rgba(255, 215, 0, glow));
                px(surface, 2.0, 4.0, 2.0, 16.0, rgb(0x33, 0x33, 0x3a));
                px(surface, 0.0, 0.0, 6.0, 4.0, rgb(0xff, 0xd8, 0x60));
            }
            ObjectType::SignPost => {
                px(surface, 4.0, 6.0, 2.0, 10.0, rgb(0x5a, 0x3a, 0x1a));
                px(surface, 0.0, 0.0, 10.0, 6.0, rgb(0x8a, 0x6a, 0x40));
            }
            ObjectType::FlowerPatch => {
                for (i, color) in [
                    rgb(0xcc, 0x44, 0x66),
                    rgb(0xff, 0xaa, 0x44),
                    rgb(0x44, 0xaa, 0xff),
                    rgb(0xff, 0xdd, 0x44),
                ]
                .into_iter()
                .enumerate()
                {
                    let i = i as f32;
                    px(surface, 1.0 + i * 4.0, 1.0 + (i % 2.0) * 3.0, 2.0, 2.0, color);
                }
            }
            ObjectType::TallGrass => {
                let lean = (frame % 2) as f32;
                px(surface, 1.0 + lean, 0.0, 2.0, 12.0, rgb(0x3a, 0x7a, 0x3a));
                px(surface, 5.0 - lean, 2.0, 2.0, 10.0, rgb(0x2a, 0x6a, 0x2a));
            }
        }
    }

    fn draw_building(
        &self,
        surface: &mut dyn Surface,
        x: f32,
        y: f32,
        building: BuildingType,
        frame: u32,
        scale: f32,
    ) {
        let (w, h) = building.art_size();
        let (w, h) = (w as f32, h as f32);
        let s = scale;
        let (wall, roof) = Self::building_colors(building);

        match building {
            BuildingType::Well | BuildingType::Fountain => {
                surface.fill_rect(x, y + h * 0.3 * s, w * s, h * 0.7 * s, wall);
                let water = if frame % 2 == 0 { rgb(0x2a, 0x4a, 0x7a) } else { rgb(0x3a, 0x5a, 0x8a) };
                surface.fill_rect(x + 3.0 * s, y + h * 0.4 * s, (w - 6.0) * s, h * 0.3 * s, water);
                surface.fill_rect(x + (w / 2.0 - 1.0) * s, y, 2.0 * s, h * 0.3 * s, roof);
            }
            _ => {
                let roof_h = (h * 0.4).floor();
                surface.fill_rect(x + 2.0 * s, y + roof_h * s, (w - 4.0) * s, (h - roof_h) * s, wall);
                surface.fill_rect(x, y + 2.0 * s, w * s, roof_h * s, roof);
                surface.fill_rect(x + 4.0 * s, y, (w - 8.0) * s, 2.0 * s, roof);

                // Door and windows
                let door_w = 6.0;
                surface.fill_rect(x + (w / 2.0 - door_w / 2.0) * s, y + (h - 9.0) * s, door_w * s, 9.0 * s, rgb(0x3a, 0x20, 0x10));
                let win = rgb(0xff, 0xd8, 0x60);
                surface.fill_rect(x + 5.0 * s, y + (roof_h + 3.0) * s, 4.0 * s, 4.0 * s, win);
                surface.fill_rect(x + (w - 9.0) * s, y + (roof_h + 3.0) * s, 4.0 * s, 4.0 * s, win);
            }
        }

        if let Some(col) = building.chimney_column() {
            let col = col.min(w as u32 - 2) as f32;
            surface.fill_rect(x + col * s, y - 3.0 * s, 2.0 * s, 5.0 * s, rgb(0x4a, 0x4a, 0x4a));

            // Smoke puffs drift up over a four-frame cycle
            let rise = (frame % 4) as f32 * 2.0;
            surface.fill_rect(x + (col + 1.0) * s, y - (6.0 + rise) * s, 2.0 * s, 2.0 * s, rgba(200, 200, 200, 150));
        }
    }

    fn draw_character(
        &self,
        surface: &mut dyn Surface,
        x: f32,
        y: f32,
        look: &CharacterLook,
        frame: u32,
        scale: f32,
    ) {
        let s = scale;
        let (skin, hair, shirt, pants) = if look.dead {
            (rgb(0x77, 0x77, 0x77), rgb(0x44, 0x44, 0x44), rgb(0x55, 0x55, 0x55), rgb(0x33, 0x33, 0x33))
        } else {
            CHARACTER_PALETTES[look.palette % PALETTE_COUNT]
        };
        let px = |surface: &mut dyn Surface, cx: f32, cy: f32, w: f32, h: f32, color: Color| {
            surface.fill_rect(x + cx * s, y + cy * s, w * s, h * s, color);
        };

        px(surface, 3.0, 15.0, 10.0, 1.0, rgba(0, 0, 0, 40));

        let stepping = look.walking && !look.dead && frame % 2 == 1;
        px(surface, 4.0, 1.0, 8.0, 3.0, hair);
        px(surface, 4.0, 4.0, 8.0, 4.0, skin);
        px(surface, 3.0, 8.0, 10.0, 4.0, shirt);
        if stepping {
            px(surface, 4.0, 12.0, 3.0, 3.0, pants);
            px(surface, 9.0, 12.0, 3.0, 2.0, pants);
        } else {
            px(surface, 5.0, 12.0, 2.0, 3.0, pants);
            px(surface, 9.0, 12.0, 2.0, 3.0, pants);
        }

        let eye = if look.dead { rgb(0xcc, 0x22, 0x22) } else { rgb(0x1a, 0x1a, 0x2a) };
        match look.facing {
            Facing::Down => {
                px(surface, 6.0, 5.0, 1.0, 1.0, eye);
                px(surface, 9.0, 5.0, 1.0, 1.0, eye);
            }
            Facing::Left => px(surface, 5.0, 5.0, 1.0, 1.0, eye),
            Facing::Right => px(surface, 10.0, 5.0, 1.0, 1.0, eye),
            Facing::Up => {}
        }

        if look.selected {
            let bob = if frame % 4 < 2 { 0.0 } else { 1.0 };
            px(surface, 6.0, -7.0 + bob, 4.0, 3.0, rgb(0xff, 0xd7, 0x00));
            px(surface, 7.0, -4.0 + bob, 2.0, 2.0, rgb(0xff, 0xd7, 0x00));
        }
    }

    fn draw_text(&self, surface: &mut dyn Surface, x: f32, y: f32, text: &str, color: Color, scale: f32) {
        let mut cursor = x;
        for ch in text.chars() {
            let rows = glyph(ch);
            for (r, bits) in rows.iter().enumerate() {
                for c in 0..3 {
                    if bits & (0b100 >> c) != 0 {
                        surface.fill_rect(cursor + c as f32 * scale, y + r as f32 * scale, scale, scale, color);
                    }
                }
            }
            cursor += 4.0 * scale;
        }
    }
}

/// 3x5 bitmap glyph, one 3-bit row per entry (MSB is the left column).
/// Unknown characters draw as a hollow box.
fn glyph(ch: char) -> [u8; 5] {
    match ch.to_ascii_uppercase() {
        'A' => [2, 5, 7, 5, 5],
        'B' => [6, 5, 6, 5, 6],
        'C' => [3, 4, 4, 4, 3],
        'D' => [6, 5, 5, 5, 6],
        'E' => [7, 4, 6, 4, 7],
        'F' => [7, 4, 6, 4, 4],
        'G' => [3, 4, 5, 5, 3],
        'H' => [5, 5, 7, 5, 5],
        'I' => [7, 2, 2, 2, 7],
        'J' => [1, 1, 1, 5, 2],
        'K' => [5, 5, 6, 5, 5],
        'L' => [4, 4, 4, 4, 7],
        'M' => [5, 7, 7, 5, 5],
        'N' => [6, 5, 5, 5, 5],
        'O' => [2, 5, 5, 5, 2],
        'P' => [6, 5, 6, 4, 4],
        'Q' => [2, 5, 5, 6, 3],
        'R' => [6, 5, 6, 5, 5],
        'S' => [3, 4, 2, 1, 6],
        'T' => [7, 2, 2, 2, 2],
        'U' => [5, 5, 5, 5, 7],
        'V' => [5, 5, 5, 5, 2],
        'W' => [5, 5, 7, 7, 5],
        'X' => [5, 5, 2, 5, 5],
        'Y' => [5, 5, 2, 2, 2],
        'Z' => [7, 1, 2, 4, 7],
        '0' => [7, 5, 5, 5, 7],
        '1' => [2, 6, 2, 2, 7],
        '2' => [6, 1, 2, 4, 7],
        '3' => [6, 1, 2, 1, 6],
        '4' => [5, 5, 7, 1, 1],
        '5' => [7, 4, 6, 1, 6],
        '6' => [3, 4, 6, 5, 2],
        '7' => [7, 1, 2, 2, 2],
        '8' => [2, 5, 2, 5, 2],
        '9' => [2, 5, 3, 1, 6],
        '.' => [0, 0, 0, 0, 2],
        ',' => [0, 0, 0, 2, 4],
        '!' => [2, 2, 2, 0, 2],
        '?' => [6, 1, 2, 0, 2],
        '\'' => [2, 2, 0, 0, 0],
        '-' => [0, 0, 7, 0, 0],
        ':' => [0, 2, 0, 2, 0],
        ' ' => [0, 0, 0, 0, 0],
        _ => [7, 5, 5, 5, 7],
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::testing::{DrawCall, RecordingAssets};
    use super::*;
    use crate::sprite::{Layer, Rect, TerrainChunk};
    use crate::surface::Framebuffer;
    use crate::terrain::TileCell;

    #[test]
    fn test_chunk_paints_every_cell_at_its_grid_position() {
        let chunk = TerrainChunk {
            origin_col: 10,
            origin_row: 20,
            cols: 2,
            rows: 2,
            cells: vec![TileCell::plain(TileType::Grass); 4],
        };
        let sprite = Sprite::new(
            Rect::new(320.0, 640.0, 64.0, 64.0),
            Layer::Terrain,
            SpriteKind::TerrainChunk(Arc::new(chunk)),
        );
        let assets = RecordingAssets::default();
        let mut fb = Framebuffer::new(4, 4).unwrap();
        paint_sprite(&sprite, &mut fb, &assets, 3);

        let calls = assets.take();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0], DrawCall::Tile { x: 320.0, y: 640.0, tile: TileType::Grass, frame: 3 });
        assert_eq!(calls[3], DrawCall::Tile { x: 352.0, y: 672.0, tile: TileType::Grass, frame: 3 });
    }

    #[test]
    fn test_label_draws_its_text() {
        let sprite = Sprite::new(
            Rect::new(0.0, 0.0, 60.0, 16.0),
            Layer::Overlay,
            SpriteKind::Label { text: "Library".into() },
        );
        let assets = RecordingAssets::default();
        let mut fb = Framebuffer::new(4, 4).unwrap();
        paint_sprite(&sprite, &mut fb, &assets, 0);
        assert_eq!(assets.take(), vec![DrawCall::Text { text: "Library".into() }]);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(PixelAssets.text_width("", 1.0), 0.0);
        assert_eq!(PixelAssets.text_width("AB", 1.0), 7.0);
        assert_eq!(PixelAssets.text_width("AB", 2.0), 14.0);
    }

    #[test]
    fn test_pixel_assets_paint_tiles() {
        let mut fb = Framebuffer::new(32, 32).unwrap();
        PixelAssets.draw_tile(&mut fb, 0.0, 0.0, TileType::Cobblestone, 0, 0, 2.0);
        assert_eq!(fb.pixel(0, 0), Some(rgb(0x5a, 0x5a, 0x6a)));
    }

    #[test]
    fn test_water_alternates_with_frame() {
        let (_, a) = PixelAssets::tile_colors(TileType::Water, 0, 0);
        let (_, b) = PixelAssets::tile_colors(TileType::Water, 0, 1);
        let (_, c) = PixelAssets::tile_colors(TileType::Water2, 0, 0);
        assert_ne!(a, b);
        assert_eq!(b, c);
    }
}
