//! Tile and nature-object vocabulary for the town map.

use serde::{Deserialize, Serialize};

/// Ground tile kinds. The set is closed; the art layer has one entry per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileType {
    #[default]
    Grass,
    Grass2,
    Grass3,
    /// Darker forest-edge grass near the map border
    GrassDark,
    Dirt,
    Cobblestone,
    /// River water; alternates with `Water2` so the flow animates
    Water,
    Water2,
    Sand,
    Flowers,
}

impl TileType {
    /// Any of the plain grass kinds. Flowers are not grass for overwrite rules.
    pub fn is_grass(&self) -> bool {
        matches!(
            self,
            TileType::Grass | TileType::Grass2 | TileType::Grass3 | TileType::GrassDark
        )
    }

    pub fn is_water(&self) -> bool {
        matches!(self, TileType::Water | TileType::Water2)
    }

    /// Water tiles cycle their art with the animation frame instead of the variant.
    pub fn is_animated(&self) -> bool {
        self.is_water()
    }

    /// Get ASCII character for text dumps
    pub fn ascii_char(&self) -> char {
        match self {
            TileType::Grass => '.',
            TileType::Grass2 => ',',
            TileType::Grass3 => '`',
            TileType::GrassDark => '"',
            TileType::Dirt => ':',
            TileType::Cobblestone => '#',
            TileType::Water | TileType::Water2 => '~',
            TileType::Sand => '_',
            TileType::Flowers => '*',
        }
    }
}

/// One grid cell: a tile kind plus the visual alternate to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TileCell {
    pub kind: TileType,
    pub variant: u8,
}

impl TileCell {
    pub fn new(kind: TileType, variant: u8) -> Self {
        Self { kind, variant }
    }

    /// Cell with variant 0, used by every stamping stage.
    pub fn plain(kind: TileType) -> Self {
        Self { kind, variant: 0 }
    }
}

/// Nature and street objects scattered over the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    Tree,
    Tree2,
    Tree3,
    Pine,
    Bush,
    RockSmall,
    RockLarge,
    RockMossy,
    FenceH,
    FencePost,
    BridgeH,
    BridgeV,
    LampPost,
    SignPost,
    FlowerPatch,
    TallGrass,
}

impl ObjectType {
    /// Art size in unscaled pixels `(width, height)`.
    pub fn art_size(&self) -> (u32, u32) {
        match self {
            ObjectType::Tree | ObjectType::Tree2 | ObjectType::Tree3 => (16, 24),
            ObjectType::Pine => (12, 28),
            ObjectType::Bush => (12, 8),
            ObjectType::RockSmall => (8, 6),
            ObjectType::RockLarge => (14, 10),
            ObjectType::RockMossy => (12, 8),
            ObjectType::FenceH => (16, 10),
            ObjectType::FencePost => (4, 12),
            ObjectType::BridgeH => (32, 16),
            ObjectType::BridgeV => (16, 32),
            ObjectType::LampPost => (6, 20),
            ObjectType::SignPost => (10, 16),
            ObjectType::FlowerPatch => (16, 8),
            ObjectType::TallGrass => (8, 12),
        }
    }

    /// Objects with a two-frame animation.
    pub fn is_animated(&self) -> bool {
        matches!(self, ObjectType::TallGrass | ObjectType::LampPost)
    }

    /// Get ASCII character for text dumps
    pub fn ascii_char(&self) -> char {
        match self {
            ObjectType::Tree | ObjectType::Tree2 | ObjectType::Tree3 => 'T',
            ObjectType::Pine => 'P',
            ObjectType::Bush => 'b',
            ObjectType::RockSmall | ObjectType::RockLarge | ObjectType::RockMossy => 'o',
            ObjectType::FenceH | ObjectType::FencePost => '=',
            ObjectType::BridgeH | ObjectType::BridgeV => 'B',
            ObjectType::LampPost => 'i',
            ObjectType::SignPost => 's',
            ObjectType::FlowerPatch => 'f',
            ObjectType::TallGrass => 'w',
        }
    }
}
