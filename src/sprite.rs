//! Drawable entities, the renderer's only unit of work.
//!
//! A [`Sprite`] is an immutable value: a world-space bounding box, a paint
//! layer, an optional click id and a [`SpriteKind`] that carries exactly the
//! data needed to draw it. Sprites are rebuilt by their owner, never mutated
//! in place by the renderer.

use std::sync::Arc;

use serde::Serialize;

use crate::buildings::BuildingType;
use crate::terrain::{ObjectType, TileCell};

/// Paint-order bucket. Lower layers are painted first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Layer {
    Terrain = 0,
    Structures = 1,
    Actors = 2,
    Overlay = 3,
}

/// Axis-aligned rectangle in world space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle spanning two corners given in any order.
    pub fn from_corners(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left.min(right),
            y: top.min(bottom),
            width: (right - left).abs(),
            height: (bottom - top).abs(),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Edges are inclusive.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    /// Touching edges count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() < other.x
            || self.x > other.right()
            || self.bottom() < other.y
            || self.y > other.bottom())
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn expand(&self, margin: f32) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }
}

/// A square block of terrain cells drawn as one sprite.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TerrainChunk {
    /// Grid column of the chunk's top-left cell
    pub origin_col: usize,
    /// Grid row of the chunk's top-left cell
    pub origin_row: usize,
    pub cols: usize,
    pub rows: usize,
    /// Row-major cells, `cols * rows` long
    pub cells: Vec<TileCell>,
}

impl TerrainChunk {
    /// Iterate `(col, row, cell)` in grid coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &TileCell)> {
        self.cells.iter().enumerate().map(move |(idx, cell)| {
            (
                self.origin_col + idx % self.cols,
                self.origin_row + idx / self.cols,
                cell,
            )
        })
    }
}

/// Which way a character faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    #[default]
    Down,
    Up,
    Left,
    Right,
}

impl Facing {
    /// Dominant axis of a movement delta. No movement keeps facing down.
    pub fn from_delta(dx: f32, dy: f32) -> Self {
        if dx == 0.0 && dy == 0.0 {
            Facing::Down
        } else if dx.abs() > dy.abs() {
            if dx > 0.0 { Facing::Right } else { Facing::Left }
        } else if dy > 0.0 {
            Facing::Down
        } else {
            Facing::Up
        }
    }
}

/// Everything the art layer needs to draw one character.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CharacterLook {
    pub name: String,
    /// Index into the character palette table
    pub palette: usize,
    pub facing: Facing,
    pub walking: bool,
    pub dead: bool,
    pub selected: bool,
}

/// What a sprite is, with just the data its draw call needs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum SpriteKind {
    TerrainChunk(Arc<TerrainChunk>),
    Decoration { object: ObjectType, variant: u8 },
    Building { building: BuildingType },
    Label { text: String },
    Character(CharacterLook),
    SpeechBubble { text: String, thought: bool },
    /// Line between two world points; `affinity` in `-1..=1`
    RelationshipLine { from: (f32, f32), to: (f32, f32), affinity: f32 },
}

/// A drawable entity.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sprite {
    pub bounds: Rect,
    pub layer: Layer,
    /// Present only on clickable sprites
    pub id: Option<String>,
    pub kind: SpriteKind,
}

impl Sprite {
    pub fn new(bounds: Rect, layer: Layer, kind: SpriteKind) -> Self {
        Self {
            bounds,
            layer,
            id: None,
            kind,
        }
    }

    /// Make the sprite clickable under `id`.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn x(&self) -> f32 {
        self.bounds.x
    }

    pub fn y(&self) -> f32 {
        self.bounds.y
    }

    pub fn is_clickable(&self) -> bool {
        self.id.is_some()
    }
}
