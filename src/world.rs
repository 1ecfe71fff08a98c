//! World data container module
//!
//! Bundles the generated town into a single value: the raw tile layout it was
//! built from and the pre-batched sprite lists the renderer consumes.

use serde::{Deserialize, Serialize};

use crate::buildings::BuildingType;
use crate::seeds::WorldSeeds;
use crate::sprite::Sprite;
use crate::terrain::{ObjectType, TileCell};
use crate::tilemap::Tilemap;

/// A named anchor point in simulation coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub x: f32,
    pub y: f32,
    /// Location category ("trade", "conflict", ...), free-form
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Location {
    pub fn new(name: impl Into<String>, x: f32, y: f32, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            kind: kind.into(),
        }
    }

    /// Building drawn for this location.
    pub fn building(&self) -> BuildingType {
        BuildingType::for_location(&self.kind, &self.name)
    }
}

/// The stock anchor set used when nothing else is supplied.
pub fn default_locations() -> Vec<Location> {
    vec![
        Location::new("Market Square", 0.0, 0.0, "trade"),
        Location::new("The Arena", 100.0, 0.0, "conflict"),
        Location::new("Council Hall", 0.0, 100.0, "diplomacy"),
        Location::new("Wilderness", -100.0, -100.0, "exploration"),
        Location::new("Library", 50.0, 50.0, "knowledge"),
    ]
}

/// A scattered nature or street object on a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Decoration {
    pub object: ObjectType,
    /// Grid column; may lie just off the grid for fences
    pub col: i32,
    pub row: i32,
}

/// A residential house lot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HousePlot {
    pub col: i32,
    pub row: i32,
    /// Top-left corner in world pixels
    pub world_x: f32,
    pub world_y: f32,
    pub building: BuildingType,
}

/// An anchor as it landed on the grid.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Landmark {
    pub name: String,
    pub col: i32,
    pub row: i32,
    pub building: BuildingType,
}

/// The raw generated layout, before batching into sprites.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorldLayout {
    pub tiles: Tilemap<TileCell>,
    pub landmarks: Vec<Landmark>,
    pub decorations: Vec<Decoration>,
    pub houses: Vec<HousePlot>,
}

impl WorldLayout {
    pub fn width(&self) -> usize {
        self.tiles.width
    }

    pub fn height(&self) -> usize {
        self.tiles.height
    }
}

/// All generated world data bundled together
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorldData {
    /// Seeds used for generation (allows recreation)
    pub seeds: WorldSeeds,
    /// Anchor signature this world was generated for
    pub signature: u64,
    /// World extent in pixels (square)
    pub world_px: f32,
    pub layout: WorldLayout,
    /// One sprite per terrain chunk, layer 0
    pub terrain_batches: Vec<Sprite>,
    pub decorations: Vec<Sprite>,
    /// Location buildings and their name labels
    pub location_buildings: Vec<Sprite>,
    pub houses: Vec<Sprite>,
}

impl WorldData {
    /// Total number of static sprites.
    pub fn sprite_count(&self) -> usize {
        self.terrain_batches.len()
            + self.decorations.len()
            + self.location_buildings.len()
            + self.houses.len()
    }

    /// Iterate every static sprite: terrain, decorations, locations, houses.
    pub fn static_sprites(&self) -> impl Iterator<Item = &Sprite> {
        self.terrain_batches
            .iter()
            .chain(&self.decorations)
            .chain(&self.location_buildings)
            .chain(&self.houses)
    }

    /// World centre in pixels, the default camera focus.
    pub fn center(&self) -> (f32, f32) {
        (self.world_px / 2.0, self.world_px / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_deserializes_type_field() {
        let json = r#"[{"name":"Old Well","x":-12.5,"y":40,"type":"misc"},{"name":"Bare","x":0,"y":0}]"#;
        let locations: Vec<Location> = serde_json::from_str(json).unwrap();
        assert_eq!(locations[0].kind, "misc");
        assert_eq!(locations[0].x, -12.5);
        assert_eq!(locations[0].building(), BuildingType::Well);
        assert_eq!(locations[1].kind, "");
    }

    #[test]
    fn test_default_locations() {
        let locations = default_locations();
        assert_eq!(locations.len(), 5);
        assert_eq!(locations[0].name, "Market Square");
        assert_eq!(locations[0].building(), BuildingType::Shop);
        assert_eq!(locations[3].building(), BuildingType::Tavern);
    }
}
