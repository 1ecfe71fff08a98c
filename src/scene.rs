//! Scene composition: static world batches plus live character overlays.
//!
//! The owner of the simulation state calls [`compose`] on every update and
//! hands the result to the renderer. The world batches are shared; only the
//! character, speech bubble and relationship sprites are rebuilt.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assets::PALETTE_COUNT;
use crate::coords::CoordMap;
use crate::sprite::{CharacterLook, Facing, Layer, Rect, Sprite, SpriteKind};
use crate::world::WorldData;

/// Character sprites are this many world px square, centred on the position.
pub const CHARACTER_SIZE: f32 = 32.0;

pub const BUBBLE_HEIGHT: f32 = 20.0;

/// Gap between the top of a character and the bottom of its bubble.
const BUBBLE_GAP: f32 = 12.0;

const BUBBLE_MAX_WIDTH: f32 = 140.0;

/// Messages older than this many ticks no longer show a bubble.
pub const BUBBLE_TICKS: u64 = 2;

/// A character as the simulation reports it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterState {
    pub id: String,
    pub name: String,
    /// Simulation coordinates
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_alive")]
    pub alive: bool,
    #[serde(default)]
    pub walking: bool,
    #[serde(skip)]
    pub facing: Facing,
    /// Affinity towards other characters by id, in `-1..=1`
    #[serde(default)]
    pub relationships: BTreeMap<String, f32>,
}

fn default_alive() -> bool {
    true
}

/// One line of chat or inner monologue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatLine {
    pub speaker_id: String,
    pub content: String,
    #[serde(default)]
    pub is_thought: bool,
    pub tick: u64,
}

/// Merge the world with the live overlays for the current tick.
///
/// Order: world batches, relationship lines, then each character followed by
/// its bubble. The renderer re-sorts by layer anyway.
pub fn compose(
    world: &WorldData,
    characters: &[CharacterState],
    selected: Option<&str>,
    messages: &[ChatLine],
    tick: u64,
    map: &CoordMap,
) -> Vec<Sprite> {
    let mut sprites: Vec<Sprite> = world.static_sprites().cloned().collect();
    sprites.extend(relationship_sprites(characters, selected, map));
    sprites.extend(character_sprites(characters, selected, messages, tick, map));
    sprites
}

/// Clickable character sprites and their speech bubbles.
pub fn character_sprites(
    characters: &[CharacterState],
    selected: Option<&str>,
    messages: &[ChatLine],
    tick: u64,
    map: &CoordMap,
) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(characters.len() * 2);
    for (index, ch) in characters.iter().enumerate() {
        let (px, py) = map.sim_to_world(ch.x, ch.y);
        let half = CHARACTER_SIZE / 2.0;
        let look = CharacterLook {
            name: ch.name.clone(),
            palette: index % PALETTE_COUNT,
            facing: ch.facing,
            walking: ch.walking,
            dead: !ch.alive,
            selected: selected == Some(ch.id.as_str()),
        };
        sprites.push(
            Sprite::new(
                Rect::new(px - half, py - half, CHARACTER_SIZE, CHARACTER_SIZE),
                Layer::Actors,
                SpriteKind::Character(look),
            )
            .with_id(ch.id.clone()),
        );

        let latest = messages
            .iter()
            .rev()
            .find(|m| m.speaker_id == ch.id && tick.saturating_sub(m.tick) <= BUBBLE_TICKS);
        if let Some(line) = latest {
            let width = (line.content.chars().count() as f32 * 5.0 + 16.0).min(BUBBLE_MAX_WIDTH);
            sprites.push(Sprite::new(
                Rect::new(px - width / 2.0, py - half - BUBBLE_HEIGHT - BUBBLE_GAP, width, BUBBLE_HEIGHT),
                Layer::Overlay,
                SpriteKind::SpeechBubble {
                    text: bubble_text(&line.content),
                    thought: line.is_thought,
                },
            ));
        }
    }
    sprites
}

/// Lines from the selected character to everyone it has feelings about.
pub fn relationship_sprites(characters: &[CharacterState], selected: Option<&str>, map: &CoordMap) -> Vec<Sprite> {
    let Some(source) = selected.and_then(|id| characters.iter().find(|c| c.id == id)) else {
        return Vec::new();
    };
    let from = map.sim_to_world(source.x, source.y);

    characters
        .iter()
        .filter(|c| c.id != source.id)
        .filter_map(|c| {
            let affinity = *source.relationships.get(&c.id)?;
            if affinity == 0.0 {
                return None;
            }
            let to = map.sim_to_world(c.x, c.y);
            let mut bounds = Rect::from_corners(from.0, from.1, to.0, to.1);
            bounds.width = bounds.width.max(1.0);
            bounds.height = bounds.height.max(1.0);
            Some(Sprite::new(
                bounds,
                Layer::Structures,
                SpriteKind::RelationshipLine { from, to, affinity },
            ))
        })
        .collect()
}

/// Long lines are cut to 22 characters plus `..`.
pub fn bubble_text(content: &str) -> String {
    if content.chars().count() > 24 {
        let mut cut: String = content.chars().take(22).collect();
        cut.push_str("..");
        cut
    } else {
        content.to_string()
    }
}
