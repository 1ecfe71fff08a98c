//! A small stand-in population for the viewer.
//!
//! Characters wander between anchors, chatter now and then and drift in
//! their opinions of each other. Nothing here is simulation-grade; it only
//! exists so the renderer has something alive to draw.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::coords::{SIM_MAX, SIM_MIN};
use crate::scene::{ChatLine, CharacterState};
use crate::sprite::Facing;
use crate::world::Location;

const NAMES: [&str; 12] = [
    "Ada", "Bram", "Cleo", "Dax", "Eve", "Finn", "Gus", "Hana", "Ivo", "Juno", "Kit", "Lio",
];

const SAYINGS: [&str; 8] = [
    "Lovely day.",
    "Have you seen the market?",
    "I need to think about this.",
    "The river is high today.",
    "Meet me at the library",
    "Not you again!",
    "Trade you two for one?",
    "Somebody has been in my house",
];

/// Messages kept for bubbles and the log.
const MESSAGE_HISTORY: usize = 64;

/// Within this distance a character is considered at its target.
const ARRIVAL_DISTANCE: f32 = 10.0;

/// Random-walk population driven by a seeded ChaCha stream.
pub struct DemoTown {
    rng: ChaCha8Rng,
    characters: Vec<CharacterState>,
    targets: Vec<(f32, f32)>,
    anchors: Vec<(f32, f32)>,
    messages: Vec<ChatLine>,
    chat_chance: f64,
    tick: u64,
}

impl DemoTown {
    pub fn new(locations: &[Location], count: usize, seed: u64, chat_chance: f64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut anchors: Vec<(f32, f32)> = locations.iter().map(|l| (l.x, l.y)).collect();
        if anchors.is_empty() {
            anchors.push((0.0, 0.0));
        }

        let characters: Vec<CharacterState> = (0..count)
            .map(|i| {
                let base = NAMES[i % NAMES.len()];
                let name = if i < NAMES.len() {
                    base.to_string()
                } else {
                    format!("{base}{}", i / NAMES.len() + 1)
                };
                CharacterState {
                    id: format!("c{i}"),
                    name,
                    x: rng.gen_range(-80.0..80.0),
                    y: rng.gen_range(-80.0..80.0),
                    alive: true,
                    walking: false,
                    facing: Facing::Down,
                    relationships: BTreeMap::new(),
                }
            })
            .collect();
        let targets = characters
            .iter()
            .map(|_| *anchors.choose(&mut rng).unwrap_or(&(0.0, 0.0)))
            .collect();

        Self {
            rng,
            characters,
            targets,
            anchors,
            messages: Vec::new(),
            chat_chance,
            tick: 0,
        }
    }

    pub fn characters(&self) -> &[CharacterState] {
        &self.characters
    }

    pub fn messages(&self) -> &[ChatLine] {
        &self.messages
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advance one simulation tick.
    pub fn step(&mut self) {
        self.tick += 1;
        for i in 0..self.characters.len() {
            self.move_character(i);
            if self.rng.gen_bool(self.chat_chance.clamp(0.0, 1.0)) {
                self.chatter(i);
            }
        }
        if self.messages.len() > MESSAGE_HISTORY {
            let excess = self.messages.len() - MESSAGE_HISTORY;
            self.messages.drain(..excess);
        }
    }

    /// Close a fraction of the gap to the target; jitter around it once close.
    fn move_character(&mut self, i: usize) {
        let (tx, ty) = self.targets[i];
        let ch = &mut self.characters[i];
        if !ch.alive {
            return;
        }
        let (dx, dy) = (tx - ch.x, ty - ch.y);
        let speed = 0.3 + self.rng.gen_range(0.0..0.2);
        let (mut step_x, mut step_y) = (dx * speed, dy * speed);

        let dist = (dx * dx + dy * dy).sqrt();
        if dist < ARRIVAL_DISTANCE {
            step_x += self.rng.gen_range(-8.0..8.0);
            step_y += self.rng.gen_range(-8.0..8.0);
            // Occasionally head somewhere else
            if self.rng.gen_bool(0.1) {
                if let Some(next) = self.anchors.choose(&mut self.rng) {
                    self.targets[i] = *next;
                }
            }
        }

        ch.x = (ch.x + step_x).clamp(SIM_MIN, SIM_MAX);
        ch.y = (ch.y + step_y).clamp(SIM_MIN, SIM_MAX);
        ch.walking = step_x.abs() + step_y.abs() > 0.5;
        ch.facing = Facing::from_delta(step_x, step_y);
    }

    fn chatter(&mut self, i: usize) {
        let Some(content) = SAYINGS.choose(&mut self.rng) else {
            return;
        };
        let is_thought = self.rng.gen_bool(0.3);
        let speaker_id = self.characters[i].id.clone();
        self.messages.push(ChatLine {
            speaker_id,
            content: content.to_string(),
            is_thought,
            tick: self.tick,
        });

        // Talking shifts the speaker's opinion of someone else
        if self.characters.len() > 1 {
            let mut other = self.rng.gen_range(0..self.characters.len() - 1);
            if other >= i {
                other += 1;
            }
            let other_id = self.characters[other].id.clone();
            let shift = self.rng.gen_range(-0.25..0.3);
            let affinity = self.characters[i].relationships.entry(other_id).or_insert(0.0);
            *affinity = (*affinity + shift).clamp(-1.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::default_locations;

    #[test]
    fn test_same_seed_same_town() {
        let mut a = DemoTown::new(&default_locations(), 6, 11, 0.5);
        let mut b = DemoTown::new(&default_locations(), 6, 11, 0.5);
        for _ in 0..20 {
            a.step();
            b.step();
        }
        assert_eq!(a.characters(), b.characters());
        assert_eq!(a.messages(), b.messages());
        assert_eq!(a.tick(), 20);
    }

    #[test]
    fn test_characters_stay_in_bounds() {
        let mut town = DemoTown::new(&default_locations(), 12, 3, 0.0);
        for _ in 0..200 {
            town.step();
        }
        for ch in town.characters() {
            assert!((SIM_MIN..=SIM_MAX).contains(&ch.x));
            assert!((SIM_MIN..=SIM_MAX).contains(&ch.y));
        }
        assert!(town.messages().is_empty());
    }

    #[test]
    fn test_names_are_unique_past_the_list() {
        let town = DemoTown::new(&[], 14, 1, 0.0);
        assert_eq!(town.characters()[12].name, "Ada2");
        assert_eq!(town.characters()[13].id, "c13");
    }

    #[test]
    fn test_chatter_builds_relationships() {
        let mut town = DemoTown::new(&default_locations(), 4, 5, 1.0);
        for _ in 0..10 {
            town.step();
        }
        assert!(town.messages().len() <= MESSAGE_HISTORY);
        assert!(town.characters().iter().any(|c| !c.relationships.is_empty()));
        for ch in town.characters() {
            assert!(!ch.relationships.contains_key(&ch.id));
        }
    }
}
