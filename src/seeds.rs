//! Seed management for world generation
//!
//! Each generation stage owns its own seed and its own pseudo-random stream,
//! so tweaking one stage never shifts the output of another.

use serde::{Deserialize, Serialize};

/// Modulus of the minimal-standard generator (2^31 - 1).
const MINSTD_MODULUS: u64 = 2_147_483_647;

/// Multiplier of the minimal-standard generator.
const MINSTD_MULTIPLIER: u64 = 16_807;

/// Seeds for all world generation stages.
///
/// The defaults are fixed constants: the same anchor set must always yield the
/// same town, across sessions and machines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSeeds {
    /// Base terrain, river and road stamping
    pub terrain: u64,
    /// Decoration scatter (trees, rocks, lamps, fences)
    pub decorations: u64,
    /// Residential plot layout
    pub houses: u64,
}

impl Default for WorldSeeds {
    fn default() -> Self {
        Self {
            terrain: 42,
            decorations: 123,
            houses: 777,
        }
    }
}

impl WorldSeeds {
    /// Create seeds from a master seed, deriving all sub-seeds deterministically.
    pub fn from_master(master: u64) -> Self {
        Self {
            terrain: derive_seed(master, "terrain"),
            decorations: derive_seed(master, "decorations"),
            houses: derive_seed(master, "houses"),
        }
    }
}

/// Derive a sub-seed from a master seed and a stage name.
///
/// FNV-1a over the master bytes and the name; stable across Rust releases,
/// unlike `DefaultHasher`.
fn derive_seed(master: u64, stage: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in master.to_le_bytes().iter().chain(stage.as_bytes()) {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}

impl std::fmt::Display for WorldSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WorldSeeds {{ terrain: {}, decorations: {}, houses: {} }}",
            self.terrain, self.decorations, self.houses,
        )
    }
}

/// Park-Miller minimal-standard linear congruential generator.
///
/// `state <- state * 16807 mod (2^31 - 1)`. Small, fast and bit-exact on every
/// platform, which is all procedural placement needs.
#[derive(Clone, Debug)]
pub struct MinStdRng {
    state: u64,
}

impl MinStdRng {
    /// Create a stream from a seed. Zero (mod 2^31 - 1) is a fixed point of the
    /// recurrence, so it is bumped to 1.
    pub fn new(seed: u64) -> Self {
        let state = seed % MINSTD_MODULUS;
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    /// Next value in `(0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state * MINSTD_MULTIPLIER % MINSTD_MODULUS;
        self.state as f64 / MINSTD_MODULUS as f64
    }

    /// Uniform integer in `0..n`.
    pub fn below(&mut self, n: u32) -> u32 {
        (self.next_f64() * f64::from(n)).floor() as u32
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}
