//! Pixel town library
//!
//! Deterministic town generation, a camera-driven sprite renderer and the
//! tools built on them.

pub mod ascii;
pub mod assets;
pub mod buildings;
pub mod config;
pub mod coords;
pub mod demo;
pub mod error;
pub mod export;
pub mod render;
pub mod scene;
pub mod seeds;
pub mod sprite;
pub mod surface;
pub mod terrain;
pub mod tilemap;
pub mod viewer;
pub mod world;
pub mod worldgen;
