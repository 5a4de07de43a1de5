//! Tile-map terrain generation library
//!
//! Re-exports modules for use by the binary and by the game's map pipeline.

pub mod ascii;
pub mod basemap;
pub mod config;
pub mod edge_noise;
pub mod export;
pub mod mountains;
pub mod rng;
pub mod seeds;
pub mod tilemap;
pub mod tiles;
