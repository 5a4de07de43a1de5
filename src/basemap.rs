//! Base terrain pass
//!
//! Lays down the grass/sand/water/stone ground cover that the mountain pass
//! stamps over. Two low-frequency Perlin fields drive the split: one for
//! elevation (water basins, stone uplands) and one for moisture (sand
//! fringes). Deliberately coarse; features that depend on walls (pathing,
//! resource nodes) run after [`crate::mountains::generate_mountains`].

use noise::{NoiseFn, Perlin, Seedable};

use crate::tilemap::Tilemap;
use crate::tiles::TileKind;

const ELEVATION_FREQUENCY: f64 = 0.035;
const MOISTURE_FREQUENCY: f64 = 0.05;

// Elevation cut points, low to high
const WATER_LEVEL: f64 = -0.45;
const STONE_LEVEL: f64 = 0.5;
const DARK_STONE_LEVEL: f64 = 0.7;

// Dry cells near (but above) water level become sand
const SAND_DRYNESS: f64 = 0.2;
const SAND_BAND: f64 = 0.15;

/// Generate a fresh base terrain map.
pub fn generate_base_terrain(width: usize, height: usize, seed: u64) -> Tilemap<TileKind> {
    let elevation = Perlin::new(1).set_seed(seed as u32);
    let moisture = Perlin::new(1).set_seed(seed as u32 + 1111);

    let mut map = Tilemap::new_with(width, height, TileKind::Grass);
    for (x, y, tile) in map.iter_mut() {
        let nx = x as f64 * ELEVATION_FREQUENCY;
        let ny = y as f64 * ELEVATION_FREQUENCY;
        let e = elevation.get([nx, ny]);

        *tile = if e < WATER_LEVEL {
            TileKind::Water
        } else if e > DARK_STONE_LEVEL {
            TileKind::DarkStone
        } else if e > STONE_LEVEL {
            TileKind::Stone
        } else {
            let m = moisture.get([x as f64 * MOISTURE_FREQUENCY, y as f64 * MOISTURE_FREQUENCY]);
            if m > SAND_DRYNESS && e < WATER_LEVEL + SAND_BAND {
                TileKind::Sand
            } else {
                TileKind::Grass
            }
        };
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_match_request() {
        let map = generate_base_terrain(64, 48, 3);
        assert_eq!(map.width, 64);
        assert_eq!(map.height, 48);
    }

    #[test]
    fn test_same_seed_same_terrain() {
        let a = generate_base_terrain(80, 80, 21);
        let b = generate_base_terrain(80, 80, 21);
        assert!(a == b);
    }

    #[test]
    fn test_no_walls_in_base_terrain() {
        let map = generate_base_terrain(100, 100, 7);
        assert_eq!(map.count(&TileKind::Wall), 0);
    }
}
