//! Seed management for map generation
//!
//! Each generation pass gets its own seed derived from a master seed, so one
//! pass can be varied (or pinned) without disturbing the others.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Seeds for all map generation passes.
#[derive(Clone, Copy, Debug)]
pub struct MapSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Base terrain pass (grass/sand/water/stone patches)
    pub base_terrain: u64,
    /// Mountain wall formations
    pub mountains: u64,
}

impl MapSeeds {
    /// Create seeds from a master seed, deriving all sub-seeds deterministically.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            base_terrain: derive_seed(master, "base_terrain"),
            mountains: derive_seed(master, "mountains"),
        }
    }

}

impl Default for MapSeeds {
    fn default() -> Self {
        Self::from_master(rand::random())
    }
}

/// Derive a sub-seed from a master seed and a pass name.
/// Hashing keeps the sub-seeds distinct but deterministic.
fn derive_seed(master: u64, pass: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    master.hash(&mut hasher);
    pass.hash(&mut hasher);
    hasher.finish()
}

impl std::fmt::Display for MapSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MapSeeds {{ master: {}, base_terrain: {}, mountains: {} }}",
            self.master, self.base_terrain, self.mountains,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_derivation() {
        let a = MapSeeds::from_master(12345);
        let b = MapSeeds::from_master(12345);
        assert_eq!(a.base_terrain, b.base_terrain);
        assert_eq!(a.mountains, b.mountains);
    }

    #[test]
    fn test_passes_get_different_seeds() {
        let seeds = MapSeeds::from_master(12345);
        assert_ne!(seeds.base_terrain, seeds.mountains);
    }
}
