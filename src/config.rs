//! Map generation configuration
//!
//! All generation settings travel through this struct instead of global
//! state, so a generator call is a pure function of its inputs plus the
//! random source. Configs load from JSON; missing fields fall back to the
//! shipped defaults.

use std::fs;
use std::io;
use std::path::Path;

use crate::mountains::MountainParams;

/// Top-level map generation settings.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Map width in tiles
    pub width: usize,
    /// Map height in tiles
    pub height: usize,
    /// Mountain placement tunables
    pub mountains: MountainParams,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 150,
            mountains: MountainParams::default(),
        }
    }
}

impl MapConfig {
    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> io::Result<MapConfig> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid config {}: {}", path.display(), e),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_balance() {
        let config = MapConfig::default();
        assert_eq!(config.width, 200);
        assert_eq!(config.height, 150);
        assert_eq!(config.mountains.count_min, 5);
        assert_eq!(config.mountains.count_max, 9);
        assert_eq!(config.mountains.edge_margin, 5);
        assert!((config.mountains.fill_probability - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: MapConfig =
            serde_json::from_str(r#"{"width": 80, "mountains": {"radius_max": 12}}"#).unwrap();
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 150);
        assert_eq!(config.mountains.radius_max, 12);
        assert_eq!(config.mountains.radius_min, 8);
    }
}
