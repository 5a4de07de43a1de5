//! Tile type table for the game map
//!
//! The integer codes are the map format consumed by the game client, so the
//! discriminants here must never be reordered.

/// Terrain tile categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum TileKind {
    #[default]
    Grass = 0,
    Sand = 1,
    Water = 2,
    Stone = 3,
    DarkStone = 4,
    Wall = 5,
}

impl TileKind {
    /// Stable wire/save code for this tile.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Inverse of [`code`](Self::code). Returns `None` for unknown codes.
    pub fn from_code(code: u8) -> Option<TileKind> {
        match code {
            0 => Some(TileKind::Grass),
            1 => Some(TileKind::Sand),
            2 => Some(TileKind::Water),
            3 => Some(TileKind::Stone),
            4 => Some(TileKind::DarkStone),
            5 => Some(TileKind::Wall),
            _ => None,
        }
    }

    pub fn all() -> &'static [TileKind] {
        &[
            TileKind::Grass,
            TileKind::Sand,
            TileKind::Water,
            TileKind::Stone,
            TileKind::DarkStone,
            TileKind::Wall,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TileKind::Grass => "Grass",
            TileKind::Sand => "Sand",
            TileKind::Water => "Water",
            TileKind::Stone => "Stone",
            TileKind::DarkStone => "Dark Stone",
            TileKind::Wall => "Wall",
        }
    }

    /// Whether units can walk over this tile.
    pub fn is_passable(&self) -> bool {
        !matches!(self, TileKind::Water | TileKind::Wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(TileKind::Grass.code(), 0);
        assert_eq!(TileKind::Water.code(), 2);
        assert_eq!(TileKind::Wall.code(), 5);
        assert_eq!(TileKind::from_code(4), Some(TileKind::DarkStone));
        assert_eq!(TileKind::from_code(6), None);
    }

    #[test]
    fn test_all_lists_every_kind_once() {
        let all = TileKind::all();
        assert_eq!(all.len(), 6);
        for code in 0..6 {
            let kind = TileKind::from_code(code).unwrap();
            assert_eq!(all.iter().filter(|k| **k == kind).count(), 1);
        }
    }

    #[test]
    fn test_passability() {
        assert!(TileKind::Grass.is_passable());
        assert!(TileKind::Sand.is_passable());
        assert!(!TileKind::Water.is_passable());
        assert!(!TileKind::Wall.is_passable());
    }
}
