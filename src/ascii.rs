//! ASCII rendering and export for terrain maps
//!
//! Quick terminal previews and text-file exports of a generated map.

use std::fs::File;
use std::io::{self, Write};

use chrono::Local;

use crate::tilemap::Tilemap;
use crate::tiles::TileKind;

/// Get the ASCII character for a tile.
pub fn tile_char(tile: &TileKind) -> char {
    match tile {
        TileKind::Grass => '.',
        TileKind::Sand => ',',
        TileKind::Water => '~',
        TileKind::Stone => 'o',
        TileKind::DarkStone => 'O',
        TileKind::Wall => '#',
    }
}

/// Render the map as one string, row per line.
pub fn render_map(map: &Tilemap<TileKind>) -> String {
    let mut out = String::with_capacity((map.width + 1) * map.height);
    for y in 0..map.height {
        for x in 0..map.width {
            out.push(tile_char(map.get(x, y)));
        }
        out.push('\n');
    }
    out
}

/// One-line legend mapping each glyph to its tile name.
pub fn legend_line() -> String {
    let entries: Vec<String> = TileKind::all()
        .iter()
        .map(|kind| format!("{} {}", tile_char(kind), kind.display_name()))
        .collect();
    format!("Legend: {}", entries.join("  "))
}

/// Print the map to stdout with a legend line.
pub fn print_map(map: &Tilemap<TileKind>) {
    print!("{}", render_map(map));
    println!("{}", legend_line());
}

/// Export the map to a text file with a generation header.
pub fn export_ascii(map: &Tilemap<TileKind>, seed: u64, path: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Terrain map {}x{} (seed {})", map.width, map.height, seed)?;
    writeln!(file, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file)?;
    file.write_all(render_map(map).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiles_render_distinctly() {
        let tiles = TileKind::all();
        for (i, a) in tiles.iter().enumerate() {
            for b in &tiles[i + 1..] {
                assert_ne!(tile_char(a), tile_char(b));
            }
        }
    }

    #[test]
    fn test_legend_names_every_tile() {
        let legend = legend_line();
        for kind in TileKind::all() {
            assert!(legend.contains(kind.display_name()), "missing {:?}", kind);
            assert!(legend.contains(tile_char(kind)));
        }
    }

    #[test]
    fn test_render_shape() {
        let mut map = Tilemap::new_with(3, 2, TileKind::Grass);
        map.set(2, 1, TileKind::Wall);
        assert_eq!(render_map(&map), "...\n..#\n");
    }
}
