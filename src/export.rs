//! PNG export for terrain maps

use image::{ImageBuffer, Rgb, RgbImage};

use crate::tilemap::Tilemap;
use crate::tiles::TileKind;

/// Map-view color for a tile.
pub fn tile_color(tile: &TileKind) -> [u8; 3] {
    match tile {
        TileKind::Grass => [92, 158, 74],
        TileKind::Sand => [214, 196, 130],
        TileKind::Water => [52, 106, 180],
        TileKind::Stone => [140, 140, 140],
        TileKind::DarkStone => [88, 88, 96],
        TileKind::Wall => [60, 48, 40],
    }
}

/// Export the map as a PNG, each tile drawn as a `scale`x`scale` pixel block.
pub fn export_map_scaled(
    map: &Tilemap<TileKind>,
    scale: u32,
    path: &str,
) -> Result<(), image::ImageError> {
    let scale = scale.max(1);
    let mut img: RgbImage =
        ImageBuffer::new(map.width as u32 * scale, map.height as u32 * scale);

    for y in 0..map.height {
        for x in 0..map.width {
            let color = Rgb(tile_color(map.get(x, y)));
            for py in 0..scale {
                for px in 0..scale {
                    img.put_pixel(x as u32 * scale + px, y as u32 * scale + py, color);
                }
            }
        }
    }

    img.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_colors_are_distinct() {
        let tiles = TileKind::all();
        for (i, a) in tiles.iter().enumerate() {
            for b in &tiles[i + 1..] {
                assert_ne!(tile_color(a), tile_color(b));
            }
        }
    }
}
