// 2 bits per pixel: each tile row byte holds four pixels, leftmost pixel in
// the top bit pair. Tiles cover 4x8 source pixels.
use crate::{
    common::{ImageBuffer, TILE_ROWS},
    palette::Palette,
};

/// Encode `image` into `tiles` by quantizing each pixel to its nearest
/// palette entry. The region must be zeroed: indices are OR-ed in.
/// Returns one preview line per pixel row (palette index digits) when `preview` is set.
pub fn encode(
    image: &ImageBuffer,
    palette: &Palette,
    tiles: &mut [u8],
    width_tiles: usize,
    preview: bool,
) -> Vec<String> {
    let mut lines: Vec<String> = vec![];
    let mut line = String::new();
    for (x, y, c) in image.pixels() {
        let tile_x = x >> 2;
        let tile_y = y >> 3;
        let offset = tile_y * TILE_ROWS * width_tiles + tile_x * TILE_ROWS + (y & 0x07);
        let idx = palette.nearest(c);
        tiles[offset] |= idx << (6 - (x & 0x03) * 2);
        if preview {
            line.push(char::from(b'0' + idx));
            if x + 1 == image.width {
                lines.push(std::mem::take(&mut line));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Color;

    const A: Color = Color::new(0, 0, 170);
    const B: Color = Color::new(238, 238, 119);

    fn encode_fresh(image: &ImageBuffer, palette: &Palette) -> Vec<u8> {
        let width_tiles = image.width / 4;
        let mut tiles = vec![0; width_tiles * (image.height / 8) * 8];
        encode(image, palette, &mut tiles, width_tiles, false);
        tiles
    }

    #[test]
    fn test_checkerboard_columns() {
        let image = ImageBuffer::from_fn(8, 8, |x, _| if x % 2 == 0 { A } else { B });
        let palette = Palette::from_image(&image).unwrap();
        assert_eq!(palette.colors(), &[A, B]);
        let tiles = encode_fresh(&image, &palette);
        // Indices 0,1,0,1 -> 00 01 00 01
        assert_eq!(tiles, vec![0x11; 16]);
    }

    #[test]
    fn test_four_colors_bit_positions() {
        let colors = [
            Color::new(0, 0, 0),
            Color::new(255, 0, 0),
            Color::new(0, 255, 0),
            Color::new(0, 0, 255),
        ];
        let image = ImageBuffer::from_fn(4, 8, |x, _| colors[x]);
        let palette = Palette::from_image(&image).unwrap();
        let tiles = encode_fresh(&image, &palette);
        // Indices 0,1,2,3 -> 00 01 10 11
        assert_eq!(tiles, vec![0x1B; 8]);
    }

    #[test]
    fn test_tiles_are_row_major_at_half_width() {
        // 8x16: two tiles across, two down; only the top-right tile uses color 1.
        let image = ImageBuffer::from_fn(8, 16, |x, y| if x >= 4 && y < 8 { B } else { A });
        let palette = Palette::from_image(&image).unwrap();
        let tiles = encode_fresh(&image, &palette);
        assert_eq!(tiles.len(), 32);
        assert_eq!(&tiles[0..8], &[0x00; 8]);
        assert_eq!(&tiles[8..16], &[0x55; 8]);
        assert_eq!(&tiles[16..32], &[0x00; 16]);
    }

    #[test]
    fn test_pinned_background_takes_index_zero() {
        let image = ImageBuffer::from_fn(4, 8, |x, _| if x == 0 { B } else { A });
        let mut palette = Palette::from_image(&image).unwrap();
        assert_eq!(palette.colors(), &[B, A]);
        palette.pin_background(Color::new(0, 0, 200));
        let tiles = encode_fresh(&image, &palette);
        // B is now index 1: 01 00 00 00
        assert_eq!(tiles, vec![0x40; 8]);
    }

    #[test]
    fn test_preview_lines() {
        let image = ImageBuffer::from_fn(4, 8, |x, _| if x < 2 { A } else { B });
        let palette = Palette::from_image(&image).unwrap();
        let mut tiles = vec![0; 8];
        let lines = encode(&image, &palette, &mut tiles, 1, true);
        assert_eq!(lines[7], "0011");
    }
}
