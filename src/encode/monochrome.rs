// 1 bit per pixel: each tile row is one byte, most significant bit leftmost.
use crate::{
    common::{ImageBuffer, TILE_ROWS},
    config::Config,
    helpers::luminance,
};

// Whether a pixel is drawn in the foreground.
pub fn pixel_on(config: &Config, lum: u32) -> bool {
    (lum >= config.threshold) ^ config.reverse
}

/// Encode `image` into `tiles`, the zeroed region granted for it in the sheet.
/// Returns one preview line per pixel row ('*' on, ' ' off) when `preview` is set.
pub fn encode(
    image: &ImageBuffer,
    config: &Config,
    tiles: &mut [u8],
    width_tiles: usize,
    preview: bool,
) -> Vec<String> {
    let mut lines: Vec<String> = vec![];
    let mut line = String::new();
    for (x, y, c) in image.pixels() {
        let tile_x = x >> 3;
        let tile_y = y >> 3;
        let offset = tile_y * TILE_ROWS * width_tiles + tile_x * TILE_ROWS + (y & 0x07);
        let bitmask = 1u8 << (7 - (x & 0x07));
        let on = pixel_on(config, luminance(c));
        if on {
            tiles[offset] |= bitmask;
        } else {
            tiles[offset] &= !bitmask;
        }
        if preview {
            line.push(if on { '*' } else { ' ' });
            if x + 1 == image.width {
                lines.push(std::mem::take(&mut line));
            }
        }
    }
    lines
}
