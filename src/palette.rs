// Discovery of the distinct colors used by an image, and the small palettes
// built from them for multicolor encoding.
use hashbrown::HashSet;
use log::debug;

use crate::{
    common::{Color, ColorIdx, ImageBuffer},
    error::ConvertError,
    helpers::distance,
};

// Raw capacity used when scanning an image; well above any semantic cap.
pub const SCAN_CAPACITY: usize = 256;

// Maximum number of colors in a multicolor palette (2 bits per pixel).
pub const MULTICOLOR_MAX: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteScan {
    // Distinct colors in first-seen order, at most `capacity` of them.
    pub colors: Vec<Color>,
    // Number of distinct colors found. Saturates at `capacity + 1`.
    pub distinct: usize,
}

impl PaletteScan {
    pub fn exceeds(&self, max: usize) -> bool {
        self.distinct > max
    }
}

/// Scan the image in row-major order and collect its distinct colors by exact
/// equality. Recording stops once `capacity` colors are held; the scan itself
/// stops at the first color beyond that, which is enough to report overflow.
pub fn extract_palette(image: &ImageBuffer, capacity: usize) -> PaletteScan {
    let mut seen: HashSet<Color> = HashSet::new();
    let mut colors: Vec<Color> = vec![];
    for (_, _, c) in image.pixels() {
        if seen.contains(&c) {
            continue;
        }
        if colors.len() == capacity {
            return PaletteScan {
                colors,
                distinct: capacity + 1,
            };
        }
        seen.insert(c);
        colors.push(c);
    }
    let distinct = colors.len();
    PaletteScan { colors, distinct }
}

// Up to four colors used to quantize one multicolor image. The position of a
// color is the 2-bit index written into the tile data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    // Extract the palette of a multicolor image, failing if it needs more
    // than four colors.
    pub fn from_image(image: &ImageBuffer) -> Result<Self, ConvertError> {
        let scan = extract_palette(image, SCAN_CAPACITY);
        if scan.exceeds(MULTICOLOR_MAX) {
            return Err(ConvertError::TooManyColors {
                found: scan.distinct,
                max: MULTICOLOR_MAX,
            });
        }
        debug!("extracted palette: {:?}", scan.colors);
        Ok(Palette {
            colors: scan.colors,
        })
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    // Index of the entry closest to `c`. Ties go to the lowest index.
    pub fn nearest(&self, c: Color) -> ColorIdx {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;
        for (i, &p) in self.colors.iter().enumerate() {
            let d = distance(c, p);
            if d < best_dist {
                best_dist = d;
                best_idx = i;
            }
        }
        best_idx as ColorIdx
    }

    // Swap the entry closest to `background` into slot 0.
    pub fn pin_background(&mut self, background: Color) {
        if self.colors.is_empty() {
            return;
        }
        let idx = self.nearest(background) as usize;
        self.colors.swap(0, idx);
    }
}
