pub type ColorValue = u8; // Channel value (0-255)
pub type ColorIdx = u8; // Index into an extracted palette (0-3 in multicolor mode)
pub type RefIdx = usize; // Index into the reference palette
pub type TileIdx = usize; // Index of a tile within the tile sheet

// Every tile is serialized as 8 row bytes, whatever the pixel mode.
pub const TILE_BYTES: usize = 8;
pub const TILE_ROWS: usize = 8;

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: ColorValue,
    pub green: ColorValue,
    pub blue: ColorValue,
}

impl Color {
    pub const fn new(red: ColorValue, green: ColorValue, blue: ColorValue) -> Self {
        Color { red, green, blue }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: Color,
}

// Decoded source image: row-major pixels, `depth` bytes per pixel. Only the
// first three channels of each pixel are read.
#[derive(Clone, Debug)]
pub struct ImageBuffer {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    pub data: Vec<u8>,
}

impl ImageBuffer {
    pub fn new(width: usize, height: usize, depth: usize, data: Vec<u8>) -> Self {
        ImageBuffer {
            width,
            height,
            depth,
            data,
        }
    }

    // Build a depth-3 image from a per-pixel function; handy for synthesized inputs.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> Color) -> Self {
        let mut data = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                let c = f(x, y);
                data.extend([c.red, c.green, c.blue]);
            }
        }
        ImageBuffer::new(width, height, 3, data)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let i = (y * self.width + x) * self.depth;
        Color::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    // Pixels in row-major order, with their coordinates.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.data
            .chunks_exact(self.depth)
            .enumerate()
            .map(|(i, p)| (i % self.width, i / self.width, Color::new(p[0], p[1], p[2])))
    }
}
