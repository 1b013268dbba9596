//! Conversion of decoded images into packed 8x8 tile data for 8-bit display
//! hardware, in 1 bit per pixel (monochrome) or 2 bits per pixel (multicolor),
//! with all images of a batch merged into one tile sheet.

pub mod common;
pub mod config;
pub mod encode;
pub mod error;
pub mod helpers;
pub mod import;
pub mod palette;
pub mod persist;
pub mod reference;
pub mod sheet;
pub mod symbols;

pub use common::{Color, ImageBuffer};
pub use config::{Config, Mode};
pub use error::ConvertError;
pub use sheet::{ImageTileRecord, TileSheet};

// Result of converting a sequence of images: the shared sheet plus where each
// image landed in it, in input order.
#[derive(Clone, Debug, Default)]
pub struct Batch {
    pub sheet: TileSheet,
    pub records: Vec<ImageTileRecord>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    // Images must be added in their final order: start tiles depend on it.
    pub fn add(
        &mut self,
        symbol: &str,
        image: &ImageBuffer,
        config: &Config,
    ) -> Result<&ImageTileRecord, ConvertError> {
        let record = encode::encode_image(image, symbol, config, &mut self.sheet)?;
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn tiles_count(&self) -> usize {
        self.sheet.tiles_count()
    }
}

/// Convert `images` in order into a single sheet. Stops at the first error.
pub fn convert_batch<'a>(
    images: impl IntoIterator<Item = (&'a str, &'a ImageBuffer)>,
    config: &Config,
) -> Result<Batch, ConvertError> {
    let mut batch = Batch::new();
    for (symbol, image) in images {
        batch.add(symbol, image, config)?;
    }
    Ok(batch)
}
