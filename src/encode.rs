// Per-image conversion: precondition checks, then dispatch to the encoder for
// the configured mode, writing into freshly granted tiles of the sheet.
use log::{debug, info, log_enabled, Level};

use crate::{
    common::ImageBuffer,
    config::{Config, Mode},
    error::ConvertError,
    palette::Palette,
    reference::{map_palette, names, REFERENCE_PALETTE},
    sheet::{ImageTileRecord, TileSheet},
};

pub mod monochrome;
pub mod multicolor;

// Tile cell size in source pixels for a mode: (horizontal, vertical).
pub fn granularity(mode: Mode) -> (usize, usize) {
    (mode.pixels_per_byte(), 8)
}

pub fn check_buffer(image: &ImageBuffer) -> Result<(), ConvertError> {
    if image.depth < 3 {
        return Err(ConvertError::UnsupportedDepth(image.depth));
    }
    if image.data.len() != image.width * image.height * image.depth {
        return Err(ConvertError::BufferSizeMismatch {
            len: image.data.len(),
            width: image.width,
            height: image.height,
            depth: image.depth,
        });
    }
    Ok(())
}

pub fn check_alignment(image: &ImageBuffer, mode: Mode) -> Result<(), ConvertError> {
    let (gx, gy) = granularity(mode);
    if image.width % gx != 0 {
        return Err(ConvertError::WidthNotAligned {
            width: image.width,
            granularity: gx,
        });
    }
    if image.height % gy != 0 {
        return Err(ConvertError::HeightNotAligned {
            height: image.height,
            granularity: gy,
        });
    }
    Ok(())
}

/// Convert one image and append its tiles to `sheet`. Every check runs before
/// the sheet is touched, so a failing image leaves the sheet unchanged.
pub fn encode_image(
    image: &ImageBuffer,
    symbol: &str,
    config: &Config,
    sheet: &mut TileSheet,
) -> Result<ImageTileRecord, ConvertError> {
    check_buffer(image)?;
    check_alignment(image, config.mode)?;
    let (gx, gy) = granularity(config.mode);
    let width_tiles = image.width / gx;
    let height_tiles = image.height / gy;

    let palette = match config.mode {
        Mode::Monochrome => None,
        Mode::Multicolor => {
            let mut palette = Palette::from_image(image)?;
            if let Some(bg) = config.background_color() {
                palette.pin_background(bg);
            }
            Some(palette)
        }
    };

    info!(
        "{}: {}x{} pixels -> ({}x{} tiles, {} bpp)",
        symbol,
        image.width,
        image.height,
        width_tiles,
        height_tiles,
        config.mode.bits_per_pixel()
    );

    let count = width_tiles * height_tiles;
    let start_tile = sheet.append(count);
    let tiles = sheet.tiles_mut(start_tile, count);
    let preview = log_enabled!(Level::Debug);

    let (lines, colors) = match &palette {
        None => (
            monochrome::encode(image, config, tiles, width_tiles, preview),
            vec![],
        ),
        Some(palette) => {
            let lines = multicolor::encode(image, palette, tiles, width_tiles, preview);
            let colors = names(&map_palette(palette.colors(), &REFERENCE_PALETTE));
            debug!("{}: palette {:?} -> {:?}", symbol, palette.colors(), colors);
            (lines, colors)
        }
    };
    for line in &lines {
        debug!("{}", line);
    }

    Ok(ImageTileRecord {
        symbol: symbol.to_string(),
        start_tile,
        width_tiles,
        height_tiles,
        colors,
    })
}
