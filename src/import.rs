// Decoding of source images into flat RGB(A) pixel buffers.
use std::{fs::File, io::BufReader, path::Path};

use anyhow::{bail, Context, Result};
use log::info;
use png::{BitDepth, ColorType, Transformations};

use crate::common::ImageBuffer;

pub fn load_png(path: &Path) -> Result<ImageBuffer> {
    info!("Loading {}", path.display());
    let file = File::open(path).with_context(|| format!("Unable to open file {}", path.display()))?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    // Palette and low bit depth images expand to 8 bits per channel.
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .with_context(|| format!("Failed to read PNG header from {}", path.display()))?;
    let source = reader.info();
    info!(
        "{}: ({}x{}, {} bpp)",
        path.display(),
        source.width,
        source.height,
        source_bpp(source.color_type, source.bit_depth)
    );
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    buf.truncate(frame.buffer_size());

    let width = frame.width as usize;
    let height = frame.height as usize;
    let image = match frame.color_type {
        ColorType::Rgb => ImageBuffer::new(width, height, 3, buf),
        ColorType::Rgba => ImageBuffer::new(width, height, 4, buf),
        ColorType::Grayscale => ImageBuffer::new(width, height, 3, widen_gray(&buf, 1)),
        ColorType::GrayscaleAlpha => ImageBuffer::new(width, height, 3, widen_gray(&buf, 2)),
        ColorType::Indexed => bail!("{}: palette was not expanded", path.display()),
    };
    Ok(image)
}

// Bits per pixel as stored in the file, before any expansion.
fn source_bpp(color_type: ColorType, bit_depth: BitDepth) -> usize {
    color_type.samples() * bit_depth as usize
}

// Replicate the gray sample of each pixel into three channels.
fn widen_gray(buf: &[u8], stride: usize) -> Vec<u8> {
    buf.chunks_exact(stride).flat_map(|p| [p[0]; 3]).collect()
}
