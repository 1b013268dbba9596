use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use json_pretty_compact::PrettyCompactFormatter;
use log::info;
use serde::Serialize;
use serde_json::Serializer;

use crate::{
    config::Mode,
    sheet::{ImageTileRecord, TileSheet},
    symbols::{render_header, validate},
};

#[derive(Serialize)]
struct Manifest<'a> {
    tiles_count: usize,
    bits_per_pixel: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    bank: Option<u8>,
    images: &'a [ImageTileRecord],
}

fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    info!("Saving {}", path.display());
    let formatter = PrettyCompactFormatter::new();
    let mut data_bytes = vec![];
    let mut ser = Serializer::with_formatter(&mut data_bytes, formatter);
    data.serialize(&mut ser)?;
    create_parent_dir(path)?;
    fs::write(path, &data_bytes).with_context(|| format!("Unable to write {}", path.display()))?;
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

// Raw tile data: tiles_count * 8 bytes, no header.
pub fn save_tiles(path: &Path, sheet: &TileSheet) -> Result<()> {
    info!("Saving {} tile(s) to {}", sheet.tiles_count(), path.display());
    create_parent_dir(path)?;
    fs::write(path, sheet.bytes()).with_context(|| format!("Unable to open file {}", path.display()))?;
    Ok(())
}

pub fn save_header(
    path: &Path,
    records: &[ImageTileRecord],
    tiles_count: usize,
    bank: Option<u8>,
) -> Result<()> {
    validate(records)?;
    info!("Saving {}", path.display());
    create_parent_dir(path)?;
    fs::write(path, render_header(records, tiles_count, bank))
        .with_context(|| format!("Unable to open file {}", path.display()))?;
    Ok(())
}

pub fn save_manifest(
    path: &Path,
    records: &[ImageTileRecord],
    tiles_count: usize,
    mode: Mode,
    bank: Option<u8>,
) -> Result<()> {
    let manifest = Manifest {
        tiles_count,
        bits_per_pixel: mode,
        bank,
        images: records,
    };
    save_json(path, &manifest)
}

/// Expand input arguments that are glob patterns. Matches of one pattern are
/// sorted; an argument matching nothing is kept as a literal path so that
/// the error for a missing file names it.
pub fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = vec![];
    for input in inputs {
        let mut matches = vec![];
        for entry in glob::glob(input).with_context(|| format!("Invalid input pattern {}", input))? {
            matches.push(entry?);
        }
        if matches.is_empty() {
            paths.push(PathBuf::from(input));
        } else {
            matches.sort();
            paths.extend(matches);
        }
    }
    Ok(paths)
}
