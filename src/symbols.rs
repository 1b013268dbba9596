// Symbol names and the C header describing where each image sits in the
// tile sheet.
use std::path::Path;

use anyhow::{bail, ensure, Result};
use itertools::Itertools;

use crate::sheet::ImageTileRecord;

/// Symbol for an image file: the part of the file stem after its last
/// underscore, upper-cased. Anything that is not ASCII alphanumeric becomes
/// an underscore so the result is a valid identifier fragment.
pub fn symbol_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tail = stem.rsplit('_').next().unwrap_or(stem.as_str());
    tail.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

pub fn prefix(bank: Option<u8>) -> String {
    match bank {
        Some(b) => format!("TILE_B{}_", b),
        None => "TILE_".to_string(),
    }
}

fn guard(bank: Option<u8>) -> String {
    match bank {
        Some(b) => format!("_TILES_B{}_H_", b),
        None => "_TILES_H_".to_string(),
    }
}

// Suffix of the trailer define holding the total tile count.
const RESERVED_COUNT: &str = "COUNT";

pub fn render_header(records: &[ImageTileRecord], tiles_count: usize, bank: Option<u8>) -> String {
    let p = prefix(bank);
    let guard = guard(bank);
    let mut lines = vec![
        format!("#ifndef {guard}"),
        format!("#define {guard}"),
        String::new(),
    ];
    for r in records {
        let name = &r.symbol;
        lines.push(format!("#define {p}{name} {}", r.start_tile));
        lines.push(format!("#define {p}{name}_WIDTH {}", r.width_tiles));
        lines.push(format!("#define {p}{name}_HEIGHT {}", r.height_tiles));
        for (k, color) in r.colors.iter().enumerate() {
            lines.push(format!("#define {p}{name}_COLOR{k} COLOR_{color}"));
        }
    }
    lines.push(format!("#define {p}{RESERVED_COUNT} {tiles_count}"));
    lines.push(String::new());
    lines.push("#endif".to_string());
    lines.iter().join("\n") + "\n"
}

/// Check that every image symbol yields its own defines: no empty symbol,
/// none clashing with the tile count define, no symbol used twice.
pub fn validate(records: &[ImageTileRecord]) -> Result<()> {
    for r in records {
        ensure!(
            !r.symbol.is_empty(),
            "Image at tile {} has an empty symbol name",
            r.start_tile
        );
        ensure!(
            r.symbol != RESERVED_COUNT,
            "Symbol {} is reserved for the tile count",
            RESERVED_COUNT
        );
    }
    let duplicates = records
        .iter()
        .map(|r| r.symbol.as_str())
        .duplicates()
        .collect_vec();
    if !duplicates.is_empty() {
        bail!(
            "Symbol(s) used by more than one image: {}",
            duplicates.join(", ")
        );
    }
    Ok(())
}
