// The tile sheet: one growable byte buffer shared by every image of a batch.
use serde::Serialize;

use crate::common::{TileIdx, TILE_BYTES};

#[derive(Clone, Debug, Default)]
pub struct TileSheet {
    data: Vec<u8>,
}

impl TileSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tiles_count(&self) -> usize {
        self.data.len() / TILE_BYTES
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Grow the sheet by `new_tiles` zeroed tiles and return the index of the
    /// first one. Existing tiles are never moved or modified.
    pub fn append(&mut self, new_tiles: usize) -> TileIdx {
        let start = self.tiles_count();
        self.data.resize(self.data.len() + new_tiles * TILE_BYTES, 0);
        start
    }

    // Bytes of `count` tiles starting at tile `start`.
    pub fn tiles_mut(&mut self, start: TileIdx, count: usize) -> &mut [u8] {
        &mut self.data[start * TILE_BYTES..(start + count) * TILE_BYTES]
    }

    pub fn tile(&self, idx: TileIdx) -> &[u8] {
        &self.data[idx * TILE_BYTES..(idx + 1) * TILE_BYTES]
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

// Where one image landed in the sheet. Created once per image, never changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageTileRecord {
    pub symbol: String,
    pub start_tile: TileIdx,
    pub width_tiles: usize,
    pub height_tiles: usize,
    // Reference color names per palette slot (multicolor only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<&'static str>,
}

impl ImageTileRecord {
    pub fn tiles(&self) -> usize {
        self.width_tiles * self.height_tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_returns_previous_count() {
        let mut sheet = TileSheet::new();
        assert!(sheet.is_empty());
        assert_eq!(sheet.append(2), 0);
        assert_eq!(sheet.append(3), 2);
        assert_eq!(sheet.append(1), 5);
        assert_eq!(sheet.tiles_count(), 6);
        assert_eq!(sheet.bytes().len(), 6 * TILE_BYTES);
    }

    #[test]
    fn test_append_preserves_existing_and_zeroes_new() {
        let mut sheet = TileSheet::new();
        let start = sheet.append(1);
        sheet.tiles_mut(start, 1).fill(0xAA);
        let next = sheet.append(2);
        assert_eq!(next, 1);
        assert_eq!(sheet.tile(0), &[0xAA; 8]);
        assert_eq!(sheet.tile(1), &[0; 8]);
        assert_eq!(sheet.tile(2), &[0; 8]);
    }

    #[test]
    fn test_append_zero_tiles() {
        let mut sheet = TileSheet::new();
        sheet.append(2);
        assert_eq!(sheet.append(0), 2);
        assert_eq!(sheet.tiles_count(), 2);
    }
}
