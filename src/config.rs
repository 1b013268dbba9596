use serde_repr::Serialize_repr;

use crate::{
    common::{Color, RefIdx},
    error::ConvertError,
    reference::{find_by_name, REFERENCE_PALETTE},
};

// Pixel encoding mode; the discriminant is the number of bits per pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize_repr)]
#[repr(u8)]
pub enum Mode {
    #[default]
    Monochrome = 1,
    Multicolor = 2,
}

impl Mode {
    pub fn bits_per_pixel(self) -> u8 {
        self as u8
    }

    // Number of pixels needed to fill one tile row byte.
    pub fn pixels_per_byte(self) -> usize {
        8 / self.bits_per_pixel() as usize
    }
}

// Conversion options shared by every image of a batch. Built once, then only read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub threshold: u32,
    pub reverse: bool,
    pub mode: Mode,
    pub bank: Option<u8>,
    pub background: Option<RefIdx>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            threshold: 1,
            reverse: false,
            mode: Mode::Monochrome,
            bank: None,
            background: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn bank(mut self, bank: u8) -> Self {
        self.bank = Some(bank);
        self
    }

    // Resolve a background color by reference palette name (case-insensitive).
    pub fn with_background_name(mut self, name: &str) -> Result<Self, ConvertError> {
        let idx = find_by_name(name)
            .ok_or_else(|| ConvertError::UnknownBackgroundColor(name.to_string()))?;
        self.background = Some(idx);
        Ok(self)
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background.map(|i| REFERENCE_PALETTE[i].color)
    }
}
