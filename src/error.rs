use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("cannot convert images with width not multiple of {granularity} pixels (width is {width})")]
    WidthNotAligned { width: usize, granularity: usize },

    #[error("cannot convert images with height not multiple of {granularity} pixels (height is {height})")]
    HeightNotAligned { height: usize, granularity: usize },

    #[error("image uses more than {max} colors (found at least {found})")]
    TooManyColors { found: usize, max: usize },

    #[error("unknown background color: {0}")]
    UnknownBackgroundColor(String),

    #[error("pixel buffer length {len} does not match {width}x{height} at {depth} bytes per pixel")]
    BufferSizeMismatch {
        len: usize,
        width: usize,
        height: usize,
        depth: usize,
    },

    #[error("images need at least 3 channels per pixel, got {0}")]
    UnsupportedDepth(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_not_aligned_message() {
        let error = ConvertError::WidthNotAligned {
            width: 12,
            granularity: 8,
        };
        assert_eq!(
            error.to_string(),
            "cannot convert images with width not multiple of 8 pixels (width is 12)"
        );
    }

    #[test]
    fn test_too_many_colors_message() {
        let error = ConvertError::TooManyColors { found: 5, max: 4 };
        assert_eq!(
            error.to_string(),
            "image uses more than 4 colors (found at least 5)"
        );
    }

    #[test]
    fn test_unknown_background_message() {
        let error = ConvertError::UnknownBackgroundColor("MAUVE".to_string());
        assert_eq!(error.to_string(), "unknown background color: MAUVE");
    }
}
