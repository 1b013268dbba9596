use crate::common::Color;

// Magnitude of the color vector with each channel contributing up to a third.
// This is a geometric measure, not a perceptual one.
pub fn luminance(c: Color) -> u32 {
    let red = c.red as f64 / 3.0;
    let green = c.green as f64 / 3.0;
    let blue = c.blue as f64 / 3.0;
    f64::sqrt(red * red + green * green + blue * blue) as u32
}

// Euclidean distance between two colors in RGB space, truncated.
pub fn distance(a: Color, b: Color) -> u32 {
    let dr = a.red as i32 - b.red as i32;
    let dg = a.green as i32 - b.green as i32;
    let db = a.blue as i32 - b.blue as i32;
    f64::sqrt((dr * dr + dg * dg + db * db) as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance(Color::new(0, 0, 0)), 0);
        // sqrt(3 * 85^2) = 147.22...
        assert_eq!(luminance(Color::new(255, 255, 255)), 147);
        assert_eq!(luminance(Color::new(255, 0, 0)), 85);
    }

    #[test]
    fn test_luminance_is_monotonic_in_brightness() {
        let mut prev = 0;
        for v in 0..=255u8 {
            let l = luminance(Color::new(v, v, v));
            assert!(l >= prev);
            prev = l;
        }
    }

    #[test]
    fn test_distance_properties() {
        let a = Color::new(10, 200, 30);
        let b = Color::new(250, 0, 90);
        assert_eq!(distance(a, a), 0);
        assert_eq!(distance(a, b), distance(b, a));
        assert!(distance(a, b) > 0);
        assert_eq!(distance(Color::new(0, 0, 0), Color::new(3, 4, 0)), 5);
    }

    #[test]
    fn test_distance_nonzero_for_one_unit_difference() {
        assert_eq!(distance(Color::new(0, 0, 0), Color::new(0, 0, 1)), 1);
    }
}
