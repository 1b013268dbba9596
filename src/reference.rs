// The fixed, named palette of hardware colors, and the mapping of extracted
// palettes onto it for symbolic labeling.
use crate::{
    common::{Color, NamedColor, RefIdx},
    helpers::distance,
};

const fn named(name: &'static str, red: u8, green: u8, blue: u8) -> NamedColor {
    NamedColor {
        name,
        color: Color::new(red, green, blue),
    }
}

// Order matters: on equal distance the earlier entry wins.
pub const REFERENCE_PALETTE: [NamedColor; 28] = [
    named("BLACK", 0x00, 0x00, 0x00),
    named("WHITE", 0xff, 0xff, 0xff),
    named("RED", 0x88, 0x00, 0x00),
    named("CYAN", 0xaa, 0xff, 0xe6),
    named("VIOLET", 0xcc, 0x44, 0xcc),
    named("GREEN", 0x00, 0xcc, 0x55),
    named("BLUE", 0x00, 0x00, 0xaa),
    named("YELLOW", 0xee, 0xee, 0x77),
    named("ORANGE", 0xa1, 0x68, 0x3c),
    named("BROWN", 0x66, 0x44, 0x00),
    named("LIGHT_RED", 0xff, 0x77, 0x77),
    named("DARK_GREY", 0x33, 0x33, 0x33),
    named("GREY", 0x77, 0x77, 0x77),
    named("LIGHT_GREEN", 0xaa, 0xff, 0x66),
    named("LIGHT_BLUE", 0x00, 0x88, 0xff),
    named("LIGHT_GREY", 0xbb, 0xbb, 0xbb),
    named("MAGENTA", 0xf0, 0x0f, 0xf0),
    named("DARK_BLUE", 0x00, 0x00, 0x55),
    named("DARK_RED", 0x55, 0x00, 0x00),
    named("DARK_GREEN", 0x00, 0x55, 0x00),
    named("LAVENDER", 0xa0, 0x80, 0xff),
    named("GOLD", 0xc0, 0xa0, 0x00),
    named("TURQUOISE", 0x40, 0xe0, 0xd0),
    named("TAN", 0xd2, 0xb4, 0x8c),
    named("YELLOW_GREEN", 0x9a, 0xcd, 0x32),
    named("OLIVE_GREEN", 0x55, 0x6b, 0x2f),
    named("PINK", 0xff, 0xc0, 0xcb),
    named("PEACH", 0xff, 0xda, 0xb9),
];

// Case-insensitive lookup of a reference color by name.
pub fn find_by_name(name: &str) -> Option<RefIdx> {
    REFERENCE_PALETTE
        .iter()
        .position(|c| c.name.eq_ignore_ascii_case(name))
}

// Reference entry closest to `c`, skipping indices already in `used`.
fn nearest_unused(reference: &[NamedColor], c: Color, used: &[RefIdx]) -> Option<RefIdx> {
    let mut best: Option<(RefIdx, u32)> = None;
    for (i, r) in reference.iter().enumerate() {
        if used.contains(&i) {
            continue;
        }
        let d = distance(c, r.color);
        if best.map_or(true, |(_, best_dist)| d < best_dist) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Assign a reference entry to each palette color, greedily and in palette
/// order. An entry already given to an earlier slot is not reused, so slots
/// get distinct names as long as the reference palette has enough entries.
/// Once every entry is taken, the remaining slots fall back to the plain
/// nearest entry.
pub fn map_palette(colors: &[Color], reference: &[NamedColor]) -> Vec<RefIdx> {
    let mut used: Vec<RefIdx> = vec![];
    for &c in colors {
        let idx = nearest_unused(reference, c, &used)
            .or_else(|| nearest_unused(reference, c, &[]))
            .unwrap_or(0);
        used.push(idx);
    }
    used
}

pub fn names(indices: &[RefIdx]) -> Vec<&'static str> {
    indices.iter().map(|&i| REFERENCE_PALETTE[i].name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_find_by_name_ignores_case() {
        assert_eq!(find_by_name("black"), Some(0));
        assert_eq!(find_by_name("Light_Blue"), Some(14));
        assert_eq!(find_by_name("mauve"), None);
    }

    #[test]
    fn test_reference_names_are_unique() {
        assert!(REFERENCE_PALETTE.iter().map(|c| c.name).all_unique());
    }

    #[test]
    fn test_exact_colors_map_to_themselves() {
        let colors = [
            REFERENCE_PALETTE[6].color,
            REFERENCE_PALETTE[1].color,
            REFERENCE_PALETTE[2].color,
        ];
        assert_eq!(map_palette(&colors, &REFERENCE_PALETTE), vec![6, 1, 2]);
    }

    #[test]
    fn test_mapping_is_pairwise_distinct() {
        // All four are closest to BLACK; each later slot must take another entry.
        let colors = [
            Color::new(0, 0, 0),
            Color::new(1, 1, 1),
            Color::new(2, 2, 2),
            Color::new(3, 3, 3),
        ];
        let mapped = map_palette(&colors, &REFERENCE_PALETTE);
        assert_eq!(mapped.len(), 4);
        assert_eq!(mapped[0], 0);
        assert!(mapped.iter().all_unique());
    }

    #[test]
    fn test_mapping_is_greedy_in_palette_order() {
        let reference = [
            named("A", 0, 0, 0),
            named("B", 100, 100, 100),
            named("C", 255, 255, 255),
        ];
        // Slot 0 grabs A even though slot 1 is an exact match for it.
        let colors = [Color::new(10, 10, 10), Color::new(0, 0, 0)];
        assert_eq!(map_palette(&colors, &reference), vec![0, 1]);
    }

    #[test]
    fn test_mapping_falls_back_when_reference_exhausted() {
        let reference = [named("A", 0, 0, 0), named("B", 255, 255, 255)];
        let colors = [
            Color::new(0, 0, 0),
            Color::new(255, 255, 255),
            Color::new(10, 10, 10),
        ];
        assert_eq!(map_palette(&colors, &reference), vec![0, 1, 0]);
    }
}
