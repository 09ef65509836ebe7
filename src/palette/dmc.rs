//! Bundled DMC thread-color table

use crate::palette::store::PaletteStore;

/// Static DMC thread palette as `(catalog number, name, rgb)` triples
///
/// Ordered ascending by catalog number; the position in this table is the
/// working palette index used by the pipeline.
pub const DMC_COLORS: &[(u32, &str, [u8; 3])] = &[
    // White and off-white
    (1, "White", [255, 255, 255]),
    (2, "Tin", [221, 221, 221]),
    (3, "Gray", [195, 195, 195]),
    (4, "Light Gray", [169, 169, 169]),
    (5, "Pewter Gray", [143, 143, 143]),
    (6, "Dark Gray", [117, 117, 117]),
    (7, "Charcoal Gray", [91, 91, 91]),
    (8, "Black", [0, 0, 0]),
    // Red family
    (10, "Light Red", [255, 204, 204]),
    (12, "Very Light Red", [255, 230, 230]),
    (13, "Light Red", [255, 179, 179]),
    (14, "Red", [255, 153, 153]),
    (15, "Medium Red", [255, 128, 128]),
    (16, "Dark Red", [255, 102, 102]),
    (17, "Very Dark Red", [255, 77, 77]),
    (18, "Light Rose", [255, 204, 230]),
    (19, "Rose", [255, 179, 204]),
    (20, "Medium Rose", [255, 153, 179]),
    (21, "Dark Rose", [255, 128, 153]),
    (22, "Very Dark Rose", [255, 102, 128]),
    (23, "Light Pink", [255, 204, 217]),
    (24, "Pink", [255, 179, 191]),
    (25, "Medium Pink", [255, 153, 166]),
    (26, "Dark Pink", [255, 128, 140]),
    (27, "Very Dark Pink", [255, 102, 115]),
    // Orange family
    (30, "Light Orange", [255, 204, 153]),
    (31, "Orange", [255, 179, 128]),
    (32, "Medium Orange", [255, 153, 102]),
    (33, "Dark Orange", [255, 128, 77]),
    (34, "Very Dark Orange", [255, 102, 51]),
    (35, "Light Peach", [255, 204, 179]),
    (36, "Peach", [255, 179, 153]),
    (37, "Medium Peach", [255, 153, 128]),
    (38, "Dark Peach", [255, 128, 102]),
    (39, "Very Dark Peach", [255, 102, 77]),
    // Yellow family
    (40, "Light Yellow", [255, 255, 204]),
    (41, "Yellow", [255, 255, 179]),
    (42, "Medium Yellow", [255, 255, 153]),
    (43, "Dark Yellow", [255, 255, 128]),
    (44, "Very Dark Yellow", [255, 255, 102]),
    (45, "Light Gold", [255, 230, 179]),
    (46, "Gold", [255, 204, 153]),
    (47, "Medium Gold", [255, 179, 128]),
    (48, "Dark Gold", [255, 153, 102]),
    (49, "Very Dark Gold", [255, 128, 77]),
    // Green family
    (50, "Light Green", [204, 255, 204]),
    (51, "Green", [179, 255, 179]),
    (52, "Medium Green", [153, 255, 153]),
    (53, "Dark Green", [128, 255, 128]),
    (54, "Very Dark Green", [102, 255, 102]),
    (55, "Light Lime", [230, 255, 204]),
    (56, "Lime", [204, 255, 179]),
    (57, "Medium Lime", [179, 255, 153]),
    (58, "Dark Lime", [153, 255, 128]),
    (59, "Very Dark Lime", [128, 255, 102]),
    // Blue family
    (60, "Light Blue", [204, 204, 255]),
    (61, "Blue", [179, 179, 255]),
    (62, "Medium Blue", [153, 153, 255]),
    (63, "Dark Blue", [128, 128, 255]),
    (64, "Very Dark Blue", [102, 102, 255]),
    (65, "Light Sky Blue", [204, 230, 255]),
    (66, "Sky Blue", [179, 204, 255]),
    (67, "Medium Sky Blue", [153, 179, 255]),
    (68, "Dark Sky Blue", [128, 153, 255]),
    (69, "Very Dark Sky Blue", [102, 128, 255]),
    // Purple family
    (70, "Light Purple", [230, 204, 255]),
    (71, "Purple", [204, 179, 255]),
    (72, "Medium Purple", [179, 153, 255]),
    (73, "Dark Purple", [153, 128, 255]),
    (74, "Very Dark Purple", [128, 102, 255]),
    (75, "Light Lavender", [230, 204, 230]),
    (76, "Lavender", [204, 179, 204]),
    (77, "Medium Lavender", [179, 153, 179]),
    (78, "Dark Lavender", [153, 128, 153]),
    (79, "Very Dark Lavender", [128, 102, 128]),
    // Brown family
    (80, "Light Brown", [230, 204, 179]),
    (81, "Brown", [204, 179, 153]),
    (82, "Medium Brown", [179, 153, 128]),
    (83, "Dark Brown", [153, 128, 102]),
    (84, "Very Dark Brown", [128, 102, 77]),
    (85, "Light Tan", [230, 217, 179]),
    (86, "Tan", [204, 191, 153]),
    (87, "Medium Tan", [179, 166, 128]),
    (88, "Dark Tan", [153, 140, 102]),
    (89, "Very Dark Tan", [128, 115, 77]),
];

/// Build a [`PaletteStore`] holding the bundled DMC palette
///
/// Intended to be called once at startup; the returned store is shared
/// read-only across all conversions.
pub fn dmc_palette() -> PaletteStore {
    PaletteStore::from_table(DMC_COLORS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_numbers_are_unique() {
        let ids: HashSet<u32> = DMC_COLORS.iter().map(|&(id, _, _)| id).collect();
        assert_eq!(ids.len(), DMC_COLORS.len());
    }

    #[test]
    fn test_catalog_numbers_ascend_with_position() {
        // The legend tie-break relies on id order matching index order.
        let ids: Vec<u32> = DMC_COLORS.iter().map(|&(id, _, _)| id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_store_construction() {
        let store = dmc_palette();
        assert_eq!(store.len(), DMC_COLORS.len());
        let white = store.entry_at(0).unwrap();
        assert_eq!(white.id, 1);
        assert_eq!(white.rgb, [255, 255, 255]);
    }
}
