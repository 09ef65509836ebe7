//! Read-only thread-color palette with squared-distance lookup

/// One fixed thread-color definition
///
/// Entries are identified externally by `id` (the thread catalog number)
/// but addressed internally by their position in the [`PaletteStore`],
/// which is the working index used throughout the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Thread catalog number, unique across the palette
    pub id: u32,
    /// Display name of the thread color
    pub name: String,
    /// Color value as exact sRGB bytes
    pub rgb: [u8; 3],
}

/// Static ordered palette of thread colors
///
/// Read-only after construction, so a single store can be shared across
/// concurrent conversions without synchronization.
#[derive(Debug, Clone)]
pub struct PaletteStore {
    entries: Vec<PaletteEntry>,
}

impl PaletteStore {
    /// Create a store from an ordered list of entries
    pub const fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// Create a store from a static `(id, name, rgb)` table
    pub fn from_table(table: &[(u32, &str, [u8; 3])]) -> Self {
        let entries = table
            .iter()
            .map(|&(id, name, rgb)| PaletteEntry {
                id,
                name: name.to_string(),
                rgb,
            })
            .collect();
        Self { entries }
    }

    /// Number of entries in the palette
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the palette contains no entries
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its working index
    pub fn entry_at(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// Iterate over entries in palette order
    pub fn entries(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }
}

/// Squared Euclidean distance between two RGB values
///
/// Deliberately skips the square root: only the ordering of distances
/// matters for nearest-color search, and integer math keeps the hot path
/// free of floating point.
pub const fn distance_squared(a: [u8; 3], b: [u8; 3]) -> u32 {
    let dr = a[0].abs_diff(b[0]) as u32;
    let dg = a[1].abs_diff(b[1]) as u32;
    let db = a[2].abs_diff(b[2]) as u32;
    dr * dr + dg * dg + db * db
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> PaletteStore {
        PaletteStore::from_table(&[
            (1, "White", [255, 255, 255]),
            (8, "Black", [0, 0, 0]),
            (15, "Medium Red", [255, 128, 128]),
        ])
    }

    #[test]
    fn test_entry_lookup_by_position() {
        let store = sample_store();
        assert_eq!(store.len(), 3);
        let entry = store.entry_at(1).unwrap();
        assert_eq!(entry.id, 8);
        assert_eq!(entry.name, "Black");
        assert!(store.entry_at(3).is_none());
    }

    #[test]
    fn test_distance_squared_is_symmetric() {
        let a = [10, 20, 30];
        let b = [30, 20, 10];
        assert_eq!(distance_squared(a, b), distance_squared(b, a));
        assert_eq!(distance_squared(a, b), 400 + 0 + 400);
    }

    #[test]
    fn test_distance_squared_extremes() {
        assert_eq!(distance_squared([0, 0, 0], [0, 0, 0]), 0);
        assert_eq!(distance_squared([0, 0, 0], [255, 255, 255]), 3 * 255 * 255);
    }
}
