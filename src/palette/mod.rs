//! Thread-color palette storage and distance computation
//!
//! The palette is a fixed ordered list of `(id, name, rgb)` entries built
//! once at startup. The pipeline works in terms of palette positions
//! (working indices), not catalog numbers.

/// Bundled DMC thread-color table
pub mod dmc;
/// Palette storage and squared-distance lookup
pub mod store;

pub use dmc::dmc_palette;
pub use store::{PaletteEntry, PaletteStore, distance_squared};
