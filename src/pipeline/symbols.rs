//! Printable symbol assignment for chart colors

use crate::io::error::{PatternError, Result};
use std::collections::BTreeMap;

/// Fixed ordered alphabet of printable chart symbols
pub const SYMBOL_ALPHABET: &str =
    "1234567890ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@#$%^&*()[]{}<>?/+=~:;,.";

/// Assign a unique symbol to each distinct palette index
///
/// `used_indices` must be the ascending list of distinct indices present
/// after reduction; the `i`-th index receives the `i`-th alphabet symbol,
/// so the assignment is deterministic for a given set of indices.
///
/// # Errors
///
/// Returns `TooManyColors` if more indices are used than the alphabet can
/// distinguish.
pub fn assign_symbols(used_indices: &[usize]) -> Result<BTreeMap<usize, char>> {
    let available = SYMBOL_ALPHABET.chars().count();
    if used_indices.len() > available {
        return Err(PatternError::TooManyColors {
            needed: used_indices.len(),
            available,
        });
    }

    Ok(used_indices
        .iter()
        .copied()
        .zip(SYMBOL_ALPHABET.chars())
        .collect())
}
