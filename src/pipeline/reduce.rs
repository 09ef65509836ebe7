//! Frequency-based reduction of distinct palette indices

use ndarray::Array2;
use std::collections::{BTreeMap, HashMap};

/// Collapse the distinct indices in the map down to at most `max_colors`
///
/// Indices are ranked by descending occurrence count, ties broken by
/// ascending index value, and the top `max_colors` survive. Every other
/// cell is remapped to the surviving index with the smallest absolute
/// index difference, ties again to the lower index. The remap works on
/// index labels rather than RGB distance; that approximation is inherited
/// from the original chart generator and kept so output stays stable.
///
/// `max_colors == 0` disables reduction entirely. When the map already
/// holds no more than `max_colors` distinct indices the map is returned
/// untouched, with no remapping pass.
pub fn reduce_to_top_colors(index_map: &mut Array2<usize>, max_colors: usize) {
    if max_colors == 0 {
        return;
    }

    // BTreeMap keeps distinct indices in ascending order, which the
    // ranking tie-break relies on.
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for &index in index_map.iter() {
        *counts.entry(index).or_insert(0) += 1;
    }

    if counts.len() <= max_colors {
        return;
    }

    let mut ranked: Vec<(usize, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut retained: Vec<usize> = ranked
        .iter()
        .take(max_colors)
        .map(|&(index, _)| index)
        .collect();
    retained.sort_unstable();

    let mut remap: HashMap<usize, usize> = HashMap::new();
    for &(index, _) in &ranked {
        remap.insert(index, nearest_retained(&retained, index));
    }

    index_map.mapv_inplace(|index| remap.get(&index).copied().unwrap_or(index));
}

// Ascending scan with strict improvement: equal distances keep the lower
// retained index.
fn nearest_retained(retained: &[usize], index: usize) -> usize {
    let mut best = index;
    let mut best_diff = usize::MAX;
    for &candidate in retained {
        let diff = candidate.abs_diff(index);
        if diff < best_diff {
            best_diff = diff;
            best = candidate;
        }
    }
    best
}

/// Distinct indices present in the map, ascending
pub fn distinct_indices(index_map: &Array2<usize>) -> Vec<usize> {
    let set: std::collections::BTreeSet<usize> = index_map.iter().copied().collect();
    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_max_colors_is_a_noop() {
        let mut map = Array2::from_shape_vec((2, 3), vec![5, 9, 5, 2, 9, 9]).unwrap();
        let before = map.clone();
        reduce_to_top_colors(&mut map, 0);
        assert_eq!(map, before);
    }

    #[test]
    fn test_under_limit_is_a_noop() {
        let mut map = Array2::from_shape_vec((2, 2), vec![1, 2, 1, 2]).unwrap();
        let before = map.clone();
        reduce_to_top_colors(&mut map, 5);
        assert_eq!(map, before);
    }

    #[test]
    fn test_keeps_most_frequent_indices() {
        // Index 3 appears 4 times, index 7 twice, index 9 once.
        let mut map = Array2::from_shape_vec((1, 7), vec![3, 3, 3, 3, 7, 7, 9]).unwrap();
        reduce_to_top_colors(&mut map, 2);
        let distinct = distinct_indices(&map);
        assert_eq!(distinct, vec![3, 7]);
        // The lone 9 lands on 7, its nearest survivor by index value.
        assert_eq!(map.iter().filter(|&&i| i == 7).count(), 3);
    }

    #[test]
    fn test_frequency_tie_prefers_lower_index() {
        // Indices 4 and 8 both appear twice; only one can survive.
        let mut map = Array2::from_shape_vec((1, 5), vec![4, 4, 8, 8, 1]).unwrap();
        reduce_to_top_colors(&mut map, 2);
        let distinct = distinct_indices(&map);
        assert!(distinct.contains(&4));
        assert!(!distinct.contains(&8));
    }

    #[test]
    fn test_remap_distance_tie_prefers_lower_retained() {
        // Survivors 2 and 6; dropped index 4 is equidistant from both.
        let mut map = Array2::from_shape_vec((1, 7), vec![2, 2, 2, 6, 6, 6, 4]).unwrap();
        reduce_to_top_colors(&mut map, 2);
        assert_eq!(map.iter().filter(|&&i| i == 2).count(), 4);
        assert_eq!(map.iter().filter(|&&i| i == 6).count(), 3);
    }

    #[test]
    fn test_reduction_is_idempotent() {
        let mut map =
            Array2::from_shape_vec((2, 5), vec![1, 1, 2, 2, 3, 3, 4, 4, 5, 5]).unwrap();
        reduce_to_top_colors(&mut map, 3);
        let once = map.clone();
        reduce_to_top_colors(&mut map, 3);
        assert_eq!(map, once);
    }

    #[test]
    fn test_never_increases_distinct_count() {
        let mut map = Array2::from_shape_vec((1, 6), vec![10, 20, 30, 40, 50, 60]).unwrap();
        reduce_to_top_colors(&mut map, 4);
        assert!(distinct_indices(&map).len() <= 4);
    }
}
