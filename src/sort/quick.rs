//! Quicksort with Lomuto partitioning.

use crate::types::RuntimeStats;

/// Sort `list` in place, recursing on both sides of each pivot.
pub fn quick_sort<T: Ord>(list: &mut [T], stats: &mut RuntimeStats) {
    if list.len() <= 1 {
        return;
    }

    let pivot_index = partition(list, stats);
    let (before, after) = list.split_at_mut(pivot_index);
    quick_sort(before, stats);
    if let Some((_pivot, after)) = after.split_first_mut() {
        quick_sort(after, stats);
    }
}

/// Partition around the last element and return the pivot's final index.
///
/// Every element strictly smaller than the pivot ends up before it. Counts one
/// comparison per scanned element and one swap per exchange, including the
/// final move of the pivot. An empty slice is left alone and yields 0.
pub fn partition<T: Ord>(list: &mut [T], stats: &mut RuntimeStats) -> usize {
    let Some(end) = list.len().checked_sub(1) else {
        return 0;
    };

    let mut smaller = 0;
    for index in 0..end {
        stats.comparisons += 1;
        if list[index] < list[end] {
            list.swap(smaller, index);
            smaller += 1;
            stats.swaps += 1;
        }
    }

    list.swap(smaller, end);
    stats.swaps += 1;

    smaller
}
