//! O(n^2) exchange sorts.

use std::fmt::Debug;

use crate::types::RuntimeStats;

/// Exchange sort that compares every pair `(x, y)` with `x < y` and swaps when
/// the later element is smaller.
///
/// Every pair checked counts one comparison and one operation; every exchange
/// counts one swap.
pub fn bubble_sort<T: Ord + Debug>(list: &mut [T], stats: &mut RuntimeStats) {
    let size = list.len();

    for x in 0..size {
        for y in (x + 1)..size {
            stats.operations += 1;
            stats.comparisons += 1;
            if list[y] < list[x] {
                stats.swaps += 1;
                list.swap(y, x);
            }
            log::trace!("bubble x={} y={} -> {:?}", x, y, list);
        }
    }
}

/// Grows a sorted prefix by comparing the next element `x` against every
/// element before it and swapping whenever `x` is smaller.
///
/// Despite the name this never shifts elements into place. Each swap moves the
/// displaced prefix element into slot `x`, which is then compared against the
/// rest of the prefix, so the prefix stays sorted after each outer step.
/// Counts match [`bubble_sort`]: one comparison and one operation per pair,
/// one swap per exchange.
pub fn insertion_sort<T: Ord + Debug>(list: &mut [T], stats: &mut RuntimeStats) {
    let size = list.len();

    for sorted_up_to in 0..size {
        let x = sorted_up_to;
        for y in 0..sorted_up_to {
            stats.operations += 1;
            stats.comparisons += 1;
            if list[x] < list[y] {
                list.swap(x, y);
                stats.swaps += 1;
            }
            log::trace!(
                "insertion x={} y={} sorted_up_to={} -> {:?}",
                x,
                y,
                sorted_up_to,
                list
            );
        }
    }
}
