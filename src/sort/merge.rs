//! Top-down merge sort.

use crate::types::RuntimeStats;

/// Sort `list` into a new vector, leaving the input untouched.
///
/// Counts one operation per recursive call (leaves included), one comparison
/// per merge step and one insertion per element placed by [`merge`]. An empty
/// input returns immediately without touching `stats`.
pub fn merge_sort<T: Ord + Clone>(list: &[T], stats: &mut RuntimeStats) -> Vec<T> {
    if list.is_empty() {
        return Vec::new();
    }
    sort_recursive(list, stats)
}

fn sort_recursive<T: Ord + Clone>(list: &[T], stats: &mut RuntimeStats) -> Vec<T> {
    stats.operations += 1;
    if list.len() <= 1 {
        return list.to_vec();
    }

    let (left, right) = list.split_at(list.len() / 2);
    let left = sort_recursive(left, stats);
    let right = sort_recursive(right, stats);
    merge(left, right, stats)
}

/// Merge two sorted vectors. Ties take the left element, keeping the merge stable.
pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>, stats: &mut RuntimeStats) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(lhs), Some(rhs)) => {
                stats.comparisons += 1;
                rhs >= lhs
            }
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        if let Some(item) = next {
            stats.insertions += 1;
            result.push(item);
        }
    }

    // At most one side still has elements.
    for item in left.chain(right) {
        stats.insertions += 1;
        result.push(item);
    }

    result
}
