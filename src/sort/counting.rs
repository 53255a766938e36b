//! Counting sort for non-negative integers.

use crate::types::{AlgoError, AlgoResult, RuntimeStats, MAX_COUNTING_RANGE};

/// Sort non-negative integers in place by replaying a value histogram.
///
/// The histogram has `max + 1` buckets. Counts one insertion per element
/// tallied and one per element written back. Input is validated before any
/// counting: on error the slice and `stats` are unchanged. Empty input is a
/// no-op.
pub fn counting_sort(list: &mut [i64], stats: &mut RuntimeStats) -> AlgoResult<()> {
    if let Some((index, &value)) = list.iter().enumerate().find(|&(_, &v)| v < 0) {
        return Err(AlgoError::NegativeValue { index, value });
    }
    let Some(max) = list.iter().copied().max() else {
        return Ok(());
    };
    let buckets = usize::try_from(max)
        .ok()
        .and_then(|m| m.checked_add(1))
        .filter(|&b| b <= MAX_COUNTING_RANGE)
        .ok_or(AlgoError::RangeTooLarge {
            max,
            limit: MAX_COUNTING_RANGE,
        })?;

    let mut counts = vec![0usize; buckets];
    for &value in list.iter() {
        stats.insertions += 1;
        // non-negative and below `buckets`, checked above
        counts[value as usize] += 1;
    }

    let mut cursor = 0;
    for (value, &occurrences) in counts.iter().enumerate() {
        for _ in 0..occurrences {
            stats.insertions += 1;
            list[cursor] = value as i64;
            cursor += 1;
        }
    }

    log::debug!("counting_sort: {} elements over {} buckets", list.len(), buckets);
    Ok(())
}
