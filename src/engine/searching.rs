//! Linear, binary and jump search
//!
//! Binary and jump search need ascending input. When the caller's array is
//! not sorted they sort a copy, announce it with a `sorted-copy` frame, and
//! from then on every index refers to the sorted copy.
//!
//! Every sequence ends on exactly one `found` or `not-found` frame.

use crate::snapshot::{SearchOp, SearchStep, StepLog};
use tracing::warn;

fn is_ascending(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Return a sorted copy, recording the adjustment if one was needed.
fn ensure_sorted(values: &[i64], algorithm: &str, log: &mut StepLog<SearchStep>) -> Vec<i64> {
    let mut sorted = values.to_vec();
    if !is_ascending(values) {
        warn!(algorithm, len = values.len(), "input not sorted, searching a sorted copy");
        sorted.sort_unstable();
        log.push(SearchStep::new(
            &sorted,
            SearchOp::SortedCopy,
            format!(
                "Array must be sorted for {}. Sorting array first...",
                algorithm
            ),
        ));
    }
    sorted
}

fn found(log: &mut StepLog<SearchStep>, array: &[i64], target: i64, index: usize) {
    log.push(
        SearchStep::new(
            array,
            SearchOp::Found,
            format!("Found target {} at index {}!", target, index),
        )
        .found(index),
    );
}

fn not_found(log: &mut StepLog<SearchStep>, array: &[i64], target: i64) {
    log.push(SearchStep::new(
        array,
        SearchOp::NotFound,
        format!("Target {} not found in the array", target),
    ));
}

/// Scan left to right, stopping at the first match.
pub fn linear_search(values: &[i64], target: i64) -> Vec<SearchStep> {
    let mut log = StepLog::new("linear_search");

    log.push(SearchStep::new(
        values,
        SearchOp::Start,
        format!("Starting Linear Search for target value: {}", target),
    ));

    for (i, &value) in values.iter().enumerate() {
        log.push(
            SearchStep::new(
                values,
                SearchOp::Checking,
                format!("Checking element at index {}: {}", i, value),
            )
            .checking(i),
        );
        if value == target {
            found(&mut log, values, target, i);
            return log.finish();
        }
    }

    not_found(&mut log, values, target);
    log.finish()
}

/// Closed-interval binary search over a sorted copy.
pub fn binary_search(values: &[i64], target: i64) -> Vec<SearchStep> {
    let mut log = StepLog::new("binary_search");
    let array = ensure_sorted(values, "Binary Search", &mut log);
    let n = array.len();

    log.push(
        SearchStep::new(
            &array,
            SearchOp::Start,
            format!("Starting Binary Search for target value: {}", target),
        )
        .range(0, n),
    );

    // `right` is exclusive here; the narration reports the closed interval
    let (mut left, mut right) = (0usize, n);
    while left < right {
        let mid = left + (right - 1 - left) / 2;
        log.push(
            SearchStep::new(
                &array,
                SearchOp::Checking,
                format!(
                    "Searching in range [{}...{}]. Checking middle element at index {}: {}",
                    left,
                    right - 1,
                    mid,
                    array[mid]
                ),
            )
            .checking(mid)
            .range(left, right),
        );

        if array[mid] == target {
            found(&mut log, &array, target, mid);
            return log.finish();
        }

        if array[mid] < target {
            log.push(
                SearchStep::new(
                    &array,
                    SearchOp::Narrowing,
                    format!("{} < {}. Searching right half...", array[mid], target),
                )
                .range(mid + 1, right),
            );
            left = mid + 1;
        } else {
            log.push(
                SearchStep::new(
                    &array,
                    SearchOp::Narrowing,
                    format!("{} > {}. Searching left half...", array[mid], target),
                )
                .range(left, mid),
            );
            right = mid;
        }
    }

    not_found(&mut log, &array, target);
    log.finish()
}

/// Jump ahead in blocks of `⌊√n⌋`, then scan the block that may hold the target.
pub fn jump_search(values: &[i64], target: i64) -> Vec<SearchStep> {
    let mut log = StepLog::new("jump_search");
    let array = ensure_sorted(values, "Jump Search", &mut log);
    let n = array.len();

    log.push(SearchStep::new(
        &array,
        SearchOp::Start,
        format!("Starting Jump Search for target value: {}", target),
    ));

    let jump = (n as f64).sqrt().floor() as usize;
    log.push(SearchStep::new(
        &array,
        SearchOp::JumpSize,
        format!("Jump size: {} (√{})", jump, n),
    ));

    // A zero jump only happens for an empty array, where the block is empty too
    let mut prev = 0;
    let mut step = jump;
    while jump > 0 && step < n && array[step.min(n) - 1] < target {
        let probe = step.min(n) - 1;
        log.push(
            SearchStep::new(
                &array,
                SearchOp::Jumping,
                format!(
                    "Jumping to index {}: {} < {}. Continue jumping...",
                    probe, array[probe], target
                ),
            )
            .checking(probe)
            .range(prev, step),
        );
        prev = step;
        step += jump;
    }

    let block_end = step.min(n);
    log.push(
        SearchStep::new(
            &array,
            SearchOp::BlockFound,
            format!(
                "Block found. Performing linear search from index {} to {}",
                prev,
                block_end.saturating_sub(1)
            ),
        )
        .range(prev, block_end),
    );

    for i in prev..block_end {
        log.push(
            SearchStep::new(
                &array,
                SearchOp::Checking,
                format!("Checking element at index {}: {}", i, array[i]),
            )
            .checking(i)
            .range(i, block_end),
        );
        if array[i] == target {
            found(&mut log, &array, target, i);
            return log.finish();
        }
    }

    not_found(&mut log, &array, target);
    log.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_op(steps: &[SearchStep]) -> SearchOp {
        steps.last().map(|s| s.operation).unwrap_or(SearchOp::Start)
    }

    #[test]
    fn linear_stops_at_first_match() {
        let steps = linear_search(&[4, 7, 7, 1], 7);
        assert_eq!(last_op(&steps), SearchOp::Found);
        assert_eq!(steps.last().unwrap().found, Some(1));
        let checks = steps.iter().filter(|s| s.operation == SearchOp::Checking).count();
        assert_eq!(checks, 2);
    }

    #[test]
    fn linear_miss_checks_everything() {
        let steps = linear_search(&[4, 7, 1], 9);
        assert_eq!(last_op(&steps), SearchOp::NotFound);
        assert_eq!(steps.len(), 1 + 3 + 1);
    }

    #[test]
    fn binary_sorts_unsorted_input_first() {
        let steps = binary_search(&[5, 3, 8, 1], 8);
        assert_eq!(steps[0].operation, SearchOp::SortedCopy);
        assert_eq!(steps[0].array, vec![1, 3, 5, 8]);
        let hit = steps.last().unwrap();
        assert_eq!(hit.operation, SearchOp::Found);
        assert_eq!(hit.found, Some(3));
    }

    #[test]
    fn binary_skips_sort_for_sorted_input() {
        let steps = binary_search(&[1, 2, 3], 2);
        assert!(steps.iter().all(|s| s.operation != SearchOp::SortedCopy));
        assert_eq!(steps.last().unwrap().found, Some(1));
    }

    #[test]
    fn binary_search_on_empty_input() {
        let steps = binary_search(&[], 3);
        assert_eq!(last_op(&steps), SearchOp::NotFound);
    }

    #[test]
    fn binary_narrows_toward_target() {
        let steps = binary_search(&[1, 3, 5, 7, 9, 11, 13], 13);
        let narrows: Vec<&SearchStep> = steps
            .iter()
            .filter(|s| s.operation == SearchOp::Narrowing)
            .collect();
        assert_eq!(narrows[0].search_range, vec![4, 5, 6]);
        assert_eq!(steps.last().unwrap().found, Some(6));
    }

    #[test]
    fn jump_search_finds_in_last_block() {
        let values: Vec<i64> = (0..10).map(|v| v * 2).collect();
        let steps = jump_search(&values, 18);
        assert_eq!(steps.last().unwrap().found, Some(9));
        let jumps = steps.iter().filter(|s| s.operation == SearchOp::Jumping).count();
        assert_eq!(jumps, 3);
    }

    #[test]
    fn jump_search_beyond_last_element_stays_in_bounds() {
        let steps = jump_search(&[1, 2, 3, 4, 5], 100);
        assert_eq!(last_op(&steps), SearchOp::NotFound);
        assert!(steps
            .iter()
            .filter_map(|s| s.checking)
            .all(|i| i < 5));
    }

    #[test]
    fn jump_search_empty_and_single() {
        assert_eq!(last_op(&jump_search(&[], 1)), SearchOp::NotFound);
        assert_eq!(jump_search(&[1], 1).last().unwrap().found, Some(0));
    }
}
