//! Bubble, quick and merge sort
//!
//! The generators are generic over the element type so that stability can be
//! observed on keyed records; the catalogue always uses `i64`. Every
//! comparison gets its own frame, emitted before the swap or placement it
//! decides.

use crate::snapshot::{SortOp, SortStep, StepLog};
use std::fmt::Display;

fn complete<T: Clone>(log: &mut StepLog<SortStep<T>>, array: &[T], message: &str) {
    log.push(SortStep::new(array, SortOp::Complete, message).sorted(0..array.len()));
}

/// Adjacent-swap sort. After `i` passes the last `i` slots are frozen.
pub fn bubble_sort<T: Ord + Clone + Display>(values: &[T]) -> Vec<SortStep<T>> {
    let mut log = StepLog::new("bubble_sort");
    let mut array = values.to_vec();
    let n = array.len();

    if n == 0 {
        complete(&mut log, &array, "Nothing to sort: the array is empty.");
        return log.finish();
    }

    log.push(SortStep::new(&array, SortOp::Start, "Starting Bubble Sort algorithm"));

    for i in 0..n - 1 {
        let frozen = n - i..n;
        for j in 0..n - i - 1 {
            log.push(
                SortStep::new(
                    &array,
                    SortOp::Comparing,
                    format!(
                        "Comparing elements at positions {} and {}: {} and {}",
                        j,
                        j + 1,
                        array[j],
                        array[j + 1]
                    ),
                )
                .comparing([j, j + 1])
                .sorted(frozen.clone()),
            );

            if array[j] > array[j + 1] {
                log.push(
                    SortStep::new(
                        &array,
                        SortOp::Swapping,
                        format!(
                            "Swapping {} and {} because {} > {}",
                            array[j],
                            array[j + 1],
                            array[j],
                            array[j + 1]
                        ),
                    )
                    .swapping([j, j + 1])
                    .sorted(frozen.clone()),
                );

                array.swap(j, j + 1);

                log.push(
                    SortStep::new(
                        &array,
                        SortOp::Swapped,
                        format!(
                            "Swapped! New positions: {} at {}, {} at {}",
                            array[j],
                            j,
                            array[j + 1],
                            j + 1
                        ),
                    )
                    .sorted(frozen.clone()),
                );
            }
        }
    }

    complete(&mut log, &array, "Sorting complete! All elements are in order.");
    log.finish()
}

/// Lomuto-partition quick sort with the last element of each range as pivot.
pub fn quick_sort<T: Ord + Clone + Display>(values: &[T]) -> Vec<SortStep<T>> {
    let mut log = StepLog::new("quick_sort");
    let mut array = values.to_vec();

    if array.is_empty() {
        complete(&mut log, &array, "Nothing to sort: the array is empty.");
        return log.finish();
    }

    log.push(SortStep::new(&array, SortOp::Start, "Starting Quick Sort algorithm"));
    let high = array.len() - 1;
    quick_sort_range(&mut array, 0, high, &mut log);
    complete(&mut log, &array, "Quick Sort complete! All elements are sorted.");
    log.finish()
}

fn quick_sort_range<T: Ord + Clone + Display>(
    array: &mut [T],
    low: usize,
    high: usize,
    log: &mut StepLog<SortStep<T>>,
) {
    if low >= high {
        return;
    }
    let pi = partition(array, low, high, log);
    if pi > low {
        quick_sort_range(array, low, pi - 1, log);
    }
    quick_sort_range(array, pi + 1, high, log);
}

fn partition<T: Ord + Clone + Display>(
    array: &mut [T],
    low: usize,
    high: usize,
    log: &mut StepLog<SortStep<T>>,
) -> usize {
    let pivot = array[high].clone();
    log.push(
        SortStep::new(
            array,
            SortOp::Pivot,
            format!("Choosing pivot element: {} at position {}", pivot, high),
        )
        .comparing([high]),
    );

    // `store` is the Lomuto boundary: slots before it hold values < pivot
    let mut store = low;
    for j in low..high {
        log.push(
            SortStep::new(
                array,
                SortOp::Comparing,
                format!("Comparing {} with pivot {}", array[j], pivot),
            )
            .comparing([j, high]),
        );

        if array[j] < pivot {
            if store != j {
                log.push(
                    SortStep::new(
                        array,
                        SortOp::Swapping,
                        format!("Swapping {} and {}", array[store], array[j]),
                    )
                    .swapping([store, j]),
                );
                array.swap(store, j);
                log.push(SortStep::new(
                    array,
                    SortOp::Swapped,
                    "Elements swapped successfully",
                ));
            }
            store += 1;
        }
    }

    log.push(
        SortStep::new(
            array,
            SortOp::Swapping,
            format!("Placing pivot {} in correct position", pivot),
        )
        .swapping([store, high]),
    );
    array.swap(store, high);
    log.push(
        SortStep::new(
            array,
            SortOp::PivotPlaced,
            format!("Pivot {} is now in its final sorted position", pivot),
        )
        .sorted([store]),
    );

    store
}

/// Top-down merge sort. Ties take the left element, so the sort is stable.
pub fn merge_sort<T: Ord + Clone + Display>(values: &[T]) -> Vec<SortStep<T>> {
    let mut log = StepLog::new("merge_sort");
    let mut array = values.to_vec();

    if array.is_empty() {
        complete(&mut log, &array, "Nothing to sort: the array is empty.");
        return log.finish();
    }

    log.push(SortStep::new(&array, SortOp::Start, "Starting Merge Sort algorithm"));
    let right = array.len() - 1;
    merge_sort_range(&mut array, 0, right, &mut log);
    complete(&mut log, &array, "Merge Sort complete! All elements are sorted.");
    log.finish()
}

fn merge_sort_range<T: Ord + Clone + Display>(
    array: &mut [T],
    left: usize,
    right: usize,
    log: &mut StepLog<SortStep<T>>,
) {
    if left >= right {
        return;
    }
    let mid = (left + right) / 2;
    log.push(
        SortStep::new(
            array,
            SortOp::Dividing,
            format!("Dividing array from index {} to {}", left, right),
        )
        .comparing(left..=right),
    );
    merge_sort_range(array, left, mid, log);
    merge_sort_range(array, mid + 1, right, log);
    merge(array, left, mid, right, log);
}

fn merge<T: Ord + Clone + Display>(
    array: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    log: &mut StepLog<SortStep<T>>,
) {
    let left_half = array[left..=mid].to_vec();
    let right_half = array[mid + 1..=right].to_vec();

    log.push(
        SortStep::new(
            array,
            SortOp::Merging,
            format!("Merging subarrays from index {} to {}", left, right),
        )
        .comparing(left..=right),
    );

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_half.len() && j < right_half.len() {
        log.push(
            SortStep::new(
                array,
                SortOp::Comparing,
                format!("Comparing {} and {}", left_half[i], right_half[j]),
            )
            .comparing([left + i, mid + 1 + j]),
        );

        if left_half[i] <= right_half[j] {
            array[k] = left_half[i].clone();
            i += 1;
        } else {
            array[k] = right_half[j].clone();
            j += 1;
        }
        log.push(
            SortStep::new(
                array,
                SortOp::Placed,
                format!("Placed {} at position {}", array[k], k),
            )
            .swapping([k]),
        );
        k += 1;
    }

    let remainder = left_half[i..].iter().chain(right_half[j..].iter());
    for value in remainder {
        array[k] = value.clone();
        log.push(
            SortStep::new(
                array,
                SortOp::Placed,
                format!("Copying remaining element {} to position {}", array[k], k),
            )
            .swapping([k]),
        );
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_array(steps: &[SortStep]) -> Vec<i64> {
        steps.last().map(|s| s.array.clone()).unwrap_or_default()
    }

    #[test]
    fn bubble_sorts_small_input() {
        let steps = bubble_sort(&[3, 1, 2]);
        assert_eq!(final_array(&steps), vec![1, 2, 3]);
        assert_eq!(steps.last().unwrap().sorted, vec![0, 1, 2]);
        assert_eq!(steps[0].operation, SortOp::Start);
    }

    #[test]
    fn bubble_comparison_precedes_swap() {
        let steps = bubble_sort(&[2, 1]);
        let ops: Vec<SortOp> = steps.iter().map(|s| s.operation).collect();
        assert_eq!(
            ops,
            vec![
                SortOp::Start,
                SortOp::Comparing,
                SortOp::Swapping,
                SortOp::Swapped,
                SortOp::Complete
            ]
        );
    }

    #[test]
    fn bubble_marks_frozen_tail() {
        let steps = bubble_sort(&[4, 3, 2, 1]);
        let second_pass = steps
            .iter()
            .filter(|s| s.operation == SortOp::Comparing)
            .nth(3)
            .unwrap();
        assert_eq!(second_pass.sorted, vec![3]);
    }

    #[test]
    fn empty_input_is_a_single_complete_step() {
        for steps in [bubble_sort::<i64>(&[]), quick_sort::<i64>(&[]), merge_sort::<i64>(&[])] {
            assert_eq!(steps.len(), 1);
            assert_eq!(steps[0].operation, SortOp::Complete);
            assert!(steps[0].sorted.is_empty());
            assert!(steps[0].array.is_empty());
        }
    }

    #[test]
    fn single_element_is_start_then_complete() {
        let steps = quick_sort(&[7]);
        assert_eq!(steps.len(), 2);
        assert_eq!(final_array(&steps), vec![7]);
        assert_eq!(steps[1].sorted, vec![0]);
    }

    #[test]
    fn quick_sort_uses_last_element_as_pivot() {
        let steps = quick_sort(&[5, 1, 4, 3]);
        let first_pivot = steps.iter().find(|s| s.operation == SortOp::Pivot).unwrap();
        assert_eq!(first_pivot.comparing, vec![3]);
        assert_eq!(final_array(&steps), vec![1, 3, 4, 5]);
        let placed = steps
            .iter()
            .find(|s| s.operation == SortOp::PivotPlaced)
            .unwrap();
        assert_eq!(placed.sorted, vec![1]);
        assert_eq!(placed.array[1], 3);
    }

    #[test]
    fn quick_sort_handles_duplicates_and_sorted_input() {
        assert_eq!(final_array(&quick_sort(&[2, 2, 1, 2])), vec![1, 2, 2, 2]);
        assert_eq!(final_array(&quick_sort(&[1, 2, 3, 4])), vec![1, 2, 3, 4]);
    }

    #[test]
    fn merge_sort_emits_divide_before_merge() {
        let steps = merge_sort(&[2, 1]);
        let ops: Vec<SortOp> = steps.iter().map(|s| s.operation).collect();
        assert_eq!(
            ops,
            vec![
                SortOp::Start,
                SortOp::Dividing,
                SortOp::Merging,
                SortOp::Comparing,
                SortOp::Placed,
                SortOp::Placed,
                SortOp::Complete
            ]
        );
        assert_eq!(steps[1].comparing, vec![0, 1]);
    }

    #[test]
    fn merge_sort_one_placement_per_written_element() {
        let input = [5, 2, 9, 1, 7];
        let steps = merge_sort(&input);
        let merges = steps.iter().filter(|s| s.operation == SortOp::Merging);
        let written: usize = merges.map(|s| s.comparing.len()).sum();
        let placed = steps.iter().filter(|s| s.operation == SortOp::Placed).count();
        assert_eq!(written, placed);
        assert_eq!(final_array(&steps), vec![1, 2, 5, 7, 9]);
    }
}
