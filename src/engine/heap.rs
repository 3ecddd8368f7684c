//! Binary heap on a flat array
//!
//! One set of generators serves both orderings: every comparison goes through
//! [`HeapMode::prefers`]. Frames between `start` and the terminal
//! `built`/`complete` frame may violate the heap property.

use crate::snapshot::{HeapOp, HeapStep, StepLog};
use crate::structures::{left_child, parent, right_child, HeapMode};

/// Heapify bottom-up, from the last internal node back to the root.
pub fn build(values: &[i64], mode: HeapMode) -> Vec<HeapStep> {
    let mut log = StepLog::new("heap_build");
    let mut heap = values.to_vec();

    log.push(HeapStep::new(
        &heap,
        mode,
        HeapOp::Start,
        format!("Building {} heap from array", mode.as_str()),
    ));

    let size = heap.len();
    for i in (0..size / 2).rev() {
        heapify_down(&mut heap, i, size, mode, &mut log);
    }

    log.push(HeapStep::new(
        &heap,
        mode,
        HeapOp::Built,
        format!("{} heap built successfully", mode.as_str()),
    ));
    log.finish()
}

/// Sift `index` down until neither child is preferred over it.
fn heapify_down(
    heap: &mut [i64],
    index: usize,
    size: usize,
    mode: HeapMode,
    log: &mut StepLog<HeapStep>,
) {
    let mut index = index;
    loop {
        log.push(
            HeapStep::new(
                heap,
                mode,
                HeapOp::HeapifyDown,
                format!("Heapifying node at index {} (value: {})", index, heap[index]),
            )
            .highlight([index]),
        );

        let mut target = index;
        let (left, right) = (left_child(index), right_child(index));

        if left < size {
            log.push(
                HeapStep::new(
                    heap,
                    mode,
                    HeapOp::Comparing,
                    format!("Comparing {} with left child {}", heap[index], heap[left]),
                )
                .comparing([index, left]),
            );
            if mode.prefers(heap[left], heap[target]) {
                target = left;
            }
        }

        if right < size {
            log.push(
                HeapStep::new(
                    heap,
                    mode,
                    HeapOp::Comparing,
                    format!("Comparing {} with right child {}", heap[target], heap[right]),
                )
                .comparing([target, right]),
            );
            if mode.prefers(heap[right], heap[target]) {
                target = right;
            }
        }

        if target == index {
            return;
        }

        log.push(
            HeapStep::new(
                heap,
                mode,
                HeapOp::Swapping,
                format!(
                    "Swapping {} and {} to maintain heap property",
                    heap[index], heap[target]
                ),
            )
            .highlight([index, target]),
        );
        heap.swap(index, target);
        log.push(
            HeapStep::new(
                heap,
                mode,
                HeapOp::Swapped,
                "Swapped, continuing to heapify down",
            )
            .highlight([target]),
        );

        index = target;
    }
}

/// Append `value` and bubble it up. Always ends on a `complete` frame.
pub fn insert(heap: &[i64], value: i64, mode: HeapMode) -> Vec<HeapStep> {
    let mut log = StepLog::new("heap_insert");
    let mut working = heap.to_vec();

    log.push(HeapStep::new(
        &working,
        mode,
        HeapOp::Start,
        format!("Inserting {} into {} heap", value, mode.as_str()),
    ));

    working.push(value);
    let mut index = working.len() - 1;
    log.push(
        HeapStep::new(
            &working,
            mode,
            HeapOp::Inserted,
            format!("Added {} at the end (index {})", value, index),
        )
        .highlight([index]),
    );

    while index > 0 {
        let up = parent(index);
        log.push(
            HeapStep::new(
                &working,
                mode,
                HeapOp::Comparing,
                format!("Comparing {} with parent {}", value, working[up]),
            )
            .comparing([index, up]),
        );

        if !mode.prefers(working[index], working[up]) {
            break;
        }

        log.push(
            HeapStep::new(
                &working,
                mode,
                HeapOp::BubblingUp,
                format!("{} violates heap property, swapping with parent", value),
            )
            .highlight([index, up]),
        );
        working.swap(index, up);
        index = up;
    }

    let narration = if index == 0 {
        format!("{} reached the root, insertion complete", value)
    } else {
        "Heap property satisfied, insertion complete".to_string()
    };
    log.push(HeapStep::new(&working, mode, HeapOp::Complete, narration).highlight([index]));

    log.finish()
}

/// Remove the root, move the last element up, and heapify down.
pub fn extract(heap: &[i64], mode: HeapMode) -> Vec<HeapStep> {
    let mut log = StepLog::new("heap_extract");

    let Some(&extracted) = heap.first() else {
        log.push(HeapStep::new(
            &[],
            mode,
            HeapOp::Empty,
            "Heap is empty, nothing to extract",
        ));
        return log.finish();
    };

    let mut working = heap.to_vec();
    log.push(
        HeapStep::new(
            &working,
            mode,
            HeapOp::Start,
            format!("Extracting {} value: {}", mode.extreme(), extracted),
        )
        .highlight([0]),
    );

    if working.len() == 1 {
        log.push(HeapStep::new(
            &[],
            mode,
            HeapOp::Complete,
            format!("Extracted {}, heap is now empty", extracted),
        ));
        return log.finish();
    }

    working.swap_remove(0);
    log.push(
        HeapStep::new(
            &working,
            mode,
            HeapOp::Replaced,
            format!(
                "Moved last element {} to root, now heapifying down",
                working[0]
            ),
        )
        .highlight([0]),
    );

    let size = working.len();
    heapify_down(&mut working, 0, size, mode, &mut log);

    log.push(HeapStep::new(
        &working,
        mode,
        HeapOp::Complete,
        format!("Extraction complete, extracted {}", extracted),
    ));
    log.finish()
}

pub fn peek(heap: &[i64], mode: HeapMode) -> Vec<HeapStep> {
    let mut log = StepLog::new("heap_peek");

    match heap.first() {
        None => log.push(HeapStep::new(heap, mode, HeapOp::Empty, "Heap is empty")),
        Some(root) => {
            let extreme = match mode {
                HeapMode::Min => "Minimum",
                HeapMode::Max => "Maximum",
            };
            log.push(
                HeapStep::new(
                    heap,
                    mode,
                    HeapOp::Peek,
                    format!("{} value is {} at root", extreme, root),
                )
                .highlight([0]),
            );
        }
    }

    log.finish()
}
