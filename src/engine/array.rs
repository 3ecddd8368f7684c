//! Array insert, delete and search
//!
//! Insert and delete narrate each shifted slot separately, and each frame
//! shows the array as it really is mid-shift (a slot briefly holds a copy of
//! its neighbour). The number of frames therefore grows with the number of
//! elements moved.

use crate::snapshot::{ArrayOp, ArrayStep, StepLog};

fn invalid_position(array: &[i64], position: usize, log: &mut StepLog<ArrayStep>) {
    log.push(ArrayStep::new(
        array,
        ArrayOp::InvalidPosition,
        format!(
            "Position {} is out of range for an array of length {}",
            position,
            array.len()
        ),
    ));
}

/// Insert `value` at `position`, shifting the tail one slot right.
///
/// `position == len` appends without shifting.
pub fn insert(array: &[i64], value: i64, position: usize) -> Vec<ArrayStep> {
    let mut log = StepLog::new("array_insert");
    let mut working = array.to_vec();

    if position > working.len() {
        invalid_position(&working, position, &mut log);
        return log.finish();
    }

    log.push(ArrayStep::new(
        &working,
        ArrayOp::Insert,
        format!("Starting insertion of {} at position {}", value, position),
    ));

    let len = working.len();
    for i in (position..len).rev() {
        if i + 1 == working.len() {
            working.push(working[i]);
        } else {
            working[i + 1] = working[i];
        }
        log.push(
            ArrayStep::new(
                &working,
                ArrayOp::Shifting,
                format!("Shifting element {} from index {} to {}", working[i], i, i + 1),
            )
            .highlight([i, i + 1]),
        );
    }

    if position == working.len() {
        working.push(value);
    } else {
        working[position] = value;
    }
    log.push(
        ArrayStep::new(
            &working,
            ArrayOp::Inserted,
            format!("Inserted {} at position {}", value, position),
        )
        .highlight([position]),
    );

    log.finish()
}

/// Delete the element at `position`, shifting the tail one slot left.
pub fn delete(array: &[i64], position: usize) -> Vec<ArrayStep> {
    let mut log = StepLog::new("array_delete");
    let mut working = array.to_vec();

    if position >= working.len() {
        invalid_position(&working, position, &mut log);
        return log.finish();
    }

    let deleted = working[position];
    log.push(
        ArrayStep::new(
            &working,
            ArrayOp::Delete,
            format!("Deleting element {} at position {}", deleted, position),
        )
        .highlight([position]),
    );

    for i in position..working.len() - 1 {
        working[i] = working[i + 1];
        log.push(
            ArrayStep::new(
                &working,
                ArrayOp::Shifting,
                format!("Shifted element {} from index {} to {}", working[i], i + 1, i),
            )
            .highlight([i, i + 1]),
        );
    }

    working.pop();
    log.push(ArrayStep::new(
        &working,
        ArrayOp::Deleted,
        format!("Successfully deleted {}", deleted),
    ));

    log.finish()
}

/// Scan for the first element equal to `value`.
pub fn search(array: &[i64], value: i64) -> Vec<ArrayStep> {
    let mut log = StepLog::new("array_search");

    log.push(ArrayStep::new(
        array,
        ArrayOp::Search,
        format!("Searching for {} in the array", value),
    ));

    for (i, &element) in array.iter().enumerate() {
        let relation = if element == value { "==" } else { "!=" };
        log.push(
            ArrayStep::new(
                array,
                ArrayOp::Comparing,
                format!("Checking index {}: {} {} {}", i, element, relation, value),
            )
            .highlight([i]),
        );

        if element == value {
            log.push(
                ArrayStep::new(array, ArrayOp::Found, format!("Found {} at index {}!", value, i))
                    .highlight([i]),
            );
            return log.finish();
        }
    }

    log.push(ArrayStep::new(
        array,
        ArrayOp::NotFound,
        format!("{} not found in the array", value),
    ));
    log.finish()
}
