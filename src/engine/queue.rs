//! Fixed-capacity FIFO queue: enqueue, dequeue, peek
//!
//! The front is always slot 0 and the rear the last slot; both are `None`
//! for an empty queue.

use crate::snapshot::{QueueOp, QueueStep, StepLog};

pub fn enqueue(queue: &[i64], value: i64, capacity: usize) -> Vec<QueueStep> {
    let mut log = StepLog::new("queue_enqueue");
    let mut working = queue.to_vec();

    if working.len() >= capacity {
        log.push(QueueStep::new(
            &working,
            QueueOp::Overflow,
            format!("Queue Overflow! Cannot enqueue. Max size: {}", capacity),
        ));
        return log.finish();
    }

    log.push(QueueStep::new(
        &working,
        QueueOp::EnqueueStart,
        format!("Enqueueing {} to the rear", value),
    ));

    working.push(value);
    log.push(
        QueueStep::new(
            &working,
            QueueOp::EnqueueComplete,
            format!("{} enqueued successfully. Queue size: {}", value, working.len()),
        )
        .highlight([working.len() - 1]),
    );

    log.finish()
}

pub fn dequeue(queue: &[i64]) -> Vec<QueueStep> {
    let mut log = StepLog::new("queue_dequeue");

    let Some((&front, rest)) = queue.split_first() else {
        log.push(QueueStep::new(
            queue,
            QueueOp::Underflow,
            "Queue Underflow! Cannot dequeue from empty queue",
        ));
        return log.finish();
    };

    log.push(
        QueueStep::new(
            queue,
            QueueOp::DequeueStart,
            format!("Dequeueing front element: {}", front),
        )
        .highlight([0]),
    );

    log.push(QueueStep::new(
        rest,
        QueueOp::DequeueComplete,
        format!("Dequeued {}. Queue size: {}", front, rest.len()),
    ));

    log.finish()
}

pub fn peek(queue: &[i64]) -> Vec<QueueStep> {
    let mut log = StepLog::new("queue_peek");

    match queue.first() {
        None => log.push(QueueStep::new(
            queue,
            QueueOp::Empty,
            "Queue is empty. Nothing at front",
        )),
        Some(front) => log.push(
            QueueStep::new(queue, QueueOp::PeekFront, format!("Front element: {}", front))
                .highlight([0]),
        ),
    }

    log.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enqueue_appends_at_rear() {
        let steps = enqueue(&[1], 2, 10);
        let done = steps.last().unwrap();
        assert_eq!(done.queue, vec![1, 2]);
        assert_eq!(done.rear, Some(1));
        assert_eq!(done.highlight, vec![1]);
    }

    #[test]
    fn enqueue_respects_default_capacity() {
        let full: Vec<i64> = (0..10).collect();
        let steps = enqueue(&full, 11, 10);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].operation, QueueOp::Overflow);
        assert_eq!(steps[0].rear, Some(9));
    }

    #[test]
    fn dequeue_takes_front() {
        let steps = dequeue(&[7, 8]);
        assert_eq!(steps[0].highlight, vec![0]);
        assert_eq!(steps[1].queue, vec![8]);
    }

    #[test]
    fn dequeue_last_element_clears_markers() {
        let steps = dequeue(&[7]);
        let done = steps.last().unwrap();
        assert!(done.queue.is_empty());
        assert_eq!((done.front, done.rear), (None, None));
    }

    #[test]
    fn empty_queue_terminal_steps() {
        assert_eq!(dequeue(&[])[0].operation, QueueOp::Underflow);
        assert_eq!(peek(&[])[0].operation, QueueOp::Empty);
        assert_eq!(peek(&[3, 4])[0].highlight, vec![0]);
    }
}
