//! Fixed-capacity stack: push, pop, peek

use crate::snapshot::{StackOp, StackStep, StepLog};

pub fn push(stack: &[i64], value: i64, capacity: usize) -> Vec<StackStep> {
    let mut log = StepLog::new("stack_push");
    let mut working = stack.to_vec();

    if working.len() >= capacity {
        log.push(StackStep::new(
            &working,
            StackOp::Overflow,
            format!("Stack Overflow! Cannot push {}. Max size: {}", value, capacity),
        ));
        return log.finish();
    }

    log.push(StackStep::new(
        &working,
        StackOp::PushStart,
        format!("Pushing {} onto the stack", value),
    ));

    working.push(value);
    log.push(
        StackStep::new(
            &working,
            StackOp::PushComplete,
            format!("{} pushed successfully. Stack size: {}", value, working.len()),
        )
        .highlight(working.len() - 1),
    );

    log.finish()
}

pub fn pop(stack: &[i64]) -> Vec<StackStep> {
    let mut log = StepLog::new("stack_pop");
    let mut working = stack.to_vec();

    let Some(&top) = working.last() else {
        log.push(StackStep::new(
            &working,
            StackOp::Underflow,
            "Stack Underflow! Cannot pop from empty stack",
        ));
        return log.finish();
    };

    log.push(
        StackStep::new(
            &working,
            StackOp::PopStart,
            format!("Popping top element: {}", top),
        )
        .highlight(working.len() - 1),
    );

    working.pop();
    log.push(StackStep::new(
        &working,
        StackOp::PopComplete,
        format!("Popped {}. Stack size: {}", top, working.len()),
    ));

    log.finish()
}

pub fn peek(stack: &[i64]) -> Vec<StackStep> {
    let mut log = StepLog::new("stack_peek");

    match stack.last() {
        None => log.push(StackStep::new(
            stack,
            StackOp::Empty,
            "Stack is empty. Nothing to peek",
        )),
        Some(top) => log.push(
            StackStep::new(stack, StackOp::Peek, format!("Top element: {}", top))
                .highlight(stack.len() - 1),
        ),
    }

    log.finish()
}
