// Step snapshots and the recorder every generator writes into

mod steps;

pub use steps::{
    ArrayOp, ArrayStep, BstOp, BstStep, GraphOp, GraphStep, HeapOp, HeapStep, ListOp, ListStep,
    QueueOp, QueueStep, SearchOp, SearchStep, SortOp, SortStep, StackOp, StackStep, TreeOp,
    TreeStep,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Read access shared by every step type
pub trait Snapshot {
    /// Semantic phase tag, e.g. `"comparing"` or `"not-found"`
    fn operation(&self) -> &'static str;

    /// Human-readable narration of this frame
    fn description(&self) -> &str;
}

macro_rules! impl_snapshot {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Snapshot for $ty {
                fn operation(&self) -> &'static str {
                    self.operation.as_str()
                }

                fn description(&self) -> &str {
                    &self.description
                }
            }
        )+
    };
}

impl_snapshot!(
    ArrayStep, StackStep, QueueStep, ListStep, TreeStep, BstStep, HeapStep, GraphStep, SearchStep,
);

impl<T> Snapshot for SortStep<T> {
    fn operation(&self) -> &'static str {
        self.operation.as_str()
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// A step of any structure family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Step {
    Sort(SortStep),
    Search(SearchStep),
    Array(ArrayStep),
    Stack(StackStep),
    Queue(QueueStep),
    List(ListStep),
    Tree(TreeStep),
    Bst(BstStep),
    Heap(HeapStep),
    Graph(GraphStep),
}

impl Step {
    fn inner(&self) -> &dyn Snapshot {
        match self {
            Step::Sort(s) => s,
            Step::Search(s) => s,
            Step::Array(s) => s,
            Step::Stack(s) => s,
            Step::Queue(s) => s,
            Step::List(s) => s,
            Step::Tree(s) => s,
            Step::Bst(s) => s,
            Step::Heap(s) => s,
            Step::Graph(s) => s,
        }
    }
}

impl Snapshot for Step {
    fn operation(&self) -> &'static str {
        self.inner().operation()
    }

    fn description(&self) -> &str {
        self.inner().description()
    }
}

macro_rules! impl_from_step {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for Step {
                fn from(step: $ty) -> Self {
                    Step::$variant(step)
                }
            }
        )+
    };
}

impl_from_step!(
    Sort(SortStep),
    Search(SearchStep),
    Array(ArrayStep),
    Stack(StackStep),
    Queue(QueueStep),
    List(ListStep),
    Tree(TreeStep),
    Bst(BstStep),
    Heap(HeapStep),
    Graph(GraphStep),
);

/// Convert a typed sequence into the uniform [`Step`] form
pub fn into_steps<S: Into<Step>>(steps: Vec<S>) -> Vec<Step> {
    steps.into_iter().map(Into::into).collect()
}

/// Append-only recorder for one generator run
#[derive(Debug)]
pub struct StepLog<S> {
    label: &'static str,
    steps: Vec<S>,
}

impl<S: Snapshot> StepLog<S> {
    pub fn new(label: &'static str) -> Self {
        StepLog {
            label,
            steps: Vec::new(),
        }
    }

    /// Record a frame
    pub fn push(&mut self, step: S) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    /// Hand the recorded frames to the caller
    pub fn finish(self) -> Vec<S> {
        debug!(
            generator = self.label,
            steps = self.steps.len(),
            last = self.steps.last().map(|s| s.operation()).unwrap_or("-"),
            "generated step sequence"
        );
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_enum_delegates_to_inner() {
        let step: Step = StackStep::new(&[], StackOp::Underflow, "Stack Underflow!").into();
        assert_eq!(step.operation(), "underflow");
        assert_eq!(step.description(), "Stack Underflow!");
    }

    #[test]
    fn step_enum_is_tagged_by_kind() {
        let step: Step = StackStep::new(&[1], StackOp::Peek, "Top element: 1").into();
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["kind"], "stack");
        assert_eq!(json["operation"], "peek");
        let back: Step = serde_json::from_value(json).unwrap();
        assert_eq!(back, step);
    }

    #[test]
    fn log_preserves_push_order() {
        let mut log = StepLog::new("test");
        log.push(ArrayStep::new(&[1], ArrayOp::Search, "a"));
        log.push(ArrayStep::new(&[1], ArrayOp::NotFound, "b"));
        assert_eq!(log.len(), 2);
        let steps = log.finish();
        assert_eq!(steps[1].description, "b");
    }
}
