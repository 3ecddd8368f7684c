//! Step generators
//!
//! Every public function here is pure: it copies its input, runs one
//! algorithm or structure operation to completion, and returns the full list
//! of frames. No generator fails; precondition problems (empty container,
//! full stack, bad position, unknown node) become a terminal frame whose
//! operation tag names the problem.
//!
//! Generators never reuse the caller's buffers, so replaying the same input
//! always yields the same sequence.

pub mod array;
pub mod binary_tree;
pub mod bst;
pub mod graph;
pub mod heap;
pub mod linked_list;
pub mod queue;
pub mod searching;
pub mod sorting;
pub mod stack;
