//! # Introduction
//!
//! algoviz turns a classic algorithm or data-structure operation into a
//! recorded sequence of steps and plays that sequence back in a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Arguments → Request → Generator → Steps → Playback → TUI (or JSON)
//! ```
//!
//! 1. [`catalog`]: parses the command line, validates the raw input and
//!    dispatches to the matching generator.
//! 2. [`engine`]: pure step generators for sorting, searching, arrays,
//!    stacks, queues, linked lists, binary trees, BSTs, heaps and graphs.
//! 3. [`structures`]: the immutable containers every step carries, with
//!    index links into node arenas instead of pointers.
//! 4. [`snapshot`]: the per-structure step records and the uniform [`Step`]
//!    enum that serialises with a `kind` tag.
//! 5. [`playback`]: cursor and auto-play timer over a step sequence.
//! 6. [`ui`]: ratatui-based viewer; not part of the stable library API.
//!
//! [`Step`]: snapshot::Step

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod playback;
pub mod snapshot;
pub mod structures;
pub mod ui;

pub use error::{Error, Result};
