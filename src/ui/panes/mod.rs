//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`structure`]: the container of the current step, laid out per structure kind
//! - [`narration`]: descriptions of every step up to the current one
//! - [`info`]: name, description, costs and pseudocode of the algorithm
//! - [`status`]: status bar with keybindings, position and playback state
//!
//! Each pane module exports a `render_*` function taking the frame, its area
//! and whatever borrowed state it draws. `cells` holds the span builders the
//! structure views share.

mod cells;

pub mod info;
pub mod narration;
pub mod status;
pub mod structure;

pub use info::render_info_pane;
pub use narration::render_narration_pane;
pub use status::render_status_bar;
pub use structure::{render_structure_pane, structure_lines};
