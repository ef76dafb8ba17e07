//! Cost grid interaction
//!
//! The grid is the interactive view over `EditorState::table`:
//! - focused cell and keyboard navigation (arrows, Tab, Home/End, paging)
//! - viewport scrolling that keeps the focus on screen
//! - in-place edit buffer committed through `EditorState::edit_cell`
//!
//! ```text
//! GridState
//! ├── CellPosition (focus)
//! ├── GridViewport (visible region)
//! └── CellEditState (while editing)
//! ```

mod model;
mod navigation;
mod viewport;

pub use model::{column_widths, CellEdit, CellEditState, CellPosition, GridState};
pub use viewport::GridViewport;
