//! Runtime module - terminal integration
//!
//! This module contains the code that drives the editor in a terminal:
//! - `app` - event loop, command execution on worker threads
//! - `input` - key event to message mapping
//! - `mouse` - clicks on grid cells and row actions

pub mod app;
pub mod input;
pub mod mouse;

pub use app::App;
