//! costgrid - Elm-style terminal editor for shipping-cost tables
//!
//! This crate provides the core types and logic for editing a table of
//! per-port shipping costs that lives behind a small REST API, implementing
//! the Elm Architecture pattern. The binary adds the terminal runtime and
//! rendering.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod effects;
pub mod grid;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod remote;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
