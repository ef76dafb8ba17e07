//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging state
//! transitions and remote calls.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs (to stderr, so redirect it: `2>costgrid.err`)
//! - `RUST_LOG=message=debug,editor=debug` - scoped filtering
//! - `RUST_LOG=costgrid::remote=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/costgrid/logs/costgrid.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::EditorState;

/// Initialize tracing subscriber with console and file logging
///
/// The console layer is off unless RUST_LOG is set, since the terminal
/// belongs to the grid while the app is running.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "costgrid.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A second init (e.g. from tests) is not an error worth reporting
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of editor state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub rows: usize,
    pub undo_depth: usize,
    pub redo_depth: usize,
    /// (row, column name) of the selection
    pub selection: Option<(usize, &'static str)>,
    pub has_clipboard: bool,
}

impl EditorSnapshot {
    pub fn from_editor(editor: &EditorState) -> Self {
        Self {
            rows: editor.row_count(),
            undo_depth: editor.history.undo_len(),
            redo_depth: editor.history.redo_len(),
            selection: editor
                .selection
                .as_ref()
                .map(|s| (s.row, s.column.name())),
            has_clipboard: editor.clipboard.is_some(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &EditorSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.rows != other.rows {
            changes.push(format!("rows: {} → {}", self.rows, other.rows));
        }
        if self.undo_depth != other.undo_depth || self.redo_depth != other.redo_depth {
            changes.push(format!(
                "history: {}/{} → {}/{}",
                self.undo_depth, self.redo_depth, other.undo_depth, other.redo_depth
            ));
        }
        if self.selection != other.selection {
            let describe = |s: &Option<(usize, &str)>| match s {
                Some((row, col)) => format!("({},{})", row, col),
                None => "none".to_string(),
            };
            changes.push(format!(
                "selection: {} → {}",
                describe(&self.selection),
                describe(&other.selection)
            ));
        }
        if self.has_clipboard != other.has_clipboard {
            changes.push("clipboard filled".to_string());
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellValue, Column, Row};

    #[test]
    fn test_snapshot_diff_reports_history_and_selection() {
        let mut editor = EditorState::with_rows(vec![Row::new()]);
        let before = EditorSnapshot::from_editor(&editor);

        editor.select(0, Column::PdmIfo, CellValue::Null);
        editor.edit_cell(0, Column::PdmIfo, "3").unwrap();
        let after = EditorSnapshot::from_editor(&editor);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("history: 0/0 → 1/0"));
        assert!(diff.contains("selection: none → (0,PDMIFO)"));
    }

    #[test]
    fn test_snapshot_diff_none_when_unchanged() {
        let editor = EditorState::new();
        let a = EditorSnapshot::from_editor(&editor);
        assert_eq!(a.diff(&a.clone()), None);
    }
}
