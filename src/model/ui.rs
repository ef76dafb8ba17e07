//! UI state - status bar, transient message, grid focus, request flags

use std::time::{Duration, Instant};

use super::status_bar::{StatusBar, TransientMessage};
use crate::grid::GridState;

/// Default lifetime of a status message
pub const DEFAULT_STATUS_DURATION: Duration = Duration::from_millis(3000);

/// UI state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Structured status bar with segments
    pub status_bar: StatusBar,
    /// Status banner with auto-expiry (at most one at a time)
    pub transient_message: Option<TransientMessage>,
    /// How long a new status message stays visible
    pub status_duration: Duration,
    /// Grid focus, viewport and edit buffer
    pub grid: GridState,
    /// Whether a fetch is in flight
    pub is_loading: bool,
    /// Whether a save/create/update/delete is in flight
    pub is_saving: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::with_status_duration(DEFAULT_STATUS_DURATION)
    }

    pub fn with_status_duration(status_duration: Duration) -> Self {
        Self {
            status_bar: StatusBar::new(),
            transient_message: None,
            status_duration,
            grid: GridState::new(),
            is_loading: false,
            is_saving: false,
        }
    }

    /// Show a status message, replacing (and restarting the timer of) any
    /// message already on screen
    pub fn show_status(&mut self, text: impl Into<String>) {
        self.show_status_at(text, Instant::now());
    }

    pub fn show_status_at(&mut self, text: impl Into<String>, now: Instant) {
        self.transient_message = Some(TransientMessage::new_at(text, self.status_duration, now));
    }

    /// Current status text, empty when nothing is shown
    pub fn status_text(&self) -> &str {
        self.transient_message
            .as_ref()
            .map(|m| m.text.as_str())
            .unwrap_or("")
    }

    /// Clear the status message if its time is up. Returns true if it was cleared.
    pub fn expire_status(&mut self, now: Instant) -> bool {
        match &self.transient_message {
            Some(msg) if msg.is_expired_at(now) => {
                self.transient_message = None;
                true
            }
            _ => false,
        }
    }

    /// Check if the UI is busy (loading or saving)
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_saving
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
