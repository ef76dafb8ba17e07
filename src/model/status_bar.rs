//! Status bar model - segments and layout
//!
//! The bar shows the transient status message on the left and grid/history
//! facts on the right.

use std::time::{Duration, Instant};

/// Identifier for status bar segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentId {
    /// Transient status messages (e.g., "Data saved successfully.")
    StatusMessage,
    /// Request in flight (e.g., "Saving...")
    Busy,
    /// Focused cell (e.g., "Row 3, BaltimoreIFO")
    FocusedCell,
    /// Total row count (e.g., "42 rows")
    RowCount,
    /// Undo/redo depth (e.g., "undo 3 | redo 1")
    History,
}

/// Position of a segment in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    Left,
    Right,
}

/// Content of a segment
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentContent {
    Empty,
    Text(String),
}

impl SegmentContent {
    pub fn display_text(&self) -> &str {
        match self {
            SegmentContent::Empty => "",
            SegmentContent::Text(s) => s,
        }
    }

    /// Check if this content is empty (nothing to display)
    pub fn is_empty(&self) -> bool {
        match self {
            SegmentContent::Empty => true,
            SegmentContent::Text(s) => s.is_empty(),
        }
    }

    pub fn char_width(&self) -> usize {
        match self {
            SegmentContent::Empty => 0,
            SegmentContent::Text(s) => s.chars().count(),
        }
    }
}

/// A single segment in the status bar
#[derive(Debug, Clone)]
pub struct StatusSegment {
    pub id: SegmentId,
    pub position: SegmentPosition,
    pub content: SegmentContent,
}

impl StatusSegment {
    pub fn new(id: SegmentId, content: SegmentContent) -> Self {
        let position = match id {
            SegmentId::StatusMessage | SegmentId::Busy => SegmentPosition::Left,
            SegmentId::FocusedCell | SegmentId::RowCount | SegmentId::History => {
                SegmentPosition::Right
            }
        };

        Self {
            id,
            position,
            content,
        }
    }
}

/// The complete status bar state
#[derive(Debug, Clone)]
pub struct StatusBar {
    segments: Vec<StatusSegment>,
    /// Spacing between segments (character units)
    pub separator_spacing: usize,
    /// Padding on each side (character units)
    pub padding: usize,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            segments: vec![
                StatusSegment::new(SegmentId::StatusMessage, SegmentContent::Empty),
                StatusSegment::new(SegmentId::Busy, SegmentContent::Empty),
                StatusSegment::new(SegmentId::FocusedCell, SegmentContent::Empty),
                StatusSegment::new(SegmentId::RowCount, SegmentContent::Text("0 rows".into())),
                StatusSegment::new(SegmentId::History, SegmentContent::Empty),
            ],
            separator_spacing: 3,
            padding: 1,
        }
    }

    pub fn get_segment(&self, id: SegmentId) -> Option<&StatusSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    pub fn update_segment(&mut self, id: SegmentId, content: SegmentContent) {
        if let Some(segment) = self.segments.iter_mut().find(|s| s.id == id) {
            segment.content = content;
        }
    }

    /// Text of a segment, empty when hidden
    pub fn segment_text(&self, id: SegmentId) -> &str {
        self.get_segment(id)
            .map(|s| s.content.display_text())
            .unwrap_or("")
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Transient Message
// =============================================================================

/// A transient status message that auto-expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    pub text: String,
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a message shown at `now` (lets callers pin the clock)
    pub fn new_at(text: impl Into<String>, duration: Duration, now: Instant) -> Self {
        Self {
            text: text.into(),
            expires_at: now + duration,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

// =============================================================================
// Layout
// =============================================================================

/// A rendered segment with calculated position
#[derive(Debug, Clone)]
pub struct RenderedSegment {
    pub id: SegmentId,
    /// X position in character units
    pub x: usize,
    pub width: usize,
    pub text: String,
}

/// Complete layout of the status bar
#[derive(Debug, Clone)]
pub struct StatusBarLayout {
    pub left: Vec<RenderedSegment>,
    pub right: Vec<RenderedSegment>,
    /// X positions of separator glyphs between right segments
    pub separator_positions: Vec<usize>,
}

impl StatusBar {
    /// Calculate segment positions for a bar `available_width` characters wide
    pub fn layout(&self, available_width: usize) -> StatusBarLayout {
        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut separator_positions = Vec::new();

        let mut left_x = self.padding;
        for seg in self
            .segments
            .iter()
            .filter(|s| s.position == SegmentPosition::Left && !s.content.is_empty())
        {
            let width = seg.content.char_width();
            left.push(RenderedSegment {
                id: seg.id,
                x: left_x,
                width,
                text: seg.content.display_text().to_string(),
            });
            left_x += width + self.separator_spacing;
        }

        // Right segments are placed from the right edge backwards
        let mut right_x = available_width.saturating_sub(self.padding);
        let mut prev_start: Option<usize> = None;
        let right_segs: Vec<_> = self
            .segments
            .iter()
            .filter(|s| s.position == SegmentPosition::Right && !s.content.is_empty())
            .collect();

        for seg in right_segs.iter().rev() {
            let width = seg.content.char_width();

            if let Some(start) = prev_start {
                separator_positions.push(start.saturating_sub(self.separator_spacing / 2 + 1));
                right_x = start.saturating_sub(self.separator_spacing);
            }
            right_x = right_x.saturating_sub(width);

            right.push(RenderedSegment {
                id: seg.id,
                x: right_x,
                width,
                text: seg.content.display_text().to_string(),
            });
            prev_start = Some(right_x);
        }

        right.reverse();
        separator_positions.reverse();

        StatusBarLayout {
            left,
            right,
            separator_positions,
        }
    }
}

// =============================================================================
// Sync Function
// =============================================================================

use super::AppModel;

/// Synchronize status bar segments with current editor/grid state
pub fn sync_status_bar(model: &mut AppModel) {
    let message = match &model.ui.transient_message {
        Some(msg) => SegmentContent::Text(msg.text.clone()),
        None => SegmentContent::Empty,
    };
    model
        .ui
        .status_bar
        .update_segment(SegmentId::StatusMessage, message);

    let busy = if model.ui.is_saving {
        SegmentContent::Text("Saving...".into())
    } else if model.ui.is_loading {
        SegmentContent::Text("Loading...".into())
    } else {
        SegmentContent::Empty
    };
    model.ui.status_bar.update_segment(SegmentId::Busy, busy);

    let row_count = model.editor.row_count();
    let focused = if row_count == 0 {
        SegmentContent::Empty
    } else {
        let pos = model.ui.grid.focused;
        SegmentContent::Text(format!("Row {}, {}", pos.row + 1, pos.column()))
    };
    model
        .ui
        .status_bar
        .update_segment(SegmentId::FocusedCell, focused);

    let rows = if row_count == 1 {
        "1 row".to_string()
    } else {
        format!("{} rows", row_count)
    };
    model
        .ui
        .status_bar
        .update_segment(SegmentId::RowCount, SegmentContent::Text(rows));

    let history = &model.editor.history;
    let history_text = if history.can_undo() || history.can_redo() {
        SegmentContent::Text(format!(
            "undo {} | redo {}",
            history.undo_len(),
            history.redo_len()
        ))
    } else {
        SegmentContent::Empty
    };
    model
        .ui
        .status_bar
        .update_segment(SegmentId::History, history_text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_message_expiry() {
        let start = Instant::now();
        let msg = TransientMessage::new_at("Cell data copied.", Duration::from_secs(3), start);
        assert!(!msg.is_expired_at(start));
        assert!(!msg.is_expired_at(start + Duration::from_millis(2999)));
        assert!(msg.is_expired_at(start + Duration::from_secs(3)));
    }

    #[test]
    fn test_layout_skips_empty_segments() {
        let bar = StatusBar::new();
        let layout = bar.layout(80);
        assert!(layout.left.is_empty());
        assert_eq!(layout.right.len(), 1);
        assert_eq!(layout.right[0].text, "0 rows");
        assert_eq!(layout.right[0].x + layout.right[0].width, 79);
    }

    #[test]
    fn test_layout_right_segments_in_order() {
        let mut bar = StatusBar::new();
        bar.update_segment(SegmentId::FocusedCell, SegmentContent::Text("Row 1, PDMIFO".into()));
        bar.update_segment(SegmentId::History, SegmentContent::Text("undo 1 | redo 0".into()));
        let layout = bar.layout(100);
        let ids: Vec<_> = layout.right.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![SegmentId::FocusedCell, SegmentId::RowCount, SegmentId::History]
        );
        assert_eq!(layout.separator_positions.len(), 2);
        assert!(layout.right[0].x + layout.right[0].width < layout.right[1].x);
    }
}
