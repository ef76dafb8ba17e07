//! Status bar and footer rendering

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use costgrid::commands::{keybinding_for_command, COMMANDS};
use costgrid::keymap::Keymap;
use costgrid::model::{AppModel, SegmentId, StatusBarLayout};

use super::palette;

pub fn render_status_bar(frame: &mut Frame, area: Rect, model: &AppModel) {
    let layout = model.ui.status_bar.layout(area.width as usize);
    let line = status_line(&layout, area.width as usize);
    frame.render_widget(Paragraph::new(line).style(palette::STATUS_BAR), area);
}

/// Place laid-out segments on a single line, padding the gaps with spaces
fn status_line(layout: &StatusBarLayout, width: usize) -> Line<'static> {
    let mut items: Vec<(usize, String, Style)> = layout
        .left
        .iter()
        .chain(layout.right.iter())
        .map(|seg| {
            let style = if seg.id == SegmentId::Busy {
                palette::BUSY
            } else {
                palette::STATUS_BAR
            };
            (seg.x, seg.text.clone(), style)
        })
        .collect();
    items.extend(
        layout
            .separator_positions
            .iter()
            .map(|&x| (x, "│".to_string(), palette::STATUS_BAR)),
    );
    items.sort_by_key(|(x, _, _)| *x);

    let mut spans = Vec::with_capacity(items.len() * 2);
    let mut cursor = 0;
    for (x, text, style) in items {
        if x < cursor || cursor >= width {
            // Overlaps the previous item on a narrow terminal
            continue;
        }
        if x > cursor {
            spans.push(Span::raw(" ".repeat(x - cursor)));
        }
        cursor = x + text.chars().count();
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}

/// Key hints for the command registry, using the live keymap
pub fn render_footer(frame: &mut Frame, area: Rect, keymap: &Keymap) {
    let mut spans = Vec::with_capacity(COMMANDS.len() * 3);
    for def in COMMANDS {
        if let Some(key) = keybinding_for_command(def.id, keymap) {
            spans.push(Span::styled(key, palette::FOOTER_KEY));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(def.label, palette::FOOTER_LABEL));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
