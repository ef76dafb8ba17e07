//! Mouse handling: clicks on grid cells and on the per-row actions
//!
//! A click on a data cell focuses it (committing any open edit). A click on
//! `[Update]` commits the open edit and sends that row as it now stands;
//! `[Delete]` deletes the row by its identifier.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use costgrid::commands::Cmd;
use costgrid::messages::{GridMsg, Msg, RemoteMsg};
use costgrid::model::AppModel;
use costgrid::update::update;

use crate::view::grid::{hit_test, GridHit};
use crate::view::screen_areas;

/// Handle one mouse event against a screen of size `screen`
pub fn handle_mouse(model: &mut AppModel, screen: Rect, event: &MouseEvent) -> Option<Cmd> {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let [grid_area, _, _] = screen_areas(screen);
    let hit = hit_test(grid_area, model, event.column, event.row)?;
    tracing::trace!("Click at ({}, {}) -> {:?}", event.column, event.row, hit);

    match hit {
        GridHit::Cell { row, col } => update(model, Msg::Grid(GridMsg::FocusCell { row, col })),
        GridHit::Update { row } => {
            let commit = update(model, Msg::Grid(GridMsg::CommitEdit));
            let target = model.editor.row(row)?.clone();
            let request = update(
                model,
                Msg::Remote(RemoteMsg::UpdateRow {
                    id: target.id.clone(),
                    row: target,
                }),
            );
            combine(commit, request)
        }
        GridHit::Delete { row } => {
            let id = model.editor.row(row)?.id.clone();
            update(model, Msg::Remote(RemoteMsg::DeleteRow { id }))
        }
    }
}

fn combine(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
    match (first, second) {
        (Some(a), Some(b)) => Some(Cmd::batch(vec![a, b])),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use costgrid::model::{CellValue, Column, Row, RowId};
    use costgrid::EditorConfig;

    // Same geometry as the grid tests: 60 columns, the grid gets the top 6 lines
    fn screen() -> Rect {
        Rect::new(0, 0, 60, 8)
    }

    fn model() -> AppModel {
        let rows = (1..=2)
            .map(|i| {
                Row::new()
                    .with_id(RowId::Number(i))
                    .with(Column::DischargePort, CellValue::Text(format!("Port {}", i)))
            })
            .collect();
        let mut model = AppModel::with_rows(EditorConfig::default(), rows);
        model.resize(36, 5);
        model
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_click_cell_focuses_and_selects() {
        let mut model = model();

        let cmd = handle_mouse(&mut model, screen(), &click(25, 2));

        assert_eq!(cmd, Some(Cmd::Redraw));
        assert_eq!((model.ui.grid.focused.row, model.ui.grid.focused.col), (1, 1));
        let selection = model.editor.selection.as_ref().unwrap();
        assert_eq!(selection.row, 1);
        assert_eq!(selection.column, Column::SevenIslandsTotal);
    }

    #[test]
    fn test_click_update_sends_row_with_committed_edit() {
        let mut model = model();
        model.ui.grid.start_editing("Santos".into());

        let cmd = handle_mouse(&mut model, screen(), &click(40, 1)).unwrap();

        let expected_row = model.editor.row(0).unwrap().clone();
        assert_eq!(
            expected_row.get(Column::DischargePort),
            &CellValue::Text("Santos".into())
        );
        assert_eq!(
            cmd,
            Cmd::batch(vec![
                Cmd::Redraw,
                Cmd::UpdateRow {
                    id: RowId::Number(1),
                    row: expected_row,
                },
            ])
        );
        assert!(!model.ui.grid.is_editing());
    }

    #[test]
    fn test_click_delete_requests_that_row() {
        let mut model = model();

        let cmd = handle_mouse(&mut model, screen(), &click(50, 2));

        assert_eq!(cmd, Some(Cmd::DeleteRow { id: RowId::Number(2) }));
        assert!(model.ui.is_saving);
    }

    #[test]
    fn test_other_buttons_and_misses_are_ignored() {
        let mut model = model();
        let right_click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click(6, 1)
        };

        assert_eq!(handle_mouse(&mut model, screen(), &right_click), None);
        assert_eq!(handle_mouse(&mut model, screen(), &click(6, 0)), None);
        assert_eq!(handle_mouse(&mut model, screen(), &click(6, 7)), None);
    }
}
