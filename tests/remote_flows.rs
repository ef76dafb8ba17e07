//! Row lifecycle tests: fetch, save, create, update and delete against an
//! in-memory store

mod common;

use common::{cmd_for, model_with_ports, port_row, run, test_model, text, Call, MockStore};
use costgrid::commands::Cmd;
use costgrid::messages::{GridMsg, Msg, RemoteMsg};
use costgrid::model::{AppModel, CellValue, Column, Row, RowId, SegmentId};
use costgrid::update::status;

fn fetch() -> Msg {
    Msg::Remote(RemoteMsg::FetchAll)
}

// ========================================================================
// Fetch
// ========================================================================

#[test]
fn test_fetch_loads_rows_and_keeps_history() {
    let store = MockStore::with_rows(vec![port_row(1, "Qingdao"), port_row(2, "Rotterdam")]);
    let mut model = AppModel::default();
    model.editor.history.push(Vec::new());

    run(&mut model, &store, fetch());

    assert_eq!(model.editor.row_count(), 2);
    assert_eq!(model.editor.original_table, model.editor.table);
    assert_eq!(model.editor.history.undo_len(), 1);
    assert!(!model.ui.is_loading);
    assert_eq!(store.calls(), vec![Call::FetchAll]);
}

#[test]
fn test_fetch_failure_keeps_prior_rows_without_status() {
    let store = MockStore::new();
    store.set_failing(true);
    let mut model = model_with_ports(2);
    let before = model.editor.table.clone();

    run(&mut model, &store, fetch());

    assert_eq!(model.editor.table, before);
    assert_eq!(model.ui.status_text(), "");
    assert!(!model.ui.is_loading);
}

#[test]
fn test_fetch_sets_loading_indicator_until_completion() {
    let mut model = AppModel::default();

    let cmd = cmd_for(&mut model, fetch());

    assert_eq!(cmd, Cmd::FetchAll);
    assert!(model.ui.is_loading);
    assert_eq!(
        model.ui.status_bar.segment_text(SegmentId::Busy),
        "Loading..."
    );
}

// ========================================================================
// Save
// ========================================================================

#[test]
fn test_save_puts_whole_table() {
    let store = MockStore::with_rows(vec![port_row(1, "A")]);
    let mut model = test_model(vec![port_row(1, "A")]);
    model.editor.edit_cell(0, Column::DischargePort, "B").unwrap();

    run(&mut model, &store, Msg::Remote(RemoteMsg::SaveAll));

    assert_eq!(store.calls(), vec![Call::SaveAll(1)]);
    assert_eq!(
        store.rows()[0].get(Column::DischargePort),
        &text("B")
    );
    assert_eq!(model.ui.status_text(), status::SAVE_OK);
    assert_eq!(model.editor.original_table, model.editor.table);
    assert!(!model.ui.is_saving);
}

#[test]
fn test_save_commits_pending_cell_edit_first() {
    let store = MockStore::new();
    let mut model = model_with_ports(1);
    model.ui.grid.start_editing("Typed".into());

    run(&mut model, &store, Msg::Remote(RemoteMsg::SaveAll));

    assert_eq!(
        store.rows()[0].get(Column::DischargePort),
        &text("Typed")
    );
}

#[test]
fn test_save_failure_sets_status_and_keeps_table() {
    let store = MockStore::new();
    store.set_failing(true);
    let mut model = model_with_ports(2);
    let before = model.editor.table.clone();

    run(&mut model, &store, Msg::Remote(RemoteMsg::SaveAll));

    assert_eq!(model.ui.status_text(), status::SAVE_FAILED);
    assert_eq!(model.editor.table, before);
    assert!(!model.ui.is_saving);
}

// ========================================================================
// Create
// ========================================================================

#[test]
fn test_create_posts_blank_row_then_refetches() {
    let store = MockStore::with_rows(vec![port_row(1, "A")]);
    let mut model = test_model(vec![port_row(1, "A")]);

    let cmd = cmd_for(&mut model, Msg::Remote(RemoteMsg::CreateRow));
    let Cmd::CreateRow { row } = cmd else {
        panic!("expected CreateRow, got {:?}", cmd);
    };
    assert_eq!(row, Row::blank());
    assert_eq!(row.get(Column::DischargePort), &text(""));
    assert_eq!(row.get(Column::PdmTotal), &CellValue::Null);

    run(&mut model, &store, Msg::Remote(RemoteMsg::CreateRow));

    assert_eq!(store.calls(), vec![Call::Create, Call::FetchAll]);
    assert_eq!(model.editor.row_count(), 2);
    assert_eq!(model.editor.table[1].id, Some(RowId::Number(2)));
    assert_eq!(model.ui.status_text(), status::CREATE_OK);
}

#[test]
fn test_create_failure_leaves_table_unchanged() {
    let store = MockStore::new();
    store.set_failing(true);
    let mut model = model_with_ports(2);
    let before = model.editor.table.clone();

    run(&mut model, &store, Msg::Remote(RemoteMsg::CreateRow));

    assert_eq!(model.ui.status_text(), status::CREATE_FAILED);
    assert_eq!(model.editor.table, before);
    // No refetch after a failure
    assert_eq!(store.calls(), vec![Call::Create]);
}

// ========================================================================
// Update
// ========================================================================

#[test]
fn test_update_focused_row_puts_it_by_id() {
    let store = MockStore::with_rows(vec![port_row(1, "A"), port_row(2, "B")]);
    let mut model = test_model(vec![port_row(1, "A"), port_row(2, "B")]);
    model.ui.grid.focus_cell(1, 3, 2);
    model.editor.edit_cell(1, Column::SevenIslandsSeca, "44").unwrap();

    run(&mut model, &store, Msg::Remote(RemoteMsg::UpdateFocusedRow));

    assert_eq!(
        store.calls(),
        vec![Call::Update(RowId::Number(2)), Call::FetchAll]
    );
    assert_eq!(
        model.editor.cell(1, Column::SevenIslandsSeca),
        Some(&text("44"))
    );
    assert_eq!(model.ui.status_text(), status::UPDATE_OK);
}

#[test]
fn test_update_commits_pending_edit_into_row() {
    let store = MockStore::with_rows(vec![port_row(1, "A")]);
    let mut model = test_model(vec![port_row(1, "A")]);
    update_typing(&mut model, "Santos");

    run(&mut model, &store, Msg::Remote(RemoteMsg::UpdateFocusedRow));

    assert_eq!(store.rows()[0].get(Column::DischargePort), &text("Santos"));
}

fn update_typing(model: &mut AppModel, s: &str) {
    for ch in s.chars() {
        costgrid::update::update(model, Msg::Grid(GridMsg::TypeChar(ch)));
    }
}

#[test]
fn test_update_row_without_id_is_refused() {
    let store = MockStore::new();
    let mut model = test_model(vec![Row::new().with(Column::DischargePort, text("New"))]);

    run(&mut model, &store, Msg::Remote(RemoteMsg::UpdateFocusedRow));

    assert!(store.calls().is_empty());
    assert_eq!(model.ui.status_text(), status::UPDATE_FAILED);
}

#[test]
fn test_update_failure_sets_status_without_refetch() {
    let store = MockStore::with_rows(vec![port_row(1, "A")]);
    store.set_failing(true);
    let mut model = test_model(vec![port_row(1, "A")]);

    run(
        &mut model,
        &store,
        Msg::Remote(RemoteMsg::UpdateRow {
            id: Some(RowId::Number(1)),
            row: port_row(1, "Z"),
        }),
    );

    assert_eq!(store.calls(), vec![Call::Update(RowId::Number(1))]);
    assert_eq!(model.ui.status_text(), status::UPDATE_FAILED);
}

// ========================================================================
// Delete
// ========================================================================

#[test]
fn test_delete_focused_row_then_refetch() {
    let store = MockStore::with_rows(vec![port_row(1, "A"), port_row(2, "B")]);
    let mut model = test_model(vec![port_row(1, "A"), port_row(2, "B")]);
    model.ui.grid.focus_cell(1, 0, 2);

    run(&mut model, &store, Msg::Remote(RemoteMsg::DeleteFocusedRow));

    assert_eq!(
        store.calls(),
        vec![Call::Delete(RowId::Number(2)), Call::FetchAll]
    );
    assert_eq!(model.editor.row_count(), 1);
    // Focus follows the shrunken table
    assert_eq!(model.ui.grid.focused.row, 0);
    assert_eq!(model.ui.status_text(), status::DELETE_OK);
}

#[test]
fn test_delete_commits_pending_edit_first() {
    let store = MockStore::with_rows(vec![port_row(1, "A"), port_row(2, "B")]);
    let mut model = test_model(vec![port_row(1, "A"), port_row(2, "B")]);
    update_typing(&mut model, "Typed");

    let cmd = cmd_for(&mut model, Msg::Remote(RemoteMsg::DeleteFocusedRow));

    assert_eq!(cmd, Cmd::DeleteRow { id: RowId::Number(1) });
    assert!(!model.ui.grid.is_editing());
    assert_eq!(
        model.editor.cell(0, Column::DischargePort),
        Some(&text("Typed"))
    );
    assert_eq!(model.editor.history.undo_len(), 1);
    assert!(store.calls().is_empty());
}

#[test]
fn test_delete_by_id_commits_edit_on_another_row() {
    let store = MockStore::with_rows(vec![port_row(1, "A"), port_row(2, "B")]);
    let mut model = test_model(vec![port_row(1, "A"), port_row(2, "B")]);
    update_typing(&mut model, "Kept");

    run(
        &mut model,
        &store,
        Msg::Remote(RemoteMsg::DeleteRow {
            id: Some(RowId::Number(2)),
        }),
    );

    // The local edit is applied before the refetch replaces the table
    assert_eq!(
        store.calls(),
        vec![Call::Delete(RowId::Number(2)), Call::FetchAll]
    );
    assert!(model.editor.history.can_undo());
    assert_eq!(model.editor.row_count(), 1);
}

#[test]
fn test_delete_by_text_id() {
    let row = Row::new().with_id(RowId::Text("abc/1".into()));
    let store = MockStore::with_rows(vec![row.clone()]);
    let mut model = test_model(vec![row]);

    run(
        &mut model,
        &store,
        Msg::Remote(RemoteMsg::DeleteRow {
            id: Some(RowId::Text("abc/1".into())),
        }),
    );

    assert_eq!(model.editor.row_count(), 0);
    assert_eq!(model.ui.status_text(), status::DELETE_OK);
}

#[test]
fn test_delete_failure_keeps_row() {
    let store = MockStore::with_rows(vec![port_row(1, "A")]);
    store.set_failing(true);
    let mut model = test_model(vec![port_row(1, "A")]);

    run(&mut model, &store, Msg::Remote(RemoteMsg::DeleteFocusedRow));

    assert_eq!(model.editor.row_count(), 1);
    assert_eq!(model.ui.status_text(), status::DELETE_FAILED);
}

#[test]
fn test_delete_row_without_id_is_refused() {
    let store = MockStore::new();
    let mut model = test_model(vec![Row::new()]);

    let cmd = cmd_for(&mut model, Msg::Remote(RemoteMsg::DeleteRow { id: None }));

    assert_eq!(cmd, Cmd::Redraw);
    assert!(store.calls().is_empty());
    assert_eq!(model.ui.status_text(), status::DELETE_FAILED);
}

#[test]
fn test_stale_selection_survives_refetch() {
    let store = MockStore::with_rows(vec![port_row(2, "B")]);
    let mut model = test_model(vec![port_row(1, "A"), port_row(2, "B")]);
    model.editor.select(1, Column::DischargePort, text("B"));

    run(&mut model, &store, fetch());

    let selection = model.editor.selection.as_ref().expect("selection kept");
    assert_eq!(selection.row, 1);
    assert_eq!(model.editor.row_count(), 1);
}
