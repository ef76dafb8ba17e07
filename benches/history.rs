//! Benchmarks for snapshot history and table editing
//!
//! Run with: cargo bench history

use costgrid::model::{CellValue, Column, EditorState, Row, RowId, Table};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn make_table(rows: usize) -> Table {
    (0..rows)
        .map(|i| {
            Row::new()
                .with_id(RowId::Number(i as i64))
                .with(Column::DischargePort, CellValue::Text(format!("Port {}", i)))
                .with(Column::SevenIslandsTotal, CellValue::Text("12.5".into()))
                .with(Column::TubaraoIfo, CellValue::Text("480".into()))
        })
        .collect()
}

// ============================================================================
// Editing (each edit snapshots the whole table)
// ============================================================================

#[divan::bench(args = [100, 1000])]
fn edit_cell(bencher: divan::Bencher, rows: usize) {
    bencher
        .with_inputs(|| EditorState::with_rows(make_table(rows)))
        .bench_local_refs(|editor| {
            let _ = editor.edit_cell(rows / 2, Column::PdmTotal, divan::black_box("99"));
        });
}

#[divan::bench(args = [100, 1000])]
fn edit_cell_50_times(bencher: divan::Bencher, rows: usize) {
    bencher
        .with_inputs(|| EditorState::with_rows(make_table(rows)))
        .bench_local_refs(|editor| {
            for i in 0..50 {
                let _ = editor.edit_cell(i % rows, Column::BaltimoreSeca, "7");
            }
        });
}

// ============================================================================
// Undo / redo
// ============================================================================

fn edited(rows: usize, edits: usize) -> EditorState {
    let mut editor = EditorState::with_rows(make_table(rows));
    for i in 0..edits {
        let _ = editor.edit_cell(i % rows, Column::MurmanskIfo, &i.to_string());
    }
    editor
}

#[divan::bench(args = [100, 1000])]
fn undo_all_20(bencher: divan::Bencher, rows: usize) {
    bencher
        .with_inputs(|| edited(rows, 20))
        .bench_local_refs(|editor| while editor.undo() {});
}

#[divan::bench(args = [100, 1000])]
fn undo_then_redo_20(bencher: divan::Bencher, rows: usize) {
    bencher
        .with_inputs(|| edited(rows, 20))
        .bench_local_refs(|editor| {
            while editor.undo() {}
            while editor.redo() {}
        });
}

// ============================================================================
// Clipboard
// ============================================================================

#[divan::bench]
fn copy_paste_1000_rows(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| {
            let mut editor = EditorState::with_rows(make_table(1000));
            editor.select(0, Column::DischargePort, CellValue::Text("Port 0".into()));
            editor.copy();
            editor.select(999, Column::DischargePort, CellValue::Text("Port 999".into()));
            editor
        })
        .bench_local_refs(|editor| {
            let _ = editor.paste();
        });
}
