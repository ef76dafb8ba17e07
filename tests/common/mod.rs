//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use costgrid::commands::Cmd;
use costgrid::config::EditorConfig;
use costgrid::effects;
use costgrid::messages::Msg;
use costgrid::model::{AppModel, CellValue, Column, Row, RowId, Table};
use costgrid::remote::{RemoteError, RemoteStore};
use costgrid::update::update;

/// Text cell value
pub fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

/// Row with an id and a discharge port
pub fn port_row(id: i64, port: &str) -> Row {
    Row::new()
        .with_id(RowId::Number(id))
        .with(Column::DischargePort, text(port))
}

/// Model holding the given rows with a grid viewport already sized
pub fn test_model(rows: Table) -> AppModel {
    let mut model = AppModel::with_rows(EditorConfig::default(), rows);
    model.resize(120, 20);
    model
}

/// Model with `n` rows named "Port 1".."Port n"
pub fn model_with_ports(n: usize) -> AppModel {
    test_model(
        (1..=n)
            .map(|i| port_row(i as i64, &format!("Port {}", i)))
            .collect(),
    )
}

/// Call log entry recorded by `MockStore`
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchAll,
    SaveAll(usize),
    Create,
    Update(RowId),
    Delete(RowId),
}

/// In-memory `RemoteStore` that can be told to fail
#[derive(Default)]
pub struct MockStore {
    rows: Mutex<Table>,
    calls: Mutex<Vec<Call>>,
    fail: AtomicBool,
    next_id: AtomicI64,
}

impl MockStore {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Table) -> Self {
        let next_id = rows
            .iter()
            .filter_map(|r| match r.id {
                Some(RowId::Number(n)) => Some(n),
                _ => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            rows: Mutex::new(rows),
            calls: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
            next_id: AtomicI64::new(next_id),
        }
    }

    /// Make every following call fail with HTTP 500
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn rows(&self) -> Table {
        self.rows.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), RemoteError> {
        self.calls.lock().unwrap().push(call);
        if self.fail.load(Ordering::SeqCst) {
            Err(RemoteError::Status {
                status: 500,
                url: "mock://data".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn position(rows: &Table, id: &RowId) -> Result<usize, RemoteError> {
        rows.iter()
            .position(|r| r.id.as_ref() == Some(id))
            .ok_or(RemoteError::Status {
                status: 404,
                url: format!("mock://data/{}", id),
            })
    }
}

impl RemoteStore for MockStore {
    fn fetch_all(&self) -> Result<Table, RemoteError> {
        self.record(Call::FetchAll)?;
        Ok(self.rows())
    }

    fn save_all(&self, rows: &[Row]) -> Result<(), RemoteError> {
        self.record(Call::SaveAll(rows.len()))?;
        *self.rows.lock().unwrap() = rows.to_vec();
        Ok(())
    }

    fn create_row(&self, row: &Row) -> Result<(), RemoteError> {
        self.record(Call::Create)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .push(row.clone().with_id(RowId::Number(id)));
        Ok(())
    }

    fn update_row(&self, id: &RowId, row: &Row) -> Result<(), RemoteError> {
        self.record(Call::Update(id.clone()))?;
        let mut rows = self.rows.lock().unwrap();
        let idx = Self::position(&rows, id)?;
        rows[idx] = row.clone().with_id(id.clone());
        Ok(())
    }

    fn delete_row(&self, id: &RowId) -> Result<(), RemoteError> {
        self.record(Call::Delete(id.clone()))?;
        let mut rows = self.rows.lock().unwrap();
        let idx = Self::position(&rows, id)?;
        rows.remove(idx);
        Ok(())
    }
}

/// Apply a message and run every resulting remote command synchronously
/// against `store`, feeding completions back until the model settles
pub fn run(model: &mut AppModel, store: &MockStore, msg: Msg) {
    let mut queue = vec![msg];
    while let Some(msg) = queue.pop() {
        let Some(cmd) = update(model, msg) else {
            continue;
        };
        for cmd in effects::flatten(cmd) {
            if let Some(done) = effects::perform(store, cmd) {
                queue.push(done);
            }
        }
    }
}

/// Command produced by a message, without executing it
pub fn cmd_for(model: &mut AppModel, msg: Msg) -> Cmd {
    update(model, msg).into()
}
