//! Rows, tables and snapshots
//!
//! A `Row` always holds every schema column. Fields the server sends that are
//! not part of the schema are carried along untouched so a save does not drop
//! them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::schema::{CellValue, Column, RowId, COLUMN_COUNT};

/// Wire name of the identifier field
pub const ID_FIELD: &str = "id";

/// One record of the cost table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Row {
    /// Server-assigned identifier (`None` until the row has been synced)
    pub id: Option<RowId>,
    cells: [CellValue; COLUMN_COUNT],
    /// Non-schema fields, already normalized
    extra: Map<String, Value>,
}

/// Ordered rows in display order
pub type Table = Vec<Row>;

/// Immutable full copy of a table, used as one undo/redo unit
pub type Snapshot = Table;

impl Row {
    /// Row with every column empty and no identifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Row sent by "Create Row": discharge port is an empty string, every
    /// cost column is null
    pub fn blank() -> Self {
        let mut row = Self::new();
        row.set(Column::DischargePort, CellValue::Text(String::new()));
        row
    }

    /// Build a row from a raw server object, normalizing falsy values to null
    pub fn from_raw(raw: Map<String, Value>) -> Self {
        let mut row = Self::new();
        for (key, value) in raw {
            if key == ID_FIELD {
                row.id = RowId::from_json(&value);
            } else if let Some(col) = Column::from_name(&key) {
                row.cells[col.index()] = CellValue::from_json(&value);
            } else {
                let kept = if CellValue::from_json(&value).is_null() {
                    Value::Null
                } else {
                    value
                };
                row.extra.insert(key, kept);
            }
        }
        row
    }

    /// Builder: set the identifier
    pub fn with_id(mut self, id: RowId) -> Self {
        self.id = Some(id);
        self
    }

    /// Builder: set one cell
    pub fn with(mut self, column: Column, value: CellValue) -> Self {
        self.set(column, value);
        self
    }

    pub fn get(&self, column: Column) -> &CellValue {
        &self.cells[column.index()]
    }

    pub fn set(&mut self, column: Column, value: CellValue) {
        self.cells[column.index()] = value;
    }

    /// Iterate over (column, value) pairs in display order
    pub fn cells(&self) -> impl Iterator<Item = (Column, &CellValue)> {
        Column::ALL.iter().copied().zip(self.cells.iter())
    }

    /// Non-schema fields received from the server
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// JSON object sent to the remote store
    pub fn to_json(&self) -> Map<String, Value> {
        let mut map = Map::new();
        if let Some(id) = &self.id {
            map.insert(ID_FIELD.to_string(), id.to_json());
        }
        for (col, value) in self.cells() {
            map.insert(col.name().to_string(), value.to_json());
        }
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        map
    }
}

impl From<Map<String, Value>> for Row {
    fn from(raw: Map<String, Value>) -> Self {
        Row::from_raw(raw)
    }
}

impl From<Row> for Map<String, Value> {
    fn from(row: Row) -> Self {
        row.to_json()
    }
}
