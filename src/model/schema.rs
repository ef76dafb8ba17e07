//! Fixed column schema and cell values for shipping-cost rows
//!
//! Every row carries the same 19 editable columns: the discharge port plus
//! Total/IFO/SECA cost figures for six load ports.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One of the fixed, editable columns of the cost table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    DischargePort,
    SevenIslandsTotal,
    SevenIslandsIfo,
    SevenIslandsSeca,
    BaltimoreTotal,
    BaltimoreIfo,
    BaltimoreSeca,
    PortCartierTotal,
    PortCartierIfo,
    PortCartierSeca,
    TubaraoTotal,
    TubaraoIfo,
    TubaraoSeca,
    PdmTotal,
    PdmIfo,
    PdmSeca,
    MurmanskTotal,
    MurmanskIfo,
    MurmanskSeca,
}

/// Number of editable columns
pub const COLUMN_COUNT: usize = 19;

impl Column {
    /// All columns in display order
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::DischargePort,
        Column::SevenIslandsTotal,
        Column::SevenIslandsIfo,
        Column::SevenIslandsSeca,
        Column::BaltimoreTotal,
        Column::BaltimoreIfo,
        Column::BaltimoreSeca,
        Column::PortCartierTotal,
        Column::PortCartierIfo,
        Column::PortCartierSeca,
        Column::TubaraoTotal,
        Column::TubaraoIfo,
        Column::TubaraoSeca,
        Column::PdmTotal,
        Column::PdmIfo,
        Column::PdmSeca,
        Column::MurmanskTotal,
        Column::MurmanskIfo,
        Column::MurmanskSeca,
    ];

    /// Field name used on the wire and in the header row
    pub fn name(self) -> &'static str {
        match self {
            Column::DischargePort => "DischargePort",
            Column::SevenIslandsTotal => "SevenIslandsTotal",
            Column::SevenIslandsIfo => "SevenIslandsIFO",
            Column::SevenIslandsSeca => "SevenIslandsSECA",
            Column::BaltimoreTotal => "BaltimoreTotal",
            Column::BaltimoreIfo => "BaltimoreIFO",
            Column::BaltimoreSeca => "BaltimoreSECA",
            Column::PortCartierTotal => "PortCartierTotal",
            Column::PortCartierIfo => "PortCartierIFO",
            Column::PortCartierSeca => "PortCartierSECA",
            Column::TubaraoTotal => "TubaraoTotal",
            Column::TubaraoIfo => "TubaraoIFO",
            Column::TubaraoSeca => "TubaraoSECA",
            Column::PdmTotal => "PDMTotal",
            Column::PdmIfo => "PDMIFO",
            Column::PdmSeca => "PDMSECA",
            Column::MurmanskTotal => "MurmanskTotal",
            Column::MurmanskIfo => "MurmanskIFO",
            Column::MurmanskSeca => "MurmanskSECA",
        }
    }

    /// Look up a column by its wire name
    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Position of this column in display order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column at a display position
    pub fn from_index(index: usize) -> Option<Column> {
        Column::ALL.get(index).copied()
    }

    /// Whether the column holds free text rather than a cost figure
    pub fn is_text(self) -> bool {
        matches!(self, Column::DischargePort)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value held by one cell
///
/// `Null` is the "empty" cell. Values typed by the user are stored as text;
/// numbers only appear when they come from the server.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Null,
    Text(String),
    Number(serde_json::Number),
}

impl CellValue {
    /// Normalize a raw JSON value: absent or falsy values become `Null`
    ///
    /// Falsy means `null`, `false`, `0` and `""`. Arrays and objects are
    /// kept as their JSON text.
    pub fn from_json(value: &Value) -> CellValue {
        match value {
            Value::Null | Value::Bool(false) => CellValue::Null,
            Value::Bool(true) => CellValue::Text("true".to_string()),
            Value::Number(n) => {
                if n.as_f64() == Some(0.0) {
                    CellValue::Null
                } else {
                    CellValue::Number(n.clone())
                }
            }
            Value::String(s) if s.is_empty() => CellValue::Null,
            Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }

    /// Value written by the user: blank input becomes `Null`
    pub fn from_input(raw: &str) -> CellValue {
        if raw.trim().is_empty() {
            CellValue::Null
        } else {
            CellValue::Text(raw.to_string())
        }
    }

    /// JSON representation sent to the remote store
    pub fn to_json(&self) -> Value {
        match self {
            CellValue::Null => Value::Null,
            CellValue::Text(s) => Value::String(s.clone()),
            CellValue::Number(n) => Value::Number(n.clone()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Text shown in the grid and used as edit/paste input
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// Server-assigned row identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Number(i64),
    Text(String),
}

impl RowId {
    /// Extract an identifier from a raw JSON value (falsy values yield `None`)
    pub fn from_json(value: &Value) -> Option<RowId> {
        match value {
            Value::Number(n) => n.as_i64().filter(|v| *v != 0).map(RowId::Number),
            Value::String(s) if !s.is_empty() => Some(RowId::Text(s.clone())),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            RowId::Number(n) => Value::from(*n),
            RowId::Text(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Number(n) => write!(f, "{}", n),
            RowId::Text(s) => f.write_str(s),
        }
    }
}
