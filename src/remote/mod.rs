//! Remote store for cost rows
//!
//! The store is a plain collection resource:
//!
//! | call         | request            | body        |
//! |--------------|--------------------|-------------|
//! | `fetch_all`  | `GET /data`        | none        |
//! | `save_all`   | `PUT /data`        | row array   |
//! | `create_row` | `POST /data`       | one row     |
//! | `update_row` | `PUT /data/{id}`   | one row     |
//! | `delete_row` | `DELETE /data/{id}`| none        |
//!
//! Any transport failure or non-2xx status is an error.

mod error;
mod http;

pub use error::RemoteError;
pub use http::{decode_rows, HttpStore};

use crate::model::{Row, RowId, Table};

/// Access to the remote collection of rows
///
/// Implementations are shared with worker threads, hence `Send + Sync`.
pub trait RemoteStore: Send + Sync {
    /// Fetch every row, normalized to the column schema
    fn fetch_all(&self) -> Result<Table, RemoteError>;

    /// Replace the whole collection
    fn save_all(&self, rows: &[Row]) -> Result<(), RemoteError>;

    /// Add one row
    fn create_row(&self, row: &Row) -> Result<(), RemoteError>;

    /// Replace the row with the given identifier
    fn update_row(&self, id: &RowId, row: &Row) -> Result<(), RemoteError>;

    /// Remove the row with the given identifier
    fn delete_row(&self, id: &RowId) -> Result<(), RemoteError>;
}
