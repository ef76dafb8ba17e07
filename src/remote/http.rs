//! HTTP+JSON implementation of the remote store.
//!
//! Blocking reqwest client (no async runtime required); calls are made from
//! worker threads so the UI loop never waits on the network.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::{Method, Url};
use serde_json::Value;

use super::{RemoteError, RemoteStore};
use crate::model::{Row, RowId, Table};

/// Name of the collection resource under the base URL
const RESOURCE: &str = "data";

/// Remote store client for `{base}/data`
#[derive(Debug, Clone)]
pub struct HttpStore {
    http: Client,
    base: Url,
}

impl HttpStore {
    /// Create a client for `base_url` with the given request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let trimmed = base_url.trim_end_matches('/');
        let base = Url::parse(trimmed).map_err(|e| RemoteError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(RemoteError::InvalidUrl {
                url: base_url.to_string(),
                reason: "not a hierarchical URL".to_string(),
            });
        }

        let http = Client::builder()
            .user_agent(format!("costgrid/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `{base}/data`
    pub fn collection_url(&self) -> Url {
        self.url_with(&[RESOURCE])
    }

    /// `{base}/data/{id}`, with the id percent-encoded as one path segment
    pub fn item_url(&self, id: &RowId) -> Url {
        let id = id.to_string();
        self.url_with(&[RESOURCE, &id])
    }

    fn url_with(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
    ) -> Result<Response, RemoteError> {
        tracing::debug!("{} {}", method, url);
        let mut request = self.http.request(method, url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

/// Decode a `GET /data` body into rows
pub fn decode_rows(body: &str) -> Result<Table, RemoteError> {
    let raw: Vec<Value> =
        serde_json::from_str(body).map_err(|e| RemoteError::Decode(e.to_string()))?;

    raw.into_iter()
        .enumerate()
        .map(|(i, value)| match value {
            Value::Object(map) => Ok(Row::from_raw(map)),
            other => Err(RemoteError::Decode(format!(
                "element {} is not an object: {}",
                i, other
            ))),
        })
        .collect()
}

impl RemoteStore for HttpStore {
    fn fetch_all(&self) -> Result<Table, RemoteError> {
        let response = self.send(Method::GET, self.collection_url(), None)?;
        let body = response.text()?;
        decode_rows(&body)
    }

    fn save_all(&self, rows: &[Row]) -> Result<(), RemoteError> {
        let body = Value::Array(rows.iter().map(|r| Value::Object(r.to_json())).collect());
        self.send(Method::PUT, self.collection_url(), Some(&body))?;
        Ok(())
    }

    fn create_row(&self, row: &Row) -> Result<(), RemoteError> {
        let body = Value::Object(row.to_json());
        self.send(Method::POST, self.collection_url(), Some(&body))?;
        Ok(())
    }

    fn update_row(&self, id: &RowId, row: &Row) -> Result<(), RemoteError> {
        let body = Value::Object(row.to_json());
        self.send(Method::PUT, self.item_url(id), Some(&body))?;
        Ok(())
    }

    fn delete_row(&self, id: &RowId) -> Result<(), RemoteError> {
        self.send(Method::DELETE, self.item_url(id), None)?;
        Ok(())
    }
}
