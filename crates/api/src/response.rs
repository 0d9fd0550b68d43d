//! Shared response envelope types for API handlers.
//!
//! List endpoints wrap their rows under the plural resource name
//! (`{ "roles": [...] }`); deletes answer with a `{ "detail": ... }` message.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// `{ "<key>": [T, ...] }` envelope for list endpoints.
#[derive(Debug)]
pub struct ListResponse<T> {
    pub key: &'static str,
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(key: &'static str, items: Vec<T>) -> Self {
        Self { key, items }
    }
}

impl<T: Serialize> Serialize for ListResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.items)?;
        map.end()
    }
}

/// `{ "detail": "..." }` message body.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}
