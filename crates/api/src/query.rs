//! Query-string parsing for list endpoints.
//!
//! `skip` and `limit` drive pagination; every other key is a column filter
//! validated later against the entity's filterable columns.

use std::collections::HashMap;

use rbac_core::error::CoreError;
use rbac_core::pagination::Page;

/// Parsed `?skip=&limit=&<column>=` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: Page,
    /// Column filters, sorted by column name so generated SQL is stable.
    pub filters: Vec<(String, String)>,
}

impl ListParams {
    pub fn from_query(mut params: HashMap<String, String>) -> Result<Self, CoreError> {
        let skip = parse_i64(params.remove("skip"), "skip")?;
        let limit = parse_i64(params.remove("limit"), "limit")?;

        let mut filters: Vec<_> = params.into_iter().collect();
        filters.sort();

        Ok(Self {
            page: Page::new(skip, limit),
            filters,
        })
    }
}

fn parse_i64(raw: Option<String>, name: &str) -> Result<Option<i64>, CoreError> {
    raw.map(|v| {
        v.parse()
            .map_err(|_| CoreError::Validation(format!("{name} must be an integer")))
    })
    .transpose()
}
