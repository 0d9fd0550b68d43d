//! Offset/limit pagination shared by every list endpoint.

/// Page size used when the caller does not pass `limit`.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Largest page a caller may request.
pub const MAX_LIST_LIMIT: i64 = 1000;

/// A clamped `skip`/`limit` pair ready to be bound into `OFFSET`/`LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Page {
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            skip: clamp_offset(skip),
            limit: clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
