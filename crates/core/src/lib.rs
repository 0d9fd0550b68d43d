//! Domain layer for the RBAC backend.
//!
//! Holds everything that does not touch the network or the database: shared
//! id/timestamp types, the error taxonomy, the operation-code catalogue, the
//! access decision policy and input validators.

pub mod access;
pub mod error;
pub mod operations;
pub mod pagination;
pub mod types;
pub mod validation;
