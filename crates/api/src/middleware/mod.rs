//! Authentication and authorization extractors.
//!
//! - [`auth::resolve_caller`] -- Resolves the caller from a JWT Bearer token.
//! - [`rbac::RequireOperation`] -- Requires the caller to hold exactly one
//!   grant for an operation code.
//! - [`client_ip::ClientIp`] -- Caller address recorded in audit columns.
//! - [`timing::process_time`] -- `X-Process-Time` response header.

pub mod auth;
pub mod client_ip;
pub mod rbac;
pub mod timing;
