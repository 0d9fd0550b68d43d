//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row, with the shared
//!   [`audit::AuditFields`] flattened in
//! - An input struct holding the mutable columns, used for both insert and
//!   full-replace update
//! - The [`Entity`](crate::entity::Entity) metadata driving the generic repository

pub mod assignment;
pub mod audit;
pub mod authorization;
pub mod role;
pub mod transaction;
pub mod user;
