//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. [`CrudRepo`] covers the
//! get/list/save/update/delete contract for every [`Entity`]; the other
//! repositories hold the queries that do not fit it.
//!
//! [`Entity`]: crate::entity::Entity

pub mod access_repo;
pub mod crud_repo;
pub mod user_repo;

pub use access_repo::AccessRepo;
pub use crud_repo::CrudRepo;
pub use user_repo::UserRepo;
