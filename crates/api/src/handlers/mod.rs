pub mod auth;
pub mod crud;
pub mod resources;
pub mod users;
