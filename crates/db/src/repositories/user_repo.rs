//! User lookups that fall outside the generic CRUD contract.

use sqlx::PgPool;

use crate::entity::Entity;
use crate::models::user::User;

/// Provides credential-related queries on the `users` table.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {} FROM users WHERE username = $1", User::COLUMNS);
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }
}
