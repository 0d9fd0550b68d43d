//! Queries over the user -> role -> transaction permission graph.

use rbac_core::types::DbId;
use sqlx::PgPool;

use crate::models::transaction::Transaction;

/// Transaction columns qualified with the `t` alias used by the joins below.
const T_COLUMNS: &str = "t.id, t.name, t.description, t.operation_code, \
    t.audit_user_login, t.audit_user_ip, t.audit_created_at, t.audit_updated_at";

/// Resolves which transactions a user reaches through
/// Assignment -> Role -> Authorization.
pub struct AccessRepo;

impl AccessRepo {
    /// Every path from `user_id` to the transaction `operation_code`.
    ///
    /// One row is returned per path, so a user holding two roles that both
    /// authorize the code gets two rows. Callers decide what that means.
    pub async fn authorized_transactions(
        pool: &PgPool,
        user_id: DbId,
        operation_code: &str,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let query = format!(
            "SELECT {T_COLUMNS}
             FROM transactions t
             JOIN authorizations az ON az.transaction_id = t.id
             JOIN roles r ON r.id = az.role_id
             JOIN assignments a ON a.role_id = r.id
             WHERE a.user_id = $1 AND t.operation_code = $2"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(user_id)
            .bind(operation_code)
            .fetch_all(pool)
            .await
    }

    /// Distinct transactions reachable by `user_id`, ordered by operation code.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let query = format!(
            "SELECT DISTINCT {T_COLUMNS}
             FROM transactions t
             JOIN authorizations az ON az.transaction_id = t.id
             JOIN assignments a ON a.role_id = az.role_id
             WHERE a.user_id = $1
             ORDER BY t.operation_code"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
