//! Startup creation of the first administrator.
//!
//! Every endpoint except token issuance requires an authorized caller, so a
//! fresh database needs one user holding the seeded administrator role.

use rbac_core::error::CoreError;
use rbac_core::operations::ADMINISTRATOR_ROLE;
use rbac_core::pagination::Page;
use rbac_db::models::assignment::{Assignment, AssignmentInput};
use rbac_db::models::audit::AuditStamp;
use rbac_db::models::role::Role;
use rbac_db::models::user::{User, UserInput};
use rbac_db::repositories::{CrudRepo, UserRepo};
use sqlx::PgPool;

use crate::auth::password::hash_password;
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

/// Create the configured administrator unless the username already exists.
///
/// Returns the created user, or `None` when nothing was done.
pub async fn ensure_admin(pool: &PgPool, admin: &BootstrapAdmin) -> AppResult<Option<User>> {
    if UserRepo::find_by_username(pool, &admin.username)
        .await?
        .is_some()
    {
        tracing::debug!(username = %admin.username, "Bootstrap admin already exists");
        return Ok(None);
    }

    let stamp = AuditStamp::system();
    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let input = UserInput {
        username: admin.username.clone(),
        email: admin.email.clone(),
        password_hash,
        display_name: admin.display_name.clone(),
    };

    // The user and its role assignment land together or not at all.
    let mut tx = pool.begin().await?;
    let user = CrudRepo::<User>::save(&mut *tx, &input, &stamp).await?;
    let role = find_administrator_role(pool).await?;
    CrudRepo::<Assignment>::save(
        &mut *tx,
        &AssignmentInput {
            user_id: user.id,
            role_id: role.id,
        },
        &stamp,
    )
    .await?;
    tx.commit().await?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap admin created");
    Ok(Some(user))
}

async fn find_administrator_role(pool: &PgPool) -> AppResult<Role> {
    let filter = [("name".to_string(), ADMINISTRATOR_ROLE.to_string())];
    CrudRepo::<Role>::get_all(pool, Page::default(), &filter)
        .await?
        .into_iter()
        .find(|role| role.name == ADMINISTRATOR_ROLE)
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "Role '{ADMINISTRATOR_ROLE}' is missing; was the seed migration applied?"
            )))
        })
}
