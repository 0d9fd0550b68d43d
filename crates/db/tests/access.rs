//! Integration tests for the permission-graph queries in `AccessRepo`.

use assert_matches::assert_matches;
use rbac_core::access::evaluate_grants;
use rbac_core::error::CoreError;
use rbac_core::operations;
use rbac_db::models::assignment::{Assignment, AssignmentInput};
use rbac_db::models::audit::AuditStamp;
use rbac_db::models::authorization::{Authorization, AuthorizationInput};
use rbac_db::models::role::{Role, RoleInput};
use rbac_db::models::transaction::{Transaction, TransactionInput};
use rbac_db::models::user::{User, UserInput};
use rbac_db::repositories::{AccessRepo, CrudRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn stamp() -> AuditStamp {
    AuditStamp::system()
}

async fn create_user(pool: &PgPool, username: &str) -> User {
    let input = UserInput {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "not-a-real-hash".to_string(),
        display_name: username.to_string(),
    };
    CrudRepo::<User>::save(pool, &input, &stamp()).await.unwrap()
}

async fn create_role(pool: &PgPool, name: &str) -> Role {
    let input = RoleInput {
        name: name.to_string(),
        description: String::new(),
    };
    CrudRepo::<Role>::save(pool, &input, &stamp()).await.unwrap()
}

async fn create_transaction(pool: &PgPool, code: &str) -> Transaction {
    let input = TransactionInput {
        name: format!("Operation {code}"),
        description: String::new(),
        operation_code: code.to_string(),
    };
    CrudRepo::<Transaction>::save(pool, &input, &stamp())
        .await
        .unwrap()
}

async fn assign(pool: &PgPool, user: &User, role: &Role) {
    let input = AssignmentInput {
        user_id: user.id,
        role_id: role.id,
    };
    CrudRepo::<Assignment>::save(pool, &input, &stamp())
        .await
        .unwrap();
}

async fn authorize(pool: &PgPool, role: &Role, transaction: &Transaction) {
    let input = AuthorizationInput {
        role_id: role.id,
        transaction_id: transaction.id,
    };
    CrudRepo::<Authorization>::save(pool, &input, &stamp())
        .await
        .unwrap();
}

async fn check(pool: &PgPool, user: &User, code: &str) -> Result<(), CoreError> {
    let rows = AccessRepo::authorized_transactions(pool, user.id, code)
        .await
        .unwrap();
    let codes: Vec<_> = rows.into_iter().map(|t| t.operation_code).collect();
    evaluate_grants(user.id, code, &codes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_single_path_grants_and_other_code_denies(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    let editor = create_role(&pool, "editor").await;
    let op = create_transaction(&pool, "OP_100").await;
    create_transaction(&pool, "OP_999").await;
    assign(&pool, &alice, &editor).await;
    authorize(&pool, &editor, &op).await;

    assert!(check(&pool, &alice, "OP_100").await.is_ok());
    assert_matches!(
        check(&pool, &alice, "OP_999").await,
        Err(CoreError::IllegalAccess { .. })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_without_roles_has_no_paths(pool: PgPool) {
    let loner = create_user(&pool, "loner").await;

    let rows = AccessRepo::authorized_transactions(&pool, loner.id, operations::role::LIST)
        .await
        .unwrap();
    assert!(rows.is_empty());
    assert_matches!(
        check(&pool, &loner, operations::role::LIST).await,
        Err(CoreError::IllegalAccess { .. })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_two_roles_granting_same_code_is_ambiguous(pool: PgPool) {
    let dave = create_user(&pool, "dave").await;
    let editor = create_role(&pool, "editor").await;
    let publisher = create_role(&pool, "publisher").await;
    let op = create_transaction(&pool, "OP_200").await;
    assign(&pool, &dave, &editor).await;
    assign(&pool, &dave, &publisher).await;
    authorize(&pool, &editor, &op).await;
    authorize(&pool, &publisher, &op).await;

    let rows = AccessRepo::authorized_transactions(&pool, dave.id, "OP_200")
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_matches!(
        check(&pool, &dave, "OP_200").await,
        Err(CoreError::AmbiguousAuthorization { .. })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_assignment_is_ambiguous(pool: PgPool) {
    let erin = create_user(&pool, "erin").await;
    let editor = create_role(&pool, "editor").await;
    let op = create_transaction(&pool, "OP_300").await;
    assign(&pool, &erin, &editor).await;
    assign(&pool, &erin, &editor).await;
    authorize(&pool, &editor, &op).await;

    assert_matches!(
        check(&pool, &erin, "OP_300").await,
        Err(CoreError::AmbiguousAuthorization { .. })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_administrator_role_covers_catalogue(pool: PgPool) {
    let admin = create_user(&pool, "root").await;
    let roles = CrudRepo::<Role>::get_all(
        &pool,
        Default::default(),
        &[("name".to_string(), operations::ADMINISTRATOR_ROLE.to_string())],
    )
    .await
    .unwrap();
    assign(&pool, &admin, &roles[0]).await;

    for code in operations::ALL {
        assert!(check(&pool, &admin, code).await.is_ok(), "denied {code}");
    }

    let listed = AccessRepo::list_for_user(&pool, admin.id).await.unwrap();
    let codes: Vec<_> = listed.iter().map(|t| t.operation_code.as_str()).collect();
    let mut expected = operations::ALL.to_vec();
    expected.sort_unstable();
    assert_eq!(codes, expected);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_user_deduplicates_paths(pool: PgPool) {
    let frank = create_user(&pool, "frank").await;
    let a = create_role(&pool, "role-a").await;
    let b = create_role(&pool, "role-b").await;
    let shared = create_transaction(&pool, "OP_B").await;
    let only_a = create_transaction(&pool, "OP_A").await;
    assign(&pool, &frank, &a).await;
    assign(&pool, &frank, &b).await;
    authorize(&pool, &a, &shared).await;
    authorize(&pool, &b, &shared).await;
    authorize(&pool, &a, &only_a).await;

    let listed = AccessRepo::list_for_user(&pool, frank.id).await.unwrap();
    let codes: Vec<_> = listed.iter().map(|t| t.operation_code.as_str()).collect();
    assert_eq!(codes, vec!["OP_A", "OP_B"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_username(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;

    let found = UserRepo::find_by_username(&pool, "alice").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(alice.id));

    let missing = UserRepo::find_by_username(&pool, "Alice").await.unwrap();
    assert!(missing.is_none());
}
