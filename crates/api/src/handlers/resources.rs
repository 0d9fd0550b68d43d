//! Resources whose payload is exactly their entity input.

use rbac_db::models::assignment::{Assignment, AssignmentInput};
use rbac_db::models::authorization::{Authorization, AuthorizationInput};
use rbac_db::models::role::{Role, RoleInput};
use rbac_db::models::transaction::{Transaction, TransactionInput};

use super::crud::CrudResource;
use crate::error::AppResult;
use crate::middleware::rbac::*;

macro_rules! passthrough_resource {
    (
        $resource:ident {
            entity: $entity:ty,
            input: $input:ty,
            path: $path:literal,
            ops: [$create:ty, $update:ty, $list:ty, $delete:ty, $get:ty $(,)?] $(,)?
        }
    ) => {
        pub struct $resource;

        impl CrudResource for $resource {
            type Entity = $entity;
            type Payload = $input;
            type Response = $entity;

            const PATH: &'static str = $path;

            type Create = $create;
            type Update = $update;
            type List = $list;
            type Delete = $delete;
            type Get = $get;

            fn into_input(payload: $input) -> AppResult<$input> {
                Ok(payload)
            }

            fn to_response(entity: $entity) -> $entity {
                entity
            }
        }
    };
}

passthrough_resource!(Roles {
    entity: Role,
    input: RoleInput,
    path: "roles",
    ops: [CreateRole, UpdateRole, ListRoles, DeleteRole, GetRole],
});

passthrough_resource!(Transactions {
    entity: Transaction,
    input: TransactionInput,
    path: "transactions",
    ops: [
        CreateTransaction,
        UpdateTransaction,
        ListTransactions,
        DeleteTransaction,
        GetTransaction,
    ],
});

passthrough_resource!(Assignments {
    entity: Assignment,
    input: AssignmentInput,
    path: "assignments",
    ops: [
        CreateAssignment,
        UpdateAssignment,
        ListAssignments,
        DeleteAssignment,
        GetAssignment,
    ],
});

passthrough_resource!(Authorizations {
    entity: Authorization,
    input: AuthorizationInput,
    path: "authorizations",
    ops: [
        CreateAuthorization,
        UpdateAuthorization,
        ListAuthorizations,
        DeleteAuthorization,
        GetAuthorization,
    ],
});
