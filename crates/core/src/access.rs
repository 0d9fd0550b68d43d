//! Access decision policy.
//!
//! The database side (`AccessRepo` in `rbac-db`) returns one row per
//! Assignment→Role→Authorization→Transaction path matching the requested
//! operation code. This module decides what those rows mean.

use crate::error::CoreError;
use crate::types::DbId;

/// Decide whether `user_id` may run `operation_code`, given the operation
/// codes of every permission path found for that user.
///
/// - no path: [`CoreError::IllegalAccess`]
/// - more than one path: [`CoreError::AmbiguousAuthorization`]; no
///   precedence rule is applied
/// - one path whose code differs from the request: [`CoreError::IllegalAccess`]
pub fn evaluate_grants<S: AsRef<str>>(
    user_id: DbId,
    operation_code: &str,
    granted_codes: &[S],
) -> Result<(), CoreError> {
    match granted_codes {
        [] => Err(CoreError::IllegalAccess {
            user_id,
            operation_code: operation_code.to_string(),
        }),
        [only] if only.as_ref() == operation_code => Ok(()),
        [other] => Err(CoreError::IllegalAccess {
            user_id,
            operation_code: other.as_ref().to_string(),
        }),
        _ => Err(CoreError::AmbiguousAuthorization {
            user_id,
            operation_code: operation_code.to_string(),
        }),
    }
}
