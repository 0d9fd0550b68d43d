//! Operation-code catalogue.
//!
//! Every guarded endpoint is identified by a seven-character code built from
//! a four-digit resource prefix and a three-digit verb suffix. These must
//! match the seed data in `20240601000006_seed_transactions.sql`.

/// Maximum length of an operation code (column is `VARCHAR(7)`).
pub const MAX_OPERATION_CODE_LEN: usize = 7;

pub mod assignment {
    pub const CREATE: &str = "1010001";
    pub const UPDATE: &str = "1010002";
    pub const LIST: &str = "1010003";
    pub const DELETE: &str = "1010004";
    pub const GET: &str = "1010005";
}

pub mod authorization {
    pub const CREATE: &str = "1020001";
    pub const UPDATE: &str = "1020002";
    pub const LIST: &str = "1020003";
    pub const DELETE: &str = "1020004";
    pub const GET: &str = "1020005";
}

pub mod transaction {
    pub const CREATE: &str = "1030001";
    pub const UPDATE: &str = "1030002";
    pub const LIST: &str = "1030003";
    pub const DELETE: &str = "1030004";
    pub const GET: &str = "1030005";
}

pub mod user {
    pub const CREATE: &str = "1040001";
    pub const UPDATE: &str = "1040002";
    pub const LIST: &str = "1040003";
    pub const DELETE: &str = "1040004";
    pub const GET: &str = "1040005";
    /// List the transactions a given user is authorized for.
    pub const LIST_TRANSACTIONS: &str = "1040006";
}

pub mod role {
    pub const CREATE: &str = "1050001";
    pub const UPDATE: &str = "1050002";
    pub const LIST: &str = "1050003";
    pub const DELETE: &str = "1050004";
    pub const GET: &str = "1050005";
}

/// Every operation code known to the API, in seed order.
pub const ALL: [&str; 26] = [
    assignment::CREATE,
    assignment::UPDATE,
    assignment::LIST,
    assignment::DELETE,
    assignment::GET,
    authorization::CREATE,
    authorization::UPDATE,
    authorization::LIST,
    authorization::DELETE,
    authorization::GET,
    transaction::CREATE,
    transaction::UPDATE,
    transaction::LIST,
    transaction::DELETE,
    transaction::GET,
    user::CREATE,
    user::UPDATE,
    user::LIST,
    user::DELETE,
    user::GET,
    user::LIST_TRANSACTIONS,
    role::CREATE,
    role::UPDATE,
    role::LIST,
    role::DELETE,
    role::GET,
];

/// Name of the seeded role that is authorized for every code in [`ALL`].
pub const ADMINISTRATOR_ROLE: &str = "administrator";
