use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

/// A bearer session. The token is the only credential a client holds
/// after login.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: String,
}
