use serde::{Deserialize, Serialize};

/// The authenticated account, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Client-side view of the server session.
///
/// Starts out loading; the session check resolves it exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub is_loading: bool,
}

impl Session {
    /// Initial state before the session check has resolved.
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.is_loading && self.user.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}
