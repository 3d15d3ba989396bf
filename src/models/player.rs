use serde::{Deserialize, Serialize};

/// A player's public identity, resolved through the user repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub user_id: i64,
    pub username: String,
}

impl Player {
    pub fn new(user_id: i64, username: &str) -> Self {
        Player {
            user_id,
            username: username.to_string(),
        }
    }
}
