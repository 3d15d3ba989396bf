use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::player::Player;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;

#[cfg(test)]
use mockall::automock;

/// Profile lookup seam. Account storage lives outside this server; the
/// match core only ever resolves an id to a `Player`. A missing profile is
/// an expected outcome, not an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user_by_id(&self, user_id: i64) -> Result<Option<Player>, UserRepositoryError>;
}

/// Process-local user store for standalone operation and tests.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<i64, Player>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, player: Player) {
        let mut users = self.users.lock().expect("user store lock poisoned");
        users.insert(player.user_id, player);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_user_by_id(&self, user_id: i64) -> Result<Option<Player>, UserRepositoryError> {
        let users = self.users.lock().expect("user store lock poisoned");
        Ok(users.get(&user_id).cloned())
    }
}
