use std::collections::HashMap;
use std::sync::Mutex;

use tracing::info;

/// Maps a player id to its current live connection handle.
///
/// At most one handle per player; a fresh registration from the same player
/// silently replaces the old one (last write wins).
#[derive(Default)]
pub struct UserConnectionManager {
    connections: Mutex<HashMap<i64, String>>,
}

impl UserConnectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_connection(&self, user_id: i64, connection_id: &str) {
        let mut connections = self.connections.lock().expect("connection table poisoned");
        connections.insert(user_id, connection_id.to_string());
        info!(
            "Registered connection {} for user {}",
            connection_id, user_id
        );
    }

    /// Removes whichever mapping currently holds this handle. A no-op when
    /// the handle is unknown, so disconnect handling may fire twice.
    pub fn remove_connection_by_id(&self, connection_id: &str) {
        let mut connections = self.connections.lock().expect("connection table poisoned");
        if let Some(user_id) = connections
            .iter()
            .find(|(_, conn)| conn.as_str() == connection_id)
            .map(|(user_id, _)| *user_id)
        {
            connections.remove(&user_id);
            info!(
                "Removed connection {} for user {}",
                connection_id, user_id
            );
        }
    }

    pub fn get_connection_id(&self, user_id: i64) -> Option<String> {
        let connections = self.connections.lock().expect("connection table poisoned");
        connections.get(&user_id).cloned()
    }
}
