use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug)]
pub enum NotifierError {
    ConnectionClosed(String),
}

impl std::fmt::Display for NotifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifierError::ConnectionClosed(connection_id) => {
                write!(f, "Connection {} is closed", connection_id)
            }
        }
    }
}

impl std::error::Error for NotifierError {}

/// Push-delivery seam. The match core never talks to sockets directly; it
/// addresses a single connection handle or a room-keyed group and moves on.
/// Delivery failures are reported but never cause game-state rollback.
#[async_trait]
pub trait GameNotifier: Send + Sync {
    /// Subscribes a connection to events addressed to `room_id`.
    async fn join_group(&self, connection_id: &str, room_id: &str) -> Result<(), NotifierError>;

    async fn notify_one(
        &self,
        connection_id: &str,
        event: &str,
        payload: Value,
    ) -> Result<(), NotifierError>;

    /// Best-effort fan-out to every connection in the group.
    async fn notify_group(
        &self,
        room_id: &str,
        event: &str,
        payload: Value,
    ) -> Result<(), NotifierError>;
}
