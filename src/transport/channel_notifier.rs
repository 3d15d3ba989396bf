use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::mpsc;
use tracing::warn;

use crate::transport::notifier::{GameNotifier, NotifierError};

/// In-process push delivery over per-connection channels.
///
/// Each live socket registers an unbounded sender here; the socket task
/// drains the paired receiver and writes frames out. Group membership is
/// keyed by room id, mirroring the hub-group model of the notifier seam.
#[derive(Default)]
pub struct ChannelNotifier {
    connections: Mutex<HashMap<String, mpsc::UnboundedSender<String>>>,
    groups: Mutex<HashMap<String, HashSet<String>>>,
}

impl ChannelNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a connection and returns the receiving half the socket
    /// task should drain. Re-registering a handle replaces its channel.
    pub fn register(&self, connection_id: &str) -> mpsc::UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut connections = self.connections.lock().expect("connection lock poisoned");
        connections.insert(connection_id.to_string(), tx);
        rx
    }

    /// Drops the connection's channel and its group memberships.
    pub fn unregister(&self, connection_id: &str) {
        let mut connections = self.connections.lock().expect("connection lock poisoned");
        connections.remove(connection_id);
        drop(connections);

        let mut groups = self.groups.lock().expect("group lock poisoned");
        for members in groups.values_mut() {
            members.remove(connection_id);
        }
        groups.retain(|_, members| !members.is_empty());
    }

    fn frame(event: &str, payload: &Value) -> String {
        json!({ "event": event, "payload": payload }).to_string()
    }
}

#[async_trait]
impl GameNotifier for ChannelNotifier {
    async fn join_group(&self, connection_id: &str, room_id: &str) -> Result<(), NotifierError> {
        let mut groups = self.groups.lock().expect("group lock poisoned");
        groups
            .entry(room_id.to_string())
            .or_default()
            .insert(connection_id.to_string());
        Ok(())
    }

    async fn notify_one(
        &self,
        connection_id: &str,
        event: &str,
        payload: Value,
    ) -> Result<(), NotifierError> {
        let frame = Self::frame(event, &payload);
        let connections = self.connections.lock().expect("connection lock poisoned");
        connections
            .get(connection_id)
            .and_then(|tx| tx.send(frame).ok())
            .ok_or_else(|| NotifierError::ConnectionClosed(connection_id.to_string()))
    }

    async fn notify_group(
        &self,
        room_id: &str,
        event: &str,
        payload: Value,
    ) -> Result<(), NotifierError> {
        let frame = Self::frame(event, &payload);
        let members: Vec<String> = {
            let groups = self.groups.lock().expect("group lock poisoned");
            groups
                .get(room_id)
                .map(|members| members.iter().cloned().collect())
                .unwrap_or_default()
        };
        let connections = self.connections.lock().expect("connection lock poisoned");
        for connection_id in members {
            let delivered = connections
                .get(&connection_id)
                .map(|tx| tx.send(frame.clone()).is_ok())
                .unwrap_or(false);
            if !delivered {
                warn!(
                    "Dropping undeliverable group event {} for connection {}",
                    event, connection_id
                );
            }
        }
        Ok(())
    }
}
