use serde::{Deserialize, Serialize};

/// Sent to each matched player; event name "MatchFound".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchFound {
    pub room_id: String,
    pub opponent_name: String,
}

/// Broadcast to a room after every accepted move; event name "StonePlaced".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StonePlaced {
    pub user_id: i64,
    pub x: i32,
    pub y: i32,
}

/// Broadcast to a room when a game finishes; event name "GameOver".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameOver {
    pub winner_name: String,
}

/// Inbound messages a client may send over the game socket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Register { user_id: i64 },
    PlaceStone { room_id: String, x: i32, y: i32 },
}

#[derive(Debug, Deserialize)]
pub struct JoinQueueRequest {
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct JoinQueueResponse {
    pub message: String,
}
