use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::info;

use crate::models::game_room::GameRoom;
use crate::models::player::Player;

/// Registry of live game rooms, keyed by room id.
///
/// Each room sits behind its own mutex so moves in one room never contend
/// with moves in another; the registry lock only guards the table itself
/// and is never held while a room is being played.
#[derive(Default)]
pub struct GameRoomManager {
    rooms: Mutex<HashMap<String, Arc<Mutex<GameRoom>>>>,
}

impl GameRoomManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and registers a room; `player1` owns the first turn.
    pub fn create_room(&self, player1: Player, player2: Player) -> Arc<Mutex<GameRoom>> {
        let room = GameRoom::new(player1, player2);
        let room_id = room.room_id().to_string();
        let room = Arc::new(Mutex::new(room));
        let mut rooms = self.rooms.lock().expect("room table poisoned");
        rooms.insert(room_id.clone(), Arc::clone(&room));
        info!("Created game room {}", room_id);
        room
    }

    pub fn get_room(&self, room_id: &str) -> Option<Arc<Mutex<GameRoom>>> {
        let rooms = self.rooms.lock().expect("room table poisoned");
        rooms.get(room_id).cloned()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.lock().expect("room table poisoned").len()
    }

    /// Idempotent; removing an already-removed room is a no-op.
    pub fn remove_room(&self, room_id: &str) {
        let mut rooms = self.rooms.lock().expect("room table poisoned");
        if rooms.remove(room_id).is_some() {
            info!("Removed game room {}", room_id);
        }
    }
}
