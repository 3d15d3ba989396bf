use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::models::messages::MatchFound;
use crate::repositories::user_repository::UserRepository;
use crate::services::connection_manager::UserConnectionManager;
use crate::services::errors::matchmaking_service_errors::MatchmakingServiceError;
use crate::services::game_room_manager::GameRoomManager;
use crate::services::match_queue::MatchQueue;
use crate::transport::notifier::GameNotifier;

/// Orchestrates queue, pairing, room creation, and the match-found push.
pub struct MatchmakingService {
    queue: MatchQueue,
    user_repository: Arc<dyn UserRepository>,
    game_room_manager: Arc<GameRoomManager>,
    connection_manager: Arc<UserConnectionManager>,
    notifier: Arc<dyn GameNotifier>,
}

impl MatchmakingService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        game_room_manager: Arc<GameRoomManager>,
        connection_manager: Arc<UserConnectionManager>,
        notifier: Arc<dyn GameNotifier>,
    ) -> Self {
        MatchmakingService {
            queue: MatchQueue::new(),
            user_repository,
            game_room_manager,
            connection_manager,
            notifier,
        }
    }

    pub fn add_to_queue(&self, user_id: i64) {
        self.queue.enqueue(user_id);
    }

    pub fn try_get_matched_pair(&self) -> Option<(i64, i64)> {
        self.queue.try_get_pair()
    }

    /// Takes a freshly drawn pair through profile resolution, room
    /// creation, and notification.
    ///
    /// Recovery rules when the pair cannot start:
    /// - a missing profile re-enqueues only the id that did resolve;
    /// - a missing connection tears the room down and re-enqueues only the
    ///   player who still has a live handle. The unreachable player is
    ///   dropped; there is nothing left to notify.
    pub async fn process_match(
        &self,
        player1_id: i64,
        player2_id: i64,
    ) -> Result<(), MatchmakingServiceError> {
        let (player1, player2) = tokio::join!(
            self.user_repository.get_user_by_id(player1_id),
            self.user_repository.get_user_by_id(player2_id)
        );
        let (player1, player2) = (player1?, player2?);

        let (player1, player2) = match (player1, player2) {
            (Some(player1), Some(player2)) => (player1, player2),
            (player1, player2) => {
                error!(
                    "Matched pair has unresolved profiles. P1: {}, P2: {}",
                    player1_id, player2_id
                );
                if player1.is_some() {
                    self.add_to_queue(player1_id);
                }
                if player2.is_some() {
                    self.add_to_queue(player2_id);
                }
                return Ok(());
            }
        };

        let room = self
            .game_room_manager
            .create_room(player1.clone(), player2.clone());
        let room_id = room.lock().expect("room poisoned").room_id().to_string();

        let connection1 = self.connection_manager.get_connection_id(player1_id);
        let connection2 = self.connection_manager.get_connection_id(player2_id);

        match (connection1, connection2) {
            (Some(connection1), Some(connection2)) => {
                self.join_room_group(&connection1, &room_id).await;
                self.join_room_group(&connection2, &room_id).await;

                self.send_match_found(&connection1, &room_id, &player2.username)
                    .await;
                self.send_match_found(&connection2, &room_id, &player1.username)
                    .await;

                info!(
                    "Match formed. RoomId: {}, P1: {}, P2: {}",
                    room_id, player1_id, player2_id
                );
            }
            (connection1, connection2) => {
                self.game_room_manager.remove_room(&room_id);
                if connection1.is_some() {
                    self.add_to_queue(player1_id);
                }
                if connection2.is_some() {
                    self.add_to_queue(player2_id);
                }
                warn!(
                    "Match cancelled, a paired player is offline. P1: {}, P2: {}",
                    player1_id, player2_id
                );
            }
        }
        Ok(())
    }

    async fn join_room_group(&self, connection_id: &str, room_id: &str) {
        if let Err(err) = self.notifier.join_group(connection_id, room_id).await {
            warn!(
                "Failed to join connection {} to room {}: {}",
                connection_id, room_id, err
            );
        }
    }

    async fn send_match_found(&self, connection_id: &str, room_id: &str, opponent_name: &str) {
        let payload = MatchFound {
            room_id: room_id.to_string(),
            opponent_name: opponent_name.to_string(),
        };
        notify_one_best_effort(self.notifier.as_ref(), connection_id, "MatchFound", payload).await;
    }
}

/// Fire-and-forget push to one connection; delivery problems are logged and
/// never surface to the state machine.
async fn notify_one_best_effort(
    notifier: &dyn GameNotifier,
    connection_id: &str,
    event: &str,
    payload: impl Serialize,
) {
    match serde_json::to_value(payload) {
        Ok(value) => {
            if let Err(err) = notifier.notify_one(connection_id, event, value).await {
                warn!(
                    "Failed to deliver {} to connection {}: {}",
                    event, connection_id, err
                );
            }
        }
        Err(err) => warn!("Failed to serialize {} payload: {}", event, err),
    }
}
