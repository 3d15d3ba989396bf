use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::models::game_room::GameStatus;
use crate::models::match_record::MatchRecord;
use crate::models::messages::{GameOver, StonePlaced};
use crate::repositories::match_repository::MatchRepository;
use crate::services::errors::game_service_errors::GameServiceError;
use crate::services::game_room_manager::GameRoomManager;
use crate::transport::notifier::GameNotifier;

/// Drives one move through its room: validation, the room broadcast, and,
/// on a finishing move, result persistence and room teardown.
pub struct GameService {
    game_room_manager: Arc<GameRoomManager>,
    match_repository: Arc<dyn MatchRepository>,
    notifier: Arc<dyn GameNotifier>,
}

/// What a finishing move leaves behind once the room lock is released.
struct FinishedGame {
    winner_id: i64,
    winner_name: String,
    loser_id: i64,
}

impl GameService {
    pub fn new(
        game_room_manager: Arc<GameRoomManager>,
        match_repository: Arc<dyn MatchRepository>,
        notifier: Arc<dyn GameNotifier>,
    ) -> Self {
        GameService {
            game_room_manager,
            match_repository,
            notifier,
        }
    }

    /// Returns `Ok(true)` when the stone was placed, `Ok(false)` for a move
    /// the room rejected, and `RoomNotFound` for an unknown room id.
    ///
    /// The in-memory room is the source of truth: persistence and
    /// notification failures after a finishing move are logged and the room
    /// is torn down regardless.
    pub async fn place_stone(
        &self,
        room_id: &str,
        user_id: i64,
        x: i32,
        y: i32,
    ) -> Result<bool, GameServiceError> {
        let room = self
            .game_room_manager
            .get_room(room_id)
            .ok_or_else(|| GameServiceError::RoomNotFound(room_id.to_string()))?;

        // Mutate under the room lock, then release it before any I/O.
        let finished = {
            let mut room = room.lock().expect("room poisoned");
            if !room.place_stone(user_id, x, y) {
                warn!(
                    "Rejected stone placement. RoomId: {}, UserId: {}, x: {}, y: {}",
                    room_id, user_id, x, y
                );
                return Ok(false);
            }
            if room.status() == GameStatus::Finished {
                // The mover won; an accepted move always comes from a
                // seated player.
                let winner = if room.player1().user_id == user_id {
                    room.player1()
                } else {
                    room.player2()
                };
                room.opponent_of(user_id).map(|loser| FinishedGame {
                    winner_id: user_id,
                    winner_name: winner.username.clone(),
                    loser_id: loser.user_id,
                })
            } else {
                None
            }
        };

        self.notify_room(room_id, "StonePlaced", StonePlaced { user_id, x, y })
            .await;
        info!(
            "Stone placed. RoomId: {}, UserId: {}, x: {}, y: {}",
            room_id, user_id, x, y
        );

        if let Some(finished) = finished {
            self.finish_game(room_id, finished).await;
        }
        Ok(true)
    }

    async fn finish_game(&self, room_id: &str, finished: FinishedGame) {
        info!(
            "Game over. RoomId: {}, Winner: {}",
            room_id, finished.winner_name
        );

        let record = MatchRecord::new(finished.winner_id, finished.loser_id);
        if let Err(err) = self.match_repository.add_match(&record).await {
            error!(
                "Failed to persist match result. RoomId: {}, Winner: {}, error: {}",
                room_id, finished.winner_id, err
            );
        }

        self.notify_room(
            room_id,
            "GameOver",
            GameOver {
                winner_name: finished.winner_name,
            },
        )
        .await;

        self.game_room_manager.remove_room(room_id);
    }

    async fn notify_room(&self, room_id: &str, event: &str, payload: impl Serialize) {
        match serde_json::to_value(payload) {
            Ok(value) => {
                if let Err(err) = self.notifier.notify_group(room_id, event, value).await {
                    warn!(
                        "Failed to deliver {} to room {}: {}",
                        event, room_id, err
                    );
                }
            }
            Err(err) => warn!("Failed to serialize {} payload: {}", event, err),
        }
    }
}
