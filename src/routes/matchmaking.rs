use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{error, info};

use crate::models::messages::{JoinQueueRequest, JoinQueueResponse};
use crate::models::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/matchmaking/join", post(join_queue))
}

/// Queues the caller and immediately attempts one pairing pass, the same
/// enqueue / try-pair / process sequence every join request runs.
async fn join_queue(
    State(state): State<AppState>,
    Json(request): Json<JoinQueueRequest>,
) -> (StatusCode, Json<JoinQueueResponse>) {
    info!("Queue join request received. UserId: {}", request.user_id);

    state.matchmaking_service.add_to_queue(request.user_id);

    if let Some((player1_id, player2_id)) = state.matchmaking_service.try_get_matched_pair() {
        if let Err(err) = state
            .matchmaking_service
            .process_match(player1_id, player2_id)
            .await
        {
            error!(
                "Match processing failed. P1: {}, P2: {}, error: {}",
                player1_id, player2_id, err
            );
        }
    }

    (
        StatusCode::OK,
        Json(JoinQueueResponse {
            message: "Queued for matchmaking.".to_string(),
        }),
    )
}
