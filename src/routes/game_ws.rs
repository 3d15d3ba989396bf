use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
    routing::get,
    Router,
};
use futures::{SinkExt, StreamExt};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::messages::ClientMessage;
use crate::models::AppState;
use crate::services::errors::game_service_errors::GameServiceError;

pub fn routes() -> Router<AppState> {
    Router::new().route("/ws", get(ws_handler))
}

async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// One task per socket. The socket owns a fresh connection id; game events
/// addressed to that id by the notifier are forwarded out, and inbound JSON
/// messages are dispatched into the core. The shim keeps no game state
/// beyond which user registered on this socket.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let connection_id = Uuid::new_v4().simple().to_string();
    let mut events = state.notifier.register(&connection_id);
    let (mut outbound, mut inbound) = socket.split();

    let forwarder = tokio::spawn(async move {
        while let Some(frame) = events.recv().await {
            if outbound.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    });

    info!("Socket opened. ConnectionId: {}", connection_id);
    let mut registered_user: Option<i64> = None;

    while let Some(Ok(message)) = inbound.next().await {
        match message {
            Message::Text(text) => {
                dispatch(&state, &connection_id, &mut registered_user, text.as_str()).await;
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    info!("Socket closed. ConnectionId: {}", connection_id);
    state.connection_manager.remove_connection_by_id(&connection_id);
    state.notifier.unregister(&connection_id);
    forwarder.abort();
}

async fn dispatch(
    state: &AppState,
    connection_id: &str,
    registered_user: &mut Option<i64>,
    text: &str,
) {
    let message: ClientMessage = match serde_json::from_str(text) {
        Ok(message) => message,
        Err(err) => {
            warn!(
                "Unparseable client message on connection {}: {}",
                connection_id, err
            );
            return;
        }
    };

    match message {
        ClientMessage::Register { user_id } => {
            state.connection_manager.add_connection(user_id, connection_id);
            *registered_user = Some(user_id);
        }
        ClientMessage::PlaceStone { room_id, x, y } => {
            let Some(user_id) = *registered_user else {
                warn!(
                    "PlaceStone from unregistered connection {}",
                    connection_id
                );
                return;
            };
            match state.game_service.place_stone(&room_id, user_id, x, y).await {
                Ok(true) => {}
                Ok(false) => {
                    warn!(
                        "Stone placement failed. RoomId: {}, UserId: {}",
                        room_id, user_id
                    );
                }
                Err(GameServiceError::RoomNotFound(room_id)) => {
                    warn!("PlaceStone for unknown room. RoomId: {}", room_id);
                }
            }
        }
    }
}
