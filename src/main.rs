use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use omok_server::models::player::Player;
use omok_server::models::AppState;
use omok_server::repositories::match_repository::{InMemoryMatchRepository, MatchRepository};
use omok_server::repositories::user_repository::{InMemoryUserRepository, UserRepository};
use omok_server::routes;
use omok_server::services::connection_manager::UserConnectionManager;
use omok_server::services::game_room_manager::GameRoomManager;
use omok_server::services::game_service::GameService;
use omok_server::services::matchmaking_service::MatchmakingService;
use omok_server::transport::channel_notifier::ChannelNotifier;
use omok_server::transport::notifier::GameNotifier;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "omok_server=info,tower_http=info".into()),
        )
        .init();

    // Set up services. Profile and match storage run in-memory here;
    // production deployments swap the repository implementations.
    let user_repository = Arc::new(InMemoryUserRepository::new());
    seed_demo_users(&user_repository);
    let user_repository: Arc<dyn UserRepository> = user_repository;

    let match_repository: Arc<dyn MatchRepository> = Arc::new(InMemoryMatchRepository::new());
    let notifier = Arc::new(ChannelNotifier::new());
    let game_notifier: Arc<dyn GameNotifier> = notifier.clone();
    let connection_manager = Arc::new(UserConnectionManager::new());
    let game_room_manager = Arc::new(GameRoomManager::new());

    let matchmaking_service = Arc::new(MatchmakingService::new(
        user_repository,
        Arc::clone(&game_room_manager),
        Arc::clone(&connection_manager),
        game_notifier.clone(),
    ));
    let game_service = Arc::new(GameService::new(
        game_room_manager,
        match_repository,
        game_notifier,
    ));

    let app_state = AppState {
        matchmaking_service,
        game_service,
        connection_manager,
        notifier,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::matchmaking::routes())
        .merge(routes::game_ws::routes())
        .layer(cors)
        .with_state(app_state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    info!("Starting omok server on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}

fn seed_demo_users(repository: &InMemoryUserRepository) {
    for (user_id, username) in [(1, "alice"), (2, "bob"), (3, "carol"), (4, "dave")] {
        repository.insert_user(Player::new(user_id, username));
    }
    info!("Seeded demo users 1-4");
}
