pub mod game_room;
pub mod match_record;
pub mod messages;
pub mod player;

use std::sync::Arc;

use crate::services::connection_manager::UserConnectionManager;
use crate::services::game_service::GameService;
use crate::services::matchmaking_service::MatchmakingService;
use crate::transport::channel_notifier::ChannelNotifier;

#[derive(Clone)]
pub struct AppState {
    pub matchmaking_service: Arc<MatchmakingService>,
    pub game_service: Arc<GameService>,
    pub connection_manager: Arc<UserConnectionManager>,
    pub notifier: Arc<ChannelNotifier>,
}
