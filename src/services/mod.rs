pub mod connection_manager;
pub mod errors;
pub mod game_room_manager;
pub mod game_service;
pub mod match_queue;
pub mod matchmaking_service;
