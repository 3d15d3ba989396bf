pub mod game_ws;
pub mod health;
pub mod matchmaking;
