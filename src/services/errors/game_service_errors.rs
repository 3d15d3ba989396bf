#[derive(Debug, PartialEq, Eq)]
pub enum GameServiceError {
    RoomNotFound(String),
}

impl std::fmt::Display for GameServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameServiceError::RoomNotFound(room_id) => {
                write!(f, "Game room {} not found", room_id)
            }
        }
    }
}

impl std::error::Error for GameServiceError {}
