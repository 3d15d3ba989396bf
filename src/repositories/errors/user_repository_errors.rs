#[derive(Debug)]
pub enum UserRepositoryError {
    Backend(String),
}

impl std::fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRepositoryError::Backend(msg) => write!(f, "User storage error: {}", msg),
        }
    }
}

impl std::error::Error for UserRepositoryError {}
