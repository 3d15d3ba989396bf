#[derive(Debug)]
pub enum MatchRepositoryError {
    Backend(String),
}

impl std::fmt::Display for MatchRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchRepositoryError::Backend(msg) => write!(f, "Match storage error: {}", msg),
        }
    }
}

impl std::error::Error for MatchRepositoryError {}
