use crate::repositories::errors::user_repository_errors::UserRepositoryError;

#[derive(Debug)]
pub enum MatchmakingServiceError {
    Repository(UserRepositoryError),
}

impl std::fmt::Display for MatchmakingServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchmakingServiceError::Repository(err) => {
                write!(f, "Repository error: {}", err)
            }
        }
    }
}

impl std::error::Error for MatchmakingServiceError {}

impl From<UserRepositoryError> for MatchmakingServiceError {
    fn from(err: UserRepositoryError) -> Self {
        MatchmakingServiceError::Repository(err)
    }
}
