use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a finished match, handed off to the match repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner_id: i64,
    pub loser_id: i64,
    pub match_date: DateTime<Utc>,
}

impl MatchRecord {
    pub fn new(winner_id: i64, loser_id: i64) -> Self {
        MatchRecord {
            winner_id,
            loser_id,
            match_date: Utc::now(),
        }
    }
}
