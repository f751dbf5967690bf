use scoreboard_types::{
    leaderboard::LeaderboardEntry,
    requests::{AddEntryRequest, UpdateScoreRequest},
};

use crate::cqrs::Command;

/// Adds a new entry to the leaderboard.
#[derive(Debug, Clone)]
pub struct AddEntry {
    pub request: AddEntryRequest,
}

impl Command for AddEntry {
    type Output = Vec<LeaderboardEntry>;
}

/// Changes the score of an existing entry. The name is left untouched.
#[derive(Debug, Clone)]
pub struct UpdateScore {
    pub id: i64,
    pub request: UpdateScoreRequest,
}

impl Command for UpdateScore {
    type Output = Vec<LeaderboardEntry>;
}

#[derive(Debug, Clone)]
pub struct DeleteEntry {
    pub id: i64,
}

impl Command for DeleteEntry {
    type Output = Vec<LeaderboardEntry>;
}
