use scoreboard_types::leaderboard::LeaderboardEntry;

use crate::cqrs::Query;

/// Lists all the leaderboard entries, highest score first.
pub struct ListEntries;

impl Query for ListEntries {
    type Output = Vec<LeaderboardEntry>;
}
