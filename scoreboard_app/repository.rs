use scoreboard_types::{
    errors::ApplicationError,
    leaderboard::{LeaderboardEntry, NewEntry, Score},
};

/// Access to the external `leaderboard` table.
///
/// Write operations return the rows affected, exactly as the store reports them.
/// An empty list means no row matched; it is not an error.
#[async_trait::async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// Returns every entry ordered by score, highest first. Ties keep the store's order.
    async fn list_by_score_desc(&self) -> Result<Vec<LeaderboardEntry>, ApplicationError>;

    /// Inserts a new entry, letting the store assign its id.
    async fn insert(&self, entry: &NewEntry) -> Result<Vec<LeaderboardEntry>, ApplicationError>;

    /// Sets the score of the entries with the given id.
    async fn update_score(
        &self,
        id: i64,
        score: Score,
    ) -> Result<Vec<LeaderboardEntry>, ApplicationError>;

    /// Removes the entries with the given id.
    async fn delete(&self, id: i64) -> Result<Vec<LeaderboardEntry>, ApplicationError>;
}
