#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::sync::Mutex;

    use scoreboard_types::{
        errors::{ApplicationError, StoreError},
        leaderboard::{LeaderboardEntry, NewEntry, Score},
    };

    use crate::repository::LeaderboardRepository;

    #[derive(Default)]
    struct Table {
        rows: Vec<LeaderboardEntry>,
        next_id: i64,
    }

    /// A stand-in for the hosted table. Rows keep insertion order, listing
    /// sorts by score (stable, so ties stay in insertion order).
    #[derive(Default)]
    pub struct InMemoryLeaderboardRepository {
        table: Mutex<Table>,
        failure: Option<String>,
    }

    impl InMemoryLeaderboardRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Every call fails as if the store rejected the query with `message`.
        pub fn failing(message: &str) -> Self {
            Self {
                failure: Some(message.to_string()),
                ..Self::default()
            }
        }

        /// Snapshot of the rows, in insertion order.
        pub fn entries(&self) -> Vec<LeaderboardEntry> {
            self.table.lock().unwrap().rows.clone()
        }

        fn check(&self) -> Result<(), ApplicationError> {
            match &self.failure {
                Some(message) => Err(StoreError::Rejected {
                    status: 400,
                    message: message.clone(),
                }
                .into()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl LeaderboardRepository for InMemoryLeaderboardRepository {
        async fn list_by_score_desc(&self) -> Result<Vec<LeaderboardEntry>, ApplicationError> {
            self.check()?;
            let mut rows = self.entries();
            rows.sort_by(|a, b| b.score.cmp(&a.score));
            Ok(rows)
        }

        async fn insert(
            &self,
            entry: &NewEntry,
        ) -> Result<Vec<LeaderboardEntry>, ApplicationError> {
            self.check()?;
            let mut table = self.table.lock().unwrap();
            table.next_id += 1;
            let row = LeaderboardEntry {
                id: table.next_id,
                name: entry.name.clone(),
                score: entry.score.value(),
            };
            table.rows.push(row.clone());
            Ok(vec![row])
        }

        async fn update_score(
            &self,
            id: i64,
            score: Score,
        ) -> Result<Vec<LeaderboardEntry>, ApplicationError> {
            self.check()?;
            let mut table = self.table.lock().unwrap();
            Ok(table
                .rows
                .iter_mut()
                .filter(|row| row.id == id)
                .map(|row| {
                    row.score = score.value();
                    row.clone()
                })
                .collect())
        }

        async fn delete(&self, id: i64) -> Result<Vec<LeaderboardEntry>, ApplicationError> {
            self.check()?;
            let mut table = self.table.lock().unwrap();
            let (deleted, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut table.rows)
                .into_iter()
                .partition(|row| row.id == id);
            table.rows = kept;
            Ok(deleted)
        }
    }
}
