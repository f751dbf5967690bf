use async_trait::async_trait;
use std::sync::Arc;

use scoreboard_types::errors::ApplicationError;

use crate::{
    cqrs::{
        Query, QueryHandler,
        queries::ListEntries,
    },
    repository::LeaderboardRepository,
};

pub struct ListEntriesHandler {}

impl ListEntriesHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListEntries> for ListEntriesHandler {
    async fn handle(
        &self,
        _query: ListEntries,
        repo: &Arc<dyn LeaderboardRepository>,
    ) -> Result<<ListEntries as Query>::Output, ApplicationError> {
        repo.list_by_score_desc().await
    }
}
