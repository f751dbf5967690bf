use std::sync::Arc;

use scoreboard_types::errors::ApplicationError;

use crate::{
    cqrs::{Command, CommandHandler, commands::DeleteEntry},
    repository::LeaderboardRepository,
};

pub struct DeleteEntryCommandHandler;

impl DeleteEntryCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteEntry> for DeleteEntryCommandHandler {
    async fn handle(
        &self,
        command: DeleteEntry,
        repo: &Arc<dyn LeaderboardRepository>,
    ) -> Result<<DeleteEntry as Command>::Output, ApplicationError> {
        let deleted = repo.delete(command.id).await?;
        tracing::debug!(
            entry_id = command.id,
            count = deleted.len(),
            "Leaderboard entries deleted"
        );
        Ok(deleted)
    }
}
