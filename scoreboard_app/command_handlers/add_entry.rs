use std::sync::Arc;

use scoreboard_types::errors::ApplicationError;

use crate::{
    cqrs::{Command, CommandHandler, commands::AddEntry},
    repository::LeaderboardRepository,
};

pub struct AddEntryCommandHandler;

impl AddEntryCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandHandler<AddEntry> for AddEntryCommandHandler {
    async fn handle(
        &self,
        command: AddEntry,
        repo: &Arc<dyn LeaderboardRepository>,
    ) -> Result<<AddEntry as Command>::Output, ApplicationError> {
        let entry = command.request.validate()?;

        let created = repo.insert(&entry).await?;
        tracing::debug!(
            name = %entry.name,
            score = entry.score.value(),
            "Leaderboard entry added"
        );

        Ok(created)
    }
}
