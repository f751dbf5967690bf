use std::sync::Arc;

use scoreboard_types::errors::ApplicationError;

use crate::{
    cqrs::{Command, CommandHandler, commands::UpdateScore},
    repository::LeaderboardRepository,
};

pub struct UpdateScoreCommandHandler;

impl UpdateScoreCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateScore> for UpdateScoreCommandHandler {
    async fn handle(
        &self,
        command: UpdateScore,
        repo: &Arc<dyn LeaderboardRepository>,
    ) -> Result<<UpdateScore as Command>::Output, ApplicationError> {
        let score = command.request.validate()?;

        let updated = repo.update_score(command.id, score).await?;
        if updated.is_empty() {
            tracing::debug!(entry_id = command.id, "Score update matched no entries");
        }

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use scoreboard_types::{
        errors::ValidationError,
        leaderboard::NewEntry,
        leaderboard::Score,
        requests::{ScoreInput, UpdateScoreRequest},
    };

    use super::*;
    use crate::test_utils::tests::InMemoryLeaderboardRepository;

    fn update(id: i64, score: Option<ScoreInput>) -> UpdateScore {
        UpdateScore {
            id,
            request: UpdateScoreRequest { score },
        }
    }

    #[tokio::test]
    async fn test_update_score_only_touches_score() {
        let mock = Arc::new(InMemoryLeaderboardRepository::new());
        let repo: Arc<dyn LeaderboardRepository> = mock.clone();
        let created = repo
            .insert(&NewEntry {
                name: "Bob".to_string(),
                score: Score::new(20).unwrap(),
            })
            .await
            .unwrap();
        let bob_id = created[0].id;

        let handler = UpdateScoreCommandHandler::new();
        let updated = handler
            .handle(update(bob_id, Some(ScoreInput::Integer(5))), &repo)
            .await
            .unwrap();

        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].id, bob_id);
        assert_eq!(updated[0].name, "Bob");
        assert_eq!(updated[0].score, 5);
    }

    #[tokio::test]
    async fn test_update_score_unknown_id_returns_empty() {
        let repo: Arc<dyn LeaderboardRepository> = Arc::new(InMemoryLeaderboardRepository::new());
        let handler = UpdateScoreCommandHandler::new();

        let updated = handler
            .handle(update(999, Some(ScoreInput::Integer(5))), &repo)
            .await
            .unwrap();

        assert!(updated.is_empty());
    }

    #[tokio::test]
    async fn test_update_score_validation() {
        let repo: Arc<dyn LeaderboardRepository> = Arc::new(InMemoryLeaderboardRepository::new());
        let handler = UpdateScoreCommandHandler::new();

        let err = handler.handle(update(1, None), &repo).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Validation(ValidationError::MissingScore)
        ));

        let err = handler
            .handle(update(1, Some(ScoreInput::Text("1.5".to_string()))), &repo)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Validation(ValidationError::ScoreNotInteger)
        ));
    }

    #[tokio::test]
    async fn test_update_score_truncates_fractional_score() {
        let repo: Arc<dyn LeaderboardRepository> = Arc::new(InMemoryLeaderboardRepository::new());
        let created = repo
            .insert(&NewEntry {
                name: "Carol".to_string(),
                score: Score::new(3).unwrap(),
            })
            .await
            .unwrap();

        let handler = UpdateScoreCommandHandler::new();
        let updated = handler
            .handle(update(created[0].id, Some(ScoreInput::Float(7.9))), &repo)
            .await
            .unwrap();

        assert_eq!(updated[0].score, 7);
    }
}
