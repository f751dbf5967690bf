use async_trait::async_trait;
use scoreboard_types::errors::ApplicationError;
use std::sync::Arc;

use crate::repository::LeaderboardRepository;

/// A marker trait for Command structs.
/// Commands are operations that change the state of the system. The store
/// echoes back the rows it touched, so commands have an output too.
pub trait Command: Send + Sync {
    type Output: Send + Sync;
}

/// A trait for handlers that execute Commands.
/// Input validation belongs here, before the repository is touched.
#[async_trait]
pub trait CommandHandler<C: Command> {
    async fn handle(
        &self,
        cmd: C,
        repo: &Arc<dyn LeaderboardRepository>,
    ) -> Result<C::Output, ApplicationError>;
}
