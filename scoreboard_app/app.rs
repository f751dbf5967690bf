use std::sync::Arc;

use scoreboard_types::errors::{ApplicationError, StoreError};

use crate::{
    cqrs::{Command, CommandHandler, Query, QueryHandler},
    repository::LeaderboardRepository,
};

/// The store client, or the lack of one when credentials were missing at startup.
#[derive(Clone)]
pub enum StoreHandle {
    Ready(Arc<dyn LeaderboardRepository>),
    NotConfigured,
}

impl StoreHandle {
    pub fn repository(&self) -> Result<&Arc<dyn LeaderboardRepository>, ApplicationError> {
        match self {
            StoreHandle::Ready(repo) => Ok(repo),
            StoreHandle::NotConfigured => Err(StoreError::NotConfigured.into()),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, StoreHandle::Ready(_))
    }
}

/// AppBus (Mediator)
/// This struct is the central entry point for all application logic.
/// It does not contain any business logic itself.
/// Its primary roles are:
/// 1. Refusing every operation while the store isn't configured.
/// 2. Dispatching Commands and Queries to their respective handlers.
pub struct AppBus {
    store: StoreHandle,
}

impl AppBus {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Fails with [`StoreError::NotConfigured`] in degraded mode.
    /// Callers use it to bail out before even looking at the request.
    pub fn ensure_store(&self) -> Result<(), ApplicationError> {
        self.store.repository().map(|_| ())
    }

    pub fn is_store_configured(&self) -> bool {
        self.store.is_configured()
    }

    /// Executes a command.
    /// A command is an operation that modifies the system state.
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<C::Output, ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let repo = self.store.repository()?;
        handler.handle(cmd, repo).await
    }

    /// Executes a query.
    /// A query is an operation that reads system state and returns data.
    /// It should *never* modify the state.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let repo = self.store.repository()?;
        handler.handle(query, repo).await
    }
}
