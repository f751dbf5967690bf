use std::sync::Arc;

use scoreboard_app::{
    app::{AppBus, StoreHandle},
    config::Config,
};
use scoreboard_db::connect_store;
use scoreboard_types::{Result, errors::ApplicationError};
use scoreboard_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let _log_guard = setup_logging();
    let config = Config::from_env();
    let app_bus = Arc::new(AppBus::new(setup_store(&config)));
    let state = AppState::new(app_bus, &config);

    WebRouter::serve(state, config.port).await
}

/// Missing or unusable credentials aren't fatal: the API answers every data
/// request with an error while the landing page keeps working.
fn setup_store(config: &Config) -> StoreHandle {
    let Some(store_config) = &config.store else {
        tracing::error!("SUPABASE_URL and SUPABASE_KEY must be set, running without a database");
        return StoreHandle::NotConfigured;
    };

    match connect_store(store_config) {
        Ok(repo) => {
            tracing::info!("Leaderboard store configured for table '{}'", store_config.table);
            StoreHandle::Ready(Arc::new(repo))
        }
        Err(e) => {
            tracing::error!("Unable to set up the leaderboard store: {e}");
            StoreHandle::NotConfigured
        }
    }
}
