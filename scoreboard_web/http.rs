use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::{io::Error, net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};

use scoreboard_app::{app::AppBus, config::Config};
use scoreboard_types::{Result, errors::ApplicationError};

use crate::handlers::{add_entry, delete_entry, home, leaderboard, update_entry};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>, config: &Config) -> AppState {
        AppState {
            app_bus,
            assets_dir: PathBuf::from(&config.assets_dir),
        }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .nest_service("/static", ServeDir::new(&state.assets_dir))
            .route("/", get(home))
            .route("/api/leaderboard", get(leaderboard))
            .route("/api/add", post(add_entry))
            .route("/api/update/{id}", put(update_entry))
            .route("/api/delete/{id}", delete(delete_entry))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(infra_error)?;

        tracing::info!(
            "HTTP Server started, listening on http://{}",
            addr.to_string()
        );
        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
