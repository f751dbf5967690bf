use axum::{extract::State, response::IntoResponse};

use crate::{handlers::render_template, http::AppState, templates::IndexTemplate};

/// GET / - Landing page. Served even when the store isn't configured.
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    render_template(IndexTemplate {
        store_configured: state.app_bus.is_store_configured(),
    })
}
