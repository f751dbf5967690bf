use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use scoreboard_app::{
    command_handlers::{
        AddEntryCommandHandler, DeleteEntryCommandHandler, UpdateScoreCommandHandler,
    },
    cqrs::{
        commands::{AddEntry, DeleteEntry, UpdateScore},
        queries::ListEntries,
    },
    queries_handlers::ListEntriesHandler,
};
use scoreboard_types::{
    leaderboard::LeaderboardEntry,
    requests::{AddEntryRequest, UpdateScoreRequest},
};

use crate::{error::ApiError, http::AppState};

type ApiResult<T> = Result<T, ApiError>;

/// Ids are integers; anything else doesn't match the route.
fn entry_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    path.map(|Path(id)| id).map_err(|_| ApiError::not_found())
}

/// GET /api/leaderboard - All entries, highest score first.
pub async fn leaderboard(State(state): State<AppState>) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let entries = state
        .app_bus
        .query(ListEntries, ListEntriesHandler::new())
        .await?;
    Ok(Json(entries))
}

/// POST /api/add - Creates an entry and returns it as stored.
pub async fn add_entry(
    State(state): State<AppState>,
    payload: Result<Json<AddEntryRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    state.app_bus.ensure_store()?;
    let Json(request) = payload?;

    let created = state
        .app_bus
        .execute(AddEntry { request }, AddEntryCommandHandler::new())
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/update/{id} - Sets a new score, the name can't change.
pub async fn update_entry(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateScoreRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let id = entry_id(path)?;
    state.app_bus.ensure_store()?;
    let Json(request) = payload?;

    let updated = state
        .app_bus
        .execute(UpdateScore { id, request }, UpdateScoreCommandHandler::new())
        .await?;

    Ok(Json(updated))
}

/// DELETE /api/delete/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let id = entry_id(path)?;

    let deleted = state
        .app_bus
        .execute(DeleteEntry { id }, DeleteEntryCommandHandler::new())
        .await?;

    Ok(Json(deleted))
}
