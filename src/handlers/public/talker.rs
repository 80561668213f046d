use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::ApiError;
use crate::handlers::parse_talker_id;
use crate::state::AppState;
use crate::types::Talker;

/// GET /talker - the whole collection, unpaged
pub async fn talker_list(State(state): State<AppState>) -> Result<Json<Vec<Talker>>, ApiError> {
    Ok(Json(state.store.load().await?))
}

/// GET /talker/:id
pub async fn talker_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Talker>, ApiError> {
    let id = parse_talker_id(&id).ok_or_else(ApiError::talker_not_found)?;

    state
        .store
        .find(id)
        .await?
        .map(Json)
        .ok_or_else(ApiError::talker_not_found)
}
