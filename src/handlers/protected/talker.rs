use axum::{
    extract::{Path, State},
    Extension,
};

use crate::error::ApiError;
use crate::handlers::parse_talker_id;
use crate::middleware::{ApiResponse, ApiResult, ValidatedBody};
use crate::state::AppState;
use crate::store::next_id;
use crate::types::{Talker, TalkerInput};

/// POST /talker - append a new talker and return it with its id
pub async fn talker_post(
    State(state): State<AppState>,
    Extension(ValidatedBody(body)): Extension<ValidatedBody>,
) -> ApiResult<Talker> {
    let input = TalkerInput::from_body(&body)?;

    let talker = state
        .store
        .modify(|talkers| {
            let talker = Talker::from_input(next_id(talkers), input);
            talkers.push(talker.clone());
            (talker, true)
        })
        .await?;

    tracing::info!(id = talker.id, "Created talker");
    Ok(ApiResponse::created(talker))
}

/// PUT /talker/:id - replace name, age and talk of an existing talker
pub async fn talker_put(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(ValidatedBody(body)): Extension<ValidatedBody>,
) -> ApiResult<Talker> {
    let input = TalkerInput::from_body(&body)?;
    let id = parse_talker_id(&id).ok_or_else(ApiError::talker_not_found)?;

    let updated = state
        .store
        .modify(|talkers| match talkers.iter_mut().find(|t| t.id == id) {
            Some(talker) => {
                talker.apply(input);
                (Some(talker.clone()), true)
            }
            None => (None, false),
        })
        .await?;

    let talker = updated.ok_or_else(ApiError::talker_not_found)?;
    tracing::info!(id = talker.id, "Updated talker");
    Ok(ApiResponse::success(talker))
}

/// DELETE /talker/:id - 204 with an empty body
pub async fn talker_delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    let id = parse_talker_id(&id).ok_or_else(ApiError::talker_not_found)?;

    let removed = state
        .store
        .modify(|talkers| match talkers.iter().position(|t| t.id == id) {
            Some(index) => {
                talkers.remove(index);
                (true, true)
            }
            None => (false, false),
        })
        .await?;

    if !removed {
        return Err(ApiError::talker_not_found());
    }

    tracing::info!(id, "Deleted talker");
    Ok(ApiResponse::<()>::no_content())
}
