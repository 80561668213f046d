use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::error::{ApiError, TOKEN_INVALID, TOKEN_NOT_FOUND};
use crate::state::AppState;
use crate::token;

/// Token middleware for write routes.
///
/// Only the presence and length of the `authorization` header are checked;
/// no token registry exists, so any value of the configured length passes.
pub async fn token_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    check_authorization(&headers, state.config.auth.token_length)?;
    Ok(next.run(request).await)
}

/// Check the raw `authorization` header value (no `Bearer ` scheme)
pub fn check_authorization(headers: &HeaderMap, token_length: usize) -> Result<(), ApiError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => {
            tracing::debug!("Rejected request without authorization header");
            return Err(ApiError::unauthorized(TOKEN_NOT_FOUND));
        }
    };

    let value = value
        .to_str()
        .map_err(|_| ApiError::unauthorized(TOKEN_INVALID))?;

    if !token::is_well_formed(value, token_length) {
        tracing::debug!("Rejected authorization value of length {}", value.chars().count());
        return Err(ApiError::unauthorized(TOKEN_INVALID));
    }

    Ok(())
}
