use axum::{
    body::Body,
    extract::{Request, State},
    http::{header::CONTENT_TYPE, request::Parts},
    middleware::Next,
    response::Response,
};
use serde_json::{Map, Value};

use crate::error::{ApiError, INVALID_JSON};
use crate::state::AppState;
use crate::validation::{login_pipeline, talker_pipeline, Pipeline};

/// Parsed request body, placed in request extensions once its pipeline passed
#[derive(Clone, Debug)]
pub struct ValidatedBody(pub Value);

pub async fn validate_login_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    run_pipeline(&login_pipeline(), state.config.api.max_body_bytes, request, next).await
}

pub async fn validate_talker_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    run_pipeline(&talker_pipeline(), state.config.api.max_body_bytes, request, next).await
}

async fn run_pipeline(
    pipeline: &Pipeline,
    limit: usize,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (parts, body) = buffer_json(request, limit).await?;

    pipeline.run(&body)?;

    // Handlers read the parsed body from the extension, never the raw bytes
    let mut request = Request::from_parts(parts, Body::empty());
    request.extensions_mut().insert(ValidatedBody(body));
    Ok(next.run(request).await)
}

/// Read the body and parse it as JSON.
///
/// Non-JSON content types and empty bodies read as `{}`, so the pipeline
/// reports the first missing field instead of a parse error.
async fn buffer_json(request: Request, limit: usize) -> Result<(Parts, Value), ApiError> {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, limit).await.map_err(|e| {
        tracing::debug!("Failed to buffer request body: {}", e);
        ApiError::payload_too_large("Corpo da requisição muito grande")
    })?;

    let is_json = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map_or(false, |ct| ct.trim_start().starts_with("application/json"));

    let value = if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(v @ (Value::Object(_) | Value::Array(_))) => v,
            Ok(_) | Err(_) => return Err(ApiError::bad_request(INVALID_JSON)),
        }
    };

    Ok((parts, value))
}
