use axum::{extract::State, Json};

use crate::state::AppState;
use crate::token::generate_token;
use crate::types::LoginResponse;

/// POST /login - mint a token for a body that passed the login pipeline.
///
/// Credentials are not checked against anything; the token is not stored.
pub async fn login_post(State(state): State<AppState>) -> Json<LoginResponse> {
    let token = generate_token(state.config.auth.token_length);
    tracing::info!("Issued login token");
    Json(LoginResponse { token })
}
