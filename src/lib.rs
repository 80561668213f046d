pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod store;
pub mod token;
pub mod types;
pub mod validation;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::middleware::{token_middleware, validate_login_middleware, validate_talker_middleware};
pub use crate::state::AppState;

/// Build the full router over `state`
pub fn app(state: AppState) -> Router {
    let request_logging = state.config.api.enable_request_logging;

    let router = Router::new()
        // Public
        .route("/", get(handlers::public::root))
        .route("/health", get(handlers::public::health))
        .merge(login_routes(&state))
        .merge(talker_routes(&state))
        .layer(CorsLayer::permissive())
        .with_state(state);

    if request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn login_routes(state: &AppState) -> Router<AppState> {
    use handlers::public;

    Router::new().route(
        "/login",
        post(public::login_post)
            .route_layer(from_fn_with_state(state.clone(), validate_login_middleware)),
    )
}

fn talker_routes(state: &AppState) -> Router<AppState> {
    use handlers::{protected, public};

    // route_layer order: the last layer added runs first, so the token check
    // precedes field validation
    let token = from_fn_with_state(state.clone(), token_middleware);
    let validate = from_fn_with_state(state.clone(), validate_talker_middleware);

    Router::new()
        .route(
            "/talker",
            get(public::talker_list).merge(
                post(protected::talker_post)
                    .route_layer(validate.clone())
                    .route_layer(token.clone()),
            ),
        )
        .route(
            "/talker/:id",
            get(public::talker_get)
                .merge(
                    axum::routing::put(protected::talker_put)
                        .route_layer(validate)
                        .route_layer(token.clone()),
                )
                .merge(axum::routing::delete(protected::talker_delete).route_layer(token)),
        )
}

/// Bind the configured address and serve until the process is stopped
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let bind_addr = config.bind_addr();
    let talker_file = config.storage.talker_file.clone();
    let state = AppState::new(config);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    tracing::info!(
        "Talker API listening on http://{} (data: {})",
        bind_addr,
        talker_file.display()
    );

    axum::serve(listener, app(state)).await?;
    Ok(())
}
