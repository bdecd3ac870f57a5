//! Main [axum::Router] interface for webserver.

use crate::{
    app_state::AppState,
    routes::{email, fallback::notfound_404, health, ping},
    setups::ServerSetup,
};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Setup main router for application.
pub fn setup_app_router<S: ServerSetup + 'static>(app_state: AppState<S>) -> Router {
    let router = Router::new()
        .route("/ping", get(ping::get))
        .route("/healthcheck", get(health::healthcheck::<S>))
        .fallback(notfound_404)
        .with_state(app_state.clone());

    let cors = CorsLayer::new()
        .allow_methods([http::Method::GET, http::Method::POST])
        .allow_headers([http::header::CONTENT_TYPE, http::header::ACCEPT])
        // The function is invoked straight from browser clients.
        .allow_origin(Any);

    let api_router = Router::new()
        .route(
            "/email/verification",
            post(email::send_verification_email::<S>),
        )
        .layer(cors)
        .with_state(app_state)
        .fallback(notfound_404);

    router.nest("/api/v0", api_router)
}
