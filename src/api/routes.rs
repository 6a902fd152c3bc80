use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::handler::{get_scenario, health, submit_feedback};

/// Build the application router.
///
/// Stateless by construction: generation draws from the thread-local RNG
/// and the catalog is compile-time constant, so there is no state to share
/// between requests. CORS is wide open for browser clients on any origin.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/scenario/:module", get(get_scenario))
        .route("/feedback", post(submit_feedback))
        .layer(cors)
}
