//! Welcome endpoint

use axum::{routing::get, Router};

/// Plain-text body served at `/`
pub const WELCOME: &str = "Welcome to the hospital_db API Endpoint";

/// GET /
async fn welcome() -> &'static str {
    WELCOME
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(welcome))
}
