//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS by default, localhost-only on request
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod server;
pub mod error;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
