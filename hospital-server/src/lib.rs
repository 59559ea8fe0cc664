//! hospital-server: read-only HTTP API over hospital_db
//!
//! Exposes the `patients` and `providers` tables as JSON list and
//! exact-match filter endpoints, backed by a single MySQL connection.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbConfig, DbError, HospitalStore, MySqlStore};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
