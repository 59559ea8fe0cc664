//! Provider endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{FilterValue, Provider, ValidationError};

const SPECIALTY_FIELD: &str = "provider specialty";

/// Providers response
#[derive(Debug, Serialize)]
pub struct ProvidersResponse {
    pub providers: Vec<Provider>,
}

/// GET /providers - list all providers
async fn list_providers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProvidersResponse>, ApiError> {
    let providers = state.store.list_providers().await?;
    Ok(Json(ProvidersResponse { providers }))
}

/// GET /providers/{provider_specialty}
async fn providers_by_specialty(
    State(state): State<Arc<AppState>>,
    specialty: Result<Path<String>, PathRejection>,
) -> Result<Json<ProvidersResponse>, ApiError> {
    let Path(specialty) = specialty.map_err(|rejection| {
        tracing::debug!("Rejected path segment: {}", rejection);
        ValidationError::Malformed { field: SPECIALTY_FIELD }
    })?;
    filter_by_specialty(&state, &specialty).await
}

/// GET /providers/
async fn missing_specialty(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProvidersResponse>, ApiError> {
    filter_by_specialty(&state, "").await
}

async fn filter_by_specialty(
    state: &AppState,
    raw: &str,
) -> Result<Json<ProvidersResponse>, ApiError> {
    let specialty = FilterValue::new(raw, SPECIALTY_FIELD)?;
    let providers = state.store.providers_by_specialty(&specialty).await?;
    Ok(Json(ProvidersResponse { providers }))
}

/// Provider routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/providers", get(list_providers))
        .route("/providers/", get(missing_specialty))
        .route("/providers/{provider_specialty}", get(providers_by_specialty))
}
