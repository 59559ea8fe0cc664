//! Patient endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{FilterValue, Patient, ValidationError};

/// Field name used in validation messages
const FIRST_NAME_FIELD: &str = "First name";

/// Patients response
#[derive(Debug, Serialize)]
pub struct PatientsResponse {
    pub patients: Vec<Patient>,
}

/// GET /patients - list all patients
async fn list_patients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PatientsResponse>, ApiError> {
    let patients = state.store.list_patients().await?;
    Ok(Json(PatientsResponse { patients }))
}

/// GET /patients/{first_name} - patients with an exactly matching first name
async fn patients_by_first_name(
    State(state): State<Arc<AppState>>,
    first_name: Result<Path<String>, PathRejection>,
) -> Result<Json<PatientsResponse>, ApiError> {
    let Path(first_name) = first_name.map_err(|rejection| {
        tracing::debug!("Rejected path segment: {}", rejection);
        ValidationError::Malformed { field: FIRST_NAME_FIELD }
    })?;
    filter_by_first_name(&state, &first_name).await
}

/// GET /patients/ - empty first name segment
async fn missing_first_name(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PatientsResponse>, ApiError> {
    filter_by_first_name(&state, "").await
}

async fn filter_by_first_name(
    state: &AppState,
    raw: &str,
) -> Result<Json<PatientsResponse>, ApiError> {
    let first_name = FilterValue::new(raw, FIRST_NAME_FIELD)?;
    let patients = state.store.patients_by_first_name(&first_name).await?;
    Ok(Json(PatientsResponse { patients }))
}

/// Patient routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/patients", get(list_patients))
        .route("/patients/", get(missing_first_name))
        .route("/patients/{first_name}", get(patients_by_first_name))
}
