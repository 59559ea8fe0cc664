//! Store access interface
//!
//! Handlers receive a `HospitalStore` through application state, so the
//! MySQL-backed store can be swapped for an in-memory double in tests.

use async_trait::async_trait;

use crate::models::{FilterValue, Patient, Provider};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Read-only queries over the `patients` and `providers` tables.
#[async_trait]
pub trait HospitalStore: Send + Sync {
    /// All rows of `patients`.
    async fn list_patients(&self) -> Result<Vec<Patient>, DbError>;

    /// Rows of `patients` whose `first_name` equals `first_name` exactly.
    async fn patients_by_first_name(
        &self,
        first_name: &FilterValue,
    ) -> Result<Vec<Patient>, DbError>;

    /// All rows of `providers`.
    async fn list_providers(&self) -> Result<Vec<Provider>, DbError>;

    /// Rows of `providers` whose `provider_specialty` equals `specialty` exactly.
    async fn providers_by_specialty(
        &self,
        specialty: &FilterValue,
    ) -> Result<Vec<Provider>, DbError>;
}
