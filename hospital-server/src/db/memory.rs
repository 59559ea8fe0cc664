//! In-memory `HospitalStore` for router tests

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::store::{DbError, HospitalStore};
use crate::models::{FilterValue, Patient, Provider};

/// Serves fixed rows, or fails every query when built with `failing()`.
#[derive(Default)]
pub struct MemoryStore {
    patients: Vec<Patient>,
    providers: Vec<Provider>,
    fail: bool,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new(patients: Vec<Patient>, providers: Vec<Provider>) -> Self {
        Self {
            patients,
            providers,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of queries issued against this store.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Result<(), DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DbError::Sqlx(sqlx::Error::Protocol(
                "simulated connection loss".into(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl HospitalStore for MemoryStore {
    async fn list_patients(&self) -> Result<Vec<Patient>, DbError> {
        self.begin()?;
        Ok(self.patients.clone())
    }

    async fn patients_by_first_name(
        &self,
        first_name: &FilterValue,
    ) -> Result<Vec<Patient>, DbError> {
        self.begin()?;
        Ok(self
            .patients
            .iter()
            .filter(|p| p.first_name.as_deref() == Some(first_name.as_str()))
            .cloned()
            .collect())
    }

    async fn list_providers(&self) -> Result<Vec<Provider>, DbError> {
        self.begin()?;
        Ok(self.providers.clone())
    }

    async fn providers_by_specialty(
        &self,
        specialty: &FilterValue,
    ) -> Result<Vec<Provider>, DbError> {
        self.begin()?;
        Ok(self
            .providers
            .iter()
            .filter(|p| p.provider_specialty.as_deref() == Some(specialty.as_str()))
            .cloned()
            .collect())
    }
}
