//! MySQL-backed store
//!
//! Owns the process-wide connection. Queries are serialized through an
//! async mutex that is held for a single round-trip only.

use async_trait::async_trait;
use sqlx::mysql::MySqlConnection;
use tokio::sync::Mutex;

use super::connection::{connect, DbConfig};
use super::store::{DbError, HospitalStore};
use crate::models::{FilterValue, Patient, Provider};

const LIST_PATIENTS: &str =
    "SELECT patient_id, first_name, last_name, date_of_birth FROM patients";

const PATIENTS_BY_FIRST_NAME: &str =
    "SELECT patient_id, first_name, last_name, date_of_birth FROM patients WHERE first_name = ?";

const LIST_PROVIDERS: &str = "SELECT first_name, last_name, provider_specialty FROM providers";

const PROVIDERS_BY_SPECIALTY: &str =
    "SELECT first_name, last_name, provider_specialty FROM providers WHERE provider_specialty = ?";

/// Store backed by one long-lived MySQL connection
pub struct MySqlStore {
    conn: Mutex<MySqlConnection>,
}

impl MySqlStore {
    pub fn new(conn: MySqlConnection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Open the connection and wrap it.
    pub async fn connect(config: &DbConfig) -> Result<Self, DbError> {
        let conn = connect(config).await?;
        Ok(Self::new(conn))
    }
}

#[async_trait]
impl HospitalStore for MySqlStore {
    async fn list_patients(&self) -> Result<Vec<Patient>, DbError> {
        let mut conn = self.conn.lock().await;
        let patients = sqlx::query_as::<_, Patient>(LIST_PATIENTS)
            .fetch_all(&mut *conn)
            .await?;

        tracing::debug!(rows = patients.len(), "Listed patients");
        Ok(patients)
    }

    async fn patients_by_first_name(
        &self,
        first_name: &FilterValue,
    ) -> Result<Vec<Patient>, DbError> {
        let mut conn = self.conn.lock().await;
        let patients = sqlx::query_as::<_, Patient>(PATIENTS_BY_FIRST_NAME)
            .bind(first_name.as_str())
            .fetch_all(&mut *conn)
            .await?;

        tracing::debug!(first_name = %first_name.as_str(), rows = patients.len(), "Filtered patients");
        Ok(patients)
    }

    async fn list_providers(&self) -> Result<Vec<Provider>, DbError> {
        let mut conn = self.conn.lock().await;
        let providers = sqlx::query_as::<_, Provider>(LIST_PROVIDERS)
            .fetch_all(&mut *conn)
            .await?;

        tracing::debug!(rows = providers.len(), "Listed providers");
        Ok(providers)
    }

    async fn providers_by_specialty(
        &self,
        specialty: &FilterValue,
    ) -> Result<Vec<Provider>, DbError> {
        let mut conn = self.conn.lock().await;
        let providers = sqlx::query_as::<_, Provider>(PROVIDERS_BY_SPECIALTY)
            .bind(specialty.as_str())
            .fetch_all(&mut *conn)
            .await?;

        tracing::debug!(provider_specialty = %specialty.as_str(), rows = providers.len(), "Filtered providers");
        Ok(providers)
    }
}
