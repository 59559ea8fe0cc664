//! Provider row projection

use serde::Serialize;
use sqlx::FromRow;

/// Provider as exposed by the API. No identifier is projected; NULL
/// columns serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Provider {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub provider_specialty: Option<String>,
}
