//! Patient row projection

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// Patient as exposed by the API.
///
/// `patient_id` is the primary key and never NULL. Other columns may be
/// NULL and serialize as `null`; `date_of_birth` otherwise serializes as
/// `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Patient {
    pub patient_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_exactly_four_fields() {
        let patient = Patient {
            patient_id: 1,
            first_name: Some("Lanni".into()),
            last_name: Some("Smith".into()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
        };

        let value = serde_json::to_value(&patient).unwrap();
        assert_eq!(
            value,
            json!({
                "patient_id": 1,
                "first_name": "Lanni",
                "last_name": "Smith",
                "date_of_birth": "1990-01-01"
            })
        );
    }

    #[test]
    fn null_columns_serialize_as_null() {
        let patient = Patient {
            patient_id: 7,
            first_name: Some("Lanni".into()),
            last_name: None,
            date_of_birth: None,
        };

        let value = serde_json::to_value(&patient).unwrap();
        assert_eq!(
            value,
            json!({
                "patient_id": 7,
                "first_name": "Lanni",
                "last_name": null,
                "date_of_birth": null
            })
        );
    }
}
