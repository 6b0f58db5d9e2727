use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A row in the `Patient` table. `registration_date` is set by the store at
/// insertion and never written from here.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Patient {
    pub patient_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Option<String>,
    pub contact_number: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub registration_date: NaiveDateTime,
}

/// Registration payload. Everything is optional at the wire level; presence
/// of the identifying fields is checked in [`RegisterPatientRequest::into_validated`].
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterPatientRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Validated registration data, ready to hand to `RegisterNewPatient`.
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub contact_number: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// An empty string counts as absent, matching the original frontend contract.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl RegisterPatientRequest {
    pub fn into_validated(self) -> Result<NewPatient, ApiError> {
        let first_name = present(self.first_name);
        let last_name = present(self.last_name);
        let contact_number = present(self.contact_number);

        match (first_name, last_name, contact_number) {
            (Some(first_name), Some(last_name), Some(contact_number)) => Ok(NewPatient {
                first_name,
                last_name,
                date_of_birth: self.date_of_birth,
                gender: present(self.gender),
                contact_number,
                email: present(self.email),
                address: present(self.address),
            }),
            _ => Err(ApiError::MissingFields(
                "First name, last name, and contact number are required",
            )),
        }
    }
}

/// Full-row update payload for PUT. The row is overwritten wholesale; the
/// store's unique indexes are the only validation applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePatientRequest {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub contact_number: String,
    pub email: Option<String>,
    pub address: Option<String>,
}
