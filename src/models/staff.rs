use serde::{Deserialize, Serialize};

/// A row in the `Doctor` table. Read-only from this component.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Doctor {
    pub doctor_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub specialization: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
}

/// A `Reviewer` row joined with its department's name.
/// `department_name` is null when the reviewer has no department (LEFT JOIN).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reviewer {
    pub reviewer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub department_name: Option<String>,
}
