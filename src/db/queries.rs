//! One method per SQL statement or stored-procedure call.
//!
//! Everything is parameterized; request-derived values never reach the SQL
//! text. Writes that belong to a multi-row workflow go through the store's
//! procedures (`RegisterNewPatient`, `ScheduleNewTest`, `DeletePatient`,
//! `DeleteTest`), which own atomicity and cascade semantics.

use anyhow::anyhow;
use tracing::instrument;

use super::Database;
use crate::error::ApiError;
use crate::models::activity::{RecentPatientRow, RecentTestRow, FEED_SOURCE_LIMIT};
use crate::models::patient::{NewPatient, Patient, UpdatePatientRequest};
use crate::models::staff::{Doctor, Reviewer};
use crate::models::test::{NewTest, Test, TestBreakdown, UpdateTestRequest};

impl Database {
    // ===== Patients =====

    pub async fn list_patients(&self) -> Result<Vec<Patient>, ApiError> {
        let patients = sqlx::query_as::<_, Patient>("SELECT * FROM Patient")
            .fetch_all(self.pool())
            .await?;
        Ok(patients)
    }

    pub async fn get_patient(&self, patient_id: i64) -> Result<Option<Patient>, ApiError> {
        let patient = sqlx::query_as::<_, Patient>("SELECT * FROM Patient WHERE patient_id = ?")
            .bind(patient_id)
            .fetch_optional(self.pool())
            .await?;
        Ok(patient)
    }

    /// Calls `RegisterNewPatient` and reads back the generated id.
    ///
    /// The OUT parameter lives in session state, so both statements must run
    /// on the same pooled connection.
    #[instrument(skip(self, patient), fields(contact = %patient.contact_number))]
    pub async fn register_patient(&self, patient: &NewPatient) -> Result<i64, ApiError> {
        let mut conn = self.pool().acquire().await?;

        sqlx::query("CALL RegisterNewPatient(?, ?, ?, ?, ?, ?, ?, @new_patient_id)")
            .bind(&patient.first_name)
            .bind(&patient.last_name)
            .bind(patient.date_of_birth)
            .bind(&patient.gender)
            .bind(&patient.contact_number)
            .bind(&patient.email)
            .bind(&patient.address)
            .execute(&mut *conn)
            .await?;

        let patient_id: Option<i64> = sqlx::query_scalar("SELECT @new_patient_id")
            .fetch_one(&mut *conn)
            .await?;
        patient_id.ok_or_else(|| anyhow!("RegisterNewPatient returned no patient id").into())
    }

    #[instrument(skip(self, patient))]
    pub async fn update_patient(
        &self,
        patient_id: i64,
        patient: &UpdatePatientRequest,
    ) -> Result<(), ApiError> {
        sqlx::query(
            "UPDATE Patient
             SET first_name = ?, last_name = ?, date_of_birth = ?, gender = ?,
                 contact_number = ?, email = ?, address = ?
             WHERE patient_id = ?",
        )
        .bind(&patient.first_name)
        .bind(&patient.last_name)
        .bind(patient.date_of_birth)
        .bind(&patient.gender)
        .bind(&patient.contact_number)
        .bind(&patient.email)
        .bind(&patient.address)
        .bind(patient_id)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// Hard delete; the procedure cascades to the patient's tests.
    #[instrument(skip(self))]
    pub async fn delete_patient(&self, patient_id: i64) -> Result<(), ApiError> {
        sqlx::query("CALL DeletePatient(?)")
            .bind(patient_id)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    // ===== Tests =====

    pub async fn list_tests(&self) -> Result<Vec<Test>, ApiError> {
        let tests = sqlx::query_as::<_, Test>("SELECT * FROM Test")
            .fetch_all(self.pool())
            .await?;
        Ok(tests)
    }

    pub async fn get_test(&self, test_id: i64) -> Result<Option<Test>, ApiError> {
        let test = sqlx::query_as::<_, Test>("SELECT * FROM Test WHERE test_id = ?")
            .bind(test_id)
            .fetch_optional(self.pool())
            .await?;
        Ok(test)
    }

    #[instrument(skip(self, test), fields(patient_id = test.patient_id, test_name = %test.test_name))]
    pub async fn schedule_test(&self, test: &NewTest) -> Result<(), ApiError> {
        sqlx::query("CALL ScheduleNewTest(?, ?, ?, ?)")
            .bind(test.patient_id)
            .bind(test.doctor_id)
            .bind(&test.test_name)
            .bind(&test.test_date)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    #[instrument(skip(self, update))]
    pub async fn update_test(
        &self,
        test_id: i64,
        update: &UpdateTestRequest,
    ) -> Result<(), ApiError> {
        sqlx::query("UPDATE Test SET status = ?, report_details = ? WHERE test_id = ?")
            .bind(&update.status)
            .bind(&update.report_details)
            .bind(test_id)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// Soft delete: the row stays, flagged "Cancelled".
    #[instrument(skip(self))]
    pub async fn cancel_test(&self, test_id: i64) -> Result<(), ApiError> {
        sqlx::query("UPDATE Test SET status = 'Cancelled' WHERE test_id = ?")
            .bind(test_id)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// Hard delete via the store's procedure.
    #[instrument(skip(self))]
    pub async fn delete_test(&self, test_id: i64) -> Result<(), ApiError> {
        sqlx::query("CALL DeleteTest(?)")
            .bind(test_id)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    // ===== Staff =====

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        let doctors = sqlx::query_as::<_, Doctor>(
            "SELECT doctor_id, first_name, last_name, specialization, contact_number, email
             FROM Doctor",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(doctors)
    }

    pub async fn list_reviewers(&self) -> Result<Vec<Reviewer>, ApiError> {
        let reviewers = sqlx::query_as::<_, Reviewer>(
            "SELECT r.reviewer_id, r.first_name, r.last_name, r.role, d.department_name
             FROM Reviewer r
             LEFT JOIN Department d ON r.department_id = d.department_id",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(reviewers)
    }

    // ===== Dashboard statistics =====

    pub async fn count_patients(&self) -> Result<i64, ApiError> {
        let total = sqlx::query_scalar("SELECT COUNT(*) FROM Patient")
            .fetch_one(self.pool())
            .await?;
        Ok(total)
    }

    pub async fn count_pending_tests(&self) -> Result<i64, ApiError> {
        let total = sqlx::query_scalar("SELECT COUNT(*) FROM Test WHERE status = 'Pending'")
            .fetch_one(self.pool())
            .await?;
        Ok(total)
    }

    pub async fn count_staff(&self) -> Result<i64, ApiError> {
        let doctors = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Doctor")
            .fetch_one(self.pool());
        let reviewers = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Reviewer")
            .fetch_one(self.pool());
        let (doctors, reviewers) = futures::try_join!(doctors, reviewers)?;
        Ok(doctors + reviewers)
    }

    pub async fn test_breakdown(&self) -> Result<TestBreakdown, ApiError> {
        let pending = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM Test WHERE status = 'Pending'",
        )
        .fetch_one(self.pool());
        let in_progress = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM Test WHERE status IN ('Scheduled', 'In Progress')",
        )
        .fetch_one(self.pool());
        let completed = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM Test WHERE status = 'Completed'",
        )
        .fetch_one(self.pool());
        let today = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM Test WHERE DATE(test_date) = CURDATE()",
        )
        .fetch_one(self.pool());

        let (pending, in_progress, completed, today) =
            futures::try_join!(pending, in_progress, completed, today)?;
        Ok(TestBreakdown {
            pending,
            in_progress,
            completed,
            today,
        })
    }

    pub async fn recent_patients(&self) -> Result<Vec<RecentPatientRow>, ApiError> {
        let rows = sqlx::query_as::<_, RecentPatientRow>(
            "SELECT patient_id, first_name, last_name, registration_date
             FROM Patient
             ORDER BY registration_date DESC
             LIMIT ?",
        )
        .bind(FEED_SOURCE_LIMIT)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    pub async fn recent_tests(&self) -> Result<Vec<RecentTestRow>, ApiError> {
        let rows = sqlx::query_as::<_, RecentTestRow>(
            "SELECT t.test_name, t.status, t.test_date, p.first_name, p.last_name
             FROM Test t
             JOIN Patient p ON p.patient_id = t.patient_id
             ORDER BY t.test_date DESC
             LIMIT ?",
        )
        .bind(FEED_SOURCE_LIMIT)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    /// Store liveness probe for the health endpoint.
    pub async fn ping(&self) -> Result<(), ApiError> {
        sqlx::query("SELECT 1").execute(self.pool()).await?;
        Ok(())
    }
}
