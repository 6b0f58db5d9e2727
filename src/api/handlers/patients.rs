//! Patient endpoints.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Serialize;

use super::{MutationResponse, Payload};
use crate::db::Database;
use crate::error::ApiError;
use crate::models::patient::{RegisterPatientRequest, UpdatePatientRequest};

#[derive(Debug, Serialize)]
struct RegisterResponse {
    success: bool,
    message: &'static str,
    patient_id: i64,
}

#[get("/patients")]
pub async fn list(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let patients = db.list_patients().await?;
    Ok(HttpResponse::Ok().json(patients))
}

#[get("/patients/{id}")]
pub async fn get(db: web::Data<Database>, path: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    let patient = db
        .get_patient(path.into_inner())
        .await?
        .ok_or(ApiError::NotFound("Patient"))?;
    Ok(HttpResponse::Ok().json(patient))
}

#[post("/patients/register")]
pub async fn register(
    db: web::Data<Database>,
    payload: Payload<RegisterPatientRequest>,
) -> Result<HttpResponse, ApiError> {
    let new_patient = payload.into_inner().into_validated()?;
    let patient_id = db.register_patient(&new_patient).await?;
    Ok(HttpResponse::Ok().json(RegisterResponse {
        success: true,
        message: "Patient registered successfully",
        patient_id,
    }))
}

#[put("/patients/{id}")]
pub async fn update(
    db: web::Data<Database>,
    path: web::Path<i64>,
    payload: Payload<UpdatePatientRequest>,
) -> Result<HttpResponse, ApiError> {
    db.update_patient(path.into_inner(), &payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MutationResponse::new("Patient updated successfully")))
}

#[delete("/patients/{id}")]
pub async fn delete(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    db.delete_patient(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MutationResponse::new(
        "Patient and associated tests deleted",
    )))
}
