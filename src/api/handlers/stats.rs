//! Dashboard statistics endpoints.

use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::db::Database;
use crate::error::ApiError;
use crate::models::activity::build_feed;

#[derive(Debug, Serialize)]
struct TotalResponse {
    total: i64,
}

#[get("/stats/total-patients")]
pub async fn total_patients(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let total = db.count_patients().await?;
    Ok(HttpResponse::Ok().json(TotalResponse { total }))
}

#[get("/stats/pending-tests")]
pub async fn pending_tests(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let total = db.count_pending_tests().await?;
    Ok(HttpResponse::Ok().json(TotalResponse { total }))
}

#[get("/stats/total-staff")]
pub async fn total_staff(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let total = db.count_staff().await?;
    Ok(HttpResponse::Ok().json(TotalResponse { total }))
}

#[get("/stats/test-breakdown")]
pub async fn test_breakdown(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let breakdown = db.test_breakdown().await?;
    Ok(HttpResponse::Ok().json(breakdown))
}

#[get("/stats/recent-activity")]
pub async fn recent_activity(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let (patients, tests) = futures::try_join!(db.recent_patients(), db.recent_tests())?;
    Ok(HttpResponse::Ok().json(build_feed(patients, tests)))
}
