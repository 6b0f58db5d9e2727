//! Liveness probe: round-trips the store so a dead pool shows up here first.

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::db::Database;
use crate::error::ApiError;

#[get("/health")]
pub async fn health(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    db.ping().await?;
    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}
