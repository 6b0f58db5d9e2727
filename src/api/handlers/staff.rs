//! Staff page endpoints: doctors and reviewers are read-only here.

use actix_web::{get, web, HttpResponse};

use crate::db::Database;
use crate::error::ApiError;

#[get("/doctors")]
pub async fn doctors(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let doctors = db.list_doctors().await?;
    Ok(HttpResponse::Ok().json(doctors))
}

#[get("/reviewers")]
pub async fn reviewers(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let reviewers = db.list_reviewers().await?;
    Ok(HttpResponse::Ok().json(reviewers))
}
