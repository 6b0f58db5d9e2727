//! Request handlers, one module per resource.

use actix_web::web::{Form, Json};
use actix_web::Either;
use serde::Serialize;

pub mod health;
pub mod patients;
pub mod staff;
pub mod stats;

/// Write endpoints accept JSON and URL-encoded form bodies interchangeably.
pub type Payload<T> = Either<Json<T>, Form<T>>;

/// Standard body for successful mutations.
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MutationResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
