//! API module for the Lifeline server
//!
//! This module contains all API-related functionality.

pub mod handlers;
pub mod routes;

pub use routes::configure;
