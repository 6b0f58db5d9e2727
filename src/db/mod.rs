//! Database module for the Lifeline server
//!
//! This module handles the connection pool and all SQL issued by the API.
//! The schema (tables and the four stored procedures) is owned by the store;
//! nothing here creates or migrates it.

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::config::Settings;

pub mod queries;

/// Pool size shared across all in-flight requests.
const MAX_CONNECTIONS: u32 = 10;

/// Database connection pool
#[derive(Clone)]
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// Create a new database connection pool
    pub async fn connect(settings: &Settings) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(settings.connect_options())
            .await?;
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}
