//! Application configuration
//!
//! Settings come from the environment (a local `.env` is loaded first by the
//! binary). Every knob has a development default so a bare `cargo run` against
//! a local MySQL works.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use sqlx::mysql::MySqlConnectOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    /// HTTP listen port.
    pub port: u16,
}

impl Settings {
    /// Connection options for the store. Built field-by-field rather than as a
    /// URL so credentials never need URL-escaping.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }
}

/// Load configuration from environment variables
pub fn load() -> Result<Settings, ConfigError> {
    Config::builder()
        .set_default("db_host", "localhost")?
        .set_default("db_port", 3306)?
        .set_default("db_user", "root")?
        .set_default("db_password", "")?
        .set_default("db_name", "lifeline_db")?
        .set_default("port", 3001)?
        .add_source(Environment::default().try_parsing(true))
        .build()?
        .try_deserialize()
}
