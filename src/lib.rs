//! Lifeline clinical records server core library
//!
//! This module exports the core functionality of the Lifeline API server.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
