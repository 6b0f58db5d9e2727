//! Row and payload types for the Lifeline schema.

pub mod activity;
pub mod patient;
pub mod staff;
