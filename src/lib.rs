//! Protein Intake Calculator Library
//!
//! Computes daily protein targets from a user profile.

pub mod models;
pub mod protein;
pub mod report;
