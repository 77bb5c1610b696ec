//! # Unit Components
//!
//! Tests grouped by the crate module they exercise.


/// Configuration defaults, JSON loading, and validation.
pub mod config;






/// Whole programs assembled and run end to end.
pub mod programs;
