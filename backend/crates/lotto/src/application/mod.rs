//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic.
//! Contains use case implementations.

pub mod check_results;
pub mod config;
pub mod generate_numbers;
