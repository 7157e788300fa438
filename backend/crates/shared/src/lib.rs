//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every feature crate agrees on:
//! - The unified [`error::app_error::AppError`] and its result alias
//! - The [`error::kind::ErrorKind`] classification mapped to HTTP status codes
//! - The RFC 7807 problem document sent to clients on failure
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
    pub mod problem;
}
