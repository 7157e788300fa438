//! Lotto Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Grading engine, number generation, entities
//! - `application/` - Use cases and configuration
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Grading Model
//! - A ticket is graded by the distinct numbers it shares with the winning draw
//! - The bonus ball only separates second from third place
//! - Each ticket's `correctNumbers` is echoed back and never used for scoring
//! - Grading is pure; output order always matches input order

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::LottoConfig;
pub use domain::services::{grade, grade_all};
pub use domain::value_objects::Rank;
pub use error::{LottoError, LottoResult};
pub use presentation::router::lotto_router;
