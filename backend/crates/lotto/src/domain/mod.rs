//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Ticket, GradingRequest, GradingResult)
//! - Domain value objects (LottoNumbers, Rank)
//! - Domain services (grading engine, number generation)

pub mod entities;
pub mod services;
pub mod value_objects;
