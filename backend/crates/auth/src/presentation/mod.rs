//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::AuthAppState;
pub use router::{auth_router, auth_router_with_store};
