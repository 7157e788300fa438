//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - In-memory credential store
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Login against a single configured account (`/user/login`)
//! - Account field validation without persistence (`/user/create`)
//!
//! ## Security Model
//! - Passwords zeroized on drop and redacted in `Debug`
//! - Login matches the configured email and password exactly, comparing
//!   password digests in constant time
//! - Every login failure returns the same 401 detail

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryCredentialStore;
pub use presentation::router::{auth_router, auth_router_with_store};
