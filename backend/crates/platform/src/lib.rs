//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, constant-time comparison)
//! - Clear text password handling (NFKC normalization, zeroization)

pub mod crypto;
pub mod password;
