//! Application Configuration
//!
//! Configuration for the lotto application layer.

use crate::error::{LottoError, LottoResult};

/// Upper bound for either generator dimension
pub const MAX_GENERATOR_DIMENSION: usize = 100;

/// Lotto application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LottoConfig {
    /// Rows returned by `GET /lotto`
    pub draw_count: usize,
    /// Numbers in each row
    pub numbers_per_draw: usize,
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self {
            draw_count: 5,
            numbers_per_draw: 7,
        }
    }
}

impl LottoConfig {
    /// Create a config, rejecting empty or oversized dimensions
    pub fn new(draw_count: usize, numbers_per_draw: usize) -> LottoResult<Self> {
        for (name, value) in [
            ("draw_count", draw_count),
            ("numbers_per_draw", numbers_per_draw),
        ] {
            if !(1..=MAX_GENERATOR_DIMENSION).contains(&value) {
                return Err(LottoError::InvalidConfig(format!(
                    "{} must be between 1 and {} (got {})",
                    name, MAX_GENERATOR_DIMENSION, value
                )));
            }
        }

        Ok(Self {
            draw_count,
            numbers_per_draw,
        })
    }
}
