//! Generate Numbers Use Case

use std::sync::Arc;

use rand::Rng;

use crate::application::config::LottoConfig;
use crate::domain::services::generate_draws;

/// Output DTO for generate numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateNumbersOutput {
    pub numbers: Vec<Vec<i32>>,
}

/// Generate Numbers Use Case
pub struct GenerateNumbersUseCase {
    config: Arc<LottoConfig>,
}

impl GenerateNumbersUseCase {
    pub fn new(config: Arc<LottoConfig>) -> Self {
        Self { config }
    }

    /// Draw the configured rows using the caller's RNG
    pub fn execute<R: Rng>(&self, rng: &mut R) -> GenerateNumbersOutput {
        let numbers = generate_draws(rng, self.config.draw_count, self.config.numbers_per_draw);

        tracing::info!(
            draw_count = self.config.draw_count,
            numbers_per_draw = self.config.numbers_per_draw,
            "Generated lotto numbers"
        );

        GenerateNumbersOutput { numbers }
    }
}
