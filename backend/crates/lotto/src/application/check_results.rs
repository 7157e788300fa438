//! Check Results Use Case
//!
//! Grades a batch of rounds. Stateless: nothing is stored between calls.

use crate::domain::entities::{GradingRequest, GradingResult};
use crate::domain::services::grade_all;

/// Check Results Use Case
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckResultsUseCase;

impl CheckResultsUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, requests: Vec<GradingRequest>) -> Vec<GradingResult> {
        let results = grade_all(requests);

        let ticket_count: usize = results.iter().map(|r| r.results.len()).sum();
        let winner_count: usize = results.iter().map(GradingResult::winner_count).sum();

        tracing::info!(
            rounds = results.len(),
            tickets = ticket_count,
            winners = winner_count,
            "Checked lotto results"
        );

        results
    }
}
