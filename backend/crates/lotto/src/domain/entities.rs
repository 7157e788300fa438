//! Domain Entities
//!
//! Request-scoped shapes consumed and produced by the grading engine.

use crate::domain::value_objects::{LottoNumbers, Rank};

/// A player's ticket
///
/// `correct_numbers` is carried through to the result untouched; grading
/// never reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub numbers: Vec<i32>,
    pub correct_numbers: LottoNumbers,
}

impl Ticket {
    pub fn new(numbers: Vec<i32>, correct_numbers: LottoNumbers) -> Self {
        Self {
            numbers,
            correct_numbers,
        }
    }
}

/// One round to grade: the winning draw and the tickets played against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingRequest {
    pub index: i32,
    pub winning_numbers: LottoNumbers,
    pub tickets: Vec<Ticket>,
}

/// A ticket with its placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketResult {
    pub numbers: Vec<i32>,
    pub correct_numbers: LottoNumbers,
    pub rank: Rank,
}

/// Graded round, tickets in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingResult {
    pub index: i32,
    pub winning_numbers: LottoNumbers,
    pub results: Vec<TicketResult>,
}

impl GradingResult {
    /// Number of tickets that placed
    pub fn winner_count(&self) -> usize {
        self.results.iter().filter(|r| r.rank.is_winning()).count()
    }
}
