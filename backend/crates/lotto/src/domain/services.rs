//! Domain Services
//!
//! Pure domain logic: ticket grading and number generation.

use std::collections::HashSet;

use rand::Rng;

use crate::domain::entities::{GradingRequest, GradingResult, Ticket, TicketResult};
use crate::domain::value_objects::{LOTTO_NUMBER_MAX, LOTTO_NUMBER_MIN, LottoNumbers, Rank};

/// Count distinct values shared by a ticket and the winning numbers
///
/// Duplicates on either side count once.
pub fn count_matches(ticket_numbers: &[i32], winning_numbers: &[i32]) -> usize {
    let winning: HashSet<i32> = winning_numbers.iter().copied().collect();
    ticket_numbers
        .iter()
        .copied()
        .collect::<HashSet<i32>>()
        .intersection(&winning)
        .count()
}

/// Grade one ticket against the winning draw
pub fn grade(ticket_numbers: &[i32], winning_numbers: &[i32], bonus_number: i32) -> Rank {
    let match_count = count_matches(ticket_numbers, winning_numbers);
    let has_bonus = ticket_numbers.contains(&bonus_number);
    Rank::from_matches(match_count, has_bonus)
}

/// Grade a ticket, moving its data into the result
pub fn grade_ticket(winning: &LottoNumbers, ticket: Ticket) -> TicketResult {
    let rank = grade(&ticket.numbers, &winning.numbers, winning.bonus_number);
    TicketResult {
        numbers: ticket.numbers,
        correct_numbers: ticket.correct_numbers,
        rank,
    }
}

/// Grade every ticket of every request
///
/// Output order matches input order, both across requests and across the
/// tickets of a request.
pub fn grade_all(requests: Vec<GradingRequest>) -> Vec<GradingResult> {
    requests
        .into_iter()
        .map(|request| {
            let winning_numbers = request.winning_numbers;
            let results = request
                .tickets
                .into_iter()
                .map(|ticket| grade_ticket(&winning_numbers, ticket))
                .collect();
            GradingResult {
                index: request.index,
                winning_numbers,
                results,
            }
        })
        .collect()
}

/// Draw `draw_count` rows of `numbers_per_draw` numbers in
/// [`LOTTO_NUMBER_MIN`, `LOTTO_NUMBER_MAX`]
///
/// Every number is drawn independently, so a row may repeat a value.
pub fn generate_draws<R>(rng: &mut R, draw_count: usize, numbers_per_draw: usize) -> Vec<Vec<i32>>
where
    R: Rng,
{
    (0..draw_count)
        .map(|_| {
            (0..numbers_per_draw)
                .map(|_| rng.random_range(LOTTO_NUMBER_MIN..=LOTTO_NUMBER_MAX))
                .collect()
        })
        .collect()
}
