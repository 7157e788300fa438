//! Domain Value Objects
//!
//! Immutable value types for the lotto domain.

use std::fmt;

/// Smallest number a lotto ball can carry
pub const LOTTO_NUMBER_MIN: i32 = 1;

/// Largest number a lotto ball can carry
pub const LOTTO_NUMBER_MAX: i32 = 45;

/// A set of drawn numbers plus the bonus ball
///
/// Used both for the winning draw of a round and for the `correctNumbers`
/// echoed on each ticket. Cardinality and range are not enforced here:
/// grading is defined for any input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LottoNumbers {
    pub numbers: Vec<i32>,
    pub bonus_number: i32,
}

impl LottoNumbers {
    pub fn new(numbers: Vec<i32>, bonus_number: i32) -> Self {
        Self {
            numbers,
            bonus_number,
        }
    }
}

/// Placement of a graded ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    NoWin,
}

impl Rank {
    pub const ALL: [Rank; 6] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::NoWin,
    ];

    /// Map a match count and bonus hit onto a rank
    ///
    /// The bonus ball only matters at five matches, where it separates
    /// second from third place.
    pub const fn from_matches(match_count: usize, has_bonus: bool) -> Self {
        match (match_count, has_bonus) {
            (6, _) => Rank::First,
            (5, true) => Rank::Second,
            (5, false) => Rank::Third,
            (4, _) => Rank::Fourth,
            (3, _) => Rank::Fifth,
            _ => Rank::NoWin,
        }
    }

    /// Label sent to clients in the `result` field
    pub const fn label(&self) -> &'static str {
        match self {
            Rank::First => "1st place",
            Rank::Second => "2nd place",
            Rank::Third => "3rd place",
            Rank::Fourth => "4th place",
            Rank::Fifth => "5th place",
            Rank::NoWin => "no win",
        }
    }

    pub const fn is_winning(&self) -> bool {
        !matches!(self, Rank::NoWin)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
