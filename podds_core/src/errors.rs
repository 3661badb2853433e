//! # Poker Error Types
//!
//! This module defines comprehensive error types for the poker library,
//! replacing string-based errors with structured, type-safe error handling.

use std::fmt;

/// Comprehensive error type for all poker-related operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokerError {
    /// Invalid card rank (must be 0-12).
    InvalidCardRank { rank: u8 },
    /// Invalid card suit (must be 0-3).
    InvalidCardSuit { suit: u8 },
    /// Invalid card index (must be 0-51).
    InvalidCardIndex { index: u8 },
    /// Invalid card string format (wrong length).
    InvalidCardString { string: String },
    /// Invalid rank character in card string.
    InvalidRankCharacter { character: char },
    /// Invalid suit character in card string.
    InvalidSuitCharacter { character: char },
    /// A known card (hole card or community card) was named more than once.
    DuplicateKnownCard { card: String },
    /// More than seven known cards were supplied.
    TooManyKnownCards { count: usize },
    /// Fewer than the two required hole cards were supplied.
    TooFewArguments,
    /// Player count is below the minimum of 2.
    TooFewPlayers { players: u32 },
    /// Player count exceeds the number of distinct two-card hands remaining.
    TooManyPlayers { players: u32, max_players: u32 },
    /// A command-line token was not a valid integer where one was expected.
    InvalidPlayerCount { token: String },
    /// The two aggregate counter sums did not both equal the effective game
    /// total after all workers merged. This indicates a logic bug and
    /// should be unreachable in a correct build.
    CounterChecksumMismatch {
        outcome_total: u64,
        category_total: u64,
        expected: u64,
    },
}

impl fmt::Display for PokerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokerError::InvalidCardRank { rank } => {
                write!(f, "invalid card rank: {}. rank must be 0-12", rank)
            }
            PokerError::InvalidCardSuit { suit } => {
                write!(f, "invalid card suit: {}. suit must be 0-3", suit)
            }
            PokerError::InvalidCardIndex { index } => {
                write!(f, "invalid card index: {}. index must be 0-51", index)
            }
            PokerError::InvalidCardString { string } => {
                write!(
                    f,
                    "invalid card token: '{}'. must be exactly 2 characters (rank + suit)",
                    string
                )
            }
            PokerError::InvalidRankCharacter { character } => {
                write!(
                    f,
                    "invalid rank character: '{}'. must be 2-9, T, J, Q, K, or A",
                    character
                )
            }
            PokerError::InvalidSuitCharacter { character } => {
                write!(
                    f,
                    "invalid suit character: '{}'. must be h, d, c, or s",
                    character
                )
            }
            PokerError::DuplicateKnownCard { card } => {
                write!(f, "duplicate known card: {}", card)
            }
            PokerError::TooManyKnownCards { count } => {
                write!(
                    f,
                    "too many known cards: {}. at most 7 (2 hole + 5 board) are allowed",
                    count
                )
            }
            PokerError::TooFewArguments => {
                write!(
                    f,
                    "usage: podds <players> <card1> <card2> [<card3> ... <card7>]"
                )
            }
            PokerError::TooFewPlayers { players } => {
                write!(f, "invalid player count: {}. must be at least 2", players)
            }
            PokerError::TooManyPlayers {
                players,
                max_players,
            } => {
                write!(
                    f,
                    "invalid player count: {}. at most {} players fit the remaining deck",
                    players, max_players
                )
            }
            PokerError::InvalidPlayerCount { token } => {
                write!(f, "invalid player count: '{}' is not an integer", token)
            }
            PokerError::CounterChecksumMismatch {
                outcome_total,
                category_total,
                expected,
            } => {
                write!(
                    f,
                    "internal consistency failure: outcome counters sum to {}, \
                     category counters sum to {}, expected {} for both",
                    outcome_total, category_total, expected
                )
            }
        }
    }
}

impl std::error::Error for PokerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = PokerError::InvalidCardRank { rank: 13 };
        assert_eq!(error.to_string(), "invalid card rank: 13. rank must be 0-12");

        let error = PokerError::InvalidCardSuit { suit: 4 };
        assert_eq!(error.to_string(), "invalid card suit: 4. suit must be 0-3");

        let error = PokerError::DuplicateKnownCard {
            card: "Ah".to_string(),
        };
        assert!(error.to_string().contains("duplicate known card"));
    }

    #[test]
    fn test_checksum_mismatch_display() {
        let error = PokerError::CounterChecksumMismatch {
            outcome_total: 199_998,
            category_total: 200_000,
            expected: 200_000,
        };
        let msg = error.to_string();
        assert!(msg.contains("199998"));
        assert!(msg.contains("200000"));
    }
}
