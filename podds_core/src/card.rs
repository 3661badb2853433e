//! # Card Module
//!
//! Card representation and the textual codec used at the CLI boundary.
//!
//! ## Card Representation
//!
//! Cards are represented with zero-based `u8` values:
//! - **Rank**: 0=Two, 1=Three, ..., 12=Ace
//! - **Suit**: 0=Hearts, 1=Diamonds, 2=Clubs, 3=Spades
//!
//! Internally, the simulator and evaluator work with a flat `0..52` index,
//! `index = suit * 13 + rank`, rather than the `(rank, suit)` pair — this is
//! the representation the deck's swap-tail array stores and the one the
//! evaluator sorts and packs into scores. `Card` is the public, structured
//! view used at the parsing/formatting boundary; `index()`/`from_index()`
//! convert between the two without heap allocation or fallibility beyond
//! the usual range check.
//!
//! ## Examples
//!
//! ```rust
//! use podds_core::Card;
//! use std::str::FromStr;
//!
//! let ace_hearts = Card::from_str("Ah").unwrap();
//! let king_diamonds = Card::from_str("Kd").unwrap();
//!
//! let card = Card::new(12, 0).unwrap(); // Ace of Hearts
//! assert_eq!(card, ace_hearts);
//! assert_eq!(card.index(), 12); // suit 0 * 13 + rank 12
//! ```

use crate::errors::PokerError;
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Represents a playing card with zero-based rank and suit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    /// The card's rank (0=Two to 12=Ace).
    pub rank: u8,
    /// The card's suit (0=Hearts, 1=Diamonds, 2=Clubs, 3=Spades).
    pub suit: u8,
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CardData {
            rank: u8,
            suit: u8,
        }

        let data = CardData::deserialize(deserializer)?;
        Card::new(data.rank, data.suit).map_err(D::Error::custom)
    }
}

impl Card {
    /// Creates a new card from rank and suit values.
    pub fn new(rank: u8, suit: u8) -> Result<Self, PokerError> {
        if rank > 12 {
            return Err(PokerError::InvalidCardRank { rank });
        }
        if suit > 3 {
            return Err(PokerError::InvalidCardSuit { suit });
        }
        Ok(Self { rank, suit })
    }

    /// Returns the card's rank value (0=Two to 12=Ace).
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the card's suit value (0=Hearts, 1=Diamonds, 2=Clubs, 3=Spades).
    pub fn suit(&self) -> u8 {
        self.suit
    }

    /// Returns the flat `0..52` deck index: `suit * 13 + rank`.
    pub fn index(&self) -> u8 {
        self.suit * 13 + self.rank
    }

    /// Builds a card from a flat `0..52` deck index.
    pub fn from_index(index: u8) -> Result<Self, PokerError> {
        if index >= 52 {
            return Err(PokerError::InvalidCardIndex { index });
        }
        Card::new(index % 13, index / 13)
    }

    /// Returns the rank as a character ('2'-'A').
    pub fn rank_char(&self) -> char {
        Self::rank_to_char(self.rank)
    }

    /// Returns the suit as a character ('h', 'd', 'c', 's').
    pub fn suit_char(&self) -> char {
        Self::suit_to_char(self.suit)
    }

    /// Converts a rank character to its u8 value. Returns `None` if invalid.
    pub fn rank_from_char(c: char) -> Option<u8> {
        match c {
            '2' => Some(0),
            '3' => Some(1),
            '4' => Some(2),
            '5' => Some(3),
            '6' => Some(4),
            '7' => Some(5),
            '8' => Some(6),
            '9' => Some(7),
            'T' => Some(8),
            'J' => Some(9),
            'Q' => Some(10),
            'K' => Some(11),
            'A' => Some(12),
            _ => None,
        }
    }

    /// Converts a suit character to its u8 value. Returns `None` if invalid.
    pub fn suit_from_char(c: char) -> Option<u8> {
        match c {
            'h' => Some(0),
            'd' => Some(1),
            'c' => Some(2),
            's' => Some(3),
            _ => None,
        }
    }

    /// Converts a rank u8 value to its character representation.
    pub fn rank_to_char(rank: u8) -> char {
        match rank {
            0 => '2',
            1 => '3',
            2 => '4',
            3 => '5',
            4 => '6',
            5 => '7',
            6 => '8',
            7 => '9',
            8 => 'T',
            9 => 'J',
            10 => 'Q',
            11 => 'K',
            12 => 'A',
            _ => '?',
        }
    }

    /// Converts a suit u8 value to its character representation.
    pub fn suit_to_char(suit: u8) -> char {
        match suit {
            0 => 'h',
            1 => 'd',
            2 => 'c',
            3 => 's',
            _ => '?',
        }
    }
}

impl FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (rank_char, suit_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (r, s),
            _ => {
                return Err(PokerError::InvalidCardString {
                    string: s.to_string(),
                })
            }
        };

        let rank = Card::rank_from_char(rank_char).ok_or(PokerError::InvalidRankCharacter {
            character: rank_char,
        })?;
        let suit = Card::suit_from_char(suit_char).ok_or(PokerError::InvalidSuitCharacter {
            character: suit_char,
        })?;

        Card::new(rank, suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit_char())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank).then(self.suit.cmp(&other.suit))
    }
}
