//! # podds_core
//!
//! Deck, card codec, and hand-evaluation primitives for Monte-Carlo Texas
//! Hold'em equity simulation. This crate is the kernel described in the
//! `podds` design: a 52-card swap-tail deck, a bit-packed 64-bit hand
//! score, and the 7-card maximizer/comparator built on top of it. The
//! `podds` binary crate layers the worker pool, CLI, and output formatting
//! on top of these primitives.
//!
//! ```rust
//! use podds_core::{Card, Deck};
//! use podds_core::eval::{eval7, sort_by_rank_desc, HandCategory};
//! use std::str::FromStr;
//!
//! let mut deck = Deck::new(1);
//! let known = [Card::from_str("Ah").unwrap(), Card::from_str("Kh").unwrap()];
//! for card in known {
//!     deck.remove_known(card.index());
//! }
//!
//! let mut seven = [known[0].index(), known[1].index(), 0, 0, 0, 0, 0];
//! for slot in &mut seven[2..] {
//!     *slot = deck.draw();
//! }
//! sort_by_rank_desc(&mut seven);
//! let score = eval7(&seven);
//! let _category = HandCategory::from_score(score);
//! ```

/// Card representation and the two-character textual codec.
pub mod card;

/// 21 size-5 combinations of `{0..7}`, shared across the evaluator.
pub mod combinations;

/// The 52-card swap-tail deck.
pub mod deck;

/// Structured error type for the whole crate.
pub mod errors;

/// Five/seven-card hand scoring, category classification, and comparator.
pub mod eval;

/// xorshift32 pseudorandom source used by the deck.
pub mod rng;

pub use card::Card;
pub use deck::Deck;
pub use errors::PokerError;
