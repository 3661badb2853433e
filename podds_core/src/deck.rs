//! # Deck Module
//!
//! A 52-slot swap-to-tail array of card indices, matching the deck in the
//! original `podds` C implementation this crate is a Rust re-expression of.
//!
//! ## Design
//!
//! The deck fuses "this card has been drawn" and "this card is no longer
//! available" into a single prefix length `n`: `slots[0..n)` are the cards
//! still available to draw or pick, and `slots[n..52)` are the cards
//! already dealt this hand, in no particular order. [`Deck::reset`] is O(1)
//! because it never reshuffles — it just restores `n`, and the tail's
//! previously-drawn cards silently become available again. This is the
//! trick that lets a worker replay a fresh game every iteration without
//! reinitializing or reshuffling 52 slots each time: only the known cards
//! (at most 7) are picked out once per worker, and every game thereafter is
//! a cheap `reset` plus a handful of `draw`s.
//!
//! ```rust
//! use podds_core::deck::Deck;
//!
//! let mut deck = Deck::new(1);
//! assert_eq!(deck.available(), 52);
//!
//! let drawn = deck.draw();
//! assert_eq!(deck.available(), 51);
//! assert!(drawn < 52);
//!
//! deck.reset(52);
//! assert_eq!(deck.available(), 52);
//! ```

use crate::rng::Xorshift32;

/// A mutable 52-card permutation with O(1) draw and O(1) reset.
#[derive(Debug, Clone)]
pub struct Deck {
    slots: [u8; 52],
    n: usize,
    rng: Xorshift32,
}

impl Deck {
    /// Creates a new deck with all 52 cards available, seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        let mut slots = [0u8; 52];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self {
            slots,
            n: 52,
            rng: Xorshift32::new(seed),
        }
    }

    /// Number of cards currently available to draw or pick.
    pub fn available(&self) -> usize {
        self.n
    }

    /// Restores the available-card count to `n`. Does not reshuffle: cards
    /// previously drawn into the tail simply become available again, in
    /// whatever order they ended up in.
    ///
    /// # Panics
    ///
    /// Panics if `n > 52`.
    pub fn reset(&mut self, n: usize) {
        assert!(n <= 52, "deck reset count must be at most 52, got {}", n);
        self.n = n;
    }

    /// Draws a uniformly random available card, moving it into the tail and
    /// decrementing the available count. Returns its flat `0..52` index.
    ///
    /// # Panics
    ///
    /// Panics if no cards are available.
    pub fn draw(&mut self) -> u8 {
        assert!(self.n > 0, "cannot draw from an empty deck");
        let j = self.rng.rand_below(self.n as u32) as usize;
        let k = self.slots[j];
        self.n -= 1;
        self.slots.swap(j, self.n);
        k
    }

    /// Removes a specific card from the available prefix, moving it into
    /// the tail and decrementing the available count. A no-op if `card` is
    /// not currently available — the caller is responsible for rejecting
    /// duplicate or already-drawn cards before relying on this (see
    /// [`Deck::remove_known`] for a checked wrapper).
    pub fn pick(&mut self, card: u8) {
        if let Some(i) = self.slots[..self.n].iter().position(|&c| c == card) {
            self.n -= 1;
            self.slots.swap(i, self.n);
        }
    }

    /// Like [`Deck::pick`], but returns `false` instead of silently doing
    /// nothing when `card` was not available. Used by the coordinator to
    /// turn a would-be silent bias (an already-known card ending up still
    /// drawable) into a checked failure at setup time.
    pub fn remove_known(&mut self, card: u8) -> bool {
        match self.slots[..self.n].iter().position(|&c| c == card) {
            Some(i) => {
                self.n -= 1;
                self.slots.swap(i, self.n);
                true
            }
            None => false,
        }
    }

    /// Returns true if `card` is currently in the available prefix.
    pub fn is_available(&self, card: u8) -> bool {
        self.slots[..self.n].contains(&card)
    }
}
