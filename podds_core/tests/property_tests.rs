//! Property-based tests for the deck and card codec invariants (spec §8).
//!
//! Mirrors the split the teacher crate drew between `proptest`-driven
//! universal properties and ordinary example-driven unit tests: the
//! concrete scenarios (specific hand comparisons) live as `#[cfg(test)]`
//! unit tests next to `eval.rs`; the properties that must hold for every
//! input live here.

use podds_core::card::Card;
use podds_core::deck::Deck;
use proptest::prelude::*;

fn is_permutation_of_52(seen_flags: &mut [bool; 52], cards: impl Iterator<Item = u8>) -> bool {
    seen_flags.iter_mut().for_each(|f| *f = false);
    for c in cards {
        if c >= 52 || seen_flags[c as usize] {
            return false;
        }
        seen_flags[c as usize] = true;
    }
    true
}

proptest! {
    /// Spec §8.1: codec round-trip. `suit(c)*13 + rank(c) = c` for every
    /// valid index, and every valid two-character token round-trips
    /// through `Display`/`FromStr`.
    #[test]
    fn codec_roundtrip(index in 0u8..52) {
        let card = Card::from_index(index).unwrap();
        prop_assert_eq!(card.index(), index);

        let token = card.to_string();
        let reparsed: Card = token.parse().unwrap();
        prop_assert_eq!(reparsed, card);
    }

    /// Spec §8.2: deck permutation invariant under arbitrary sequences of
    /// reset/draw/pick.
    #[test]
    fn deck_stays_a_permutation(
        seed in any::<u32>(),
        ops in prop::collection::vec(0u8..3, 0..100),
    ) {
        let mut deck = Deck::new(seed);
        let mut seen = [false; 52];

        for op in ops {
            match op {
                0 => {
                    if deck.available() > 0 {
                        deck.draw();
                    }
                }
                1 => {
                    // Pick an arbitrary index; may or may not be available.
                    let candidate = (seed.wrapping_add(deck.available() as u32) % 52) as u8;
                    deck.pick(candidate);
                }
                _ => {
                    deck.reset(52);
                }
            }
        }

        prop_assert!(deck.available() <= 52);

        // Reconstruct the full 52-slot contents via repeated draw on a
        // fresh copy is not observable from the public API, so instead we
        // check the weaker, still-meaningful invariant: every card the
        // deck currently reports available is a distinct valid index.
        let mut available_cards = Vec::new();
        let mut probe = deck.clone();
        let n = probe.available();
        for _ in 0..n {
            available_cards.push(probe.draw());
        }
        prop_assert!(is_permutation_of_52(&mut seen, available_cards.into_iter()));
    }

    /// Spec §8.3: draw-and-pick duality — picking a card draw() would have
    /// returned leaves the deck equivalent to having drawn it.
    #[test]
    fn draw_and_pick_duality(seed in any::<u32>()) {
        let mut by_draw = Deck::new(seed);
        let drawn = by_draw.draw();

        let mut by_pick = Deck::new(seed);
        by_pick.pick(drawn);

        prop_assert_eq!(by_draw.available(), by_pick.available());
        prop_assert!(!by_draw.is_available(drawn));
        prop_assert!(!by_pick.is_available(drawn));
    }

    /// Spec §8.9 (partial): a fixed seed always draws the same sequence.
    #[test]
    fn deterministic_draw_sequence(seed in any::<u32>(), n_draws in 1usize..52) {
        let mut a = Deck::new(seed);
        let mut b = Deck::new(seed);
        for _ in 0..n_draws {
            prop_assert_eq!(a.draw(), b.draw());
        }
    }
}
