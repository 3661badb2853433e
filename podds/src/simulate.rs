//! # Simulator Worker
//!
//! Each worker owns a private [`Deck`] (with its own RNG stream), a scratch
//! buffer for opponents' hole cards, and a twelve-slot local counter array.
//! It plays its quota of games independently and hands the finished counters
//! back to the coordinator once, at shutdown — no locking inside the hot
//! loop, mirroring the teacher's worker-owns-its-state-then-merges-once
//! concurrency shape.

use podds_core::deck::Deck;
use podds_core::eval::{comp7, eval7, sort_by_rank_desc, HandCategory, Outcome};

/// Counter layout: `[loss, draw, win, high_card, pair, two_pairs,
/// three_of_a_kind, straight, flush, full_house, four_of_a_kind,
/// straight_flush]`.
pub const NUM_COUNTERS: usize = 12;
pub type Counters = [u64; NUM_COUNTERS];

pub const LOSS: usize = 0;
pub const DRAW: usize = 1;
pub const WIN: usize = 2;

/// Owns everything one simulation thread needs to play games independently:
/// a private deck/RNG stream, the target hand's known cards, and a reusable
/// scratch buffer for opponents' hole cards.
pub struct Worker {
    deck: Deck,
    known: [u8; 7],
    kc: usize,
    opponents: usize,
    opp_scratch: Vec<u8>,
}

impl Worker {
    /// Builds a worker seeded with `seed`, playing a `players`-handed table
    /// with `known` cards (the target's hole cards, then 0-5 community
    /// cards) fixed for every game. `known` must already be deduplicated —
    /// see [`podds_core::deck::Deck::remove_known`] for the checked removal
    /// this constructor relies on.
    pub fn new(seed: u32, players: u32, known: &[u8]) -> Self {
        let kc = known.len();
        debug_assert!(kc <= 7);
        debug_assert!(players >= 2);

        let mut deck = Deck::new(seed);
        let mut fixed = [0u8; 7];
        for (i, &card) in known.iter().enumerate() {
            fixed[i] = card;
            let removed = deck.remove_known(card);
            debug_assert!(removed, "duplicate known card reached the worker: {}", card);
        }

        Self {
            deck,
            known: fixed,
            kc,
            opponents: players as usize - 1,
            opp_scratch: vec![0u8; 2 * (players as usize - 1)],
        }
    }

    /// Plays `games` independent hands and returns this worker's local
    /// counters. The deck is reset (not reshuffled) at the start of every
    /// game; only the known cards stay fixed throughout the worker's life.
    pub fn run_quota(&mut self, games: u64) -> Counters {
        let mut local: Counters = [0; NUM_COUNTERS];
        let mut myas = [0u8; 7];
        let mut cs = [0u8; 7];

        for _ in 0..games {
            self.deck.reset(52 - self.kc);

            for slot in self.opp_scratch.iter_mut() {
                *slot = self.deck.draw();
            }

            myas[..self.kc].copy_from_slice(&self.known[..self.kc]);
            for slot in myas[self.kc..7].iter_mut() {
                *slot = self.deck.draw();
            }

            cs.copy_from_slice(&myas);
            sort_by_rank_desc(&mut cs);
            let target = eval7(&cs);

            let mut result = Outcome::Win;
            for j in 0..self.opponents {
                cs[0] = self.opp_scratch[2 * j];
                cs[1] = self.opp_scratch[2 * j + 1];
                cs[2..7].copy_from_slice(&myas[2..7]);
                sort_by_rank_desc(&mut cs);

                result = result.min(comp7(&cs, target));
                if result == Outcome::Loss {
                    break;
                }
            }

            local[result as usize] += 1;
            local[HandCategory::from_score(target) as usize] += 1;
        }

        local
    }
}
