//! # podds
//!
//! Monte-Carlo Texas Hold'em equity estimator. Given a number of players
//! and between two and seven known cards (the target's hole cards, then
//! zero to five community cards), estimates the target's win/draw
//! probability and the distribution of hand categories it ends up holding,
//! by playing many independent random hands across a worker pool.
//!
//! ```text
//! podds <players> <card1> <card2> [<card3> ... <card7>]
//! ```

use std::collections::HashSet;
use std::env;
use std::str::FromStr;

use podds_core::eval::HandCategory;
use podds_core::{Card, PokerError};

use podds::coordinator::{self, RunConfig, RunReport};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("podds: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), PokerError> {
    let config = parse_args(args)?;
    let report = coordinator::run(&config)?;
    print_report(&report);
    Ok(())
}

/// Parses and validates CLI arguments into a [`RunConfig`]. Environment
/// overrides (`PODDS_WORKERS`, `PODDS_GAMES`) are read here rather than in
/// the coordinator, keeping the coordinator's inputs fully explicit and
/// testable.
fn parse_args(args: &[String]) -> Result<RunConfig, PokerError> {
    if args.len() < 3 {
        return Err(PokerError::TooFewArguments);
    }

    let players: u32 = args[0]
        .parse()
        .map_err(|_| PokerError::InvalidPlayerCount {
            token: args[0].clone(),
        })?;
    if players < 2 {
        return Err(PokerError::TooFewPlayers { players });
    }

    let known_tokens = &args[1..];
    if known_tokens.len() > 7 {
        return Err(PokerError::TooManyKnownCards {
            count: known_tokens.len(),
        });
    }

    let mut known_cards = Vec::with_capacity(known_tokens.len());
    for token in known_tokens {
        known_cards.push(Card::from_str(token)?);
    }

    let mut seen = HashSet::with_capacity(known_cards.len());
    for card in &known_cards {
        if !seen.insert(card.index()) {
            return Err(PokerError::DuplicateKnownCard {
                card: card.to_string(),
            });
        }
    }

    let kc = known_cards.len();
    // Per-game draw budget: 2*(players-1) opponent cards + (7-kc) cards to
    // complete the target's hand, all drawn from the 52-kc available deck.
    // The binding constraint 2*(players-1) + (7-kc) <= 52-kc has kc cancel
    // out entirely, so the cap is the same for every known-card count.
    let max_players = 1 + (52 - kc).saturating_sub(7 - kc) / 2;
    if players as usize > max_players {
        return Err(PokerError::TooManyPlayers {
            players,
            max_players: max_players as u32,
        });
    }

    Ok(RunConfig {
        players,
        known: known_cards.iter().map(Card::index).collect(),
        workers: env_override("PODDS_WORKERS"),
        games: env_override("PODDS_GAMES"),
        seed: None,
    })
}

fn env_override<T: FromStr>(key: &str) -> Option<T> {
    match env::var(key) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                eprintln!("podds: ignoring invalid {}={:?}", key, value);
                None
            }
        },
        Err(_) => None,
    }
}

/// Prints the estimate as `key:value` lines, one metric per line, matching
/// the original `podds` tool's output shape.
fn print_report(report: &RunReport) {
    println!("cores:{}", report.workers);
    println!("games:{}", report.games);
    println!("win:{:.3}", report.win_rate());
    println!("draw:{:.3}", report.draw_rate());
    println!("pair:{:.3}", report.category_rate(HandCategory::Pair as usize));
    println!(
        "two-pairs:{:.3}",
        report.category_rate(HandCategory::TwoPairs as usize)
    );
    println!(
        "three-of-a-kind:{:.3}",
        report.category_rate(HandCategory::ThreeOfAKind as usize)
    );
    println!(
        "straight:{:.3}",
        report.category_rate(HandCategory::Straight as usize)
    );
    println!("flush:{:.3}", report.category_rate(HandCategory::Flush as usize));
    println!(
        "full-house:{:.3}",
        report.category_rate(HandCategory::FullHouse as usize)
    );
    println!(
        "four-of-a-kind:{:.3}",
        report.category_rate(HandCategory::FourOfAKind as usize)
    );
    println!(
        "straight-flush:{:.3}",
        report.category_rate(HandCategory::StraightFlush as usize)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_too_few_arguments() {
        let err = parse_args(&["2".to_string()]).unwrap_err();
        assert_eq!(err, PokerError::TooFewArguments);
    }

    #[test]
    fn test_rejects_non_integer_player_count() {
        let err = parse_args(&["two".to_string(), "As".to_string(), "Ah".to_string()]).unwrap_err();
        assert!(matches!(err, PokerError::InvalidPlayerCount { .. }));
    }

    #[test]
    fn test_rejects_too_few_players() {
        let err = parse_args(&["1".to_string(), "As".to_string(), "Ah".to_string()]).unwrap_err();
        assert_eq!(err, PokerError::TooFewPlayers { players: 1 });
    }

    #[test]
    fn test_rejects_duplicate_known_card() {
        let err = parse_args(&["2".to_string(), "As".to_string(), "As".to_string()]).unwrap_err();
        assert!(matches!(err, PokerError::DuplicateKnownCard { .. }));
    }

    #[test]
    fn test_rejects_too_many_known_cards() {
        let tokens = vec![
            "8".to_string(),
            "As".to_string(),
            "Ah".to_string(),
            "Kc".to_string(),
            "Kd".to_string(),
            "Qs".to_string(),
            "Qh".to_string(),
            "Jc".to_string(),
            "Jd".to_string(),
        ];
        let err = parse_args(&tokens).unwrap_err();
        assert!(matches!(err, PokerError::TooManyKnownCards { count: 8 }));
    }

    #[test]
    fn test_rejects_invalid_card_token() {
        let err = parse_args(&["2".to_string(), "Zz".to_string(), "Ah".to_string()]).unwrap_err();
        assert!(matches!(err, PokerError::InvalidRankCharacter { .. }));
    }

    #[test]
    fn test_rejects_too_many_players_for_known_cards() {
        // Seven known cards leaves 45 cards, enough for 1 + 45/2 = 23 players.
        let mut tokens = vec!["24".to_string()];
        tokens.extend(
            ["As", "Ah", "Kc", "Kd", "Qs", "Qh", "Jc"]
                .iter()
                .map(|s| s.to_string()),
        );
        let err = parse_args(&tokens).unwrap_err();
        assert!(matches!(err, PokerError::TooManyPlayers { .. }));
    }

    #[test]
    fn test_rejects_too_many_players_with_only_hole_cards_known() {
        // kc=2 (just the hole cards): the per-game draw budget is the same
        // 23-player cap as any other kc, since kc cancels out of the
        // binding constraint. A formula that instead scales the cap with
        // kc would wrongly accept up to 26 players here and let a worker
        // overdraw its deck later.
        for players in 24..=26u32 {
            let err = parse_args(&[players.to_string(), "Ah".to_string(), "As".to_string()])
                .unwrap_err();
            assert!(
                matches!(err, PokerError::TooManyPlayers { .. }),
                "players={} should be rejected, got {:?}",
                players,
                err
            );
        }
    }

    #[test]
    fn test_accepts_minimal_valid_input() {
        let config = parse_args(&["2".to_string(), "As".to_string(), "Ah".to_string()]).unwrap();
        assert_eq!(config.players, 2);
        assert_eq!(config.known.len(), 2);
    }
}
