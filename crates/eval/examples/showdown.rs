// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Deals five cards hands from a shuffled deck and reports the winners.
//
// ```bash
// $ cargo r --example showdown -- --players 4 --seed 7
// ```
use anyhow::{Result, bail};
use clap::Parser;
use log::{debug, info};
use rand::prelude::*;

use fivecard_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,
    /// Number of deals.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    deals: u32,
    /// Seed for the deck shuffle, random if not given.
    #[clap(long, short)]
    seed: Option<u64>,
}

/// Showdown settings.
struct Config {
    players: usize,
    deals: usize,
    seed: u64,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = Config {
        players: cli.players as usize,
        deals: cli.deals as usize,
        seed: cli.seed.unwrap_or_else(rand::random),
    };

    if let Err(e) = run(&config) {
        log::error!("{e}");
    }
}

fn run(config: &Config) -> Result<()> {
    if config.players * Hand::SIZE > Deck::SIZE {
        bail!("Not enough cards for {} players", config.players);
    }

    info!("Dealing with seed {}", config.seed);
    let mut rng = StdRng::seed_from_u64(config.seed);

    for deal in 1..=config.deals {
        let mut deck = Deck::new_and_shuffled(&mut rng);

        let mut hands = Vec::with_capacity(config.players);
        for _ in 0..config.players {
            let cards = (0..Hand::SIZE)
                .map(|_| deck.pop())
                .collect::<Result<Vec<_>, _>>()?;
            hands.push(Hand::new(&cards)?);
        }
        debug!("Deal {deal} left {} cards in the deck", deck.len());

        for (player, hand) in hands.iter().enumerate() {
            let value = HandValue::from_hand(hand);
            info!("Deal {deal} player {player}: {hand}  {value}");
        }

        let cards = hands.iter().map(Hand::cards).collect::<Vec<_>>();
        let winners = winners(&cards)?;
        let names = winners
            .iter()
            .map(|p| format!("player {p}"))
            .collect::<Vec<_>>()
            .join(", ");
        info!("Deal {deal} won by {names}");
    }

    Ok(())
}
