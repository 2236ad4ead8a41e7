// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands           2598960
// Elapsed:              0.412s
// Hands/sec:            6308155
//
// High Card:            1302540
// One Pair:             1098240
// Two Pairs:            123552
// Three Card:           54912
// Straight:             10200
// Flush:                5108
// Full House:           3744
// Four Card:            624
// Back Straight:        4
// Straight Flush:       32
// Royal Straight Flush: 4
// ```

use std::time::Instant;

use fivecard_eval::*;

fn main() -> Result<(), EvalError> {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; HandRank::ALL.len()];
    let mut error = None;

    Deck::default().for_each_hand(|hand| match tell_hand_ranking(hand) {
        Ok(rank) => counts[rank as usize] += 1,
        Err(e) => {
            error.get_or_insert(e);
        }
    });

    if let Some(e) = error {
        return Err(e);
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands           {total}");
    println!("Elapsed:              {:.3}s", elapsed);
    println!("Hands/sec:            {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        let label = format!("{}:", title_case(rank.name()));
        println!("{label:<22}{}", counts[rank as usize]);
    }

    Ok(())
}

fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|c| c.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
