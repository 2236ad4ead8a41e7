// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Kicker aware hand values.
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{HandRank, classify, straight_top};
use crate::{Card, EvalError, Hand, Rank};

/// A hand value that breaks ties inside a category.
///
/// The value packs the category and up to five rank indices:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxxxxxx|cccc1111|22223333|44445555|
///   +--------+--------+--------+--------+
///   c = category (high card=0,...,royal straight flush=10)
///   1..5 = ranks ordered by group size and then by rank
/// ```
///
/// Straights only carry their top rank, a five for the wheel. Two values
/// compare the way poker hands do at showdown, while [HandValue::score]
/// returns the category level score of [rank](super::rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct HandValue(u32);

impl HandValue {
    /// Evaluates a five cards hand.
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        Hand::new(cards).map(|hand| Self::from_hand(&hand))
    }

    /// Evaluates a validated hand.
    pub fn from_hand(hand: &Hand) -> HandValue {
        let (rank, _) = classify(hand);

        let ranks = match straight_top(hand) {
            Some(top) => vec![top],
            None => hand.groups().into_iter().map(|(_, r)| r).collect(),
        };

        let value = ranks
            .iter()
            .enumerate()
            .fold((rank as u32) << 20, |v, (idx, r)| {
                v | ((*r as u32) << (16 - 4 * idx))
            });

        HandValue(value)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        let idx = (self.0 >> 20) as usize;
        match HandRank::ALL.get(idx) {
            Some(rank) => *rank,
            None => unreachable!("Invalid hand value 0x{:x}", self.0),
        }
    }

    /// The category level score.
    pub fn score(&self) -> u32 {
        match self.rank() {
            // The first rank of a high card hand is its top card.
            HandRank::HighCard => ((self.0 >> 16) & 0xf) + 1,
            rank => rank.offset(),
        }
    }
}

impl TryFrom<u32> for HandValue {
    type Error = EvalError;

    /// Checks the category and the five rank nibbles of a packed value.
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let category_ok = (value >> 20) < HandRank::ALL.len() as u32;
        let ranks_ok = (0..5).all(|idx| (value >> (4 * idx)) & 0xf <= Rank::Ace as u32);

        if category_ok && ranks_ok {
            Ok(HandValue(value))
        } else {
            Err(EvalError::InvalidHandValue(value))
        }
    }
}

impl From<HandValue> for u32 {
    fn from(value: HandValue) -> Self {
        value.0
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.rank(), self.score())
    }
}
