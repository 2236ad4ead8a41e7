// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A validated five cards hand.
use log::debug;
use std::{fmt, str::FromStr};

use crate::{Card, Deck, EvalError, Rank};

/// A five cards hand with no repeated rank and suit pair.
///
/// The cards are kept in the order they were given, the evaluation never
/// depends on this order.
#[derive(Debug, Clone, Copy)]
pub struct Hand([Card; Hand::SIZE]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = Deck::HAND_SIZE;

    /// Creates a hand from a slice of cards.
    ///
    /// Fails if there are not exactly five cards or if any card appears more
    /// than once.
    pub fn new(cards: &[Card]) -> Result<Hand, EvalError> {
        let cards: [Card; Hand::SIZE] = cards.try_into().map_err(|_| {
            debug!("Rejected hand with {} cards", cards.len());
            EvalError::InvalidHandSize(cards.len())
        })?;

        for (idx, card) in cards.iter().enumerate() {
            if cards[idx + 1..].iter().any(|c| c.same_face(card)) {
                debug!("Rejected hand with duplicate {card}");
                return Err(EvalError::DuplicateCard(*card));
            }
        }

        Ok(Hand(cards))
    }

    /// The hand cards in their original order.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// Checks if two hands hold the same cards in any order.
    pub fn same_cards(&self, other: &Hand) -> bool {
        self.ids() == other.ids()
    }

    /// The rank bits of all cards or-ed together.
    pub(crate) fn rank_mask(&self) -> u16 {
        self.0.iter().fold(0, |mask, c| mask | c.rank_mask())
    }

    /// The suit bits of all cards and-ed together, non zero for a flush.
    pub(crate) fn common_suit(&self) -> u8 {
        self.0.iter().fold(0xf, |bits, c| bits & c.suit_bits())
    }

    /// Groups the cards by rank, returns the (count, rank) pairs sorted by
    /// count and then by rank, highest first.
    pub(crate) fn groups(&self) -> Vec<(u8, Rank)> {
        let mut counts = [0u8; 13];
        for card in &self.0 {
            counts[card.rank_bits() as usize] += 1;
        }

        let mut groups = Rank::ranks()
            .rev()
            .filter(|&r| counts[r as usize] > 0)
            .map(|r| (counts[r as usize], r))
            .collect::<Vec<_>>();

        // Stable sort keeps ranks descending within the same count.
        groups.sort_by(|a, b| b.0.cmp(&a.0));
        groups
    }

    fn ids(&self) -> [u32; Hand::SIZE] {
        let mut ids = self.0.map(|c| c.id());
        ids.sort_unstable();
        ids
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = EvalError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

/// Parses a hand from white space separated faces like `"AS KS QS JS TS"`.
impl FromStr for Hand {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(Card::from_face)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}
