// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A 52 cards deck.
use rand::prelude::*;

use crate::{Card, CardError, Rank, Suit};

/// A cards Deck.
///
/// A new deck is ordered by suit, clubs, diamonds, hearts, and spades, and
/// within a suit from deuce to ace. The top of the deck is the last card, so
/// the first card drawn from a new deck is the ace of spades.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// The number of cards in a hand.
    pub const HAND_SIZE: usize = 5;

    /// Creates a new ordered deck.
    pub fn new() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.cards.shuffle(rng);
        deck
    }

    /// Draws the card at the top of the deck.
    pub fn pop(&mut self) -> Result<Card, CardError> {
        self.cards.pop().ok_or(CardError::EmptyDeck)
    }

    /// Returns the card at the given position, 0 is the bottom of the deck.
    pub fn get(&self, index: usize) -> Result<Card, CardError> {
        self.cards
            .get(index)
            .copied()
            .ok_or(CardError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            })
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Iterates the cards from the bottom to the top of the deck.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Removes a card from the deck, matching both rank and suit.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| !c.same_face(&card));
    }

    /// Calls the `f` closure for each 5-cards hand that can be drawn from
    /// this deck.
    pub fn for_each_hand<F>(&self, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        let n = self.cards.len();
        let mut h = [Card::new(Rank::Ace, Suit::Hearts); Self::HAND_SIZE];

        for c1 in 0..n {
            h[0] = self.cards[c1];

            for c2 in (c1 + 1)..n {
                h[1] = self.cards[c2];

                for c3 in (c2 + 1)..n {
                    h[2] = self.cards[c3];

                    for c4 in (c3 + 1)..n {
                        h[3] = self.cards[c4];

                        for c5 in (c4 + 1)..n {
                            h[4] = self.cards[c5];
                            f(&h);
                        }
                    }
                }
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
