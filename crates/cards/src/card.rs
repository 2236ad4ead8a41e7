// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, hash, str::FromStr};

use crate::CardError;

/// Rank symbols in ascending order, indexed by [Rank] discriminant.
const RANK_SYMBOLS: [char; 13] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

/// A Poker card.
///
/// A card is packed in a single word with the following format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxxxxxxx|
///   +--------+--------+--------+--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank of card
/// ```
///
/// Two cards compare equal when they have the same rank, the suit only
/// matters for flushes, use [Card::same_face] or [Card::id] to tell apart
/// cards with the same rank and different suits.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(u32);

/// A Poker card.
impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u32, suit as u32);
        Self((rank << 8) | (suit << 12) | (1 << (rank + 16)))
    }

    /// Parses a card from a two characters face string like `"AC"` or `"TH"`.
    pub fn from_face(face: &str) -> Result<Card, CardError> {
        let invalid = || CardError::InvalidFace(face.to_string());

        let mut chars = face.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => {
                let rank = Rank::from_symbol(r).ok_or_else(invalid)?;
                let suit = Suit::from_symbol(s).ok_or_else(invalid)?;
                Ok(Card::new(rank, suit))
            }
            _ => Err(invalid()),
        }
    }

    /// This card unique id, different for each rank and suit pair.
    pub fn id(&self) -> u32 {
        self.0
    }

    /// Checks if two cards have the same rank and suit.
    pub fn same_face(&self, other: &Card) -> bool {
        self.0 == other.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => unreachable!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match Rank::from_index(self.rank_bits()) {
            Some(rank) => rank,
            None => unreachable!("Invalid rank 0x{:x}", self.0),
        }
    }

    /// The card comparison value, from 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        self.rank().value()
    }

    /// Returns the rank index bits (deuce=0,...,ace=12).
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// Returns the one hot rank mask with bit 0 for a deuce and 12 for an ace.
    #[inline]
    pub fn rank_mask(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        ((self.0 >> 12) & 0xf) as u8
    }

    /// The face string for this card.
    pub fn face(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank_bits() == other.rank_bits()
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank_bits().cmp(&other.rank_bits())
    }
}

impl hash::Hash for Card {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.rank_bits().hash(state);
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_face(s)
    }
}

impl TryFrom<&str> for Card {
    type Error = CardError;

    fn try_from(face: &str) -> Result<Self, Self::Error> {
        Card::from_face(face)
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(face: String) -> Result<Self, Self::Error> {
        Card::from_face(&face)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// All ranks from deuce to ace.
    pub const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The rank for an index (deuce=0,...,ace=12).
    pub fn from_index(index: u8) -> Option<Rank> {
        Self::ALL.get(index as usize).copied()
    }

    /// The rank for a face symbol, `None` if the symbol is not one of
    /// `23456789TJQKA`.
    pub fn from_symbol(symbol: char) -> Option<Rank> {
        RANK_SYMBOLS
            .iter()
            .position(|&s| s == symbol)
            .and_then(|idx| Self::from_index(idx as u8))
    }

    /// The face symbol for this rank.
    pub fn symbol(&self) -> char {
        RANK_SYMBOLS[*self as usize]
    }

    /// The comparison value, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// The suit for a face symbol, `None` if the symbol is not one of `CDHS`.
    pub fn from_symbol(symbol: char) -> Option<Suit> {
        match symbol {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }

    /// The face symbol for this suit.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
