// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Playing cards types for five-card poker hands.
//!
//! Cards are parsed from two characters face strings, a rank symbol followed
//! by a suit symbol:
//!
//! ```
//! # use fivecard_cards::{Card, Rank, Suit};
//! let ah = Card::from_face("AH").unwrap();
//! assert_eq!(ah.rank(), Rank::Ace);
//! assert_eq!(ah.suit(), Suit::Hearts);
//! assert_eq!(ah.value(), 14);
//! assert_eq!(ah.to_string(), "AH");
//!
//! // Cards compare by rank only.
//! assert_eq!(ah, Card::new(Rank::Ace, Suit::Spades));
//! assert!(Card::from_face("1H").is_err());
//! ```
//!
//! The [Deck] type holds the 52 cards and deals from the top:
//!
//! ```
//! # use fivecard_cards::Deck;
//! let mut deck = Deck::new();
//! let hand = (0..5).map(|_| deck.pop()).collect::<Result<Vec<_>, _>>().unwrap();
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.len(), 47);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
mod deck;
mod error;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::CardError;
