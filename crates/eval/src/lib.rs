// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards poker hand evaluator.
//!
//! The evaluator classifies a five cards hand into one of eleven categories
//! and gives it a score, a hand in a stronger category always scores more
//! than a hand in a weaker one:
//!
//! ```
//! # use fivecard_eval::*;
//! let royal = "AS KS QS JS TS".parse::<Hand>().unwrap();
//! let full = "8C 8H 8S 7C 7D".parse::<Hand>().unwrap();
//!
//! assert_eq!(tell_hand_ranking(royal.cards()).unwrap().name(), "royal straight flush");
//! assert_eq!(tell_hand_ranking(full.cards()).unwrap(), HandRank::FullHouse);
//! assert!(rank(royal.cards()).unwrap() > rank(full.cards()).unwrap());
//! ```
//!
//! Hands with the wrong number of cards or with the same card twice are
//! rejected:
//!
//! ```
//! # use fivecard_eval::*;
//! let mut deck = Deck::new();
//! let cards = (0..4).map(|_| deck.pop()).collect::<Result<Vec<_>, _>>().unwrap();
//! assert_eq!(rank(&cards), Err(EvalError::InvalidHandSize(4)));
//! ```
//!
//! Scores don't look at kickers, two one pair hands score the same, use
//! [HandValue] to order hands within a category.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub mod eval;
mod hand;

pub use error::EvalError;
pub use eval::{
    HandRank, HandValue, Kind, find_a_kind, is_flush, is_straight, rank, tell_hand_ranking,
    winners,
};
pub use hand::Hand;

// Reexport cards types.
pub use fivecard_cards::{Card, CardError, Deck, Rank, Suit};
