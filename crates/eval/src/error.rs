// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use fivecard_cards::{Card, CardError};
use thiserror::Error;

/// Errors raised for hands that cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand doesn't have exactly five cards.
    #[error("A hand must have 5 cards, got {0}")]
    InvalidHandSize(usize),
    /// The same rank and suit appears more than once in a hand.
    #[error("Duplicate card {0} in hand")]
    DuplicateCard(Card),
    /// A packed hand value with an unknown category or rank.
    #[error("Invalid hand value 0x{0:x}")]
    InvalidHandValue(u32),
    /// A card face in the hand is invalid.
    #[error(transparent)]
    Card(#[from] CardError),
}
