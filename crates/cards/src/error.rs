// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck errors.
use thiserror::Error;

/// Errors raised when building cards or drawing from a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The face string is not a rank symbol followed by a suit symbol.
    #[error("Invalid card face {0:?}")]
    InvalidFace(String),
    /// Attempt to draw from an empty deck.
    #[error("Cannot draw from an empty deck")]
    EmptyDeck,
    /// Deck position past the last card.
    #[error("Deck index {index} out of range for {len} cards")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of cards in the deck.
        len: usize,
    },
}
