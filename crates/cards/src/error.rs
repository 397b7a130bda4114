// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

use crate::Card;

/// Result type for cards operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by cards, deck and hand operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A card token could not be parsed.
    #[error("invalid card `{0}`")]
    InvalidCard(String),
    /// A card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A hand was built with more than five cards.
    #[error("a hand holds at most 5 cards, got {0}")]
    HandTooLarge(usize),
    /// Dealing was requested for zero players.
    #[error("at least one player is required to deal")]
    NoPlayers,
    /// The player index is out of range.
    #[error("invalid player index {0}")]
    InvalidPlayer(usize),
    /// The card position is outside the hand.
    #[error("invalid card position {0}")]
    InvalidPosition(usize),
    /// The same card position was selected twice.
    #[error("card position {0} selected more than once")]
    DuplicatePosition(usize),
    /// The draw pile cannot cover the requested replacements.
    #[error("draw pile exhausted: {requested} cards requested, {available} left")]
    DrawPileExhausted {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the draw pile.
        available: usize,
    },
}
