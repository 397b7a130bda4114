// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use drawpoker_cards::Card;

/// Result type for evaluation operations.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors returned when ranking hands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A ranked hand must have exactly five cards.
    #[error("invalid hand: a poker hand must contain exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    /// A card appears more than once in a hand.
    #[error("invalid hand: card {0} appears more than once")]
    DuplicateCard(Card),
    /// Winners were requested for an empty list of hands.
    #[error("at least one player hand is required to determine a winner")]
    NoPlayers,
}
