// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game errors.
use thiserror::Error;

use drawpoker_eval::EvalError;

/// Result type for game operations.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors returned by game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A deal or draw failed.
    #[error(transparent)]
    Cards(#[from] drawpoker_cards::Error),
    /// Hands evaluation failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// The player index is out of range.
    #[error("invalid player index {0}")]
    InvalidPlayer(usize),
    /// The player hand is already locked for this round.
    #[error("player {0} hand is locked")]
    HandLocked(usize),
    /// The showdown is done, a new round must be dealt.
    #[error("the round is over, deal a new round")]
    RoundOver,
    /// A player name is empty.
    #[error("player name cannot be empty")]
    EmptyName,
    /// The number of players doesn't fit a deck.
    #[error("a game needs between 1 and {max} players, got {count}")]
    InvalidPlayerCount {
        /// The requested number of players.
        count: usize,
        /// The maximum number of players.
        max: usize,
    },
}
