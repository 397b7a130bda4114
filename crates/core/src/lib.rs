// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker game session shared by the front ends.
//!
//! A [Game] deals five cards to each player, lets each player replace some
//! cards or keep the hand, and ranks all hands once every hand is locked:
//!
//! ```
//! # use drawpoker_core::*;
//! let mut game = Game::new(PlayerNames::default()).unwrap();
//! game.replace(0, &[0, 1]).unwrap();
//! game.lock(1).unwrap();
//! let showdown = game.end_now().unwrap();
//! assert!(!showdown.winners().is_empty());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod error;
pub use error::{GameError, Result};

pub mod game;
pub use game::{Game, Phase};

pub mod players;
pub use players::PlayerNames;

// Reexport cards and evaluation types.
pub use drawpoker_cards::{Card, CardFace, Error as CardsError, Hand, Rank, Suit};
pub use drawpoker_eval::{HandCategory, RankedHand, Showdown};
