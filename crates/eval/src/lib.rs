// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker hand evaluator.
//!
//! Ranks five cards hands into the ten poker categories, from high card up to
//! royal flush, with tiebreaker values to compare hands in the same category:
//!
//! ```
//! # use drawpoker_eval::*;
//! let hand = "10♠ 10♥ 9♠ 9♥ 2♠".parse::<Hand>().unwrap();
//! let ranked = rank_hand(&hand).unwrap();
//! assert_eq!(ranked.name(), "Two Pair");
//! assert_eq!(ranked.tiebreaker(), &[10, 9, 2]);
//! ```
//!
//! and determines the winners of a showdown, with more than one winner when
//! the best hands tie:
//!
//! ```
//! # use drawpoker_eval::*;
//! let hands = ["10♠ 10♥ 9♠ 9♥ 3♠", "10♣ 10♦ 9♣ 9♦ 2♣"]
//!     .iter()
//!     .map(|h| h.parse::<Hand>().unwrap())
//!     .collect::<Vec<_>>();
//! let showdown = determine_winner(&hands).unwrap();
//! assert_eq!(showdown.winners(), &[0]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub use error::{EvalError, Result};

pub mod eval;
pub use eval::{HandCategory, RankedHand, rank_hand};

pub mod showdown;
pub use showdown::{Showdown, determine_winner};

// Reexport cards types.
pub use drawpoker_cards::{Card, Deck, Hand, Rank, Suit};
