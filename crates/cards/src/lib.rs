// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker cards types.
//!
//! This crate define types to create cards, that print and parse as the rank
//! followed by the suit glyph:
//!
//! ```
//! # use drawpoker_cards::{Card, Rank, Suit};
//! let th = Card::new(Rank::Ten, Suit::Hearts);
//! assert_eq!(th.to_string(), "10♥");
//! assert_eq!("10♥".parse::<Card>().unwrap(), th);
//! ```
//!
//! a [Deck] type for shuffling and dealing five cards hands:
//!
//! ```
//! # use drawpoker_cards::{Deck, shuffle_and_deal};
//! let deal = shuffle_and_deal(Deck::default(), 4, &mut rand::rng()).unwrap();
//! assert_eq!(deal.hands.len(), 4);
//! assert_eq!(deal.remaining.count(), 32);
//! ```
//!
//! and [replace_cards] to draw replacement cards for a player:
//!
//! ```
//! # use drawpoker_cards::{Card, Deck, Hand, replace_cards};
//! let pile = ["Q♠", "K♠", "A♠"].iter().map(|c| c.parse::<Card>().unwrap());
//! let mut deck = Deck::from_cards(pile.collect()).unwrap();
//! let mut hands = vec!["2♣ 3♣ 4♣ 5♣ 6♣".parse::<Hand>().unwrap()];
//! replace_cards(&mut hands, &mut deck, 0, &[0, 4]).unwrap();
//! assert_eq!(hands[0].to_string(), "A♠ 3♣ 4♣ 5♣ K♠");
//! assert_eq!(deck.count(), 1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, CardFace, Deal, Deck, Rank, Suit, shuffle_and_deal};

mod error;
pub use error::{Error, Result};

mod hand;
pub use hand::{Hand, replace_cards};
