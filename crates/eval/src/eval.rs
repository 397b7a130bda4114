// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand ranking.
use serde::Serialize;
use std::{fmt, iter};

use drawpoker_cards::{Card, Hand, Rank};

use crate::{EvalError, Result};

/// A poker hand category from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandCategory {
    /// No other category.
    #[serde(rename = "High Card")]
    HighCard = 1,
    /// Two cards of the same rank.
    #[serde(rename = "One Pair")]
    OnePair,
    /// Two pairs of different ranks.
    #[serde(rename = "Two Pair")]
    TwoPair,
    /// Three cards of the same rank.
    #[serde(rename = "Three of a Kind")]
    ThreeOfAKind,
    /// Five consecutive ranks.
    #[serde(rename = "Straight")]
    Straight,
    /// Five cards of the same suit.
    #[serde(rename = "Flush")]
    Flush,
    /// Three of a kind and a pair.
    #[serde(rename = "Full House")]
    FullHouse,
    /// Four cards of the same rank.
    #[serde(rename = "Four of a Kind")]
    FourOfAKind,
    /// A straight in a single suit.
    #[serde(rename = "Straight Flush")]
    StraightFlush,
    /// An ace high straight flush.
    #[serde(rename = "Royal Flush")]
    RoyalFlush,
}

impl HandCategory {
    /// The numeric rank of this category, from 1 for a high card up to 10 for
    /// a royal flush.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// The category label.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A ranked five cards hand.
///
/// Ranked hands compare by category and then by tiebreaker values, in
/// lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedHand {
    category: HandCategory,
    category_rank: u8,
    tiebreaker: Vec<u8>,
}

impl RankedHand {
    fn new(category: HandCategory, tiebreaker: Vec<u8>) -> Self {
        Self {
            category,
            category_rank: category.rank(),
            tiebreaker,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The hand category rank, higher is stronger.
    pub fn category_rank(&self) -> u8 {
        self.category_rank
    }

    /// The values used to break ties between hands in the same category.
    pub fn tiebreaker(&self) -> &[u8] {
        &self.tiebreaker
    }

    /// The hand category label.
    pub fn name(&self) -> &'static str {
        self.category.name()
    }
}

impl fmt::Display for RankedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.tiebreaker)
    }
}

/// Ranks a five cards hand.
///
/// Fails with [EvalError::InvalidHandSize] if the hand doesn't have exactly
/// five cards, and with [EvalError::DuplicateCard] if a card is repeated.
/// Straights are ace high only, A-2-3-4-5 is not a straight.
pub fn rank_hand(cards: &[Card]) -> Result<RankedHand> {
    if cards.len() != Hand::SIZE {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }

    // Card ids fit in 6 bits.
    let mut seen = 0u64;
    for card in cards {
        let bit = 1u64 << card.id();
        if seen & bit != 0 {
            return Err(EvalError::DuplicateCard(*card));
        }
        seen |= bit;
    }

    let mut values = cards.iter().map(|c| c.rank().value()).collect::<Vec<_>>();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let is_straight = values.windows(2).all(|w| w[0] == w[1] + 1);

    let mut counts = [0u8; Rank::Ace as usize + 1];
    for &v in &values {
        counts[v as usize] += 1;
    }

    let quads = ranks_with_count(&counts, 4);
    let trips = ranks_with_count(&counts, 3);
    let pairs = ranks_with_count(&counts, 2);
    let kickers = ranks_with_count(&counts, 1);

    let ranked = if is_flush && is_straight && values[0] == Rank::Ace.value() {
        RankedHand::new(HandCategory::RoyalFlush, values)
    } else if is_flush && is_straight {
        RankedHand::new(HandCategory::StraightFlush, values)
    } else if let Some(&quad) = quads.first() {
        RankedHand::new(HandCategory::FourOfAKind, vec![quad])
    } else if let (Some(&trip), Some(&pair)) = (trips.first(), pairs.first()) {
        RankedHand::new(HandCategory::FullHouse, vec![trip, pair])
    } else if is_flush {
        RankedHand::new(HandCategory::Flush, values)
    } else if is_straight {
        RankedHand::new(HandCategory::Straight, values)
    } else if let Some(&trip) = trips.first() {
        RankedHand::new(HandCategory::ThreeOfAKind, vec![trip])
    } else if pairs.len() == 2 {
        // Pairs are highest first, the kicker goes last.
        RankedHand::new(HandCategory::TwoPair, [pairs, kickers].concat())
    } else if let Some(&pair) = pairs.first() {
        let tiebreaker = iter::once(pair).chain(kickers).collect();
        RankedHand::new(HandCategory::OnePair, tiebreaker)
    } else {
        RankedHand::new(HandCategory::HighCard, values)
    };

    Ok(ranked)
}

/// Returns the rank values that appear `n` times, highest first.
fn ranks_with_count(counts: &[u8], n: u8) -> Vec<u8> {
    Rank::ranks()
        .rev()
        .map(|r| r.value())
        .filter(|&v| counts[v as usize] == n)
        .collect()
}
