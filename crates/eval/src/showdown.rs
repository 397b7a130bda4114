// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Winners determination.
use serde::Serialize;

use drawpoker_cards::Card;

use crate::{EvalError, RankedHand, Result, rank_hand};

/// The outcome of comparing all players hands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Showdown {
    winners: Vec<usize>,
    ranked_hands: Vec<RankedHand>,
}

impl Showdown {
    /// The winning players indices in ascending order, more than one on a tie.
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }

    /// The ranked hands indexed by player.
    pub fn ranked_hands(&self) -> &[RankedHand] {
        &self.ranked_hands
    }

    /// Checks if a player is a winner.
    pub fn is_winner(&self, player: usize) -> bool {
        self.winners.contains(&player)
    }

    /// Checks if more than one player won.
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }

    /// The winning hand.
    pub fn winning_hand(&self) -> &RankedHand {
        // There is always at least one winner.
        &self.ranked_hands[self.winners[0]]
    }
}

/// Ranks each player hand and finds the winners.
///
/// The players with the strongest category compete on their tiebreakers and
/// all players whose tiebreakers are equal to the best one win. Fails if
/// there are no hands or if a hand doesn't have five cards.
pub fn determine_winner<H: AsRef<[Card]>>(hands: &[H]) -> Result<Showdown> {
    if hands.is_empty() {
        return Err(EvalError::NoPlayers);
    }

    let ranked_hands = hands
        .iter()
        .map(|h| rank_hand(h.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let Some(top) = ranked_hands.iter().map(RankedHand::category_rank).max() else {
        return Err(EvalError::NoPlayers);
    };

    // Keep the lexicographically largest tiebreaker among the contenders.
    let mut best: &[u8] = &[];
    for hand in ranked_hands.iter().filter(|h| h.category_rank() == top) {
        if hand.tiebreaker() > best {
            best = hand.tiebreaker();
        }
    }

    let winners = ranked_hands
        .iter()
        .enumerate()
        .filter(|(_, h)| h.category_rank() == top && h.tiebreaker() == best)
        .map(|(player, _)| player)
        .collect();

    Ok(Showdown {
        winners,
        ranked_hands,
    })
}
