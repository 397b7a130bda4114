// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player hands and cards replacement.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Deref, str::FromStr};

use crate::{Card, Deck, Error, Result};

/// The cards held by a player.
///
/// A dealt hand has five cards, it has fewer cards only when it was dealt from
/// a short deck, and it never has more than five.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// The number of cards in a full hand.
    pub const SIZE: usize = 5;

    /// Creates a hand, fails with more than five cards or a repeated card.
    pub fn new(cards: Vec<Card>) -> Result<Self> {
        if cards.len() > Self::SIZE {
            return Err(Error::HandTooLarge(cards.len()));
        }

        let mut seen = AHashSet::with_capacity(cards.len());
        if let Some(card) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(Error::DuplicateCard(*card));
        }

        Ok(Self { cards })
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Checks if the hand has five cards.
    pub fn is_complete(&self) -> bool {
        self.cards.len() == Self::SIZE
    }
}

impl Deref for Hand {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.cards
    }
}

impl AsRef<[Card]> for Hand {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = Error;

    fn try_from(cards: Vec<Card>) -> Result<Self> {
        Hand::new(cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

impl FromStr for Hand {
    type Err = Error;

    /// Parses cards separated by whitespace or commas, i.e. `"10♠ J♠ Q♠"`.
    fn from_str(s: &str) -> Result<Self> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Card>>>()?;
        Hand::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

/// Replaces the cards at `positions` in a player hand with cards drawn from
/// the end of the deck.
///
/// Positions are filled in the given order. Returns the replaced cards in the
/// same order. All the checks are done before drawing any card, so on error
/// hands and deck are left untouched.
pub fn replace_cards(
    hands: &mut [Hand],
    deck: &mut Deck,
    player: usize,
    positions: &[usize],
) -> Result<Vec<Card>> {
    let hand = hands.get_mut(player).ok_or(Error::InvalidPlayer(player))?;

    let mut selected = [false; Hand::SIZE];
    for &pos in positions {
        if pos >= hand.len() {
            return Err(Error::InvalidPosition(pos));
        }

        if std::mem::replace(&mut selected[pos], true) {
            return Err(Error::DuplicatePosition(pos));
        }
    }

    if positions.len() > deck.count() {
        return Err(Error::DrawPileExhausted {
            requested: positions.len(),
            available: deck.count(),
        });
    }

    let discarded = positions
        .iter()
        .zip(deck.draw_many(positions.len()))
        .map(|(&pos, card)| std::mem::replace(&mut hand.cards[pos], card))
        .collect();

    Ok(discarded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn deck(s: &str) -> Deck {
        Deck::from_cards(hand(s).into()).unwrap()
    }

    fn players() -> Vec<Hand> {
        vec![hand("2♠ 3♠ 4♠ 5♠ 6♠"), hand("7♠ 8♠ 9♠ 10♠ J♠")]
    }

    #[test]
    fn parse_hand() {
        let h = hand("10♠, J♠ Q♠,K♠  A♠");
        assert_eq!(h.len(), 5);
        assert!(h.is_complete());
        assert_eq!(h.to_string(), "10♠ J♠ Q♠ K♠ A♠");

        assert_eq!(
            "2♠ 3♠ 4♠ 5♠ 6♠ 7♠".parse::<Hand>(),
            Err(Error::HandTooLarge(6))
        );
        assert_eq!(
            "2♠ 3X".parse::<Hand>(),
            Err(Error::InvalidCard("3X".to_string()))
        );
        assert!(hand("").is_empty());
    }

    #[test]
    fn repeated_cards() {
        let a = "A♠".parse::<Card>().unwrap();
        assert_eq!("A♠ A♠ A♠ A♠ A♠".parse::<Hand>(), Err(Error::DuplicateCard(a)));
        assert_eq!(Hand::new(vec![a, a]), Err(Error::DuplicateCard(a)));

        let k = "K♠".parse::<Card>().unwrap();
        assert_eq!("K♠ Ks 2♥ 2♦ 9♣".parse::<Hand>(), Err(Error::DuplicateCard(k)));

        let res = serde_json::from_str::<Hand>(r#"["2♥","3♥","2♥"]"#);
        assert!(res.is_err());
    }

    #[test]
    fn hand_serde() {
        let h = hand("10♠ 10♥ 9♠");
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"["10♠","10♥","9♠"]"#);
        assert_eq!(serde_json::from_str::<Hand>(&json).unwrap(), h);

        let res = serde_json::from_str::<Hand>(r#"["2♠","3♠","4♠","5♠","6♠","7♠"]"#);
        assert!(res.is_err());
    }

    #[test]
    fn replace_selected_cards() {
        let mut hands = players();
        let mut deck = deck("Q♠ K♠ A♠");

        let discarded = replace_cards(&mut hands, &mut deck, 0, &[1, 3]).unwrap();

        assert_eq!(discarded, hand("3♠ 5♠").cards());
        assert_eq!(hands[0], hand("2♠ A♠ 4♠ K♠ 6♠"));
        assert_eq!(hands[1], hand("7♠ 8♠ 9♠ 10♠ J♠"));
        assert_eq!(deck.cards(), hand("Q♠").cards());
    }

    #[test]
    fn replace_preserves_other_hands() {
        let mut hands = players();
        let mut deck = deck("Q♠ K♠ A♠");

        replace_cards(&mut hands, &mut deck, 1, &[0]).unwrap();

        assert_eq!(hands[0], players()[0]);
        assert_eq!(hands[1], hand("A♠ 8♠ 9♠ 10♠ J♠"));
        assert_eq!(deck.count(), 2);
    }

    #[test]
    fn replace_nothing() {
        let mut hands = players();
        let mut deck = Deck::from_cards(vec![]).unwrap();

        let discarded = replace_cards(&mut hands, &mut deck, 0, &[]).unwrap();
        assert!(discarded.is_empty());
        assert_eq!(hands, players());
    }

    #[test]
    fn replace_with_empty_deck() {
        let mut hands = players();
        let mut deck = Deck::from_cards(vec![]).unwrap();

        let res = replace_cards(&mut hands, &mut deck, 0, &[0]);
        assert_eq!(
            res,
            Err(Error::DrawPileExhausted {
                requested: 1,
                available: 0
            })
        );
        assert_eq!(hands, players());
    }

    #[test]
    fn replace_with_short_deck() {
        let mut hands = players();
        let mut deck = deck("A♠");

        let res = replace_cards(&mut hands, &mut deck, 0, &[0, 1]);
        assert!(matches!(res, Err(Error::DrawPileExhausted { .. })));

        // Nothing was drawn.
        assert_eq!(hands, players());
        assert_eq!(deck.count(), 1);
    }

    #[test]
    fn replace_invalid_arguments() {
        let mut hands = players();
        let mut deck = deck("Q♠ K♠ A♠");

        let res = replace_cards(&mut hands, &mut deck, 2, &[0]);
        assert_eq!(res, Err(Error::InvalidPlayer(2)));

        let res = replace_cards(&mut hands, &mut deck, 0, &[1, 5]);
        assert_eq!(res, Err(Error::InvalidPosition(5)));

        let res = replace_cards(&mut hands, &mut deck, 0, &[1, 2, 1]);
        assert_eq!(res, Err(Error::DuplicatePosition(1)));

        assert_eq!(hands, players());
        assert_eq!(deck.count(), 3);
    }
}
