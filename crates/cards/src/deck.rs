// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards and deck definitions.
use ahash::AHashSet;
use log::warn;
use rand::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{fmt, str::FromStr};

use crate::{Error, Hand, Result};

/// A Poker card.
///
/// A card is packed in a single byte with the rank value in the upper bits and
/// the suit in the two lower bits:
///
/// ```text
///   +--------+
///   |xxrrrrss|
///   +--------+
///   r = rank value (deuce=2,trey=3,...,ace=14)
///   s = suit (spades=0,hearts=1,diamonds=2,clubs=3)
/// ```
///
/// The text form is the rank token followed by the suit glyph, i.e. `10♠` or
/// `A♥`, and it is also the serialized form.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Card(u8);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[(self.0 >> 2) as usize - Rank::Deuce as usize]
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::ALL[(self.0 & 0x3) as usize]
    }

    /// Returns the Unicode playing card character for this card.
    pub fn glyph(&self) -> char {
        let base = match self.suit() {
            Suit::Spades => 0x1F0A0,
            Suit::Hearts => 0x1F0B0,
            Suit::Diamonds => 0x1F0C0,
            Suit::Clubs => 0x1F0D0,
        };

        // The Unicode block has a knight between the jack and the queen.
        let offset = match self.rank() {
            Rank::Ace => 1,
            Rank::Queen => 0xD,
            Rank::King => 0xE,
            rank => rank.value() as u32,
        };

        char::from_u32(base + offset).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let invalid = || Error::InvalidCard(token.to_string());

        let suit_char = token.chars().last().ok_or_else(invalid)?;
        let (rank, _) = token.split_at(token.len() - suit_char.len_utf8());

        let rank = rank.parse::<Rank>().map_err(|_| invalid())?;
        let suit = Suit::from_char(suit_char).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(de::Error::custom)
    }
}

/// A card as seen by a player, either face up or covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    /// The card value is visible.
    Up(Card),
    /// The card is face down.
    Back,
}

impl CardFace {
    /// Returns the Unicode playing card character for this face.
    pub fn glyph(&self) -> char {
        match self {
            CardFace::Up(card) => card.glyph(),
            CardFace::Back => '\u{1F0A0}',
        }
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardFace::Up(card) => write!(f, "{card}"),
            CardFace::Back => write!(f, "▒▒"),
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The numeric value of this rank, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(Error::InvalidCard(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Hearts suit.
    Hearts = 1,
    /// Diamonds suit.
    Diamonds = 2,
    /// Clubs suit.
    Clubs = 3,
}

impl Suit {
    const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// The suit glyph.
    pub fn glyph(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// Checks if this is a red suit.
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// Parses a suit glyph or its ASCII letter.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            '♠' | 'S' | 's' => Some(Suit::Spades),
            '♥' | 'H' | 'h' => Some(Suit::Hearts),
            '♦' | 'D' | 'd' => Some(Suit::Diamonds),
            '♣' | 'C' | 'c' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A cards deck, cards are drawn from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck from the given cards, the last card is drawn first.
    ///
    /// Fails if a card appears more than once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        let mut seen = AHashSet::with_capacity(cards.len());
        if let Some(card) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(Error::DuplicateCard(*card));
        }

        Ok(Self { cards })
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // Fisher-Yates, every permutation is equally likely.
        self.cards.shuffle(rng);
    }

    /// Draws a card from the end of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draws up to `n` cards from the end of the deck, last card first.
    pub fn draw_many(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.cards.pop()).collect()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The deck cards in order, the last one is drawn next.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Deals five cards hands to `players` from the front of the deck.
    ///
    /// When the deck is short it deals as many full hands as it can and then
    /// a partial hand with the cards left. Fails if `players` is zero.
    pub fn deal(mut self, players: usize) -> Result<Deal> {
        if players == 0 {
            return Err(Error::NoPlayers);
        }

        let mut hands = Vec::with_capacity(players);
        while hands.len() < players && !self.cards.is_empty() {
            let n = Hand::SIZE.min(self.cards.len());
            hands.push(Hand::new(self.cards.drain(..n).collect())?);
        }

        let deal = Deal {
            players,
            hands,
            remaining: self,
        };

        if deal.is_short() {
            warn!(
                "Short deck: dealt {} cards to {} of {players} players",
                deal.dealt(),
                deal.hands.len()
            );
        }

        Ok(deal)
    }

    /// Calls the `f` closure for each k-cards combination in the deck.
    ///
    /// Panics if k is not 1 <= k <= 5.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=Hand::SIZE).contains(&k), "1 <= k <= 5");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // Find the rightmost index that can still move forward.
            let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                break;
            };

            idx[i] += 1;
            for j in (i + 1)..k {
                idx[j] = idx[j - 1] + 1;
            }

            for j in i..k {
                hand[j] = self.cards[idx[j]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// The result of dealing hands from a deck.
#[derive(Debug, Clone)]
pub struct Deal {
    players: usize,
    /// The dealt hands in player order.
    pub hands: Vec<Hand>,
    /// The draw pile left after dealing.
    pub remaining: Deck,
}

impl Deal {
    /// Number of cards distributed to the players.
    pub fn dealt(&self) -> usize {
        self.hands.iter().map(|h| h.len()).sum()
    }

    /// Number of cards retained in the draw pile.
    pub fn retained(&self) -> usize {
        self.remaining.count()
    }

    /// Checks if the deck was too short to deal a full hand to every player.
    pub fn is_short(&self) -> bool {
        self.dealt() < self.players * Hand::SIZE
    }
}

/// Shuffles the deck and deals five cards hands to `players`.
///
/// See [Deck::deal] for how a short deck is dealt.
pub fn shuffle_and_deal<R: Rng + ?Sized>(
    mut deck: Deck,
    players: usize,
    rng: &mut R,
) -> Result<Deal> {
    deck.shuffle(rng);
    deck.deal(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.draw() {
            assert_eq!(card.id() >> 2, card.rank() as u8);
            assert_eq!(card.id() & 0x3, card.suit() as u8);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "K♦");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5♠");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "J♣");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10♥");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "A♥");
    }

    #[test]
    fn card_from_string() {
        assert_eq!(card("10♠"), Card::new(Rank::Ten, Suit::Spades));
        assert_eq!(card("Q♥"), Card::new(Rank::Queen, Suit::Hearts));
        assert_eq!(card("2♦"), Card::new(Rank::Deuce, Suit::Diamonds));

        // Terminal friendly forms.
        assert_eq!(card("Ts"), Card::new(Rank::Ten, Suit::Spades));
        assert_eq!(card("10C"), Card::new(Rank::Ten, Suit::Clubs));
        assert_eq!(card("ah"), Card::new(Rank::Ace, Suit::Hearts));

        for bad in ["", "♠", "1♠", "11♠", "AX", "10", "K♠♠"] {
            assert!(
                matches!(bad.parse::<Card>(), Err(Error::InvalidCard(_))),
                "{bad}"
            );
        }

        // Every card text form reads back to the same card.
        for c in Deck::default() {
            assert_eq!(card(&c.to_string()), c);
        }
    }

    #[test]
    fn card_serde() {
        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"10♥\"");

        let c: Card = serde_json::from_str("\"A♣\"").unwrap();
        assert_eq!(c, Card::new(Rank::Ace, Suit::Clubs));

        assert!(serde_json::from_str::<Card>("\"Z♣\"").is_err());
    }

    #[test]
    fn card_glyphs() {
        assert_eq!(card("A♠").glyph(), '🂡');
        assert_eq!(card("10♠").glyph(), '🂪');
        assert_eq!(card("Q♥").glyph(), '🂽');
        assert_eq!(card("J♦").glyph(), '🃋');
        assert_eq!(card("K♣").glyph(), '🃞');
        assert_eq!(CardFace::Back.glyph(), '🂠');
        assert_eq!(CardFace::Up(card("2♣")).glyph(), '🃒');
    }

    #[test]
    fn default_deck() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let unique = deck.cards().iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), Deck::SIZE);

        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                assert!(deck.contains(Card::new(rank, suit)));
            }
        }

        // Canonical order: spades first, deuce to ace.
        assert_eq!(deck.cards()[0], card("2♠"));
        assert_eq!(deck.cards()[12], card("A♠"));
        assert_eq!(deck.cards()[13], card("2♥"));
        assert_eq!(deck.cards()[51], card("A♣"));
    }

    #[test]
    fn deck_from_cards() {
        let deck = Deck::from_cards(vec![card("Q♠"), card("K♠"), card("A♠")]).unwrap();
        assert_eq!(deck.count(), 3);

        let res = Deck::from_cards(vec![card("Q♠"), card("K♠"), card("Q♠")]);
        assert_eq!(res, Err(Error::DuplicateCard(card("Q♠"))));
    }

    #[test]
    fn deck_draw() {
        let mut deck = Deck::from_cards(vec![card("Q♠"), card("K♠"), card("A♠")]).unwrap();
        assert_eq!(deck.draw(), Some(card("A♠")));
        assert_eq!(deck.draw_many(5), vec![card("K♠"), card("Q♠")]);
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn shuffle_is_seeded_permutation() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        assert_eq!(d1, d2);
        assert_ne!(d1, Deck::default());

        let mut sorted = d1.cards().to_vec();
        sorted.sort_by_key(|c| c.id());
        let mut expected = Deck::default().cards().to_vec();
        expected.sort_by_key(|c| c.id());
        assert_eq!(sorted, expected);
    }

    #[test]
    fn deal_four_players() {
        let mut rng = StdRng::seed_from_u64(42);
        let deal = shuffle_and_deal(Deck::default(), 4, &mut rng).unwrap();

        assert_eq!(deal.hands.len(), 4);
        assert!(deal.hands.iter().all(|h| h.len() == Hand::SIZE));
        assert_eq!(deal.dealt(), 20);
        assert_eq!(deal.retained(), Deck::SIZE - 20);
        assert!(!deal.is_short());

        let all = deal
            .hands
            .iter()
            .flat_map(|h| h.iter().copied())
            .chain(deal.remaining.cards().iter().copied())
            .collect::<Vec<_>>();
        let unique = all.iter().collect::<HashSet<_>>();
        assert_eq!(all.len(), Deck::SIZE);
        assert_eq!(unique.len(), Deck::SIZE);
    }

    #[test]
    fn deal_from_front() {
        let deal = Deck::default().deal(2).unwrap();
        let first = Deck::default().cards()[0..5].to_vec();
        assert_eq!(deal.hands[0].cards(), first.as_slice());
        assert_eq!(deal.remaining.cards()[0], card("Q♠"));
    }

    #[test]
    fn deal_short_deck() {
        let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
        let deck = Deck::from_cards(cards.clone()).unwrap();
        let deal = shuffle_and_deal(deck, 3, &mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(deal.hands.len(), 2);
        assert_eq!(deal.dealt(), 10);
        assert_eq!(deal.retained(), 0);
        assert!(deal.is_short());

        let deck = Deck::from_cards(cards[..7].to_vec()).unwrap();
        let deal = deck.deal(3).unwrap();
        assert_eq!(deal.hands.len(), 2);
        assert_eq!(deal.hands[0].len(), 5);
        assert_eq!(deal.hands[1].len(), 2);
        assert!(!deal.hands[1].is_complete());
        assert_eq!(deal.dealt() + deal.retained(), 7);
    }

    #[test]
    fn deal_no_players() {
        let res = shuffle_and_deal(Deck::default(), 0, &mut StdRng::seed_from_u64(1));
        assert!(matches!(res, Err(Error::NoPlayers)));
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_small_deck() {
        let deck = Deck::from_cards(Deck::default().into_iter().take(4).collect()).unwrap();

        let mut count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 0);

        deck.for_each(4, |cards| {
            assert_eq!(cards, deck.cards());
            count += 1;
        });
        assert_eq!(count, 1);
    }
}
