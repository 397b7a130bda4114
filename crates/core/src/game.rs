// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker game session.
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use drawpoker_cards::{Card, Deck, Hand, replace_cards, shuffle_and_deal};
use drawpoker_eval::{Showdown, determine_winner};

use crate::{GameError, PlayerNames, Result};

/// The round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Players are drawing and locking their hands.
    Draw,
    /// All hands are locked and the winners are known.
    Showdown,
}

/// A five cards draw round for a fixed set of players.
///
/// Each player either draws replacement cards, which locks the hand, or keeps
/// all the cards by locking the hand. When the last hand is locked the game
/// ranks all hands and stores the [Showdown].
#[derive(Debug)]
pub struct Game {
    names: PlayerNames,
    deck: Deck,
    hands: Vec<Hand>,
    locked: Vec<bool>,
    drawn: Vec<Vec<usize>>,
    muck: Vec<Card>,
    showdown: Option<Showdown>,
    rng: StdRng,
}

impl Game {
    /// Creates a new game and deals the first round.
    pub fn new(names: PlayerNames) -> Result<Self> {
        Self::with_rng(names, StdRng::from_os_rng())
    }

    /// Creates a new game with user initialized randomness.
    pub fn with_rng(names: PlayerNames, rng: StdRng) -> Result<Self> {
        let mut game = Self {
            names,
            deck: Deck::default(),
            hands: Vec::default(),
            locked: Vec::default(),
            drawn: Vec::default(),
            muck: Vec::default(),
            showdown: None,
            rng,
        };

        game.deal()?;
        Ok(game)
    }

    /// Starts a new round with a full shuffled deck.
    pub fn deal(&mut self) -> Result<()> {
        let players = self.names.len();
        let deal = shuffle_and_deal(Deck::default(), players, &mut self.rng)?;

        self.hands = deal.hands;
        self.deck = deal.remaining;
        self.locked = vec![false; players];
        self.drawn = vec![Vec::default(); players];
        self.muck.clear();
        self.showdown = None;

        info!(
            "Dealt {players} hands, {} cards left in the deck",
            self.deck.count()
        );

        Ok(())
    }

    /// Replaces the cards at `positions` in a player hand and locks the hand.
    ///
    /// Returns the showdown if this was the last hand to lock.
    pub fn replace(&mut self, player: usize, positions: &[usize]) -> Result<Option<&Showdown>> {
        self.check_can_act(player)?;

        let discarded = replace_cards(&mut self.hands, &mut self.deck, player, positions)?;
        self.muck.extend(discarded);
        self.drawn[player].extend_from_slice(positions);

        debug!(
            "{} drew {} cards, {} cards left in the deck",
            self.player_name(player),
            positions.len(),
            self.deck.count()
        );

        self.lock(player)
    }

    /// Locks a player hand keeping all its cards.
    ///
    /// Returns the showdown if this was the last hand to lock.
    pub fn lock(&mut self, player: usize) -> Result<Option<&Showdown>> {
        self.check_can_act(player)?;

        self.locked[player] = true;
        debug!("{} locked", self.player_name(player));

        if self.locked.iter().all(|&locked| locked) {
            self.showdown().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Locks all the hands that are not locked yet and returns the showdown.
    pub fn end_now(&mut self) -> Result<&Showdown> {
        if self.showdown.is_some() {
            return Err(GameError::RoundOver);
        }

        self.locked.fill(true);
        self.showdown()
    }

    /// Renames a player.
    pub fn rename(&mut self, player: usize, name: &str) -> Result<()> {
        self.names.rename(player, name)
    }

    /// The players names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// The players hands.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// The number of cards left in the draw pile.
    pub fn deck_count(&self) -> usize {
        self.deck.count()
    }

    /// The cards replaced during this round.
    pub fn muck(&self) -> &[Card] {
        &self.muck
    }

    /// Checks if a player hand is locked.
    pub fn is_locked(&self, player: usize) -> bool {
        self.locked.get(player).copied().unwrap_or(false)
    }

    /// The hand positions a player replaced during this round.
    pub fn drawn(&self, player: usize) -> &[usize] {
        self.drawn.get(player).map(Vec::as_slice).unwrap_or_default()
    }

    /// The round showdown, once all hands are locked.
    pub fn result(&self) -> Option<&Showdown> {
        self.showdown.as_ref()
    }

    /// The round phase.
    pub fn phase(&self) -> Phase {
        if self.showdown.is_some() {
            Phase::Showdown
        } else {
            Phase::Draw
        }
    }

    fn showdown(&mut self) -> Result<&Showdown> {
        let showdown = determine_winner(&self.hands)?;

        let winners = showdown
            .winners()
            .iter()
            .map(|&p| self.player_name(p))
            .collect::<Vec<_>>()
            .join(", ");
        info!("Showdown won by {winners} with {}", showdown.winning_hand());

        Ok(&*self.showdown.insert(showdown))
    }

    fn check_can_act(&self, player: usize) -> Result<()> {
        if self.showdown.is_some() {
            return Err(GameError::RoundOver);
        }

        match self.locked.get(player) {
            None => Err(GameError::InvalidPlayer(player)),
            Some(true) => Err(GameError::HandLocked(player)),
            Some(false) => Ok(()),
        }
    }

    fn player_name(&self, player: usize) -> &str {
        self.names.name(player).unwrap_or("?")
    }
}
