// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Players names configuration.
use serde::{Deserialize, Serialize};

use drawpoker_cards::{Deck, Hand};

use crate::{GameError, Result};

/// The players names in seat order.
///
/// The names are configuration passed to a [Game](crate::Game), the front end
/// decides how to store them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PlayerNames {
    names: Vec<String>,
}

impl PlayerNames {
    /// The default number of players.
    pub const DEFAULT_PLAYERS: usize = 4;

    /// The maximum number of players that can be dealt from one deck.
    pub const MAX_PLAYERS: usize = Deck::SIZE / Hand::SIZE;

    /// Creates default names for `count` players.
    pub fn new(count: usize) -> Result<Self> {
        Self::from_names((1..=count).map(|n| format!("Player {n}")).collect())
    }

    /// Creates the players names, names are trimmed and must not be empty.
    pub fn from_names(names: Vec<String>) -> Result<Self> {
        if names.is_empty() || names.len() > Self::MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount {
                count: names.len(),
                max: Self::MAX_PLAYERS,
            });
        }

        let names = names
            .iter()
            .map(|n| valid_name(n))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { names })
    }

    /// Renames a player.
    pub fn rename(&mut self, player: usize, name: &str) -> Result<()> {
        let name = valid_name(name)?;
        let slot = self
            .names
            .get_mut(player)
            .ok_or(GameError::InvalidPlayer(player))?;
        *slot = name;
        Ok(())
    }

    /// A player name.
    pub fn name(&self, player: usize) -> Option<&str> {
        self.names.get(player).map(String::as_str)
    }

    /// Iterates the names in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The number of players.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Checks if there are no players.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        let names = (1..=Self::DEFAULT_PLAYERS)
            .map(|n| format!("Player {n}"))
            .collect();
        Self { names }
    }
}

impl TryFrom<Vec<String>> for PlayerNames {
    type Error = GameError;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Self::from_names(names)
    }
}

impl From<PlayerNames> for Vec<String> {
    fn from(names: PlayerNames) -> Self {
        names.names
    }
}

fn valid_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(GameError::EmptyName);
    }

    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names() {
        let names = PlayerNames::default();
        assert_eq!(names.len(), 4);
        assert_eq!(
            names.iter().collect::<Vec<_>>(),
            ["Player 1", "Player 2", "Player 3", "Player 4"]
        );
        assert_eq!(PlayerNames::new(4).unwrap(), names);
    }

    #[test]
    fn players_count() {
        assert_eq!(PlayerNames::new(10).unwrap().len(), 10);
        assert_eq!(
            PlayerNames::new(0),
            Err(GameError::InvalidPlayerCount { count: 0, max: 10 })
        );
        assert_eq!(
            PlayerNames::new(11),
            Err(GameError::InvalidPlayerCount { count: 11, max: 10 })
        );
    }

    #[test]
    fn rename_player() {
        let mut names = PlayerNames::default();
        names.rename(1, "  Alice ").unwrap();
        assert_eq!(names.name(1), Some("Alice"));

        assert_eq!(names.rename(1, "   "), Err(GameError::EmptyName));
        assert_eq!(names.name(1), Some("Alice"));

        assert_eq!(names.rename(4, "Bob"), Err(GameError::InvalidPlayer(4)));
        assert_eq!(names.name(4), None);
    }

    #[test]
    fn names_serde() {
        let mut names = PlayerNames::new(2).unwrap();
        names.rename(0, "Alice").unwrap();

        let json = serde_json::to_string(&names).unwrap();
        assert_eq!(json, r#"["Alice","Player 2"]"#);
        assert_eq!(serde_json::from_str::<PlayerNames>(&json).unwrap(), names);

        assert!(serde_json::from_str::<PlayerNames>("[]").is_err());
        assert!(serde_json::from_str::<PlayerNames>(r#"["Alice",""]"#).is_err());
    }
}
