//! Game configuration.
//!
//! A `GameConfig` fixes the table before the deal: how many seats, how many
//! tiles each seat receives, which tile set is used and who opens. The
//! engine never hardcodes the double-six set; it is only the default.

use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::error::{Error, Result};
use crate::tiles::{Domino, Pip, DOUBLE_SIX};

/// Who takes the first turn after the deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartingPlayer {
    /// A fixed seat.
    Fixed(PlayerId),
    /// Whoever holds the highest double; player 0 if nobody holds one.
    HighestDouble,
}

impl Default for StartingPlayer {
    fn default() -> Self {
        StartingPlayer::Fixed(PlayerId::new(0))
    }
}

/// Table configuration for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats.
    pub player_count: usize,

    /// Tiles dealt to each seat. The rest of the set forms the boneyard.
    pub hand_size: usize,

    /// Highest pip value in the set (6 for double-six).
    pub max_pip: Pip,

    /// Opening rule.
    pub starting_player: StartingPlayer,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            hand_size: 7,
            max_pip: DOUBLE_SIX,
            starting_player: StartingPlayer::default(),
        }
    }
}

impl GameConfig {
    /// Set the number of seats.
    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the number of tiles dealt per seat.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Use the double-`max_pip` set.
    #[must_use]
    pub fn with_max_pip(mut self, max_pip: Pip) -> Self {
        self.max_pip = max_pip;
        self
    }

    /// Set the opening rule.
    #[must_use]
    pub fn with_starting_player(mut self, starting_player: StartingPlayer) -> Self {
        self.starting_player = starting_player;
        self
    }

    /// Number of tiles in the configured set.
    #[must_use]
    pub fn set_size(&self) -> usize {
        Domino::set_size(self.max_pip)
    }

    /// Tiles left in the boneyard right after the deal.
    #[must_use]
    pub fn boneyard_size(&self) -> usize {
        self.player_count
            .checked_mul(self.hand_size)
            .map_or(0, |dealt| self.set_size().saturating_sub(dealt))
    }

    /// Check the configuration describes a game that can be dealt.
    pub fn validate(&self) -> Result<()> {
        if self.player_count == 0 {
            return Err(Error::InvalidConfig("at least one player is required".into()));
        }
        if self.player_count > 255 {
            return Err(Error::InvalidConfig("at most 255 players are supported".into()));
        }
        if self.hand_size == 0 {
            return Err(Error::InvalidConfig("hand size must be at least 1".into()));
        }
        let Some(dealt) = self.player_count.checked_mul(self.hand_size) else {
            return Err(Error::InvalidConfig(format!(
                "{} hands of {} tiles overflow the deal",
                self.player_count, self.hand_size
            )));
        };
        if dealt > self.set_size() {
            return Err(Error::InvalidConfig(format!(
                "cannot deal {dealt} tiles from a set of {}",
                self.set_size()
            )));
        }
        if let StartingPlayer::Fixed(player) = self.starting_player {
            if player.index() >= self.player_count {
                return Err(Error::InvalidConfig(format!(
                    "{player} does not exist in a {}-player game",
                    self.player_count
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.hand_size, 7);
        assert_eq!(config.max_pip, 6);
        assert_eq!(config.set_size(), 28);
        assert_eq!(config.boneyard_size(), 14);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_players(4)
            .with_hand_size(5)
            .with_max_pip(9)
            .with_starting_player(StartingPlayer::HighestDouble);

        assert_eq!(config.player_count, 4);
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.set_size(), 55);
        assert_eq!(config.boneyard_size(), 35);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_four_players_seven_tiles_empties_boneyard() {
        let config = GameConfig::default().with_players(4);
        assert!(config.validate().is_ok());
        assert_eq!(config.boneyard_size(), 0);
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        assert!(matches!(
            GameConfig::default().with_players(0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::default().with_hand_size(0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::default().with_players(5).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::default()
                .with_starting_player(StartingPlayer::Fixed(PlayerId::new(2)))
                .validate(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_overflowing_deals() {
        for hand_size in [usize::MAX / 2 + 1, usize::MAX] {
            let config = GameConfig::default().with_hand_size(hand_size);
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
            assert_eq!(config.boneyard_size(), 0);
        }
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_starting_player(StartingPlayer::HighestDouble);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
