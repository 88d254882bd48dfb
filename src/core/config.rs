//! Game configuration types.
//!
//! Sessions are configured at creation by a `GameConfig`:
//! - `PowerRange`: legal bounds for a card's directional powers
//! - `FirstPlayer`: which seat moves first
//! - `DealOrder`: how hands are drawn from decks
//!
//! Configs are plain serde data, so hosts can load them from JSON.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::player::PlayerId;
use crate::board::CELL_COUNT;

/// A directional power value on a card.
pub type Power = u8;

/// Inclusive bounds for card powers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PowerRange {
    /// Lowest legal power.
    pub min: Power,
    /// Highest legal power.
    pub max: Power,
}

impl PowerRange {
    /// Create a new range. Use `GameConfig::validate` to reject inverted ranges.
    #[must_use]
    pub const fn new(min: Power, max: Power) -> Self {
        Self { min, max }
    }

    /// Check whether a power lies inside the range.
    #[must_use]
    pub const fn contains(self, power: Power) -> bool {
        power >= self.min && power <= self.max
    }
}

impl Default for PowerRange {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

impl std::fmt::Display for PowerRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Which seat moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayer {
    /// A fixed seat.
    Seat(PlayerId),
    /// Chosen by the session RNG (coin flip).
    Random,
}

/// How a hand is drawn from a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealOrder {
    /// Take cards from the front of the deck in stored order.
    Top,
    /// Shuffle the deck with the session RNG, then take from the front.
    Shuffled,
}

/// Complete session configuration.
///
/// ## Example
///
/// ```
/// use tessera::core::{DealOrder, GameConfig};
///
/// let config = GameConfig::default()
///     .with_hand_size(4)
///     .with_deal(DealOrder::Top);
///
/// assert_eq!(config.hand_size, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards dealt to each seat.
    pub hand_size: usize,

    /// Legal card power bounds.
    pub power_range: PowerRange,

    /// Seat that moves first.
    pub first_player: FirstPlayer,

    /// Hand dealing policy.
    pub deal: DealOrder,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            power_range: PowerRange::default(),
            first_player: FirstPlayer::Seat(PlayerId::ONE),
            deal: DealOrder::Shuffled,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| GameError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the power range.
    #[must_use]
    pub fn with_power_range(mut self, range: PowerRange) -> Self {
        self.power_range = range;
        self
    }

    /// Set the first player policy.
    #[must_use]
    pub fn with_first_player(mut self, first: FirstPlayer) -> Self {
        self.first_player = first;
        self
    }

    /// Set the deal policy.
    #[must_use]
    pub fn with_deal(mut self, deal: DealOrder) -> Self {
        self.deal = deal;
        self
    }

    /// Check the config for impossible settings.
    ///
    /// A hand may not be empty, and a single hand may not exceed the board.
    pub fn validate(&self) -> Result<()> {
        if self.hand_size == 0 {
            return Err(GameError::InvalidConfig {
                reason: "hand size must be at least 1".to_string(),
            });
        }
        if self.hand_size > CELL_COUNT {
            return Err(GameError::InvalidConfig {
                reason: format!("hand size {} exceeds {} board cells", self.hand_size, CELL_COUNT),
            });
        }
        if self.power_range.min > self.power_range.max {
            return Err(GameError::InvalidConfig {
                reason: format!("power range {} is inverted", self.power_range),
            });
        }
        Ok(())
    }
}
