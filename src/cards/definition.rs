//! Card definitions - static card data.
//!
//! A `Card` holds the immutable properties of a catalog entry: its name
//! and the four directional powers used in capture fights. Who owns a
//! card on the board is tracked separately by `PlacedCard`.

use serde::{Deserialize, Serialize};

use crate::board::Direction;
use crate::core::{GameError, Power, PowerRange, Result};

/// Unique identifier for a catalog card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The four directional powers of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Powers {
    pub top: Power,
    pub right: Power,
    pub bottom: Power,
    pub left: Power,
}

impl Powers {
    #[must_use]
    pub const fn new(top: Power, right: Power, bottom: Power, left: Power) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The power printed on the given side.
    ///
    /// ```
    /// use tessera::board::Direction;
    /// use tessera::cards::Powers;
    ///
    /// let powers = Powers::new(8, 4, 7, 1);
    /// assert_eq!(powers.facing(Direction::Right), 4);
    /// assert_eq!(powers.facing(Direction::Left), 1);
    /// ```
    #[must_use]
    pub const fn facing(self, side: Direction) -> Power {
        match side {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    /// All four powers in `Direction::ALL` order.
    #[must_use]
    pub const fn as_array(self) -> [Power; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use tessera::cards::{Card, CardId, Powers};
///
/// let dragon = Card::new(CardId::new(1), "Dragon", Powers::new(8, 4, 7, 1))
///     .with_tier(3);
///
/// assert_eq!(dragon.powers.top, 8);
/// assert_eq!(dragon.tier, Some(3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Flavor text shown in the catalog.
    #[serde(default)]
    pub description: Option<String>,

    /// Rarity tier, if the catalog assigns one.
    #[serde(default)]
    pub tier: Option<u32>,

    /// Directional powers.
    pub powers: Powers,
}

impl Card {
    /// Create a new card. Powers are checked later against a `PowerRange`.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, powers: Powers) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            tier: None,
            powers,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_tier(mut self, tier: u32) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Check that every power lies inside `range`.
    pub fn validate(&self, range: PowerRange) -> Result<()> {
        for (side, power) in Direction::ALL.into_iter().zip(self.powers.as_array()) {
            if !range.contains(power) {
                return Err(GameError::InvalidCard {
                    card: self.id,
                    reason: format!("{side} power {power} outside {range}"),
                });
            }
        }
        Ok(())
    }
}
