//! A card that has been placed on the board.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::cell::Direction;
use crate::cards::{Card, CardId};
use crate::core::{PlayerId, Power};

/// A card on the board plus its current owner.
///
/// The card itself never changes; only `owner` flips on capture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCard {
    pub card: Arc<Card>,
    pub owner: PlayerId,
}

impl PlacedCard {
    #[must_use]
    pub fn new(card: Arc<Card>, owner: PlayerId) -> Self {
        Self { card, owner }
    }

    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.card.id
    }

    /// The power this card shows on `side`.
    #[must_use]
    pub fn power(&self, side: Direction) -> Power {
        self.card.powers.facing(side)
    }
}
