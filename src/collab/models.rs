//! Records kept by the Persistence Sink.
//!
//! These mirror the hosted data schema: user profiles, owned card stacks
//! (inventory), decks with per-card quantities, plus finished match
//! results written back by the game host.

use serde::{Deserialize, Serialize};

use super::identity::UserId;
use crate::cards::CardId;
use crate::core::{MoveRecord, PlayerMap};
use crate::rules::GameStatus;

/// Name given to a deck created without one.
pub const DEFAULT_DECK_NAME: &str = "My New Deck";

/// Identifier of an inventory row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerCardId(pub u32);

impl std::fmt::Display for PlayerCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PlayerCard({})", self.0)
    }
}

/// Identifier of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeckId(pub u32);

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Deck({})", self.0)
    }
}

/// Identifier of a stored match result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId(pub u32);

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Match({})", self.0)
    }
}

/// A user's profile row, created on first sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: Option<String>,
    /// The auth-service user that owns this profile.
    pub profile_owner: UserId,
    /// Seconds since the Unix epoch.
    pub created_at: u64,
}

/// A stack of one catalog card owned by a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCard {
    pub id: PlayerCardId,
    pub owner_id: UserId,
    pub card_id: CardId,
    pub quantity: u32,
}

/// One line of a deck list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCard {
    pub card_id: CardId,
    pub quantity: u32,
}

/// A named deck owned by one user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
    pub owner_id: UserId,
    pub cards: Vec<DeckCard>,
}

impl Deck {
    /// Total number of cards counting quantities.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards.iter().map(|c| c.quantity as usize).sum()
    }

    /// Quantity of one card in the deck.
    #[must_use]
    pub fn quantity_of(&self, card: CardId) -> u32 {
        self.cards
            .iter()
            .filter(|c| c.card_id == card)
            .map(|c| c.quantity)
            .sum()
    }

    /// Card IDs in list order, each repeated by its quantity.
    ///
    /// ```
    /// use tessera::cards::CardId;
    /// use tessera::collab::{Deck, DeckCard, DeckId, UserId};
    ///
    /// let deck = Deck {
    ///     id: DeckId(1),
    ///     name: "Starter".to_string(),
    ///     owner_id: UserId::new("u-1"),
    ///     cards: vec![
    ///         DeckCard { card_id: CardId::new(3), quantity: 2 },
    ///         DeckCard { card_id: CardId::new(1), quantity: 1 },
    ///     ],
    /// };
    /// assert_eq!(deck.expand(), vec![CardId::new(3), CardId::new(3), CardId::new(1)]);
    /// ```
    #[must_use]
    pub fn expand(&self) -> Vec<CardId> {
        self.cards
            .iter()
            .flat_map(|c| std::iter::repeat(c.card_id).take(c.quantity as usize))
            .collect()
    }
}

/// A finished game as stored after the fact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Assigned by the sink; ignored on write.
    pub id: MatchId,
    pub players: PlayerMap<UserId>,
    /// Owned cells per seat at the end.
    pub scores: PlayerMap<u8>,
    pub status: GameStatus,
    pub moves: Vec<MoveRecord>,
}

impl MatchResult {
    /// The winning user, if the game was not a draw.
    #[must_use]
    pub fn winner(&self) -> Option<&UserId> {
        self.status.winner().map(|seat| &self.players[seat])
    }

    /// Whether `user` sat at this match.
    #[must_use]
    pub fn involves(&self, user: &UserId) -> bool {
        self.players.iter().any(|(_, id)| id == user)
    }
}
