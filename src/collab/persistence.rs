//! Persistence Sink: users, inventories, decks, and match results.
//!
//! Every operation names the acting identity. Implementations must check
//! access before touching owner-scoped data:
//!
//! | Record       | Owner             | Admin             |
//! |--------------|-------------------|-------------------|
//! | UserProfile  | read, create self | read              |
//! | PlayerCard   | read              | create/read/delete|
//! | Deck         | full control      | none              |
//! | MatchResult  | write/read own    | none              |
//!
//! The game core trusts whatever identity it is handed; these checks are
//! the only authorization in the system.

use super::identity::{PlayerIdentity, UserId};
use super::models::{Deck, DeckId, MatchId, MatchResult, PlayerCard, PlayerCardId, UserProfile};
use crate::cards::CardId;
use crate::core::CollabResult;

/// Storage for per-user data.
pub trait PersistenceSink {
    // === Users ===

    /// Create the actor's profile if it does not exist yet, then return it.
    fn ensure_user(&self, actor: &PlayerIdentity, email: Option<&str>) -> CollabResult<UserProfile>;

    /// Read a profile. Owner or admin.
    fn get_user(&self, actor: &PlayerIdentity, id: &UserId) -> CollabResult<UserProfile>;

    /// Every profile. Admin only.
    fn list_users(&self, actor: &PlayerIdentity) -> CollabResult<Vec<UserProfile>>;

    // === Inventory ===

    /// Give `owner` more copies of a card, merging with an existing stack.
    /// Admin only.
    fn grant_cards(
        &self,
        actor: &PlayerIdentity,
        owner: &UserId,
        card: CardId,
        quantity: u32,
    ) -> CollabResult<PlayerCard>;

    /// Delete an inventory row. Admin only.
    fn remove_player_card(&self, actor: &PlayerIdentity, id: PlayerCardId) -> CollabResult<()>;

    /// A user's inventory. Owner or admin.
    fn player_cards(&self, actor: &PlayerIdentity, owner: &UserId) -> CollabResult<Vec<PlayerCard>>;

    // === Decks (owner only) ===

    /// Create an empty deck. A blank name falls back to the default name.
    fn create_deck(&self, actor: &PlayerIdentity, name: &str) -> CollabResult<Deck>;

    fn get_deck(&self, actor: &PlayerIdentity, id: DeckId) -> CollabResult<Deck>;

    fn list_decks(&self, actor: &PlayerIdentity) -> CollabResult<Vec<Deck>>;

    /// Add copies of a card. The deck may not hold more copies than the
    /// owner's inventory does.
    fn add_to_deck(
        &self,
        actor: &PlayerIdentity,
        deck: DeckId,
        card: CardId,
        quantity: u32,
    ) -> CollabResult<Deck>;

    /// Drop every copy of a card from a deck.
    fn remove_from_deck(&self, actor: &PlayerIdentity, deck: DeckId, card: CardId) -> CollabResult<Deck>;

    fn rename_deck(&self, actor: &PlayerIdentity, deck: DeckId, name: &str) -> CollabResult<Deck>;

    fn delete_deck(&self, actor: &PlayerIdentity, deck: DeckId) -> CollabResult<()>;

    // === Results ===

    /// Store a finished match. The actor must have played in it.
    fn record_result(&self, actor: &PlayerIdentity, result: MatchResult) -> CollabResult<MatchId>;

    /// Matches the actor played in, oldest first.
    fn match_results(&self, actor: &PlayerIdentity) -> CollabResult<Vec<MatchResult>>;
}
