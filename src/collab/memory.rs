//! In-process `PersistenceSink` with explicit owner checks.
//!
//! Stands in for the hosted data service in tests and local play.
//! Interior mutability lets it serve the `&self` trait methods; it is not
//! `Sync` and belongs to a single host.

use std::cell::RefCell;
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use rustc_hash::FxHashMap;

use super::identity::{PlayerIdentity, UserId};
use super::models::{
    Deck, DeckCard, DeckId, MatchId, MatchResult, PlayerCard, PlayerCardId, UserProfile,
    DEFAULT_DECK_NAME,
};
use super::persistence::PersistenceSink;
use crate::cards::CardId;
use crate::core::{CollabResult, CollaboratorError};

#[derive(Debug, Default)]
struct Tables {
    users: FxHashMap<UserId, UserProfile>,
    player_cards: FxHashMap<PlayerCardId, PlayerCard>,
    decks: FxHashMap<DeckId, Deck>,
    results: Vec<MatchResult>,
    next_id: u32,
}

impl Tables {
    fn alloc_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn owned_quantity(&self, owner: &UserId, card: CardId) -> u32 {
        self.player_cards
            .values()
            .filter(|pc| &pc.owner_id == owner && pc.card_id == card)
            .map(|pc| pc.quantity)
            .sum()
    }

    /// Fetch a deck the actor owns, for reading or writing.
    fn deck_mut(&mut self, actor: &PlayerIdentity, id: DeckId) -> CollabResult<&mut Deck> {
        let deck = self.decks.get_mut(&id).ok_or_else(|| not_found("deck", id))?;
        if deck.owner_id != actor.id {
            return Err(forbidden(actor, "access another user's deck"));
        }
        Ok(deck)
    }
}

fn not_found(kind: &'static str, id: impl ToString) -> CollaboratorError {
    CollaboratorError::NotFound {
        kind,
        id: id.to_string(),
    }
}

fn forbidden(actor: &PlayerIdentity, action: &'static str) -> CollaboratorError {
    CollaboratorError::Forbidden {
        actor: actor.id.clone(),
        action,
    }
}

fn too_many(quantity: u32, card: CardId) -> CollaboratorError {
    CollaboratorError::Invalid(format!("adding {quantity} x {card} overflows the stack"))
}

fn require_admin(actor: &PlayerIdentity, action: &'static str) -> CollabResult<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(forbidden(actor, action))
    }
}

fn require_owner_or_admin(actor: &PlayerIdentity, owner: &UserId, action: &'static str) -> CollabResult<()> {
    if &actor.id == owner || actor.is_admin() {
        Ok(())
    } else {
        Err(forbidden(actor, action))
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// In-memory store.
///
/// ```
/// use tessera::cards::CardId;
/// use tessera::collab::{InMemoryStore, PersistenceSink, PlayerIdentity};
///
/// let store = InMemoryStore::new();
/// let admin = PlayerIdentity::admin("root", "Root");
/// let alice = PlayerIdentity::player("alice", "Alice");
///
/// store.grant_cards(&admin, &alice.id, CardId::new(1), 2).unwrap();
/// let deck = store.create_deck(&alice, "Starter").unwrap();
/// let deck = store.add_to_deck(&alice, deck.id, CardId::new(1), 2).unwrap();
/// assert_eq!(deck.total_cards(), 2);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RefCell<Tables>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceSink for InMemoryStore {
    fn ensure_user(&self, actor: &PlayerIdentity, email: Option<&str>) -> CollabResult<UserProfile> {
        let mut tables = self.tables.borrow_mut();
        let profile = tables.users.entry(actor.id.clone()).or_insert_with(|| {
            debug!("creating profile for {}", actor.id);
            UserProfile {
                id: actor.id.clone(),
                email: email.map(str::to_string),
                profile_owner: actor.id.clone(),
                created_at: now_secs(),
            }
        });
        Ok(profile.clone())
    }

    fn get_user(&self, actor: &PlayerIdentity, id: &UserId) -> CollabResult<UserProfile> {
        require_owner_or_admin(actor, id, "read another user's profile")?;
        self.tables
            .borrow()
            .users
            .get(id)
            .cloned()
            .ok_or_else(|| not_found("user", id))
    }

    fn list_users(&self, actor: &PlayerIdentity) -> CollabResult<Vec<UserProfile>> {
        require_admin(actor, "list users")?;
        let mut users: Vec<_> = self.tables.borrow().users.values().cloned().collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(users)
    }

    fn grant_cards(
        &self,
        actor: &PlayerIdentity,
        owner: &UserId,
        card: CardId,
        quantity: u32,
    ) -> CollabResult<PlayerCard> {
        require_admin(actor, "grant cards")?;
        if quantity == 0 {
            return Err(CollaboratorError::Invalid("quantity must be at least 1".to_string()));
        }

        let mut tables = self.tables.borrow_mut();
        let existing = tables
            .player_cards
            .values_mut()
            .find(|pc| &pc.owner_id == owner && pc.card_id == card);
        if let Some(stack) = existing {
            stack.quantity = stack
                .quantity
                .checked_add(quantity)
                .ok_or_else(|| too_many(quantity, card))?;
            debug!("{owner} now owns {} x {card}", stack.quantity);
            return Ok(stack.clone());
        }

        let id = PlayerCardId(tables.alloc_id());
        let stack = PlayerCard {
            id,
            owner_id: owner.clone(),
            card_id: card,
            quantity,
        };
        tables.player_cards.insert(id, stack.clone());
        debug!("{owner} now owns {quantity} x {card}");
        Ok(stack)
    }

    fn remove_player_card(&self, actor: &PlayerIdentity, id: PlayerCardId) -> CollabResult<()> {
        require_admin(actor, "remove cards")?;
        self.tables
            .borrow_mut()
            .player_cards
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found("player card", id))
    }

    fn player_cards(&self, actor: &PlayerIdentity, owner: &UserId) -> CollabResult<Vec<PlayerCard>> {
        require_owner_or_admin(actor, owner, "read another user's cards")?;
        let mut cards: Vec<_> = self
            .tables
            .borrow()
            .player_cards
            .values()
            .filter(|pc| &pc.owner_id == owner)
            .cloned()
            .collect();
        cards.sort_by_key(|pc| pc.card_id);
        Ok(cards)
    }

    fn create_deck(&self, actor: &PlayerIdentity, name: &str) -> CollabResult<Deck> {
        let name = match name.trim() {
            "" => DEFAULT_DECK_NAME.to_string(),
            trimmed => trimmed.to_string(),
        };
        let mut tables = self.tables.borrow_mut();
        let id = DeckId(tables.alloc_id());
        let deck = Deck {
            id,
            name,
            owner_id: actor.id.clone(),
            cards: Vec::new(),
        };
        tables.decks.insert(id, deck.clone());
        debug!("{} created {id}", actor.id);
        Ok(deck)
    }

    fn get_deck(&self, actor: &PlayerIdentity, id: DeckId) -> CollabResult<Deck> {
        let mut tables = self.tables.borrow_mut();
        tables.deck_mut(actor, id).map(|deck| deck.clone())
    }

    fn list_decks(&self, actor: &PlayerIdentity) -> CollabResult<Vec<Deck>> {
        let mut decks: Vec<_> = self
            .tables
            .borrow()
            .decks
            .values()
            .filter(|d| d.owner_id == actor.id)
            .cloned()
            .collect();
        decks.sort_by_key(|d| d.id);
        Ok(decks)
    }

    fn add_to_deck(
        &self,
        actor: &PlayerIdentity,
        deck: DeckId,
        card: CardId,
        quantity: u32,
    ) -> CollabResult<Deck> {
        if quantity == 0 {
            return Err(CollaboratorError::Invalid("quantity must be at least 1".to_string()));
        }

        let mut tables = self.tables.borrow_mut();
        let owned = tables.owned_quantity(&actor.id, card);
        let deck = tables.deck_mut(actor, deck)?;
        let wanted = deck
            .quantity_of(card)
            .checked_add(quantity)
            .ok_or_else(|| too_many(quantity, card))?;
        if wanted > owned {
            return Err(CollaboratorError::Invalid(format!(
                "{} owns {owned} x {card} but the deck would need {wanted}",
                actor.id
            )));
        }

        match deck.cards.iter_mut().find(|c| c.card_id == card) {
            Some(line) => line.quantity += quantity,
            None => deck.cards.push(DeckCard { card_id: card, quantity }),
        }
        Ok(deck.clone())
    }

    fn remove_from_deck(&self, actor: &PlayerIdentity, deck: DeckId, card: CardId) -> CollabResult<Deck> {
        let mut tables = self.tables.borrow_mut();
        let deck = tables.deck_mut(actor, deck)?;
        let before = deck.cards.len();
        deck.cards.retain(|c| c.card_id != card);
        if deck.cards.len() == before {
            return Err(not_found("deck card", card));
        }
        Ok(deck.clone())
    }

    fn rename_deck(&self, actor: &PlayerIdentity, deck: DeckId, name: &str) -> CollabResult<Deck> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CollaboratorError::Invalid("deck name may not be blank".to_string()));
        }
        let mut tables = self.tables.borrow_mut();
        let deck = tables.deck_mut(actor, deck)?;
        deck.name = name.to_string();
        Ok(deck.clone())
    }

    fn delete_deck(&self, actor: &PlayerIdentity, deck: DeckId) -> CollabResult<()> {
        let mut tables = self.tables.borrow_mut();
        tables.deck_mut(actor, deck)?;
        tables.decks.remove(&deck);
        debug!("{} deleted {deck}", actor.id);
        Ok(())
    }

    fn record_result(&self, actor: &PlayerIdentity, mut result: MatchResult) -> CollabResult<MatchId> {
        if !result.involves(&actor.id) {
            return Err(forbidden(actor, "record a match they did not play"));
        }
        let mut tables = self.tables.borrow_mut();
        let id = MatchId(tables.alloc_id());
        result.id = id;
        tables.results.push(result);
        debug!("{} recorded {id}", actor.id);
        Ok(id)
    }

    fn match_results(&self, actor: &PlayerIdentity) -> CollabResult<Vec<MatchResult>> {
        Ok(self
            .tables
            .borrow()
            .results
            .iter()
            .filter(|r| r.involves(&actor.id))
            .cloned()
            .collect())
    }
}
