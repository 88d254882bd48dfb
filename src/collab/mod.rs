//! External collaborators: catalog, persistence, and player identity.
//!
//! The game core never talks to a backend directly. Hosts inject values
//! implementing these traits; the in-memory implementations here back
//! tests and local play.
//!
//! ## Key Types
//!
//! - `CatalogProvider`: card definitions (`InMemoryCatalog`, `JsonCatalog`)
//! - `PersistenceSink`: users, inventories, decks, results (`InMemoryStore`)
//! - `PlayerIdentity`: opaque authenticated user

pub mod catalog;
pub mod identity;
pub mod memory;
pub mod models;
pub mod persistence;

pub use catalog::{CatalogProvider, InMemoryCatalog, JsonCatalog};
pub use identity::{PlayerIdentity, Role, UserId};
pub use memory::InMemoryStore;
pub use models::{
    Deck, DeckCard, DeckId, MatchId, MatchResult, PlayerCard, PlayerCardId, UserProfile,
    DEFAULT_DECK_NAME,
};
pub use persistence::PersistenceSink;

pub use crate::core::{CollabResult, CollaboratorError};
