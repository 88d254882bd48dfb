//! Game host: the I/O boundary around the pure session core.
//!
//! A `GameHost` owns the injected collaborators. It reads decks and cards
//! before a game starts and writes the result after it ends; the session
//! in between never touches a backend.
//!
//! ```
//! use tessera::cards::{Card, CardId, Powers};
//! use tessera::collab::{InMemoryCatalog, InMemoryStore, PersistenceSink, PlayerIdentity};
//! use tessera::core::{GameConfig, PlayerId};
//! use tessera::host::{GameHost, Seating};
//!
//! let cards = (1..=5).map(|id| Card::new(CardId::new(id), "Imp", Powers::new(4, 4, 4, 4)));
//! let host = GameHost::new(InMemoryCatalog::with_cards(cards), InMemoryStore::new(), GameConfig::default())?;
//!
//! let admin = PlayerIdentity::admin("root", "Root");
//! let mut seats = Vec::new();
//! for name in ["ann", "ben"] {
//!     let who = PlayerIdentity::player(name, name);
//!     for id in 1..=5 {
//!         host.store().grant_cards(&admin, &who.id, CardId::new(id), 1)?;
//!     }
//!     let deck = host.store().create_deck(&who, "main")?;
//!     for id in 1..=5 {
//!         host.store().add_to_deck(&who, deck.id, CardId::new(id), 1)?;
//!     }
//!     seats.push(Seating::new(who, deck.id));
//! }
//!
//! let [one, two]: [Seating; 2] = seats.try_into().unwrap();
//! let session = host.start_game([one, two], 9)?;
//! assert_eq!(session.identity(PlayerId::ONE).id.as_str(), "ann");
//! # Ok::<(), tessera::core::GameError>(())
//! ```

use std::sync::Arc;

use log::{debug, info};

use crate::cards::{Card, CardCatalog};
use crate::collab::{CatalogProvider, DeckId, MatchId, MatchResult, PersistenceSink, PlayerIdentity};
use crate::core::{GameConfig, GameError, PlayerId, PlayerMap, Result};
use crate::session::{GameSession, GameSessionBuilder};

/// Who sits at a seat and which of their decks they bring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seating {
    pub identity: PlayerIdentity,
    pub deck: DeckId,
}

impl Seating {
    #[must_use]
    pub fn new(identity: PlayerIdentity, deck: DeckId) -> Self {
        Self { identity, deck }
    }
}

/// Owns the collaborators and a loaded card catalog.
pub struct GameHost<C, S> {
    provider: C,
    store: S,
    config: GameConfig,
    catalog: CardCatalog,
}

impl<C: CatalogProvider, S: PersistenceSink> GameHost<C, S> {
    /// Validate `config` and load the catalog from `provider`.
    pub fn new(provider: C, store: S, config: GameConfig) -> Result<Self> {
        config.validate()?;
        let catalog = CardCatalog::from_provider(&provider, config.power_range)?;
        info!("host ready with {} cards", catalog.len());
        Ok(Self {
            provider,
            store,
            config,
            catalog,
        })
    }

    /// Reload the catalog. On failure the old catalog stays in place.
    pub fn refresh_catalog(&mut self) -> Result<()> {
        self.catalog = CardCatalog::from_provider(&self.provider, self.config.power_range)?;
        debug!("catalog refreshed: {} cards", self.catalog.len());
        Ok(())
    }

    /// Load both seats' decks and start a session.
    ///
    /// Each deck is read as its seat's identity, so a player can only
    /// bring a deck they own.
    pub fn start_game(&self, seats: [Seating; 2], seed: u64) -> Result<GameSession> {
        let mut builder = GameSessionBuilder::new(self.config.clone());
        for (player, seating) in PlayerId::all().zip(seats) {
            let deck = self.deck_cards(&seating)?;
            builder = builder.seat(player, seating.identity).deck(player, deck);
        }
        builder.build(seed)
    }

    fn deck_cards(&self, seating: &Seating) -> Result<Vec<Arc<Card>>> {
        let deck = self.store.get_deck(&seating.identity, seating.deck)?;
        debug!(
            "{} brings deck {} ({} cards)",
            seating.identity.id,
            deck.id,
            deck.total_cards()
        );
        deck.expand()
            .into_iter()
            .map(|id| self.catalog.get(id))
            .collect()
    }

    /// Store the result of a finished session on behalf of `actor`.
    pub fn finish_game(&self, actor: &PlayerIdentity, session: &GameSession) -> Result<MatchId> {
        if !session.is_over() {
            return Err(GameError::InProgress);
        }
        let result = MatchResult {
            id: MatchId(0),
            players: PlayerMap::new(|p| session.identity(p).id.clone()),
            scores: session.scores().clone(),
            status: session.status(),
            moves: session.history().iter().cloned().collect(),
        };
        let id = self.store.record_result(actor, result)?;
        info!("match {id} recorded: {}", session.status());
        Ok(id)
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn provider(&self) -> &C {
        &self.provider
    }

    /// Mutable access for admin catalog edits; call `refresh_catalog` after.
    pub fn provider_mut(&mut self) -> &mut C {
        &mut self.provider
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
