//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card a session may use. It is filled
//! once (usually from a `CatalogProvider`) and is read-only afterwards.
//! Cards are handed out as `Arc<Card>` so a hand and the board share the
//! same card identity instead of copying it.

use std::sync::Arc;

use log::debug;
use rustc_hash::FxHashMap;

use super::definition::{Card, CardId};
use crate::collab::CatalogProvider;
use crate::core::{GameError, PowerRange, Result};

/// Read-only catalog of cards.
///
/// ## Example
///
/// ```
/// use tessera::cards::{Card, CardCatalog, CardId, Powers};
/// use tessera::core::PowerRange;
///
/// let catalog = CardCatalog::from_cards(
///     [Card::new(CardId::new(1), "Dragon", Powers::new(8, 4, 7, 1))],
///     PowerRange::default(),
/// )
/// .unwrap();
///
/// assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "Dragon");
/// assert!(catalog.get(CardId::new(2)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Arc<Card>>,
    power_range: PowerRange,
}

impl CardCatalog {
    /// Create a new empty catalog that accepts powers in `power_range`.
    #[must_use]
    pub fn new(power_range: PowerRange) -> Self {
        Self {
            cards: FxHashMap::default(),
            power_range,
        }
    }

    /// Build a catalog from a list of cards.
    ///
    /// Fails on the first invalid or duplicate card.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>, power_range: PowerRange) -> Result<Self> {
        let mut catalog = Self::new(power_range);
        for card in cards {
            catalog.insert(card)?;
        }
        Ok(catalog)
    }

    /// Load every card the provider lists.
    ///
    /// Provider failures are returned unchanged as `GameError::Collaborator`.
    pub fn from_provider<P>(provider: &P, power_range: PowerRange) -> Result<Self>
    where
        P: CatalogProvider + ?Sized,
    {
        let cards = provider.list_cards()?;
        let catalog = Self::from_cards(cards, power_range)?;
        debug!("loaded {} cards into catalog", catalog.len());
        Ok(catalog)
    }

    /// Add a card. Only used while loading.
    fn insert(&mut self, card: Card) -> Result<()> {
        card.validate(self.power_range)?;
        if self.cards.contains_key(&card.id) {
            return Err(GameError::DuplicateCard { card: card.id });
        }
        self.cards.insert(card.id, Arc::new(card));
        Ok(())
    }

    /// Get a card by ID.
    pub fn get(&self, id: CardId) -> Result<Arc<Card>> {
        self.cards
            .get(&id)
            .cloned()
            .ok_or(GameError::NotFound { card: id })
    }

    /// Check if a card ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// The power bounds this catalog enforces.
    #[must_use]
    pub fn power_range(&self) -> PowerRange {
        self.power_range
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.values()
    }
}
