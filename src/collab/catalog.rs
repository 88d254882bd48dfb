//! Catalog Provider: where card definitions come from.
//!
//! The engine only reads the catalog. Writes are an administrative
//! concern of the provider; `InMemoryCatalog` allows them to admins only,
//! while anyone may read.

use log::debug;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::identity::PlayerIdentity;
use crate::cards::{Card, CardId, Powers};
use crate::core::{CollabResult, CollaboratorError, Power};

/// Source of card definitions.
pub trait CatalogProvider {
    /// Every card in the catalog, in a stable order.
    fn list_cards(&self) -> CollabResult<Vec<Card>>;

    /// One card by ID.
    fn get_card(&self, id: CardId) -> CollabResult<Card>;
}

fn card_not_found(id: CardId) -> CollaboratorError {
    CollaboratorError::NotFound {
        kind: "card",
        id: id.raw().to_string(),
    }
}

/// In-process catalog with admin-gated writes.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    cards: FxHashMap<CardId, Card>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the catalog without an actor, for fixtures and tests.
    #[must_use]
    pub fn with_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    /// Create or replace a card. Admins only.
    pub fn upsert_card(&mut self, actor: &PlayerIdentity, card: Card) -> CollabResult<()> {
        if !actor.is_admin() {
            return Err(CollaboratorError::Forbidden {
                actor: actor.id.clone(),
                action: "edit the card catalog",
            });
        }
        debug!("{} upserted {}", actor.id, card.id);
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Delete a card. Admins only.
    pub fn remove_card(&mut self, actor: &PlayerIdentity, id: CardId) -> CollabResult<Card> {
        if !actor.is_admin() {
            return Err(CollaboratorError::Forbidden {
                actor: actor.id.clone(),
                action: "edit the card catalog",
            });
        }
        self.cards.remove(&id).ok_or_else(|| card_not_found(id))
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn list_cards(&self) -> CollabResult<Vec<Card>> {
        let mut cards: Vec<Card> = self.cards.values().cloned().collect();
        cards.sort_by_key(|c| c.id);
        Ok(cards)
    }

    fn get_card(&self, id: CardId) -> CollabResult<Card> {
        self.cards.get(&id).cloned().ok_or_else(|| card_not_found(id))
    }
}

/// A card row as exported by the hosted data service.
///
/// Powers are nullable there; a missing power makes the row unusable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardRecord {
    id: u32,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tier: Option<u32>,
    power_top: Option<Power>,
    power_right: Option<Power>,
    power_bottom: Option<Power>,
    power_left: Option<Power>,
}

impl TryFrom<CardRecord> for Card {
    type Error = CollaboratorError;

    fn try_from(record: CardRecord) -> CollabResult<Self> {
        let missing = |side: &str| {
            CollaboratorError::Invalid(format!("card {} has no {side} power", record.id))
        };
        let powers = Powers::new(
            record.power_top.ok_or_else(|| missing("top"))?,
            record.power_right.ok_or_else(|| missing("right"))?,
            record.power_bottom.ok_or_else(|| missing("bottom"))?,
            record.power_left.ok_or_else(|| missing("left"))?,
        );
        Ok(Card {
            id: CardId::new(record.id),
            name: record.name,
            description: record.description,
            tier: record.tier,
            powers,
        })
    }
}

/// Read-only catalog parsed from a JSON export.
///
/// ```
/// use tessera::collab::{CatalogProvider, JsonCatalog};
///
/// let json = r#"[
///   { "id": 1, "name": "Dragon", "powerTop": 8, "powerRight": 4, "powerBottom": 7, "powerLeft": 1 }
/// ]"#;
/// let catalog = JsonCatalog::from_json(json).unwrap();
/// assert_eq!(catalog.list_cards().unwrap()[0].name, "Dragon");
/// ```
#[derive(Clone, Debug, Default)]
pub struct JsonCatalog {
    cards: Vec<Card>,
}

impl JsonCatalog {
    /// Parse a JSON array of card records.
    pub fn from_json(json: &str) -> CollabResult<Self> {
        let records: Vec<CardRecord> =
            serde_json::from_str(json).map_err(|e| CollaboratorError::Invalid(e.to_string()))?;
        Self::from_records(records)
    }

    /// Parse a JSON array of card records from a reader.
    pub fn from_reader(reader: impl std::io::Read) -> CollabResult<Self> {
        let records: Vec<CardRecord> = serde_json::from_reader(reader)
            .map_err(|e| CollaboratorError::Backend(e.to_string()))?;
        Self::from_records(records)
    }

    fn from_records(records: Vec<CardRecord>) -> CollabResult<Self> {
        let mut cards = records
            .into_iter()
            .map(Card::try_from)
            .collect::<CollabResult<Vec<_>>>()?;
        cards.sort_by_key(|c| c.id);
        Ok(Self { cards })
    }
}

impl CatalogProvider for JsonCatalog {
    fn list_cards(&self) -> CollabResult<Vec<Card>> {
        Ok(self.cards.clone())
    }

    fn get_card(&self, id: CardId) -> CollabResult<Card> {
        self.cards
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| card_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight(id: u32) -> Card {
        Card::new(CardId::new(id), "Knight", Powers::new(6, 6, 6, 6))
    }

    #[test]
    fn test_public_read() {
        let catalog = InMemoryCatalog::with_cards([knight(2), knight(1)]);
        let ids: Vec<_> = catalog.list_cards().unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CardId::new(1), CardId::new(2)]);
        assert_eq!(catalog.get_card(CardId::new(2)).unwrap().name, "Knight");
    }

    #[test]
    fn test_get_missing() {
        let catalog = InMemoryCatalog::new();
        assert_eq!(
            catalog.get_card(CardId::new(5)).unwrap_err(),
            CollaboratorError::NotFound { kind: "card", id: "5".to_string() }
        );
    }

    #[test]
    fn test_admin_only_writes() {
        let mut catalog = InMemoryCatalog::new();
        let player = PlayerIdentity::player("u-1", "alice");
        let admin = PlayerIdentity::admin("u-0", "root");

        let err = catalog.upsert_card(&player, knight(1)).unwrap_err();
        assert!(matches!(err, CollaboratorError::Forbidden { .. }));
        assert!(catalog.list_cards().unwrap().is_empty());

        catalog.upsert_card(&admin, knight(1)).unwrap();
        assert!(catalog.remove_card(&player, CardId::new(1)).is_err());
        assert_eq!(catalog.remove_card(&admin, CardId::new(1)).unwrap().id, CardId::new(1));
        assert!(catalog.remove_card(&admin, CardId::new(1)).is_err());
    }

    #[test]
    fn test_json_catalog() {
        let json = r#"[
            { "id": 2, "name": "Knight", "powerTop": 6, "powerRight": 6, "powerBottom": 6, "powerLeft": 6 },
            { "id": 1, "name": "Dragon", "description": "Old", "tier": 3,
              "powerTop": 8, "powerRight": 4, "powerBottom": 7, "powerLeft": 1 }
        ]"#;
        let catalog = JsonCatalog::from_json(json).unwrap();
        let cards = catalog.list_cards().unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Dragon");
        assert_eq!(cards[0].tier, Some(3));
        assert_eq!(cards[0].powers, Powers::new(8, 4, 7, 1));
        assert!(catalog.get_card(CardId::new(3)).is_err());
    }

    #[test]
    fn test_json_catalog_missing_power() {
        let json = r#"[{ "id": 1, "name": "Blank", "powerTop": null, "powerRight": 1, "powerBottom": 1, "powerLeft": 1 }]"#;
        let err = JsonCatalog::from_json(json).unwrap_err();
        assert_eq!(err, CollaboratorError::Invalid("card 1 has no top power".to_string()));
    }

    #[test]
    fn test_json_catalog_malformed() {
        assert!(matches!(
            JsonCatalog::from_json("{").unwrap_err(),
            CollaboratorError::Invalid(_)
        ));
    }
}
