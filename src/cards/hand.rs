//! A seat's hand: the cards it may still place this session.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId};

/// Ordered cards available to one seat.
///
/// A card leaves the hand exactly when it is placed, and the same
/// `Arc<Card>` moves into the board's `PlacedCard`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Arc<Card>>,
}

impl Hand {
    #[must_use]
    pub fn new(cards: Vec<Arc<Card>>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check if a card with this ID is in the hand.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    /// Position of the first copy of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    /// Remove the card at `position`, keeping the order of the rest.
    ///
    /// `None` (and no change) if `position` is past the end.
    pub fn take_at(&mut self, position: usize) -> Option<Arc<Card>> {
        (position < self.cards.len()).then(|| self.cards.remove(position))
    }

    /// Remove the first copy of a card.
    pub fn take(&mut self, id: CardId) -> Option<Arc<Card>> {
        let position = self.position(id)?;
        self.take_at(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.iter()
    }

    /// Card IDs in hand order.
    #[must_use]
    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Powers;

    fn hand(ids: &[u32]) -> Hand {
        Hand::new(
            ids.iter()
                .map(|&id| Arc::new(Card::new(CardId::new(id), format!("c{id}"), Powers::new(1, 1, 1, 1))))
                .collect(),
        )
    }

    #[test]
    fn test_take_preserves_order() {
        let mut h = hand(&[1, 2, 3]);
        let taken = h.take(CardId::new(2)).unwrap();

        assert_eq!(taken.id, CardId::new(2));
        assert_eq!(h.card_ids(), vec![CardId::new(1), CardId::new(3)]);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn test_take_missing() {
        let mut h = hand(&[1]);
        assert!(h.take(CardId::new(9)).is_none());
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn test_take_at_past_end() {
        let mut h = hand(&[1, 2]);
        assert!(h.take_at(2).is_none());
        assert_eq!(h.len(), 2);
        assert_eq!(h.take_at(1).unwrap().id, CardId::new(2));
    }

    #[test]
    fn test_duplicates_removed_one_at_a_time() {
        let mut h = hand(&[4, 4]);
        assert!(h.take(CardId::new(4)).is_some());
        assert!(h.contains(CardId::new(4)));
        assert!(h.take(CardId::new(4)).is_some());
        assert!(h.is_empty());
    }

    #[test]
    fn test_take_moves_identity() {
        let card = Arc::new(Card::new(CardId::new(1), "Dragon", Powers::new(8, 4, 7, 1)));
        let mut h = Hand::new(vec![Arc::clone(&card)]);
        let taken = h.take(CardId::new(1)).unwrap();
        assert!(Arc::ptr_eq(&card, &taken));
    }
}
