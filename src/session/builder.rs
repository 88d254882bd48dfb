//! Session setup: seats, hands, and the opening player.

use std::sync::Arc;

use log::debug;

use super::session::GameSession;
use crate::cards::{Card, Hand};
use crate::collab::PlayerIdentity;
use crate::core::{
    DealOrder, FirstPlayer, GameConfig, GameError, GameRng, PlayerId, PlayerMap, Result,
};

#[derive(Clone, Debug)]
enum CardSource {
    /// Dealt exactly as given.
    Hand(Vec<Arc<Card>>),
    /// Hand is drawn from it per `GameConfig::deal`.
    Deck(Vec<Arc<Card>>),
}

/// Builder for a `GameSession`.
///
/// Each seat needs either a ready hand or a deck to deal from. Seats left
/// without an identity are filled with `PlayerIdentity::guest`.
///
/// ```
/// use std::sync::Arc;
/// use tessera::cards::{Card, CardId, Powers};
/// use tessera::core::{GameConfig, PlayerId};
/// use tessera::session::GameSessionBuilder;
///
/// let deck: Vec<Arc<Card>> = (1..=5)
///     .map(|id| Arc::new(Card::new(CardId::new(id), "Sprite", Powers::new(3, 3, 3, 3))))
///     .collect();
///
/// let session = GameSessionBuilder::new(GameConfig::default())
///     .deck(PlayerId::ONE, deck.clone())
///     .deck(PlayerId::TWO, deck)
///     .build(42)
///     .unwrap();
/// assert_eq!(session.hand(PlayerId::TWO).len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct GameSessionBuilder {
    config: GameConfig,
    identities: PlayerMap<Option<PlayerIdentity>>,
    sources: PlayerMap<Option<CardSource>>,
}

impl GameSessionBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            identities: PlayerMap::with_default(),
            sources: PlayerMap::with_default(),
        }
    }

    /// Seat an authenticated user.
    pub fn seat(mut self, player: PlayerId, identity: PlayerIdentity) -> Self {
        self.identities[player] = Some(identity);
        self
    }

    /// Give a seat this exact hand. Replaces any earlier hand or deck.
    pub fn hand(mut self, player: PlayerId, cards: Vec<Arc<Card>>) -> Self {
        self.sources[player] = Some(CardSource::Hand(cards));
        self
    }

    /// Deal a seat's hand from `deck`. Replaces any earlier hand or deck.
    pub fn deck(mut self, player: PlayerId, deck: Vec<Arc<Card>>) -> Self {
        self.sources[player] = Some(CardSource::Deck(deck));
        self
    }

    /// Validate the setup and create the session.
    ///
    /// `seed` drives deck shuffling and a random first player, so equal
    /// seeds and inputs give equal sessions.
    pub fn build(mut self, seed: u64) -> Result<GameSession> {
        self.config.validate()?;
        let rng = GameRng::new(seed);
        let hand_size = self.config.hand_size;

        let mut hands: PlayerMap<Hand> = PlayerMap::with_default();
        for player in PlayerId::all() {
            let cards = match self.sources[player].take() {
                None => {
                    return Err(GameError::InvalidDeck {
                        reason: format!("{player} has no cards"),
                    })
                }
                Some(CardSource::Hand(cards)) => {
                    if cards.is_empty() || cards.len() > hand_size {
                        return Err(GameError::InvalidDeck {
                            reason: format!(
                                "{player} hand holds {} cards, expected 1 to {hand_size}",
                                cards.len()
                            ),
                        });
                    }
                    cards
                }
                Some(CardSource::Deck(mut deck)) => {
                    if deck.len() < hand_size {
                        return Err(GameError::InvalidDeck {
                            reason: format!(
                                "{player} deck holds {} cards, a hand needs {hand_size}",
                                deck.len()
                            ),
                        });
                    }
                    if self.config.deal == DealOrder::Shuffled {
                        let context = format!("deal:{}", player.index());
                        rng.for_context(&context).shuffle(&mut deck);
                    }
                    deck.truncate(hand_size);
                    deck
                }
            };

            for card in &cards {
                card.validate(self.config.power_range)?;
            }
            hands[player] = Hand::new(cards);
        }

        let first_player = match self.config.first_player {
            FirstPlayer::Seat(player) => player,
            FirstPlayer::Random => {
                if rng.for_context("first_player").gen_bool(0.5) {
                    PlayerId::ONE
                } else {
                    PlayerId::TWO
                }
            }
        };

        let identities = PlayerMap::new(|p| {
            self.identities[p]
                .clone()
                .unwrap_or_else(|| PlayerIdentity::guest(p))
        });

        debug!(
            "new session (seed {seed}): {} vs {}, {first_player} opens",
            identities[PlayerId::ONE].display_name,
            identities[PlayerId::TWO].display_name
        );
        Ok(GameSession::new(self.config, hands, identities, first_player))
    }
}
