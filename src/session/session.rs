//! The game session: turn order, move validation, and win detection.
//!
//! ## Lifecycle
//!
//! A session starts `InProgress` with full hands and an empty board. Each
//! successful `submit_move` places one card, resolves captures, and passes
//! the turn. The session becomes terminal when:
//!
//! - the board is full (majority of owned cells wins, equal is a draw),
//! - the seat to move has no cards left (decided the same way), or
//! - a seat concedes (the other seat wins).
//!
//! Terminal states are final. Every rejected call leaves the session
//! exactly as it was.

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::{Board, CellIndex, PlacedCard};
use crate::cards::{CardId, Hand};
use crate::collab::{PlayerIdentity, UserId};
use crate::core::{GameConfig, GameError, Move, MoveRecord, PlayerId, PlayerMap, Result};
use crate::rules::{Captures, GameStatus, PlacementRules};

/// What a successful move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move as recorded in history, including captures.
    pub record: MoveRecord,

    /// Owned cells per seat after the move.
    pub scores: PlayerMap<u8>,

    /// Status after the move.
    pub status: GameStatus,

    /// Seat to move next, `None` once the game is over.
    pub next_player: Option<PlayerId>,
}

impl MoveOutcome {
    /// Cells that flipped to the mover.
    #[must_use]
    pub fn captured(&self) -> &Captures {
        &self.record.captured
    }
}

/// One game from empty board to terminal status.
///
/// Create with `GameSessionBuilder`. Sessions are cheap to clone (history
/// is a persistent vector) and can be snapshotted with `to_bytes`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    hands: PlayerMap<Hand>,
    identities: PlayerMap<PlayerIdentity>,
    current_player: PlayerId,
    scores: PlayerMap<u8>,
    status: GameStatus,
    /// Turn number of the next move (starts at 1).
    turn: u32,
    history: Vector<MoveRecord>,
}

impl GameSession {
    pub(crate) fn new(
        config: GameConfig,
        hands: PlayerMap<Hand>,
        identities: PlayerMap<PlayerIdentity>,
        first_player: PlayerId,
    ) -> Self {
        Self {
            config,
            board: Board::new(),
            hands,
            identities,
            current_player: first_player,
            scores: PlayerMap::with_value(0),
            status: GameStatus::InProgress,
            turn: 1,
            history: Vector::new(),
        }
    }

    // === Moves ===

    /// Place `card` from `player`'s hand on cell `cell`.
    ///
    /// Checks, in order: the game is not over, it is `player`'s turn, the
    /// card is in their hand, the cell exists and is empty. Nothing changes
    /// unless every check passes.
    pub fn submit_move(&mut self, player: PlayerId, card: CardId, cell: usize) -> Result<MoveOutcome> {
        self.ensure_in_progress()?;
        if player != self.current_player {
            return Err(GameError::NotYourTurn {
                expected: self.current_player,
                actual: player,
            });
        }
        let position = self.hands[player]
            .position(card)
            .ok_or(GameError::CardNotInHand { player, card })?;
        let cell = CellIndex::new(cell)?;
        if self.board.is_occupied(cell) {
            return Err(GameError::CellOccupied { index: cell.index() });
        }

        // Validated above; placement cannot fail from here on.
        let taken = self.hands[player]
            .take_at(position)
            .ok_or(GameError::CardNotInHand { player, card })?;
        let placed = PlacedCard::new(taken, player);
        let captured = PlacementRules::apply(&mut self.board, cell, placed)?;

        let record = MoveRecord::new(self.turn, Move::new(player, card, cell), captured);
        debug!(
            "turn {}: {player} placed {card} at {cell}, captured {:?}",
            self.turn,
            record.captured.as_slice()
        );
        self.history.push_back(record.clone());
        self.turn += 1;
        self.current_player = player.opponent();
        self.refresh_scores();
        self.update_status();

        Ok(MoveOutcome {
            record,
            scores: self.scores.clone(),
            status: self.status,
            next_player: self.next_player(),
        })
    }

    /// Submit a prepared `Move`.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome> {
        self.submit_move(mv.player, mv.card, mv.cell.index())
    }

    /// End the game at once with `player`'s opponent as winner.
    ///
    /// Either seat may concede at any time while the game is in progress.
    pub fn concede(&mut self, player: PlayerId) -> Result<GameStatus> {
        self.ensure_in_progress()?;
        self.status = GameStatus::won_by(player.opponent());
        info!("{player} conceded, {}", self.status);
        Ok(self.status)
    }

    /// Every legal move for the seat to move, grouped by card then cell.
    ///
    /// Duplicate copies of a card in hand produce one set of moves.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        let player = self.current_player;
        let mut cards: Vec<CardId> = Vec::new();
        for id in self.hands[player].card_ids() {
            if !cards.contains(&id) {
                cards.push(id);
            }
        }

        let empty: Vec<CellIndex> = self.board.empty_cells().collect();
        cards
            .into_iter()
            .flat_map(|card| empty.iter().map(move |&cell| Move::new(player, card, cell)))
            .collect()
    }

    fn ensure_in_progress(&self) -> Result<()> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver { status: self.status });
        }
        Ok(())
    }

    fn refresh_scores(&mut self) {
        let board = &self.board;
        self.scores = PlayerMap::new(|p| board.count_owned(p) as u8);
    }

    fn update_status(&mut self) {
        let stalled = self.hands[self.current_player].is_empty();
        if self.board.is_full() || stalled {
            self.status = GameStatus::from_counts(
                self.scores[PlayerId::ONE] as usize,
                self.scores[PlayerId::TWO] as usize,
            );
            info!(
                "game over after {} moves: {} ({}-{})",
                self.history.len(),
                self.status,
                self.scores[PlayerId::ONE],
                self.scores[PlayerId::TWO]
            );
        }
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// Seat whose turn it is. Still reports the last value after the game ends.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Seat to move, or `None` when the game is over.
    #[must_use]
    pub fn next_player(&self) -> Option<PlayerId> {
        (!self.status.is_terminal()).then_some(self.current_player)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.status.winner()
    }

    /// Owned cells per seat.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u8> {
        &self.scores
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u8 {
        self.scores[player]
    }

    /// Completed moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn identity(&self, player: PlayerId) -> &PlayerIdentity {
        &self.identities[player]
    }

    /// The seat a user occupies, if any.
    #[must_use]
    pub fn seat_of(&self, user: &UserId) -> Option<PlayerId> {
        self.identities
            .iter()
            .find(|(_, identity)| &identity.id == user)
            .map(|(seat, _)| seat)
    }

    // === Snapshots ===

    /// Encode the whole session with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| GameError::Snapshot(e.to_string()))
    }

    /// Restore a session encoded by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| GameError::Snapshot(e.to_string()))
    }
}
