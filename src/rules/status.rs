//! Session status and result scoring.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Where a session is in its lifecycle.
///
/// `InProgress` is the only non-terminal state; the others are final.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Player1Won,
    Player2Won,
    Draw,
}

impl GameStatus {
    /// Terminal status for a seat that won.
    #[must_use]
    pub const fn won_by(player: PlayerId) -> Self {
        match player {
            PlayerId::ONE => GameStatus::Player1Won,
            _ => GameStatus::Player2Won,
        }
    }

    /// Decide a finished game from owned-cell counts.
    ///
    /// Strictly more cells wins; equal counts draw.
    ///
    /// ```
    /// use tessera::rules::GameStatus;
    ///
    /// assert_eq!(GameStatus::from_counts(5, 4), GameStatus::Player1Won);
    /// assert_eq!(GameStatus::from_counts(3, 6), GameStatus::Player2Won);
    /// assert_eq!(GameStatus::from_counts(4, 4), GameStatus::Draw);
    /// ```
    #[must_use]
    pub fn from_counts(player_one: usize, player_two: usize) -> Self {
        match player_one.cmp(&player_two) {
            std::cmp::Ordering::Greater => GameStatus::Player1Won,
            std::cmp::Ordering::Less => GameStatus::Player2Won,
            std::cmp::Ordering::Equal => GameStatus::Draw,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning seat, if there is one.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Player1Won => Some(PlayerId::ONE),
            GameStatus::Player2Won => Some(PlayerId::TWO),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::Player1Won => "player 1 won",
            GameStatus::Player2Won => "player 2 won",
            GameStatus::Draw => "draw",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_won_by_and_winner() {
        for p in PlayerId::all() {
            let status = GameStatus::won_by(p);
            assert!(status.is_terminal());
            assert_eq!(status.winner(), Some(p));
        }
    }

    #[test]
    fn test_non_winning_states() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert_eq!(GameStatus::InProgress.winner(), None);
        assert!(GameStatus::Draw.is_terminal());
        assert_eq!(GameStatus::Draw.winner(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(GameStatus::Player2Won.to_string(), "player 2 won");
    }
}
