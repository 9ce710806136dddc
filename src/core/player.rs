//! Player roles.
//!
//! ## Player
//!
//! The engine only knows two roles: the side that maximizes the score and the
//! side that minimizes it. Adapters map roles onto their concrete players
//! (X/O, red/yellow, human/computer).

use serde::{Deserialize, Serialize};

/// One of the two search roles.
///
/// Scores are always expressed from the point of view of `Maximizing`.
/// Roles strictly alternate with each ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Searches for the highest score.
    Maximizing,
    /// Searches for the lowest score.
    Minimizing,
}

impl Player {
    /// The role that moves after this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Player::Maximizing => Player::Minimizing,
            Player::Minimizing => Player::Maximizing,
        }
    }

    /// Check if this is the maximizing role.
    #[must_use]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Player::Maximizing)
    }

    /// Both roles, maximizing first.
    ///
    /// ```
    /// use rust_minimax::core::Player;
    ///
    /// let roles: Vec<_> = Player::both().collect();
    /// assert_eq!(roles, vec![Player::Maximizing, Player::Minimizing]);
    /// ```
    pub fn both() -> impl Iterator<Item = Player> {
        [Player::Maximizing, Player::Minimizing].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Maximizing => write!(f, "MAX"),
            Player::Minimizing => write!(f, "MIN"),
        }
    }
}
