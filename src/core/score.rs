//! Totally ordered search scores.
//!
//! A `Score` is a state's utility to the maximizing player. Proven outcomes
//! use the `WIN`/`LOSS`/`DRAW` constants; heuristic estimates must stay
//! strictly inside `(LOSS, WIN)` so a proven line always outranks a guess.
//! `Score::heuristic` clamps into that range.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Neg;

use super::Player;

/// Search value with `+∞`/`−∞` sentinels for unbounded windows.
///
/// Serializes as a bare number. Deserialization goes through `Score::new`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// Upper sentinel. Greater than every real score.
    pub const INFINITY: Score = Score(f64::INFINITY);

    /// Lower sentinel. Less than every real score.
    pub const NEG_INFINITY: Score = Score(f64::NEG_INFINITY);

    /// Proven win for the maximizing player.
    pub const WIN: Score = Score(1_000_000.0);

    /// Proven loss for the maximizing player.
    pub const LOSS: Score = Score(-1_000_000.0);

    /// Proven draw.
    pub const DRAW: Score = Score(0.0);

    /// Wrap a raw value.
    ///
    /// NaN and `-0.0` are mapped to `DRAW` so the ordering stays total.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() || value == 0.0 {
            Self::DRAW
        } else {
            Self(value)
        }
    }

    /// Wrap a heuristic estimate, clamping it strictly inside `(LOSS, WIN)`.
    ///
    /// ```
    /// use rust_minimax::core::Score;
    ///
    /// assert!(Score::heuristic(5.0e9) < Score::WIN);
    /// assert!(Score::heuristic(-5.0e9) > Score::LOSS);
    /// assert_eq!(Score::heuristic(12.0).value(), 12.0);
    /// ```
    #[must_use]
    pub fn heuristic(value: f64) -> Self {
        let bound = Self::WIN.0 - 1.0;
        Self::new(value).clamp(Score(-bound), Score(bound))
    }

    /// The proven-win score for `winner`, seen from `perspective`.
    #[must_use]
    pub fn win_for(winner: Player, perspective: Player) -> Self {
        if winner == perspective {
            Self::WIN
        } else {
            Self::LOSS
        }
    }

    /// Raw value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// True for proven wins or losses.
    #[must_use]
    pub fn is_proven(self) -> bool {
        self.0.abs() >= Self::WIN.0
    }

    /// Worst possible score for `player`, used to seed a best-so-far value.
    #[must_use]
    pub const fn worst_for(player: Player) -> Self {
        match player {
            Player::Maximizing => Self::NEG_INFINITY,
            Player::Minimizing => Self::INFINITY,
        }
    }

    /// True if `self` is strictly better than `other` for `player`.
    ///
    /// Equal values are never an improvement, which keeps the first-found
    /// move on ties.
    #[must_use]
    pub fn improves_on(self, other: Score, player: Player) -> bool {
        match player {
            Player::Maximizing => self > other,
            Player::Minimizing => self < other,
        }
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Neg for Score {
    type Output = Self;

    fn neg(self) -> Self {
        Score::new(-self.0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Score::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Score(f64::from(value))
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self >= Self::WIN {
            write!(f, "WIN")
        } else if *self <= Self::LOSS {
            write!(f, "LOSS")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Score::NEG_INFINITY < Score::LOSS);
        assert!(Score::LOSS < Score::DRAW);
        assert!(Score::DRAW < Score::WIN);
        assert!(Score::WIN < Score::INFINITY);
    }

    #[test]
    fn test_negative_zero_is_draw() {
        assert_eq!(-Score::DRAW, Score::new(0.0));
        assert_eq!(Score::new(-0.0), Score::DRAW);
    }

    #[test]
    fn test_deserialize_normalizes_like_new() {
        let score: Score = serde_json::from_str("-0.0").unwrap();
        assert_eq!(score, Score::DRAW);
        assert_eq!(score.value().to_bits(), 0.0f64.to_bits());

        assert_eq!(serde_json::to_string(&Score::from(-12)).unwrap(), "-12.0");
        let back: Score = serde_json::from_str("-12.0").unwrap();
        assert_eq!(back, Score::from(-12));
        let win: Score = serde_json::from_str(&serde_json::to_string(&Score::WIN).unwrap()).unwrap();
        assert_eq!(win, Score::WIN);
    }

    #[test]
    fn test_nan_maps_to_draw() {
        assert_eq!(Score::new(f64::NAN), Score::DRAW);
    }

    #[test]
    fn test_heuristic_clamped() {
        assert!(Score::heuristic(f64::INFINITY) < Score::WIN);
        assert!(Score::heuristic(f64::NEG_INFINITY) > Score::LOSS);
        assert!(!Score::heuristic(1.0e12).is_proven());
    }

    #[test]
    fn test_win_for() {
        assert_eq!(Score::win_for(Player::Maximizing, Player::Maximizing), Score::WIN);
        assert_eq!(Score::win_for(Player::Maximizing, Player::Minimizing), Score::LOSS);
        assert_eq!(Score::win_for(Player::Minimizing, Player::Minimizing), Score::WIN);
    }

    #[test]
    fn test_improves_on_keeps_ties() {
        let a = Score::from(3);
        assert!(!a.improves_on(a, Player::Maximizing));
        assert!(!a.improves_on(a, Player::Minimizing));
        assert!(Score::from(4).improves_on(a, Player::Maximizing));
        assert!(Score::from(2).improves_on(a, Player::Minimizing));
    }

    #[test]
    fn test_worst_for() {
        assert!(Score::LOSS.improves_on(Score::worst_for(Player::Maximizing), Player::Maximizing));
        assert!(Score::WIN.improves_on(Score::worst_for(Player::Minimizing), Player::Minimizing));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Score::WIN), "WIN");
        assert_eq!(format!("{}", Score::LOSS), "LOSS");
        assert_eq!(format!("{}", Score::from(7)), "7");
    }
}
