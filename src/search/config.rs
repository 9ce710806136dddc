//! Search configuration parameters.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{SearchError, SearchResult};

/// Traversal strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Plain Minimax: every child of every node is visited.
    Minimax,
    /// Minimax with alpha-beta pruning. Same result, fewer nodes.
    AlphaBeta,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Minimax => write!(f, "minimax"),
            Strategy::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    /// Accepts `minimax`, `alphabeta`, `alpha-beta`, `alpha_beta` and `ab`,
    /// in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "alphabeta" | "ab" => Ok(Strategy::AlphaBeta),
            _ => Err(SearchError::Config(format!("unknown strategy {s:?}"))),
        }
    }
}

/// Search configuration parameters.
///
/// `depth_limit: None` searches to terminal states only (complete search).
/// `Some(d)` stops after `d` plies and substitutes the heuristic value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Traversal strategy.
    pub strategy: Strategy,

    /// Maximum plies to search below the root (`None` = unlimited).
    pub depth_limit: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::AlphaBeta,
            depth_limit: None,
        }
    }
}

impl SearchConfig {
    /// Complete Minimax.
    #[must_use]
    pub fn minimax_complete() -> Self {
        Self::default().with_strategy(Strategy::Minimax)
    }

    /// Depth-limited Minimax.
    #[must_use]
    pub fn minimax_limited(depth: u32) -> Self {
        Self::minimax_complete().with_depth_limit(depth)
    }

    /// Complete Alpha-Beta.
    #[must_use]
    pub fn alpha_beta_complete() -> Self {
        Self::default()
    }

    /// Depth-limited Alpha-Beta.
    #[must_use]
    pub fn alpha_beta_limited(depth: u32) -> Self {
        Self::default().with_depth_limit(depth)
    }

    /// Create a new config with a different strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create a new config with a depth limit.
    #[must_use]
    pub fn with_depth_limit(mut self, depth: u32) -> Self {
        self.depth_limit = Some(depth);
        self
    }

    /// Create a new config that searches to terminal states.
    #[must_use]
    pub fn complete(mut self) -> Self {
        self.depth_limit = None;
        self
    }

    /// True if no depth limit is set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.depth_limit.is_none()
    }

    /// Reject nonsensical configurations before any search starts.
    pub fn validate(&self) -> SearchResult<()> {
        match self.depth_limit {
            Some(0) => Err(SearchError::Config(
                "depth limit must be positive".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Build a config from one of the algorithm names offered by the game
    /// menus: `Minimaxcomplete`, `ABcomplete`, `Minimaxlimited`, `ABlimited`.
    ///
    /// `depth` only applies to the limited variants. Separators and case are
    /// ignored, and `alphabeta` may be spelled out.
    ///
    /// ```
    /// use rust_minimax::search::{SearchConfig, Strategy};
    ///
    /// let config = SearchConfig::from_algorithm("ABlimited", 4).unwrap();
    /// assert_eq!(config.strategy, Strategy::AlphaBeta);
    /// assert_eq!(config.depth_limit, Some(4));
    ///
    /// let config = SearchConfig::from_algorithm("minimax-complete", 4).unwrap();
    /// assert!(config.is_complete());
    /// ```
    pub fn from_algorithm(name: &str, depth: u32) -> SearchResult<Self> {
        let normalized = normalize(name);
        let (strategy, limited) = if let Some(strategy) = normalized.strip_suffix("complete") {
            (strategy, false)
        } else if let Some(strategy) = normalized.strip_suffix("limited") {
            (strategy, true)
        } else {
            return Err(SearchError::Config(format!("unknown algorithm {name:?}")));
        };

        let config = Self::default().with_strategy(strategy.parse()?);
        let config = if limited {
            config.with_depth_limit(depth)
        } else {
            config
        };
        config.validate()?;
        Ok(config)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
