//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Player, SearchError, SearchResult};
use crate::game::GameAdapter;
use crate::search::SearchConfig;

use super::agent::{Agent, RandomAgent, SearchAgent};

/// How one side of a match picks its moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentKind {
    /// Search with the given configuration.
    Search(SearchConfig),
    /// Uniformly random legal moves.
    Random { seed: u64 },
}

impl AgentKind {
    /// Parse an opponent menu entry: one of the four algorithm names, or
    /// `"Random"`.
    ///
    /// ```
    /// use rust_minimax::play::AgentKind;
    /// use rust_minimax::search::SearchConfig;
    ///
    /// assert_eq!(
    ///     AgentKind::from_menu("ABlimited", 4, 0).unwrap(),
    ///     AgentKind::Search(SearchConfig::alpha_beta_limited(4)),
    /// );
    /// assert_eq!(AgentKind::from_menu("Random", 4, 9).unwrap(), AgentKind::Random { seed: 9 });
    /// ```
    pub fn from_menu(name: &str, depth: u32, seed: u64) -> SearchResult<Self> {
        if name.trim().eq_ignore_ascii_case("random") {
            return Ok(AgentKind::Random { seed });
        }
        SearchConfig::from_algorithm(name, depth).map(AgentKind::Search)
    }

    /// Build the agent this kind describes.
    pub fn build(&self) -> ConfiguredAgent {
        match *self {
            AgentKind::Search(config) => ConfiguredAgent::Search(SearchAgent::new(config)),
            AgentKind::Random { seed } => ConfiguredAgent::Random(RandomAgent::new(seed)),
        }
    }

    fn validate(&self) -> SearchResult<()> {
        match self {
            AgentKind::Search(config) => config.validate(),
            AgentKind::Random { .. } => Ok(()),
        }
    }
}

/// An agent built from an [`AgentKind`].
#[derive(Clone, Debug)]
pub enum ConfiguredAgent {
    Search(SearchAgent),
    Random(RandomAgent),
}

impl<G: GameAdapter> Agent<G> for ConfiguredAgent {
    fn choose(&mut self, game: &G, state: &G::State, player: Player) -> SearchResult<G::Move> {
        match self {
            ConfiguredAgent::Search(agent) => agent.choose(game, state, player),
            ConfiguredAgent::Random(agent) => agent.choose(game, state, player),
        }
    }

    fn name(&self) -> String {
        match self {
            ConfiguredAgent::Search(agent) => Agent::<G>::name(agent),
            ConfiguredAgent::Random(agent) => Agent::<G>::name(agent),
        }
    }
}

/// Who moves first in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstMover {
    /// Always the given role.
    Fixed(Player),
    /// A fair coin flip from a seeded generator.
    Random { seed: u64 },
}

impl FirstMover {
    /// The role that moves first. The same seed always gives the same role.
    ///
    /// ```
    /// use rust_minimax::core::Player;
    /// use rust_minimax::play::FirstMover;
    ///
    /// assert_eq!(FirstMover::Fixed(Player::Minimizing).resolve(), Player::Minimizing);
    /// let coin = FirstMover::Random { seed: 17 };
    /// assert_eq!(coin.resolve(), coin.resolve());
    /// ```
    pub fn resolve(&self) -> Player {
        match *self {
            FirstMover::Fixed(player) => player,
            FirstMover::Random { seed } => {
                if GameRng::new(seed).gen_bool(0.5) {
                    Player::Maximizing
                } else {
                    Player::Minimizing
                }
            }
        }
    }
}

impl From<Player> for FirstMover {
    fn from(player: Player) -> Self {
        FirstMover::Fixed(player)
    }
}

/// Configuration for a whole match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Agent playing the maximizing role.
    pub maximizer: AgentKind,

    /// Agent playing the minimizing role.
    pub minimizer: AgentKind,

    /// Role that moves first, fixed or drawn at match setup.
    pub first: FirstMover,

    /// Stop after this many plies even if the game is not over.
    pub max_plies: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            maximizer: AgentKind::Search(SearchConfig::default()),
            minimizer: AgentKind::Random { seed: 0 },
            first: FirstMover::Fixed(Player::Maximizing),
            max_plies: 500,
        }
    }
}

impl MatchConfig {
    /// Create a new match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximizing agent.
    pub fn with_maximizer(mut self, kind: AgentKind) -> Self {
        self.maximizer = kind;
        self
    }

    /// Set the minimizing agent.
    pub fn with_minimizer(mut self, kind: AgentKind) -> Self {
        self.minimizer = kind;
        self
    }

    /// Set who moves first.
    pub fn with_first(mut self, first: impl Into<FirstMover>) -> Self {
        self.first = first.into();
        self
    }

    /// Pick the first mover with a seeded coin flip.
    pub fn with_random_first(mut self, seed: u64) -> Self {
        self.first = FirstMover::Random { seed };
        self
    }

    /// The role `run_match` starts with. Games whose root state records the
    /// player to move should build it from this.
    pub fn first_mover(&self) -> Player {
        self.first.resolve()
    }

    /// Set the ply limit.
    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }

    /// Agent kind for `player`.
    pub fn agent_for(&self, player: Player) -> &AgentKind {
        match player {
            Player::Maximizing => &self.maximizer,
            Player::Minimizing => &self.minimizer,
        }
    }

    /// Check both agents and the ply limit.
    pub fn validate(&self) -> SearchResult<()> {
        for player in Player::both() {
            self.agent_for(player).validate().map_err(|err| match err {
                SearchError::Config(reason) => SearchError::Config(format!("{player} agent: {reason}")),
                other => other,
            })?;
        }
        if self.max_plies == 0 {
            return Err(SearchError::Config("max_plies must be at least 1".into()));
        }
        Ok(())
    }
}
