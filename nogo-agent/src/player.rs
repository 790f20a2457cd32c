//! The NoGo player: construction-time validation, the random baseline, and
//! the MCTS path.

use std::time::Duration;

use nogo_core::{Board, Color, Placement};
use nogo_mcts::{MctsEngine, PlayoutPolicy, SearchConfig};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::options::Options;

/// Characters a display name must not contain (they would break the match
/// protocol framing around the name).
const FORBIDDEN_NAME_CHARS: &[char] = &['[', ']', '(', ')', ':', ';', ' '];

/// Errors reported at player construction. All of them are fatal: an agent
/// with bad options never comes into existence.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("missing required option `{0}`")]
    MissingOption(&'static str),

    #[error("invalid name `{0}`")]
    InvalidName(String),

    #[error("invalid role `{0}`")]
    InvalidRole(String),

    #[error("invalid value `{value}` for option `{key}`")]
    InvalidValue { key: &'static str, value: String },
}

/// Which move-selection strategy the player runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ploy {
    /// Shuffle all cells and play the first legal one.
    Random,
    /// Full tree search with a retained root.
    Mcts,
}

/// A NoGo player for one side of the board.
pub struct Player {
    name: String,
    color: Color,
    ploy: Ploy,
    rng: ChaCha20Rng,
    engine: Option<MctsEngine>,
}

impl Player {
    /// Build a player from an option string.
    ///
    /// Recognized keys: `role` (required, `black`/`white`), `name`
    /// (default `random`), `seed` (32-bit integer; entropy when absent),
    /// `ploy` (`mcts` for the tree search, anything else for the random
    /// baseline), `T` (per-move budget in milliseconds, required for MCTS),
    /// and `testId`/`Test` (playout variant: `0` is the liberty rollout,
    /// any other value the mobility differential).
    pub fn new(args: &str) -> Result<Self, AgentError> {
        let opts = Options::parse(args);

        let name = opts.get_or("name", "random").to_string();
        if name.contains(FORBIDDEN_NAME_CHARS) {
            return Err(AgentError::InvalidName(name));
        }

        let role = opts.get("role").ok_or(AgentError::MissingOption("role"))?;
        let color = match role {
            "black" => Color::Black,
            "white" => Color::White,
            other => return Err(AgentError::InvalidRole(other.to_string())),
        };

        let rng = match opts.get("seed") {
            Some(raw) => {
                let seed: i32 = raw.parse().map_err(|_| AgentError::InvalidValue {
                    key: "seed",
                    value: raw.to_string(),
                })?;
                ChaCha20Rng::seed_from_u64(seed as u32 as u64)
            }
            None => ChaCha20Rng::from_entropy(),
        };

        let ploy = if opts.get("ploy") == Some("mcts") {
            Ploy::Mcts
        } else {
            Ploy::Random
        };

        let engine = match ploy {
            Ploy::Random => None,
            Ploy::Mcts => {
                let raw = opts.get("T").ok_or(AgentError::MissingOption("T"))?;
                let millis: u64 = raw.parse().map_err(|_| AgentError::InvalidValue {
                    key: "T",
                    value: raw.to_string(),
                })?;

                let raw_test = opts.get("testId").or_else(|| opts.get("Test"));
                let variant: u32 = match raw_test {
                    Some(raw) => raw.parse().map_err(|_| AgentError::InvalidValue {
                        key: "testId",
                        value: raw.to_string(),
                    })?,
                    None => 0,
                };
                let playout = if variant == 0 {
                    PlayoutPolicy::LibertyRollout
                } else {
                    PlayoutPolicy::MobilityScore
                };

                let config = SearchConfig::default()
                    .with_budget(Duration::from_millis(millis))
                    .with_playout(playout);
                Some(MctsEngine::new(color, config))
            }
        };

        info!(name = %name, role, ?ploy, "agent ready");
        Ok(Self {
            name,
            color,
            ploy,
            rng,
            engine,
        })
    }

    /// Replace the search configuration, keeping role and seed. A test and
    /// tuning hook; no-op for the random baseline.
    pub fn with_search_config(mut self, config: SearchConfig) -> Self {
        if self.ploy == Ploy::Mcts {
            self.engine = Some(MctsEngine::new(self.color, config));
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn ploy(&self) -> Ploy {
        self.ploy
    }

    /// The retained search engine, when the ploy is MCTS.
    pub fn engine(&self) -> Option<&MctsEngine> {
        self.engine.as_ref()
    }

    /// Start a fresh episode: the retained tree is dropped.
    pub fn open_episode(&mut self, _flag: &str) {
        if let Some(engine) = &mut self.engine {
            engine.reset();
        }
    }

    /// End the episode: tree-owned memory is released.
    pub fn close_episode(&mut self, _flag: &str) {
        if let Some(engine) = &mut self.engine {
            engine.reset();
        }
    }

    /// Choose the next placement on `board`, or `None` when no legal
    /// placement exists (resignation).
    pub fn take_action(&mut self, board: &Board) -> Option<Placement> {
        match self.ploy {
            Ploy::Random => self.random_action(board),
            Ploy::Mcts => {
                let engine = self.engine.as_mut()?;
                let placement = engine.select_move(board, &mut self.rng);
                debug!(?placement, "mcts action");
                placement
            }
        }
    }

    fn random_action(&mut self, board: &Board) -> Option<Placement> {
        let mut cells: Vec<u8> = board.cells().collect();
        cells.shuffle(&mut self.rng);
        for cell in cells {
            let mut scratch = *board;
            if scratch.try_place(cell, self.color).is_legal() {
                return Some(Placement::new(cell, self.color));
            }
        }
        None
    }
}
