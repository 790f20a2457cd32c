//! Monte-Carlo Tree Search with RAVE for 9x9 NoGo.
//!
//! The engine runs the classic four-phase loop against a [`nogo_core::Board`]:
//!
//! 1. **Selection**: descend from the retained root by a score combining the
//!    mean playout value, the RAVE (all-moves-as-first) value, UCB1
//!    exploration, and a contact-move prior
//! 2. **Expansion**: enumerate the legal placements for the side to move and
//!    append one child per placement
//! 3. **Playout**: estimate the leaf either by a liberty-guided rollout to
//!    terminal or by the legal-move differential of the position
//! 4. **Backup**: credit every node on the traversed path, plus — through the
//!    RAVE index — every node in the live tree whose incoming placement
//!    occurred on the path
//!
//! Values are scored once, from the engine's perspective; selection takes the
//! maximum at engine nodes and the minimum at opponent nodes instead of
//! negating between levels. The subtree under the move actually played is
//! retained across turns and re-rooted, so consecutive searches reuse work.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nogo_core::{Board, Color};
//! use nogo_mcts::{MctsEngine, SearchConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let config = SearchConfig::default().with_budget(Duration::from_millis(500));
//! let mut engine = MctsEngine::new(Color::Black, config);
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//!
//! let board = Board::new();
//! match engine.select_move(&board, &mut rng) {
//!     Some(placement) => println!("play {:?}", placement),
//!     None => println!("no legal move, resign"),
//! }
//! ```

pub mod config;
pub mod node;
pub mod playout;
pub mod rave;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::SearchConfig;
pub use node::{NodeId, SearchNode};
pub use playout::{contact_prior, liberty_buckets, mobility_score, rollout, PlayoutPolicy};
pub use rave::RaveIndex;
pub use search::MctsEngine;
pub use tree::{SearchTree, TreeStats};
