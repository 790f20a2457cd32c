//! NoGo playing agents.
//!
//! A [`Player`] is built from a whitespace-separated `key=value` option
//! string (`role=black ploy=mcts T=1000 seed=42`), validates its options at
//! construction, and then answers [`Player::take_action`] with either a
//! legal placement or `None` when it has no legal move (resignation). The
//! match-driving shell that shuttles moves over stdin/stdout lives outside
//! this crate.

pub mod options;
pub mod player;

pub use options::Options;
pub use player::{AgentError, Player, Ploy};
