//! Board rules and placement primitives for 9x9 NoGo.
//!
//! NoGo is a capture-free Go variant: a placement is legal only if, after
//! the stone is placed, neither the placed stone's group nor any adjacent
//! opponent group is left without liberties. The player with no legal
//! placement loses.
//!
//! This crate provides the `Board` value type (legality checking, group
//! liberty scanning, occupancy queries) and the placement primitives
//! (`Color`, `Placement`, cell/coordinate conversion) that the search engine
//! in `nogo-mcts` builds on.

pub mod board;
pub mod placement;

pub use board::{Board, Legality, ParseBoardError, AREA, SIZE};
pub use placement::{coord_of, index_of, Color, Placement};
