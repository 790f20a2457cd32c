//! Leaf evaluation: the heuristic rollout and the mobility differential.
//!
//! Both policies return a single outcome from the engine's perspective. The
//! rollout plays the position to terminal with a liberty-guided move order
//! and scores win/loss; the mobility differential skips the rollout and
//! scores the legal-move imbalance directly.

use nogo_core::{Board, Color};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

/// Leaf evaluation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutPolicy {
    /// Play to terminal with the liberty-bucketed move order; outcome 1.0
    /// if the engine wins, 0.0 otherwise.
    LibertyRollout,

    /// No rollout: `tanh((a - b) / (a + b))` over the legal-placement
    /// counts of engine (`a`) and opponent (`b`), 0.0 when both are stuck.
    MobilityScore,
}

impl PlayoutPolicy {
    /// Evaluate a leaf position. `to_move` is the side to move at the leaf,
    /// `engine` the color the outcome is scored for.
    pub fn evaluate(
        self,
        board: &Board,
        to_move: Color,
        engine: Color,
        rng: &mut ChaCha20Rng,
    ) -> f32 {
        match self {
            PlayoutPolicy::LibertyRollout => rollout(board, to_move, engine, rng),
            PlayoutPolicy::MobilityScore => mobility_score(board, engine),
        }
    }
}

/// Positional prior for a placement whose stone ends up with `liberty`
/// empty orthogonal neighbors: `(4 - liberty) / 8`, favoring contact moves.
#[inline]
pub fn contact_prior(liberty: u8) -> f32 {
    debug_assert!(liberty <= 4);
    (4 - liberty) as f32 / 8.0
}

/// Partition the legal placements for `color` by the placed stone's
/// empty-neighbor count, measured on the board after the placement.
/// Bucket 0 holds liberty 4, then 3, 2, and 1-or-0.
pub fn liberty_buckets(board: &Board, color: Color) -> [Vec<u8>; 4] {
    let mut buckets: [Vec<u8>; 4] = Default::default();
    for cell in board.cells() {
        let mut scratch = *board;
        if scratch.try_place(cell, color).is_legal() {
            let slot = match scratch.liberty(cell) {
                4 => 0,
                3 => 1,
                2 => 2,
                _ => 3,
            };
            buckets[slot].push(cell);
        }
    }
    buckets
}

/// One rollout move for `color`: a uniformly random member of the highest
/// non-empty liberty bucket. `None` when `color` has no legal placement.
fn pick_rollout_move(board: &Board, color: Color, rng: &mut ChaCha20Rng) -> Option<u8> {
    let mut buckets = liberty_buckets(board, color);
    for bucket in buckets.iter_mut() {
        if bucket.is_empty() {
            continue;
        }
        bucket.shuffle(rng);
        return Some(bucket[0]);
    }
    None
}

/// Play alternating moves from `board` until the side to move is stuck;
/// that side loses. Returns 1.0 if the winner is `engine`, else 0.0.
pub fn rollout(board: &Board, to_move: Color, engine: Color, rng: &mut ChaCha20Rng) -> f32 {
    let mut scratch = *board;
    let mut mover = to_move;
    loop {
        match pick_rollout_move(&scratch, mover, rng) {
            Some(cell) => {
                let _legal = scratch.try_place(cell, mover);
                debug_assert!(_legal.is_legal());
            }
            None => break,
        }
        mover = mover.opponent();
    }

    let winner = mover.opponent();
    if winner == engine {
        1.0
    } else {
        0.0
    }
}

/// Legal-move differential of the position from `engine`'s perspective.
pub fn mobility_score(board: &Board, engine: Color) -> f32 {
    let own = board.count_legal(engine) as f32;
    let opp = board.count_legal(engine.opponent()) as f32;
    if own + opp == 0.0 {
        return 0.0;
    }
    ((own - opp) / (own + opp)).tanh()
}
