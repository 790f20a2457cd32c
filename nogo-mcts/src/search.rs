//! The search driver: the simulate loop, root tracking, and move choice.

use std::time::Instant;

use nogo_core::{Board, Color, Placement};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::node::NodeId;
use crate::playout::contact_prior;
use crate::tree::{SearchTree, TreeStats};

/// A NoGo move-selection engine with a tree retained across moves.
///
/// The engine plays one fixed color. Each [`select_move`] call first
/// advances the retained root to the observed board (reusing the subtree
/// under the opponent's reply when it was explored), runs simulations until
/// the iteration cap or the wall-clock budget is hit, plays the most-visited
/// root child, and advances the root once more so the next call starts from
/// the chosen subtree.
///
/// [`select_move`]: MctsEngine::select_move
pub struct MctsEngine {
    color: Color,
    config: SearchConfig,
    tree: SearchTree,
}

impl MctsEngine {
    pub fn new(color: Color, config: SearchConfig) -> Self {
        Self {
            color,
            config,
            tree: SearchTree::new(),
        }
    }

    /// The color this engine plays.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Tree statistics of the retained tree.
    pub fn stats(&self) -> TreeStats {
        self.tree.stats()
    }

    /// Drop the retained tree and start from a fresh empty root. Backs the
    /// episode open/close hooks of the agent layer.
    pub fn reset(&mut self) {
        self.tree.reset();
    }

    /// Advance the retained root to match an observed board.
    ///
    /// The root child whose placement is now occupied on `board` is the
    /// opponent's last move; its subtree becomes the new tree. When no
    /// child matches (first move of a game, an unexplored reply, or an
    /// inconsistent board) the whole tree is discarded for a fresh root.
    /// Called automatically at the start of [`select_move`].
    ///
    /// [`select_move`]: MctsEngine::select_move
    pub fn sync_root(&mut self, board: &Board) {
        let root = self.tree.root();
        let matched = self
            .tree
            .get(root)
            .children
            .iter()
            .copied()
            .find(|&child| match self.tree.get(child).placement {
                Some(p) => board.occupant(p.cell) == Some(p.color),
                None => false,
            });

        match matched {
            Some(child) => self.tree.advance_root(child),
            None => {
                if self.tree.len() > 1 {
                    debug!("no root child matches the board, rebuilding tree");
                }
                self.tree.reset();
            }
        }
    }

    /// Pick the next placement for the engine's color on `board`.
    ///
    /// Returns `None` when the engine has no legal placement, which the
    /// surrounding match driver reads as resignation.
    pub fn select_move(&mut self, board: &Board, rng: &mut ChaCha20Rng) -> Option<Placement> {
        self.sync_root(board);

        let root = self.tree.root();
        self.expand(root, board, self.color);
        if !self.tree.get(root).is_expanded() {
            debug!("no legal placement at root");
            return None;
        }

        let started = Instant::now();
        let deadline = started + self.config.budget;
        let mut simulations = 0u32;
        while simulations < self.config.max_simulations {
            self.simulate(board, rng);
            simulations += 1;
            if Instant::now() >= deadline {
                break;
            }
        }

        let root_node = self.tree.get(self.tree.root());
        let mut best: Option<(NodeId, u32)> = None;
        for &child in &root_node.children {
            let visits = self.tree.get(child).visits;
            if best.map_or(true, |(_, best_visits)| visits > best_visits) {
                best = Some((child, visits));
            }
        }

        match best {
            Some((chosen, visits)) if visits > 0 => {
                let placement = self.tree.get(chosen).placement;
                debug!(
                    simulations,
                    visits,
                    nodes = self.tree.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "search complete"
                );
                self.tree.advance_root(chosen);
                placement
            }
            _ => {
                debug!(simulations, "no simulated root child");
                None
            }
        }
    }

    /// One simulation: descend by score, expand the leaf, evaluate it, and
    /// back the outcome up the path and through the RAVE index.
    fn simulate(&mut self, board: &Board, rng: &mut ChaCha20Rng) {
        let mut scratch = *board;
        let mut current = self.tree.root();
        let mut path = vec![current];
        let mut mover = self.color;

        while self.tree.get(current).is_expanded() {
            let child = match self
                .tree
                .select_child(current, self.color, self.config.rave_bias)
            {
                Some(child) => child,
                None => break,
            };
            if let Some(p) = self.tree.get(child).placement {
                let _legal = scratch.try_place(p.cell, p.color);
                debug_assert!(_legal.is_legal());
            }
            path.push(child);
            current = child;
            mover = mover.opponent();
        }

        self.expand(current, &scratch, mover);
        let value = self
            .config
            .playout
            .evaluate(&scratch, mover, self.color, rng);
        self.tree.backpropagate(&path, value);

        trace!(depth = path.len(), value, "simulation complete");
    }

    /// Expand a leaf: one child per legal placement for `mover`, in cell
    /// order, each with the contact prior of its resulting liberty count.
    /// Idempotent on already-expanded nodes.
    fn expand(&mut self, id: NodeId, board: &Board, mover: Color) {
        if self.tree.get(id).is_expanded() {
            return;
        }
        for cell in board.cells() {
            let mut scratch = *board;
            if scratch.try_place(cell, mover).is_legal() {
                let prior = contact_prior(scratch.liberty(cell));
                self.tree.add_child(
                    id,
                    Placement::new(cell, mover),
                    prior,
                    self.config.rave_prior_visits,
                    self.config.rave_prior_value,
                );
            }
        }
    }
}
