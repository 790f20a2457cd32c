//! The search tree: arena storage, selection, backup, and root advancement.
//!
//! Nodes live in a contiguous arena and reference each other through
//! [`NodeId`] handles; the root is always index 0. The RAVE index is kept in
//! lockstep with the arena: every allocation registers the new node, and
//! root advancement rebuilds the table from the surviving nodes.

use nogo_core::{Color, Placement};

use crate::node::{NodeId, SearchNode};
use crate::rave::RaveIndex;

/// Search tree with arena-based node storage and the RAVE side table.
#[derive(Debug)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
    root: NodeId,
    rave: RaveIndex,
}

impl SearchTree {
    /// Create a tree holding a single fresh root.
    pub fn new() -> Self {
        Self {
            nodes: vec![SearchNode::new_root()],
            root: NodeId(0),
            rave: RaveIndex::new(),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }

    /// Total number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The RAVE index (read access for backup targets and tests).
    #[inline]
    pub fn rave(&self) -> &RaveIndex {
        &self.rave
    }

    /// Allocate a child of `parent` and register it in the RAVE index.
    /// Returns the new child's NodeId.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        placement: Placement,
        prior: f32,
        rave_prior_visits: u32,
        rave_prior_value: f32,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SearchNode::new_child(
            placement,
            prior,
            rave_prior_visits,
            rave_prior_value,
        ));
        self.get_mut(parent).children.push(id);
        self.rave.insert(placement, id);
        id
    }

    /// Pick a child of `parent` for descent.
    ///
    /// The first unvisited child (in child order) is taken unconditionally.
    /// Otherwise children are scored with [`SearchNode::score`] and the
    /// extreme is returned: the maximum when the children's mover is the
    /// engine (`own`), the minimum when it is the opponent. Values are
    /// engine-perspective throughout, so the min at opponent nodes replaces
    /// level-wise negation. Ties keep the earliest child.
    pub fn select_child(&self, parent: NodeId, own: Color, rave_bias: f32) -> Option<NodeId> {
        let children = &self.get(parent).children;
        if children.is_empty() {
            return None;
        }

        let total: u32 = children.iter().map(|&c| self.get(c).visits).sum();
        let maximize = self
            .get(children[0])
            .mover()
            .map_or(true, |mover| mover == own);

        let mut best: Option<(NodeId, f32)> = None;
        for &child in children {
            let node = self.get(child);
            if node.visits == 0 {
                return Some(child);
            }
            let score = node.score(total, rave_bias);
            let better = match best {
                None => true,
                Some((_, best_score)) => {
                    if maximize {
                        score > best_score
                    } else {
                        score < best_score
                    }
                }
            };
            if better {
                best = Some((child, score));
            }
        }
        best.map(|(child, _)| child)
    }

    /// Back up one completed simulation.
    ///
    /// Every node on `path` except the root gains one visit and the outcome
    /// `value` (never negated between levels). Every node in the live tree
    /// sharing a placement with any non-root path node gains one RAVE visit
    /// and the same outcome.
    pub fn backpropagate(&mut self, path: &[NodeId], value: f32) {
        for &id in path.iter().skip(1) {
            let node = &mut self.nodes[id.index()];
            node.visits += 1;
            node.value_sum += value;
        }

        for &id in path.iter().skip(1) {
            let placement = match self.nodes[id.index()].placement {
                Some(p) => p,
                None => continue,
            };
            for &shared in self.rave.nodes(placement) {
                let node = &mut self.nodes[shared.index()];
                node.rave_visits += 1;
                node.rave_value_sum += value;
            }
        }
    }

    /// Make `new_root` (a child of the current root) the root, discarding
    /// every node not reachable from it and every RAVE entry pointing into
    /// the discarded part.
    pub fn advance_root(&mut self, new_root: NodeId) {
        debug_assert!(self.get(self.root).children.contains(&new_root));

        // Preorder walk of the kept subtree, remapping handles into a fresh
        // arena with the kept child at index 0.
        const UNMAPPED: u32 = u32::MAX;
        let mut map = vec![UNMAPPED; self.nodes.len()];
        let mut kept: Vec<SearchNode> = Vec::new();
        let mut stack = vec![new_root];

        while let Some(id) = stack.pop() {
            if map[id.index()] != UNMAPPED {
                continue;
            }
            map[id.index()] = kept.len() as u32;
            kept.push(self.nodes[id.index()].clone());
            for &child in &self.nodes[id.index()].children {
                stack.push(child);
            }
        }

        for node in &mut kept {
            for child in &mut node.children {
                *child = NodeId(map[child.index()]);
            }
        }

        self.nodes = kept;
        self.root = NodeId(0);

        self.rave.clear();
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(placement) = node.placement {
                self.rave.insert(placement, NodeId(i as u32));
            }
        }
    }

    /// Discard the whole tree and start over with a fresh empty root.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.nodes.push(SearchNode::new_root());
        self.root = NodeId(0);
        self.rave.clear();
    }

    /// Number of nodes in the subtree rooted at `id` (including `id`).
    pub fn subtree_size(&self, id: NodeId) -> usize {
        let mut count = 0;
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            count += 1;
            stack.extend(self.get(cur).children.iter().copied());
        }
        count
    }

    /// Get statistics about the tree for logging and tests.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visits,
            root_value: root.mean_value(),
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, id: NodeId, depth: u32) -> u32 {
        let node = self.get(id);
        node.children
            .iter()
            .map(|&child| self.compute_max_depth(child, depth + 1))
            .max()
            .unwrap_or(depth)
    }
}

impl Default for SearchTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about a search tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_value: f32,
    pub max_depth: u32,
}
