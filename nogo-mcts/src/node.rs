//! Search tree node representation.
//!
//! Each node represents the position reached by playing its incoming
//! placement from the parent. Nodes hold the visit statistics, the RAVE
//! statistics, and the positional prior that the selection score combines.
//! Parent links are not stored; each simulation rebuilds its own path.

use nogo_core::{Color, Placement};

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// The placement that produced this node from its parent; `None` for
    /// the root.
    pub placement: Option<Placement>,

    /// Number of simulations that traversed this node.
    pub visits: u32,

    /// Cumulative playout outcome, always from the engine's perspective.
    pub value_sum: f32,

    /// RAVE sample count, seeded with a virtual prior at creation.
    pub rave_visits: u32,

    /// Cumulative RAVE value, seeded with a virtual prior at creation.
    pub rave_value_sum: f32,

    /// Positional bonus computed once at creation.
    pub prior: f32,

    /// Child handles in placement cell-index order. Empty until expansion.
    pub children: Vec<NodeId>,
}

impl SearchNode {
    /// Create a root node carrying the sentinel placement.
    pub fn new_root() -> Self {
        Self {
            placement: None,
            visits: 0,
            value_sum: 0.0,
            rave_visits: 0,
            rave_value_sum: 0.0,
            prior: 0.0,
            children: Vec::new(),
        }
    }

    /// Create a child node with the configured RAVE virtual priors.
    pub fn new_child(
        placement: Placement,
        prior: f32,
        rave_prior_visits: u32,
        rave_prior_value: f32,
    ) -> Self {
        Self {
            placement: Some(placement),
            visits: 0,
            value_sum: 0.0,
            rave_visits: rave_prior_visits,
            rave_value_sum: rave_prior_value,
            prior,
            children: Vec::new(),
        }
    }

    /// Mean playout value. Zero when unvisited.
    #[inline]
    pub fn mean_value(&self) -> f32 {
        if self.visits == 0 {
            0.0
        } else {
            self.value_sum / self.visits as f32
        }
    }

    /// Mean RAVE value. Well-defined from creation thanks to the virtual
    /// prior samples.
    #[inline]
    pub fn rave_mean(&self) -> f32 {
        debug_assert!(self.rave_visits > 0);
        self.rave_value_sum / self.rave_visits as f32
    }

    /// The color that played this node's incoming placement.
    #[inline]
    pub fn mover(&self) -> Option<Color> {
        self.placement.map(|p| p.color)
    }

    /// Combined selection score:
    /// `(1 - beta) * Q + beta * Q_rave + sqrt(2 ln(total) / visits) + prior`
    /// where `total` is the visit sum over this node and its siblings.
    ///
    /// Callers must route unvisited nodes past this (they are selected
    /// unconditionally before any sibling is scored).
    #[inline]
    pub fn score(&self, total_visits: u32, rave_bias: f32) -> f32 {
        debug_assert!(self.visits > 0);
        let q = self.value_sum / self.visits as f32;
        let q_rave = self.rave_mean();
        let explore = (2.0 * (total_visits as f32).ln() / self.visits as f32).sqrt();
        (1.0 - rave_bias) * q + rave_bias * q_rave + explore + self.prior
    }

    /// Check if this node has been expanded (has children).
    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child(visits: u32, value_sum: f32, rave_visits: u32, rave_value_sum: f32) -> SearchNode {
        let mut node = SearchNode::new_child(Placement::new(0, Color::Black), 0.0, 10, 20.0);
        node.visits = visits;
        node.value_sum = value_sum;
        node.rave_visits = rave_visits;
        node.rave_value_sum = rave_value_sum;
        node
    }

    #[test]
    fn test_new_root() {
        let node = SearchNode::new_root();
        assert_eq!(node.placement, None);
        assert_eq!(node.visits, 0);
        assert_eq!(node.mean_value(), 0.0);
        assert!(!node.is_expanded());
    }

    #[test]
    fn test_virtual_rave_prior() {
        let node = SearchNode::new_child(Placement::new(3, Color::White), 0.25, 10, 20.0);
        assert_eq!(node.rave_visits, 10);
        assert!((node.rave_mean() - 2.0).abs() < 1e-6);
        assert!((node.prior - 0.25).abs() < 1e-6);
        assert_eq!(node.mover(), Some(Color::White));
    }

    #[test]
    fn test_mean_value() {
        let mut node = SearchNode::new_root();
        assert!(node.mean_value().abs() < 1e-6);

        node.visits = 4;
        node.value_sum = 2.0;
        assert!((node.mean_value() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_score_terms() {
        let node = child(10, 5.0, 10, 20.0);

        // Q = 0.5, Q_rave = 2.0, explore = sqrt(2 ln 100 / 10), prior = 0.
        let expected = 0.5 * 0.5 + 0.5 * 2.0 + (2.0f32 * 100.0f32.ln() / 10.0).sqrt();
        assert!((node.score(100, 0.5) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_score_monotone_in_value_sums() {
        // Equal visit counts, strictly larger value and RAVE sums.
        let better = child(10, 6.0, 12, 25.0);
        let worse = child(10, 5.0, 12, 24.0);

        assert!(better.score(100, 0.5) >= worse.score(100, 0.5));
    }
}
