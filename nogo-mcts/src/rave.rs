//! The RAVE (all-moves-as-first) index.
//!
//! Maps a placement identity to every live node whose incoming placement is
//! that move, so a single playout can credit all of them during backup. The
//! index tracks the arena exactly: entries are added when nodes are created
//! and the whole table is rebuilt when root advancement compacts the arena.

use std::collections::HashMap;

use nogo_core::Placement;

use crate::node::NodeId;

/// Placement-keyed index over the live tree.
#[derive(Debug, Default)]
pub struct RaveIndex {
    entries: HashMap<Placement, Vec<NodeId>>,
}

impl RaveIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly created node under its incoming placement.
    pub fn insert(&mut self, placement: Placement, id: NodeId) {
        self.entries.entry(placement).or_default().push(id);
    }

    /// All live nodes whose incoming placement is `placement`, in creation
    /// order. Empty if the move never occurred in the tree.
    pub fn nodes(&self, placement: Placement) -> &[NodeId] {
        self.entries.get(&placement).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct placements with at least one entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. Used when the tree is discarded or rebuilt.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nogo_core::Color;

    #[test]
    fn test_insert_and_lookup() {
        let mut index = RaveIndex::new();
        let p = Placement::new(12, Color::Black);

        assert!(index.nodes(p).is_empty());

        index.insert(p, NodeId(1));
        index.insert(p, NodeId(5));
        assert_eq!(index.nodes(p), &[NodeId(1), NodeId(5)]);

        // Same cell, other color is a different identity.
        assert!(index.nodes(Placement::new(12, Color::White)).is_empty());
    }

    #[test]
    fn test_clear() {
        let mut index = RaveIndex::new();
        index.insert(Placement::new(0, Color::Black), NodeId(1));
        index.insert(Placement::new(1, Color::White), NodeId(2));
        assert_eq!(index.len(), 2);

        index.clear();
        assert!(index.is_empty());
        assert!(index.nodes(Placement::new(0, Color::Black)).is_empty());
    }
}
