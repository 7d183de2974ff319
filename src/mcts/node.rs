//! Search tree nodes.
//!
//! Nodes live in an arena ([`super::tree::SearchTree`]) and refer to each
//! other by `NodeId` index, so parent links cannot dangle and teardown is
//! just dropping the arena.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Player;
use crate::fixed::Fixed;

/// Index into the search tree's node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the search tree.
///
/// `score` accumulates one outcome in `[0, 1]` (scaled) per completed
/// simulation through the node, so `score <= visits` in unit terms; it is
/// only ever incremented, and only by backpropagation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchNode<M> {
    /// The move that produced this node; `None` only for the root.
    pub mv: Option<M>,

    /// Player to move at this node. The move stored in `mv` was made by
    /// `to_move.other()`.
    pub to_move: Player,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Completed simulations through this node.
    pub visits: u32,

    /// Accumulated simulation outcomes, in fixed point.
    pub score: Fixed,

    /// Children, populated all at once on expansion, in legal-move order.
    /// Inline capacity covers a 3x3 grid without spilling to the heap.
    pub children: SmallVec<[NodeId; 9]>,
}

impl<M> SearchNode<M> {
    /// Create a child node for `mv`, played by the opponent of `to_move`.
    pub fn new(mv: M, to_move: Player, parent: NodeId) -> Self {
        Self {
            mv: Some(mv),
            to_move,
            parent,
            visits: 0,
            score: Fixed::ZERO,
            children: SmallVec::new(),
        }
    }

    /// Create a root node for the player about to move.
    pub fn root(to_move: Player) -> Self {
        Self {
            mv: None,
            to_move,
            parent: NodeId::NONE,
            visits: 0,
            score: Fixed::ZERO,
            children: SmallVec::new(),
        }
    }

    /// Whether this node has been expanded.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert!(!id.is_none());
        assert_eq!(format!("{}", id), "NodeId(5)");

        assert!(NodeId::NONE.is_none());
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_root_node() {
        let node: SearchNode<usize> = SearchNode::root(Player::X);

        assert!(node.mv.is_none());
        assert!(node.parent.is_none());
        assert_eq!(node.to_move, Player::X);
        assert_eq!(node.visits, 0);
        assert_eq!(node.score, Fixed::ZERO);
        assert!(!node.is_expanded());
    }

    #[test]
    fn test_child_node() {
        let node: SearchNode<usize> = SearchNode::new(4, Player::O, NodeId::new(0));

        assert_eq!(node.mv, Some(4));
        assert_eq!(node.to_move, Player::O);
        assert_eq!(node.parent, NodeId::new(0));
        assert_eq!(node.visits, 0);
    }

    #[test]
    fn test_serialization() {
        let mut node: SearchNode<usize> = SearchNode::root(Player::O);
        node.visits = 100;
        node.children.push(NodeId::new(1));

        let json = serde_json::to_string(&node).unwrap();
        let back: SearchNode<usize> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.to_move, Player::O);
        assert_eq!(back.visits, 100);
        assert_eq!(back.children.len(), 1);
    }
}
