//! Arena-based search tree.
//!
//! Nodes are stored in a flat `Vec` and referenced by `NodeId` indices.
//! The arena owns every node, so one search's entire tree is freed by a
//! single `reset` or drop; there is no recursive teardown and no way to
//! double-free a node.

use serde::{Deserialize, Serialize};

use super::node::{NodeId, SearchNode};
use crate::core::Player;

/// Arena holding one search call's tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchTree<M> {
    /// All nodes; index 0 is always the root after initialization.
    nodes: Vec<SearchNode<M>>,

    /// The root node ID.
    root: NodeId,
}

impl<M> SearchTree<M> {
    /// Create a new tree with a root for the player about to move.
    pub fn new(root_to_move: Player) -> Self {
        Self::with_capacity(root_to_move, 1024)
    }

    /// Create a tree with a custom initial node capacity.
    pub fn with_capacity(root_to_move: Player, capacity: usize) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(capacity),
            root: NodeId::new(0),
        };
        tree.nodes.push(SearchNode::root(root_to_move));
        tree
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<M> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<M> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode<M>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true after construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Discard every node and start over with a fresh root.
    pub fn reset(&mut self, root_to_move: Player) {
        self.nodes.clear();
        self.nodes.push(SearchNode::root(root_to_move));
        self.root = NodeId::new(0);
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &SearchNode<M> {
        self.get(self.root)
    }

    /// Get the root node mutably.
    pub fn root_node_mut(&mut self) -> &mut SearchNode<M> {
        self.get_mut(self.root)
    }

    /// Iterate over all nodes with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<M>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}
