//! Core UCT search loop.
//!
//! One `select_move` call owns one tree: the root is seeded for the player
//! about to move, a fixed iteration budget is spent walking and growing the
//! tree, and the most-visited root child is the answer. The tree never
//! outlives the call that built it.

use std::time::Instant;

use thiserror::Error;

use crate::core::{Player, SearchRng};
use crate::fixed::Fixed;
use crate::rules::BoardRules;

use super::config::UctConfig;
use super::node::{NodeId, SearchNode};
use super::policy::uct_score;
use super::stats::SearchStats;
use super::tree::SearchTree;

/// The one checked failure mode of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The position is already decided or the grid is full; there is
    /// nothing to search.
    #[error("no move available: the position is terminal or has no legal moves")]
    NoMoveAvailable,
}

/// UCT move-selection engine, generic over the game's rules.
///
/// Owns the search tree, configuration, and RNG. Single-threaded and
/// synchronous: `select_move` runs its whole budget and returns; no
/// cancellation, no partial results.
pub struct UctSearch<R: BoardRules> {
    /// The game rules (board oracle).
    rules: R,

    /// Search configuration.
    config: UctConfig,

    /// The search tree, rebuilt from scratch every call.
    tree: SearchTree<R::Move>,

    /// RNG for rollouts; forked once per rollout.
    rng: SearchRng,

    /// Statistics for the most recent search.
    stats: SearchStats,
}

impl<R: BoardRules> UctSearch<R> {
    /// Create a new search engine.
    pub fn new(rules: R, config: UctConfig) -> Self {
        let rng = SearchRng::new(config.seed);
        Self {
            rules,
            config,
            tree: SearchTree::new(Player::X),
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Pick the strongest move for `to_move` on `board`.
    ///
    /// Runs exactly `config.iterations` iterations of
    /// select/expand/simulate/backpropagate, then answers the most-visited
    /// root child (robustness, not exploitation value), ties broken by
    /// creation order. Positions with a single legal move short-circuit.
    ///
    /// The caller's board is never mutated; every iteration replays moves
    /// on a private clone.
    ///
    /// # Errors
    ///
    /// `SearchError::NoMoveAvailable` if the position is already terminal
    /// or no legal moves remain.
    pub fn select_move(
        &mut self,
        board: &R::Board,
        to_move: Player,
    ) -> Result<R::Move, SearchError> {
        let start = Instant::now();
        self.stats.reset();
        self.tree.reset(to_move);

        if self.rules.outcome(board).is_some() {
            return Err(SearchError::NoMoveAvailable);
        }
        let moves = self.rules.legal_moves(board);
        let Some(&first) = moves.first() else {
            return Err(SearchError::NoMoveAvailable);
        };
        if moves.len() == 1 {
            // Forced move; no budget needed to discriminate.
            return Ok(first);
        }

        for _ in 0..self.config.iterations {
            let mut scratch = board.clone();
            self.iteration(&mut scratch);
            self.stats.iterations += 1;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        // Most-visited root child; strict comparison keeps the earliest
        // child on ties. A budget too small to expand the root falls back
        // to the first legal move.
        let root = self.tree.root_node();
        let mut best: Option<(u32, R::Move)> = None;
        for &child_id in &root.children {
            let child = self.tree.get(child_id);
            let Some(mv) = child.mv else { continue };
            match best {
                Some((visits, _)) if child.visits <= visits => {}
                _ => best = Some((child.visits, mv)),
            }
        }

        Ok(best.map_or(first, |(_, mv)| mv))
    }

    /// One iteration: walk from the root until an outcome is determined,
    /// then backpropagate it.
    fn iteration(&mut self, board: &mut R::Board) {
        let mut current = self.tree.root();

        loop {
            // Terminal positions backpropagate immediately; the score is
            // relative to the player who just moved into this node.
            if let Some(outcome) = self.rules.outcome(board) {
                let just_moved = self.tree.get(current).to_move.other();
                self.backpropagate(current, outcome.score_for(just_moved));
                return;
            }

            // Never-simulated nodes get a rollout instead of an expansion.
            if self.tree.get(current).visits == 0 {
                let to_move = self.tree.get(current).to_move;
                let score = self.rollout(board, to_move);
                self.stats.rollouts += 1;
                self.backpropagate(current, score);
                return;
            }

            if !self.tree.get(current).is_expanded() {
                self.expand(current, board);
            }

            let Some((next, mv)) = self.select_child(current) else {
                // Non-terminal position with zero legal moves; the rules
                // could not classify it, so score it as a draw.
                self.backpropagate(current, Fixed::HALF);
                return;
            };

            let mover = self.tree.get(current).to_move;
            self.rules.apply_move(board, mv, mover);
            current = next;
        }
    }

    /// Create one child per legal move, all at once, in enumeration order.
    fn expand(&mut self, id: NodeId, board: &R::Board) {
        let to_move = self.tree.get(id).to_move;

        for mv in self.rules.legal_moves(board) {
            let child_id = self.tree.alloc(SearchNode::new(mv, to_move.other(), id));
            self.tree.get_mut(id).children.push(child_id);
            self.stats.nodes_created += 1;
        }
    }

    /// Pick the child with the highest UCT score.
    ///
    /// Strict-greater comparison: the earliest-created child wins ties,
    /// and unvisited children (scored as infinity) are taken in creation
    /// order before any visited sibling is revisited.
    fn select_child(&self, id: NodeId) -> Option<(NodeId, R::Move)> {
        let node = self.tree.get(id);
        let mut best: Option<(NodeId, R::Move)> = None;
        let mut best_score = Fixed::ZERO;

        for &child_id in &node.children {
            let child = self.tree.get(child_id);
            let Some(mv) = child.mv else { continue };
            let score = uct_score(node.visits, child.visits, child.score, self.config.exploration);
            if best.is_none() || score > best_score {
                best = Some((child_id, mv));
                best_score = score;
            }
        }

        best
    }

    /// Play uniformly-random legal moves until a terminal position.
    ///
    /// The returned score is relative to `first_to_move`, the player who
    /// starts the rollout. Exhausting all legal moves without a terminal
    /// classification scores a draw; that cannot happen under a correct
    /// rules implementation on a finite board.
    fn rollout(&mut self, board: &mut R::Board, first_to_move: Player) -> Fixed {
        let mut rng = self.rng.fork();
        let mut current = first_to_move;

        loop {
            let moves = self.rules.legal_moves(board);
            let Some(&mv) = rng.choose(&moves) else {
                return Fixed::HALF;
            };
            self.rules.apply_move(board, mv, current);
            if let Some(outcome) = self.rules.outcome(board) {
                return outcome.score_for(first_to_move);
            }
            current = current.other();
        }
    }

    /// Walk from `from` up to the root, counting the visit and adding the
    /// score at every node; the score flips perspective each ply.
    fn backpropagate(&mut self, from: NodeId, score: Fixed) {
        let mut current = from;
        let mut score = score;

        loop {
            let node = self.tree.get_mut(current);
            node.visits += 1;
            node.score = Fixed(node.score.0.wrapping_add(score.0));
            score = Fixed(Fixed::ONE.0 - score.0);

            if node.parent.is_none() {
                break;
            }
            current = node.parent;
        }
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The most recent search tree.
    #[must_use]
    pub fn tree(&self) -> &SearchTree<R::Move> {
        &self.tree
    }

    /// The search configuration.
    #[must_use]
    pub fn config(&self) -> &UctConfig {
        &self.config
    }

    /// The game rules.
    pub fn rules(&self) -> &R {
        &self.rules
    }
}
