//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use super::policy::DEFAULT_EXPLORATION;
use crate::fixed::Fixed;

/// UCT search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UctConfig {
    /// Number of search iterations per move (the only bound on runtime).
    pub iterations: u32,

    /// UCT exploration constant, in fixed point (default: sqrt(2)).
    /// Higher values favor exploration over exploitation.
    pub exploration: Fixed,

    /// Random seed for rollouts.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for UctConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            exploration: DEFAULT_EXPLORATION,
            seed: 42,
        }
    }
}

impl UctConfig {
    /// Set the iteration budget.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the exploration constant.
    pub fn with_exploration(mut self, exploration: Fixed) -> Self {
        self.exploration = exploration;
        self
    }

    /// Set the rollout seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
