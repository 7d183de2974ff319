//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Iterations performed.
    pub iterations: u32,

    /// Rollouts (random playouts to a terminal position).
    pub rollouts: u32,

    /// Nodes created by expansion.
    pub nodes_created: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Iterations per second over the last search.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            f64::from(self.iterations) / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
