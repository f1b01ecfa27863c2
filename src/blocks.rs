//! Checkpoints captured by the engine at block boundaries.
//!
//! A `Checkpoint` is a copy of the frontier as it stood after `layer` steps.

/// Frontier snapshot at a layer boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint<F> {
    /// Number of steps applied before the snapshot was taken.
    pub layer: usize,
    /// Frontier at `layer`.
    pub frontier: F,
}

impl<F> Checkpoint<F> {
    /// True for the snapshot of the initial frontier.
    #[inline]
    pub fn is_initial(&self) -> bool {
        self.layer == 0
    }

    /// Discard the layer index.
    #[inline]
    pub fn into_frontier(self) -> F {
        self.frontier
    }
}
