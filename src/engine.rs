//! Generic rolling DP engine.
//!
//! The engine owns a problem instance, creates its frontier, applies
//! `forward_step` for every layer in order and hands the final frontier back
//! to the problem for extraction. Layers are walked in blocks of
//! `block_size`; blocks only matter for tracing spans and for the optional
//! checkpoints, never for the result.
//!
//! The engine is completely generic over implementations of [`RollingProblem`].

use crate::blocks::Checkpoint;
use crate::traits::RollingProblem;
use crate::utils::default_block_size;

/// Rolling DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use rolling_dp::{problems::grid_paths::GridPaths, RollingEngine};
///
/// let problem = GridPaths::new(3, 7).unwrap();
/// let engine = RollingEngine::new(problem);
/// assert_eq!(engine.run(), Ok(28));
/// ```
pub struct RollingEngine<P: RollingProblem> {
    problem: P,
    block_size: usize,
}

impl<P: RollingProblem> RollingEngine<P> {
    /// Create a new engine with a heuristic block size (≈ √T).
    pub fn new(problem: P) -> Self {
        let t = problem.num_layers().max(1);
        let b = default_block_size(t).max(1);
        Self::with_block_size(problem, b)
    }

    /// Create a new engine with an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(problem: P, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            problem,
            block_size,
        }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Give the problem back to the caller.
    pub fn into_problem(self) -> P {
        self.problem
    }

    /// Return the configured block size.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Run every layer and return the frontier at layer T.
    pub fn final_frontier(&self) -> Result<P::Frontier, P::Error> {
        self.sweep(|_, _| {})
    }

    /// Run the DP and extract its answer.
    pub fn run(&self) -> Result<P::Output, P::Error> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "rolling_run",
            layers = self.problem.num_layers(),
            block_size = self.block_size
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let frontier = self.final_frontier()?;
        Ok(self.problem.extract(&frontier))
    }

    /// Run the DP and additionally return a checkpoint at layer 0 and at the
    /// end of every block.
    ///
    /// The last checkpoint always sits at layer T, so it holds the same
    /// frontier the answer was extracted from.
    ///
    /// Each checkpoint is a full clone of the frontier. That suits narrow
    /// frontiers such as a grid row; for frontiers that grow with the input
    /// (the word-break prefix table) use
    /// [`run_with_checkpoint_summaries`](Self::run_with_checkpoint_summaries).
    pub fn run_with_checkpoints(
        &self,
    ) -> Result<(P::Output, Vec<Checkpoint<P::Frontier>>), P::Error> {
        self.run_with_checkpoint_summaries(P::Frontier::clone)
    }

    /// Like [`run_with_checkpoints`](Self::run_with_checkpoints), but stores
    /// `summarize(frontier)` at each checkpoint instead of the frontier.
    pub fn run_with_checkpoint_summaries<S, F>(
        &self,
        mut summarize: F,
    ) -> Result<(P::Output, Vec<Checkpoint<S>>), P::Error>
    where
        F: FnMut(&P::Frontier) -> S,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("rolling_run_with_checkpoints");
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut checkpoints = Vec::with_capacity(self.num_blocks() + 1);
        checkpoints.push(Checkpoint {
            layer: 0,
            frontier: summarize(&self.problem.init_frontier()),
        });
        let frontier = self.sweep(|layer, frontier| {
            checkpoints.push(Checkpoint {
                layer,
                frontier: summarize(frontier),
            });
        })?;
        Ok((self.problem.extract(&frontier), checkpoints))
    }

    fn num_blocks(&self) -> usize {
        let t = self.problem.num_layers();
        if t == 0 {
            0
        } else {
            t.div_ceil(self.block_size)
        }
    }

    /// Walk all blocks, calling `on_block_end(end, frontier)` after each one.
    fn sweep<F>(&self, mut on_block_end: F) -> Result<P::Frontier, P::Error>
    where
        F: FnMut(usize, &P::Frontier),
    {
        let t = self.problem.num_layers();
        let b = self.block_size;
        let mut frontier = self.problem.init_frontier();

        for k in 0..self.num_blocks() {
            let start = k * b;
            let end = ((k + 1) * b).min(t);
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("sweep_block", block = k, start, end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            for layer in start..end {
                self.problem.forward_step(layer, &mut frontier)?;
            }
            on_block_end(end, &frontier);
        }

        Ok(frontier)
    }
}
