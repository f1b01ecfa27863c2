//! Fluent construction of a [`RollingEngine`].

use crate::utils::default_block_size;
use crate::{RollingEngine, RollingProblem};

pub struct RollingEngineBuilder<P: RollingProblem> {
    problem: P,
    block_size: Option<usize>,
    checkpoints: Option<usize>,
}

impl<P: RollingProblem> RollingEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            block_size: None,
            checkpoints: None,
        }
    }

    /// Fix the number of layers per block.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Ask for roughly `count` checkpoints after layer 0.
    ///
    /// Ignored when an explicit block size is set.
    pub fn with_checkpoint_count(mut self, count: usize) -> Self {
        self.checkpoints = Some(count);
        self
    }

    pub fn build(self) -> RollingEngine<P> {
        let t = self.problem.num_layers().max(1);
        let b = match (self.block_size, self.checkpoints) {
            (Some(b), _) => b,
            (None, Some(count)) => t.div_ceil(count.max(1)).max(1),
            (None, None) => default_block_size(t).max(1),
        };
        RollingEngine::with_block_size(self.problem, b)
    }
}
