//! Core trait definitions for rolling dynamic programs.
//!
//! A rolling DP keeps a single frontier alive for the whole computation and
//! advances it one layer at a time, in place. To drive a recurrence with
//! [`RollingEngine`](crate::engine::RollingEngine), implement
//! [`RollingProblem`] for a struct that captures the instance (dimensions,
//! input text, dictionary, ...).
//!
//! The trait encodes:
//! - Layered structure: layers 0..=T, with one transition per step.
//! - Frontier: compact representation of all DP values on the current layer.
//! - Extraction: reading the answer off the final frontier.

/// Trait for a rolling DP instance.
///
/// Semantics:
/// - There are `T = num_layers()` steps.
/// - The frontier starts at layer 0 via [`init_frontier`](Self::init_frontier).
/// - `forward_step(i, frontier)` advances the frontier from layer `i` to `i+1`
///   by mutating it.
/// - After T steps, [`extract`](Self::extract) reads the answer.
pub trait RollingProblem {
    /// Representation of the DP frontier (e.g. one row of a table).
    type Frontier: Clone;

    /// Value produced from the final frontier.
    type Output;

    /// Failure raised by a step. Total problems use
    /// [`Infallible`](std::convert::Infallible).
    type Error;

    /// Number of DP steps `T`.
    fn num_layers(&self) -> usize;

    /// Initialize the frontier at layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// Perform one DP step in place: layer `layer` -> `layer + 1`.
    ///
    /// Must only depend on `frontier` and fixed problem data.
    fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier)
        -> Result<(), Self::Error>;

    /// Read the answer from the frontier at layer T.
    fn extract(&self, frontier: &Self::Frontier) -> Self::Output;
}
