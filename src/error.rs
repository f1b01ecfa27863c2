//! Error type shared by the fallible problems in this crate.

use thiserror::Error;

/// Errors reported by [`GridPaths`](crate::problems::grid_paths::GridPaths)
/// and the helpers built on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DpError {
    /// A grid dimension was outside its domain (both must be at least 1).
    #[error("invalid argument `{name}` = {value}: grid dimensions must be at least 1")]
    InvalidArgument { name: &'static str, value: usize },

    /// A path count no longer fits in `u128`.
    #[error("path count overflowed u128 at row {row}, column {col}")]
    Overflow { row: usize, col: usize },
}
