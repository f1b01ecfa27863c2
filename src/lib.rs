//! Rolling-frontier dynamic programming.
//!
//! This crate provides a small engine for dynamic programs that keep a single
//! frontier alive and advance it in place, one layer at a time, together with
//! two problems built on it.
//!
//! ## Core idea
//! 1. Model your recurrence as a *layered* DP whose next layer only depends on
//!    the current one.
//! 2. Implement the [`RollingProblem`] trait for that recurrence.
//! 3. Let [`RollingEngine`] allocate the frontier, sweep every layer and
//!    extract the answer. The frontier lives exactly as long as the call.
//!
//! ## Quick start
//! ```
//! use rolling_dp::{can_segment, count_paths};
//!
//! assert_eq!(count_paths(10, 10), Ok(48620));
//! assert!(can_segment("applepenapple", ["apple", "pen"]));
//! ```
//!
//! ## Built-in problems
//! - [`problems::grid_paths`]: number of monotone (down/right) paths across a grid.
//! - [`problems::word_break`]: whether a string splits into dictionary words,
//!   and one such split.
//!
//! Every call owns its working table, so calls are independent and can run on
//! any number of threads at once; see [`batch`].

pub mod batch;
pub mod blocks;
pub mod builder;
pub mod engine;
pub mod error;
pub mod problems;
pub mod traits;
pub mod utils;

pub use crate::builder::RollingEngineBuilder;
pub use crate::engine::RollingEngine;
pub use crate::error::DpError;
pub use crate::problems::grid_paths::count_paths;
pub use crate::problems::word_break::{can_segment, segment, Dictionary};
pub use crate::traits::RollingProblem;
