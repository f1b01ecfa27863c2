//! Built-in rolling problems.
//!
//! - [`grid_paths`] : monotone lattice paths across an `m`×`n` grid.
//! - [`word_break`] : segmentation of a string into dictionary words.

pub mod grid_paths;
pub mod word_break;
