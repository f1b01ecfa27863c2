//! Evaluate many independent queries at once.
//!
//! With the `parallel` feature the queries are spread over the rayon thread
//! pool; otherwise they run in order on the calling thread. Either way the
//! results come back in input order and equal the one-at-a-time answers.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::DpError;
use crate::problems::grid_paths::count_paths;
use crate::problems::word_break::Dictionary;

/// [`count_paths`] for every `(rows, cols)` pair.
#[cfg(feature = "parallel")]
pub fn count_paths_many(dims: &[(usize, usize)]) -> Vec<Result<u128, DpError>> {
    dims.par_iter()
        .map(|&(rows, cols)| count_paths(rows, cols))
        .collect()
}

/// [`count_paths`] for every `(rows, cols)` pair.
#[cfg(not(feature = "parallel"))]
pub fn count_paths_many(dims: &[(usize, usize)]) -> Vec<Result<u128, DpError>> {
    dims.iter()
        .map(|&(rows, cols)| count_paths(rows, cols))
        .collect()
}

/// [`Dictionary::can_segment`] for every text, sharing one dictionary.
#[cfg(feature = "parallel")]
pub fn can_segment_many<S>(texts: &[S], dictionary: &Dictionary) -> Vec<bool>
where
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| dictionary.can_segment(text.as_ref()))
        .collect()
}

/// [`Dictionary::can_segment`] for every text, sharing one dictionary.
#[cfg(not(feature = "parallel"))]
pub fn can_segment_many<S>(texts: &[S], dictionary: &Dictionary) -> Vec<bool>
where
    S: AsRef<str> + Sync,
{
    texts
        .iter()
        .map(|text| dictionary.can_segment(text.as_ref()))
        .collect()
}
