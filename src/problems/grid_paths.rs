//! Monotone lattice paths across an `m`×`n` grid as a rolling DP.
//!
//! Starting at the top-left cell and moving only down or right, the number of
//! ways to reach cell `(i, j)` is the sum of the ways to reach `(i-1, j)` and
//! `(i, j-1)`, its only two predecessors.
//!
//! We treat layers as rows 1..m, and the frontier at layer `i` is the count
//! for every column of row `i`. The first row is all ones (the only way along
//! it is to keep moving right). Each step overwrites the row in place, left to
//! right: when column `j` is updated, `row[j-1]` already holds this row's
//! value while `row[j]` still holds the row above.
//!
//! The answer equals `C(m+n-2, m-1)`; counts are kept in `u128` and every
//! addition is checked.

use crate::error::DpError;
use crate::traits::RollingProblem;
use crate::RollingEngine;

/// Grid dimensions for a path-counting instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridPaths {
    rows: usize,
    cols: usize,
}

/// Frontier row: path counts for every column of the current row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathRow {
    pub counts: Vec<u128>, // length = cols
}

impl GridPaths {
    /// Validate dimensions; both must be at least 1.
    pub fn new(rows: usize, cols: usize) -> Result<Self, DpError> {
        if rows == 0 {
            return Err(DpError::InvalidArgument {
                name: "rows",
                value: rows,
            });
        }
        if cols == 0 {
            return Err(DpError::InvalidArgument {
                name: "cols",
                value: cols,
            });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

impl RollingProblem for GridPaths {
    type Frontier = PathRow;
    type Output = u128;
    type Error = DpError;

    fn num_layers(&self) -> usize {
        // row 0 is the initial frontier
        self.rows - 1
    }

    fn init_frontier(&self) -> Self::Frontier {
        PathRow {
            counts: vec![1; self.cols],
        }
    }

    fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier) -> Result<(), DpError> {
        let row = layer + 1;
        let counts = &mut frontier.counts;
        for col in 1..counts.len() {
            counts[col] = counts[col]
                .checked_add(counts[col - 1])
                .ok_or(DpError::Overflow { row, col })?;
        }
        Ok(())
    }

    fn extract(&self, frontier: &Self::Frontier) -> Self::Output {
        // cols >= 1, so the row is never empty
        frontier.counts.last().copied().unwrap_or(0)
    }
}

/// Number of monotone paths from the top-left to the bottom-right cell of a
/// `rows`×`cols` grid.
///
/// ```
/// use rolling_dp::count_paths;
///
/// assert_eq!(count_paths(3, 7), Ok(28));
/// assert!(count_paths(0, 7).is_err());
/// ```
///
/// # Errors
/// [`DpError::InvalidArgument`] if either dimension is 0, and
/// [`DpError::Overflow`] if the count does not fit in `u128` (first happens
/// for a 67×67 grid).
pub fn count_paths(rows: usize, cols: usize) -> Result<u128, DpError> {
    let problem = GridPaths::new(rows, cols)?;
    RollingEngine::new(problem).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::binomial;

    #[test]
    fn literal_cases() {
        assert_eq!(count_paths(3, 7), Ok(28));
        assert_eq!(count_paths(3, 2), Ok(3));
        assert_eq!(count_paths(1, 1), Ok(1));
        assert_eq!(count_paths(10, 10), Ok(48620));
    }

    #[test]
    fn single_row_or_column_has_one_path() {
        for k in 1..50 {
            assert_eq!(count_paths(1, k), Ok(1));
            assert_eq!(count_paths(k, 1), Ok(1));
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            count_paths(0, 5),
            Err(DpError::InvalidArgument {
                name: "rows",
                value: 0
            })
        );
        assert_eq!(
            count_paths(5, 0),
            Err(DpError::InvalidArgument {
                name: "cols",
                value: 0
            })
        );
    }

    #[test]
    fn matches_closed_form() {
        for m in 1..30usize {
            for n in 1..30usize {
                let expected = binomial((m + n - 2) as u64, (m - 1) as u64).unwrap();
                assert_eq!(count_paths(m, n), Ok(expected), "m={m} n={n}");
            }
        }
    }

    #[test]
    fn largest_square_fits_and_next_overflows() {
        let expected = binomial(130, 65).unwrap();
        assert_eq!(count_paths(66, 66), Ok(expected));
        assert!(matches!(
            count_paths(67, 67),
            Err(DpError::Overflow { row: 66, .. })
        ));
    }

    #[test]
    fn frontier_rows_follow_pascal() {
        let problem = GridPaths::new(4, 4).unwrap();
        let mut row = problem.init_frontier();
        assert_eq!(row.counts, vec![1, 1, 1, 1]);
        problem.forward_step(0, &mut row).unwrap();
        assert_eq!(row.counts, vec![1, 2, 3, 4]);
        problem.forward_step(1, &mut row).unwrap();
        assert_eq!(row.counts, vec![1, 3, 6, 10]);
        problem.forward_step(2, &mut row).unwrap();
        assert_eq!(row.counts, vec![1, 4, 10, 20]);
        assert_eq!(problem.extract(&row), 20);
    }
}
