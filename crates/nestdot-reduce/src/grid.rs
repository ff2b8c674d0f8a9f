//! # Coordinate Grids and Comprehension Tables
//!
//! Two ways of expanding one-dimensional axes into two-dimensional tables.
//!
//! **Meshgrid.** For axes `x1` (length `n`) and `x2` (length `m`),
//! [`meshgrid`] returns two `m × n` matrices. `xx1` repeats `x1` in every row;
//! `xx2` repeats `x2` down every column. Reading the two matrices at the same
//! cell gives one `(x1, x2)` coordinate, and all cells together enumerate
//! every combination.
//!
//! **Comprehension table.** [`comprehension_table`] evaluates
//! `[[f(i, j) for j in cols] for i in rows]`. The outer variable selects the
//! row and is held fixed while the inner variable sweeps the columns, the
//! same order as two nested `for` loops. [`evaluation_order`] reports that
//! order explicitly.

use std::ops::RangeInclusive;

use serde::Serialize;

use nestdot_core::{NestedValue, Scalar};

/// A pair of coordinate matrices produced by [`meshgrid`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meshgrid {
    /// Row-repeated copy of `x1`: `xx1[i][j] == x1[j]`.
    pub xx1: Vec<Vec<Scalar>>,
    /// Column-repeated copy of `x2`: `xx2[i][j] == x2[i]`.
    pub xx2: Vec<Vec<Scalar>>,
}

/// One cell of a [`Meshgrid`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridPoint {
    /// Row index (position in `x2`).
    pub row: usize,
    /// Column index (position in `x1`).
    pub col: usize,
    /// Coordinate taken from `xx1`.
    pub x1: Scalar,
    /// Coordinate taken from `xx2`.
    pub x2: Scalar,
}

/// Build the coordinate matrices for axes `x1` and `x2`.
pub fn meshgrid(x1: &[Scalar], x2: &[Scalar]) -> Meshgrid {
    let xx1 = x2.iter().map(|_| x1.to_vec()).collect();
    let xx2 = x2.iter().map(|&y| vec![y; x1.len()]).collect();
    Meshgrid { xx1, xx2 }
}

impl Meshgrid {
    /// `(rows, cols)`: the lengths of `x2` and `x1`.
    pub fn shape(&self) -> (usize, usize) {
        (self.xx1.len(), self.xx1.first().map_or(0, Vec::len))
    }

    /// Every coordinate, row by row.
    pub fn points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.xx1
            .iter()
            .zip(&self.xx2)
            .enumerate()
            .flat_map(|(row, (r1, r2))| {
                r1.iter()
                    .zip(r2)
                    .enumerate()
                    .map(move |(col, (&x1, &x2))| GridPoint { row, col, x1, x2 })
            })
    }

    /// Both matrices as nested values, `(xx1, xx2)`.
    pub fn to_nested(&self) -> (NestedValue, NestedValue) {
        let to_tree = |m: &Vec<Vec<Scalar>>| {
            NestedValue::Sequence(
                m.iter()
                    .map(|row| row.iter().copied().collect::<NestedValue>())
                    .collect(),
            )
        };
        (to_tree(&self.xx1), to_tree(&self.xx2))
    }
}

/// Evaluate `[[f(i, j) for j in cols] for i in rows]`.
pub fn comprehension_table<F>(
    rows: RangeInclusive<i64>,
    cols: RangeInclusive<i64>,
    f: F,
) -> NestedValue
where
    F: Fn(Scalar, Scalar) -> Scalar,
{
    NestedValue::Sequence(
        rows.map(|i| {
            cols.clone()
                .map(|j| f(Scalar::Int(i), Scalar::Int(j)))
                .collect::<NestedValue>()
        })
        .collect(),
    )
}

/// The `(i, j)` pairs in the order a comprehension table computes them.
pub fn evaluation_order(rows: RangeInclusive<i64>, cols: RangeInclusive<i64>) -> Vec<(i64, i64)> {
    rows.flat_map(|i| cols.clone().map(move |j| (i, j))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestdot_core::nested;

    fn ints(values: &[i64]) -> Vec<Scalar> {
        values.iter().copied().map(Scalar::Int).collect()
    }

    #[test]
    fn meshgrid_repeats_axes() {
        let grid = meshgrid(&ints(&[1, 2, 3]), &ints(&[10, 20]));
        assert_eq!(grid.xx1, vec![ints(&[1, 2, 3]), ints(&[1, 2, 3])]);
        assert_eq!(grid.xx2, vec![ints(&[10, 10, 10]), ints(&[20, 20, 20])]);
        assert_eq!(grid.shape(), (2, 3));
    }

    #[test]
    fn meshgrid_points_cover_every_combination() {
        let grid = meshgrid(&ints(&[1, 2, 3]), &ints(&[10, 20]));
        let points: Vec<_> = grid.points().collect();
        assert_eq!(points.len(), 6);
        assert_eq!(
            points[4],
            GridPoint {
                row: 1,
                col: 1,
                x1: Scalar::Int(2),
                x2: Scalar::Int(20),
            }
        );
    }

    #[test]
    fn meshgrid_with_empty_axis() {
        let grid = meshgrid(&ints(&[1, 2]), &[]);
        assert_eq!(grid.shape(), (0, 0));
        assert_eq!(grid.points().count(), 0);
    }

    #[test]
    fn meshgrid_to_nested() {
        let grid = meshgrid(&ints(&[1, 2]), &ints(&[5]));
        let (xx1, xx2) = grid.to_nested();
        assert_eq!(xx1, nested!([[1, 2]]));
        assert_eq!(xx2, nested!([[5, 5]]));
    }

    #[test]
    fn multiplication_table() {
        let table = comprehension_table(1..=3, 1..=3, |i, j| i * j);
        assert_eq!(table, nested!([[1, 2, 3], [2, 4, 6], [3, 6, 9]]));
    }

    #[test]
    fn outer_variable_is_held_while_inner_sweeps() {
        let order = evaluation_order(1..=2, 1..=3);
        assert_eq!(order, vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]);
    }
}
