//! Storage adapters implementing the [`MatrixMut`] view.

use nalgebra::{DMatrix, Scalar};

use crate::{Error, MatrixMut};

/// View over one contiguous row-major buffer of n² scalars.
#[derive(Debug)]
pub struct FlatView<'a, T> {
    data: &'a mut [T],
    n: usize,
}

impl<'a, T> FlatView<'a, T> {
    /// Views `data` as an n×n matrix. Errors with
    /// [`Error::SizeMismatch`] unless `data.len() == n * n`.
    pub fn new(data: &'a mut [T], n: usize) -> Result<Self, Error> {
        if data.len() != n * n {
            return Err(Error::SizeMismatch {
                expected: n * n,
                actual: data.len(),
            });
        }
        Ok(FlatView { data, n })
    }
}

impl<'a, T: Copy> MatrixMut<T> for FlatView<'a, T> {
    fn order(&self) -> usize {
        self.n
    }

    fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.n + j]
    }

    fn set(&mut self, i: usize, j: usize, v: T) {
        self.data[i * self.n + j] = v;
    }
}

/// View over a jagged matrix, one independent buffer per row. The rows are
/// indexed in place; nothing is flattened or copied.
#[derive(Debug)]
pub struct RowsView<'a, T> {
    rows: &'a mut [Vec<T>],
}

impl<'a, T> RowsView<'a, T> {
    /// Views `rows` as a square matrix. Errors with
    /// [`Error::SizeMismatch`] if any row's length differs from the row
    /// count (ragged or non-square input).
    pub fn new(rows: &'a mut [Vec<T>]) -> Result<Self, Error> {
        let n = rows.len();
        for row in rows.iter() {
            if row.len() != n {
                return Err(Error::SizeMismatch {
                    expected: n,
                    actual: row.len(),
                });
            }
        }
        Ok(RowsView { rows })
    }
}

impl<'a, T: Copy> MatrixMut<T> for RowsView<'a, T> {
    fn order(&self) -> usize {
        self.rows.len()
    }

    fn get(&self, i: usize, j: usize) -> T {
        self.rows[i][j]
    }

    fn set(&mut self, i: usize, j: usize, v: T) {
        self.rows[i][j] = v;
    }
}

/// nalgebra's dense matrix participates directly. Squareness is not
/// expressed in the type; [`solve_matrix`](crate::solve_matrix) checks it
/// before factoring.
impl<T: Scalar + Copy> MatrixMut<T> for DMatrix<T> {
    fn order(&self) -> usize {
        self.nrows()
    }

    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }

    fn set(&mut self, i: usize, j: usize, v: T) {
        self[(i, j)] = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_view_addresses_row_major() {
        let mut data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let mut view = FlatView::new(&mut data, 3).unwrap();
        assert_eq!(view.order(), 3);
        assert_eq!(view.get(0, 0), 1.0);
        assert_eq!(view.get(1, 2), 6.0);
        assert_eq!(view.get(2, 1), 8.0);
        view.set(2, 1, -8.0);
        assert_eq!(data[7], -8.0);
    }

    #[test]
    fn flat_view_rejects_wrong_length() {
        let mut data = vec![0.0; 8];
        assert_eq!(
            FlatView::new(&mut data, 3).unwrap_err(),
            Error::SizeMismatch {
                expected: 9,
                actual: 8
            }
        );
    }

    #[test]
    fn rows_view_addresses_in_place() {
        let mut rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let mut view = RowsView::new(&mut rows).unwrap();
        assert_eq!(view.order(), 2);
        assert_eq!(view.get(1, 0), 3.0);
        view.set(0, 1, 20.0);
        assert_eq!(rows[0][1], 20.0);
    }

    #[test]
    fn rows_view_rejects_ragged_input() {
        let mut rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![6.0, 7.0, 8.0]];
        assert_eq!(
            RowsView::new(&mut rows).unwrap_err(),
            Error::SizeMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn dmatrix_view_matches_indexing() {
        let mut m = nalgebra::dmatrix![
            1.0, 2.0;
            3.0, 4.0;
        ];
        assert_eq!(MatrixMut::order(&m), 2);
        assert_eq!(MatrixMut::get(&m, 1, 0), 3.0);
        MatrixMut::set(&mut m, 1, 1, 40.0);
        assert_eq!(m[(1, 1)], 40.0);
    }
}
