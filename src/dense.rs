//! LU factorization with row-scaled partial pivoting, and the permuted
//! forward/back substitution that solves against the resulting factors.

use nalgebra::DMatrix;

use crate::{Element, Error, FlatView, MatrixMut, RowsView};

/// Reusable dense solver: factor once with [`setup`](Dense::setup), then
/// solve any number of right-hand sides with [`solve`](Dense::solve)
/// against the same factored matrix.
#[derive(Clone, Debug, Default)]
pub struct Dense {
    /// Row permutation produced by the last successful factorization.
    ps: Vec<usize>,
}

impl Dense {
    pub fn new() -> Self {
        Dense { ps: Vec::new() }
    }

    /// Factors `a` in place, storing the row permutation for subsequent
    /// calls to [`solve`](Dense::solve).
    pub fn setup<T, M>(&mut self, a: &mut M) -> Result<(), Error>
    where
        T: Element,
        M: MatrixMut<T>,
    {
        self.ps = ludecomp(a)?;
        Ok(())
    }

    /// Solves A·x = b against the matrix factored by the last `setup`.
    ///
    /// Errors with [`Error::SizeMismatch`] if `b`'s length differs from
    /// the factored dimension, which also covers calling `solve` before
    /// any successful `setup`.
    pub fn solve<T, M>(&self, a: &M, b: &[T]) -> Result<Vec<T>, Error>
    where
        T: Element,
        M: MatrixMut<T>,
    {
        if self.ps.len() != b.len() {
            return Err(Error::SizeMismatch {
                expected: self.ps.len(),
                actual: b.len(),
            });
        }
        Ok(lusolve(a, &self.ps, b))
    }

    /// Row permutation from the last successful factorization.
    pub fn pivots(&self) -> &[usize] {
        &self.ps
    }
}

/// Performs the LU factorization of the n×n matrix viewed by `a`, using
/// Gaussian elimination with row-scaled partial pivoting.
///
/// Pivot rows are chosen by largest magnitude in the current column after
/// normalizing each candidate by its own row's largest absolute entry, so
/// rows of differing scale compete fairly. Rows are never physically
/// swapped: only the returned permutation `ps` is reordered, and every
/// access from the first pivot choice onwards goes through it.
///
/// A successful factorization leaves `a` holding both factors of
/// P·A = L·U: the upper triangle (diagonal included) of the permuted
/// matrix contains U, and the strict lower triangle contains the
/// multipliers of the unit lower-triangular L. Row i of the triangular
/// system lives in physical row `ps[i]`.
///
/// Errors with [`Error::SingularMatrix`] if a row is entirely zero, if no
/// candidate row offers a usable pivot at some elimination step, or if the
/// final diagonal entry comes out exactly zero. On error the matrix is
/// left partially factored and is not meaningful.
pub fn ludecomp<T, M>(a: &mut M) -> Result<Vec<usize>, Error>
where
    T: Element,
    M: MatrixMut<T>,
{
    let n = a.order();
    if n == 0 {
        return Ok(Vec::new());
    }

    // Per-row reciprocal norms for scaled pivot comparison. A zero row can
    // never produce a pivot, so it fails here before elimination starts.
    let mut ps: Vec<usize> = (0..n).collect();
    let mut scales = Vec::with_capacity(n);
    for i in 0..n {
        let mut nrmrow = T::zero();
        for j in 0..n {
            let biggst = a.get(i, j).abs();
            if biggst > nrmrow {
                nrmrow = biggst;
            }
        }
        if nrmrow > T::zero() {
            scales.push(T::one() / nrmrow);
        } else {
            return Err(Error::SingularMatrix { step: i });
        }
    }

    for k in 0..n - 1 {
        // Pivot search over the remaining rows, addressed through the
        // permutation. Strict `>` keeps the earliest row on ties.
        let mut biggst = T::zero();
        let mut pividx = k;
        for i in k..n {
            let size = a.get(ps[i], k).abs() * scales[ps[i]];
            if size > biggst {
                biggst = size;
                pividx = i;
            }
        }
        if biggst <= T::zero() {
            return Err(Error::SingularMatrix { step: k });
        }
        ps.swap(k, pividx);

        let pivot = a.get(ps[k], k);
        for i in k + 1..n {
            let mult = a.get(ps[i], k) / pivot;
            // The eliminated cell stores the L multiplier.
            a.set(ps[i], k, mult);
            if mult != T::zero() {
                for j in k + 1..n {
                    let v = a.get(ps[i], j) - mult * a.get(ps[k], j);
                    a.set(ps[i], j, v);
                }
            }
        }
    }

    // The last diagonal entry is the only pivot the elimination loop never
    // inspects.
    if a.get(ps[n - 1], n - 1) == T::zero() {
        return Err(Error::SingularMatrix { step: n - 1 });
    }

    Ok(ps)
}

/// Solves A·x = b using the factors and permutation produced by
/// [`ludecomp`], returning a freshly allocated solution vector.
///
/// Forward substitution first solves L·y = P·b against the stored
/// multipliers (unit diagonal, nothing to divide by), then back
/// substitution solves U·x = y dividing by the diagonal. Read-only over
/// all three inputs; cannot fail when the factorization succeeded, since
/// [`ludecomp`]'s checks cover every diagonal entry divided by here.
pub fn lusolve<T, M>(a: &M, ps: &[usize], b: &[T]) -> Vec<T>
where
    T: Element,
    M: MatrixMut<T>,
{
    let n = ps.len();

    let mut x = Vec::with_capacity(n);
    for i in 0..n {
        let mut dot = T::zero();
        for j in 0..i {
            dot = dot + a.get(ps[i], j) * x[j];
        }
        x.push(b[ps[i]] - dot);
    }

    for i in (0..n).rev() {
        let mut dot = T::zero();
        for j in i + 1..n {
            dot = dot + a.get(ps[i], j) * x[j];
        }
        x[i] = (x[i] - dot) / a.get(ps[i], i);
    }

    x
}

/// Factors the viewed matrix in place and solves for one right-hand side.
///
/// The generic path behind the concrete [`solve`], [`solve_flat`] and
/// [`solve_matrix`] entry points, public for callers bringing their own
/// [`MatrixMut`] storage. Errors with [`Error::SizeMismatch`] before
/// touching the matrix unless its order equals `b.len()`.
pub fn solve_in_place<T, M>(a: &mut M, b: &[T]) -> Result<Vec<T>, Error>
where
    T: Element,
    M: MatrixMut<T>,
{
    if a.order() != b.len() {
        return Err(Error::SizeMismatch {
            expected: a.order(),
            actual: b.len(),
        });
    }
    let ps = ludecomp(a)?;
    Ok(lusolve(a, &ps, b))
}

/// Solves A·x = b for a jagged matrix (one `Vec` per row), factoring `a`
/// in place.
///
/// Errors with [`Error::SizeMismatch`] if any row's length differs from
/// the row count or from `b.len()`, and with [`Error::SingularMatrix`] as
/// described on [`ludecomp`].
pub fn solve<T: Element>(a: &mut [Vec<T>], b: &[T]) -> Result<Vec<T>, Error> {
    let mut view = RowsView::new(a)?;
    solve_in_place(&mut view, b)
}

/// Solves A·x = b for a flat row-major matrix buffer, factoring `a` in
/// place. The dimension is taken from `b.len()`; errors with
/// [`Error::SizeMismatch`] unless `a.len() == b.len()²`.
pub fn solve_flat<T: Element>(a: &mut [T], b: &[T]) -> Result<Vec<T>, Error> {
    let mut view = FlatView::new(a, b.len())?;
    solve_in_place(&mut view, b)
}

/// Solves A·x = b for a [`DMatrix`], factoring `a` in place. Errors with
/// [`Error::SizeMismatch`] if `a` is not square or its order differs from
/// `b.len()`.
pub fn solve_matrix<T>(a: &mut DMatrix<T>, b: &[T]) -> Result<Vec<T>, Error>
where
    T: Element + nalgebra::Scalar,
{
    if a.nrows() != a.ncols() {
        return Err(Error::SizeMismatch {
            expected: a.nrows(),
            actual: a.ncols(),
        });
    }
    solve_in_place(a, b)
}
