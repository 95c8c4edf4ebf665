use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// Minimal scalar capability the solver needs: an ordered field-like type
/// with zero/one constants and an absolute value.
///
/// The provided `abs` is a plain sign check, which is correct for exact
/// types (rationals, fixed-point). Floating-point implementations override
/// it with the native `abs`.
pub trait Element:
    Copy
    + PartialOrd
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Zero
    + One
{
    fn abs(self) -> Self {
        if self < Self::zero() {
            -self
        } else {
            self
        }
    }
}

macro_rules! impl_element_float {
    ($($t:ty),*) => {$(
        impl Element for $t {
            fn abs(self) -> Self {
                <$t>::abs(self)
            }
        }
    )*};
}

impl_element_float!(f32, f64);

/// Mutable view of a square n×n matrix, the one seam between the
/// factorization code and the storage layout.
///
/// `(i, j)` addresses the logical cell `i * order() + j`; access is O(1)
/// and copies nothing. Implementations must present exactly `order()²`
/// cells — the provided constructors ([`FlatView::new`], [`RowsView::new`])
/// and entry points validate this before the algorithm runs.
///
/// [`FlatView::new`]: crate::FlatView::new
/// [`RowsView::new`]: crate::RowsView::new
pub trait MatrixMut<T> {
    /// Matrix order n.
    fn order(&self) -> usize;

    fn get(&self, i: usize, j: usize) -> T;

    fn set(&mut self, i: usize, j: usize, v: T);
}
