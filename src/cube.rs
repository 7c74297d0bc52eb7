//! Flat 3-D arrays with computed strides.
//!
//! The score and decision tables are cubes indexed by `(i, j, k)`. Backing
//! them with a single `Vec` keeps the cubic memory bound explicit and avoids
//! the pointer-chasing of nested `Vec<Vec<Vec<_>>>`.

use std::ops::{Index, IndexMut};

/// A dense 3-D array stored row-major in one allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cube<T> {
    dims: [usize; 3],
    cells: Vec<T>,
}

impl<T: Clone + Default> Cube<T> {
    /// Allocate a cube of the given dimensions, filled with `T::default()`.
    ///
    /// Returns `None` if the total cell count overflows `usize`. Callers
    /// that want a graceful size limit should check the cell count before
    /// calling (see [`crate::builder::MAX_TABLE_CELLS`]).
    pub fn try_new(dims: [usize; 3]) -> Option<Self> {
        let len = dims[0].checked_mul(dims[1])?.checked_mul(dims[2])?;
        Some(Self {
            dims,
            cells: vec![T::default(); len],
        })
    }
}

impl<T> Cube<T> {
    /// Dimensions `[d0, d1, d2]` of the cube.
    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    #[inline]
    fn offset(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.dims[0] && j < self.dims[1] && k < self.dims[2]);
        (i * self.dims[1] + j) * self.dims[2] + k
    }
}

impl<T> Index<(usize, usize, usize)> for Cube<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j, k): (usize, usize, usize)) -> &T {
        &self.cells[self.offset(i, j, k)]
    }
}

impl<T> IndexMut<(usize, usize, usize)> for Cube<T> {
    #[inline]
    fn index_mut(&mut self, (i, j, k): (usize, usize, usize)) -> &mut T {
        let off = self.offset(i, j, k);
        &mut self.cells[off]
    }
}
