//! Two-dimensional views over flat slices.
//!
//! Puzzle maps are kept as the raw input bytes. A [Grid] addresses them by
//! row and column, skipping the `stride` bytes (usually a newline) which
//! separate rows.

#[cfg(test)]
mod tests;

use arrayvec::ArrayVec;

pub trait GridExt<T> {
    /// View as a grid of `columns` elements per row.
    #[inline]
    fn as_grid(&self, columns: usize) -> Grid<'_, T> {
        self.as_grid_with_stride(columns, 0)
    }

    /// View as a grid where rows are separated by `stride` elements which are
    /// not part of the grid.
    fn as_grid_with_stride(&self, columns: usize, stride: usize) -> Grid<'_, T>;

    /// View as a mutable grid of `columns` elements per row.
    fn as_grid_mut(&mut self, columns: usize) -> GridMut<'_, T>;
}

impl<T> GridExt<T> for [T] {
    #[inline]
    fn as_grid_with_stride(&self, columns: usize, stride: usize) -> Grid<'_, T> {
        Grid {
            data: self,
            columns,
            stride,
        }
    }

    #[inline]
    fn as_grid_mut(&mut self, columns: usize) -> GridMut<'_, T> {
        GridMut {
            data: self,
            columns,
        }
    }
}

pub struct Grid<'a, T> {
    data: &'a [T],
    columns: usize,
    stride: usize,
}

impl<T> Clone for Grid<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Grid<'_, T> {}

impl<'a, T> Grid<'a, T> {
    /// Number of rows. A trailing row without its separator still counts.
    pub fn rows_len(&self) -> usize {
        let Some(period) = self.columns.checked_add(self.stride).filter(|&p| p > 0) else {
            return 0;
        };

        self.data.len().saturating_add(self.stride) / period
    }

    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns
    }

    /// Access the given row.
    pub fn row(&self, row: usize) -> Option<&'a [T]> {
        let start = row.checked_mul(self.columns.checked_add(self.stride)?)?;
        self.data.get(start..start.checked_add(self.columns)?)
    }

    /// Iterate over rows.
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = b"ab\ncd\n".as_grid_with_stride(2, 1);
    /// assert!(grid.rows().eq([&b"ab"[..], &b"cd"[..]]));
    /// ```
    pub fn rows(&self) -> impl Iterator<Item = &'a [T]> {
        let grid = *self;
        (0..self.rows_len()).map_while(move |row| grid.row(row))
    }

    #[inline]
    pub fn try_get(&self, row: usize, column: usize) -> Option<&'a T> {
        self.row(row)?.get(column)
    }

    /// Find the `(row, column)` of the first element matching `p`.
    pub fn position(&self, mut p: impl FnMut(&T) -> bool) -> Option<(usize, usize)> {
        self.rows()
            .enumerate()
            .find_map(|(row, values)| Some((row, values.iter().position(&mut p)?)))
    }

    /// Collect the elements at the `(column, row)` positions produced by `it`.
    ///
    /// Stops when the array is full, a position falls outside of the grid,
    /// or the iterator ends.
    pub fn collect<const N: usize>(
        &self,
        it: impl IntoIterator<Item = (usize, usize)>,
    ) -> ArrayVec<T, N>
    where
        T: Copy,
    {
        let mut values = ArrayVec::new();

        for (column, row) in it {
            let Some(&value) = self.try_get(row, column) else {
                break;
            };

            if values.try_push(value).is_err() {
                break;
            }
        }

        values
    }
}

pub struct GridMut<'a, T> {
    data: &'a mut [T],
    columns: usize,
}

impl<T> GridMut<'_, T> {
    #[inline]
    pub fn try_get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        if column >= self.columns {
            return None;
        }

        let index = row.checked_mul(self.columns)?.checked_add(column)?;
        self.data.get_mut(index)
    }
}

/// The orthogonal neighbours of `(row, column)` which don't underflow.
pub fn neighbours((row, column): (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
    let mut out = ArrayVec::<_, 4>::new();
    out.extend(row.checked_sub(1).map(|row| (row, column)));
    out.extend(column.checked_add(1).map(|column| (row, column)));
    out.extend(row.checked_add(1).map(|row| (row, column)));
    out.extend(column.checked_sub(1).map(|column| (row, column)));
    out.into_iter()
}
