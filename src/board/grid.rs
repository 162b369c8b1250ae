//! Fixed-size square container of optional entries.

/// An `N` x `N` grid whose slots are either empty or hold a `T`.
///
/// The dimension is fixed by the type. Indexing outside `0..N` panics;
/// callers are expected to hand in coordinates they already validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T, const N: usize> {
    cells: [[Option<T>; N]; N],
}

impl<T, const N: usize> Grid<T, N> {
    /// Create a grid with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Grid {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| None)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        N
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.cells[row][col].as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.cells[row][col].as_mut()
    }

    /// Store `value` in a slot, returning whatever was there before.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Option<T>) -> Option<T> {
        std::mem::replace(&mut self.cells[row][col], value)
    }

    /// Empty a slot, returning its previous occupant.
    #[inline]
    pub fn take(&mut self, row: usize, col: usize) -> Option<T> {
        self.cells[row][col].take()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_none()
    }

    /// Occupied slots in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.as_ref().map(|value| (row, col, value)))
        })
    }
}

impl<T, const N: usize> Default for Grid<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
