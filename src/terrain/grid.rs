//! Square sample grid stored as a flat buffer with an explicit row stride.

use std::ops::{Add, Index, Mul};

/// `side × side` cells, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    side: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f(row, col)` for every cell in row-major order.
    pub fn from_fn(side: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                cells.push(f(row, col));
            }
        }
        Self { side, cells }
    }

    /// Wrap an existing row-major buffer. Returns `None` unless `cells.len() == side²`.
    pub fn from_vec(side: usize, cells: Vec<T>) -> Option<Self> {
        (cells.len() == side * side).then_some(Self { side, cells })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Row stride of the flat buffer.
    pub fn stride(&self) -> usize {
        self.side
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.side && col < self.side {
            self.cells.get(row * self.side + col)
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.side.max(1))
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(
            row < self.side && col < self.side,
            "grid index ({row}, {col}) out of bounds for side {}",
            self.side
        );
        &self.cells[row * self.side + col]
    }
}

impl<T> Grid<T>
where
    T: Copy + Add<Output = T> + Mul<f32, Output = T>,
{
    /// Bilinear sample at fractional grid coordinates.
    ///
    /// `row`/`col` are clamped to `[0, side - 1]`, so samples outside the grid
    /// return the nearest edge value.
    pub fn bilinear(&self, row: f32, col: f32) -> T {
        let (r0, tr) = self.cell(row);
        let (c0, tc) = self.cell(col);
        let r1 = (r0 + 1).min(self.side - 1);
        let c1 = (c0 + 1).min(self.side - 1);

        let top = self[(r0, c0)] * (1.0 - tc) + self[(r0, c1)] * tc;
        let bottom = self[(r1, c0)] * (1.0 - tc) + self[(r1, c1)] * tc;

        top * (1.0 - tr) + bottom * tr
    }

    /// Lower cell index and interpolation weight for one axis.
    fn cell(&self, v: f32) -> (usize, f32) {
        let max = self.side.saturating_sub(1) as f32;
        let v = v.clamp(0.0, max);
        let i0 = (v.floor() as usize).min(self.side.saturating_sub(2));
        (i0, v - i0 as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn two_by_two() -> Grid<f32> {
        Grid::from_vec(2, vec![0.0, 1.0, 2.0, 3.0]).unwrap()
    }

    #[test]
    fn test_bilinear_center_of_two_by_two() {
        assert_eq!(two_by_two().bilinear(0.5, 0.5), 1.5);
    }

    #[test]
    fn test_bilinear_hits_cells_exactly() {
        let grid = two_by_two();
        assert_eq!(grid.bilinear(0.0, 0.0), 0.0);
        assert_eq!(grid.bilinear(0.0, 1.0), 1.0);
        assert_eq!(grid.bilinear(1.0, 0.0), 2.0);
        assert_eq!(grid.bilinear(1.0, 1.0), 3.0);
    }

    #[test]
    fn test_bilinear_clamps_outside() {
        let grid = two_by_two();
        assert_eq!(grid.bilinear(-5.0, -5.0), 0.0);
        assert_eq!(grid.bilinear(9.0, 9.0), 3.0);
        assert_eq!(grid.bilinear(0.5, 7.0), 2.0);
    }

    #[test]
    fn test_bilinear_last_row_uses_full_weight() {
        let grid = Grid::from_fn(4, |row, col| (row * 10 + col) as f32);
        assert_eq!(grid.bilinear(3.0, 2.5), 32.5);
        assert_eq!(grid.bilinear(1.25, 3.0), 15.5);
    }

    #[test]
    fn test_bilinear_vectors() {
        let grid = Grid::from_fn(2, |row, col| Vec3::new(row as f32, col as f32, 1.0));
        assert_eq!(grid.bilinear(0.25, 0.75), Vec3::new(0.25, 0.75, 1.0));
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = Grid::from_vec(1, vec![7.0f32]).unwrap();
        assert_eq!(grid.bilinear(0.3, -2.0), 7.0);
    }

    #[test]
    fn test_from_vec_rejects_wrong_length() {
        assert!(Grid::from_vec(3, vec![0.0f32; 8]).is_none());
    }

    #[test]
    fn test_layout_is_row_major() {
        let grid = Grid::from_fn(3, |row, col| row * 3 + col);
        assert_eq!(grid.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(grid[(2, 1)], 7);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.rows().nth(1), Some(&[3, 4, 5][..]));
    }
}
