/// A [Grid] is a square board of `size` x `size` cells.
/// Rows and columns are 0-indexed; `(0, 0)` is the top-left cell.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid<T> {
    size: usize,
    // Cells are ordered by rows, first left-to-right, then top-to-bottom.
    cells: Vec<T>,
}

impl<T> Grid<T> {
    #[inline]
    pub fn new(size: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Grid {
            size,
            cells: vec![fill; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({}, {}) is outside the {}x{} board",
            row,
            col,
            self.size,
            self.size
        );
        row * self.size + col
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &T {
        &self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut T {
        let index = self.index(row, col);
        &mut self.cells[index]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() rejects a zero chunk size; an empty board has no rows either way.
        self.cells.chunks(self.size.max(1))
    }
}

/// One cell of the solution board: either a queen marker or empty.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Square {
    Empty,
    Queen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled() {
        let grid = Grid::new(4, 7u8);
        assert_eq!(4, grid.size());
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(7, *grid.cell(row, col));
            }
        }
    }

    #[test]
    fn random() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let size = 6;
        let mut rng = StdRng::seed_from_u64(0);
        let mut grid = Grid::new(size, 0u8);
        for row in 0..size {
            for col in 0..size {
                *grid.cell_mut(row, col) = rng.gen_range(0..=9);
            }
        }

        let mut rng = StdRng::seed_from_u64(0);
        for row in 0..size {
            for col in 0..size {
                let expected = rng.gen_range(0..=9);
                assert_eq!(expected, *grid.cell(row, col));
            }
        }
    }

    #[test]
    fn rows_cover_the_board() {
        let mut grid = Grid::new(3, 0usize);
        for row in 0..3 {
            for col in 0..3 {
                *grid.cell_mut(row, col) = row * 3 + col;
            }
        }

        let rows: Vec<&[usize]> = grid.rows().collect();
        assert_eq!(vec![&[0, 1, 2][..], &[3, 4, 5][..], &[6, 7, 8][..]], rows);
    }

    #[test]
    fn empty_board_has_no_rows() {
        let grid = Grid::new(0, Square::Empty);
        assert_eq!(0, grid.size());
        assert_eq!(0, grid.rows().count());
    }

    #[test]
    #[should_panic = "outside the 4x4 board"]
    fn out_of_bounds() {
        let grid = Grid::new(4, Square::Empty);
        grid.cell(4, 0);
    }
}
