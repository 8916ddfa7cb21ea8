use bitvec::prelude::*;

/// Occupancy sets for the three lines a queen attacks along: its column, its
/// `row - col` diagonal, and its `row + col` diagonal. One bit per line gives
/// O(1) conflict checks while the search walks the rows top to bottom.
pub struct Conflicts {
    size: usize,
    cols: BitVec,
    // `row - col` is constant along top-left to bottom-right diagonals.
    // Shifted by `size - 1`, it indexes 0..2*size-1.
    diag_down: BitVec,
    // `row + col` is constant along bottom-left to top-right diagonals.
    diag_up: BitVec,
}

impl Conflicts {
    pub fn new(size: usize) -> Self {
        let num_diagonals = (2 * size).saturating_sub(1);
        Conflicts {
            size,
            cols: bitvec![0; size],
            diag_down: bitvec![0; num_diagonals],
            diag_up: bitvec![0; num_diagonals],
        }
    }

    fn diag_down_index(&self, row: usize, col: usize) -> usize {
        row + self.size - 1 - col
    }

    fn diag_up_index(row: usize, col: usize) -> usize {
        row + col
    }

    pub fn is_free(&self, row: usize, col: usize) -> bool {
        !self.cols[col]
            && !self.diag_down[self.diag_down_index(row, col)]
            && !self.diag_up[Self::diag_up_index(row, col)]
    }

    pub fn place(&mut self, row: usize, col: usize) {
        self.set(row, col, true);
    }

    pub fn remove(&mut self, row: usize, col: usize) {
        self.set(row, col, false);
    }

    fn set(&mut self, row: usize, col: usize, occupied: bool) {
        let diag_down = self.diag_down_index(row, col);
        self.cols.set(col, occupied);
        self.diag_down.set(diag_down, occupied);
        self.diag_up.set(Self::diag_up_index(row, col), occupied);
    }
}
