use thiserror::Error;

mod conflicts;
use conflicts::Conflicts;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SolverError {
    #[error("no valid placement of {0} queens on a {0}x{0} board")]
    NotSolvable(usize),
}

/// A valid queen placement for a square board: the queen in row `r` stands in
/// column `columns()[r]`. No two queens share a column or a diagonal.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Placement {
    columns: Vec<usize>,
}

impl Placement {
    #[inline]
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn column(&self, row: usize) -> usize {
        self.columns[row]
    }

    #[inline]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Iterates over the queen cells as `(row, col)` pairs, top row first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns.iter().copied().enumerate()
    }
}

/// Finds the first valid placement of `size` queens on a `size` x `size`
/// board, trying columns in ascending order per row. Fully deterministic: the
/// same `size` always yields the same placement.
///
/// `size == 0` trivially succeeds with an empty placement. The only board
/// sizes without a solution are 2 and 3; those return
/// [SolverError::NotSolvable].
pub fn solve(size: usize) -> Result<Placement, SolverError> {
    let mut columns = Vec::with_capacity(size);
    let mut conflicts = Conflicts::new(size);
    if !_solve(0, size, &mut columns, &mut conflicts) {
        return Err(SolverError::NotSolvable(size));
    }
    assert_eq!(size, columns.len());
    Ok(Placement { columns })
}

// Invariant:
//  - When `_solve` returns false, `columns` and `conflicts` are unchanged. Any
//    queens placed during the attempt have been removed again.
fn _solve(row: usize, size: usize, columns: &mut Vec<usize>, conflicts: &mut Conflicts) -> bool {
    if row == size {
        // Every row holds a queen. The board is fully solved.
        return true;
    }
    for col in 0..size {
        if conflicts.is_free(row, col) {
            conflicts.place(row, col);
            columns.push(col);
            if _solve(row + 1, size, columns, conflicts) {
                return true;
            }

            // Undo before trying the next column
            columns.pop();
            conflicts.remove(row, col);
        }
    }
    false
}
