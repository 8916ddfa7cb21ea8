use std::fmt;

use itertools::iproduct;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::{Grid, Square};
use super::palette::{color_for, Color};
use super::solver::{solve, Placement, SolverError};

/// A generated puzzle. Every cell of `regions` carries the color of the
/// region owning it; `solution` marks the queen seeding each region.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Puzzle {
    pub regions: Grid<Color>,
    pub solution: Grid<Square>,
}

/// Generates a puzzle of the given size using the process-wide random source.
/// Fails only when the board has no queen placement (sizes 2 and 3).
pub fn generate(size: usize) -> Result<Puzzle, SolverError> {
    generate_with_rng(size, &mut rand::thread_rng())
}

/// Same as [generate], but draws all randomness from `rng`, so a seeded rng
/// reproduces the same puzzle.
pub fn generate_with_rng(size: usize, rng: &mut impl Rng) -> Result<Puzzle, SolverError> {
    let placement = solve(size)?;
    debug!(
        "queen placement for the {size}x{size} board: {:?}",
        placement.columns()
    );

    let owner = grow_regions(&placement, rng);

    let mut regions = Grid::new(size, color_for(0));
    for (row, col) in iproduct!(0..size, 0..size) {
        let region = owner
            .cell(row, col)
            .expect("region growth claims every cell before it finishes");
        *regions.cell_mut(row, col) = color_for(region);
    }

    let mut solution = Grid::new(size, Square::Empty);
    for (row, col) in placement.cells() {
        *solution.cell_mut(row, col) = Square::Queen;
    }

    Ok(Puzzle { regions, solution })
}

// Multi-source flood fill. One region per queen, identified by the row of its
// queen, which also fixes the order regions take their turns in. Each pass
// gives every region one chance to claim a random unassigned neighbor of a
// random frontier cell; a frontier cell with no unassigned neighbors left
// falls out of the frontier but stays in the region. Regions whose frontier
// empties early stop growing while the others continue, so region sizes can
// end up very uneven. That is intended.
fn grow_regions(placement: &Placement, rng: &mut impl Rng) -> Grid<Option<usize>> {
    let size = placement.size();
    let mut owner: Grid<Option<usize>> = Grid::new(size, None);
    let mut frontiers: Vec<Vec<(usize, usize)>> = Vec::with_capacity(size);
    for (row, col) in placement.cells() {
        *owner.cell_mut(row, col) = Some(row);
        frontiers.push(vec![(row, col)]);
    }

    let mut num_assigned = size;
    let mut passes = 0usize;
    while num_assigned < size * size {
        passes += 1;
        for region in 0..size {
            if frontiers[region].is_empty() {
                continue;
            }
            let picked = rng.gen_range(0..frontiers[region].len());
            let (row, col) = frontiers[region][picked];
            let unassigned: Vec<(usize, usize)> = neighbors(row, col, size)
                .filter(|&(r, c)| owner.cell(r, c).is_none())
                .collect();
            match unassigned.choose(rng) {
                None => {
                    // The picked cell cannot expand anymore. It leaves the
                    // frontier but remains part of the region.
                    frontiers[region].swap_remove(picked);
                }
                Some(&(r, c)) => {
                    *owner.cell_mut(r, c) = Some(region);
                    frontiers[region].push((r, c));
                    num_assigned += 1;
                }
            }
        }
    }
    debug!("partitioned {num_assigned} cells into {size} regions in {passes} passes");

    owner
}

fn neighbors(row: usize, col: usize, size: usize) -> impl Iterator<Item = (usize, usize)> {
    let up = row.checked_sub(1).map(|r| (r, col));
    let down = (row + 1 < size).then_some((row + 1, col));
    let left = col.checked_sub(1).map(|c| (row, c));
    let right = (col + 1 < size).then_some((row, col + 1));
    [up, down, left, right].into_iter().flatten()
}

impl fmt::Display for Puzzle {
    /// Renders one letter per cell (`a`-`j` by palette slot, cycled), with
    /// the letter uppercased on the region's queen cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (colors, squares) in self.regions.rows().zip(self.solution.rows()) {
            for (col, (color, square)) in colors.iter().zip(squares).enumerate() {
                let letter = (b'a' + color.palette_slot() as u8) as char;
                let marker = match square {
                    Square::Queen => letter.to_ascii_uppercase(),
                    Square::Empty => letter,
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{marker}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
