mod generator;
mod grid;
mod palette;
mod solver;

pub use generator::{generate, generate_with_rng, Puzzle};
pub use grid::{Grid, Square};
pub use palette::{color_for, Color, PALETTE};
pub use solver::{solve, Placement, SolverError};
