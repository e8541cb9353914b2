//! Demonstration worlds for the harness runner.

pub mod hanoi;
pub mod puzzle_generator;
pub mod sliding_puzzle;

/// Malformed world parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("board size {size} is outside 2..={max}")]
    BoardSize { size: usize, max: usize },

    #[error("expected {expected} tiles, got {actual}")]
    TileCount { expected: usize, actual: usize },

    #[error("tiles are not a permutation of 0..{cells}")]
    NotAPermutation { cells: usize },

    #[error("peg count {pegs} is outside 3..={max}")]
    PegCount { pegs: usize, max: usize },

    #[error("disk count {disks} is outside 1..={max}")]
    DiskCount { disks: usize, max: usize },

    #[error("disks must be numbered 1..={disks} with no repeats")]
    DiskSet { disks: usize },

    #[error("peg {peg} is not stacked largest-first")]
    MisStacked { peg: usize },

    #[error("towers do not hold the same disks on the same number of pegs")]
    TowerMismatch,
}
