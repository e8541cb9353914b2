//! N×N sliding-tile puzzle (the 8-puzzle when N = 3).
//!
//! Boards are stored row-major with `0` as the blank. Every board holds an
//! `Rc` to the shared [`PuzzleGoal`], which also caches each tile's home cell
//! so the heuristic is a single pass.

use std::rc::Rc;

use pathwise_kernel::contract::ProblemState;

use super::WorldError;
use crate::contract::World;

/// Largest supported board edge. Tiles are stored as `u8`.
pub const MAX_BOARD_SIZE: usize = 15;

/// Remaining-cost estimate used by [`SlidingPuzzle::heuristic`].
///
/// Both ignore the blank, so both are admissible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PuzzleHeuristic {
    /// Sum of row and column distances of each tile from its home cell.
    #[default]
    Manhattan,
    /// Number of tiles not on their home cell.
    Hamming,
}

impl PuzzleHeuristic {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Hamming => "hamming",
        }
    }
}

/// The target board shared by every state of one puzzle.
#[derive(Debug, PartialEq, Eq)]
pub struct PuzzleGoal {
    size: usize,
    tiles: Vec<u8>,
    /// `home[tile]` is the goal cell of `tile`.
    home: Vec<usize>,
    heuristic: PuzzleHeuristic,
}

impl PuzzleGoal {
    /// # Errors
    ///
    /// Returns [`WorldError`] if `size` is out of range or `tiles` is not a
    /// permutation of `0..size*size`.
    pub fn new(
        size: usize,
        tiles: Vec<u8>,
        heuristic: PuzzleHeuristic,
    ) -> Result<Rc<Self>, WorldError> {
        check_tiles(size, &tiles)?;
        let mut home = vec![0; tiles.len()];
        for (cell, &tile) in tiles.iter().enumerate() {
            home[usize::from(tile)] = cell;
        }
        Ok(Rc::new(Self {
            size,
            tiles,
            home,
            heuristic,
        }))
    }

    /// Tiles `1..N²` in reading order, blank last.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::BoardSize`] if `size` is out of range.
    pub fn standard(size: usize, heuristic: PuzzleHeuristic) -> Result<Rc<Self>, WorldError> {
        Self::new(size, standard_tiles(size)?, heuristic)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    #[must_use]
    pub fn heuristic(&self) -> PuzzleHeuristic {
        self.heuristic
    }

    /// The solved board as a searchable state.
    #[must_use]
    pub fn state(self: &Rc<Self>) -> SlidingPuzzle {
        SlidingPuzzle {
            tiles: self.tiles.clone(),
            blank: self.home[0],
            goal: Rc::clone(self),
        }
    }

    /// Whether `tiles` can be slid into this goal.
    ///
    /// A board is reachable iff the parity of the permutation mapping it onto
    /// the goal equals the parity of the blank's Manhattan distance to its
    /// home cell. Holds for every board size.
    ///
    /// `tiles` must already be a valid board of the same size.
    #[must_use]
    pub fn is_reachable(&self, tiles: &[u8]) -> bool {
        // Cell i currently holds a tile whose home is target[i].
        let target: Vec<usize> = tiles.iter().map(|&t| self.home[usize::from(t)]).collect();
        let mut seen = vec![false; target.len()];
        let mut cycles = 0;
        for start in 0..target.len() {
            if seen[start] {
                continue;
            }
            cycles += 1;
            let mut cell = start;
            while !seen[cell] {
                seen[cell] = true;
                cell = target[cell];
            }
        }
        let permutation_odd = (target.len() - cycles) % 2 == 1;

        let blank = tiles.iter().position(|&t| t == 0).unwrap_or_default();
        let blank_odd = self.distance(blank, self.home[0]) % 2 == 1;
        permutation_odd == blank_odd
    }

    fn distance(&self, a: usize, b: usize) -> usize {
        (a / self.size).abs_diff(b / self.size) + (a % self.size).abs_diff(b % self.size)
    }
}

/// `[1, 2, ..., size*size - 1, 0]`.
///
/// # Errors
///
/// Returns [`WorldError::BoardSize`] if `size` is out of range.
pub fn standard_tiles(size: usize) -> Result<Vec<u8>, WorldError> {
    check_size(size)?;
    let cells = size * size;
    Ok((1..cells)
        .chain(std::iter::once(0))
        .map(|t| u8::try_from(t).unwrap_or(u8::MAX))
        .collect())
}

fn check_size(size: usize) -> Result<(), WorldError> {
    if (2..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(WorldError::BoardSize {
            size,
            max: MAX_BOARD_SIZE,
        })
    }
}

fn check_tiles(size: usize, tiles: &[u8]) -> Result<(), WorldError> {
    check_size(size)?;
    let cells = size * size;
    if tiles.len() != cells {
        return Err(WorldError::TileCount {
            expected: cells,
            actual: tiles.len(),
        });
    }
    let mut seen = vec![false; cells];
    for &tile in tiles {
        match seen.get_mut(usize::from(tile)) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(WorldError::NotAPermutation { cells }),
        }
    }
    Ok(())
}

/// One board configuration.
#[derive(Debug, Clone)]
pub struct SlidingPuzzle {
    tiles: Vec<u8>,
    blank: usize,
    goal: Rc<PuzzleGoal>,
}

impl SlidingPuzzle {
    /// # Errors
    ///
    /// Returns [`WorldError`] if `tiles` is not a board of the goal's size.
    /// Reachability is not checked; see [`PuzzleGoal::is_reachable`].
    pub fn new(tiles: Vec<u8>, goal: &Rc<PuzzleGoal>) -> Result<Self, WorldError> {
        check_tiles(goal.size, &tiles)?;
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or_default();
        Ok(Self {
            tiles,
            blank,
            goal: Rc::clone(goal),
        })
    }

    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Cell index of the blank.
    #[must_use]
    pub fn blank(&self) -> usize {
        self.blank
    }

    #[must_use]
    pub fn goal(&self) -> &Rc<PuzzleGoal> {
        &self.goal
    }

    #[must_use]
    pub fn manhattan(&self) -> u32 {
        let total: usize = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(cell, &tile)| self.goal.distance(cell, self.goal.home[usize::from(tile)]))
            .sum();
        u32::try_from(total).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn hamming(&self) -> u32 {
        let misplaced = self
            .tiles
            .iter()
            .zip(&self.goal.tiles)
            .filter(|&(&tile, &home)| tile != 0 && tile != home)
            .count();
        u32::try_from(misplaced).unwrap_or(u32::MAX)
    }

    fn slide(&self, target: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Self {
            tiles,
            blank: target,
            goal: Rc::clone(&self.goal),
        }
    }
}

impl ProblemState for SlidingPuzzle {
    fn heuristic(&self) -> u32 {
        match self.goal.heuristic {
            PuzzleHeuristic::Manhattan => self.manhattan(),
            PuzzleHeuristic::Hamming => self.hamming(),
        }
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }

    /// Blank moves up, right, down, left, skipping moves off the board.
    fn successors(&self) -> Vec<Self> {
        let n = self.goal.size;
        let (row, col) = (self.blank / n, self.blank % n);
        let mut next = Vec::with_capacity(4);
        if row > 0 {
            next.push(self.slide(self.blank - n));
        }
        if col + 1 < n {
            next.push(self.slide(self.blank + 1));
        }
        if row + 1 < n {
            next.push(self.slide(self.blank + n));
        }
        if col > 0 {
            next.push(self.slide(self.blank - 1));
        }
        next
    }

    fn is_goal(&self) -> bool {
        self.tiles == self.goal.tiles
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for row in self.tiles.chunks(self.goal.size) {
            for tile in row {
                out.push_str(&tile.to_string());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

/// A sliding-puzzle instance: a start board and its goal.
#[derive(Debug, Clone)]
pub struct SlidingPuzzleWorld {
    start: SlidingPuzzle,
}

impl SlidingPuzzleWorld {
    /// # Errors
    ///
    /// Returns [`WorldError`] if `tiles` is not a board of the goal's size.
    pub fn new(tiles: Vec<u8>, goal: &Rc<PuzzleGoal>) -> Result<Self, WorldError> {
        Ok(Self {
            start: SlidingPuzzle::new(tiles, goal)?,
        })
    }

    #[must_use]
    pub fn start(&self) -> &SlidingPuzzle {
        &self.start
    }

    /// Whether the start board can reach the goal at all.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.start.goal.is_reachable(&self.start.tiles)
    }
}

impl World for SlidingPuzzleWorld {
    type State = SlidingPuzzle;

    fn world_id(&self) -> &str {
        "sliding_puzzle"
    }

    fn initial_state(&self) -> SlidingPuzzle {
        self.start.clone()
    }

    fn parameters(&self) -> serde_json::Value {
        let goal = &self.start.goal;
        serde_json::json!({
            "goal": goal.tiles,
            "heuristic": goal.heuristic.as_str(),
            "initial": self.start.tiles,
            "size": goal.size,
        })
    }
}
