//! Random start boards for the sliding puzzle.

use std::rc::Rc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::sliding_puzzle::PuzzleGoal;

/// Produces start boards for one goal.
///
/// Seeded generators are reproducible; unseeded ones draw from OS entropy.
#[derive(Debug)]
pub struct PuzzleGenerator {
    goal: Rc<PuzzleGoal>,
    rng: StdRng,
}

impl PuzzleGenerator {
    #[must_use]
    pub fn new(goal: Rc<PuzzleGoal>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { goal, rng }
    }

    #[must_use]
    pub fn goal(&self) -> &Rc<PuzzleGoal> {
        &self.goal
    }

    /// A uniformly random arrangement of the goal's tiles.
    ///
    /// Half of all arrangements cannot reach the goal.
    pub fn random_tiles(&mut self) -> Vec<u8> {
        let mut tiles = self.goal.tiles().to_vec();
        tiles.shuffle(&mut self.rng);
        tiles
    }

    /// A uniformly random arrangement that can reach the goal.
    ///
    /// Unreachable shuffles are repaired by swapping the first two non-blank
    /// tiles, which flips permutation parity without moving the blank.
    pub fn solvable_tiles(&mut self) -> Vec<u8> {
        let mut tiles = self.random_tiles();
        if !self.goal.is_reachable(&tiles) {
            let mut non_blank = tiles
                .iter()
                .enumerate()
                .filter(|&(_, &t)| t != 0)
                .map(|(cell, _)| cell);
            if let (Some(a), Some(b)) = (non_blank.next(), non_blank.next()) {
                tiles.swap(a, b);
            }
        }
        tiles
    }

    /// The goal after `steps` random blank moves, never undoing the previous
    /// move.
    ///
    /// The result is reachable and at most `steps` moves from the goal.
    pub fn scrambled_tiles(&mut self, steps: usize) -> Vec<u8> {
        let size = self.goal.size();
        let mut tiles = self.goal.tiles().to_vec();
        let mut blank = tiles.iter().position(|&t| t == 0).unwrap_or_default();
        let mut previous = None;

        for _ in 0..steps {
            let (row, col) = (blank / size, blank % size);
            let mut options = Vec::with_capacity(4);
            if row > 0 {
                options.push(blank - size);
            }
            if col + 1 < size {
                options.push(blank + 1);
            }
            if row + 1 < size {
                options.push(blank + size);
            }
            if col > 0 {
                options.push(blank - 1);
            }
            options.retain(|&cell| Some(cell) != previous);

            let target = options[self.rng.gen_range(0..options.len())];
            tiles.swap(blank, target);
            previous = Some(blank);
            blank = target;
        }
        tiles
    }
}
