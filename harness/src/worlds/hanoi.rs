//! Tower of Hanoi on any number of pegs.
//!
//! Disks are numbered `1..=n` by size. Each peg lists its disks bottom
//! first, so a well-formed peg is strictly decreasing.

use std::rc::Rc;

use pathwise_kernel::contract::ProblemState;

use super::WorldError;
use crate::contract::World;

pub const MAX_PEGS: usize = 26;
pub const MAX_DISKS: usize = 32;

/// Target arrangement shared by every state of one tower.
#[derive(Debug, PartialEq, Eq)]
pub struct TowerGoal {
    pegs: Vec<Vec<u8>>,
    /// `home[disk]` is the goal peg of `disk`. Index 0 is unused.
    home: Vec<usize>,
}

impl TowerGoal {
    /// # Errors
    ///
    /// Returns [`WorldError`] if `pegs` is not a well-formed tower.
    pub fn new(pegs: Vec<Vec<u8>>) -> Result<Rc<Self>, WorldError> {
        let disks = check_pegs(&pegs)?;
        let mut home = vec![0; disks + 1];
        for (peg, stack) in pegs.iter().enumerate() {
            for &disk in stack {
                home[usize::from(disk)] = peg;
            }
        }
        Ok(Rc::new(Self { pegs, home }))
    }

    #[must_use]
    pub fn pegs(&self) -> &[Vec<u8>] {
        &self.pegs
    }

    #[must_use]
    pub fn disk_count(&self) -> usize {
        self.home.len() - 1
    }
}

/// Number of disks if `pegs` is a valid tower.
fn check_pegs(pegs: &[Vec<u8>]) -> Result<usize, WorldError> {
    if !(3..=MAX_PEGS).contains(&pegs.len()) {
        return Err(WorldError::PegCount {
            pegs: pegs.len(),
            max: MAX_PEGS,
        });
    }
    let disks: usize = pegs.iter().map(Vec::len).sum();
    if !(1..=MAX_DISKS).contains(&disks) {
        return Err(WorldError::DiskCount {
            disks,
            max: MAX_DISKS,
        });
    }
    let mut seen = vec![false; disks + 1];
    for (peg, stack) in pegs.iter().enumerate() {
        if stack.windows(2).any(|pair| pair[0] <= pair[1]) {
            return Err(WorldError::MisStacked { peg });
        }
        for &disk in stack {
            match seen.get_mut(usize::from(disk)) {
                Some(slot) if disk != 0 && !*slot => *slot = true,
                _ => return Err(WorldError::DiskSet { disks }),
            }
        }
    }
    Ok(disks)
}

/// One arrangement of disks on pegs.
#[derive(Debug, Clone)]
pub struct Tower {
    pegs: Vec<Vec<u8>>,
    goal: Rc<TowerGoal>,
}

impl Tower {
    /// # Errors
    ///
    /// Returns [`WorldError`] if `pegs` is malformed or does not hold the
    /// goal's disks on the goal's number of pegs.
    pub fn new(pegs: Vec<Vec<u8>>, goal: &Rc<TowerGoal>) -> Result<Self, WorldError> {
        let disks = check_pegs(&pegs)?;
        if disks != goal.disk_count() || pegs.len() != goal.pegs.len() {
            return Err(WorldError::TowerMismatch);
        }
        Ok(Self {
            pegs,
            goal: Rc::clone(goal),
        })
    }

    /// All `disks` on the first peg, to be moved to the last.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if either count is out of range.
    pub fn standard(disks: usize, pegs: usize) -> Result<Self, WorldError> {
        if !(1..=MAX_DISKS).contains(&disks) {
            return Err(WorldError::DiskCount {
                disks,
                max: MAX_DISKS,
            });
        }
        if !(3..=MAX_PEGS).contains(&pegs) {
            return Err(WorldError::PegCount {
                pegs,
                max: MAX_PEGS,
            });
        }
        let stack: Vec<u8> = (1..=disks)
            .rev()
            .map(|d| u8::try_from(d).unwrap_or(u8::MAX))
            .collect();

        let mut start = vec![Vec::new(); pegs];
        start[0].clone_from(&stack);
        let mut target = vec![Vec::new(); pegs];
        target[pegs - 1] = stack;

        let goal = TowerGoal::new(target)?;
        Self::new(start, &goal)
    }

    #[must_use]
    pub fn pegs(&self) -> &[Vec<u8>] {
        &self.pegs
    }

    #[must_use]
    pub fn goal(&self) -> &Rc<TowerGoal> {
        &self.goal
    }
}

impl ProblemState for Tower {
    /// Disks not on their goal peg. Each needs at least one move.
    fn heuristic(&self) -> u32 {
        let misplaced = self
            .pegs
            .iter()
            .enumerate()
            .flat_map(|(peg, stack)| stack.iter().map(move |&disk| (peg, disk)))
            .filter(|&(peg, disk)| self.goal.home[usize::from(disk)] != peg)
            .count();
        u32::try_from(misplaced).unwrap_or(u32::MAX)
    }

    fn is_equal(&self, other: &Self) -> bool {
        self.pegs == other.pegs
    }

    /// Every legal single-disk move, by source peg then destination peg.
    fn successors(&self) -> Vec<Self> {
        let mut next = Vec::new();
        for (from, stack) in self.pegs.iter().enumerate() {
            let Some(&disk) = stack.last() else {
                continue;
            };
            for (to, dest) in self.pegs.iter().enumerate() {
                if to == from || dest.last().is_some_and(|&top| top < disk) {
                    continue;
                }
                let mut pegs = self.pegs.clone();
                pegs[from].pop();
                pegs[to].push(disk);
                next.push(Self {
                    pegs,
                    goal: Rc::clone(&self.goal),
                });
            }
        }
        next
    }

    fn is_goal(&self) -> bool {
        self.pegs == self.goal.pegs
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for (label, stack) in ('A'..='Z').zip(&self.pegs) {
            out.push(label);
            out.push_str(" |");
            for disk in stack {
                out.push(' ');
                out.push_str(&disk.to_string());
            }
            out.push('\n');
        }
        out
    }
}

/// A Tower of Hanoi instance.
#[derive(Debug, Clone)]
pub struct HanoiWorld {
    start: Tower,
}

impl HanoiWorld {
    /// # Errors
    ///
    /// Returns [`WorldError`] if either count is out of range.
    pub fn standard(disks: usize, pegs: usize) -> Result<Self, WorldError> {
        Ok(Self {
            start: Tower::standard(disks, pegs)?,
        })
    }

    /// Start from an arbitrary legal tower; its goal comes with it.
    #[must_use]
    pub fn from_tower(start: Tower) -> Self {
        Self { start }
    }

    #[must_use]
    pub fn start(&self) -> &Tower {
        &self.start
    }
}

impl World for HanoiWorld {
    type State = Tower;

    fn world_id(&self) -> &str {
        "hanoi"
    }

    fn initial_state(&self) -> Tower {
        self.start.clone()
    }

    fn parameters(&self) -> serde_json::Value {
        serde_json::json!({
            "disks": self.start.goal.disk_count(),
            "goal": self.start.goal.pegs,
            "initial": self.start.pegs,
            "pegs": self.start.pegs.len(),
        })
    }
}
