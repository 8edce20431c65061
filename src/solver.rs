use anyhow::Result;

use crate::grid::{bitcount, digits_of, Grid, Pos};
use crate::rules::{eliminate, naked_twins, only_choice};
use crate::topology::CELLS;
use crate::trace::{NullSink, TraceSink};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveMode {
    /// Constraint propagation only; may stall on hard puzzles.
    Logical,
    /// Propagation plus backtracking search.
    Full,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Solved(Grid),
    /// Propagation reached a fixed point with cells still ambiguous
    /// (Logical mode only).
    Incomplete(Grid),
    Unsolvable,
}

pub struct Solver {
    mode: SolveMode,
    /// Search invocations so far; propagation alone leaves this at zero.
    pub nodes: usize,
}

impl Solver {
    pub fn new(mode: SolveMode) -> Self {
        Self { mode, nodes: 0 }
    }

    pub fn solve(&mut self, grid: &Grid, trace: &mut dyn TraceSink) -> Outcome {
        let mut g = grid.clone();
        if !self.reduce(&mut g, trace) {
            return Outcome::Unsolvable;
        }
        if g.is_solved() {
            return Outcome::Solved(g);
        }
        match self.mode {
            SolveMode::Logical => Outcome::Incomplete(g),
            SolveMode::Full => match self.search(g, trace) {
                Some(solved) => Outcome::Solved(solved),
                None => Outcome::Unsolvable,
            },
        }
    }

    /// Apply eliminate, only-choice and naked-twins until no rule changes any
    /// cell. Masks only ever shrink, so this converges. Returns false as soon
    /// as a full pass leaves some cell with no candidates.
    pub fn reduce(&mut self, grid: &mut Grid, trace: &mut dyn TraceSink) -> bool {
        loop {
            let mut changed = false;
            changed |= eliminate(grid, trace);
            changed |= only_choice(grid, trace);
            changed |= naked_twins(grid, trace);
            if grid.has_contradiction() {
                return false;
            }
            if !changed {
                return true;
            }
        }
    }

    /// Depth-first backtracking over an already-reduced, consistent, unsolved
    /// grid. Each branch gets its own copy; the first solved child wins.
    fn search(&mut self, grid: Grid, trace: &mut dyn TraceSink) -> Option<Grid> {
        self.nodes += 1;
        let cell = branch_cell(&grid);
        for d in digits_of(grid.candidates(cell)) {
            let mut child = grid.clone();
            child.force(cell, d);
            trace.record(&child);
            if !self.reduce(&mut child, trace) {
                continue;
            }
            if child.is_solved() {
                return Some(child);
            }
            if let Some(solved) = self.search(child, trace) {
                return Some(solved);
            }
        }
        None
    }
}

/// Minimum-remaining-values choice: the unsolved cell with the fewest
/// candidates, lowest index on ties. Calling this on a solved grid is a
/// caller bug.
fn branch_cell(grid: &Grid) -> Pos {
    let mut best = None;
    let mut best_n = 10;
    for cell in 0..CELLS {
        let n = bitcount(grid.cands[cell]);
        if n > 1 && n < best_n {
            best_n = n;
            best = Some(cell);
            if n == 2 {
                break;
            }
        }
    }
    Pos::from_idx(best.expect("branch cell requested on a fully solved grid"))
}

/// Parse a compact 81-char grid and run propagation plus search. Errors only
/// on malformed input; an unsolvable puzzle is a normal `Outcome`.
pub fn solve(compact: &str) -> Result<Outcome> {
    let grid = Grid::from_compact(compact)?;
    Ok(Solver::new(SolveMode::Full).solve(&grid, &mut NullSink))
}
