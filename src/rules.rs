use itertools::Itertools;

use crate::grid::{bitcount, digit_mask, Grid};
use crate::topology::{CELLS, TOPOLOGY};
use crate::trace::TraceSink;

/// And the cell's mask with `keep`, reporting whether anything was removed.
/// A cell that just collapsed to one candidate is recorded in the trace.
fn shrink(grid: &mut Grid, cell: usize, keep: u16, trace: &mut dyn TraceSink) -> bool {
    let before = grid.cands[cell];
    let after = before & keep;
    if after == before {
        return false;
    }
    grid.cands[cell] = after;
    if bitcount(after) == 1 {
        trace.record(grid);
    }
    true
}

/// For every solved cell, remove its digit from all peers. Runs on live
/// state; second-order effects are picked up by the outer fixed-point loop.
pub fn eliminate(grid: &mut Grid, trace: &mut dyn TraceSink) -> bool {
    let mut changed = false;
    for cell in 0..CELLS {
        let m = grid.cands[cell];
        if bitcount(m) != 1 {
            continue;
        }
        for &p in &TOPOLOGY.peers[cell] {
            changed |= shrink(grid, p, !m, trace);
        }
    }
    changed
}

/// If a digit fits in exactly one cell of a unit, that cell takes it.
pub fn only_choice(grid: &mut Grid, trace: &mut dyn TraceSink) -> bool {
    let mut changed = false;
    for unit in &TOPOLOGY.units {
        for d in 1..=9 {
            let m = digit_mask(d);
            let mut count = 0;
            let mut place = 0;
            for &cell in unit {
                if grid.cands[cell] & m != 0 {
                    count += 1;
                    place = cell;
                }
            }
            if count == 1 {
                changed |= shrink(grid, place, m, trace);
            }
        }
    }
    changed
}

/// Two cells of a unit sharing an identical two-candidate mask lock those two
/// digits between them: no other cell of that unit may hold either. Pairwise
/// only; applied per unit, so a cell may twin differently in different units.
pub fn naked_twins(grid: &mut Grid, trace: &mut dyn TraceSink) -> bool {
    let mut changed = false;
    for unit in &TOPOLOGY.units {
        for (&a, &b) in unit.iter().tuple_combinations() {
            let m = grid.cands[a];
            if bitcount(m) != 2 || grid.cands[b] != m {
                continue;
            }
            for &cell in unit {
                if cell != a && cell != b {
                    changed |= shrink(grid, cell, !m, trace);
                }
            }
        }
    }
    changed
}
