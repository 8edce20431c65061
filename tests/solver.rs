use pretty_assertions::assert_eq;
use sudx::grid::{all_candidates, bitcount, Grid, Pos};
use sudx::topology::TOPOLOGY;
use sudx::{solve, NullSink, Outcome, SnapshotTrace, SolveMode, Solver};

const BENCH: &str =
    "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";
const BENCH_SOLVED: &str =
    "267945381853716249491823576576438192384192657129657438642379815935281764718564923";
// A valid standard-Sudoku solution whose diagonals contain repeats.
const PLAIN_SOLVED: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

fn assert_solved_valid(g: &Grid) {
    for unit in &TOPOLOGY.units {
        let mut seen = 0u16;
        for &cell in unit {
            let m = g.candidates(Pos::from_idx(cell));
            assert_eq!(bitcount(m), 1);
            assert_eq!(seen & m, 0, "duplicate digit in unit");
            seen |= m;
        }
        assert_eq!(seen, all_candidates());
    }
}

#[test]
fn parse_and_format() {
    let g = Grid::from_compact(BENCH).unwrap();
    assert_eq!(g.to_compact(), BENCH);
    assert_eq!(g.solved_count(), BENCH.chars().filter(|c| *c != '.').count());
    assert_eq!(g.candidates_string(Pos { r: 0, c: 0 }), "2");
    assert_eq!(g.candidates_string(Pos { r: 0, c: 1 }), "123456789");
    assert!(g.to_pretty_string().contains('·'));
}

#[test]
fn malformed_input_is_an_error() {
    assert!(Grid::from_compact("123").is_err());
    assert!(Grid::from_compact(&".".repeat(82)).is_err());
    let bad = format!("x{}", ".".repeat(80));
    assert!(Grid::from_compact(&bad).is_err());
}

#[test]
fn benchmark_puzzle_solves() {
    match solve(BENCH).unwrap() {
        Outcome::Solved(g) => {
            assert_eq!(g.to_compact(), BENCH_SOLVED);
            assert!(g.is_valid());
            assert_solved_valid(&g);
        }
        other => panic!("expected Solved, got {other:?}"),
    }
}

#[test]
fn solved_grid_passes_through_unchanged() {
    let grid = Grid::from_compact(BENCH_SOLVED).unwrap();
    let mut solver = Solver::new(SolveMode::Full);
    let mut trace = SnapshotTrace::default();
    match solver.solve(&grid, &mut trace) {
        Outcome::Solved(g) => assert_eq!(g.to_compact(), BENCH_SOLVED),
        other => panic!("expected Solved, got {other:?}"),
    }
    // propagation is a no-op and search never branches
    assert!(trace.snapshots.is_empty());
    assert_eq!(solver.nodes, 0);
}

#[test]
fn duplicate_in_row_is_unsolvable() {
    let dup = format!("22{}", &BENCH[2..]);
    assert_eq!(solve(&dup).unwrap(), Outcome::Unsolvable);
}

#[test]
fn diagonal_constraints_are_enforced() {
    // fine as a plain Sudoku, contradictory once the diagonals are units
    assert_eq!(solve(PLAIN_SOLVED).unwrap(), Outcome::Unsolvable);
}

#[test]
fn empty_grid_is_solved_by_search() {
    let empty = ".".repeat(81);
    let grid = Grid::from_compact(&empty).unwrap();
    let mut solver = Solver::new(SolveMode::Full);
    match solver.solve(&grid, &mut NullSink) {
        Outcome::Solved(g) => assert_solved_valid(&g),
        other => panic!("expected Solved, got {other:?}"),
    }
    assert!(solver.nodes >= 1, "blank grid must branch");
    assert!(solver.nodes < 5_000, "search blew past its expected bound");
}

#[test]
fn logical_mode_reports_incomplete() {
    let empty = ".".repeat(81);
    let grid = Grid::from_compact(&empty).unwrap();
    let mut solver = Solver::new(SolveMode::Logical);
    match solver.solve(&grid, &mut NullSink) {
        Outcome::Incomplete(g) => assert_eq!(g.solved_count(), 0),
        other => panic!("expected Incomplete, got {other:?}"),
    }
}

#[test]
fn trace_ends_at_the_solution() {
    for puzzle in [BENCH.to_string(), ".".repeat(81)] {
        let grid = Grid::from_compact(&puzzle).unwrap();
        let mut solver = Solver::new(SolveMode::Full);
        let mut trace = SnapshotTrace::default();
        let Outcome::Solved(solved) = solver.solve(&grid, &mut trace) else {
            panic!("expected Solved");
        };
        let last = trace.snapshots.last().expect("trace must not be empty");
        assert!(last.is_solved());
        assert_eq!(*last, solved);
    }
}

#[test]
fn solver_is_deterministic() {
    let empty = ".".repeat(81);
    let a = solve(&empty).unwrap();
    let b = solve(&empty).unwrap();
    assert_eq!(a, b);
}

#[test]
fn solve_terminates_within_node_budget() {
    let inputs = [
        BENCH.to_string(),
        BENCH_SOLVED.to_string(),
        PLAIN_SOLVED.to_string(),
        format!("22{}", &BENCH[2..]),
        ".".repeat(81),
    ];
    for input in inputs {
        let grid = Grid::from_compact(&input).unwrap();
        let mut solver = Solver::new(SolveMode::Full);
        solver.solve(&grid, &mut NullSink);
        assert!(solver.nodes < 5_000, "{input}: {} nodes", solver.nodes);
    }
}
