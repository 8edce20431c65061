pub mod grid;
pub mod logger;
pub mod rules;
pub mod solver;
pub mod topology;
pub mod trace;

pub use grid::{Digit, Grid, Pos};
pub use solver::{solve, Outcome, SolveMode, Solver};
pub use trace::{NullSink, SnapshotTrace, TraceSink};
