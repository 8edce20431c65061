use crate::grid::Grid;

/// Observer of the solving process. `record` is called with the whole board
/// each time a cell collapses to a single candidate (including forced branch
/// assignments). Purely observational: a sink must never influence solving.
pub trait TraceSink {
    fn record(&mut self, grid: &Grid);
}

/// Discards every snapshot.
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&mut self, _grid: &Grid) {}
}

/// Keeps one board snapshot per solved cell, for replay or visualization.
#[derive(Debug, Default)]
pub struct SnapshotTrace {
    pub snapshots: Vec<Grid>,
}

impl TraceSink for SnapshotTrace {
    fn record(&mut self, grid: &Grid) {
        self.snapshots.push(grid.clone());
    }
}
