use itertools::Itertools;
use once_cell::sync::Lazy;

/// Number of cells on the board.
pub const CELLS: usize = 81;
/// 9 rows + 9 columns + 9 boxes + 2 diagonals.
pub const UNITS: usize = 29;

/// Fixed structural data of a 9x9 diagonal-Sudoku board, computed once at
/// first use and read-only afterwards.
pub struct Topology {
    /// Each unit lists its 9 cell indices in row-major order.
    pub units: [[usize; 9]; UNITS],
    /// Indices into `units` for every unit a cell belongs to.
    pub units_of: Vec<Vec<usize>>,
    /// All cells sharing at least one unit with the cell, excluding itself.
    pub peers: Vec<Vec<usize>>,
}

pub static TOPOLOGY: Lazy<Topology> = Lazy::new(Topology::build);

impl Topology {
    fn build() -> Self {
        let mut units = [[0usize; 9]; UNITS];
        for r in 0..9 {
            for c in 0..9 {
                units[r][c] = r * 9 + c;
                units[9 + c][r] = r * 9 + c;
            }
        }
        for b in 0..9 {
            let (br, bc) = (b / 3 * 3, b % 3 * 3);
            for i in 0..9 {
                units[18 + b][i] = (br + i / 3) * 9 + bc + i % 3;
            }
        }
        for i in 0..9 {
            units[27][i] = i * 9 + i; // main diagonal
            units[28][i] = i * 9 + (8 - i); // anti-diagonal
        }

        let mut units_of = vec![Vec::new(); CELLS];
        for (u, unit) in units.iter().enumerate() {
            for &cell in unit {
                units_of[cell].push(u);
            }
        }

        let peers = (0..CELLS)
            .map(|cell| {
                units_of[cell]
                    .iter()
                    .flat_map(|&u| units[u])
                    .filter(|&p| p != cell)
                    .sorted_unstable()
                    .dedup()
                    .collect()
            })
            .collect();

        Self { units, units_of, peers }
    }
}
