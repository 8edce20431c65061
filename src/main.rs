use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::{fs, path::PathBuf};
use sudx::{logger::DevLogger, Grid, NullSink, Outcome, SolveMode, Solver, TraceSink};

#[derive(Parser, Debug)]
#[command(name = "sudx", version, about = "Diagonal-Sudoku solver with devlogs")]
struct Cli {
    /// Path to a puzzle file (81 chars with 0 or . for blanks). If omitted, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Solving approach
    #[arg(short, long, value_enum, default_value_t = Method::Full)]
    method: Method,

    /// Write a devlog entry for every solved cell
    #[arg(long)]
    trace: bool,

    /// Step-by-step mode (pauses after each devlog step). Press Enter to continue.
    #[arg(long)]
    step: bool,

    /// Maximum devlogs to write (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_logs: usize,

    /// Emit devlogs to console with colors
    #[arg(long)]
    color: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Method {
    Logical,
    Full,
}

fn read_puzzle(input: &Option<PathBuf>) -> Result<String> {
    let s = match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
        None => {
            use std::io::{self, Read};
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let filtered: String = s.chars().filter(|ch| matches!(ch, '0'..='9' | '.')).collect();
    if filtered.len() < 81 {
        bail!("expected at least 81 digits/dots in input (have {})", filtered.len())
    }
    Ok(filtered.chars().take(81).collect())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let puzzle = read_puzzle(&cli.input)?;
    let grid = Grid::from_compact(&puzzle).context("parse puzzle")?;

    let mode = match cli.method {
        Method::Logical => SolveMode::Logical,
        Method::Full => SolveMode::Full,
    };
    let mut solver = Solver::new(mode);

    let mut logger = if cli.trace {
        Some(DevLogger::new("devlogs", cli.color, cli.step, cli.max_logs)?)
    } else {
        None
    };
    let mut null = NullSink;
    let sink: &mut dyn TraceSink = match logger.as_mut() {
        Some(l) => l,
        None => &mut null,
    };

    match solver.solve(&grid, sink) {
        Outcome::Solved(g) => println!("\nSolved grid:\n{}", g.to_pretty_string()),
        Outcome::Incomplete(g) => println!(
            "\nPropagation stalled at {}/81 solved cells:\n{}",
            g.solved_count(),
            g.to_pretty_string()
        ),
        Outcome::Unsolvable => println!("\nNo solution."),
    }
    Ok(())
}
