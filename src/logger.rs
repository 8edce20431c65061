use anyhow::Result;
use chrono::Local;
use colored::*;
use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

use crate::grid::Grid;
use crate::trace::TraceSink;

/// Writes one numbered devlog file per solving step, optionally echoing to
/// the console. Doubles as a `TraceSink` so the solver can feed it directly.
pub struct DevLogger {
    dir: PathBuf,
    color: bool,
    step: bool,
    max_logs: usize,
    counter: usize,
}

impl DevLogger {
    pub fn new(dir: impl Into<PathBuf>, color: bool, step: bool, max_logs: usize) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, color, step, max_logs, counter: 0 })
    }

    pub fn log(&mut self, title: &str, details: &str) -> Result<()> {
        if self.max_logs != 0 && self.counter >= self.max_logs {
            return Ok(());
        }
        self.counter += 1;
        let path = self.dir.join(format!("devlog({}).txt", self.counter));

        let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut f = File::create(&path)?;
        writeln!(f, "[{}] {}\n\n{}", ts, title, details)?;

        if self.color {
            println!("{} {}\n{}", "➤".blue().bold(), title.bold(), details);
        } else {
            println!("➤ {}\n{}", title, details);
        }

        if self.step {
            print!("-- press Enter to continue --");
            use std::io::{self, Write as _};
            io::stdout().flush().ok();
            let mut s = String::new();
            io::stdin().read_line(&mut s).ok();
        }
        Ok(())
    }
}

impl TraceSink for DevLogger {
    fn record(&mut self, grid: &Grid) {
        // A failing sink must not disturb the solver.
        self.log(
            &format!("Cell solved ({}/81)", grid.solved_count()),
            &grid.to_pretty_string(),
        )
        .ok();
    }
}
