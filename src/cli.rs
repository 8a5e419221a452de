use std::{path::PathBuf, str::FromStr};

use anyhow::{anyhow, Context};
use clap::{ArgAction, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub columns: usize,
    pub rows: usize,
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            columns: 15,
            rows: 10,
        }
    }
}

impl FromStr for GridSize {
    type Err = anyhow::Error;

    /// `COLUMNSxROWS`, e.g. `15x10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (columns, rows) = s
            .split_once(['x', 'X'])
            .ok_or(anyhow!("grid size {s:?} is not COLUMNSxROWS"))?;
        Ok(Self {
            columns: columns.trim().parse().context("bad column count")?,
            rows: rows.trim().parse().context("bad row count")?,
        })
    }
}

/// Inertial bisection of a 2-D point set
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Command {
    /// File with one whitespace separated `x y` pair per line
    #[arg(long, conflicts_with = "grid")]
    pub input_path: Option<PathBuf>,

    /// Partition a generated COLUMNSxROWS grid instead of a file
    #[arg(long)]
    pub grid: Option<GridSize>,

    /// Number of axes to produce
    #[arg(short, long, default_value_t = 1)]
    pub k: usize,

    /// Print the side code of every point against all axes
    #[arg(long)]
    pub codes: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
