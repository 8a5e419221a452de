use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{anyhow, Context};
use inertia::Point;
use itertools::Itertools;

/// Reads one `x y` pair per line. Blank lines are skipped; ids count data lines
/// from zero.
pub fn parse_points(reader: impl BufRead) -> anyhow::Result<Vec<Point>> {
    let mut points = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = number + 1;
        let tokens = line.split_whitespace().collect_vec();
        match tokens.as_slice() {
            [] => continue,
            [x, y] => {
                let x: f64 = x
                    .parse()
                    .with_context(|| format!("line {line_no}: bad x coordinate {x:?}"))?;
                let y: f64 = y
                    .parse()
                    .with_context(|| format!("line {line_no}: bad y coordinate {y:?}"))?;
                if !(x.is_finite() && y.is_finite()) {
                    return Err(anyhow!("line {line_no}: coordinates must be finite, got {x} {y}"));
                }
                points.push(Point::new(points.len(), x, y));
            }
            _ => {
                return Err(anyhow!(
                    "line {line_no}: expected two coordinates, found {}",
                    tokens.len()
                ))
            }
        }
    }
    Ok(points)
}

pub fn load_points(path: &Path) -> anyhow::Result<Vec<Point>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    parse_points(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}
