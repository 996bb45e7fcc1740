//! Reading grids and coordinates from text.
//!
//! A grid is written one row per line as whitespace separated integers, `0` for an open cell and
//! any other value for an obstacle:
//!
//! ```text
//! 0 0 0
//! 0 1 0
//! 0 0 0
//! ```
//!
//! Blank lines are ignored.
use crate::cell::CellState;
use crate::error::{GridError, Result};
use crate::state_grid::StateGrid;
use grid_util::Point;
use log::{debug, info};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Parses one row. `line` is the 1-based line number used in errors.
pub fn parse_line(line: usize, text: &str) -> Result<Vec<CellState>> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map(CellState::from_code)
                .map_err(|_| GridError::Token {
                    line,
                    token: token.to_owned(),
                })
        })
        .collect()
}

/// Parses a whole grid from a reader.
pub fn parse_grid<R: BufRead>(reader: R) -> Result<StateGrid> {
    let mut rows = Vec::new();
    for (ix, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_line(ix + 1, &line)?);
    }
    StateGrid::from_rows(rows)
}

/// Opens and parses a grid file.
pub fn read_grid_file<P: AsRef<Path>>(path: P) -> Result<StateGrid> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_grid(BufReader::new(file))?;
    info!(
        "Loaded {}x{} grid from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );
    Ok(grid)
}

impl FromStr for StateGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<StateGrid> {
        parse_grid(s.as_bytes())
    }
}

/// Parses a `row column` pair.
pub fn parse_coordinate(text: &str) -> Result<Point> {
    let mut tokens = text.split_whitespace().map(str::parse::<i32>);
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => {
            debug!("Parsed coordinate ({}, {})", x, y);
            Ok(Point::new(x, y))
        }
        _ => Err(GridError::Coordinate(text.trim().to_owned())),
    }
}

/// Reads coordinates as a stream of whitespace separated integers, two per coordinate. Line
/// breaks carry no meaning, so `0 0 2 2` on one line and one integer per line read the same.
#[derive(Debug)]
pub struct CoordinateReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> CoordinateReader<R> {
    pub fn new(reader: R) -> CoordinateReader<R> {
        CoordinateReader {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Reads the next `row column` pair. Tokens past it stay buffered for the next call.
    pub fn next_coordinate(&mut self) -> Result<Point> {
        let x = self.next_integer()?;
        let y = self.next_integer()?;
        debug!("Read coordinate ({}, {})", x, y);
        Ok(Point::new(x, y))
    }

    fn next_integer(&mut self) -> Result<i32> {
        let token = self.next_token()?;
        token.parse().map_err(|_| GridError::Coordinate(token))
    }

    fn next_token(&mut self) -> Result<String> {
        let mut line = String::new();
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(GridError::Coordinate(String::new()));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
