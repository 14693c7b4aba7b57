//! Plain-text grid format
//!
//! ```text
//! n m
//! <n lines of m integers>
//! [r c]
//! ```
//!
//! The first line gives the number of rows and columns. Each grid line
//! holds `m` whitespace-separated integers; the obstacle marker (1 by
//! default) denotes an obstacle and every other value open ground. An
//! optional final line names a seed cell as `row col`. Blank lines are
//! ignored everywhere.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;
use terrain_core::{CellState, Grid, OBSTACLE_MARKER};
use tracing::debug;

/// Options for the text grid format
#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Marker that denotes an obstacle
    pub obstacle_marker: i64,
    /// Marker written for open cells
    pub open_marker: i64,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            obstacle_marker: OBSTACLE_MARKER,
            open_marker: 0,
        }
    }
}

impl TextOptions {
    /// Set the obstacle marker
    pub fn with_obstacle_marker(mut self, marker: i64) -> Self {
        self.obstacle_marker = marker;
        self
    }

    /// Set the open-cell marker used when writing
    pub fn with_open_marker(mut self, marker: i64) -> Self {
        self.open_marker = marker;
        self
    }
}

/// A grid read from text, with the optional seed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridInput {
    pub grid: Grid,
    pub seed: Option<(usize, usize)>,
}

fn parse_error(line: usize, message: impl Into<String>) -> IoError {
    IoError::Parse {
        line,
        message: message.into(),
    }
}

fn parse_tokens<T: FromStr>(line: usize, text: &str) -> IoResult<Vec<T>> {
    text.split_whitespace()
        .map(|tok| {
            tok.parse::<T>()
                .map_err(|_| parse_error(line, format!("invalid number '{tok}'")))
        })
        .collect()
}

fn parse_pair(line: usize, text: &str, what: &str) -> IoResult<(usize, usize)> {
    match parse_tokens::<usize>(line, text)?.as_slice() {
        &[a, b] => Ok((a, b)),
        other => Err(parse_error(
            line,
            format!("{what} must have 2 values, found {}", other.len()),
        )),
    }
}

/// Read a grid in the text format
///
/// # Arguments
/// * `reader`  - Source of the text
/// * `options` - Marker configuration
///
/// # Errors
/// [`IoError::Parse`] for a malformed header, row or seed line, or for
/// trailing data after the seed line.
pub fn read_grid_text<R: BufRead>(reader: R, options: &TextOptions) -> IoResult<GridInput> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push((i + 1, line));
        }
    }
    let mut lines = lines.into_iter();

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| parse_error(1, "missing header line"))?;
    let (n_rows, n_cols) = parse_pair(header_no, &header, "header")?;
    if n_rows == 0 || n_cols == 0 {
        return Err(parse_error(
            header_no,
            format!("grid must be at least 1x1, got {n_rows}x{n_cols}"),
        ));
    }
    if n_rows.checked_mul(n_cols).is_none() {
        return Err(parse_error(
            header_no,
            format!("{n_rows}x{n_cols} grid is too large"),
        ));
    }

    let mut rows: Vec<Vec<i64>> = Vec::new();
    let mut last_line = header_no;
    for _ in 0..n_rows {
        let (line_no, text) = lines.next().ok_or_else(|| {
            parse_error(
                last_line,
                format!("expected {n_rows} grid rows, found {}", rows.len()),
            )
        })?;
        let values = parse_tokens::<i64>(line_no, &text)?;
        if values.len() != n_cols {
            return Err(parse_error(
                line_no,
                format!("row has {} values, expected {n_cols}", values.len()),
            ));
        }
        rows.push(values);
        last_line = line_no;
    }

    let seed = match lines.next() {
        Some((line_no, text)) => Some(parse_pair(line_no, &text, "seed line")?),
        None => None,
    };
    if let Some((line_no, _)) = lines.next() {
        return Err(parse_error(line_no, "unexpected data after seed line"));
    }

    let grid = Grid::from_markers(&rows, options.obstacle_marker)?;
    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        obstacles = grid.count_obstacles(),
        seed = ?seed,
        "read text grid"
    );
    Ok(GridInput { grid, seed })
}

/// Read a text grid from a file path
pub fn read_grid_file<P: AsRef<Path>>(path: P, options: &TextOptions) -> IoResult<GridInput> {
    let file = File::open(path.as_ref())?;
    read_grid_text(BufReader::new(file), options)
}

/// Write a grid in the text format
///
/// Region labels are not part of the format and are dropped. No seed
/// line is written.
///
/// # Errors
/// [`IoError::InvalidData`] if the open and obstacle markers are equal.
pub fn write_grid_text<W: Write>(grid: &Grid, mut writer: W, options: &TextOptions) -> IoResult<()> {
    if options.open_marker == options.obstacle_marker {
        return Err(IoError::InvalidData(format!(
            "open and obstacle markers are both {}",
            options.open_marker
        )));
    }

    writeln!(writer, "{} {}", grid.rows(), grid.cols())?;
    for row in (0..grid.rows()).filter_map(|r| grid.row(r)) {
        let line: Vec<String> = row
            .iter()
            .map(|c| match c {
                CellState::Obstacle => options.obstacle_marker.to_string(),
                CellState::Open(_) => options.open_marker.to_string(),
            })
            .collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    Ok(())
}

/// Write the labeled view of a grid
///
/// One line per row, cells separated by a space: `#` for an obstacle,
/// `.` for unlabeled open ground, and the region id otherwise.
pub fn write_labels<W: Write>(grid: &Grid, mut writer: W) -> IoResult<()> {
    for row in (0..grid.rows()).filter_map(|r| grid.row(r)) {
        let line: Vec<String> = row
            .iter()
            .map(|c| match c {
                CellState::Obstacle => "#".to_string(),
                CellState::Open(None) => ".".to_string(),
                CellState::Open(Some(id)) => id.to_string(),
            })
            .collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    Ok(())
}
