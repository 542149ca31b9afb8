use std::path::Path;

use anyhow::Context;
use log::debug;

use crate::grid::{Grid, State};

/// Parse one line of comma separated integers, `0` is an empty cell and anything else an obstacle.
///
/// The row stops at the first token that is not an integer. A trailing comma is allowed.
pub fn parse_line(line: &str) -> Vec<State> {
    let mut row = Vec::new();
    let mut tokens = line.split(',').map(str::trim).peekable();

    while let Some(token) = tokens.next() {
        if token.is_empty() && tokens.peek().is_none() {
            break;
        }

        match token.parse::<i64>() {
            Ok(0) => row.push(State::Empty),
            Ok(_) => row.push(State::Obstacle),
            Err(e) => {
                debug!("truncating row at {:?}: {}", token, e);
                break;
            }
        }
    }

    row
}

pub fn parse_board(text: &str) -> Grid {
    Grid::from_rows(text.lines().map(parse_line).collect())
}

pub fn read_board(path: impl AsRef<Path>) -> Result<Grid, anyhow::Error> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read board {}", path.display()))?;

    let grid = parse_board(&text);
    debug!("read {} rows from {}", grid.rows(), path.display());

    Ok(grid)
}
