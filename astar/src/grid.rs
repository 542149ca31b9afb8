use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The state of a single cell in the grid.
///
/// A search only ever moves a cell along `Empty -> Closed -> Path`, obstacles are never touched.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum State {
    #[default]
    Empty,
    Obstacle,
    /// Added to the open set (and therefore never added again)
    Closed,
    /// Expanded by the search
    Path,
    Start,
    Finish,
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                State::Obstacle => "⛰️   ",
                State::Path => "🚗   ",
                State::Start => "🚦   ",
                State::Finish => "🏁   ",
                _ => "0   ",
            }
        )
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// All directions in the order neighbors are expanded.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Up => "up",
                Direction::Left => "left",
                Direction::Down => "down",
                Direction::Right => "right",
            }
        )
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighboring point in the given direction, `None` if it would leave the positive quadrant.
    /// The upper bounds are checked by the grid.
    pub fn step(self, direction: Direction) -> Option<Point> {
        match direction {
            Direction::Up => self.row.checked_sub(1).map(|row| Point { row, ..self }),
            Direction::Left => self.col.checked_sub(1).map(|col| Point { col, ..self }),
            Direction::Down => self.row.checked_add(1).map(|row| Point { row, ..self }),
            Direction::Right => self.col.checked_add(1).map(|col| Point { col, ..self }),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular grid of cells (a vec in a vec).
///
/// Rows can end up shorter than their neighbors when the loader had to truncate a malformed line,
/// so every access is checked against the length of the row it lands in.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<State>>,
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![vec![State::Empty; columns]; rows],
        }
    }

    pub fn from_rows(cells: Vec<Vec<State>>) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// An empty grid is what a failed search hands to the renderer.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, point: Point) -> Option<State> {
        self.cells
            .get(point.row)
            .and_then(|row| row.get(point.col))
            .copied()
    }

    /// Overwrite the state of a cell. Returns false (and does nothing) if the point is outside the grid.
    pub fn set(&mut self, point: Point, state: State) -> bool {
        match self
            .cells
            .get_mut(point.row)
            .and_then(|row| row.get_mut(point.col))
        {
            Some(cell) => {
                *cell = state;
                true
            }
            None => false,
        }
    }

    /// True iff the point is on the grid and the cell is still `Empty`.
    pub fn is_valid(&self, point: Point) -> bool {
        self.get(point) == Some(State::Empty)
    }

    pub fn count(&self, state: State) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == state)
            .count()
    }

    /// Clear all search bookkeeping so the grid can be searched again.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if *cell != State::Obstacle {
                *cell = State::Empty;
            }
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Free-standing form of [`Grid::is_valid`].
pub fn is_valid(point: Point, grid: &Grid) -> bool {
    grid.is_valid(point)
}
