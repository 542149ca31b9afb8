//! A* search over a 4-connected occupancy grid.
//!
//! The grid is the only bookkeeping structure: cells are closed when they enter the open set and
//! turned into path cells when they are expanded.

pub mod find;
pub mod grid;
pub mod util;

pub use find::{
    add_to_open, expand_neighbors, heuristic, search, Node, OpenSet, Search, SearchResult,
    SearchState,
};
pub use grid::{is_valid, Direction, Grid, Point, State};
