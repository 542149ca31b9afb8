use std::{cmp::Ordering, collections::BinaryHeap};

use log::{debug, info, warn};

use crate::grid::{Direction, Grid, Point, State};

/// Manhattan distance between two points. Admissible and consistent for 4-connected unit-cost moves.
///
/// Saturates at `usize::MAX` for points at opposite ends of the coordinate range.
pub fn heuristic(a: Point, b: Point) -> usize {
    a.row.abs_diff(b.row).saturating_add(a.col.abs_diff(b.col))
}

/// A node on the frontier
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Node {
    pub point: Point,
    /// cost from the start
    pub g: usize,
    /// estimated cost to the goal
    pub h: usize,
}

impl Node {
    pub fn new(point: Point, g: usize, h: usize) -> Self {
        Self { point, g, h }
    }

    pub fn f(&self) -> usize {
        self.g.saturating_add(self.h)
    }
}

/// The objects that we store in the priority queue
#[derive(Debug)]
struct ToVisit {
    node: Node,
    // insertion order, used to break ties between equal f
    seq: usize,
}

impl Ord for ToVisit {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse both for BinaryHeap to be a min-heap on (f, seq)
        other
            .node
            .f()
            .cmp(&self.node.f())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for ToVisit {
    fn partial_cmp(&self, other: &ToVisit) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ToVisit {
    fn eq(&self, other: &ToVisit) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ToVisit {}

/// Frontier of a single search.
///
/// `pop` returns the node with the lowest `f = g + h`. Nodes with equal `f` come out in the order they
/// were pushed.
#[derive(Debug, Default)]
pub struct OpenSet {
    heap: BinaryHeap<ToVisit>,
    pushed: usize,
}

impl OpenSet {
    pub fn push(&mut self, node: Node) {
        self.heap.push(ToVisit {
            node,
            seq: self.pushed,
        });
        self.pushed += 1;
    }

    pub fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|visit| visit.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Put a node on the frontier and close its cell, so it can never be added twice.
///
/// Returns false without touching the open set if the node lies outside the grid.
pub fn add_to_open(node: Node, open: &mut OpenSet, grid: &mut Grid) -> bool {
    if !grid.set(node.point, State::Closed) {
        return false;
    }
    open.push(node);
    true
}

/// Add every valid 4-connected neighbor of `current` to the open set, returns how many were added.
pub fn expand_neighbors(current: &Node, goal: Point, open: &mut OpenSet, grid: &mut Grid) -> usize {
    let mut added = 0;

    for direction in Direction::ALL {
        let Some(point) = current.point.step(direction) else {
            continue;
        };

        if grid.is_valid(point) {
            let node = Node::new(point, current.g.saturating_add(1), heuristic(point, goal));
            if add_to_open(node, open, grid) {
                debug!("open {} going {} (g={}, h={})", point, direction, node.g, node.h);
                added += 1;
            }
        }
    }

    added
}

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct SearchResult {
    pub start: Point,
    pub goal: Point,
    /// g of the goal node
    pub cost: usize,
    /// number of nodes taken off the open set, including the goal
    pub expanded: usize,
}

impl SearchResult {
    /// Replace the path glyphs at both ends with start and finish markers.
    pub fn mark_endpoints(&self, grid: &mut Grid) {
        grid.set(self.start, State::Start);
        grid.set(self.goal, State::Finish);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Failed,
    Succeeded(SearchResult),
}

impl SearchState {
    pub fn is_done(&self) -> bool {
        !matches!(self, SearchState::Running)
    }
}

/// A* search that owns the grid it works on.
///
/// The grid doubles as the closed set: cells are marked `Closed` when they enter the open set and `Path`
/// when they are expanded. Call [`Grid::reset`] before searching the same grid again.
#[derive(Debug)]
pub struct Search {
    start: Point,
    goal: Point,
    grid: Grid,
    open: OpenSet,
    expanded: usize,
    state: SearchState,
}

impl Search {
    pub fn new(start: Point, goal: Point, mut grid: Grid) -> Self {
        let mut open = OpenSet::default();

        if grid.is_valid(start) {
            add_to_open(
                Node::new(start, 0, heuristic(start, goal)),
                &mut open,
                &mut grid,
            );
        } else {
            warn!("start {} is not an empty cell on the grid", start);
        }

        Self {
            start,
            goal,
            grid,
            open,
            expanded: 0,
            state: SearchState::Running,
        }
    }

    pub fn finish(mut self) -> (SearchState, Grid) {
        loop {
            match self.step() {
                SearchState::Running => {}
                s => return (s, self.grid),
            }
        }
    }

    pub fn step(&mut self) -> SearchState {
        if self.state.is_done() {
            return self.state.clone();
        }

        let Some(current) = self.open.pop() else {
            warn!("No path found!");
            self.state = SearchState::Failed;
            return self.state.clone();
        };

        self.grid.set(current.point, State::Path);
        self.expanded += 1;

        if current.point == self.goal {
            info!(
                "found goal {}: cost={}, expanded={}",
                self.goal, current.g, self.expanded
            );
            self.state = SearchState::Succeeded(SearchResult {
                start: self.start,
                goal: self.goal,
                cost: current.g,
                expanded: self.expanded,
            });
            return self.state.clone();
        }

        let added = expand_neighbors(&current, self.goal, &mut self.open, &mut self.grid);
        debug!(
            "expanded {} (f={}): {} added, {} open",
            current.point,
            current.f(),
            added,
            self.open.len()
        );

        self.state.clone()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }
}

/// Run a search to completion.
///
/// Returns the explored grid if the goal was reached and an empty grid otherwise.
pub fn search(grid: Grid, start: Point, goal: Point) -> Grid {
    match Search::new(start, goal, grid).finish() {
        (SearchState::Succeeded(_), grid) => grid,
        _ => Grid::default(),
    }
}
