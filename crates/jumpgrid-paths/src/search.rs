//! The best-first search loop and its reusable scratch state.

use jumpgrid_core::Coord;
use log::{debug, trace};

use crate::distance::Heuristic;
use crate::error::{PathError, Result};
use crate::grid::Grid;
use crate::heap::MinHeap;
use crate::jps::successors;

/// Search context for [`find_path`](PathFinder::find_path) queries.
///
/// Owns the predecessor table, cost table, closed set and open queue, so
/// repeated queries incur no allocations after warm-up. Buffers grow to
/// the largest grid searched so far and the live prefix is re-initialised
/// at the start of every search. A `PathFinder` serialises the searches
/// that run through it; concurrent searches over one (immutable) grid
/// each need their own `PathFinder`.
#[derive(Default)]
pub struct PathFinder {
    came_from: Vec<Option<Coord>>,
    cost_so_far: Vec<f64>,
    closed: Vec<bool>,
    open: MinHeap,
    // shared scratch buffer for successor lists
    succ: Vec<Coord>,
}

impl PathFinder {
    /// Create a search context with empty scratch buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute a shortest path from `start` to `goal` on `grid` using
    /// Jump Point Search.
    ///
    /// The selected `heuristic` is used both as the goal estimate and as
    /// the edge cost between consecutive jump points. The returned path
    /// runs from `start` to `goal` inclusive; consecutive elements are
    /// jump points joined by unobstructed straight or diagonal runs.
    pub fn find_path(
        &mut self,
        grid: &Grid,
        start: Coord,
        goal: Coord,
        heuristic: Heuristic,
    ) -> Result<Vec<Coord>> {
        if !grid.passable(start) {
            return Err(PathError::BlockedStart(start));
        }
        if !grid.passable(goal) {
            return Err(PathError::BlockedGoal(goal));
        }

        self.prepare(grid.size());

        let start_idx = grid.index(start);
        self.came_from[start_idx] = Some(start);
        self.cost_so_far[start_idx] = 0.0;
        self.open.push(0.0, start);

        let mut succ = std::mem::take(&mut self.succ);
        let mut expanded = 0usize;

        let found = loop {
            let Some((_, current)) = self.open.pop() else {
                break false;
            };
            let current_idx = grid.index(current);

            // Lazy deletion: stale duplicates of finalised cells.
            if self.closed[current_idx] {
                continue;
            }
            self.closed[current_idx] = true;

            if current == goal {
                break true;
            }
            expanded += 1;

            let parent = if current == start {
                None
            } else {
                self.came_from[current_idx]
            };
            successors(grid, current, parent, goal, &mut succ);

            let current_cost = self.cost_so_far[current_idx];
            for &next in &succ {
                let next_idx = grid.index(next);
                if self.closed[next_idx] {
                    continue;
                }
                let new_cost = current_cost + heuristic.eval(current, next);
                if new_cost < self.cost_so_far[next_idx] {
                    self.cost_so_far[next_idx] = new_cost;
                    self.came_from[next_idx] = Some(current);
                    self.open.push(new_cost + heuristic.eval(next, goal), next);
                }
            }
        };
        self.succ = succ;

        if !found {
            debug!("no path from {start} to {goal} ({expanded} nodes expanded)");
            return Err(PathError::NoPath { start, goal });
        }

        let path = self.reconstruct(grid, start, goal)?;
        trace!(
            "path {start} -> {goal}: {} jump points, {expanded} nodes expanded",
            path.len()
        );
        Ok(path)
    }

    /// Drop all scratch allocations. Intended for embedding hosts that
    /// tear down; not needed between searches.
    pub fn release(&mut self) {
        *self = Self::default();
    }

    /// Grow the scratch tables to `size` cells and reset the live prefix.
    fn prepare(&mut self, size: usize) {
        if size > self.came_from.len() {
            self.came_from.resize(size, None);
            self.cost_so_far.resize(size, f64::INFINITY);
            self.closed.resize(size, false);
        }
        self.came_from[..size].fill(None);
        self.cost_so_far[..size].fill(f64::INFINITY);
        self.closed[..size].fill(false);
        self.open.clear();
    }

    /// Walk the predecessor table from `goal` back to `start` and reverse.
    ///
    /// The walk is capped at the grid cell count; exceeding it, or hitting
    /// an unvisited cell before reaching `start`, means the predecessor
    /// table is inconsistent.
    fn reconstruct(&self, grid: &Grid, start: Coord, goal: Coord) -> Result<Vec<Coord>> {
        let max = grid.size();
        let mut path = Vec::new();
        let mut current = goal;

        loop {
            if path.len() >= max {
                return Err(PathError::PathOverflow { max });
            }
            path.push(current);
            if current == start {
                break;
            }
            match self.came_from[grid.index(current)] {
                Some(parent) => current = parent,
                None => return Err(PathError::BrokenChain(current)),
            }
        }

        path.reverse();
        Ok(path)
    }
}
