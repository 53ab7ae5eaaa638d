//! Jump Point Search pathfinding on dense obstacle grids.
//!
//! JPS is an optimised A* variant for uniform-cost 8-way grids: instead
//! of expanding every adjacent cell, it scans straight lines and only
//! branches at *jump points* — cells with forced neighbours or the goal
//! itself. This crate provides:
//!
//! - [`Grid`] — the obstacle mask, move legality (no corner cutting) and
//!   the JPS neighbour-pruning rules
//! - [`jump`] / [`successors`] — the straight-line scan primitive and
//!   jump-point successor generation
//! - [`PathFinder`] — the search context owning all scratch state, with
//!   [`PathFinder::find_path`] as the single query entry point
//! - [`Heuristic`] — pluggable distance functions (Manhattan, Euclidean,
//!   octile), used both as goal estimate and as jump-segment edge cost
//!
//! `PathFinder` reuses its internal buffers, so repeated queries incur no
//! allocations after warm-up; concurrent searches each need their own
//! `PathFinder` over a shared read-only [`Grid`].

mod distance;
mod error;
mod grid;
mod heap;
mod jps;
mod search;

pub use distance::{Heuristic, euclidean, manhattan, octile};
pub use error::{PathError, Result};
pub use grid::Grid;
pub use heap::MinHeap;
pub use jps::{jump, successors};
pub use search::PathFinder;
