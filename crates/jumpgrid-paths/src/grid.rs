//! Dense obstacle grid with the JPS neighbour-pruning rules.
//!
//! The grid answers three questions for the search engine: is a cell
//! passable, is a single step legal (diagonal steps may not cut through
//! two blocked corners), and which neighbours survive Jump Point Search
//! pruning given the direction of arrival.

use jumpgrid_core::Coord;

const ALL_DIRS: [Coord; 8] = [
    Coord::new(1, 0),
    Coord::new(-1, 0),
    Coord::new(0, -1),
    Coord::new(0, 1),
    Coord::new(1, 1),
    Coord::new(-1, 1),
    Coord::new(1, -1),
    Coord::new(-1, -1),
];

/// A `width * height` obstacle mask. `true` = blocked.
///
/// Mask storage is grow-only: shrinking the grid with [`Grid::reset`]
/// keeps the larger allocation around for reuse. The grid is read-only
/// during a search; only [`Grid::set_blocked`] and [`Grid::reset`]
/// mutate it.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
}

impl Grid {
    /// Create a grid with all cells passable.
    ///
    /// Dimension pairs whose product would overflow `i32`, and negative
    /// dimensions, produce an empty 0×0 grid rather than failing; callers
    /// that care should check [`Grid::width`] / [`Grid::height`].
    pub fn new(width: i32, height: i32) -> Self {
        let mut grid = Self::default();
        grid.reset(width, height);
        grid
    }

    /// Replace the dimensions and clear all cells to passable.
    ///
    /// Invalid dimensions (see [`Grid::new`]) force a 0×0 grid.
    pub fn reset(&mut self, width: i32, height: i32) {
        if width < 0 || height < 0 || width.checked_mul(height).is_none() {
            self.width = 0;
            self.height = 0;
            return;
        }
        self.width = width;
        self.height = height;

        let size = self.size();
        if size > self.blocked.len() {
            self.blocked.resize(size, false);
        }
        self.blocked[..size].fill(false);
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn size(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Flat index of an in-bounds cell (`y * width + x`).
    #[inline]
    pub fn index(&self, loc: Coord) -> usize {
        (loc.y * self.width + loc.x) as usize
    }

    /// Whether the cell lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, loc: Coord) -> bool {
        0 <= loc.x && loc.x < self.width && 0 <= loc.y && loc.y < self.height
    }

    /// Set or clear the obstacle flag. Out of bounds is a no-op.
    pub fn set_blocked(&mut self, loc: Coord, blocked: bool) {
        if !self.in_bounds(loc) {
            return;
        }
        let idx = self.index(loc);
        self.blocked[idx] = blocked;
    }

    /// Whether the cell is in bounds and not blocked.
    #[inline]
    pub fn passable(&self, loc: Coord) -> bool {
        self.in_bounds(loc) && !self.blocked[self.index(loc)]
    }

    /// Whether stepping from `loc` along `dir` is legal.
    ///
    /// Axis-aligned steps only need a passable destination. Diagonal steps
    /// additionally require at least one of the two flanking orthogonal
    /// cells to be passable: a diagonal is blocked only when *both*
    /// corners are obstacles.
    pub fn valid_move(&self, loc: Coord, dir: Coord) -> bool {
        let dest = loc + dir;
        if dir.is_diagonal() {
            self.passable(dest)
                && (self.passable(loc + Coord::new(dir.x, 0))
                    || self.passable(loc + Coord::new(0, dir.y)))
        } else {
            self.passable(dest)
        }
    }

    /// Whether `loc`, a neighbour expanded from `parent` while travelling
    /// in `travel_dir`, is a forced neighbour.
    ///
    /// For diagonal travel this is the mirrored diagonal (one component
    /// kept, the other flipped). For axis travel any diagonal detour is
    /// forced.
    pub fn forced(&self, loc: Coord, parent: Coord, travel_dir: Coord) -> bool {
        let dir = (loc - parent).direction();
        if travel_dir.is_diagonal() {
            (dir.x == travel_dir.x && dir.y == -travel_dir.y)
                || (dir.x == -travel_dir.x && dir.y == travel_dir.y)
        } else {
            dir.is_diagonal()
        }
    }

    /// Append the cells reachable from `current` along each of `dirs`.
    pub fn neighbours(&self, current: Coord, dirs: &[Coord], out: &mut Vec<Coord>) {
        for &dir in dirs {
            if self.valid_move(current, dir) {
                out.push(current + dir);
            }
        }
    }

    /// Compute the JPS pruned neighbour set of `current`, clearing `out`
    /// first.
    ///
    /// With no parent (the start node) every legal 8-way neighbour is
    /// kept. Otherwise the candidate set depends on the direction of
    /// arrival: natural continuations, plus forced neighbours that only
    /// exist because an obstacle blocks the direct route.
    pub fn pruned_neighbours(&self, current: Coord, parent: Option<Coord>, out: &mut Vec<Coord>) {
        out.clear();
        let Some(parent) = parent else {
            self.neighbours(current, &ALL_DIRS, out);
            return;
        };

        let dir = (current - parent).direction();
        if dir.is_diagonal() {
            let dir_x = Coord::new(dir.x, 0);
            let dir_y = Coord::new(0, dir.y);
            self.neighbours(current, &[dir, dir_x, dir_y], out);

            // An orthogonal component blocked at the previous cell but open
            // two steps out marks a forced detour around the obstacle.
            let previous = current - dir;
            for orth in [dir_x, dir_y] {
                let doubled = orth * 2;
                if !self.valid_move(previous, orth) && self.valid_move(previous, doubled) {
                    out.push(previous + doubled);
                }
            }
        } else {
            self.neighbours(current, &[dir], out);

            // Straight travel beside an obstacle forces the diagonal past it.
            let perp = Coord::new(dir.y, dir.x);
            for side in [perp, -perp] {
                let diag = side + dir;
                if !self.valid_move(current, side) && self.valid_move(current, diag) {
                    out.push(current + diag);
                }
            }
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(3, 2);
        g.set_blocked(Coord::new(1, 1), true);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width(), 3);
        assert_eq!(back.height(), 2);
        assert!(!back.passable(Coord::new(1, 1)));
        assert!(back.passable(Coord::new(0, 0)));
    }
}
