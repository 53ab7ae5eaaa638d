//! The Jump Point Search primitives: the straight-line `jump` scan and
//! pruned-neighbour-driven successor generation.
//!
//! `jump` walks in one direction until it finds a cell the search must
//! branch at; `successors` turns a node's pruned neighbour set into the
//! jump points actually pushed onto the open queue. Both read the grid
//! only; all mutable search state lives in
//! [`PathFinder`](crate::PathFinder).

use jumpgrid_core::Coord;

use crate::grid::Grid;

/// Scan from `from` along the unit direction `dir` and return the next
/// jump point, or `None` if the scan runs into a wall or off the grid.
///
/// The scan stops at the goal, at any cell with a forced neighbour
/// relative to the travel direction, and, for diagonal travel, at any
/// cell whose orthogonal component scans find a jump point of their own:
/// a jump point reachable orthogonally means this diagonal cell must be
/// expanded too. Recursion depth of those sub-probes is bounded by the
/// larger grid dimension.
pub fn jump(grid: &Grid, from: Coord, dir: Coord, goal: Coord) -> Option<Coord> {
    let mut current = from;
    let mut pruned = Vec::with_capacity(8);

    loop {
        if !grid.valid_move(current, dir) {
            return None;
        }
        let next = current + dir;
        if next == goal {
            return Some(next);
        }

        grid.pruned_neighbours(next, Some(current), &mut pruned);
        if pruned.iter().any(|&n| grid.forced(n, next, dir)) {
            return Some(next);
        }

        if dir.is_diagonal() {
            let probes = [Coord::new(dir.x, 0), Coord::new(0, dir.y)];
            if probes.iter().any(|&d| jump(grid, next, d, goal).is_some()) {
                return Some(next);
            }
        }

        current = next;
    }
}

/// Compute the jump-point successors of `current`, clearing `out` first.
///
/// `parent` is the node's recorded predecessor, or `None` for the start
/// node (which expands in all eight directions). Successors are jump
/// points and not necessarily adjacent to `current`.
pub fn successors(
    grid: &Grid,
    current: Coord,
    parent: Option<Coord>,
    goal: Coord,
    out: &mut Vec<Coord>,
) {
    out.clear();
    let mut pruned = Vec::with_capacity(8);
    grid.pruned_neighbours(current, parent, &mut pruned);

    for &neighbour in &pruned {
        let dir = (neighbour - current).direction();
        if let Some(jump_point) = jump(grid, current, dir, goal) {
            out.push(jump_point);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_off_the_edge_finds_nothing() {
        let g = Grid::new(3, 3);
        let goal = Coord::new(2, 2);
        assert_eq!(jump(&g, Coord::new(0, 0), Coord::new(0, -1), goal), None);
        assert_eq!(jump(&g, Coord::new(0, 0), Coord::new(-1, -1), goal), None);
    }

    #[test]
    fn jump_into_a_wall_finds_nothing() {
        let mut g = Grid::new(5, 5);
        g.set_blocked(Coord::new(2, 2), true);
        let goal = Coord::new(0, 4);
        assert_eq!(jump(&g, Coord::new(0, 2), Coord::new(1, 0), goal), None);
    }

    #[test]
    fn jump_reaches_the_goal_across_an_open_grid() {
        let g = Grid::new(5, 5);
        let goal = Coord::new(4, 4);
        assert_eq!(
            jump(&g, Coord::new(0, 0), Coord::new(1, 1), goal),
            Some(goal)
        );
        assert_eq!(
            jump(&g, Coord::new(0, 4), Coord::new(1, 0), Coord::new(4, 4)),
            Some(Coord::new(4, 4))
        );
    }

    #[test]
    fn straight_jump_stops_at_a_forced_cell() {
        let mut g = Grid::new(5, 5);
        // Wall above the scan row; the cell just before the diagonal
        // opening becomes a jump point.
        g.set_blocked(Coord::new(2, 1), true);
        let goal = Coord::new(0, 4);
        assert_eq!(
            jump(&g, Coord::new(0, 2), Coord::new(1, 0), goal),
            Some(Coord::new(2, 2))
        );
    }

    #[test]
    fn diagonal_jump_stops_when_an_orthogonal_probe_succeeds() {
        let mut g = Grid::new(5, 5);
        g.set_blocked(Coord::new(3, 2), true);
        let goal = Coord::new(0, 0);
        // The horizontal probe from (1,3) finds a forced cell at (3,3),
        // so the diagonal scan must stop at (1,3) itself.
        assert_eq!(
            jump(&g, Coord::new(0, 4), Coord::new(1, -1), goal),
            Some(Coord::new(1, 3))
        );
    }

    #[test]
    fn successors_of_the_start_on_an_open_grid() {
        let g = Grid::new(5, 5);
        let mut out = Vec::new();
        successors(&g, Coord::new(0, 0), None, Coord::new(4, 4), &mut out);
        // Straight scans run off the grid without finding anything; the
        // diagonal reaches the goal in one jump.
        assert_eq!(out, vec![Coord::new(4, 4)]);
    }

    #[test]
    fn successors_use_the_arrival_direction() {
        let mut g = Grid::new(5, 5);
        g.set_blocked(Coord::new(2, 1), true);
        let mut out = Vec::new();
        // Travelling right into (1,2): the only pruned neighbour is the
        // continuation, and the scan stops at the forced cell (2,2).
        successors(
            &g,
            Coord::new(1, 2),
            Some(Coord::new(0, 2)),
            Coord::new(0, 4),
            &mut out,
        );
        assert_eq!(out, vec![Coord::new(2, 2)]);
    }
}
