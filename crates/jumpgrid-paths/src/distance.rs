//! Grid distance functions.
//!
//! These serve double duty in the search: as the admissible A*-style
//! estimate toward the goal, and as the actual edge cost between a node
//! and its jump-point successor. The two coincide exactly for Euclidean
//! and octile distance on unobstructed straight or diagonal runs, which
//! is what jump segments are. Manhattan distance underestimates diagonal
//! travel, so paths found with it remain valid but are not guaranteed
//! cost-optimal.

use std::f64::consts::SQRT_2;

use jumpgrid_core::Coord;

/// Manhattan (L1) distance.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> f64 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as f64
}

/// Euclidean (L2) distance.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Octile distance: exact 8-way movement cost with unit straight steps
/// and `√2` diagonal steps.
#[inline]
pub fn octile(a: Coord, b: Coord) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (min, max) = if dx < dy { (dx, dy) } else { (dy, dx) };
    max as f64 + (SQRT_2 - 1.0) * min as f64
}

/// Distance function selector for [`find_path`](crate::PathFinder::find_path).
///
/// Defaults to [`Heuristic::Octile`], the admissible estimate matching
/// 8-directional movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    Manhattan,
    Euclidean,
    #[default]
    Octile,
}

impl Heuristic {
    /// Evaluate the selected distance function.
    #[inline]
    pub fn eval(self, a: Coord, b: Coord) -> f64 {
        match self {
            Heuristic::Manhattan => manhattan(a, b),
            Heuristic::Euclidean => euclidean(a, b),
            Heuristic::Octile => octile(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_values() {
        let a = Coord::new(1, 2);
        let b = Coord::new(4, -2);
        assert_eq!(manhattan(a, b), 7.0);
        assert_eq!(manhattan(a, a), 0.0);
    }

    #[test]
    fn euclidean_values() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, 4);
        assert_eq!(euclidean(a, b), 5.0);
    }

    #[test]
    fn octile_values() {
        let a = Coord::new(0, 0);
        // Pure straight run.
        assert_eq!(octile(a, Coord::new(5, 0)), 5.0);
        // Pure diagonal run costs √2 per step.
        let diag = octile(a, Coord::new(3, 3));
        assert!((diag - 3.0 * SQRT_2).abs() < 1e-9);
        // Mixed: 4 diagonal steps + 1 straight.
        let mixed = octile(a, Coord::new(5, 4));
        assert!((mixed - (4.0 * SQRT_2 + 1.0)).abs() < 1e-9);
    }

    #[test]
    fn heuristic_dispatch_and_default() {
        assert_eq!(Heuristic::default(), Heuristic::Octile);
        let a = Coord::new(0, 0);
        let b = Coord::new(2, 2);
        assert_eq!(Heuristic::Manhattan.eval(a, b), manhattan(a, b));
        assert_eq!(Heuristic::Euclidean.eval(a, b), euclidean(a, b));
        assert_eq!(Heuristic::Octile.eval(a, b), octile(a, b));
    }
}
