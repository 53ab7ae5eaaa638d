//! Core geometry types shared by the jumpgrid crates.

mod geom;

pub use geom::Coord;
