//! Point-in-polygon tests on plain coordinate slices.
//!
//! A point is a `geo_types::Coord` (`x` = longitude, `y` = latitude), a ring a
//! slice of them and a polygon a slice of rings, the first being the outer
//! boundary and the rest holes. Containment follows the even-odd rule; points
//! exactly on an edge or vertex are on the boundary and not inside.
//!
//! Nothing here holds state. Diagnostics go through the `log` facade at
//! `trace`/`debug` level and are silent unless the caller installs a logger.

pub mod bounds;
pub mod error;
pub mod geom;
pub mod pip;
pub mod poly;

pub use bounds::{in_extent, Bounds, Extent, Prefilter};
pub use error::{Error, Result};
pub use geom::{Point, Ring};
pub use pip::{locate, locate_with, pip, pip_box, pip_polygon, pip_with};
pub use poly::{in_ring, locate_in_ring, winding_number, Location};

#[cfg(test)]
pub(crate) fn init_test_logger() {
    use simple_logger::SimpleLogger;
    // another test may have installed it already
    let _ = SimpleLogger::new().env().init();
}
