use geo_types::{coord, Coord, CoordFloat, Polygon, Rect};

use crate::error::{Error, Result};
use crate::geom::Ring;
use crate::pip::pip_polygon;

/// Axis-aligned box around a ring, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent<T> {
    pub west: T,
    pub south: T,
    pub east: T,
    pub north: T,
}

impl<T: CoordFloat> Extent<T> {
    /// Scans `ring` once. An empty ring has no extent.
    pub fn of_ring(ring: &Ring<T>) -> Result<Self> {
        let first = ring.first().ok_or(Error::EmptyRing { ring: 0 })?;
        let mut e = Extent { west: first.x, south: first.y, east: first.x, north: first.y };
        for p in ring {
            if e.west > p.x {
                e.west = p.x;
            }
            if e.south > p.y {
                e.south = p.y;
            }
            if e.east < p.x {
                e.east = p.x;
            }
            if e.north < p.y {
                e.north = p.y;
            }
        }
        Ok(e)
    }
}

impl<T: CoordFloat> From<Extent<T>> for Rect<T> {
    fn from(e: Extent<T>) -> Self {
        Rect::new(coord! { x: e.west, y: e.south }, coord! { x: e.east, y: e.north })
    }
}

/// Something a point can be tested against. Used as a pre-filter ahead of the
/// ring tests, or as a filter in its own right.
pub trait Bounds<T> {
    fn contains(&self, lon: T, lat: T) -> bool;
}

impl<T: CoordFloat> Bounds<T> for Extent<T> {
    fn contains(&self, lon: T, lat: T) -> bool {
        lon >= self.west && lon <= self.east &&
        lat >= self.south && lat <= self.north
    }
}

impl<T: CoordFloat> Bounds<T> for Rect<T> {
    fn contains(&self, lon: T, lat: T) -> bool {
        let (min, max) = (self.min(), self.max());
        lon >= min.x && lon <= max.x &&
        lat >= min.y && lat <= max.y
    }
}

impl<T: CoordFloat> Bounds<T> for Polygon<T> {
    fn contains(&self, lon: T, lat: T) -> bool {
        pip_polygon(coord! { x: lon, y: lat }, self).unwrap_or(false)
    }
}

/// `true` lets everything through, `false` nothing.
impl<T> Bounds<T> for bool {
    fn contains(&self, _lon: T, _lat: T) -> bool { *self }
}

/// Whether `p` lies in the closed bounding box of `ring`.
pub fn in_extent<T: CoordFloat>(p: Coord<T>, ring: &Ring<T>) -> Result<bool> {
    Ok(Extent::of_ring(ring)?.contains(p.x, p.y))
}

/// Pre-filter applied to the outer ring before any ring test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Prefilter {
    #[default]
    None,
    Extent,
}

#[cfg(test)]
fn square() -> Vec<Coord<f64>> {
    vec![(0.0, 0.0).into(), (0.0, 1.0).into(), (1.0, 1.0).into(), (1.0, 0.0).into()]
}

#[test]
fn extent_of_ring() {
    let ring: Vec<Coord<f64>> = vec![(2.0, -1.0).into(), (-3.0, 4.0).into(), (5.0, 0.5).into()];
    let e = Extent::of_ring(&ring).unwrap();
    assert_eq!(e, Extent { west: -3.0, south: -1.0, east: 5.0, north: 4.0 });
    let empty: Vec<Coord<f64>> = vec![];
    assert_eq!(Extent::of_ring(&empty), Err(Error::EmptyRing { ring: 0 }));
}

#[test]
fn in_extent_is_a_closed_box() {
    let ring = square();
    assert!(in_extent(coord! { x: 0.5, y: 0.5 }, &ring).unwrap());
    assert!(in_extent(coord! { x: 0.0, y: 1.0 }, &ring).unwrap());
    assert!(in_extent(coord! { x: 1.0, y: 0.3 }, &ring).unwrap());
    // rejected by the box, but accepted by a lon-only or lat-only comparison
    assert!(!in_extent(coord! { x: 0.5, y: 7.0 }, &ring).unwrap());
    assert!(!in_extent(coord! { x: 7.0, y: 0.5 }, &ring).unwrap());
    assert!(!in_extent(coord! { x: -0.1, y: -0.1 }, &ring).unwrap());
}

#[test]
fn rect_matches_extent() {
    let e = Extent::of_ring(&square()).unwrap();
    let r: Rect<f64> = e.into();
    for (lon, lat) in [(0.5, 0.5), (1.0, 1.0), (1.5, 0.5), (0.5, -0.5)] {
        assert_eq!(e.contains(lon, lat), r.contains(lon, lat));
    }
}

#[test]
fn bool_bounds() {
    assert!(Bounds::<f64>::contains(&true, 1e9, -1e9));
    assert!(!Bounds::<f64>::contains(&false, 0.0, 0.0));
}

#[test]
fn polygon_bounds() {
    use wkt::TryFromWkt;
    let p: Polygon<f64> = Polygon::try_from_wkt_str(
        "POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0), (4 4, 4 6, 6 6, 6 4, 4 4))",
    )
    .unwrap();
    assert!(p.contains(1.0, 1.0));
    assert!(!p.contains(5.0, 5.0));
    assert!(!p.contains(20.0, 20.0));
}
