use geo_types::{Coord, CoordFloat};
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::geom::{between, edges, max, min, open_ring, ordered_edge, Ring};

/// Where a point sits relative to a ring or polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Inside,
    Outside,
    /// Exactly on an edge or vertex.
    Boundary,
}

/// Even-odd (crossing number) test against a single ring, ignoring holes.
///
/// A horizontal ray is cast from `p` towards increasing longitude and the ring's
/// edges it crosses are counted; an odd count means inside. The intersection is
/// only computed for edges whose latitude range strictly contains the point's
/// latitude, so horizontal edges never reach the division. A ray passing exactly
/// through a vertex is counted against the edge that leaves the vertex upwards.
///
/// Points exactly on an edge or a vertex are reported as [`Location::Boundary`].
/// That check is exact on the given coordinates.
pub fn locate_in_ring<T: CoordFloat>(p: Coord<T>, ring: &Ring<T>) -> Result<Location> {
    locate_ring_at(p, ring, 0)
}

pub(crate) fn locate_ring_at<T: CoordFloat>(p: Coord<T>, ring: &Ring<T>, index: usize) -> Result<Location> {
    if ring.is_empty() {
        return Err(Error::EmptyRing { ring: index });
    }
    let ring = open_ring(ring);
    let lon = p.x;
    let lat = p.y;
    let mut counter = 0usize;

    for (i, j) in edges(ring.len()) {
        let (lo, hi) = ordered_edge(ring[i], ring[j]);
        if on_edge(p, lo, hi) {
            trace!("point {:?} on edge [{}:{}] of ring {}", p, i, j, index);
            return Ok(Location::Boundary);
        }

        let crosses = if between(lat, lo.y, hi.y) {
            // longitude where the edge meets the ray's latitude
            let x_cross = (hi.x - lo.x) * (lat - lo.y) / (hi.y - lo.y) + lo.x;
            lon < x_cross
        } else {
            // a ray through a vertex counts for the edge leaving it upwards only
            lat == lo.y && lo.y < hi.y && lon < lo.x
        };
        if crosses {
            counter += 1;
            trace!("ray from {:?} across [{}:{}]: {:?} -> {:?}", p, i, j, ring[i], ring[j]);
        }
    }

    if counter > 0 {
        debug!("ray from {:?} crossed {} segments of ring {}", p, counter, index);
    }
    Ok(if counter % 2 == 1 { Location::Inside } else { Location::Outside })
}

/// `lo` must come first in latitude order, as returned by `ordered_edge`.
#[inline]
fn on_edge<T: CoordFloat>(p: Coord<T>, lo: Coord<T>, hi: Coord<T>) -> bool {
    if p.y < lo.y || p.y > hi.y || p.x < min(lo.x, hi.x) || p.x > max(lo.x, hi.x) {
        return false;
    }
    (hi.x - lo.x) * (p.y - lo.y) == (hi.y - lo.y) * (p.x - lo.x)
}

/// Whether `p` is strictly inside `ring`. Boundary points are not.
pub fn in_ring<T: CoordFloat>(p: Coord<T>, ring: &Ring<T>) -> Result<bool> {
    Ok(locate_in_ring(p, ring)? == Location::Inside)
}

// Winding number algorithm
// https://en.wikipedia.org/wiki/Point_in_polygon#Winding_number_algorithm
// https://web.archive.org/web/20130126163405/http://geomalgorithms.com/a03-_inclusion.html
/// Nonzero-rule winding number of `ring` around `p`, counter-clockwise positive.
pub fn winding_number<T: CoordFloat>(p: Coord<T>, ring: &Ring<T>) -> Result<i32> {
    #[inline]
    fn is_left<T: CoordFloat>(a: Coord<T>, b: Coord<T>, p: Coord<T>) -> T {
        ((b.x - a.x) * (p.y - a.y)) - ((p.x - a.x) * (b.y - a.y))
    }
    if ring.is_empty() {
        return Err(Error::EmptyRing { ring: 0 });
    }
    let ring = open_ring(ring);
    let mut wn = 0;
    for (i, j) in edges(ring.len()) {
        // edge runs from the previous vertex j to i
        let (a, b) = (ring[j], ring[i]);
        if a.y <= p.y {
            if b.y > p.y && is_left(a, b, p) > T::zero() {
                wn += 1;
            }
        } else if b.y <= p.y && is_left(a, b, p) < T::zero() {
            wn -= 1;
        }
    }
    Ok(wn)
}

#[cfg(test)]
fn ring(points: &[(f64, f64)]) -> Vec<Coord<f64>> {
    points.iter().map(|&p| p.into()).collect()
}

#[cfg(test)]
fn pt(x: f64, y: f64) -> Coord<f64> {
    Coord { x, y }
}

#[test]
fn in_ring_unit_square() {
    crate::init_test_logger();
    let r = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    assert!(in_ring(pt(0.5, 0.5), &r).unwrap());
    assert!(!in_ring(pt(1.5, 0.5), &r).unwrap());
    assert!(!in_ring(pt(-0.5, 0.5), &r).unwrap());
    assert!(!in_ring(pt(0.5, 1.5), &r).unwrap());
    assert!(in_ring(pt(0.9, 0.1), &r).unwrap());
}

#[test]
fn explicitly_closed_ring() {
    let open = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    let closed = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
    for p in [pt(0.5, 0.5), pt(1.5, 0.5), pt(0.25, 0.75), pt(0.5, -3.0)] {
        assert_eq!(locate_in_ring(p, &open).unwrap(), locate_in_ring(p, &closed).unwrap());
    }
}

#[test]
fn concave_ring() {
    // U shape opening to the north
    let r = ring(&[(0.0, 0.0), (0.0, 3.0), (1.0, 3.0), (1.0, 1.0), (2.0, 1.0), (2.0, 3.0), (3.0, 3.0), (3.0, 0.0)]);
    assert!(in_ring(pt(0.5, 2.0), &r).unwrap());
    assert!(in_ring(pt(2.5, 2.0), &r).unwrap());
    assert!(in_ring(pt(1.5, 0.5), &r).unwrap());
    assert!(!in_ring(pt(1.5, 2.0), &r).unwrap());
}

#[test]
fn ray_through_vertex() {
    // the ray from (0, 1) passes exactly through the vertices (1, 1) and (3, 1)
    let r = ring(&[(1.0, 1.0), (2.0, 0.0), (3.0, 1.0), (2.0, 2.0)]);
    assert!(!in_ring(pt(0.0, 1.0), &r).unwrap());
    assert!(in_ring(pt(2.0, 1.0), &r).unwrap());
    assert!(!in_ring(pt(4.0, 1.0), &r).unwrap());
}

#[test]
fn boundary_points() {
    let r = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    for p in [pt(0.0, 0.5), pt(1.0, 0.5), pt(0.5, 0.0), pt(0.5, 1.0), pt(0.0, 0.0), pt(1.0, 1.0)] {
        assert_eq!(locate_in_ring(p, &r).unwrap(), Location::Boundary, "{:?}", p);
        assert!(!in_ring(p, &r).unwrap());
    }
    let diamond = ring(&[(0.0, 1.0), (1.0, 2.0), (2.0, 1.0), (1.0, 0.0)]);
    assert_eq!(locate_in_ring(pt(0.5, 0.5), &diamond).unwrap(), Location::Boundary);
    assert_eq!(locate_in_ring(pt(1.5, 1.5), &diamond).unwrap(), Location::Boundary);
    assert_eq!(locate_in_ring(pt(1.0, 1.0), &diamond).unwrap(), Location::Inside);
}

#[test]
fn empty_ring() {
    let r: Vec<Coord<f64>> = vec![];
    assert_eq!(in_ring(pt(0.0, 0.0), &r), Err(Error::EmptyRing { ring: 0 }));
    assert_eq!(winding_number(pt(0.0, 0.0), &r), Err(Error::EmptyRing { ring: 0 }));
}

#[test]
fn degenerate_rings_do_not_panic() {
    let one = ring(&[(1.0, 1.0)]);
    let two = ring(&[(0.0, 0.0), (1.0, 1.0)]);
    let flat = ring(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    assert!(!in_ring(pt(0.0, 0.5), &one).unwrap());
    assert!(!in_ring(pt(0.0, 0.5), &two).unwrap());
    assert!(!in_ring(pt(0.5, 0.0), &flat).unwrap());
    assert!(!in_ring(pt(0.5, 1.0), &flat).unwrap());
}

#[test]
fn f32_matches_f64() {
    let r64 = ring(&[(0.0, 0.0), (0.0, 4.0), (2.0, 6.0), (4.0, 4.0), (4.0, 0.0)]);
    let r32: Vec<Coord<f32>> = r64.iter().map(|c| Coord { x: c.x as f32, y: c.y as f32 }).collect();
    for (x, y) in [(1.0, 1.0), (2.0, 5.5), (3.5, 5.5), (-1.0, 2.0), (0.0, 2.0)] {
        assert_eq!(
            locate_in_ring(pt(x, y), &r64).unwrap(),
            locate_in_ring(Coord { x: x as f32, y: y as f32 }, &r32).unwrap()
        );
    }
}

#[test]
fn wn_test() {
    let p = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
    assert_eq!(winding_number(pt(0.5, 0.5), &p).unwrap(), -1);
    assert_eq!(winding_number(pt(1.5, 1.5), &p).unwrap(), 0);
    assert_eq!(winding_number(pt(-1.5, -1.5), &p).unwrap(), 0);
    assert_eq!(winding_number(pt(0.9, 0.1), &p).unwrap(), -1);
    let reversed: Vec<Coord<f64>> = p.iter().rev().copied().collect();
    assert_eq!(winding_number(pt(0.5, 0.5), &reversed).unwrap(), 1);
}

#[test]
fn wn_test2() {
    use geo_types::Polygon;
    use wkt::TryFromWkt;
    let denmark = "POLYGON ((7.87 54.69, 7.78 57.25, 9.63 58.08, 10.71 58.11, 12.05 56.69, 13.15 56.42, 14.2 55.47, 15.5 55.33, 15.28 54.64, 12.98 54.94, 12.29 54.35, 12.46 53.64, 11.41 53.42, 10.07 53.18, 8.78 53.52, 7.87 54.69))";
    let p: Polygon<f64> = Polygon::try_from_wkt_str(denmark).unwrap();
    let r = &p.exterior().0;
    assert_eq!(winding_number(pt(10.0, 56.0), r).unwrap(), -1);
    assert_eq!(winding_number(pt(56.0, 10.0), r).unwrap(), 0);
    assert!(in_ring(pt(10.0, 56.0), r).unwrap());
    assert!(!in_ring(pt(56.0, 10.0), r).unwrap());
}

#[test]
fn self_intersecting_even_odd() {
    // the overlap of the figure eight is counted twice, so it is outside
    let r = ring(&[(-1.0, -1.0), (0.0, -1.0), (0.0, 1.0), (-2.0, 1.0), (-2.0, -2.0), (1.0, -2.0), (1.0, 2.0), (-1.0, 2.0)]);
    assert!(!in_ring(pt(-0.5, -0.5), &r).unwrap());
    assert!(in_ring(pt(0.5, -0.5), &r).unwrap());
}
