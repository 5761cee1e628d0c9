use geo_types::{Coord, CoordFloat, Polygon};
use log::debug;

use crate::bounds::{Bounds, Extent, Prefilter};
use crate::error::{Error, Result};
use crate::geom::Ring;
use crate::poly::{locate_ring_at, Location};

/// Checks if `p` is inside `polygon`. Ring 0 is the outer boundary, the rest
/// are holes. Points on any boundary are not inside.
pub fn pip<T, R>(p: Coord<T>, polygon: &[R]) -> Result<bool>
where
    T: CoordFloat,
    R: AsRef<Ring<T>>,
{
    pip_with(p, polygon, Prefilter::None)
}

/// Like [`pip`], but rejects points outside the outer ring's bounding box
/// before running any ring test. Speeds up complex polygons, insignificantly
/// slows down simple ones.
pub fn pip_box<T, R>(p: Coord<T>, polygon: &[R]) -> Result<bool>
where
    T: CoordFloat,
    R: AsRef<Ring<T>>,
{
    pip_with(p, polygon, Prefilter::Extent)
}

pub fn pip_with<T, R>(p: Coord<T>, polygon: &[R], prefilter: Prefilter) -> Result<bool>
where
    T: CoordFloat,
    R: AsRef<Ring<T>>,
{
    Ok(locate_with(p, polygon, prefilter)? == Location::Inside)
}

/// Classifies `p` against `polygon`. Inside a hole is [`Location::Outside`],
/// on a hole's boundary is [`Location::Boundary`].
pub fn locate<T, R>(p: Coord<T>, polygon: &[R]) -> Result<Location>
where
    T: CoordFloat,
    R: AsRef<Ring<T>>,
{
    locate_with(p, polygon, Prefilter::None)
}

pub fn locate_with<T, R>(p: Coord<T>, polygon: &[R], prefilter: Prefilter) -> Result<Location>
where
    T: CoordFloat,
    R: AsRef<Ring<T>>,
{
    locate_rings(p, polygon.iter().map(|ring| ring.as_ref()), prefilter)
}

/// [`pip`] for a `geo_types::Polygon`, its exterior being the outer ring.
pub fn pip_polygon<T: CoordFloat>(p: Coord<T>, polygon: &Polygon<T>) -> Result<bool> {
    let rings = std::iter::once(polygon.exterior().0.as_slice())
        .chain(polygon.interiors().iter().map(|hole| hole.0.as_slice()));
    Ok(locate_rings(p, rings, Prefilter::None)? == Location::Inside)
}

fn locate_rings<'a, T, I>(p: Coord<T>, mut rings: I, prefilter: Prefilter) -> Result<Location>
where
    T: CoordFloat + 'a,
    I: Iterator<Item = &'a Ring<T>>,
{
    let outer = rings.next().ok_or(Error::EmptyPolygon)?;
    if prefilter == Prefilter::Extent && !Extent::of_ring(outer)?.contains(p.x, p.y) {
        debug!("point {:?} outside extent of outer ring", p);
        return Ok(Location::Outside);
    }

    match locate_ring_at(p, outer, 0)? {
        Location::Inside => debug!("point {:?} in outer ring", p),
        other => return Ok(other),
    }

    // first hole holding p wins
    for (i, hole) in rings.enumerate() {
        match locate_ring_at(p, hole, i + 1)? {
            Location::Outside => continue,
            Location::Inside => {
                debug!("point {:?} excluded by hole {}", p, i + 1);
                return Ok(Location::Outside);
            }
            Location::Boundary => return Ok(Location::Boundary),
        }
    }
    Ok(Location::Inside)
}

#[cfg(test)]
fn ring(points: &[(f64, f64)]) -> Vec<Coord<f64>> {
    points.iter().map(|&p| p.into()).collect()
}

#[cfg(test)]
fn pt(x: f64, y: f64) -> Coord<f64> {
    Coord { x, y }
}

#[cfg(test)]
fn square_with_hole() -> Vec<Vec<Coord<f64>>> {
    vec![
        ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]),
        ring(&[(4.0, 4.0), (4.0, 6.0), (6.0, 6.0), (6.0, 4.0)]),
    ]
}

#[test]
fn pip_unit_square() {
    let polygon = [ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])];
    assert!(pip(pt(0.5, 0.5), &polygon).unwrap());
    assert!(!pip(pt(1.5, 0.5), &polygon).unwrap());
    assert!(pip_box(pt(0.5, 0.5), &polygon).unwrap());
    assert!(!pip_box(pt(1.5, 0.5), &polygon).unwrap());
}

#[test]
fn pip_holes() {
    crate::init_test_logger();
    let polygon = square_with_hole();
    assert!(!pip(pt(5.0, 5.0), &polygon).unwrap());
    assert!(pip(pt(1.0, 1.0), &polygon).unwrap());
    assert!(!pip(pt(20.0, 20.0), &polygon).unwrap());
    assert!(!pip_box(pt(5.0, 5.0), &polygon).unwrap());
    assert!(pip_box(pt(1.0, 1.0), &polygon).unwrap());
    assert!(!pip_box(pt(20.0, 20.0), &polygon).unwrap());
    assert_eq!(locate(pt(5.0, 5.0), &polygon).unwrap(), Location::Outside);
    assert_eq!(locate(pt(1.0, 1.0), &polygon).unwrap(), Location::Inside);
}

#[test]
fn hole_is_only_checked_inside_outer_ring() {
    // the hole ring lies outside the outer ring; a point in it stays outside
    let polygon = vec![
        ring(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]),
        ring(&[(5.0, 5.0), (5.0, 7.0), (7.0, 7.0), (7.0, 5.0)]),
    ];
    assert!(!pip(pt(6.0, 6.0), &polygon).unwrap());
    assert!(pip(pt(1.0, 1.0), &polygon).unwrap());
}

#[test]
fn several_holes() {
    let polygon = vec![
        ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]),
        ring(&[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0), (1.0, 1.0)]),
        ring(&[(6.0, 6.0), (6.0, 9.0), (9.0, 9.0), (9.0, 6.0)]),
    ];
    assert!(!pip(pt(2.0, 2.0), &polygon).unwrap());
    assert!(!pip(pt(7.5, 7.5), &polygon).unwrap());
    assert!(pip(pt(5.0, 5.0), &polygon).unwrap());
    assert!(pip(pt(2.0, 7.5), &polygon).unwrap());
}

#[test]
fn boundaries_are_not_inside() {
    let polygon = square_with_hole();
    for p in [pt(0.0, 5.0), pt(10.0, 10.0), pt(5.0, 0.0), pt(4.0, 5.0), pt(6.0, 6.0), pt(5.0, 4.0)] {
        assert_eq!(locate(p, &polygon).unwrap(), Location::Boundary, "{:?}", p);
        assert!(!pip(p, &polygon).unwrap());
        assert!(!pip_box(p, &polygon).unwrap());
    }
}

#[test]
fn prefilter_does_not_change_location() {
    let polygon = square_with_hole();
    for (x, y) in [(5.0, 5.0), (1.0, 1.0), (20.0, 20.0), (0.0, 0.0), (10.0, 3.0), (-1.0, 5.0), (5.0, 11.0)] {
        assert_eq!(
            locate_with(pt(x, y), &polygon, Prefilter::None).unwrap(),
            locate_with(pt(x, y), &polygon, Prefilter::Extent).unwrap()
        );
    }
}

#[test]
fn idempotent() {
    let polygon = square_with_hole();
    let first = pip(pt(3.0, 7.0), &polygon).unwrap();
    for _ in 0..10 {
        assert_eq!(pip(pt(3.0, 7.0), &polygon).unwrap(), first);
    }
}

#[test]
fn invalid_input() {
    let empty: Vec<Vec<Coord<f64>>> = vec![];
    assert_eq!(pip(pt(0.0, 0.0), &empty), Err(Error::EmptyPolygon));
    assert_eq!(pip_box(pt(0.0, 0.0), &empty), Err(Error::EmptyPolygon));
    let empty_outer: Vec<Vec<Coord<f64>>> = vec![vec![]];
    assert_eq!(pip(pt(0.0, 0.0), &empty_outer), Err(Error::EmptyRing { ring: 0 }));
    assert_eq!(pip_box(pt(0.0, 0.0), &empty_outer), Err(Error::EmptyRing { ring: 0 }));
    let mut empty_hole = square_with_hole();
    empty_hole.push(vec![]);
    assert_eq!(pip(pt(1.0, 1.0), &empty_hole), Err(Error::EmptyRing { ring: 2 }));
    // outside the outer ring the holes are never read
    assert_eq!(pip(pt(20.0, 1.0), &empty_hole), Ok(false));
}

#[test]
fn geo_types_polygon() {
    use wkt::TryFromWkt;
    let p: Polygon<f64> = Polygon::try_from_wkt_str(
        "POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0), (4 4, 4 6, 6 6, 6 4, 4 4))",
    )
    .unwrap();
    assert!(!pip_polygon(pt(5.0, 5.0), &p).unwrap());
    assert!(pip_polygon(pt(1.0, 1.0), &p).unwrap());
    assert!(!pip_polygon(pt(20.0, 20.0), &p).unwrap());
    let empty: Polygon<f64> = Polygon::new(geo_types::LineString(vec![]), vec![]);
    assert_eq!(pip_polygon(pt(0.0, 0.0), &empty), Err(Error::EmptyRing { ring: 0 }));
}

#[test]
fn f32_polygon() {
    let polygon: Vec<Vec<Coord<f32>>> = square_with_hole()
        .iter()
        .map(|r| r.iter().map(|c| Coord { x: c.x as f32, y: c.y as f32 }).collect())
        .collect();
    assert!(!pip(Coord { x: 5.0f32, y: 5.0 }, &polygon).unwrap());
    assert!(pip(Coord { x: 1.0f32, y: 1.0 }, &polygon).unwrap());
    assert!(!pip_box(Coord { x: 20.0f32, y: 20.0 }, &polygon).unwrap());
}
