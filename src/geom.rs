use geo_types::{Coord, CoordFloat};

/// A point as `x` = longitude, `y` = latitude.
pub type Point<T> = Coord<T>;

/// A closed boundary. The closing point may be repeated or left implicit.
pub type Ring<T> = [Coord<T>];

#[inline]
pub fn max<T: CoordFloat>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

#[inline]
pub fn min<T: CoordFloat>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Open interval test, `lo < p < hi`.
#[inline]
pub fn between<T: CoordFloat>(p: T, lo: T, hi: T) -> bool {
    p > lo && p < hi
}

/// Endpoints of an edge with the lower latitude first, ties broken on longitude.
/// Arithmetic on the ordered pair does not depend on the ring's winding.
#[inline]
pub fn ordered_edge<T: CoordFloat>(a: Coord<T>, b: Coord<T>) -> (Coord<T>, Coord<T>) {
    if b.y < a.y || (b.y == a.y && b.x < a.x) {
        (b, a)
    } else {
        (a, b)
    }
}

/// Drops the repeated closing point of an explicitly closed ring.
pub(crate) fn open_ring<T: CoordFloat>(ring: &Ring<T>) -> &Ring<T> {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 1 && first == last => &ring[..ring.len() - 1],
        _ => ring,
    }
}

/// Index pairs `(i, j)` of every edge of a ring of `len` points, `j` being the
/// vertex before `i`, starting with the wraparound edge `(0, len - 1)`.
pub(crate) fn edges(len: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..len).map(move |i| (i, if i == 0 { len - 1 } else { i - 1 }))
}

#[test]
fn between_is_strict() {
    assert!(between(0.5, 0.0, 1.0));
    assert!(!between(0.0, 0.0, 1.0));
    assert!(!between(1.0, 0.0, 1.0));
    assert!(!between(0.5, 1.0, 0.0));
    assert_eq!(max(1.0f32, -2.0), 1.0);
    assert_eq!(min(1.0f32, -2.0), -2.0);
}

#[test]
fn ordered_edge_test() {
    let a = Coord { x: 3.0, y: 1.0 };
    let b = Coord { x: 0.0, y: 2.0 };
    assert_eq!(ordered_edge(a, b), (a, b));
    assert_eq!(ordered_edge(b, a), (a, b));
    let c = Coord { x: -1.0, y: 1.0 };
    assert_eq!(ordered_edge(a, c), (c, a));
}

#[test]
fn open_ring_test() {
    let closed: Vec<Coord<f64>> = vec![(0.0, 0.0).into(), (0.0, 1.0).into(), (1.0, 1.0).into(), (0.0, 0.0).into()];
    assert_eq!(open_ring(&closed).len(), 3);
    assert_eq!(open_ring(&closed[..3]).len(), 3);
    assert_eq!(open_ring(&closed[..1]).len(), 1);
    let empty: Vec<Coord<f64>> = vec![];
    assert!(open_ring(&empty).is_empty());
}

#[test]
fn edges_wrap_around() {
    let e: Vec<(usize, usize)> = edges(4).collect();
    assert_eq!(e, vec![(0, 3), (1, 0), (2, 1), (3, 2)]);
}
