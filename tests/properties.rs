use geo_types::Coord;
use proptest::prelude::*;
use rpip::{in_ring, locate, locate_in_ring, pip, pip_box, winding_number, Location};

fn pt(x: f64, y: f64) -> Coord<f64> {
    Coord { x, y }
}

/// Star-shaped ring around `center`, vertices on a quarter-unit grid so that
/// boundary cases come up often.
fn star(center: (f64, f64), radii: &[f64]) -> Vec<Coord<f64>> {
    let n = radii.len() as f64;
    radii
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let a = std::f64::consts::TAU * i as f64 / n;
            let x = center.0 + r * a.cos();
            let y = center.1 + r * a.sin();
            pt((x * 4.0).round() / 4.0, (y * 4.0).round() / 4.0)
        })
        .collect()
}

fn arb_ring() -> impl Strategy<Value = Vec<Coord<f64>>> {
    prop::collection::vec(2.0f64..10.0, 3..16).prop_map(|radii| star((0.0, 0.0), &radii))
}

fn arb_polygon() -> impl Strategy<Value = Vec<Vec<Coord<f64>>>> {
    (arb_ring(), prop::collection::vec(0.2f64..1.5, 3..8), -0.5f64..0.5, -0.5f64..0.5)
        .prop_map(|(outer, hole_radii, cx, cy)| vec![outer, star((cx, cy), &hole_radii)])
}

fn arb_point() -> impl Strategy<Value = Coord<f64>> {
    // well beyond the largest radius, and often on the grid
    (-60i32..60, -60i32..60).prop_map(|(x, y)| pt(x as f64 / 4.0, y as f64 / 4.0))
}

#[test]
fn square_with_hole() {
    let polygon = vec![
        vec![pt(0.0, 0.0), pt(0.0, 10.0), pt(10.0, 10.0), pt(10.0, 0.0)],
        vec![pt(4.0, 4.0), pt(4.0, 6.0), pt(6.0, 6.0), pt(6.0, 4.0)],
    ];
    assert!(!pip(pt(5.0, 5.0), &polygon).unwrap());
    assert!(pip(pt(1.0, 1.0), &polygon).unwrap());
    assert!(!pip(pt(20.0, 20.0), &polygon).unwrap());
}

#[test]
fn concurrent_calls_agree() {
    let polygon = vec![
        star((0.0, 0.0), &[5.0, 8.0, 3.0, 9.0, 4.0, 7.0, 6.0]),
        star((0.0, 0.0), &[1.0, 1.5, 1.0, 1.5]),
    ];
    let points: Vec<Coord<f64>> = (-40..40)
        .flat_map(|x| (-40..40).map(move |y| pt(x as f64 / 4.0, y as f64 / 4.0)))
        .collect();
    let expected: Vec<bool> = points.iter().map(|p| pip(*p, &polygon).unwrap()).collect();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| points.iter().map(|p| pip_box(*p, &polygon).unwrap()).collect::<Vec<bool>>()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

proptest! {
    #[test]
    fn pip_box_agrees_with_pip(polygon in arb_polygon(), p in arb_point()) {
        prop_assert_eq!(pip_box(p, &polygon).unwrap(), pip(p, &polygon).unwrap());
    }

    #[test]
    fn rotation_does_not_change_location(ring in arb_ring(), shift in 0usize..16, p in arb_point()) {
        let mut rotated = ring.clone();
        rotated.rotate_left(shift % ring.len());
        prop_assert_eq!(locate_in_ring(p, &rotated).unwrap(), locate_in_ring(p, &ring).unwrap());
    }

    #[test]
    fn reversal_does_not_change_location(ring in arb_ring(), p in arb_point()) {
        let reversed: Vec<Coord<f64>> = ring.iter().rev().copied().collect();
        prop_assert_eq!(locate_in_ring(p, &reversed).unwrap(), locate_in_ring(p, &ring).unwrap());
        // the nonzero rule sees the orientation
        prop_assert_eq!(winding_number(p, &reversed).unwrap(), -winding_number(p, &ring).unwrap());
    }

    #[test]
    fn explicit_closing_point_is_ignored(ring in arb_ring(), p in arb_point()) {
        let mut closed = ring.clone();
        closed.push(ring[0]);
        prop_assert_eq!(locate_in_ring(p, &closed).unwrap(), locate_in_ring(p, &ring).unwrap());
    }

    #[test]
    fn hole_excludes(polygon in arb_polygon(), p in arb_point()) {
        let in_outer = in_ring(p, &polygon[0]).unwrap();
        let clear_of_hole = locate_in_ring(p, &polygon[1]).unwrap() == Location::Outside;
        prop_assert_eq!(pip(p, &polygon).unwrap(), in_outer && clear_of_hole);
        if locate(p, &polygon).unwrap() == Location::Boundary {
            prop_assert!(!pip(p, &polygon).unwrap());
        }
    }

    #[test]
    fn strictly_inside_a_convex_ring(
        half in 1i32..20,
        x in -100i32..100,
        y in -100i32..100,
    ) {
        // axis-aligned square of side 2 * half around the origin
        let h = half as f64;
        let ring = vec![pt(-h, -h), pt(-h, h), pt(h, h), pt(h, -h)];
        let (px, py) = (x as f64 / 4.0, y as f64 / 4.0);
        let expected = if px.abs() < h && py.abs() < h {
            Location::Inside
        } else if px.abs() > h || py.abs() > h {
            Location::Outside
        } else {
            Location::Boundary
        };
        prop_assert_eq!(locate_in_ring(pt(px, py), &ring).unwrap(), expected);
    }
}
