use approx::assert_abs_diff_eq;
use assert_matches::assert_matches;
use inertia::{
    bisect, bisect_with, ErrorKind, PartitionConfig, PartitionError, Point, PointId, Side,
};
use itertools::Itertools;
use nalgebra::Vector2;

fn points(coords: &[(i32, i32)]) -> Vec<Point> {
    coords
        .iter()
        .enumerate()
        .map(|(id, &(x, y))| Point::new(id, x, y))
        .collect()
}

fn scenario_a() -> Vec<Point> {
    points(&[
        (0, 0),
        (1, 0),
        (2, 0),
        (3, 0),
        (0, 1),
        (1, 1),
        (2, 1),
        (3, 1),
        (0, 2),
        (1, 2),
    ])
}

fn scenario_b() -> Vec<Point> {
    points(&[(5, -1), (3, 1), (6, 1), (5, 2), (5, 5), (1, 3), (-1, 2)])
}

fn ids(half: &[&Point]) -> Vec<PointId> {
    half.iter().map(|p| p.id()).sorted().collect()
}

#[test]
fn scenario_a_axis() {
    let p = scenario_a();
    let bisection = bisect(&p).unwrap();
    let axis = bisection.axis();
    assert_abs_diff_eq!(axis.a, 0.329213, epsilon = 1e-6);
    assert_abs_diff_eq!(axis.b, 1.0);
    assert_abs_diff_eq!(axis.x_bar(), 1.3, epsilon = 1e-9);
    assert_abs_diff_eq!(axis.y_bar(), 0.8, epsilon = 1e-9);
    assert_abs_diff_eq!(axis.threshold, 0.201236, epsilon = 1e-6);
    assert_eq!(bisection.left().len(), 5);
    assert_eq!(bisection.right().len(), 5);
}

#[test]
fn scenario_b_axis() {
    let p = scenario_b();
    let bisection = bisect(&p).unwrap();
    let axis = bisection.axis();
    assert_abs_diff_eq!(axis.a, 0.229640, epsilon = 1e-6);
    assert_abs_diff_eq!(axis.b, 1.0);
    assert_abs_diff_eq!(axis.x_bar(), 3.428571, epsilon = 1e-6);
    assert_abs_diff_eq!(axis.y_bar(), 1.857143, epsilon = 1e-6);
    assert_abs_diff_eq!(axis.threshold, -0.849703, epsilon = 1e-6);
    assert_eq!(bisection.left().len(), 3);
    assert_eq!(bisection.right().len(), 4);
}

#[test]
fn halves_cover_input_exactly_once() {
    for p in [scenario_a(), scenario_b(), Point::grid(5, 3)] {
        let bisection = bisect(&p).unwrap();
        let mut all = ids(bisection.left());
        all.extend(ids(bisection.right()));
        all.sort();
        assert_eq!(all, p.iter().map(|q| q.id()).collect_vec());
    }
}

#[test]
fn halves_are_balanced() {
    for p in [scenario_a(), scenario_b()] {
        let bisection = bisect(&p).unwrap();
        let diff = bisection.left().len().abs_diff(bisection.right().len());
        assert!(diff <= p.len() % 2);
    }
}

#[test]
fn side_of_agrees_with_halves() {
    for p in [scenario_a(), scenario_b(), Point::grid(4, 4)] {
        let bisection = bisect(&p).unwrap();
        let axis = bisection.axis();
        assert!(bisection.left().iter().all(|q| axis.side_of(q) == Side::Left));
        assert!(bisection.right().iter().all(|q| axis.side_of(q) == Side::Right));
    }
}

#[test]
fn translation_moves_centroid_only() {
    let p = scenario_b();
    let shift = Vector2::new(100.0, -40.0);
    let moved = p
        .iter()
        .map(|q| Point::from_position(q.id().0, q.position() + shift))
        .collect_vec();

    let before = bisect(&p).unwrap();
    let after = bisect(&moved).unwrap();

    assert_abs_diff_eq!(after.axis().a, before.axis().a, epsilon = 1e-9);
    assert_abs_diff_eq!(after.axis().b, before.axis().b, epsilon = 1e-9);
    assert_abs_diff_eq!(
        after.axis().centroid,
        before.axis().centroid + shift,
        epsilon = 1e-9
    );
    assert_eq!(ids(after.left()), ids(before.left()));
    assert_eq!(ids(after.right()), ids(before.right()));
}

// The eigensystem tolerance is absolute, so this only holds while the scaled
// scatter terms stay within a few orders of magnitude of the original.
#[test]
fn scaling_keeps_direction() {
    let p = scenario_a();
    let factor = 3.0;
    let scaled = p
        .iter()
        .map(|q| Point::from_position(q.id().0, q.position() * factor))
        .collect_vec();

    let before = bisect(&p).unwrap();
    let after = bisect(&scaled).unwrap();

    assert_abs_diff_eq!(after.axis().a, before.axis().a, epsilon = 1e-9);
    assert_abs_diff_eq!(after.axis().b, before.axis().b, epsilon = 1e-9);
    assert_abs_diff_eq!(
        after.axis().centroid,
        before.axis().centroid * factor,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        after.axis().threshold,
        before.axis().threshold * factor,
        epsilon = 1e-9
    );
}

#[test]
fn single_point_uses_canonical_direction() {
    let p = points(&[(7, -2)]);
    let bisection = bisect(&p).unwrap();
    let axis = bisection.axis();
    assert_eq!((axis.a, axis.b), (1.0, 1.0));
    assert_eq!(axis.centroid, Vector2::new(7.0, -2.0));
    assert_eq!(bisection.len(), 1);
}

#[test]
fn classifies_points_outside_the_input() {
    let p = scenario_a();
    let bisection = bisect(&p).unwrap();
    let axis = bisection.axis();
    // far along the major axis in either direction
    let west = Point::new(100, -50, 0);
    let east = Point::new(101, 50, 0);
    assert_eq!(axis.side_of(&west), Side::Right);
    assert_eq!(axis.side_of(&east), Side::Left);
}

#[test]
fn regular_polygons_bisect() {
    for n in 3..=11 {
        let p = (0..n)
            .map(|i| {
                let t = std::f64::consts::TAU * i as f64 / n as f64;
                Point::new(i, 0.1 + 7.3 * t.cos(), -3.3 + 7.3 * t.sin())
            })
            .collect_vec();
        let bisection = bisect(&p).unwrap_or_else(|err| panic!("{n}-gon: {err}"));
        assert_eq!(bisection.len(), n);
    }
}

#[test]
fn nan_coordinate_is_not_bisected() {
    let p = vec![Point::new(0, 0, 0), Point::new(1, f64::NAN, 1.0), Point::new(2, 2, 5)];
    let err = bisect(&p).unwrap_err();
    assert_matches!(&err, PartitionError::NoEigenvalue { .. });
    assert_eq!(err.kind(), ErrorKind::NumericalFailure);
}

#[test]
fn large_coordinates_need_a_wider_tolerance() {
    let factor = 1000.0;
    let scaled = scenario_a()
        .iter()
        .map(|q| Point::from_position(q.id().0, q.position() * factor))
        .collect_vec();
    // scatter terms grow with factor^2
    let config = PartitionConfig::build().epsilon(1e-6 * factor * factor).build();
    let bisection = bisect_with(&scaled, &config).unwrap();
    assert_abs_diff_eq!(bisection.axis().a, 0.329213, epsilon = 1e-6);
    assert_abs_diff_eq!(bisection.axis().threshold, 0.201236 * factor, epsilon = 1e-3);
}
