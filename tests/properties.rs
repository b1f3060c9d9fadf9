//! Randomized checks of the invariants the evaluators promise.
//!
//! Inputs are drawn from seeded generators so failures are reproducible.

use nalgebra::{Point2, Point3};
use parametric_splines::{
    evaluate_polyline, ControlGrid, ControlSequence, KnotVector, ParametricCurve,
    Parametrization, PolylineCursor, RationalCurve,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 12345;

/// A clamped knot vector for `n + 1` control points of `degree` with
/// random interior knots, some of them repeated.
fn random_clamped_knots(rng: &mut StdRng, n: usize, degree: usize) -> Vec<f64> {
    let mut interior = (0..n - degree)
        .map(|_| rng.random_range(0.0..10.0))
        .collect::<Vec<f64>>();
    if interior.len() > 1 && rng.random_bool(0.3) {
        interior[1] = interior[0];
    }
    interior.sort_by(f64::total_cmp);

    let mut knots = vec![0.0; degree + 1];
    knots.extend(interior);
    knots.extend(vec![10.0; degree + 1]);
    knots
}

fn random_points(rng: &mut StdRng, count: usize) -> Vec<Point2<f64>> {
    (0..count)
        .map(|_| Point2::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0)))
        .collect()
}

#[test]
fn basis_is_a_partition_of_unity() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..200 {
        let degree = rng.random_range(1..=4);
        let n = rng.random_range(degree..degree + 8);
        let knots = KnotVector::try_new(random_clamped_knots(&mut rng, n, degree)).unwrap();
        assert!(knots.is_clamped(degree));

        for t in [0.0, 10.0, rng.random_range(0.0..10.0), rng.random_range(0.0..10.0)] {
            let span = knots.find_span(n, degree, t).unwrap();
            assert!(span >= degree && span <= n, "span {span} for n = {n}, p = {degree}");

            let values = knots.basis_functions(span, t, degree).unwrap();
            assert_eq!(values.len(), degree + 1);
            assert!(values.iter().all(|value| *value >= -1.0e-12));
            let sum = values.iter().sum::<f64>();
            assert!((sum - 1.0).abs() < 1.0e-9, "sum {sum} at t = {t}");
        }
    }
}

#[test]
fn right_end_of_the_domain_is_the_last_span() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    for _ in 0..50 {
        let degree = rng.random_range(1..=3);
        let n = rng.random_range(degree..degree + 6);
        let knots = KnotVector::try_new(random_clamped_knots(&mut rng, n, degree)).unwrap();
        assert_eq!(knots.find_span(n, degree, 10.0).unwrap(), n);
    }
}

#[test]
fn uniform_parameters_are_exact() {
    let mut rng = StdRng::seed_from_u64(SEED + 2);
    for count in 2..40 {
        let mut sequence = ControlSequence::from_positions(random_points(&mut rng, count));
        sequence.parametrize(Parametrization::Uniform).unwrap();
        for (i, t) in sequence.parameters().enumerate() {
            assert_eq!(t, i as f64 / (count - 1) as f64);
        }
    }
}

#[test]
fn chordal_and_centripetal_parameters_increase() {
    let mut rng = StdRng::seed_from_u64(SEED + 3);
    for _ in 0..100 {
        let count = rng.random_range(2..30);
        let mut sequence = ControlSequence::from_positions(random_points(&mut rng, count));
        for policy in [Parametrization::Chordal, Parametrization::Centripetal] {
            sequence.parametrize(policy).unwrap();
            let parameters = sequence.parameters().collect::<Vec<_>>();
            assert_eq!(parameters[0], 0.0);
            assert_eq!(parameters[count - 1], 1.0);
            assert!(parameters.windows(2).all(|pair| pair[0] < pair[1]), "{parameters:?}");
        }
    }
}

#[test]
fn polyline_endpoints_are_exact() {
    let mut rng = StdRng::seed_from_u64(SEED + 4);
    for policy in Parametrization::ALL {
        for _ in 0..50 {
            let count = rng.random_range(2..20);
            let mut sequence = ControlSequence::from_positions(random_points(&mut rng, count));
            sequence.parametrize(policy).unwrap();
            let points = sequence.points();

            let mut cursor = PolylineCursor::new(points).unwrap();
            assert_eq!(cursor.evaluate(0.0).unwrap(), points[0].position);
            assert_eq!(cursor.evaluate(1.0).unwrap(), points[count - 1].position);

            let t = rng.random_range(0.0..=1.0);
            assert_eq!(cursor.evaluate(t).unwrap(), evaluate_polyline(points, t).unwrap());
        }
    }
}

#[test]
fn grid_parameters_span_the_unit_square() {
    let mut rng = StdRng::seed_from_u64(SEED + 5);
    for policy in Parametrization::ALL {
        for _ in 0..20 {
            let (rows, cols) = (rng.random_range(3..8), rng.random_range(2..8));
            // Jittered lattice: neighbours never coincide.
            let mut grid = ControlGrid::from_fn(rows, cols, |i, j| {
                Point3::new(
                    i as f64 + rng.random_range(-0.3..0.3),
                    j as f64 + rng.random_range(-0.3..0.3),
                    rng.random_range(-2.0..2.0),
                )
            })
            .unwrap();
            grid.parametrize(policy).unwrap();

            for i in 0..rows {
                assert_eq!(grid.get(i, 0).v, 0.0);
                assert_eq!(grid.get(i, cols - 1).v, 1.0);
                for j in 1..cols {
                    assert!(grid.get(i, j - 1).v < grid.get(i, j).v);
                }
            }
            for j in 0..cols {
                assert_eq!(grid.get(0, j).u, 0.0);
                assert_eq!(grid.get(rows - 1, j).u, 1.0);
                for i in 1..rows {
                    assert!(
                        grid.get(i - 1, j).u < grid.get(i, j).u,
                        "{policy}: u not increasing at ({i}, {j})"
                    );
                }
            }
        }
    }
}

#[test]
fn circles_stay_round_in_single_precision() {
    let mut rng = StdRng::seed_from_u64(SEED + 6);
    for _ in 0..20 {
        let center = Point2::new(rng.random_range(-5.0f32..5.0), rng.random_range(-5.0f32..5.0));
        let radius = rng.random_range(0.5f32..5.0);
        let mut circle = RationalCurve::circle(center, radius).unwrap();
        for point in circle.sample(90).unwrap() {
            assert!(((point - center).norm() - radius).abs() < 1.0e-4 * radius.max(1.0));
        }
    }
}
