//! Rational B-spline (NURBS) curves and the exact rational circle.
use crate::{
    position::scalar, ControlPoint, DegenerateCause, KnotVector,
    ParametricCurve, Position, SplineError, SplineResult,
};
use lerp::Lerp;
use num_traits::{One, Zero};

/// Degree of the rational circle.
pub const CIRCLE_DEGREE: usize = 2;

/// Clamped knot vector of the rational circle; its domain is `[0, 4]`.
pub const CIRCLE_KNOTS: [f64; 10] = [0., 0., 0., 1., 2., 2., 3., 4., 4., 4.];

/// Homogeneous weights of the seven circle control points.
pub const CIRCLE_WEIGHTS: [f64; 7] = [1., 0.5, 0.5, 1., 0.5, 0.5, 1.];

/// Offsets of the circle control points from the center, in units of the
/// radius: corners and edge midpoints of the bounding square, starting
/// and ending at `(1, 0)`.
const CIRCLE_OFFSETS: [(f64, f64); 7] = [
    (1., 0.),
    (1., 1.),
    (-1., 1.),
    (-1., 0.),
    (-1., -1.),
    (1., -1.),
    (1., 0.),
];

/// Evaluates the rational curve of `degree` over `knots` with the `n + 1`
/// weighted control points `control_points[..=n]` at `t`.
///
/// Forms `Cʷ = Σ Nⱼ·hⱼ·Pⱼ` and `H = Σ Nⱼ·hⱼ` over the `degree + 1` basis
/// functions nonzero at `t` and returns `Cʷ / H`.
///
/// # Errors
/// [`SplineError::SingularWeight`] if `H` is zero,
/// [`DegenerateCause::TooFewPoints`] if there are fewer than `n + 1`
/// control points, and the errors of [`KnotVector::find_span()`].
pub fn curve_point<P: Position>(
    n: usize,
    degree: usize,
    knots: &KnotVector<P::Scalar>,
    control_points: &[ControlPoint<P>],
    t: P::Scalar,
) -> SplineResult<P> {
    if control_points.len() <= n {
        return Err(SplineError::too_few_points(n + 1, control_points.len()));
    }
    let span = knots.find_span(n, degree, t)?;
    let basis = knots.basis_functions(span, t, degree)?;

    let (weighted, weight) = basis
        .iter()
        .zip(&control_points[span - degree..=span])
        .fold(
            (P::origin(), P::Scalar::zero()),
            |(weighted, weight), (value, point)| {
                let factor = *value * point.weight;
                (
                    weighted.accumulate(&point.position.scale(factor)),
                    weight + factor,
                )
            },
        );

    if weight == P::Scalar::zero() {
        return Err(SplineError::SingularWeight {
            parameter: crate::position::to_f64(t),
        });
    }
    Ok(weighted.scale(P::Scalar::one() / weight))
}

/// A rational B-spline curve that owns its control points.
#[derive(Clone, Debug, PartialEq)]
pub struct RationalCurve<P: Position> {
    degree: usize,
    knots: KnotVector<P::Scalar>,
    control_points: Vec<ControlPoint<P>>,
    domain: (P::Scalar, P::Scalar),
}

impl<P: Position> RationalCurve<P> {
    /// # Errors
    /// Layout errors of [`KnotVector::check_layout()`] if `knots` does not
    /// fit `control_points.len()` control points of `degree`.
    pub fn try_new(
        degree: usize,
        knots: KnotVector<P::Scalar>,
        control_points: Vec<ControlPoint<P>>,
    ) -> SplineResult<Self> {
        let n = control_points
            .len()
            .checked_sub(1)
            .ok_or_else(|| SplineError::too_few_points(degree + 1, 0))?;
        let domain = knots.domain(n, degree)?;
        Ok(Self {
            degree,
            knots,
            control_points,
            domain,
        })
    }

    /// The full circle of `radius` around `center` in the plane of the
    /// first two coordinates, traced counter-clockwise from
    /// `center + (radius, 0)` over `t ∈ [0, 4]`.
    ///
    /// # Errors
    /// [`DegenerateCause::NonPositiveRadius`] unless `radius > 0`.
    pub fn circle(center: P, radius: P::Scalar) -> SplineResult<Self> {
        if !(radius > P::Scalar::zero()) {
            return Err(DegenerateCause::NonPositiveRadius.into());
        }
        let control_points = CIRCLE_OFFSETS
            .iter()
            .zip(CIRCLE_WEIGHTS)
            .map(|((dx, dy), weight)| {
                ControlPoint::weighted(
                    center.offset_xy(
                        scalar::<P::Scalar>(*dx) * radius,
                        scalar::<P::Scalar>(*dy) * radius,
                    ),
                    scalar(weight),
                )
            })
            .collect();
        let knots = KnotVector::<P::Scalar>::try_new(
            CIRCLE_KNOTS.iter().map(|knot| scalar(*knot)).collect(),
        )?;
        Self::try_new(CIRCLE_DEGREE, knots, control_points)
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn knots(&self) -> &KnotVector<P::Scalar> {
        &self.knots
    }

    pub fn control_points(&self) -> &[ControlPoint<P>] {
        &self.control_points
    }

    /// Moves the control point at `index`, keeping its weight.
    pub fn set_position(&mut self, index: usize, position: P) -> SplineResult<()> {
        let len = self.control_points.len();
        self.control_points
            .get_mut(index)
            .ok_or(DegenerateCause::IndexOutOfRange { index, len })?
            .position = position;
        Ok(())
    }

    /// Evaluates the curve at `t ∈ domain`.
    ///
    /// # Errors
    /// See [`curve_point()`].
    pub fn curve_point(&self, t: P::Scalar) -> SplineResult<P> {
        curve_point(
            self.control_points.len() - 1,
            self.degree,
            &self.knots,
            &self.control_points,
            t,
        )
    }

    /// Evaluates the curve at `s ∈ [0, 1]` mapped linearly onto the domain.
    pub fn point_normalized(&self, s: P::Scalar) -> SplineResult<P> {
        SplineError::check_domain(s, P::Scalar::zero(), P::Scalar::one())?;
        let (start, end) = self.domain;
        self.curve_point(start.lerp(end, s))
    }
}

impl<P: Position> ParametricCurve for RationalCurve<P> {
    type Point = P;

    fn domain(&self) -> (P::Scalar, P::Scalar) {
        self.domain
    }

    fn point(&mut self, t: P::Scalar) -> SplineResult<P> {
        self.curve_point(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KnotDefect;
    use nalgebra::{Point2, Point3};

    #[test]
    fn circle_layout() {
        let curve = RationalCurve::circle(Point2::new(3.0f64, -2.0), 2.0).unwrap();
        assert_eq!(curve.degree(), 2);
        assert_eq!(curve.domain(), (0.0, 4.0));
        let positions = curve
            .control_points()
            .iter()
            .map(|point| point.position)
            .collect::<Vec<_>>();
        assert_eq!(
            positions,
            vec![
                Point2::new(5.0, -2.0),
                Point2::new(5.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, -2.0),
                Point2::new(1.0, -4.0),
                Point2::new(5.0, -4.0),
                Point2::new(5.0, -2.0),
            ]
        );
        let weights = curve.control_points().iter().map(|point| point.weight).collect::<Vec<_>>();
        assert_eq!(weights, CIRCLE_WEIGHTS);
        assert_eq!(curve.knots().as_slice(), CIRCLE_KNOTS);
    }

    #[test]
    fn circle_passes_through_quadrant_points() {
        let curve = RationalCurve::circle(Point2::new(0.0f64, 0.0), 1.0).unwrap();
        let expected = [
            (0.0, Point2::new(1.0, 0.0)),
            (1.0, Point2::new(0.0, 1.0)),
            (2.0, Point2::new(-1.0, 0.0)),
            (3.0, Point2::new(0.0, -1.0)),
            (4.0, Point2::new(1.0, 0.0)),
        ];
        for (t, point) in expected {
            let p = curve.curve_point(t).unwrap();
            assert!((p - point).norm() < 1.0e-12, "t = {t}: {p}");
        }
        let p = curve.curve_point(0.5).unwrap();
        assert!((p - Point2::new(0.8, 0.6)).norm() < 1.0e-12);
    }

    #[test]
    fn circle_in_space_keeps_its_plane() {
        let curve = RationalCurve::circle(Point3::new(1.0f64, 1.0, 2.5), 3.0).unwrap();
        for k in 0..=40 {
            let p = curve.curve_point(k as f64 / 10.0).unwrap();
            assert!((p.z - 2.5).abs() < 1.0e-12);
            assert!(((p - Point3::new(1.0, 1.0, 2.5)).norm() - 3.0).abs() < 1.0e-9);
        }
    }

    #[test]
    fn singular_weights() {
        let mut curve = RationalCurve::circle(Point2::new(0.0f64, 0.0), 1.0).unwrap();
        for point in curve.control_points.iter_mut() {
            point.weight = 0.0;
        }
        assert_eq!(
            curve.curve_point(1.5),
            Err(SplineError::SingularWeight { parameter: 1.5 })
        );
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            RationalCurve::circle(Point2::new(0.0f64, 0.0), 0.0),
            Err(DegenerateCause::NonPositiveRadius.into())
        );
        let knots = KnotVector::try_new(vec![0.0, 0.0, 1.0, 1.0]).unwrap();
        assert_eq!(
            RationalCurve::try_new(1, knots, vec![ControlPoint::new(Point2::new(0.0f64, 0.0))]),
            Err(KnotDefect::DegreeTooHigh { degree: 1, control_points: 1 }.into())
        );
    }

    #[test]
    fn free_function_ignores_trailing_points() {
        // A sectorial surface keeps its apex behind the seven circle points.
        let curve = RationalCurve::circle(Point3::new(0.0f64, 0.0, 0.0), 1.0).unwrap();
        let mut points = curve.control_points().to_vec();
        points.push(ControlPoint::new(Point3::new(0.0, 0.0, 5.0)));
        assert_eq!(
            curve_point(6, 2, curve.knots(), &points, 2.5).unwrap(),
            curve.curve_point(2.5).unwrap()
        );
        assert_eq!(
            curve_point(6, 2, curve.knots(), &points[..5], 2.5),
            Err(SplineError::too_few_points(7, 5))
        );
    }

    #[test]
    fn normalized_parameter() {
        let curve = RationalCurve::circle(Point2::new(0.0f64, 0.0), 1.0).unwrap();
        assert_eq!(curve.point_normalized(0.25).unwrap(), curve.curve_point(1.0).unwrap());
        assert!(curve.point_normalized(1.5).is_err());
    }
}
