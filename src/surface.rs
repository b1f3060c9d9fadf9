//! Surfaces over the unit square.
use crate::{
    ControlGrid, ParametricCurve, ParametricSurface, PatchCursor, Position,
    RationalCurve, Real, SplineError, SplineResult,
};
use lerp::Lerp;
use nalgebra::Point3;
use num_traits::{One, Zero};

/// The bilinear tensor patch through a parametrized control grid.
///
/// `(u, v) ∈ [0, 1]²` is mapped linearly onto the grid's parameter
/// ranges before evaluation. All built-in parametrizations already span
/// `[0, 1]`, so the map is the identity for them.
#[derive(Clone, Debug)]
pub struct BilinearSurface<'a, P: Position> {
    cursor: PatchCursor<'a, P>,
}

impl<'a, P: Position> BilinearSurface<'a, P> {
    /// Borrows `grid`, which should have been parametrized already.
    pub fn new(grid: &'a ControlGrid<P>) -> Self {
        Self {
            cursor: PatchCursor::new(grid),
        }
    }
}

impl<P: Position> ParametricSurface for BilinearSurface<'_, P> {
    type Point = P;

    fn point(&mut self, u: P::Scalar, v: P::Scalar) -> SplineResult<P> {
        let (zero, one) = (P::Scalar::zero(), P::Scalar::one());
        SplineError::check_domain(u, zero, one)?;
        SplineError::check_domain(v, zero, one)?;

        let (u_first, u_last) = self.cursor.u_domain();
        let (v_first, v_last) = self.cursor.v_domain();
        self.cursor
            .evaluate(u_first.lerp(u_last, u), v_first.lerp(v_last, v))
    }
}

/// A ruled surface joining every point of a rational curve to an apex.
///
/// `P(u, v) = C(u)·(1 − v) + apex·v`, with `u ∈ [0, 1]` mapped onto the
/// curve's domain. Built on the rational circle this is a cone.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorialSurface<P: Position> {
    curve: RationalCurve<P>,
    apex: P,
}

impl<P: Position> SectorialSurface<P> {
    pub fn new(curve: RationalCurve<P>, apex: P) -> Self {
        Self { curve, apex }
    }

    pub fn curve(&self) -> &RationalCurve<P> {
        &self.curve
    }

    pub fn curve_mut(&mut self) -> &mut RationalCurve<P> {
        &mut self.curve
    }

    pub fn apex(&self) -> P {
        self.apex
    }

    pub fn set_apex(&mut self, apex: P) {
        self.apex = apex;
    }

    /// The rim point at `u`, i.e. `P(u, 0)`.
    pub fn rim(&self, u: P::Scalar) -> SplineResult<P> {
        self.curve.point_normalized(u)
    }

    /// Parameter domain of the rim curve.
    pub fn rim_domain(&self) -> (P::Scalar, P::Scalar) {
        self.curve.domain()
    }
}

impl<P: Position> ParametricSurface for SectorialSurface<P> {
    type Point = P;

    fn point(&mut self, u: P::Scalar, v: P::Scalar) -> SplineResult<P> {
        SplineError::check_domain(v, P::Scalar::zero(), P::Scalar::one())?;
        let rim = self.rim(u)?;
        Ok(rim.blend(&self.apex, v))
    }
}

impl<T: Real> SectorialSurface<Point3<T>> {
    /// The cone over the circle of `radius` around `center` in its
    /// `z = center.z` plane, with the apex `height` above the center.
    ///
    /// # Errors
    /// As [`RationalCurve::circle()`].
    pub fn cone(center: Point3<T>, radius: T, height: T) -> SplineResult<Self> {
        let apex = Point3::new(center.x, center.y, center.z + height);
        Ok(Self::new(RationalCurve::circle(center, radius)?, apex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sample_surface, Parametrization};

    fn saddle() -> ControlGrid<Point3<f64>> {
        let mut grid = ControlGrid::from_fn(3, 3, |i, j| {
            let (x, y) = (i as f64 - 1.0, j as f64 - 1.0);
            Point3::new(x, y, x * y)
        })
        .unwrap();
        grid.parametrize(Parametrization::Uniform).unwrap();
        grid
    }

    #[test]
    fn bilinear_reproduces_the_grid() {
        let grid = saddle();
        let mut surface = BilinearSurface::new(&grid);
        for i in 0..3 {
            for j in 0..3 {
                let (u, v) = (i as f64 / 2.0, j as f64 / 2.0);
                assert_eq!(surface.point(u, v).unwrap(), grid.get(i, j).position);
            }
        }
        // x·y is bilinear on each cell.
        let p = surface.point(0.25, 0.75).unwrap();
        assert!((p - Point3::new(-0.5, 0.5, -0.25)).norm() < 1.0e-12);
    }

    #[test]
    fn bilinear_rejects_parameters_outside_the_square() {
        let grid = saddle();
        let mut surface = BilinearSurface::new(&grid);
        assert!(matches!(
            surface.point(1.25, 0.0),
            Err(SplineError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn cone_rim_and_apex() {
        let mut cone =
            SectorialSurface::cone(Point3::new(1.0f64, 2.0, 0.0), 2.0, 5.0).unwrap();
        assert_eq!(cone.apex(), Point3::new(1.0, 2.0, 5.0));

        let samples = sample_surface(&mut cone, 8, 2).unwrap();
        for slice in 0..=8 {
            let rim = samples.get(slice, 0);
            assert!(rim.z.abs() < 1.0e-12);
            assert!(((rim.xy() - Point3::new(1.0, 2.0, 0.0).xy()).norm() - 2.0).abs() < 1.0e-9);

            let halfway = samples.get(slice, 1);
            assert!((halfway.z - 2.5).abs() < 1.0e-12);
            assert_eq!(*samples.get(slice, 2), cone.apex());
        }
    }

    #[test]
    fn moving_the_apex() {
        let mut cone =
            SectorialSurface::cone(Point3::new(0.0f64, 0.0, 0.0), 1.0, 5.0).unwrap();
        cone.set_apex(Point3::new(3.0, 0.0, 1.0));
        assert_eq!(cone.point(0.3, 1.0).unwrap(), Point3::new(3.0, 0.0, 1.0));
        assert_eq!(cone.point(0.0, 0.0).unwrap(), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(cone.rim_domain(), (0.0, 4.0));
    }
}
