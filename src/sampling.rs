//! Trait-based evaluation and the sampling drivers built on it.
//!
//! Evaluators take `&mut self` so streaming implementations can remember
//! where the previous query landed.
use crate::{
    position::{from_index, to_f64},
    DegenerateCause, Position, Real, SplineResult,
};
use num_traits::{One, Zero};

/// Scalar type of a [`Position`].
pub type ScalarOf<P> = <P as Position>::Scalar;

/// A curve defined over a closed parameter interval.
pub trait ParametricCurve {
    type Point: Position;

    /// The closed interval `[t_min, t_max]` the curve is defined on.
    fn domain(&self) -> (ScalarOf<Self::Point>, ScalarOf<Self::Point>);

    /// Evaluates the curve at `t`.
    ///
    /// # Errors
    /// [`SplineError::OutOfDomain`](crate::SplineError::OutOfDomain) if `t`
    /// lies outside [`domain()`](Self::domain), plus whatever the concrete
    /// evaluator may fail with.
    fn point(&mut self, t: ScalarOf<Self::Point>) -> SplineResult<Self::Point>;

    /// `count` points at evenly spaced parameters spanning the domain.
    fn sample(&mut self, count: usize) -> SplineResult<Vec<Self::Point>>
    where
        Self: Sized,
    {
        sample_curve(self, count)
    }
}

/// A surface over the unit square.
pub trait ParametricSurface {
    type Point: Position;

    /// Evaluates the surface at `(u, v) ∈ [0, 1] × [0, 1]`.
    fn point(
        &mut self,
        u: ScalarOf<Self::Point>,
        v: ScalarOf<Self::Point>,
    ) -> SplineResult<Self::Point>;
}

/// `count` evenly spaced values from `start` to `end`, both included.
///
/// The first value is `start` and the last is `end` exactly. A single
/// value is `start`.
pub fn sweep<T: Real>(start: T, end: T, count: usize) -> impl Iterator<Item = T> {
    let denominator = from_index::<T>(count.saturating_sub(1).max(1));
    (0..count).map(move |k| start.lerp(end, from_index::<T>(k) / denominator))
}

/// Samples `curve` at `count` evenly spaced parameters across its domain.
///
/// The sweep is monotone, so streaming evaluators advance in amortized
/// constant time per sample.
///
/// # Errors
/// [`DegenerateCause::NoSamples`] for `count == 0`; evaluation errors are
/// passed through and no partial result is returned.
pub fn sample_curve<C>(curve: &mut C, count: usize) -> SplineResult<Vec<C::Point>>
where
    C: ParametricCurve + ?Sized,
{
    if count == 0 {
        return Err(DegenerateCause::NoSamples.into());
    }
    let (start, end) = curve.domain();
    let samples = sweep(start, end, count)
        .map(|t| curve.point(t))
        .collect::<SplineResult<Vec<_>>>()?;
    log::trace!(
        "sampled {count} curve points over [{}, {}]",
        to_f64(start),
        to_f64(end)
    );
    Ok(samples)
}

/// A `(slices + 1) × (stacks + 1)` grid of surface samples.
///
/// Stored stack by stack: `v` is constant along a stack, `u` runs across
/// the slices within it.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceSamples<P> {
    slices: usize,
    stacks: usize,
    points: Vec<P>,
}

impl<P> SurfaceSamples<P> {
    pub fn slices(&self) -> usize {
        self.slices
    }

    pub fn stacks(&self) -> usize {
        self.stacks
    }

    /// The sample at `u = slice/slices`, `v = stack/stacks`.
    ///
    /// # Panics
    /// If `slice > slices` or `stack > stacks`.
    pub fn get(&self, slice: usize, stack: usize) -> &P {
        assert!(slice <= self.slices && stack <= self.stacks);
        &self.points[stack * (self.slices + 1) + slice]
    }

    /// One row of `slices + 1` samples per stack.
    pub fn stack_rows(&self) -> core::slice::Chunks<'_, P> {
        self.points.chunks(self.slices + 1)
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn into_points(self) -> Vec<P> {
        self.points
    }
}

/// Samples `surface` on a regular grid over the unit square: `slices`
/// intervals along `u` and `stacks` intervals along `v`.
///
/// # Errors
/// [`DegenerateCause::NoSamples`] if `slices` or `stacks` is zero;
/// evaluation errors are passed through.
pub fn sample_surface<S>(
    surface: &mut S,
    slices: usize,
    stacks: usize,
) -> SplineResult<SurfaceSamples<S::Point>>
where
    S: ParametricSurface + ?Sized,
{
    if slices == 0 || stacks == 0 {
        return Err(DegenerateCause::NoSamples.into());
    }
    let (zero, one) = (
        <S::Point as Position>::Scalar::zero(),
        <S::Point as Position>::Scalar::one(),
    );

    let mut points = Vec::with_capacity((slices + 1) * (stacks + 1));
    for v in sweep(zero, one, stacks + 1) {
        for u in sweep(zero, one, slices + 1) {
            points.push(surface.point(u, v)?);
        }
    }
    log::trace!("sampled a {slices}×{stacks} surface grid");

    Ok(SurfaceSamples {
        slices,
        stacks,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SplineError;
    use nalgebra::Point2;

    #[test]
    fn sweep_hits_both_ends() {
        let values = sweep(0.0f64, 4.0, 9).collect::<Vec<_>>();
        assert_eq!(values.len(), 9);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[4], 2.0);
        assert_eq!(values[8], 4.0);

        let odd = sweep(-0.3f64, 0.7, 7).collect::<Vec<_>>();
        assert_eq!(odd[0], -0.3);
        assert_eq!(odd[6], 0.7);

        assert_eq!(sweep(1.5f32, 2.0, 1).collect::<Vec<_>>(), vec![1.5]);
        assert_eq!(sweep(1.5f32, 2.0, 0).count(), 0);
    }

    /// `(u, v) ↦ (u, v)`.
    struct Identity;

    impl ParametricSurface for Identity {
        type Point = Point2<f64>;

        fn point(&mut self, u: f64, v: f64) -> SplineResult<Point2<f64>> {
            Ok(Point2::new(u, v))
        }
    }

    #[test]
    fn surface_grid_layout() {
        let samples = sample_surface(&mut Identity, 4, 2).unwrap();
        assert_eq!(samples.points().len(), 15);
        assert_eq!(samples.stack_rows().count(), 3);
        assert_eq!(*samples.get(0, 0), Point2::new(0.0, 0.0));
        assert_eq!(*samples.get(1, 2), Point2::new(0.25, 1.0));
        assert_eq!(*samples.get(4, 1), Point2::new(1.0, 0.5));
    }

    #[test]
    fn empty_grids_are_rejected() {
        assert_eq!(
            sample_surface(&mut Identity, 0, 3),
            Err(SplineError::from(DegenerateCause::NoSamples))
        );
    }
}
