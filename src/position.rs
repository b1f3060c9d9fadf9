//! Scalars and positions the evaluators operate on.
//!
//! The engine never looks inside a position. Everything it needs is the
//! handful of affine operations in [`Position`], which is implemented for
//! [`nalgebra::Point2`] and [`nalgebra::Point3`] out of the box.
use core::fmt::Debug;
use lerp::Lerp;
use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Scalar type of parameters, weights and coordinates.
///
/// Blanket-implemented; `f32` and `f64` both qualify.
pub trait Real: RealField + Copy + ToPrimitive + Lerp<Self> {}

impl<T> Real for T where T: RealField + Copy + ToPrimitive + Lerp<T> {}

/// A point in 2D or 3D space that control points and samples are made of.
pub trait Position: Copy + Debug {
    type Scalar: Real;

    /// The point with all coordinates zero.
    fn origin() -> Self;

    /// Affine blend `self·(1 − ω) + other·ω`.
    ///
    /// Must return `self` for `ω = 0` and `other` for `ω = 1` exactly.
    fn blend(&self, other: &Self, omega: Self::Scalar) -> Self;

    /// All coordinates multiplied by `factor`.
    fn scale(&self, factor: Self::Scalar) -> Self;

    /// Coordinate-wise sum.
    fn accumulate(&self, other: &Self) -> Self;

    /// Euclidean distance.
    fn distance(&self, other: &Self) -> Self::Scalar;

    /// The point moved by `dx` along the first and `dy` along the second
    /// axis. The rational circle is built in that plane.
    fn offset_xy(&self, dx: Self::Scalar, dy: Self::Scalar) -> Self;
}

nalgebra_position!(Point2, Vector2);
nalgebra_position!(Point3, Vector3);

#[inline]
pub(crate) fn scalar<T: Real>(value: f64) -> T {
    nalgebra::convert(value)
}

#[inline]
pub(crate) fn from_index<T: Real>(index: usize) -> T {
    scalar(index as f64)
}

/// Lossy view of a scalar used for error reports and logging.
#[inline]
pub(crate) fn to_f64<T: Real>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point2, Point3};

    #[test]
    fn blend_hits_endpoints_exactly() {
        let a = Point2::new(0.1f64, -7.3);
        let b = Point2::new(1.0e6f64, 3.3);
        assert_eq!(a.blend(&b, 0.0), a);
        assert_eq!(a.blend(&b, 1.0), b);

        let c = Point2::new(0.0f64, -8.0);
        let d = Point2::new(4.0f64, 4.0);
        assert_eq!(c.blend(&d, 0.5), Point2::new(2.0, -2.0));
        assert_eq!(c.blend(&d, 0.25), Point2::new(1.0, -5.0));
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point3::new(1.0f64, 2.0, 3.0);
        let b = Point3::new(4.0f64, 6.0, 3.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(Point3::<f64>::origin().distance(&a), 14.0f64.sqrt());
    }

    #[test]
    fn offset_leaves_third_axis_alone() {
        let p = Point3::new(1.0f32, 1.0, 9.0).offset_xy(2.0, -1.0);
        assert_eq!(p, Point3::new(3.0, 0.0, 9.0));
    }

    #[test]
    fn homogeneous_ops() {
        let p = Point2::new(2.0f64, -4.0);
        assert_eq!(p.scale(0.5), Point2::new(1.0, -2.0));
        assert_eq!(p.accumulate(&p), Point2::new(4.0, -8.0));
    }
}
