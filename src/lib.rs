//! Parametrized curve and surface evaluation.
//!
//! The crate turns a handful of control points into densely sampled
//! geometry for a renderer:
//!
//! * [`Parametrization`] assigns every control point a parameter
//!   (uniform, chordal or centripetal), for sequences and for grids.
//! * [`PolylineCursor`] and [`PatchCursor`] interpolate linearly between
//!   parametrized control points in one and two dimensions.
//! * [`KnotVector`] locates knot spans and evaluates the B-spline basis.
//! * [`RationalCurve`] evaluates rational B-splines exactly, including the
//!   seven point [`circle`](RationalCurve::circle).
//! * [`BilinearSurface`] and [`SectorialSurface`] map the unit square to
//!   space.
//! * [`sample_curve()`] and [`sample_surface()`] sweep any of the above.
//!
//! Positions are generic over the [`Position`] trait, which is
//! implemented for [`nalgebra::Point2`] and [`nalgebra::Point3`] over `f32`
//! and `f64`.
//!
//! # Examples
//!
//! ```
//! use nalgebra::Point2;
//! use parametric_splines::prelude::*;
//!
//! let mut square = ControlSequence::from_positions([
//!     Point2::new(0.0f64, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]);
//! square.parametrize(Parametrization::Uniform).unwrap();
//!
//! let samples = PolylineCursor::new(square.points()).unwrap().sample(4).unwrap();
//! assert_eq!(samples, square.positions().collect::<Vec<_>>());
//!
//! let mut circle = RationalCurve::circle(Point2::new(0.0f64, 0.0), 2.0).unwrap();
//! for point in circle.sample(360).unwrap() {
//!     assert!((point.coords.norm() - 2.0).abs() < 1.0e-6);
//! }
//! ```
//!
//! # Errors
//!
//! Every evaluator returns a [`SplineResult`]. Parameters outside the
//! domain, degenerate inputs and broken knot vectors are reported, never
//! clamped. The [scenes](PolylineScene) build on that to keep showing the
//! last good samples while an edit is invalid.
//!
//! # Features
#![doc = document_features::document_features!()]

#[macro_use]
mod position_macros;

mod basis;
mod control;
mod error;
mod interpolate;
mod options;
pub mod parametrize;
mod position;
mod rational;
mod sampling;
mod scene;
mod surface;

pub use basis::KnotVector;
pub use control::{ControlGrid, ControlPoint, ControlSequence, GridPoint};
pub use error::{DegenerateCause, KnotDefect, SplineError, SplineResult};
pub use interpolate::{evaluate_patch, evaluate_polyline, PatchCursor, PolylineCursor};
pub use options::{CircleOptions, CurveOptions, SectorOptions, SurfaceOptions, WaveGridOptions};
pub use parametrize::{Parametrization, UnknownParametrization};
pub use position::{Position, Real};
pub use rational::{curve_point, RationalCurve, CIRCLE_DEGREE, CIRCLE_KNOTS, CIRCLE_WEIGHTS};
pub use sampling::{
    sample_curve, sample_surface, sweep, ParametricCurve, ParametricSurface, ScalarOf,
    SurfaceSamples,
};
pub use scene::{wave_grid, CircleScene, PatchScene, PolylineScene, SectorScene};
pub use surface::{BilinearSurface, SectorialSurface};

/// Everything needed to build, parametrize and sample curves and
/// surfaces.
pub mod prelude {
    pub use crate::{
        BilinearSurface, ControlGrid, ControlPoint, ControlSequence, KnotVector,
        ParametricCurve, ParametricSurface, Parametrization, PatchCursor, PolylineCursor,
        Position, RationalCurve, SectorialSurface, SplineError, SplineResult,
    };
}
