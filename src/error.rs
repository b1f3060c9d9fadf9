//! Error types for parametrization and evaluation.

use crate::{position::to_f64, Real};
use thiserror::Error;

/// Errors that can occur during parametrization or evaluation.
///
/// Every variant is a local, deterministic failure: retrying with the same
/// input reproduces it. Callers driving a redraw loop should skip the frame
/// (or surface the error) instead of retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    /// The control collection cannot be parametrized or sampled.
    #[error("degenerate input: {0}")]
    DegenerateInput(#[from] DegenerateCause),

    /// The query parameter lies outside the evaluation domain.
    #[error("parameter {parameter} lies outside the domain [{min}, {max}]")]
    OutOfDomain { parameter: f64, min: f64, max: f64 },

    /// The segment enclosing the parameter has zero parametric length.
    #[error("segment {index} enclosing parameter {parameter} has zero length")]
    DegenerateSegment { index: usize, parameter: f64 },

    /// The knot vector does not define a valid basis.
    #[error("invalid knot vector: {0}")]
    InvalidKnotVector(#[from] KnotDefect),

    /// The rational weights sum to zero at the parameter.
    #[error("rational weights sum to zero at parameter {parameter}")]
    SingularWeight { parameter: f64 },
}

/// Why a control collection was rejected as degenerate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateCause {
    #[error("at least {required} control points are needed, found {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("control points coincide, the total chord length is zero")]
    CoincidentPoints,

    #[error("at least one sample is needed")]
    NoSamples,

    #[error("control grid rows have unequal lengths")]
    RaggedGrid,

    #[error("circle radius must be positive")]
    NonPositiveRadius,

    #[error("control point index {index} is out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },
}

/// What is wrong with a knot vector.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnotDefect {
    /// `knots[index] > knots[index + 1]`.
    #[error("knot {index} is greater than its successor")]
    Decreasing { index: usize },

    #[error("expected {expected} knots, found {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("degree {degree} needs more than {control_points} control points")]
    DegreeTooHigh {
        degree: usize,
        control_points: usize,
    },

    /// `span` does not leave `degree` knots on either side.
    #[error("span {span} of degree {degree} does not fit {len} knots")]
    SpanOutOfRange { span: usize, degree: usize, len: usize },

    /// The first and last knot of the domain coincide.
    #[error("the evaluation domain has zero length")]
    EmptyDomain,
}

/// Result type for parametrization and evaluation.
pub type SplineResult<T> = Result<T, SplineError>;

impl SplineError {
    pub(crate) fn too_few_points(required: usize, actual: usize) -> Self {
        DegenerateCause::TooFewPoints { required, actual }.into()
    }

    /// `Ok` iff `min ≤ parameter ≤ max`. NaN is always out of domain.
    pub(crate) fn check_domain<T: Real>(
        parameter: T,
        min: T,
        max: T,
    ) -> SplineResult<()> {
        if parameter >= min && parameter <= max {
            Ok(())
        } else {
            Err(Self::OutOfDomain {
                parameter: to_f64(parameter),
                min: to_f64(min),
                max: to_f64(max),
            })
        }
    }
}
