//! Assignment of parameters to control points.
use crate::{
    position::from_index, ControlGrid, ControlPoint, DegenerateCause, Position,
    Real, SplineError, SplineResult,
};
use core::{fmt, str::FromStr};
use num_traits::{One, Zero};

/// Policy for spacing the parameters of consecutive control points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Parametrization {
    /// Parameters depend on the index only: `tᵢ = i/(n − 1)`.
    #[default]
    Uniform,
    /// Parameter steps proportional to the chord length.
    Chordal,
    /// Parameter steps proportional to the square root of the chord
    /// length.
    Centripetal,
}

impl Parametrization {
    pub const ALL: [Self; 3] = [Self::Uniform, Self::Chordal, Self::Centripetal];

    pub fn name(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Chordal => "chordal",
            Self::Centripetal => "centripetal",
        }
    }

    /// Parametric length of a chord of the given Euclidean `length`.
    #[inline]
    pub fn step<T: Real>(self, length: T) -> T {
        match self {
            Self::Uniform => T::one(),
            Self::Chordal => length,
            Self::Centripetal => length.sqrt(),
        }
    }
}

impl fmt::Display for Parametrization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when parsing a [`Parametrization`] from an unknown name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown parametrization `{0}`, expected uniform, chordal or centripetal")]
pub struct UnknownParametrization(pub String);

impl FromStr for Parametrization {
    type Err = UnknownParametrization;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| UnknownParametrization(name.to_owned()))
    }
}

/// Parameters of the `len` points `position(0) … position(len − 1)`
/// along one polyline.
///
/// The first parameter is `0` and the last is `1`; both are set directly
/// rather than accumulated.
///
/// # Errors
/// [`DegenerateCause::TooFewPoints`] for fewer than two points and
/// [`DegenerateCause::CoincidentPoints`] if the total parametric length is
/// zero.
pub fn line_parameters<P, F>(
    len: usize,
    position: F,
    policy: Parametrization,
) -> SplineResult<Vec<P::Scalar>>
where
    P: Position,
    F: Fn(usize) -> P,
{
    if len < 2 {
        return Err(SplineError::too_few_points(2, len));
    }
    let last = len - 1;

    if Parametrization::Uniform == policy {
        let denominator = from_index::<P::Scalar>(last);
        return Ok((0..len)
            .map(|i| from_index::<P::Scalar>(i) / denominator)
            .collect());
    }

    let steps = (1..len)
        .map(|i| policy.step(position(i - 1).distance(&position(i))))
        .collect::<Vec<_>>();
    let total = steps
        .iter()
        .fold(P::Scalar::zero(), |total, step| total + *step);

    // Also rejects NaN coordinates.
    if !(total > P::Scalar::zero()) {
        return Err(DegenerateCause::CoincidentPoints.into());
    }

    let mut parameters = Vec::with_capacity(len);
    parameters.push(P::Scalar::zero());
    for step in &steps[..last - 1] {
        let previous = parameters[parameters.len() - 1];
        parameters.push(previous + *step / total);
    }
    parameters.push(P::Scalar::one());

    Ok(parameters)
}

/// Assigns the parameter `t` of every point in `points` in place.
///
/// # Errors
/// See [`line_parameters()`]. On error no parameter is modified.
pub fn assign_parameters<P: Position>(
    points: &mut [ControlPoint<P>],
    policy: Parametrization,
) -> SplineResult<()> {
    let parameters =
        line_parameters(points.len(), |i| points[i].position, policy)?;
    for (point, parameter) in points.iter_mut().zip(parameters) {
        point.parameter = parameter;
    }
    log::debug!("assigned {policy} parameters to {} control points", points.len());
    Ok(())
}

/// Assigns `(u, v)` of every point in `grid` in place.
///
/// `uniform` sets `uᵢⱼ = i/(rows − 1)` and `vᵢⱼ = j/(cols − 1)`.
///
/// `chordal` and `centripetal` parametrize every column along `u` and every
/// row along `v` independently and then average across the other axis:
/// `uᵢ` is the mean over all columns of their `i`-th parameter, `vⱼ` the
/// mean over all rows of their `j`-th parameter. Every point of row `i`
/// shares `uᵢ` and every point of column `j` shares `vⱼ`, so both are
/// non-decreasing along their axis, start at `0` and end at `1`.
///
/// # Errors
/// [`DegenerateCause::CoincidentPoints`] if any row or column has zero
/// total length. On error no parameter is modified.
pub fn assign_grid_parameters<P: Position>(
    grid: &mut ControlGrid<P>,
    policy: Parametrization,
) -> SplineResult<()> {
    let (rows, cols) = (grid.rows(), grid.cols());

    let (u, v) = {
        let grid = &*grid;
        let along_u = |j: usize, i: usize| grid.get(i, j).position;
        let along_v = |i: usize, j: usize| grid.get(i, j).position;
        match policy {
            Parametrization::Uniform => (
                line_parameters(rows, |i| along_u(0, i), policy)?,
                line_parameters(cols, |j| along_v(0, j), policy)?,
            ),
            Parametrization::Chordal | Parametrization::Centripetal => (
                averaged_parameters(cols, rows, along_u, policy)?,
                averaged_parameters(rows, cols, along_v, policy)?,
            ),
        }
    };

    for (i, u) in u.iter().enumerate() {
        for (j, v) in v.iter().enumerate() {
            let point = grid.get_mut(i, j);
            point.u = *u;
            point.v = *v;
        }
    }
    log::debug!("assigned {policy} parameters to a {rows}×{cols} control grid");
    Ok(())
}

/// Mean of the parameters of `lines` polylines of `len` points each.
fn averaged_parameters<P, F>(
    lines: usize,
    len: usize,
    position: F,
    policy: Parametrization,
) -> SplineResult<Vec<P::Scalar>>
where
    P: Position,
    F: Fn(usize, usize) -> P,
{
    let mut sum = vec![P::Scalar::zero(); len];
    for line in 0..lines {
        let parameters = line_parameters(len, |k| position(line, k), policy)?;
        for (total, parameter) in sum.iter_mut().zip(parameters) {
            *total += parameter;
        }
    }
    let count = from_index::<P::Scalar>(lines);
    Ok(sum.into_iter().map(|total| total / count).collect())
}
