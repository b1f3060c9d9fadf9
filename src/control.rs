//! Control points and the collections the evaluators borrow.
//!
//! Selection and picking state is deliberately absent; a front end keeps
//! it in a parallel structure keyed by index.
use crate::{
    parametrize, DegenerateCause, Parametrization, Position, SplineError,
    SplineResult,
};
use num_traits::{One, Zero};

/// A control point of a curve: position, homogeneous weight and the
/// parameter assigned by [`Parametrization`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoint<P: Position> {
    pub position: P,
    /// Homogeneous weight. Only the rational evaluator reads it.
    pub weight: P::Scalar,
    /// Parameter `t`. Overwritten whenever the sequence is parametrized.
    pub parameter: P::Scalar,
}

impl<P: Position> ControlPoint<P> {
    /// A point with unit weight and parameter `0`.
    pub fn new(position: P) -> Self {
        Self::weighted(position, P::Scalar::one())
    }

    pub fn weighted(position: P, weight: P::Scalar) -> Self {
        Self {
            position,
            weight,
            parameter: P::Scalar::zero(),
        }
    }
}

impl<P: Position> From<P> for ControlPoint<P> {
    fn from(position: P) -> Self {
        Self::new(position)
    }
}

/// An ordered list of control points.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlSequence<P: Position> {
    points: Vec<ControlPoint<P>>,
}

impl<P: Position> Default for ControlSequence<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Position> ControlSequence<P> {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Unit-weight control points at `positions`.
    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = P>,
    {
        positions.into_iter().map(ControlPoint::new).collect()
    }

    pub fn push(&mut self, point: ControlPoint<P>) {
        self.points.push(point);
    }

    /// Moves the point at `index`, keeping its weight. Parameters are stale
    /// afterwards until the sequence is parametrized again.
    pub fn set_position(&mut self, index: usize, position: P) -> SplineResult<()> {
        let len = self.points.len();
        let point = self
            .points
            .get_mut(index)
            .ok_or(DegenerateCause::IndexOutOfRange { index, len })?;
        point.position = position;
        Ok(())
    }

    /// Assigns parameters in place, see [`parametrize::assign_parameters`].
    pub fn parametrize(&mut self, policy: Parametrization) -> SplineResult<()> {
        parametrize::assign_parameters(&mut self.points, policy)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ControlPoint<P>] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [ControlPoint<P>] {
        &mut self.points
    }

    /// The control polygon.
    pub fn positions(&self) -> impl Iterator<Item = P> + '_ {
        self.points.iter().map(|point| point.position)
    }

    pub fn parameters(&self) -> impl Iterator<Item = P::Scalar> + '_ {
        self.points.iter().map(|point| point.parameter)
    }
}

impl<P: Position> FromIterator<ControlPoint<P>> for ControlSequence<P> {
    fn from_iter<I: IntoIterator<Item = ControlPoint<P>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<P: Position> From<Vec<ControlPoint<P>>> for ControlSequence<P> {
    fn from(points: Vec<ControlPoint<P>>) -> Self {
        Self { points }
    }
}

/// A control point of a surface with its parameters `(u, v)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint<P: Position> {
    pub position: P,
    pub u: P::Scalar,
    pub v: P::Scalar,
}

impl<P: Position> GridPoint<P> {
    pub fn new(position: P) -> Self {
        Self {
            position,
            u: P::Scalar::zero(),
            v: P::Scalar::zero(),
        }
    }
}

/// A rectangular `rows × cols` net of control points, stored row-major.
///
/// The row index `i` runs along `u`, the column index `j` along `v`.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlGrid<P: Position> {
    rows: usize,
    cols: usize,
    points: Vec<GridPoint<P>>,
}

impl<P: Position> ControlGrid<P> {
    /// Builds a grid from `position(i, j)`.
    ///
    /// # Errors
    /// [`DegenerateCause::TooFewPoints`] unless both dimensions are ≥ 2.
    pub fn from_fn<F>(rows: usize, cols: usize, mut position: F) -> SplineResult<Self>
    where
        F: FnMut(usize, usize) -> P,
    {
        if rows < 2 || cols < 2 {
            return Err(SplineError::too_few_points(2, rows.min(cols)));
        }
        let points = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| GridPoint::new(position(i, j)))
            .collect();
        Ok(Self { rows, cols, points })
    }

    /// Builds a grid from nested rows.
    ///
    /// # Errors
    /// [`DegenerateCause::RaggedGrid`] if the rows differ in length and
    /// [`DegenerateCause::TooFewPoints`] if either dimension is below 2.
    pub fn from_rows(rows: Vec<Vec<P>>) -> SplineResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return Err(DegenerateCause::RaggedGrid.into());
        }
        Self::from_fn(rows.len(), cols, |i, j| rows[i][j])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// # Panics
    /// If `i` or `j` is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> &GridPoint<P> {
        &self.points[i * self.cols + j]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, i: usize, j: usize) -> &mut GridPoint<P> {
        &mut self.points[i * self.cols + j]
    }

    /// Moves the point at `(i, j)`. Parameters are stale afterwards until
    /// the grid is parametrized again.
    pub fn set_position(&mut self, i: usize, j: usize, position: P) -> SplineResult<()> {
        if i >= self.rows || j >= self.cols {
            return Err(DegenerateCause::IndexOutOfRange {
                index: i * self.cols + j,
                len: self.points.len(),
            }
            .into());
        }
        self.get_mut(i, j).position = position;
        Ok(())
    }

    /// Assigns `(u, v)` in place, see
    /// [`parametrize::assign_grid_parameters`].
    pub fn parametrize(&mut self, policy: Parametrization) -> SplineResult<()> {
        parametrize::assign_grid_parameters(self, policy)
    }

    pub fn points(&self) -> &[GridPoint<P>] {
        &self.points
    }

    /// Control net line along `v` at row `i`.
    pub fn row_polyline(&self, i: usize) -> impl Iterator<Item = P> + '_ {
        self.points[i * self.cols..(i + 1) * self.cols]
            .iter()
            .map(|point| point.position)
    }

    /// Control net line along `u` at column `j`.
    pub fn column_polyline(&self, j: usize) -> impl Iterator<Item = P> + '_ {
        (0..self.rows).map(move |i| self.get(i, j).position)
    }
}
