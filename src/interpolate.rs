//! Piecewise-linear interpolation through parametrized control points.
//!
//! Two ways to locate the segment (or cell) enclosing a parameter:
//!
//! * The cursors [`PolylineCursor`] and [`PatchCursor`] scan forward from
//!   where the previous query landed. For non-decreasing queries, as
//!   produced by a sampling sweep, this is amortized `O(1)` per query. A
//!   query behind the remembered position restarts the scan at the first
//!   segment, which is correct but linear.
//! * [`evaluate_polyline()`] and [`evaluate_patch()`] binary-search every
//!   query and remember nothing. Use them for random access.
//!
//! Both return the same position for every parameter. They may pick
//! different segments for a parameter on a breakpoint, where the two
//! adjacent segments meet at the same point.
use crate::{
    position::to_f64, ControlGrid, ControlPoint, GridPoint, ParametricCurve,
    Position, Real, SplineError, SplineResult,
};

/// Streaming evaluator of the polyline through a parametrized sequence.
#[derive(Clone, Debug)]
pub struct PolylineCursor<'a, P: Position> {
    points: &'a [ControlPoint<P>],
    segment: usize,
}

impl<'a, P: Position> PolylineCursor<'a, P> {
    /// # Errors
    /// [`DegenerateCause::TooFewPoints`](crate::DegenerateCause::TooFewPoints)
    /// for fewer than two points.
    pub fn new(points: &'a [ControlPoint<P>]) -> SplineResult<Self> {
        if points.len() < 2 {
            return Err(SplineError::too_few_points(2, points.len()));
        }
        Ok(Self { points, segment: 0 })
    }

    /// Index of the segment the last query landed in.
    pub fn segment(&self) -> usize {
        self.segment
    }

    /// Evaluates the polyline at `t`, scanning forward from the previous
    /// query.
    ///
    /// # Errors
    /// [`SplineError::OutOfDomain`] if `t` is outside `[t₀, tₙ₋₁]` and
    /// [`SplineError::DegenerateSegment`] if the enclosing segment has zero
    /// parametric length.
    pub fn evaluate(&mut self, t: P::Scalar) -> SplineResult<P> {
        let (first, last) = self.domain();
        SplineError::check_domain(t, first, last)?;

        if t < self.points[self.segment].parameter {
            log::trace!("query {} behind segment {}, rescanning", to_f64(t), self.segment);
            self.segment = 0;
        }
        // Terminates at the latest on the final segment since t ≤ tₙ₋₁.
        while t > self.points[self.segment + 1].parameter {
            self.segment += 1;
        }
        blend_segment(self.points, self.segment, t)
    }
}

impl<P: Position> ParametricCurve for PolylineCursor<'_, P> {
    type Point = P;

    fn domain(&self) -> (P::Scalar, P::Scalar) {
        (
            self.points[0].parameter,
            self.points[self.points.len() - 1].parameter,
        )
    }

    fn point(&mut self, t: P::Scalar) -> SplineResult<P> {
        self.evaluate(t)
    }
}

/// Evaluates the polyline through `points` at `t` by binary search.
///
/// # Errors
/// As [`PolylineCursor::evaluate()`], plus
/// [`DegenerateCause::TooFewPoints`](crate::DegenerateCause::TooFewPoints)
/// for fewer than two points.
pub fn evaluate_polyline<P: Position>(
    points: &[ControlPoint<P>],
    t: P::Scalar,
) -> SplineResult<P> {
    if points.len() < 2 {
        return Err(SplineError::too_few_points(2, points.len()));
    }
    SplineError::check_domain(t, points[0].parameter, points[points.len() - 1].parameter)?;
    let segment = locate(points.len(), |k| points[k].parameter, t);
    blend_segment(points, segment, t)
}

/// `Pᵢ·(1 − ω) + Pᵢ₊₁·ω` with `ω = (t − tᵢ)/(tᵢ₊₁ − tᵢ)`.
fn blend_segment<P: Position>(
    points: &[ControlPoint<P>],
    segment: usize,
    t: P::Scalar,
) -> SplineResult<P> {
    let (start, end) = (&points[segment], &points[segment + 1]);
    let omega = local_parameter(start.parameter, end.parameter, t, segment)?;
    Ok(start.position.blend(&end.position, omega))
}

/// Position of `t` within `[start, end]` as a fraction of its length.
#[inline]
fn local_parameter<T: Real>(start: T, end: T, t: T, segment: usize) -> SplineResult<T> {
    let length = end - start;
    if length > T::zero() {
        Ok((t - start) / length)
    } else {
        Err(SplineError::DegenerateSegment {
            index: segment,
            parameter: to_f64(t),
        })
    }
}

/// Index `s` of the first segment `[key(s), key(s + 1)]` with
/// `t ≤ key(s + 1)`.
///
/// `key` must be non-decreasing over `0..len` with `t ≤ key(len − 1)`.
fn locate<T: Real>(len: usize, key: impl Fn(usize) -> T, t: T) -> usize {
    let (mut low, mut high) = (1, len - 1);
    while low < high {
        let mid = (low + high) / 2;
        if t <= key(mid) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    low - 1
}

/// Streaming evaluator of the bilinear patch through a parametrized
/// control grid.
///
/// The cell is located along `u` first (on the first column), then along
/// `v` within the found row.
#[derive(Clone, Debug)]
pub struct PatchCursor<'a, P: Position> {
    grid: &'a ControlGrid<P>,
    row: usize,
    col: usize,
}

impl<'a, P: Position> PatchCursor<'a, P> {
    pub fn new(grid: &'a ControlGrid<P>) -> Self {
        Self {
            grid,
            row: 0,
            col: 0,
        }
    }

    /// `(row, col)` of the cell the last query landed in.
    pub fn cell(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// The closed `u` interval of the grid.
    pub fn u_domain(&self) -> (P::Scalar, P::Scalar) {
        u_domain(self.grid)
    }

    /// The closed `v` interval of the grid.
    pub fn v_domain(&self) -> (P::Scalar, P::Scalar) {
        v_domain(self.grid, 0)
    }

    /// Evaluates the patch at `(u, v)` in the grid's own parameters,
    /// scanning forward from the previous query.
    ///
    /// # Errors
    /// [`SplineError::OutOfDomain`] if `u` or `v` is outside the grid's
    /// parameter range and [`SplineError::DegenerateSegment`] if the
    /// enclosing cell is degenerate along either axis.
    pub fn evaluate(&mut self, u: P::Scalar, v: P::Scalar) -> SplineResult<P> {
        let grid = self.grid;
        let (u_first, u_last) = u_domain(grid);
        SplineError::check_domain(u, u_first, u_last)?;

        if u < grid.get(self.row, 0).u {
            self.row = 0;
        }
        while u > grid.get(self.row + 1, 0).u {
            self.row += 1;
        }

        let (v_first, v_last) = v_domain(grid, self.row);
        SplineError::check_domain(v, v_first, v_last)?;

        if v < grid.get(self.row, self.col).v {
            self.col = 0;
        }
        while v > grid.get(self.row, self.col + 1).v {
            self.col += 1;
        }

        blend_cell(grid, self.row, self.col, u, v)
    }
}

/// Evaluates the bilinear patch through `grid` at `(u, v)` by binary
/// search.
///
/// # Errors
/// As [`PatchCursor::evaluate()`].
pub fn evaluate_patch<P: Position>(
    grid: &ControlGrid<P>,
    u: P::Scalar,
    v: P::Scalar,
) -> SplineResult<P> {
    let (u_first, u_last) = u_domain(grid);
    SplineError::check_domain(u, u_first, u_last)?;
    let row = locate(grid.rows(), |i| grid.get(i, 0).u, u);

    let (v_first, v_last) = v_domain(grid, row);
    SplineError::check_domain(v, v_first, v_last)?;
    let col = locate(grid.cols(), |j| grid.get(row, j).v, v);

    blend_cell(grid, row, col, u, v)
}

fn u_domain<P: Position>(grid: &ControlGrid<P>) -> (P::Scalar, P::Scalar) {
    (grid.get(0, 0).u, grid.get(grid.rows() - 1, 0).u)
}

fn v_domain<P: Position>(grid: &ControlGrid<P>, row: usize) -> (P::Scalar, P::Scalar) {
    (grid.get(row, 0).v, grid.get(row, grid.cols() - 1).v)
}

/// Blends along `v` on rows `i` and `i + 1`, then along `u` between the two
/// results.
fn blend_cell<P: Position>(
    grid: &ControlGrid<P>,
    i: usize,
    j: usize,
    u: P::Scalar,
    v: P::Scalar,
) -> SplineResult<P> {
    let corner: &GridPoint<P> = grid.get(i, j);
    let (next_v, next_u, opposite) = (grid.get(i, j + 1), grid.get(i + 1, j), grid.get(i + 1, j + 1));

    let xi = local_parameter(corner.v, next_v.v, v, j)?;
    let omega = local_parameter(corner.u, next_u.u, u, i)?;

    let near = corner.position.blend(&next_v.position, xi);
    let far = next_u.position.blend(&opposite.position, xi);
    Ok(near.blend(&far, omega))
}
