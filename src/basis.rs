use crate::{KnotDefect, Real, SplineError, SplineResult};

/// A non-decreasing sequence of knots defining a B-spline basis.
///
/// For `n + 1` control points and degree `p` the vector holds `n + p + 2`
/// knots and the basis is defined on `[knots[p], knots[n + 1]]`. It is
/// *clamped* if the first and last knot each repeat `p + 1` times.
#[derive(Clone, Debug, PartialEq)]
pub struct KnotVector<T>(Vec<T>);

impl<T: Real> KnotVector<T> {
    /// # Errors
    /// [`KnotDefect::Decreasing`] if a knot is greater than its successor
    /// (or either is NaN).
    pub fn try_new(knots: Vec<T>) -> SplineResult<Self> {
        if let Some(index) = knots.windows(2).position(|pair| !(pair[0] <= pair[1])) {
            return Err(KnotDefect::Decreasing { index }.into());
        }
        Ok(Self(knots))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// `true` if both ends repeat `degree + 1` times.
    pub fn is_clamped(&self, degree: usize) -> bool {
        let knots = &self.0;
        knots.len() > 2 * degree + 1
            && knots[..=degree].iter().all(|knot| *knot == knots[0])
            && knots[knots.len() - degree - 1..]
                .iter()
                .all(|knot| *knot == knots[knots.len() - 1])
    }

    /// Checks that the vector fits `n + 1` control points of `degree`.
    ///
    /// # Errors
    /// [`KnotDefect::DegreeTooHigh`] if `degree > n`,
    /// [`KnotDefect::LengthMismatch`] unless there are `n + degree + 2`
    /// knots and [`KnotDefect::EmptyDomain`] if the domain has zero length.
    pub fn check_layout(&self, n: usize, degree: usize) -> SplineResult<()> {
        if degree > n {
            return Err(KnotDefect::DegreeTooHigh {
                degree,
                control_points: n + 1,
            }
            .into());
        }
        let expected = n + degree + 2;
        if self.0.len() != expected {
            return Err(KnotDefect::LengthMismatch {
                expected,
                actual: self.0.len(),
            }
            .into());
        }
        if !(self.0[degree] < self.0[n + 1]) {
            return Err(KnotDefect::EmptyDomain.into());
        }
        Ok(())
    }

    /// The closed interval `[knots[degree], knots[n + 1]]`.
    ///
    /// # Errors
    /// See [`check_layout()`](Self::check_layout).
    pub fn domain(&self, n: usize, degree: usize) -> SplineResult<(T, T)> {
        self.check_layout(n, degree)?;
        Ok((self.0[degree], self.0[n + 1]))
    }

    /// Index `i` of the knot span `[knots[i], knots[i + 1])` containing
    /// `t`, for `n + 1` control points of `degree`.
    ///
    /// At the right end of the domain, where the half-open spans do not
    /// reach, this returns `n`. The basis window `i − degree ..= i` of the
    /// result always lies within `0..=n`.
    ///
    /// # Errors
    /// [`SplineError::OutOfDomain`] if `t` is outside
    /// [`domain()`](Self::domain), and layout errors as
    /// [`check_layout()`](Self::check_layout).
    ///
    /// # Examples
    /// ```
    /// use parametric_splines::KnotVector;
    ///
    /// let knots = KnotVector::try_new(vec![0., 0., 0., 1., 2., 2., 3., 4., 4., 4.]).unwrap();
    ///
    /// assert_eq!(knots.find_span(6, 2, 0.0).unwrap(), 2);
    /// assert_eq!(knots.find_span(6, 2, 2.5).unwrap(), 5);
    /// assert_eq!(knots.find_span(6, 2, 4.0).unwrap(), 6);
    /// ```
    pub fn find_span(&self, n: usize, degree: usize, t: T) -> SplineResult<usize> {
        let (first, last) = self.domain(n, degree)?;
        SplineError::check_domain(t, first, last)?;

        let knots = &self.0;
        if t == knots[n + 1] {
            return Ok(n);
        }

        // knots[low] ≤ t < knots[high]
        let (mut low, mut high) = (degree, n + 1);
        let mut mid = (low + high) / 2;
        while t < knots[mid] || t >= knots[mid + 1] {
            if t < knots[mid] {
                high = mid;
            } else {
                low = mid;
            }
            mid = (low + high) / 2;
        }
        Ok(mid)
    }

    /// The `degree + 1` basis functions that are nonzero on `span`,
    /// `N[span − degree] … N[span]`, evaluated at `t`.
    ///
    /// Uses the triangular recurrence in `O(degree²)`. For a `span` found
    /// by [`find_span()`](Self::find_span) the values are non-negative and
    /// sum to one.
    ///
    /// # Errors
    /// [`KnotDefect::SpanOutOfRange`] if `span < degree` or `span + degree`
    /// is not a knot index, and [`SplineError::OutOfDomain`] if `t` is
    /// outside `[knots[degree], knots[len − degree − 1]]`.
    pub fn basis_functions(&self, span: usize, t: T, degree: usize) -> SplineResult<Vec<T>> {
        let len = self.0.len();
        if span < degree || span + degree >= len {
            return Err(KnotDefect::SpanOutOfRange { span, degree, len }.into());
        }
        SplineError::check_domain(t, self.0[degree], self.0[len - degree - 1])?;

        let knots = &self.0;
        let mut values = vec![T::zero(); degree + 1];
        let mut left = vec![T::zero(); degree + 1];
        let mut right = vec![T::zero(); degree + 1];
        values[0] = T::one();

        for j in 1..=degree {
            left[j] = t - knots[span + 1 - j];
            right[j] = knots[span + j] - t;
            let mut saved = T::zero();
            for r in 0..j {
                let temp = values[r] / (right[r + 1] + left[j - r]);
                values[r] = saved + right[r + 1] * temp;
                saved = left[j - r] * temp;
            }
            values[j] = saved;
        }
        Ok(values)
    }
}

impl<T> AsRef<[T]> for KnotVector<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}
