//! The [`BSpline`] curve and its evaluation.
//!
//! A curve of degree `k` is described by a non-decreasing knot vector `t`
//! and `n` control points `P`, with `t.len() == n + k + 1`. Its domain is
//! `[t[k], t[n]]`; every parameter inside it falls into exactly one knot
//! span and is evaluated with de Boor's algorithm from the `k + 1` control
//! points that are active on that span.
use crate::{
    sample::{blend, count, scaled_difference, Sample},
    Scalar, SplineError, SplineResult,
};
use alloc::vec::Vec;

/// A B-spline curve with control points in `D` dimensions.
///
/// Scalar curves use `D == 1`.
///
/// Once built a curve is never modified; all evaluation methods take
/// `&self`, so a curve can be shared freely between threads.
#[derive(Clone, Debug, PartialEq)]
pub struct BSpline<T, const D: usize> {
    knots: Vec<T>,
    control_points: Vec<Sample<T, D>>,
    degree: usize,
    extrapolate: bool,
}

impl<T: Scalar, const D: usize> BSpline<T, D> {
    /// Creates a curve from its raw parts.
    ///
    /// # Errors
    ///
    /// * [`SplineError::KnotCountMismatch`] unless
    ///   `knots.len() == control_points.len() + degree + 1`.
    /// * [`SplineError::InsufficientControlPoints`] if there are fewer than
    ///   `degree + 1` control points.
    /// * [`SplineError::NonMonotonicKnots`] if the knots ever decrease (or
    ///   contain NaN).
    pub fn new(
        knots: Vec<T>,
        control_points: Vec<Sample<T, D>>,
        degree: usize,
        extrapolate: bool,
    ) -> SplineResult<Self> {
        let expected = control_points.len() + degree + 1;
        if knots.len() != expected {
            return Err(SplineError::KnotCountMismatch {
                degree,
                control_points: control_points.len(),
                expected,
                actual: knots.len(),
            });
        }

        if control_points.len() < degree + 1 {
            return Err(SplineError::InsufficientControlPoints {
                degree,
                required: degree + 1,
                actual: control_points.len(),
            });
        }

        if knots.windows(2).any(|pair| !(pair[0] <= pair[1])) {
            return Err(SplineError::NonMonotonicKnots);
        }

        Ok(Self {
            knots,
            control_points,
            degree,
            extrapolate,
        })
    }

    /// The knot vector, `control_points().len() + degree() + 1` long.
    #[inline]
    pub fn knots(&self) -> &[T] {
        &self.knots
    }

    /// The control points, ghost samples included.
    #[inline]
    pub fn control_points(&self) -> &[Sample<T, D>] {
        &self.control_points
    }

    /// The polynomial degree `k` of every piece.
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Whether evaluation outside [`domain()`](Self::domain) continues the
    /// boundary pieces instead of failing.
    #[inline]
    pub fn extrapolate(&self) -> bool {
        self.extrapolate
    }

    /// Returns `(knots, control_points, degree, extrapolate)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<Sample<T, D>>, usize, bool) {
        (
            self.knots,
            self.control_points,
            self.degree,
            self.extrapolate,
        )
    }

    /// The parameter range `[t[k], t[n]]` the curve is defined on.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.knots[self.degree], self.knots[self.control_points.len()])
    }

    /// Returns the `nu`-th derivative as a curve of degree `k - nu`.
    ///
    /// The derivative shares this curve's domain. For `nu > k` the result is
    /// a piecewise constant curve that is zero everywhere.
    pub fn derivative(&self, nu: usize) -> Self {
        let mut knots = self.knots.clone();
        let mut control_points = self.control_points.clone();
        let mut degree = self.degree;

        for _ in 0..nu.min(self.degree) {
            let p = count::<T>(degree);
            control_points = control_points
                .windows(2)
                .enumerate()
                .map(|(i, pair)| {
                    let width = knots[i + degree + 1] - knots[i + 1];
                    if width == T::zero() {
                        [T::zero(); D]
                    } else {
                        scaled_difference(&pair[1], &pair[0], p, width)
                    }
                })
                .collect();
            knots = knots[1..knots.len() - 1].to_vec();
            degree -= 1;
        }

        if nu > self.degree {
            control_points.fill([T::zero(); D]);
        }

        Self {
            knots,
            control_points,
            degree,
            extrapolate: self.extrapolate,
        }
    }

    /// Evaluates the `nu`-th derivative of the curve at `t`; `nu == 0` is
    /// the position.
    ///
    /// # Errors
    ///
    /// [`SplineError::OutOfDomain`] if `t` is NaN, or if `t` lies outside
    /// [`domain()`](Self::domain) and the curve does not extrapolate.
    pub fn evaluate(&self, t: T, nu: usize) -> SplineResult<Sample<T, D>> {
        self.check_domain(t)?;

        Ok(match nu {
            0 => self.de_boor(t),
            nu if nu > self.degree => [T::zero(); D],
            nu => self.derivative(nu).de_boor(t),
        })
    }

    /// Evaluates the `nu`-th derivative at every parameter in `ts`.
    ///
    /// # Errors
    ///
    /// Fails on the first parameter [`evaluate()`](Self::evaluate) would
    /// reject; no partial result is returned.
    pub fn evaluate_many(
        &self,
        ts: &[T],
        nu: usize,
    ) -> SplineResult<Vec<Sample<T, D>>> {
        let derived = (0 < nu).then(|| self.derivative(nu));
        let curve = derived.as_ref().unwrap_or(self);

        ts.iter().map(|&t| curve.evaluate(t, 0)).collect()
    }

    fn check_domain(&self, t: T) -> SplineResult<()> {
        let (start, end) = self.domain();
        if t.is_nan() || (!self.extrapolate && (t < start || end < t)) {
            return Err(SplineError::OutOfDomain {
                t: t.to_f64().unwrap_or(f64::NAN),
                start: start.to_f64().unwrap_or(f64::NAN),
                end: end.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Index `i` in `[k, n - 1]` of the knot span `[t[i], t[i + 1])`
    /// holding `x`.
    ///
    /// Parameters left of the domain map to the first span and parameters
    /// right of it to the last, which is what makes extrapolation continue
    /// the boundary pieces.
    #[inline]
    fn span(&self, x: T) -> usize {
        let k = self.degree;
        let n = self.control_points.len();
        k + self.knots[k..n]
            .partition_point(|&knot| knot <= x)
            .saturating_sub(1)
    }

    fn de_boor(&self, x: T) -> Sample<T, D> {
        let k = self.degree;
        let span = self.span(x);
        let mut d = self.control_points[span - k..=span].to_vec();

        for r in 1..=k {
            for j in (r..=k).rev() {
                let i = span - k + j;
                let width = self.knots[i + k - r + 1] - self.knots[i];
                // Zero-width intervals only occur at repeated knots.
                let alpha = if width == T::zero() {
                    T::zero()
                } else {
                    (x - self.knots[i]) / width
                };
                d[j] = blend(&d[j - 1], &d[j], alpha);
            }
        }

        d[k]
    }
}

impl<T: Scalar> BSpline<T, 1> {
    /// [`evaluate()`](Self::evaluate) for scalar curves.
    pub fn evaluate_scalar(&self, t: T, nu: usize) -> SplineResult<T> {
        self.evaluate(t, nu).map(|[value]| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn polyline(extrapolate: bool) -> BSpline<f64, 1> {
        BSpline::new(
            vec![-1.0, 0.0, 1.0, 2.0, 3.0],
            vec![[0.0], [1.0], [4.0]],
            1,
            extrapolate,
        )
        .unwrap()
    }

    #[test]
    fn rejects_wrong_knot_count() {
        let result = BSpline::new(vec![0.0, 1.0, 2.0], vec![[0.0], [1.0]], 1, true);
        assert_eq!(
            result,
            Err(SplineError::KnotCountMismatch {
                degree: 1,
                control_points: 2,
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn rejects_decreasing_knots() {
        let result =
            BSpline::new(vec![0.0, 2.0, 1.0, 3.0], vec![[0.0], [1.0]], 1, true);
        assert_eq!(result, Err(SplineError::NonMonotonicKnots));
    }

    #[test]
    fn rejects_too_few_control_points() {
        let knots = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let result = BSpline::new(knots, vec![[0.0], [1.0]], 3, true);
        assert_eq!(
            result,
            Err(SplineError::InsufficientControlPoints {
                degree: 3,
                required: 4,
                actual: 2,
            })
        );
    }

    #[test]
    fn domain_bounds() {
        assert_eq!(polyline(true).domain(), (0.0, 2.0));
    }

    #[test]
    fn linear_pieces() {
        let curve = polyline(false);
        assert_abs_diff_eq!(curve.evaluate_scalar(0.0, 0).unwrap(), 0.0);
        assert_abs_diff_eq!(curve.evaluate_scalar(0.5, 0).unwrap(), 0.5);
        assert_abs_diff_eq!(curve.evaluate_scalar(1.5, 0).unwrap(), 2.5);
        assert_abs_diff_eq!(curve.evaluate_scalar(2.0, 0).unwrap(), 4.0);
    }

    #[test]
    fn linear_derivative_is_piecewise_constant() {
        let curve = polyline(false);
        assert_abs_diff_eq!(curve.evaluate_scalar(0.5, 1).unwrap(), 1.0);
        assert_abs_diff_eq!(curve.evaluate_scalar(1.5, 1).unwrap(), 3.0);
        assert_eq!(curve.evaluate_scalar(1.5, 2).unwrap(), 0.0);

        let derived = curve.derivative(1);
        assert_eq!(derived.degree(), 0);
        assert_eq!(derived.knots(), &[0.0, 1.0, 2.0]);
        assert_eq!(derived.domain(), curve.domain());
    }

    #[test]
    fn out_of_domain_without_extrapolation() {
        let curve = polyline(false);
        assert!(matches!(
            curve.evaluate(-0.5, 0),
            Err(SplineError::OutOfDomain { start, end, .. }) if start == 0.0 && end == 2.0
        ));
        assert!(curve.evaluate(2.5, 1).is_err());
        assert!(curve.evaluate_many(&[0.5, 1.0, 7.0], 0).is_err());
    }

    #[test]
    fn extrapolation_continues_boundary_pieces() {
        let curve = polyline(true);
        assert_abs_diff_eq!(curve.evaluate_scalar(-0.5, 0).unwrap(), -0.5);
        assert_abs_diff_eq!(curve.evaluate_scalar(3.0, 0).unwrap(), 7.0);
    }

    #[test]
    fn nan_is_never_in_domain() {
        assert!(matches!(
            polyline(true).evaluate(f64::NAN, 0),
            Err(SplineError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn uniform_cubic_at_knot() {
        let curve = BSpline::new(
            (0..9).map(f64::from).collect(),
            vec![[1.0, 0.0], [2.0, 6.0], [4.0, 0.0], [8.0, -6.0], [0.0, 0.0]],
            3,
            true,
        )
        .unwrap();
        // At t[4] only control points 1, 2 and 3 contribute, weighted 1:4:1.
        let p = curve.evaluate(4.0, 0).unwrap();
        assert_abs_diff_eq!(p[0], (2.0 + 16.0 + 8.0) / 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p[1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn cubic_over_squares_has_constant_curvature() {
        // Uniform cubic pieces reproduce the quadratic their control
        // points sample, so `s'' == 2` on the whole domain.
        let curve = BSpline::new(
            (0..10).map(f64::from).collect(),
            (0..6).map(|i| [f64::from(i * i)]).collect(),
            3,
            false,
        )
        .unwrap();
        assert_eq!(curve.domain(), (3.0, 6.0));

        for t in [3.0, 3.7, 4.0, 4.5, 5.25, 6.0] {
            assert_abs_diff_eq!(
                curve.evaluate_scalar(t, 2).unwrap(),
                2.0,
                epsilon = 1e-12
            );
            assert_abs_diff_eq!(
                curve.evaluate_scalar(t, 1).unwrap(),
                2.0 * t - 4.0,
                epsilon = 1e-12
            );
            assert_abs_diff_eq!(
                curve.evaluate_scalar(t, 3).unwrap(),
                0.0,
                epsilon = 1e-12
            );
        }

        let second = curve.derivative(2);
        assert_eq!(second.degree(), 1);
        assert_eq!(second.control_points(), &[[2.0]; 4]);
    }

    #[test]
    fn evaluate_many_matches_evaluate() {
        let curve = polyline(true);
        let ts = [-1.0, 0.25, 1.0, 1.75, 2.5];
        for nu in 0..3 {
            let many = curve.evaluate_many(&ts, nu).unwrap();
            for (t, value) in ts.iter().zip(many) {
                assert_abs_diff_eq!(
                    value[0],
                    curve.evaluate_scalar(*t, nu).unwrap(),
                    epsilon = 1e-12
                );
            }
        }
    }
}
