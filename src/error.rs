//! Error types for spline construction and evaluation.

use thiserror::Error;

/// Errors that can occur while building or evaluating a [`BSpline`].
///
/// [`BSpline`]: crate::BSpline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    /// A curve needs at least two samples to derive the boundary spacings.
    /// The [`synthesis`](crate::synthesis) steps report short parameter
    /// sequences the same way.
    #[error("A curve needs at least 2 samples. Found: {actual}")]
    TooFewSamples { actual: usize },

    /// The parameter sequence does not have one value per sample.
    #[error("Expected {samples} parameter values, one per sample. Found: {parameters}")]
    LengthMismatch { samples: usize, parameters: usize },

    /// The parameter sequence is not strictly ascending at `index`.
    #[error("Parameters must be strictly ascending; value at index {index} is not greater than its predecessor")]
    NonAscendingParameters { index: usize },

    /// The shift correction consumed more knots than the degree provides.
    #[error("Degree {degree} cannot absorb a left shift of {left_shift}")]
    NegativeTailCount { degree: usize, left_shift: usize },

    /// The knot vector length does not equal
    /// `control_points + degree + 1`.
    #[error("Degree {degree} curve with {control_points} control points must have {expected} knots. Found: {actual}")]
    KnotCountMismatch {
        degree: usize,
        control_points: usize,
        expected: usize,
        actual: usize,
    },

    /// The knot vector decreases somewhere.
    #[error("The knot vector is not monotonic")]
    NonMonotonicKnots,

    /// Too few control points to form a single polynomial piece.
    #[error("Degree {degree} curve must have at least {required} control points. Found: {actual}")]
    InsufficientControlPoints {
        degree: usize,
        required: usize,
        actual: usize,
    },

    /// The curve was evaluated outside its domain with extrapolation
    /// disabled, or at a NaN parameter.
    #[error("Parameter {t} lies outside the curve domain [{start}, {end}]")]
    OutOfDomain { t: f64, start: f64, end: f64 },
}

/// Result type for spline operations.
pub type SplineResult<T> = Result<T, SplineError>;
