#![cfg_attr(not(test), no_std)]
//! B-spline curves of any degree that follow a sequence of samples.
//!
//! Give [`build_spline()`] an ordered list of samples, optionally with the
//! parameter value of each, and it returns a [`BSpline`] whose shape
//! follows them. The knots and control points are synthesized from the
//! samples:
//!
//! * **Shift fix** -- a B-spline basis function does not peak at the knot
//!   of its own index once the degree exceeds one. The parameter domain is
//!   shifted so that every sample sits where its basis function peaks.
//!
//! * **Clamping** -- linearly extrapolated ghost samples are mirrored past
//!   both ends so the curve starts at the first and ends at the last
//!   sample.
//!
//! A sample is a fixed-size array `[T; D]`. Scalar data is the `D == 1`
//! case, which [`build_scalar_spline()`] wraps for convenience.
//!
//! # Examples
//!
//! ```
//! use sample_bspline::prelude::*;
//!
//! let y: [f64; 7] = [4.0, 0.0, 3.0, 0.0, 2.0, 0.0, 3.0];
//! let curve =
//!     build_scalar_spline(3, &y, None, &BuildOptions::default()).unwrap();
//!
//! // Clamped curves pass through their end points.
//! assert!((curve.evaluate_scalar(0.0, 0).unwrap() - 4.0).abs() < 1e-12);
//! assert!((curve.evaluate_scalar(6.0, 0).unwrap() - 3.0).abs() < 1e-12);
//!
//! // The intermediate result stays inspectable.
//! assert_eq!(curve.knots().len(), curve.control_points().len() + 4);
//! ```
//!
//! Points work the same way:
//!
//! ```
//! use sample_bspline::prelude::*;
//!
//! let points = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [-1.0, 0.0]];
//! let curve =
//!     build_spline(3, &points, None, &BuildOptions::default()).unwrap();
//!
//! let tangent = curve.evaluate(2.0, 1).unwrap();
//! assert!(tangent[0] < 0.0);
//! ```
//!
//! # Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade. The
//! final knots and control points of every curve are logged at `debug`
//! level, the intermediate sequences at `trace` level.
//!
//! # Cargo Features
#![doc = document_features::document_features!()]

extern crate alloc;

use alloc::vec::Vec;

mod bspline;
mod error;
mod options;
mod sample;
pub mod synthesis;

pub use bspline::BSpline;
pub use error::{SplineError, SplineResult};
pub use options::BuildOptions;
pub use sample::{Sample, Scalar};

/// The factory functions and the types they take and return.
pub mod prelude {
    pub use crate::{
        build_scalar_spline, build_spline, BSpline, BuildOptions, Sample,
        Scalar, SplineError, SplineResult,
    };
}

/// Builds a curve of `degree` that follows `samples`.
///
/// `parameters` assigns each sample its curve parameter and must be
/// strictly ascending; it defaults to `0, 1, …, n-1`.
///
/// With [`BuildOptions::clamped`] set the curve starts at the first and
/// ends at the last sample. Otherwise, as in general for B-splines, the
/// curve only approximates the samples.
///
/// # Errors
///
/// * [`SplineError::TooFewSamples`] for fewer than two samples.
/// * [`SplineError::LengthMismatch`] if `parameters` does not hold one
///   value per sample.
/// * [`SplineError::NonAscendingParameters`] if `parameters` is not
///   strictly ascending.
/// * [`SplineError::NegativeTailCount`] if the shift correction exceeds
///   what `degree` can absorb.
/// * [`SplineError::InsufficientControlPoints`] if an unclamped curve has
///   fewer than `degree + 1` samples.
/// * [`SplineError::KnotCountMismatch`] signals a defect in this crate.
pub fn build_spline<T: Scalar, const D: usize>(
    degree: usize,
    samples: &[Sample<T, D>],
    parameters: Option<&[T]>,
    options: &BuildOptions,
) -> SplineResult<BSpline<T, D>> {
    let normalized = synthesis::normalize(samples, parameters)?;

    let shifted = synthesis::shift(
        degree,
        &normalized.parameters,
        normalized.dx_start,
        options.fix_shift,
    )?;

    let clamped = synthesis::clamp(
        degree,
        shifted.parameters,
        samples,
        normalized.dx_start,
        normalized.dx_end,
        options.clamped,
    )?;

    let knots = synthesis::extend_tail(
        degree,
        shifted.left_shift,
        clamped.parameters,
        normalized.dx_end,
    )?;
    let control_points = clamped.control_points;

    let expected = control_points.len() + degree + 1;
    if knots.len() != expected {
        return Err(SplineError::KnotCountMismatch {
            degree,
            control_points: control_points.len(),
            expected,
            actual: knots.len(),
        });
    }

    log::debug!(
        "degree {degree} curve from {} samples ({options:?}, left shift {})",
        samples.len(),
        shifted.left_shift
    );
    log::debug!("knots: {knots:?}");
    log::debug!("control points: {control_points:?}");

    BSpline::new(knots, control_points, degree, options.extrapolate)
}

/// [`build_spline()`] for scalar samples.
///
/// Each value is lifted into a one-dimensional sample; the curve is built
/// by exactly the same code path as for points.
pub fn build_scalar_spline<T: Scalar>(
    degree: usize,
    samples: &[T],
    parameters: Option<&[T]>,
    options: &BuildOptions,
) -> SplineResult<BSpline<T, 1>> {
    let lifted: Vec<Sample<T, 1>> = samples.iter().map(|&v| [v]).collect();
    build_spline(degree, &lifted, parameters, options)
}
