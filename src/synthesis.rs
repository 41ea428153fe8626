//! The four steps that turn samples into a knot vector and control points.
//!
//! They run in a fixed order and each one consumes the output of the one
//! before:
//!
//! 1. [`normalize()`] validates (or derives) the parameters and measures the
//!    spacing at both ends.
//! 2. [`shift()`] prepends parameters so every basis function peaks near
//!    its own sample.
//! 3. [`clamp()`] mirrors ghost samples past both ends so the curve passes
//!    through the first and last sample.
//! 4. [`extend_tail()`] appends the trailing knots the knot-count invariant
//!    asks for.
//!
//! The clamp step must see the already shifted parameters. Swapping the two
//! changes where the ghost parameters land.
use crate::{
    sample::{count, difference, divide, half, offset, Sample},
    Scalar, SplineError, SplineResult,
};
use alloc::vec::Vec;

/// Validated parameters and the spacing at both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Normalized<T> {
    /// One strictly ascending parameter per sample.
    pub parameters: Vec<T>,
    /// `x[1] - x[0]`.
    pub dx_start: T,
    /// `x[n-1] - x[n-2]`.
    pub dx_end: T,
}

/// Parameters after the shift correction.
#[derive(Clone, Debug, PartialEq)]
pub struct Shifted<T> {
    /// The prepended parameters followed by the (possibly averaged) input.
    pub parameters: Vec<T>,
    /// Number of parameters prepended; `0` when the correction is off.
    pub left_shift: usize,
}

/// Parameters and control points after the clamp extension.
#[derive(Clone, Debug, PartialEq)]
pub struct Clamped<T, const D: usize> {
    /// Shifted parameters with the ghost parameters on both sides.
    pub parameters: Vec<T>,
    /// Samples with the ghost samples on both sides.
    pub control_points: Vec<Sample<T, D>>,
}

/// Every step indexes the first two and last two entries it is given.
fn require_pair(len: usize) -> SplineResult<()> {
    if len < 2 {
        return Err(SplineError::TooFewSamples { actual: len });
    }
    Ok(())
}

/// Yields `origin + i * step` for `i` in `first..=last`.
fn ramp<T: Scalar>(
    origin: T,
    step: T,
    first: usize,
    last: usize,
) -> impl DoubleEndedIterator<Item = T> {
    (first..=last).map(move |i| origin + count::<T>(i) * step)
}

/// Number of parameters [`shift()`] prepends for `degree`.
pub fn left_shift(degree: usize) -> usize {
    1 + degree.saturating_sub(1) / 2
}

/// Validates the parameters of `samples` or derives `0, 1, …, n-1`.
///
/// # Errors
///
/// * [`SplineError::TooFewSamples`] for fewer than two samples.
/// * [`SplineError::LengthMismatch`] unless there is one parameter per
///   sample.
/// * [`SplineError::NonAscendingParameters`] at the first parameter that
///   does not exceed its predecessor.
pub fn normalize<T: Scalar, const D: usize>(
    samples: &[Sample<T, D>],
    parameters: Option<&[T]>,
) -> SplineResult<Normalized<T>> {
    let n = samples.len();
    if n < 2 {
        return Err(SplineError::TooFewSamples { actual: n });
    }

    let parameters = match parameters {
        Some(parameters) => {
            if parameters.len() != n {
                return Err(SplineError::LengthMismatch {
                    samples: n,
                    parameters: parameters.len(),
                });
            }
            // Written as a negation so NaN fails too.
            if let Some(index) = parameters
                .windows(2)
                .position(|pair| !(pair[0] < pair[1]))
            {
                return Err(SplineError::NonAscendingParameters {
                    index: index + 1,
                });
            }
            parameters.to_vec()
        }
        None => (0..n).map(count::<T>).collect(),
    };

    Ok(Normalized {
        dx_start: parameters[1] - parameters[0],
        dx_end: parameters[n - 1] - parameters[n - 2],
        parameters,
    })
}

/// Prepends [`left_shift()`] parameters extrapolated backwards by
/// `dx_start`.
///
/// Even degrees get one more correction: the sequence is replaced by a
/// point half a spacing before its start followed by the midpoints of each
/// adjacent pair. Only the left side is corrected.
///
/// # Errors
///
/// [`SplineError::TooFewSamples`] for fewer than two parameters.
pub fn shift<T: Scalar>(
    degree: usize,
    parameters: &[T],
    dx_start: T,
    fix_shift: bool,
) -> SplineResult<Shifted<T>> {
    require_pair(parameters.len())?;

    if !fix_shift {
        return Ok(Shifted {
            parameters: parameters.to_vec(),
            left_shift: 0,
        });
    }

    let left_shift = left_shift(degree);
    let x0 = parameters[0];

    let mut extended = Vec::with_capacity(parameters.len() + left_shift);
    extended.extend(ramp(x0, -dx_start, 1, left_shift).rev());
    extended.extend_from_slice(parameters);

    if 0 < degree && 0 == degree % 2 {
        let h = half::<T>();
        let lead = extended[0] - h * dx_start;
        extended = core::iter::once(lead)
            .chain(extended.windows(2).map(|pair| pair[0].lerp(pair[1], h)))
            .collect();
    }

    log::trace!("shifted parameters (left shift {left_shift}): {extended:?}");

    Ok(Shifted {
        parameters: extended,
        left_shift,
    })
}

/// Mirrors `max(degree - 1, 0)` ghost parameters and ghost samples past
/// each end.
///
/// Ghost samples step away from the boundary sample by the boundary slope
/// `dy / dx` per index. The step is broadcast over all `D` components.
///
/// # Errors
///
/// [`SplineError::TooFewSamples`] for fewer than two parameters or fewer
/// than two samples.
pub fn clamp<T: Scalar, const D: usize>(
    degree: usize,
    parameters: Vec<T>,
    samples: &[Sample<T, D>],
    dx_start: T,
    dx_end: T,
    clamped: bool,
) -> SplineResult<Clamped<T, D>> {
    require_pair(samples.len())?;
    require_pair(parameters.len())?;

    let rep = degree.saturating_sub(1);
    if !clamped || 0 == rep {
        return Ok(Clamped {
            parameters,
            control_points: samples.to_vec(),
        });
    }

    let n = samples.len();
    let first = parameters[0];
    let last = parameters[parameters.len() - 1];

    let slope_start = divide(&difference(&samples[1], &samples[0]), dx_start);
    let slope_end = divide(&difference(&samples[n - 1], &samples[n - 2]), dx_end);

    let mut extended = Vec::with_capacity(parameters.len() + 2 * rep);
    extended.extend(ramp(first, -dx_start, 1, rep).rev());
    extended.extend_from_slice(&parameters);
    extended.extend(ramp(last, dx_end, 1, rep));

    let mut control_points = Vec::with_capacity(n + 2 * rep);
    control_points.extend(
        (1..=rep)
            .rev()
            .map(|i| offset(&samples[0], -count::<T>(i), &slope_start)),
    );
    control_points.extend_from_slice(samples);
    control_points.extend(
        (1..=rep).map(|i| offset(&samples[n - 1], count::<T>(i), &slope_end)),
    );

    log::trace!("clamped parameters: {extended:?}");
    log::trace!("clamped control points: {control_points:?}");

    Ok(Clamped {
        parameters: extended,
        control_points,
    })
}

/// Appends `degree - left_shift + 1` knots extrapolated forwards by
/// `dx_end`.
///
/// # Errors
///
/// * [`SplineError::TooFewSamples`] for fewer than two parameters.
/// * [`SplineError::NegativeTailCount`] if `left_shift` exceeds
///   `degree + 1`.
pub fn extend_tail<T: Scalar>(
    degree: usize,
    left_shift: usize,
    mut parameters: Vec<T>,
    dx_end: T,
) -> SplineResult<Vec<T>> {
    require_pair(parameters.len())?;

    let tail = (degree + 1)
        .checked_sub(left_shift)
        .ok_or(SplineError::NegativeTailCount { degree, left_shift })?;

    let last = parameters[parameters.len() - 1];
    parameters.extend(ramp(last, dx_end, 1, tail));

    Ok(parameters)
}
