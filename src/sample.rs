//! Scalar bound and the component-wise arithmetic on samples.
//!
//! Every sample is a fixed-size vector `[T; D]`. A scalar curve is simply
//! the `D == 1` case, so slopes, extrapolation and blending all go through
//! the same functions regardless of the sample dimension.
use core::fmt::Debug;
use lerp::Lerp;
use num_traits::{Float, NumCast};

/// Scalar type of parameters, knots and sample components.
///
/// Implemented for every [`Float`] that can be blended with [`Lerp`],
/// i.e. `f32` and `f64`.
pub trait Scalar: Float + Lerp<Self> + Debug {}

impl<T> Scalar for T where T: Float + Lerp<T> + Debug {}

/// One control value of a curve.
pub type Sample<T, const D: usize> = [T; D];

/// Converts a step count into the scalar type.
///
/// Counts are tiny compared to any float mantissa. Should a cast ever fail,
/// the NaN poisons the knot vector and is rejected by the monotonicity
/// check in [`BSpline::new()`](crate::BSpline::new).
#[inline]
pub(crate) fn count<T: Scalar>(n: usize) -> T {
    <T as NumCast>::from(n).unwrap_or_else(T::nan)
}

/// `0.5` in the scalar type.
#[inline]
pub(crate) fn half<T: Scalar>() -> T {
    T::one() / (T::one() + T::one())
}

/// Component-wise `a - b`.
#[inline]
pub(crate) fn difference<T: Scalar, const D: usize>(
    a: &Sample<T, D>,
    b: &Sample<T, D>,
) -> Sample<T, D> {
    core::array::from_fn(|i| a[i] - b[i])
}

/// Component-wise `v / s`.
#[inline]
pub(crate) fn divide<T: Scalar, const D: usize>(
    v: &Sample<T, D>,
    s: T,
) -> Sample<T, D> {
    core::array::from_fn(|i| v[i] / s)
}

/// `origin + step * direction`, broadcasting the scalar `step` over every
/// component.
#[inline]
pub(crate) fn offset<T: Scalar, const D: usize>(
    origin: &Sample<T, D>,
    step: T,
    direction: &Sample<T, D>,
) -> Sample<T, D> {
    core::array::from_fn(|i| origin[i] + step * direction[i])
}

/// Blends `a` towards `b` by `t`, component by component.
#[inline]
pub(crate) fn blend<T: Scalar, const D: usize>(
    a: &Sample<T, D>,
    b: &Sample<T, D>,
    t: T,
) -> Sample<T, D> {
    core::array::from_fn(|i| a[i].lerp(b[i], t))
}

/// Component-wise `s * (a - b) / d`.
#[inline]
pub(crate) fn scaled_difference<T: Scalar, const D: usize>(
    a: &Sample<T, D>,
    b: &Sample<T, D>,
    s: T,
    d: T,
) -> Sample<T, D> {
    core::array::from_fn(|i| s * (a[i] - b[i]) / d)
}
