//! Construction flags for [`build_spline()`](crate::build_spline).

/// Flags controlling how samples are turned into a [`BSpline`].
///
/// All flags default to `true`.
///
/// ```
/// use sample_bspline::BuildOptions;
///
/// let options = BuildOptions::default().with_clamped(false);
/// assert!(!options.clamped && options.fix_shift && options.extrapolate);
/// ```
///
/// [`BSpline`]: crate::BSpline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BuildOptions {
    /// Force the curve through the first and last sample by mirroring
    /// linearly extrapolated ghost samples past both ends.
    pub clamped: bool,
    /// Realign the parameter domain so each basis function peaks near
    /// its own sample.
    pub fix_shift: bool,
    /// Continue the boundary pieces when the curve is evaluated outside
    /// its domain instead of failing.
    pub extrapolate: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            clamped: true,
            fix_shift: true,
            extrapolate: true,
        }
    }
}

impl BuildOptions {
    /// Sets [`clamped`](Self::clamped).
    #[must_use]
    pub fn with_clamped(mut self, clamped: bool) -> Self {
        self.clamped = clamped;
        self
    }

    /// Sets [`fix_shift`](Self::fix_shift).
    #[must_use]
    pub fn with_fix_shift(mut self, fix_shift: bool) -> Self {
        self.fix_shift = fix_shift;
        self
    }

    /// Sets [`extrapolate`](Self::extrapolate).
    #[must_use]
    pub fn with_extrapolate(mut self, extrapolate: bool) -> Self {
        self.extrapolate = extrapolate;
        self
    }
}
