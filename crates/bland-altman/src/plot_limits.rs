//! Axis limits for the Bland-Altman scatter plot.
//!
//! The x axis shows the pairwise means and the y axis the differences. The
//! computed y range always includes the outer confidence bounds of both limits
//! of agreement, so shaded confidence bands are never clipped.

use serde::{Deserialize, Serialize};

use crate::{
    config::PlotLimitsConfig,
    error::{Axis, InvalidInputError},
    statistics::StatisticsResult,
};

/// A closed interval on one plot axis.
///
/// Ranges produced by [`compute_plot_limits`] always satisfy `lower < upper`.
/// Caller-constructed ranges used as overrides are checked on entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub lower: f64,
    pub upper: f64,
}

impl AxisRange {
    #[must_use]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    fn validate(self, axis: Axis) -> Result<Self, InvalidInputError> {
        if !self.lower.is_finite() || !self.upper.is_finite() || self.lower >= self.upper {
            return Err(InvalidInputError::InvalidAxisRange {
                axis,
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(self)
    }

    /// Covers `[min, max]` plus `fraction` of the span on each side.
    ///
    /// A zero-width span is widened relative to its magnitude instead, with a
    /// floor of 1.0.
    fn padded(min: f64, max: f64, fraction: f64) -> Self {
        let span = max - min;
        let pad = if span > 0.0 {
            span * fraction
        } else {
            min.abs().max(1.0) * fraction
        };
        Self::new(min - pad, max + pad)
    }

    fn ensure_finite(self, axis: Axis) -> Result<Self, InvalidInputError> {
        if !self.span().is_finite() {
            let quantity = match axis {
                Axis::X => "x-axis range",
                Axis::Y => "y-axis range",
            };
            return Err(InvalidInputError::NonFiniteResult { quantity });
        }
        Ok(self)
    }
}

/// Axis limits for rendering a Bland-Altman plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLimits {
    pub x_lower: f64,
    pub x_upper: f64,
    pub y_lower: f64,
    pub y_upper: f64,
}

impl PlotLimits {
    #[must_use]
    pub fn x_range(&self) -> AxisRange {
        AxisRange::new(self.x_lower, self.x_upper)
    }

    #[must_use]
    pub fn y_range(&self) -> AxisRange {
        AxisRange::new(self.y_lower, self.y_upper)
    }
}

/// Derives plot limits with the default padding.
///
/// # Examples
///
/// ```
/// use bland_altman::{
///     plot_limits::{AxisRange, compute_plot_limits},
///     statistics::compute_statistics,
/// };
///
/// let stats = compute_statistics(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 2.0, 3.0, 4.0, 6.0], 0.95)?;
///
/// let limits = compute_plot_limits(&stats, None, None)?;
/// assert!(limits.x_lower < 1.0 && limits.x_upper > 5.5);
///
/// let limits = compute_plot_limits(&stats, None, Some(AxisRange::new(-5.0, 5.0)))?;
/// assert_eq!((limits.y_lower, limits.y_upper), (-5.0, 5.0));
/// # Ok::<(), bland_altman::InvalidInputError>(())
/// ```
pub fn compute_plot_limits(
    stats: &StatisticsResult,
    x_override: Option<AxisRange>,
    y_override: Option<AxisRange>,
) -> Result<PlotLimits, InvalidInputError> {
    compute_plot_limits_with(stats, x_override, y_override, &PlotLimitsConfig::default())
}

/// Derives plot limits from computed statistics.
///
/// Without an override, the x range spans the means and the y range spans
/// both the differences and the limit-of-agreement confidence bounds, each
/// padded by [`PlotLimitsConfig::padding_fraction`]. An override replaces the
/// computed range of its axis as is.
///
/// # Errors
///
/// Returns [`InvalidInputError`] if an override is not a finite range with
/// `lower < upper`, if the padding is invalid, or if `stats` holds no
/// observations. Non-finite statistics, or a computed range too wide to
/// represent, yield [`InvalidInputError::NonFiniteResult`] rather than
/// infinite limits.
pub fn compute_plot_limits_with(
    stats: &StatisticsResult,
    x_override: Option<AxisRange>,
    y_override: Option<AxisRange>,
    config: &PlotLimitsConfig,
) -> Result<PlotLimits, InvalidInputError> {
    let x_override = x_override.map(|r| r.validate(Axis::X)).transpose()?;
    let y_override = y_override.map(|r| r.validate(Axis::Y)).transpose()?;
    config.validate()?;

    ensure_all_finite("means", &stats.means)?;
    ensure_all_finite("differences", &stats.differences)?;
    ensure_all_finite("lower_loa_lower_ci", &[stats.lower_loa_lower_ci])?;
    ensure_all_finite("upper_loa_upper_ci", &[stats.upper_loa_upper_ci])?;

    let (means_min, means_max) = min_max(&stats.means)?;
    let (diffs_min, diffs_max) = min_max(&stats.differences)?;

    let x = x_override
        .unwrap_or_else(|| AxisRange::padded(means_min, means_max, config.padding_fraction))
        .ensure_finite(Axis::X)?;
    let y = y_override
        .unwrap_or_else(|| {
            AxisRange::padded(
                diffs_min.min(stats.lower_loa_lower_ci),
                diffs_max.max(stats.upper_loa_upper_ci),
                config.padding_fraction,
            )
        })
        .ensure_finite(Axis::Y)?;

    tracing::debug!(
        x_lower = x.lower,
        x_upper = x.upper,
        y_lower = y.lower,
        y_upper = y.upper,
        x_overridden = x_override.is_some(),
        y_overridden = y_override.is_some(),
        "computed plot limits"
    );

    Ok(PlotLimits {
        x_lower: x.lower,
        x_upper: x.upper,
        y_lower: y.lower,
        y_upper: y.upper,
    })
}

fn ensure_all_finite(quantity: &'static str, values: &[f64]) -> Result<(), InvalidInputError> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(InvalidInputError::NonFiniteResult { quantity });
    }
    Ok(())
}

fn min_max(values: &[f64]) -> Result<(f64, f64), InvalidInputError> {
    if values.is_empty() {
        return Err(InvalidInputError::InsufficientSamples { len: 0 });
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::compute_statistics;

    fn reference_stats() -> StatisticsResult {
        compute_statistics(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 2.0, 3.0, 4.0, 6.0], 0.95).unwrap()
    }

    #[test]
    fn test_x_range_is_padded_means() {
        let limits = compute_plot_limits(&reference_stats(), None, None).unwrap();
        // means span [1.0, 5.5], 5% of 4.5 on each side
        assert!((limits.x_lower - 0.775).abs() < 1e-12);
        assert!((limits.x_upper - 5.725).abs() < 1e-12);
    }

    #[test]
    fn test_y_range_covers_differences_and_loa_bounds() {
        let stats = reference_stats();
        let limits = compute_plot_limits(&stats, None, None).unwrap();
        let y = limits.y_range();

        for d in &stats.differences {
            assert!(y.contains(*d));
        }
        assert!(y.lower < stats.lower_loa_lower_ci);
        assert!(y.upper > stats.upper_loa_upper_ci);

        let span = stats.upper_loa_upper_ci - stats.lower_loa_lower_ci;
        assert!((y.lower - (stats.lower_loa_lower_ci - 0.05 * span)).abs() < 1e-12);
        assert!((y.upper - (stats.upper_loa_upper_ci + 0.05 * span)).abs() < 1e-12);
    }

    #[test]
    fn test_y_range_extends_to_outlying_differences() {
        // A single huge difference lies outside its own limits of agreement
        // at a low confidence level
        let m1 = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 100.0];
        let m2 = [0.0; 10];
        let stats = compute_statistics(&m1, &m2, 0.5).unwrap();
        assert!(stats.upper_loa_upper_ci < 100.0);

        let limits = compute_plot_limits(&stats, None, None).unwrap();
        assert!(limits.y_upper > 100.0);
    }

    #[test]
    fn test_y_override_replaces_range() {
        let limits =
            compute_plot_limits(&reference_stats(), None, Some(AxisRange::new(-5.0, 5.0)))
                .unwrap();
        assert_eq!(limits.y_lower, -5.0);
        assert_eq!(limits.y_upper, 5.0);

        // Override narrower than the data is honoured without merging
        let limits =
            compute_plot_limits(&reference_stats(), None, Some(AxisRange::new(-0.1, 0.1)))
                .unwrap();
        assert_eq!(limits.y_range(), AxisRange::new(-0.1, 0.1));
    }

    #[test]
    fn test_x_override_replaces_range() {
        let limits =
            compute_plot_limits(&reference_stats(), Some(AxisRange::new(0.0, 10.0)), None)
                .unwrap();
        assert_eq!(limits.x_range(), AxisRange::new(0.0, 10.0));
        assert!(limits.y_lower < 0.0);
    }

    #[test]
    fn test_invalid_overrides() {
        let stats = reference_stats();
        for range in [
            AxisRange::new(5.0, -5.0),
            AxisRange::new(1.0, 1.0),
            AxisRange::new(f64::NAN, 1.0),
            AxisRange::new(0.0, f64::INFINITY),
        ] {
            assert!(matches!(
                compute_plot_limits(&stats, None, Some(range)),
                Err(InvalidInputError::InvalidAxisRange { axis: Axis::Y, .. })
            ));
            assert!(matches!(
                compute_plot_limits(&stats, Some(range), None),
                Err(InvalidInputError::InvalidAxisRange { axis: Axis::X, .. })
            ));
        }
    }

    #[test]
    fn test_degenerate_statistics_still_give_open_ranges() {
        let stats = compute_statistics(&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0], 0.95).unwrap();
        let limits = compute_plot_limits(&stats, None, None).unwrap();
        assert!((limits.x_lower - 0.95).abs() < 1e-12);
        assert!((limits.x_upper - 1.05).abs() < 1e-12);
        assert!((limits.y_lower + 0.05).abs() < 1e-12);
        assert!((limits.y_upper - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_custom_padding() {
        let config = PlotLimitsConfig {
            padding_fraction: 0.0,
        };
        let limits = compute_plot_limits_with(&reference_stats(), None, None, &config).unwrap();
        assert_eq!(limits.x_lower, 1.0);
        assert_eq!(limits.x_upper, 5.5);

        let config = PlotLimitsConfig {
            padding_fraction: -1.0,
        };
        assert!(matches!(
            compute_plot_limits_with(&reference_stats(), None, None, &config),
            Err(InvalidInputError::InvalidPadding { .. })
        ));
    }

    #[test]
    fn test_non_finite_statistics_are_rejected() {
        let mut stats = reference_stats();
        stats.upper_loa_upper_ci = f64::INFINITY;
        assert_eq!(
            compute_plot_limits(&stats, None, None).unwrap_err(),
            InvalidInputError::NonFiniteResult {
                quantity: "upper_loa_upper_ci"
            }
        );

        let mut stats = reference_stats();
        stats.differences[0] = f64::NAN;
        assert_eq!(
            compute_plot_limits(&stats, None, None).unwrap_err(),
            InvalidInputError::NonFiniteResult {
                quantity: "differences"
            }
        );

        let mut stats = reference_stats();
        stats.means[4] = f64::NEG_INFINITY;
        assert!(matches!(
            compute_plot_limits(&stats, Some(AxisRange::new(0.0, 1.0)), None),
            Err(InvalidInputError::NonFiniteResult { quantity: "means" })
        ));
    }

    #[test]
    fn test_overflowing_range_is_rejected() {
        // Means of +-1e308 are representable but their span is not
        let stats = compute_statistics(&[1e308, -1e308], &[1e308, -1e308], 0.95).unwrap();
        assert_eq!(
            compute_plot_limits(&stats, None, None).unwrap_err(),
            InvalidInputError::NonFiniteResult {
                quantity: "x-axis range"
            }
        );

        // An x override sidesteps the overflow; the y range is tiny
        let limits =
            compute_plot_limits(&stats, Some(AxisRange::new(-1.0, 1.0)), None).unwrap();
        assert!(limits.y_lower.is_finite() && limits.y_upper.is_finite());
        assert!(limits.y_lower < 0.0 && limits.y_upper > 0.0);
    }

    #[test]
    fn test_empty_statistics_are_rejected() {
        let mut stats = reference_stats();
        stats.means.clear();
        stats.differences.clear();
        assert!(matches!(
            compute_plot_limits(&stats, None, None),
            Err(InvalidInputError::InsufficientSamples { len: 0 })
        ));
    }
}
