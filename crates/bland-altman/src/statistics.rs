//! Bland-Altman agreement statistics.
//!
//! Given paired measurements from two methods, [`compute_statistics`] derives
//! the per-pair differences and means, the bias (mean difference), the limits
//! of agreement and confidence intervals around each of them.
//!
//! # Examples
//!
//! ```
//! use bland_altman::statistics::compute_statistics;
//!
//! let stats = compute_statistics(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 2.0, 3.0, 4.0, 6.0], 0.95)?;
//!
//! assert_eq!(stats.differences, [0.0, 0.0, 0.0, 0.0, -1.0]);
//! assert!((stats.bias + 0.2).abs() < 1e-12);
//! assert!((stats.upper_loa - 0.677).abs() < 1e-3);
//! assert!((stats.lower_loa + 1.077).abs() < 1e-3);
//! # Ok::<(), bland_altman::InvalidInputError>(())
//! ```

use agreement_stats::{critical_value, descriptive::DescriptiveStats, regression::LinearFit};
use serde::{Deserialize, Serialize};

use crate::{
    config::{AnalysisConfig, CriticalValueMethod, LoaStandardError},
    error::{InvalidInputError, Series},
};

/// A point estimate with symmetric confidence bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub estimate: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    fn symmetric(estimate: f64, half_width: f64) -> Self {
        Self {
            lower: estimate - half_width,
            estimate,
            upper: estimate + half_width,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Result of a Bland-Altman analysis.
///
/// Field names follow the conventional Bland-Altman vocabulary: `loa` is a
/// limit of agreement and `ci` a confidence interval bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    /// `measurement1[i] - measurement2[i]` for each pair.
    pub differences: Vec<f64>,
    /// `(measurement1[i] + measurement2[i]) / 2` for each pair.
    pub means: Vec<f64>,
    /// `differences[i] / means[i] * 100`, or `None` where the mean is zero.
    pub percentage_differences: Vec<Option<f64>>,
    /// Number of measurement pairs.
    pub no_of_observations: usize,
    /// Confidence level used for the limits of agreement and all intervals.
    pub confidence_level: f64,
    /// Two-tailed standard normal critical value for `confidence_level`.
    pub sig_level_convert_to_z: f64,
    /// Multiplier applied to the standard errors when building confidence intervals.
    pub ci_critical_value: f64,

    /// Mean of the differences.
    pub bias: f64,
    /// Sample standard deviation of the differences.
    pub bias_std_dev: f64,
    /// Standard error of the bias.
    pub bias_sem: f64,
    /// Upper confidence bound of the bias.
    pub bias_upper_ci: f64,
    /// Lower confidence bound of the bias.
    pub bias_lower_ci: f64,

    /// Standard error of either limit of agreement.
    pub loa_sem: f64,
    /// Upper limit of agreement, `bias + z * bias_std_dev`.
    pub upper_loa: f64,
    /// Upper confidence bound of the upper limit of agreement.
    pub upper_loa_upper_ci: f64,
    /// Lower confidence bound of the upper limit of agreement.
    pub upper_loa_lower_ci: f64,
    /// Lower limit of agreement, `bias - z * bias_std_dev`.
    pub lower_loa: f64,
    /// Upper confidence bound of the lower limit of agreement.
    pub lower_loa_upper_ci: f64,
    /// Lower confidence bound of the lower limit of agreement.
    pub lower_loa_lower_ci: f64,

    /// Least-squares fit of differences on means, `None` if all means coincide.
    ///
    /// A slope far from zero indicates proportional bias.
    pub regression: Option<LinearFit>,
}

impl StatisticsResult {
    #[must_use]
    pub fn bias_interval(&self) -> ConfidenceInterval {
        ConfidenceInterval {
            lower: self.bias_lower_ci,
            estimate: self.bias,
            upper: self.bias_upper_ci,
        }
    }

    #[must_use]
    pub fn upper_loa_interval(&self) -> ConfidenceInterval {
        ConfidenceInterval {
            lower: self.upper_loa_lower_ci,
            estimate: self.upper_loa,
            upper: self.upper_loa_upper_ci,
        }
    }

    #[must_use]
    pub fn lower_loa_interval(&self) -> ConfidenceInterval {
        ConfidenceInterval {
            lower: self.lower_loa_lower_ci,
            estimate: self.lower_loa,
            upper: self.lower_loa_upper_ci,
        }
    }

    /// Human-readable regression line, e.g. `y(differences) = 0.0500 x(means) + -0.3000`.
    #[must_use]
    pub fn regression_equation(&self) -> Option<String> {
        self.regression.map(|fit| {
            format!(
                "y(differences) = {:.4} x(means) + {:.4}",
                fit.slope, fit.intercept
            )
        })
    }

    /// Number of pairs whose difference falls outside the limits of agreement.
    #[must_use]
    pub fn count_outside_loa(&self) -> usize {
        self.differences
            .iter()
            .filter(|&&d| d < self.lower_loa || d > self.upper_loa)
            .count()
    }
}

/// Computes Bland-Altman statistics with the default configuration at the
/// given confidence level.
///
/// See [`compute_statistics_with`] for the full set of options.
pub fn compute_statistics(
    measurement1: &[f64],
    measurement2: &[f64],
    confidence_level: f64,
) -> Result<StatisticsResult, InvalidInputError> {
    compute_statistics_with(
        measurement1,
        measurement2,
        &AnalysisConfig::with_confidence_level(confidence_level),
    )
}

/// Computes Bland-Altman statistics for paired measurements.
///
/// # Errors
///
/// Returns [`InvalidInputError`] if the series differ in length, contain
/// fewer than two pairs or a non-finite value, or if the configuration is
/// invalid. Values large enough to overflow the differences or the derived
/// statistics yield [`InvalidInputError::NonFiniteResult`].
///
/// # Examples
///
/// ```
/// use bland_altman::{
///     config::{AnalysisConfig, CriticalValueMethod},
///     statistics::compute_statistics_with,
/// };
///
/// let m1 = [10.2, 11.1, 9.8, 10.5, 10.9, 11.4];
/// let m2 = [10.0, 11.4, 9.5, 10.1, 11.0, 11.0];
///
/// let normal = compute_statistics_with(&m1, &m2, &AnalysisConfig::default())?;
/// let student = compute_statistics_with(
///     &m1,
///     &m2,
///     &AnalysisConfig {
///         ci_method: CriticalValueMethod::StudentT,
///         ..AnalysisConfig::default()
///     },
/// )?;
///
/// // Limits of agreement do not depend on the CI method; their intervals do
/// assert_eq!(normal.upper_loa, student.upper_loa);
/// assert!(student.bias_interval().width() > normal.bias_interval().width());
/// # Ok::<(), bland_altman::InvalidInputError>(())
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn compute_statistics_with(
    measurement1: &[f64],
    measurement2: &[f64],
    config: &AnalysisConfig,
) -> Result<StatisticsResult, InvalidInputError> {
    validate_samples(measurement1, measurement2)?;
    config.validate()?;

    let differences = measurement1
        .iter()
        .zip(measurement2)
        .map(|(a, b)| a - b)
        .collect::<Vec<_>>();
    let means = measurement1
        .iter()
        .zip(measurement2)
        .map(|(a, b)| a / 2.0 + b / 2.0)
        .collect::<Vec<_>>();
    if differences.iter().any(|d| !d.is_finite()) {
        return Err(InvalidInputError::NonFiniteResult {
            quantity: "differences",
        });
    }
    let percentage_differences = differences
        .iter()
        .zip(&means)
        .map(|(d, m)| (*m != 0.0).then(|| d / m * 100.0))
        .collect();

    let summary = DescriptiveStats::from_slice(&differences).ok_or(
        InvalidInputError::InsufficientSamples {
            len: differences.len(),
        },
    )?;
    let n = summary.count as f64;
    let bias = summary.mean;
    let bias_std_dev = summary.std_dev;

    let z = critical_value::normal_two_tailed(config.confidence_level)?;
    let ci_critical_value = match config.ci_method {
        CriticalValueMethod::Normal => z,
        CriticalValueMethod::StudentT => {
            critical_value::student_t_two_tailed(config.confidence_level, n - 1.0)?
        }
    };

    let upper_loa = bias + z * bias_std_dev;
    let lower_loa = bias - z * bias_std_dev;

    let bias_sem = summary.standard_error();
    let bias_ci = ConfidenceInterval::symmetric(bias, ci_critical_value * bias_sem);

    let loa_sem = match config.loa_standard_error {
        LoaStandardError::Classical => bias_std_dev * (3.0 / n).sqrt(),
        LoaStandardError::Exact => bias_std_dev * (1.0 / n + z * z / (2.0 * (n - 1.0))).sqrt(),
    };
    let upper_loa_ci = ConfidenceInterval::symmetric(upper_loa, ci_critical_value * loa_sem);
    let lower_loa_ci = ConfidenceInterval::symmetric(lower_loa, ci_critical_value * loa_sem);

    // Outer bounds are finite only if every statistic inside them is
    for (quantity, value) in [
        ("bias", bias),
        ("bias_std_dev", bias_std_dev),
        ("upper_loa_upper_ci", upper_loa_ci.upper),
        ("lower_loa_lower_ci", lower_loa_ci.lower),
    ] {
        if !value.is_finite() {
            return Err(InvalidInputError::NonFiniteResult { quantity });
        }
    }

    let regression = LinearFit::fit(&means, &differences);

    tracing::debug!(
        n = summary.count,
        confidence_level = config.confidence_level,
        bias,
        bias_std_dev,
        upper_loa,
        lower_loa,
        "computed Bland-Altman statistics"
    );
    if bias_std_dev == 0.0 {
        tracing::warn!(
            bias,
            "all differences are identical; limits of agreement coincide with the bias"
        );
    }

    Ok(StatisticsResult {
        differences,
        means,
        percentage_differences,
        no_of_observations: summary.count,
        confidence_level: config.confidence_level,
        sig_level_convert_to_z: z,
        ci_critical_value,
        bias,
        bias_std_dev,
        bias_sem,
        bias_upper_ci: bias_ci.upper,
        bias_lower_ci: bias_ci.lower,
        loa_sem,
        upper_loa,
        upper_loa_upper_ci: upper_loa_ci.upper,
        upper_loa_lower_ci: upper_loa_ci.lower,
        lower_loa,
        lower_loa_upper_ci: lower_loa_ci.upper,
        lower_loa_lower_ci: lower_loa_ci.lower,
        regression,
    })
}

fn validate_samples(measurement1: &[f64], measurement2: &[f64]) -> Result<(), InvalidInputError> {
    if measurement1.len() != measurement2.len() {
        return Err(InvalidInputError::LengthMismatch {
            len1: measurement1.len(),
            len2: measurement2.len(),
        });
    }
    if measurement1.len() < 2 {
        return Err(InvalidInputError::InsufficientSamples {
            len: measurement1.len(),
        });
    }
    for (series, values) in [
        (Series::Measurement1, measurement1),
        (Series::Measurement2, measurement2),
    ] {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(InvalidInputError::NonFiniteValue {
                series,
                index,
                value,
            });
        }
    }
    Ok(())
}
