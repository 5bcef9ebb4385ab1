//! Configuration for the statistics engine and plot-limits derivation.
//!
//! Every field has a default, so a partially specified configuration
//! deserializes with the remaining fields filled in:
//!
//! ```
//! use bland_altman::config::{AnalysisConfig, CriticalValueMethod};
//!
//! let config: AnalysisConfig = serde_json::from_str(r#"{ "ci_method": "student_t" }"#).unwrap();
//! assert_eq!(config.confidence_level, 0.95);
//! assert_eq!(config.ci_method, CriticalValueMethod::StudentT);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::InvalidInputError;

/// Default confidence level for limits of agreement and confidence intervals.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Default fraction of an axis span added on each side of a computed range.
pub const DEFAULT_PADDING_FRACTION: f64 = 0.05;

/// Distribution used for the multiplier of the confidence-interval standard errors.
///
/// Limits of agreement themselves always use the normal critical value.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::FromStr,
)]
#[serde(rename_all = "snake_case")]
pub enum CriticalValueMethod {
    /// Standard normal quantile, the same `z` as the limits of agreement.
    #[default]
    Normal,
    /// Student-t quantile with `n - 1` degrees of freedom.
    StudentT,
}

/// Formula for the standard error of a limit of agreement.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::FromStr,
)]
#[serde(rename_all = "snake_case")]
pub enum LoaStandardError {
    /// `sd * sqrt(3 / n)` (Bland & Altman, 1986).
    #[default]
    Classical,
    /// `sd * sqrt(1 / n + z² / (2 (n - 1)))` (Bland & Altman, 1999).
    Exact,
}

/// Parameters of a Bland-Altman analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Confidence level in `(0, 1)`.
    pub confidence_level: f64,
    pub ci_method: CriticalValueMethod,
    pub loa_standard_error: LoaStandardError,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            ci_method: CriticalValueMethod::default(),
            loa_standard_error: LoaStandardError::default(),
        }
    }
}

impl AnalysisConfig {
    /// Default configuration with a different confidence level.
    #[must_use]
    pub fn with_confidence_level(confidence_level: f64) -> Self {
        Self {
            confidence_level,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let level = self.confidence_level;
        if level.is_nan() || level <= 0.0 || level >= 1.0 {
            return Err(InvalidInputError::InvalidConfidenceLevel { level });
        }
        Ok(())
    }
}

/// Parameters of the plot-limits derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotLimitsConfig {
    /// Fraction of each computed span added below and above it.
    pub padding_fraction: f64,
}

impl Default for PlotLimitsConfig {
    fn default() -> Self {
        Self {
            padding_fraction: DEFAULT_PADDING_FRACTION,
        }
    }
}

impl PlotLimitsConfig {
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let fraction = self.padding_fraction;
        if !fraction.is_finite() || fraction < 0.0 {
            return Err(InvalidInputError::InvalidPadding { fraction });
        }
        Ok(())
    }
}
