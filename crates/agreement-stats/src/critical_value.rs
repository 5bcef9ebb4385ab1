//! Two-tailed critical values for confidence intervals.
//!
//! A confidence level `c` in `(0, 1)` leaves `(1 - c) / 2` probability in
//! each tail, so the critical value is the quantile at `1 - (1 - c) / 2`.
//!
//! # Examples
//!
//! ```
//! use agreement_stats::critical_value;
//!
//! let z = critical_value::normal_two_tailed(0.95).unwrap();
//! let t = critical_value::student_t_two_tailed(0.95, 9.0).unwrap();
//!
//! // Student-t has heavier tails than the normal distribution
//! assert!(t > z);
//! ```

use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum CriticalValueError {
    #[display("confidence level must lie strictly between 0 and 1, got {level}")]
    InvalidConfidenceLevel { level: f64 },
    #[display("Student-t distribution requires positive degrees of freedom, got {degrees_of_freedom}")]
    InvalidDegreesOfFreedom { degrees_of_freedom: f64 },
}

/// Returns the cumulative probability at the upper critical value.
///
/// # Examples
///
/// ```
/// # use agreement_stats::critical_value::two_tailed_probability;
/// assert!((two_tailed_probability(0.95).unwrap() - 0.975).abs() < 1e-12);
/// assert!(two_tailed_probability(1.0).is_err());
/// ```
pub fn two_tailed_probability(confidence_level: f64) -> Result<f64, CriticalValueError> {
    if confidence_level.is_nan() || confidence_level <= 0.0 || confidence_level >= 1.0 {
        return Err(CriticalValueError::InvalidConfidenceLevel {
            level: confidence_level,
        });
    }
    Ok(1.0 - (1.0 - confidence_level) / 2.0)
}

/// Standard normal critical value `Φ⁻¹(1 - (1 - c) / 2)`.
///
/// # Examples
///
/// ```
/// # use agreement_stats::critical_value::normal_two_tailed;
/// assert!((normal_two_tailed(0.99).unwrap() - 2.575_829).abs() < 1e-5);
/// ```
pub fn normal_two_tailed(confidence_level: f64) -> Result<f64, CriticalValueError> {
    let p = two_tailed_probability(confidence_level)?;
    Ok(Normal::standard().inverse_cdf(p))
}

/// Student-t critical value with the given degrees of freedom.
///
/// Fractional degrees of freedom are accepted.
pub fn student_t_two_tailed(
    confidence_level: f64,
    degrees_of_freedom: f64,
) -> Result<f64, CriticalValueError> {
    let p = two_tailed_probability(confidence_level)?;
    if !degrees_of_freedom.is_finite() || degrees_of_freedom <= 0.0 {
        return Err(CriticalValueError::InvalidDegreesOfFreedom { degrees_of_freedom });
    }
    let dist = StudentsT::new(0.0, 1.0, degrees_of_freedom)
        .map_err(|_| CriticalValueError::InvalidDegreesOfFreedom { degrees_of_freedom })?;
    Ok(dist.inverse_cdf(p))
}
