use agreement_stats::critical_value::CriticalValueError;

/// Identifies one of the two measurement series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Series {
    #[display("measurement1")]
    Measurement1,
    #[display("measurement2")]
    Measurement2,
}

/// Plot axis identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Axis {
    #[display("x")]
    X,
    #[display("y")]
    Y,
}

/// Rejected input of a statistics or plot-limits computation.
///
/// Preconditions are checked before any computation starts. Finite inputs
/// whose magnitudes overflow during computation are reported as
/// [`InvalidInputError::NonFiniteResult`]. In either case no result is returned.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum InvalidInputError {
    #[display("measurement series differ in length ({len1} vs {len2})")]
    LengthMismatch { len1: usize, len2: usize },
    #[display("at least 2 paired measurements are required, got {len}")]
    InsufficientSamples { len: usize },
    #[display("{series}[{index}] is not a finite number ({value})")]
    NonFiniteValue {
        series: Series,
        index: usize,
        value: f64,
    },
    #[display("confidence level must lie strictly between 0 and 1, got {level}")]
    InvalidConfidenceLevel { level: f64 },
    #[display("invalid {axis}-axis range: lower bound {lower} must be finite and below upper bound {upper}")]
    InvalidAxisRange { axis: Axis, lower: f64, upper: f64 },
    #[display("padding fraction must be finite and non-negative, got {fraction}")]
    InvalidPadding { fraction: f64 },
    #[display("{quantity} is not finite; input magnitudes are too large to compute it")]
    NonFiniteResult { quantity: &'static str },
    #[display("cannot derive critical value: {_0}")]
    #[from]
    CriticalValue(#[error(source)] CriticalValueError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = InvalidInputError::LengthMismatch { len1: 10, len2: 9 };
        assert_eq!(err.to_string(), "measurement series differ in length (10 vs 9)");

        let err = InvalidInputError::NonFiniteValue {
            series: Series::Measurement2,
            index: 3,
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "measurement2[3] is not a finite number (NaN)");
    }

    #[test]
    fn test_non_finite_result_message() {
        let err = InvalidInputError::NonFiniteResult {
            quantity: "bias_std_dev",
        };
        assert_eq!(
            err.to_string(),
            "bias_std_dev is not finite; input magnitudes are too large to compute it"
        );
    }

    #[test]
    fn test_critical_value_error_is_source() {
        use std::error::Error as _;

        let inner = CriticalValueError::InvalidDegreesOfFreedom {
            degrees_of_freedom: 0.0,
        };
        let err = InvalidInputError::from(inner);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("cannot derive critical value: "));
    }
}
