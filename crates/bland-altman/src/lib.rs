//! Bland-Altman agreement analysis between two measurement methods.
//!
//! This crate computes the statistics behind a Bland-Altman plot and the axis
//! limits needed to draw it. Drawing itself is left to the caller: both result
//! types are plain serializable values a renderer can consume.
//!
//! # Overview
//!
//! 1. **Statistics** ([`statistics::compute_statistics`]): differences, means, bias,
//!    limits of agreement and their confidence intervals
//! 2. **Plot limits** ([`plot_limits::compute_plot_limits`]): padded axis ranges
//!    covering the data and the confidence bands, with optional overrides
//!
//! Both operations are pure functions. They validate all input up front and
//! return [`InvalidInputError`] without computing anything on failure.
//!
//! # Configuration
//!
//! [`config::AnalysisConfig`] selects the confidence level, the distribution
//! used for confidence-interval multipliers and the standard-error formula for
//! the limits of agreement. [`config::PlotLimitsConfig`] sets the padding
//! around computed axis ranges.
//!
//! # Logging
//!
//! Computations emit `tracing` events: `debug` for each computed summary and
//! `warn` when all differences are identical. Install a subscriber in the
//! application to see them.
//!
//! # Examples
//!
//! ```
//! use bland_altman::{compute_plot_limits, compute_statistics};
//!
//! let method_a = [120.0, 132.0, 118.0, 141.0, 127.0, 135.0];
//! let method_b = [122.0, 130.0, 121.0, 138.0, 129.0, 133.0];
//!
//! let stats = compute_statistics(&method_a, &method_b, 0.95)?;
//! assert!(stats.lower_loa < stats.bias && stats.bias < stats.upper_loa);
//!
//! let limits = compute_plot_limits(&stats, None, None)?;
//! assert!(limits.y_lower < stats.lower_loa_lower_ci);
//! assert!(limits.y_upper > stats.upper_loa_upper_ci);
//! # Ok::<(), bland_altman::InvalidInputError>(())
//! ```

pub use self::{
    error::InvalidInputError,
    plot_limits::{AxisRange, PlotLimits, compute_plot_limits},
    statistics::{ConfidenceInterval, StatisticsResult, compute_statistics},
};

pub mod config;
pub mod error;
pub mod plot_limits;
pub mod statistics;
