//! Numerical primitives for method-comparison studies.
//!
//! This crate provides the building blocks the Bland-Altman engine is made of:
//!
//! - **Descriptive statistics**: mean, sample variance, sample standard deviation and range
//! - **Critical values**: two-tailed quantiles of the standard normal and Student-t distributions
//! - **Regression**: ordinary least squares line fitting
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing paired differences
//! - [`critical_value`]: Conversion of confidence levels into critical values
//! - [`regression`]: Least-squares fit of one series against another
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use agreement_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
//! assert_eq!(stats.mean, 5.0);
//! assert_eq!(stats.min, 2.0);
//! ```
//!
//! ## Converting a confidence level
//!
//! ```
//! use agreement_stats::critical_value;
//!
//! let z = critical_value::normal_two_tailed(0.95).unwrap();
//! assert!((z - 1.959_964).abs() < 1e-5);
//! ```
//!
//! ## Fitting a line
//!
//! ```
//! use agreement_stats::regression::LinearFit;
//!
//! let fit = LinearFit::fit(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]).unwrap();
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//! assert!((fit.intercept - 1.0).abs() < 1e-12);
//! ```

pub mod critical_value;
pub mod descriptive;
pub mod regression;
