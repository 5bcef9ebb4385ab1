use serde::{Deserialize, Serialize};

/// Descriptive statistics summarizing a sample.
///
/// Dispersion is measured with the unbiased sample estimator (`n - 1`
/// denominator), so at least two values are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// The number of values in the sample.
    pub count: usize,
    /// The minimum value in the sample.
    pub min: f64,
    /// The maximum value in the sample.
    pub max: f64,
    /// The arithmetic mean of the sample.
    pub mean: f64,
    /// The sample variance (`n - 1` denominator).
    pub variance: f64,
    /// The sample standard deviation.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from values in any order.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values. The values are collected internally.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the sample contains at least two values
    /// * `None` - if the sample has fewer than two values
    ///
    /// # Examples
    ///
    /// ```
    /// # use agreement_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([5.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.variance, 4.0);
    /// assert!(DescriptiveStats::new([1.0]).is_none());
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        Self::from_slice(&values)
    }

    /// Computes descriptive statistics from a borrowed slice.
    ///
    /// Uses a two-pass algorithm: the mean first, then the sum of squared
    /// deviations from it.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the slice contains at least two values
    /// * `None` - if the slice has fewer than two values
    ///
    /// # Examples
    ///
    /// ```
    /// # use agreement_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::from_slice(&[0.0, 0.0, 0.0, 0.0, -1.0]).unwrap();
    /// assert!((stats.mean + 0.2).abs() < 1e-12);
    /// assert!((stats.std_dev - 0.2_f64.sqrt()).abs() < 1e-12);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        let count = values.len();
        if count < 2 {
            return None;
        }

        let n = count as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let (mean, variance) = if max - min == 0.0 {
            // All values identical: `sum / n` may not round back to the value
            (min, 0.0)
        } else {
            let mean = values.iter().sum::<f64>() / n;
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
            (mean, variance)
        };
        let std_dev = variance.sqrt();

        Some(Self {
            count,
            min,
            max,
            mean,
            variance,
            std_dev,
        })
    }

    /// Returns the spread between the largest and smallest value.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Returns the standard error of the mean, `std_dev / sqrt(count)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use agreement_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([1.0, 3.0, 5.0, 7.0]).unwrap();
    /// assert!((stats.standard_error() - stats.std_dev / 2.0).abs() < 1e-12);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn standard_error(&self) -> f64 {
        self.std_dev / (self.count as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_values() {
        assert!(DescriptiveStats::from_slice(&[]).is_none());
        assert!(DescriptiveStats::from_slice(&[42.0]).is_none());
    }

    #[test]
    fn test_two_values() {
        let stats = DescriptiveStats::from_slice(&[1.0, 3.0]).unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.variance, 2.0);
        assert_eq!(stats.range(), 2.0);
    }

    #[test]
    fn test_constant_values_have_zero_dispersion() {
        let stats = DescriptiveStats::from_slice(&[7.5; 10]).unwrap();
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.range(), 0.0);
    }

    #[test]
    fn test_identical_inexact_values_have_exact_mean() {
        for value in [0.1, 0.7, -0.3, 1e-9] {
            for count in [3, 7, 10] {
                let values = vec![value; count];
                let stats = DescriptiveStats::from_slice(&values).unwrap();
                assert_eq!(stats.mean, value, "{count} x {value}");
                assert_eq!(stats.variance, 0.0, "{count} x {value}");
                assert_eq!(stats.std_dev, 0.0, "{count} x {value}");
            }
        }
    }

    #[test]
    fn test_sample_denominator() {
        // Population variance would be 4.0; sample variance uses n - 1
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = DescriptiveStats::from_slice(&values).unwrap();
        assert!((stats.variance - 32.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = DescriptiveStats::new([3.0, 1.0, 2.0]).unwrap();
        let b = DescriptiveStats::new([1.0, 2.0, 3.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_negative_values() {
        let stats = DescriptiveStats::from_slice(&[-3.0, -1.0]).unwrap();
        assert_eq!(stats.min, -3.0);
        assert_eq!(stats.max, -1.0);
        assert_eq!(stats.mean, -2.0);
    }
}
