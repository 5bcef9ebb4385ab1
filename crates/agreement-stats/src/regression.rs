use serde::{Deserialize, Serialize};

/// Ordinary least squares fit of `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Change in `y` per unit change in `x`.
    pub slope: f64,
    /// Value of `y` where the line crosses `x = 0`.
    pub intercept: f64,
    /// Coefficient of determination, in `[0, 1]`.
    pub r_squared: f64,
}

impl LinearFit {
    /// Fits a line through paired observations.
    ///
    /// # Returns
    ///
    /// * `Some(LinearFit)` - if the slices have equal length of at least two
    ///   and `xs` is not constant
    /// * `None` - otherwise, since the slope is undefined, or if the values
    ///   are too large for the fit to be finite
    ///
    /// When `ys` is constant the fit is exact and `r_squared` is `1.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use agreement_stats::regression::LinearFit;
    /// let fit = LinearFit::fit(&[0.0, 1.0, 2.0, 3.0], &[1.0, 1.5, 2.0, 2.5]).unwrap();
    /// assert!((fit.slope - 0.5).abs() < 1e-12);
    /// assert!((fit.predict(4.0) - 3.0).abs() < 1e-12);
    ///
    /// assert!(LinearFit::fit(&[2.0, 2.0], &[1.0, 3.0]).is_none());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn fit(xs: &[f64], ys: &[f64]) -> Option<Self> {
        if xs.len() != ys.len() || xs.len() < 2 {
            return None;
        }

        let n = xs.len() as f64;
        let x_mean = xs.iter().sum::<f64>() / n;
        let y_mean = ys.iter().sum::<f64>() / n;

        let (sxx, sxy, syy) = xs.iter().zip(ys).fold((0.0, 0.0, 0.0), |(sxx, sxy, syy), (x, y)| {
            let dx = x - x_mean;
            let dy = y - y_mean;
            (sxx + dx * dx, sxy + dx * dy, syy + dy * dy)
        });

        if sxx.is_nan() || sxx <= 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;
        if !slope.is_finite() || !intercept.is_finite() {
            return None;
        }
        let r_squared = if syy <= 0.0 {
            1.0
        } else {
            ((sxy * sxy) / (sxx * syy)).clamp(0.0, 1.0)
        };

        Some(Self {
            slope,
            intercept,
            r_squared,
        })
    }

    /// Evaluates the fitted line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
