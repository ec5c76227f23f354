//! Regression options and configuration.

use thiserror::Error;

/// Configuration options for least-squares regression.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionOptions {
    /// Whether to include an intercept term (default: true).
    pub with_intercept: bool,
    /// Relative cutoff for small singular values.
    ///
    /// Singular values at or below `rcond * max(singular_values)` are treated
    /// as zero. `None` uses machine epsilon times the larger matrix dimension.
    pub rcond: Option<f64>,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            with_intercept: true,
            rcond: None,
        }
    }
}

/// Errors that can occur when validating regression options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("rcond must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}

impl RegressionOptions {
    /// Create a new builder for regression options.
    pub fn builder() -> RegressionOptionsBuilder {
        RegressionOptionsBuilder::default()
    }

    /// Options for a model without an intercept term.
    pub fn through_origin() -> Self {
        Self {
            with_intercept: false,
            ..Default::default()
        }
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if let Some(rcond) = self.rcond {
            if !rcond.is_finite() || rcond < 0.0 {
                return Err(OptionsError::InvalidTolerance(rcond));
            }
        }
        Ok(())
    }
}

/// Builder for `RegressionOptions`.
#[derive(Debug, Clone, Default)]
pub struct RegressionOptionsBuilder {
    options: RegressionOptions,
}

impl RegressionOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include an intercept term.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.options.with_intercept = include;
        self
    }

    /// Set the relative singular-value cutoff.
    pub fn rcond(mut self, rcond: f64) -> Self {
        self.options.rcond = Some(rcond);
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<RegressionOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> RegressionOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = RegressionOptions::default();
        assert!(opts.with_intercept);
        assert!(opts.rcond.is_none());
    }

    #[test]
    fn test_builder() {
        let opts = RegressionOptions::builder()
            .with_intercept(false)
            .rcond(1e-12)
            .build()
            .unwrap();

        assert!(!opts.with_intercept);
        assert_eq!(opts.rcond, Some(1e-12));
    }

    #[test]
    fn test_through_origin() {
        let opts = RegressionOptions::through_origin();
        assert!(!opts.with_intercept);
        assert!(opts.rcond.is_none());
    }

    #[test]
    fn test_validation_negative_rcond() {
        let result = RegressionOptions::builder().rcond(-1.0).build();
        assert!(matches!(result, Err(OptionsError::InvalidTolerance(_))));
    }

    #[test]
    fn test_validation_nan_rcond() {
        let result = RegressionOptions::builder().rcond(f64::NAN).build();
        assert!(matches!(result, Err(OptionsError::InvalidTolerance(_))));
    }

    #[test]
    fn test_validation_zero_rcond_allowed() {
        let result = RegressionOptions::builder().rcond(0.0).build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_unchecked_skips_validation() {
        let opts = RegressionOptionsBuilder::new()
            .rcond(-1.0)
            .build_unchecked();
        assert_eq!(opts.rcond, Some(-1.0));
        assert!(opts.validate().is_err());
    }
}
