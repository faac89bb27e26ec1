//! Configuration and builder for the perceptron.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of fresh points drawn by an out-of-sample error estimate.
pub const DEFAULT_EVAL_POINTS: usize = 1000;

/// # Overview
///
/// Configuration parameters for a perceptron experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use]
pub struct Config {
    pub n_points:       usize,
    pub max_iterations: Option<usize>,
    pub eval_points:    usize
}

impl Config {
    /// # Overview
    ///
    /// Creates a new ConfigBuilder.
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// # Overview
    ///
    /// Unbounded configuration for `n_points` training points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTrainingSet`] if `n_points` is zero.
    pub fn new(n_points: usize) -> Result<Self> {
        Self::builder().points(n_points).build()
    }

    /// # Overview
    ///
    /// Validates configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.n_points == 0 {
            return Err(Error::EmptyTrainingSet);
        }
        if self.max_iterations == Some(0) {
            return Err(Error::InvalidIterationCap);
        }
        if self.eval_points == 0 {
            return Err(Error::InvalidEvalPoints);
        }
        Ok(())
    }
}

/// # Overview
///
/// Builder for Config with validation.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    n_points:       Option<usize>,
    max_iterations: Option<usize>,
    eval_points:    Option<usize>
}

impl ConfigBuilder {
    /// # Overview
    ///
    /// Sets the training-set size N (must be at least 1).
    pub fn points(mut self, n: usize) -> Self {
        self.n_points = Some(n);
        self
    }

    /// # Overview
    ///
    /// Caps the number of PLA updates (default: unbounded).
    pub fn max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets fresh points per error estimate (default: 1000).
    pub fn eval_points(mut self, n: usize) -> Self {
        self.eval_points = Some(n);
        self
    }

    /// # Overview
    ///
    /// Builds and validates the Config.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            n_points:       self.n_points.ok_or(Error::EmptyTrainingSet)?,
            max_iterations: self.max_iterations,
            eval_points:    self.eval_points.unwrap_or(DEFAULT_EVAL_POINTS)
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_with_defaults() {
        let config = Config::builder().points(10).build().unwrap();

        assert_eq!(config.n_points, 10);
        assert_eq!(config.max_iterations, None);
        assert_eq!(config.eval_points, 1000);
    }

    #[test]
    fn builder_rejects_empty_training_set() {
        assert_eq!(Config::builder().points(0).build(), Err(Error::EmptyTrainingSet));
        assert_eq!(Config::builder().build(), Err(Error::EmptyTrainingSet));
    }

    #[test]
    fn builder_rejects_zero_cap() {
        let result = Config::builder().points(5).max_iterations(0).build();

        assert_eq!(result, Err(Error::InvalidIterationCap));
    }

    #[test]
    fn builder_rejects_zero_eval_points() {
        let result = Config::builder().points(5).eval_points(0).build();

        assert_eq!(result, Err(Error::InvalidEvalPoints));
    }

    #[test]
    fn new_is_unbounded() {
        let config = Config::new(100).unwrap();

        assert_eq!(config.n_points, 100);
        assert!(config.max_iterations.is_none());
    }
}
