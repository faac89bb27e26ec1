//! Common interface for trainable linear classifiers.

use crate::{error::Result, linear::Vector3};

/// Unified interface for PLA-style linear classifiers.
///
/// The batch drivers in [`experiment`](crate::experiment) only need this
/// trait, so any classifier that owns its target, data and random source
/// can be averaged over many runs.
///
/// # Example
///
/// ```
/// use perceptron_pla::{LinearClassifier, Perceptron};
///
/// fn run<M: LinearClassifier>(model: &mut M) -> f64 {
///     model.train().unwrap();
///     model.evaluate_error()
/// }
///
/// let mut pla = Perceptron::seeded(10, 42).unwrap();
/// let error = run(&mut pla);
/// assert!(error <= 1.0);
/// ```
pub trait LinearClassifier {
    /// Trains from scratch and returns the number of updates.
    fn train(&mut self) -> Result<usize>;

    /// Fresh Monte Carlo estimate of the out-of-sample error in [0, 1].
    fn evaluate_error(&mut self) -> f64;

    /// Predicts the label of one augmented point.
    fn predict(&self, point: &Vector3) -> i8;

    /// Current hypothesis.
    fn weights(&self) -> &Vector3;

    /// Batch prediction for multiple points.
    fn predict_batch(&self, points: &[Vector3]) -> Vec<i8> {
        points.iter().map(|p| self.predict(p)).collect()
    }
}
