//! Repeat-and-average drivers over fresh classifiers.
//!
//! Each run constructs a new classifier through a factory, so no target,
//! data or weights are shared between runs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    model::LinearClassifier,
    perceptron::Perceptron
};

/// # Overview
///
/// Aggregate statistics of `runs` independent experiments with `n_points`
/// training points each.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExperimentSummary {
    pub runs:            usize,
    pub n_points:        usize,
    /// Truncating mean over converged runs.
    pub mean_iterations: usize,
    pub min_iterations:  usize,
    pub max_iterations:  usize,
    pub mean_error:      f64,
    pub converged:       usize
}

/// # Overview
///
/// Integer (truncating) mean of `train()` iteration counts over `runs`
/// fresh classifiers built by `factory(n)`.
///
/// # Errors
///
/// [`Error::NoRuns`] for zero runs; otherwise the first factory or
/// training error.
pub fn average_iterations<M, F>(runs: usize, n: usize, mut factory: F) -> Result<usize>
where
    M: LinearClassifier,
    F: FnMut(usize) -> Result<M>
{
    if runs == 0 {
        return Err(Error::NoRuns);
    }
    let mut total = 0usize;
    for _ in 0..runs {
        let mut model = factory(n)?;
        total += model.train()?;
    }
    let average = total / runs;
    log::info!("N={n}, runs={runs}: average iterations {average}");
    Ok(average)
}

/// # Overview
///
/// Mean out-of-sample error after training, over `runs` fresh classifiers.
pub fn average_error<M, F>(runs: usize, n: usize, mut factory: F) -> Result<f64>
where
    M: LinearClassifier,
    F: FnMut(usize) -> Result<M>
{
    if runs == 0 {
        return Err(Error::NoRuns);
    }
    let mut total = 0.0;
    for _ in 0..runs {
        let mut model = factory(n)?;
        model.train()?;
        total += model.evaluate_error();
    }
    let average = total / runs as f64;
    log::info!("N={n}, runs={runs}: average error {average:.4}");
    Ok(average)
}

/// # Overview
///
/// Trains and evaluates `runs` fresh classifiers and collects both
/// statistics in one pass.
///
/// Runs that hit an iteration cap are not fatal: they are left out of the
/// iteration statistics and still contribute their error estimate.
pub fn run_experiment<M, F>(runs: usize, n: usize, mut factory: F) -> Result<ExperimentSummary>
where
    M: LinearClassifier,
    F: FnMut(usize) -> Result<M>
{
    if runs == 0 {
        return Err(Error::NoRuns);
    }
    let mut total_iterations = 0usize;
    let mut min_iterations = usize::MAX;
    let mut max_iterations = 0usize;
    let mut total_error = 0.0;
    let mut converged = 0usize;

    for run in 0..runs {
        let mut model = factory(n)?;
        match model.train() {
            Ok(iterations) => {
                converged += 1;
                total_iterations += iterations;
                min_iterations = min_iterations.min(iterations);
                max_iterations = max_iterations.max(iterations);
            }
            Err(Error::NotConverged { iterations }) => {
                log::warn!("run {run}: gave up after {iterations} iterations");
            }
            Err(e) => return Err(e)
        }
        total_error += model.evaluate_error();
    }

    let mean_iterations = if converged == 0 {
        0
    } else {
        total_iterations / converged
    };
    let summary = ExperimentSummary {
        runs,
        n_points: n,
        mean_iterations,
        min_iterations: if converged == 0 { 0 } else { min_iterations },
        max_iterations,
        mean_error: total_error / runs as f64,
        converged
    };
    log::info!(
        "N={n}, runs={runs}: {converged} converged, mean iterations {}, mean error {:.4}",
        summary.mean_iterations,
        summary.mean_error
    );
    Ok(summary)
}

/// # Overview
///
/// Factory producing reproducible perceptrons seeded `seed`, `seed + 1`, ...
///
/// # Examples
///
/// ```
/// use perceptron_pla::experiment::{average_iterations, seeded};
///
/// let a = average_iterations(20, 10, seeded(7)).unwrap();
/// let b = average_iterations(20, 10, seeded(7)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn seeded(seed: u64) -> impl FnMut(usize) -> Result<Perceptron> {
    let mut next = seed;
    move |n| {
        let pla = Perceptron::seeded(n, next);
        next = next.wrapping_add(1);
        pla
    }
}

/// Factory producing entropy-seeded perceptrons.
pub fn unseeded() -> impl FnMut(usize) -> Result<Perceptron> {
    Perceptron::new
}
