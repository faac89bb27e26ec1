//! PLA training state machine, options, callbacks, and results.

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dataset::Dataset,
    linear::{Vector3, ZERO, add_scaled, classify},
    utils::choose
};

/// Progress callback type for training.
///
/// Called after each update with (iteration, misclassified count).
/// Return `false` to stop training early.
pub type ProgressCallback = Box<dyn FnMut(usize, usize) -> bool + Send>;

/// # Overview
///
/// Phase of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrainState {
    /// Misclassified points remain and the cap is not reached.
    Training,
    /// No training point is misclassified.
    Converged,
    /// The iteration cap was reached with misclassified points left.
    Exceeded,
    /// A progress callback halted the run.
    Stopped
}

impl TrainState {
    /// True once the run can make no further progress.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Self::Training
    }
}

/// # Overview
///
/// Indices of points whose hypothesis label `sign(w · p)` differs from the
/// stored label.
///
/// A zero on one side and a nonzero on the other counts as a disagreement.
pub fn misclassified(weights: &Vector3, points: &[Vector3], labels: &[i8]) -> Vec<usize> {
    points
        .iter()
        .zip(labels)
        .enumerate()
        .filter(|(_, (p, y))| classify(weights, p) != **y)
        .map(|(i, _)| i)
        .collect()
}

/// # Overview
///
/// One PLA run over a dataset, advanced one update at a time.
///
/// Always starts from the zero hypothesis.
#[derive(Debug, Clone)]
pub struct TrainingRun<'a> {
    data:           &'a Dataset,
    weights:        Vector3,
    iterations:     usize,
    max_iterations: Option<usize>,
    misclassified:  Vec<usize>,
    state:          TrainState
}

impl<'a> TrainingRun<'a> {
    /// Creates a run with zero weights and an optional update cap.
    pub fn new(data: &'a Dataset, max_iterations: Option<usize>) -> Self {
        let misclassified = misclassified(&ZERO, data.points(), data.labels());
        let state = if misclassified.is_empty() {
            TrainState::Converged
        } else {
            TrainState::Training
        };
        Self {
            data,
            weights: ZERO,
            iterations: 0,
            max_iterations,
            misclassified,
            state
        }
    }

    /// # Overview
    ///
    /// Performs at most one PLA update and returns the resulting state.
    ///
    /// Picks one misclassified index uniformly at random and adds
    /// `label · point` to the weights. Terminal states are returned
    /// unchanged without touching the RNG. Choosing a point labeled `0`
    /// ends the run as `Exceeded`, since its update is a no-op.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> TrainState {
        if self.state.is_terminal() {
            return self.state;
        }
        if let Some(cap) = self.max_iterations
            && self.iterations >= cap
        {
            self.state = TrainState::Exceeded;
            return self.state;
        }

        let Some(&i) = choose(&self.misclassified, rng) else {
            self.state = TrainState::Converged;
            return self.state;
        };
        let label = self.data.labels()[i];
        if label == 0 {
            // No update can move a zero-label point; give up instead of spinning.
            log::warn!("point {i} lies on the target line, stopping");
            self.state = TrainState::Exceeded;
            return self.state;
        }
        let label = f64::from(label);
        add_scaled(&mut self.weights, label, &self.data.points()[i]);
        self.iterations += 1;

        self.misclassified = misclassified(&self.weights, self.data.points(), self.data.labels());
        log::trace!(
            "iteration {}: updated on point {}, {} misclassified",
            self.iterations,
            i,
            self.misclassified.len()
        );
        if self.misclassified.is_empty() {
            self.state = TrainState::Converged;
        }
        self.state
    }

    /// Steps until a terminal state is reached.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> TrainState {
        while !self.step(rng).is_terminal() {}
        self.state
    }

    /// Marks an in-progress run as stopped.
    pub fn stop(&mut self) {
        if self.state == TrainState::Training {
            self.state = TrainState::Stopped;
        }
    }

    #[inline]
    pub fn weights(&self) -> &Vector3 {
        &self.weights
    }

    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    #[inline]
    pub fn misclassified(&self) -> &[usize] {
        &self.misclassified
    }

    #[inline]
    pub fn state(&self) -> TrainState {
        self.state
    }
}

/// Options for a training run.
#[derive(Default)]
pub struct FitOptions {
    pub max_iterations: Option<usize>,
    pub record_history: bool,
    pub callback:       Option<ProgressCallback>
}

impl core::fmt::Debug for FitOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FitOptions")
            .field("max_iterations", &self.max_iterations)
            .field("record_history", &self.record_history)
            .field("callback", &self.callback.as_ref().map(|_| "..."))
            .finish()
    }
}

impl FitOptions {
    /// Creates unbounded options without history or callback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of updates.
    ///
    /// `Some(0)` is a report-only run: the zero hypothesis is scored and no
    /// update is made.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Records the misclassified count after every update.
    #[must_use]
    pub fn with_history(mut self) -> Self {
        self.record_history = true;
        self
    }

    /// Sets progress callback.
    ///
    /// The callback receives (iteration, misclassified count) after each
    /// update. Return `false` to stop training early.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let opts = FitOptions::new().with_callback(|iteration, left| {
    ///     println!("{iteration}: {left} misclassified");
    ///     iteration < 500
    /// });
    /// ```
    #[must_use]
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize, usize) -> bool + Send + 'static
    {
        self.callback = Some(Box::new(callback));
        self
    }
}

/// Result of training.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitResult {
    /// Number of weight updates performed.
    pub iterations:    usize,
    /// Terminal state of the run.
    pub state:         TrainState,
    /// Misclassified training points left at the end.
    pub misclassified: usize,
    /// Final weights.
    pub weights:       Vector3,
    /// Misclassified count after each update, if recorded.
    pub history:       Vec<usize>
}

impl FitResult {
    /// Builds a result from a finished run.
    #[must_use]
    pub fn from_run(run: &TrainingRun<'_>, history: Vec<usize>) -> Self {
        Self {
            iterations: run.iterations(),
            state: run.state(),
            misclassified: run.misclassified().len(),
            weights: *run.weights(),
            history
        }
    }

    #[inline]
    pub fn converged(&self) -> bool {
        self.state == TrainState::Converged
    }
}
