//! Perceptron trained with PLA against a random linear target.

use rand::Rng;

use crate::{
    Config,
    dataset::Dataset,
    error::{Error, Result},
    linear::{Vector3, ZERO, classify},
    target::TargetFunction,
    training::{self, FitOptions, FitResult, TrainState, TrainingRun},
    utils::{FastRng, random_points, rng_from_entropy, rng_from_seed}
};

/// # Overview
///
/// One PLA experiment: a random target, a labeled training set drawn from
/// [-1, 1]², and the learned weight vector.
///
/// The random source is owned by the instance, so construction, training
/// and evaluation replay exactly for a given seed.
///
/// # Examples
///
/// ```
/// use perceptron_pla::Perceptron;
///
/// let mut pla = Perceptron::seeded(10, 42).unwrap();
///
/// let iterations = pla.train().unwrap();
/// let error = pla.evaluate_error();
///
/// assert!(iterations > 0);
/// assert!((0.0..=1.0).contains(&error));
/// ```
#[derive(Debug, Clone)]
pub struct Perceptron<R = FastRng> {
    config:  Config,
    target:  TargetFunction,
    dataset: Dataset,
    weights: Vector3,
    rng:     R
}

impl Perceptron<FastRng> {
    /// # Overview
    ///
    /// Random experiment with `n` training points, seeded from entropy.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTrainingSet`] if `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        Self::with_rng(Config::new(n)?, rng_from_entropy())
    }

    /// # Overview
    ///
    /// Reproducible experiment with `n` training points.
    pub fn seeded(n: usize, seed: u64) -> Result<Self> {
        Self::with_rng(Config::new(n)?, rng_from_seed(seed))
    }
}

impl<R: Rng> Perceptron<R> {
    /// # Overview
    ///
    /// Builds an experiment from a config and an injected random source.
    ///
    /// Draws the target's two boundary points first, then the training
    /// points, then labels them. Weights start at zero.
    pub fn with_rng(config: Config, mut rng: R) -> Result<Self> {
        config.validate()?;
        let target = TargetFunction::random(&mut rng);
        let dataset = Dataset::generate(config.n_points, &target, &mut rng)?;
        Ok(Self {
            config,
            target,
            dataset,
            weights: ZERO,
            rng
        })
    }

    /// # Overview
    ///
    /// Builds an experiment from a caller-chosen target and training points.
    ///
    /// The points are labeled here by `target`, so stored labels always
    /// agree with it. The random source is used only for training choices
    /// and error estimates.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTrainingSet`] for no points, [`Error::BoundaryPoint`]
    /// for a point lying on the target line.
    pub fn with_data(target: TargetFunction, points: Vec<Vector3>, rng: R) -> Result<Self> {
        let dataset = Dataset::from_points(points, &target)?;
        let config = Config::new(dataset.len())?;
        Ok(Self {
            config,
            target,
            dataset,
            weights: ZERO,
            rng
        })
    }

    /// Replaces the iteration cap used by [`train`](Self::train).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIterationCap`] for `Some(0)`.
    pub fn set_max_iterations(&mut self, max_iterations: Option<usize>) -> Result<()> {
        let config = Config {
            max_iterations,
            ..self.config
        };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// # Overview
    ///
    /// Runs PLA from zero weights until no training point is misclassified.
    ///
    /// Returns the number of weight updates. Training is unbounded unless
    /// `Config::max_iterations` is set. Termination without a cap rests on
    /// separability, which holds because every label comes from the target
    /// and no training point lies on the target line (such points are
    /// rejected or redrawn when the dataset is built).
    ///
    /// # Errors
    ///
    /// [`Error::NotConverged`] when the configured cap is reached first.
    /// The weights then hold the last hypothesis.
    pub fn train(&mut self) -> Result<usize> {
        let opts = FitOptions::new().with_max_iterations(self.config.max_iterations);
        let result = self.fit_with_options(opts);
        match result.state {
            TrainState::Converged => Ok(result.iterations),
            TrainState::Stopped => Err(Error::Stopped {
                iterations: result.iterations
            }),
            TrainState::Exceeded | TrainState::Training => Err(Error::NotConverged {
                iterations: result.iterations
            })
        }
    }

    /// Training with full options including cap, history and callback.
    ///
    /// Unlike [`Config`], options accept a cap of `Some(0)`: no update is
    /// made and the result reports the zero hypothesis as `Exceeded`.
    ///
    /// # Arguments
    ///
    /// * `opts` - Training options (cap, history recording, callback)
    ///
    /// # Returns
    ///
    /// [`FitResult`] with training statistics.
    pub fn fit_with_options(&mut self, mut opts: FitOptions) -> FitResult {
        let mut run = TrainingRun::new(&self.dataset, opts.max_iterations);
        let mut history = Vec::new();

        while run.state() == TrainState::Training {
            let before = run.iterations();
            run.step(&mut self.rng);
            if run.iterations() == before {
                continue;
            }

            let left = run.misclassified().len();
            if opts.record_history {
                history.push(left);
            }

            // Callback
            if let Some(ref mut callback) = opts.callback
                && !callback(run.iterations(), left)
            {
                run.stop();
            }
        }

        let result = FitResult::from_run(&run, history);
        self.weights = result.weights;

        match result.state {
            TrainState::Converged => log::debug!(
                "converged after {} iterations on {} points",
                result.iterations,
                self.dataset.len()
            ),
            TrainState::Exceeded => log::warn!(
                "no convergence within {} iterations, {} points misclassified",
                result.iterations,
                result.misclassified
            ),
            _ => log::debug!("training stopped after {} iterations", result.iterations)
        }
        result
    }

    /// # Overview
    ///
    /// Out-of-sample error: fraction of fresh uniform points where the
    /// hypothesis disagrees with the target.
    ///
    /// Draws `config.eval_points` (1000 by default) new points per call.
    pub fn evaluate_error(&mut self) -> f64 {
        let points = random_points(self.config.eval_points, &mut self.rng);
        self.evaluate_error_on(&points)
    }

    /// Disagreement fraction on the given points (0.0 for an empty slice).
    #[must_use]
    pub fn evaluate_error_on(&self, points: &[Vector3]) -> f64 {
        if points.is_empty() {
            return 0.0;
        }
        let wrong = points
            .iter()
            .filter(|p| self.target.label(p) != self.predict(p))
            .count();
        wrong as f64 / points.len() as f64
    }

    /// In-sample error of the current weights.
    #[must_use]
    pub fn training_error(&self) -> f64 {
        self.misclassified().len() as f64 / self.dataset.len() as f64
    }

    /// Indices of training points the current weights get wrong.
    #[must_use]
    pub fn misclassified(&self) -> Vec<usize> {
        training::misclassified(&self.weights, self.dataset.points(), self.dataset.labels())
    }

    /// # Overview
    ///
    /// Hypothesis label `sign(w · point)`.
    #[inline(always)]
    pub fn predict(&self, point: &Vector3) -> i8 {
        classify(&self.weights, point)
    }

    /// # Overview
    ///
    /// Batch prediction for multiple points.
    #[inline]
    pub fn predict_batch(&self, points: &[Vector3]) -> Vec<i8> {
        points.iter().map(|p| self.predict(p)).collect()
    }

    #[inline]
    pub fn weights(&self) -> &Vector3 {
        &self.weights
    }

    #[inline]
    pub fn target(&self) -> &TargetFunction {
        &self.target
    }

    #[inline]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Training-set size N.
    #[inline]
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }
}

impl<R: Rng> crate::model::LinearClassifier for Perceptron<R> {
    fn train(&mut self) -> Result<usize> {
        Perceptron::train(self)
    }

    fn evaluate_error(&mut self) -> f64 {
        Perceptron::evaluate_error(self)
    }

    fn predict(&self, point: &Vector3) -> i8 {
        Perceptron::predict(self, point)
    }

    fn weights(&self) -> &Vector3 {
        Perceptron::weights(self)
    }
}
