//! # Perceptron Learning Algorithm
//!
//! Rust implementation of the Perceptron Learning Algorithm (PLA) on random
//! linearly separable data in [-1, 1]².
//!
//! Each [`Perceptron`] draws a random target line, labels N uniform training
//! points with it, and learns a separating weight vector by repeatedly
//! correcting one randomly chosen misclassified point.
//!
//! # Features
//!
//! - `serde`: Serialization support for configs, targets, datasets and
//!   results
//!
//! # Examples
//!
//! ```
//! use perceptron_pla::{Config, Perceptron, utils::rng_from_seed};
//!
//! let config = Config::builder().points(10).max_iterations(10_000).build().unwrap();
//!
//! let mut pla = Perceptron::with_rng(config, rng_from_seed(42)).unwrap();
//!
//! let iterations = pla.train().unwrap();
//! let error = pla.evaluate_error();
//!
//! assert!(iterations > 0);
//! assert!(pla.misclassified().is_empty());
//! assert!((0.0..=1.0).contains(&error));
//! ```

mod config;
mod dataset;
pub mod error;
pub mod experiment;
pub mod linear;
mod model;
mod perceptron;
mod target;
mod training;
pub mod utils;

pub use config::{Config, ConfigBuilder, DEFAULT_EVAL_POINTS};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use experiment::ExperimentSummary;
pub use linear::Vector3;
pub use model::LinearClassifier;
pub use perceptron::Perceptron;
pub use target::TargetFunction;
pub use training::{FitOptions, FitResult, ProgressCallback, TrainState, TrainingRun, misclassified};
