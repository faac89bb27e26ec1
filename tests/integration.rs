//! Integration tests for the perceptron.

use perceptron_pla::{
    Config, Error, FitOptions, LinearClassifier, Perceptron, TrainState,
    experiment::{average_error, average_iterations, run_experiment, seeded},
    linear::{ZERO, classify},
    utils::rng_from_seed
};

#[test]
fn end_to_end_ten_points() {
    let mut pla = Perceptron::seeded(10, 2024).unwrap();

    let iterations = pla.train().unwrap();
    assert!(iterations >= 1);

    for (p, y) in pla.dataset().iter() {
        assert_eq!(pla.predict(p), y);
    }

    let error = pla.evaluate_error();
    assert!(error < 0.5, "error {error} too high for a separating hypothesis");
}

#[test]
fn labels_come_from_target_not_weights() {
    let mut pla = Perceptron::seeded(40, 17).unwrap();
    let before = pla.dataset().labels().to_vec();

    pla.train().unwrap();

    assert_eq!(pla.dataset().labels(), before.as_slice());
    for (p, y) in pla.dataset().iter() {
        assert_eq!(classify(pla.target().coefficients(), p), y);
    }
}

#[test]
fn fresh_instance_has_zero_weights() {
    for seed in 0..20 {
        let pla = Perceptron::seeded(10, seed).unwrap();
        assert_eq!(pla.weights(), &ZERO);
    }
}

#[test]
fn full_replay_is_deterministic() {
    let replay = |seed| {
        let config = Config::builder().points(25).build().unwrap();
        let mut pla = Perceptron::with_rng(config, rng_from_seed(seed)).unwrap();
        let iterations = pla.train().unwrap();
        let error = pla.evaluate_error();
        (iterations, *pla.weights(), error)
    };

    assert_eq!(replay(77), replay(77));
}

#[test]
fn evaluation_draws_fresh_points() {
    let mut pla = Perceptron::seeded(10, 31).unwrap();
    pla.train().unwrap();

    // Each call consumes new draws from the instance's stream.
    let errors: Vec<f64> = (0..5).map(|_| pla.evaluate_error()).collect();
    assert!(errors.iter().all(|e| (0.0..=1.0).contains(e)));
}

#[test]
fn more_points_need_more_iterations() {
    let small = average_iterations(200, 10, seeded(1)).unwrap();
    let large = average_iterations(200, 100, seeded(10_000)).unwrap();

    assert!(large > small, "N=100 averaged {large}, N=10 averaged {small}");
}

#[test]
fn more_points_generalize_better() {
    let small = average_error(100, 10, seeded(2)).unwrap();
    let large = average_error(100, 100, seeded(20_000)).unwrap();

    assert!(large < small, "N=100 error {large}, N=10 error {small}");
}

#[test]
fn experiment_summary_is_consistent() {
    let summary = run_experiment(50, 10, seeded(5)).unwrap();

    assert_eq!(summary.n_points, 10);
    assert_eq!(summary.converged, 50);
    assert!(summary.min_iterations >= 1);
    assert!(summary.mean_error < 0.5);
}

#[test]
fn cap_surfaces_non_convergence() {
    let config = Config::builder().points(500).max_iterations(2).build().unwrap();
    let mut pla = Perceptron::with_rng(config, rng_from_seed(8)).unwrap();

    let result = pla.fit_with_options(FitOptions::new().with_max_iterations(Some(2)));
    assert!(result.iterations <= 2);
    if result.state == TrainState::Exceeded {
        assert!(result.misclassified > 0);
    }
    match pla.train() {
        Err(Error::NotConverged { iterations }) => assert_eq!(iterations, 2),
        Ok(iterations) => assert!(iterations <= 2),
        Err(e) => panic!("unexpected error: {e}")
    }
}

#[test]
fn callback_sees_decreasing_to_zero() {
    use std::sync::{Arc, Mutex};

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut pla = Perceptron::seeded(30, 12).unwrap();

    let result = pla.fit_with_options(FitOptions::new().with_callback(move |iteration, left| {
        sink.lock().unwrap().push((iteration, left));
        true
    }));

    let seen = seen.lock().unwrap();
    assert!(result.converged());
    assert_eq!(seen.len(), result.iterations);
    assert_eq!(seen.last().map(|&(_, left)| left), Some(0));
    assert!(seen.iter().enumerate().all(|(i, &(it, _))| it == i + 1));
}

#[test]
fn trait_object_drives_training() {
    let mut pla = Perceptron::seeded(10, 64).unwrap();
    let model: &mut dyn LinearClassifier = &mut pla;

    let iterations = model.train().unwrap();
    assert!(iterations > 0);
    assert_ne!(model.weights(), &ZERO);
}
