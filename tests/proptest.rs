//! Property-based tests for the perceptron.

use perceptron_pla::{
    Config, Perceptron, TargetFunction,
    linear::{ZERO, classify, sign},
    misclassified,
    utils::rng_from_seed
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every stored label equals sign(target · point).
    #[test]
    fn labels_consistent(n in 1usize..60, seed in any::<u64>()) {
        let pla = Perceptron::seeded(n, seed).unwrap();

        prop_assert_eq!(pla.len(), n);
        for (p, y) in pla.dataset().iter() {
            prop_assert_eq!(classify(pla.target().coefficients(), p), y);
        }
    }

    /// Construction never trains.
    #[test]
    fn zero_start(n in 1usize..60, seed in any::<u64>()) {
        let pla = Perceptron::seeded(n, seed).unwrap();

        prop_assert_eq!(pla.weights(), &ZERO);
    }

    /// Training ends with no misclassified training point.
    #[test]
    fn converged_weights_separate(n in 1usize..40, seed in 0u64..10_000) {
        let mut pla = Perceptron::seeded(n, seed).unwrap();

        let iterations = pla.train().unwrap();

        prop_assert!(iterations >= 1);
        prop_assert!(misclassified(pla.weights(), pla.dataset().points(), pla.dataset().labels()).is_empty());
    }

    /// Error estimates stay in [0, 1], trained or not.
    #[test]
    fn error_in_range(n in 1usize..30, seed in 0u64..10_000, train in any::<bool>()) {
        let mut pla = Perceptron::seeded(n, seed).unwrap();
        if train {
            pla.train().unwrap();
        }

        let error = pla.evaluate_error();
        prop_assert!((0.0..=1.0).contains(&error));
    }

    /// Same seed, same experiment.
    #[test]
    fn deterministic_replay(n in 1usize..30, seed in 0u64..10_000) {
        let mut a = Perceptron::seeded(n, seed).unwrap();
        let mut b = Perceptron::seeded(n, seed).unwrap();

        prop_assert_eq!(a.train().unwrap(), b.train().unwrap());
        prop_assert_eq!(a.weights(), b.weights());
        prop_assert_eq!(a.evaluate_error(), b.evaluate_error());
    }

    /// sign is three-valued and odd.
    #[test]
    fn sign_three_valued(v in -1e6f64..1e6) {
        let s = sign(v);

        prop_assert!(s == -1 || s == 0 || s == 1);
        prop_assert_eq!(sign(-v), -s);
    }

    /// Both defining points lie on the target line.
    #[test]
    fn target_passes_through_points(
        x1 in -1.0f64..1.0, y1 in -1.0f64..1.0,
        x2 in -1.0f64..1.0, y2 in -1.0f64..1.0
    ) {
        prop_assume!(x1 != x2 || y1 != y2);
        let f = TargetFunction::through((x1, y1), (x2, y2)).unwrap();
        let [a, b, c] = *f.coefficients();

        prop_assert!((a * x1 + b * y1 + c).abs() < 1e-12);
        prop_assert!((a * x2 + b * y2 + c).abs() < 1e-12);
    }

    /// Config validation works correctly.
    #[test]
    fn config_validation(n in 0usize..100, cap in proptest::option::of(0usize..10)) {
        let mut builder = Config::builder().points(n);
        if let Some(cap) = cap {
            builder = builder.max_iterations(cap);
        }
        let result = builder.build();

        if n == 0 || cap == Some(0) {
            prop_assert!(result.is_err());
        } else {
            prop_assert!(result.is_ok());
        }
    }
}

#[test]
fn seeded_rng_feeds_construction() {
    let config = Config::new(5).unwrap();
    let a = Perceptron::with_rng(config, rng_from_seed(1)).unwrap();
    let b = Perceptron::seeded(5, 1).unwrap();

    assert_eq!(a.target(), b.target());
    assert_eq!(a.dataset(), b.dataset());
}
