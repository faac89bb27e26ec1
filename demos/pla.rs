//! Repeats the PLA experiment and prints average iterations and error.
//!
//! Run with `RUST_LOG=info` to see per-configuration summaries, or pass a
//! seed as the first argument for a reproducible run.

use perceptron_pla::{
    Perceptron, Result,
    experiment::{average_error, average_iterations, seeded, unseeded}
};

type Factory = Box<dyn FnMut(usize) -> Result<Perceptron>>;

fn factory(seed: Option<u64>) -> Factory {
    match seed {
        Some(s) => Box::new(seeded(s)),
        None => Box::new(unseeded())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let seed = std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok());

    for n in [10, 100] {
        let iterations = average_iterations(1000, n, factory(seed))?;
        println!("N={n:<4} runs=1000 average iterations: {iterations}");

        let error = average_error(10, n, factory(seed))?;
        println!("N={n:<4} runs=10   average error:      {error:.4}");
    }

    Ok(())
}
