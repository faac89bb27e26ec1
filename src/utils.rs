//! Utility functions for random number generation and sampling.

use rand::Rng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::linear::Vector3;

/// Fast seedable RNG used by default.
pub type FastRng = Xoshiro256PlusPlus;

/// # Overview
///
/// Creates a fast RNG seeded from a u64 value.
///
/// # Examples
///
/// ```
/// use perceptron_pla::utils::rng_from_seed;
///
/// let mut rng = rng_from_seed(42);
/// ```
#[inline]
pub fn rng_from_seed(seed: u64) -> FastRng {
    use rand::SeedableRng;
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// # Overview
///
/// Creates a fast RNG with entropy from thread-local RNG.
///
/// # Examples
///
/// ```
/// use perceptron_pla::utils::rng_from_entropy;
///
/// let mut rng = rng_from_entropy();
/// ```
#[inline]
pub fn rng_from_entropy() -> FastRng {
    use rand::SeedableRng;
    Xoshiro256PlusPlus::from_rng(&mut rand::rng())
}

/// # Overview
///
/// Draws a coordinate uniformly from [-1, 1].
#[inline]
pub fn uniform_coord<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(-1.0..=1.0)
}

/// # Overview
///
/// Draws a bias-augmented point `[x, y, 1.0]` from [-1, 1]².
#[inline]
pub fn random_point<R: Rng>(rng: &mut R) -> Vector3 {
    let x = uniform_coord(rng);
    let y = uniform_coord(rng);
    [x, y, 1.0]
}

/// # Overview
///
/// Draws `n` independent augmented points.
pub fn random_points<R: Rng>(n: usize, rng: &mut R) -> Vec<Vector3> {
    (0..n).map(|_| random_point(rng)).collect()
}

/// # Overview
///
/// Picks one element of a non-empty slice uniformly at random.
///
/// Returns `None` for an empty slice.
#[inline]
pub fn choose<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let i = rng.random_range(0..items.len());
    items.get(i)
}
