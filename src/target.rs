//! Ground-truth linear boundary used to label points.

use core::fmt;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    linear::{Vector3, classify},
    utils::uniform_coord
};

/// # Overview
///
/// Target function `f`: the line `a·x + b·y + c = 0`.
///
/// # Examples
///
/// ```
/// use perceptron_pla::TargetFunction;
///
/// // The diagonal y = x.
/// let f = TargetFunction::through((0.0, 0.0), (1.0, 1.0)).unwrap();
///
/// assert_eq!(f.label(&[0.0, 1.0, 1.0]), -1);
/// assert_eq!(f.label(&[1.0, 0.0, 1.0]), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TargetFunction {
    coefficients: Vector3
}

impl TargetFunction {
    /// # Overview
    ///
    /// Line through `(x1, y1)` and `(x2, y2)` in homogeneous form
    /// `(y2 - y1, x1 - x2, x2·y1 - x1·y2)`.
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateTarget`] when the two points coincide, since every
    /// coefficient would be zero.
    pub fn through(p1: (f64, f64), p2: (f64, f64)) -> Result<Self> {
        let ((x1, y1), (x2, y2)) = (p1, p2);
        if x1 == x2 && y1 == y2 {
            return Err(Error::DegenerateTarget);
        }
        Ok(Self {
            coefficients: [y2 - y1, x1 - x2, x2 * y1 - x1 * y2]
        })
    }

    /// # Overview
    ///
    /// Random line through two points drawn uniformly from [-1, 1]².
    ///
    /// Draw order is `x1, x2, y1, y2`. Coincident points are redrawn.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        loop {
            let x1 = uniform_coord(rng);
            let x2 = uniform_coord(rng);
            let y1 = uniform_coord(rng);
            let y2 = uniform_coord(rng);
            match Self::through((x1, y1), (x2, y2)) {
                Ok(target) => return target,
                Err(_) => log::debug!("coincident target points, redrawing")
            }
        }
    }

    /// Raw `(a, b, c)` coefficients.
    #[inline]
    pub fn coefficients(&self) -> &Vector3 {
        &self.coefficients
    }

    /// # Overview
    ///
    /// True label `sign(f · point)`.
    #[inline(always)]
    pub fn label(&self, point: &Vector3) -> i8 {
        classify(&self.coefficients, point)
    }

    /// Labels every point in order.
    pub fn label_all(&self, points: &[Vector3]) -> Vec<i8> {
        points.iter().map(|p| self.label(p)).collect()
    }
}

impl fmt::Display for TargetFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.coefficients;
        write!(f, "{a:.4}·x + {b:.4}·y + {c:.4} = 0")
    }
}
