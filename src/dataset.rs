//! Labeled training data.

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    linear::Vector3,
    target::TargetFunction,
    utils::random_point
};

/// # Overview
///
/// Training set: augmented points with labels from the target function.
///
/// Points and labels are parallel and fixed once built. Every label is
/// `+1` or `-1`: no point lies on the target line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dataset {
    points: Vec<Vector3>,
    labels: Vec<i8>
}

impl Dataset {
    /// # Overview
    ///
    /// Labels caller-supplied points against `target`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTrainingSet`] if `points` is empty,
    /// [`Error::BoundaryPoint`] for the first point labeled `0`.
    pub fn from_points(points: Vec<Vector3>, target: &TargetFunction) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyTrainingSet);
        }
        let labels = target.label_all(&points);
        if let Some(index) = labels.iter().position(|&y| y == 0) {
            return Err(Error::BoundaryPoint { index });
        }
        Ok(Self {
            points,
            labels
        })
    }

    /// # Overview
    ///
    /// Draws `n` uniform points from [-1, 1]² and labels them.
    ///
    /// A point landing exactly on the target line is redrawn.
    pub fn generate<R: Rng>(n: usize, target: &TargetFunction, rng: &mut R) -> Result<Self> {
        let mut points = Vec::with_capacity(n);
        while points.len() < n {
            let p = random_point(rng);
            if target.label(&p) == 0 {
                log::debug!("point on target line, redrawing");
                continue;
            }
            points.push(p);
        }
        Self::from_points(points, target)
    }

    #[inline]
    pub fn points(&self) -> &[Vector3] {
        &self.points
    }

    #[inline]
    pub fn labels(&self) -> &[i8] {
        &self.labels
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed dataset.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates `(point, label)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Vector3, i8)> {
        self.points.iter().zip(self.labels.iter().copied())
    }
}
