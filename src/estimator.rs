//! Capped incremental Monte Carlo π estimator
//!
//! Draw samples from a square with a perfectly inscribed circle and use an
//! estimate of the ratio of the areas to estimate π:
//!
//! ```text
//!  A_circle      pi * r^2    pi         # in circle
//! ----------  =  -------- = ----  => 4 ------------- ~= pi
//!  A_square      4 * r^2      4         # in square
//! ```
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MAX_GENERATIONS;
use crate::geom::{Point, Square};
use crate::stat::TrialSuffStat;
use rand::Rng;

/// One classified Monte Carlo trial: the sampled point and whether it landed
/// inside the inscribed circle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Trial {
    pub point: Point,
    pub inside: bool,
}

/// Incremental rejection-sampling estimator of π.
///
/// Each [`step`](Estimator::step) draws one uniform point from the square,
/// classifies it against the inscribed circle, and appends it to the trial
/// list, until `max_generations` trials have been taken. After that, `step`
/// is a no-op and the estimator is effectively read-only.
///
/// # Example
///
/// ```
/// use mcpi::estimator::Estimator;
/// use mcpi::geom::Square;
///
/// let mut rng = rand::thread_rng();
/// let mut estimator = Estimator::new(Square::new(400.0).unwrap(), 1000);
///
/// // No trials yet, so no estimate yet
/// assert!(estimator.estimate().is_none());
///
/// estimator.run(&mut rng);
///
/// assert_eq!(estimator.generation(), 1000);
/// let pi_est = estimator.estimate().unwrap();
/// assert!(0.0 <= pi_est && pi_est <= 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Estimator {
    square: Square,
    max_generations: usize,
    trials: Vec<Trial>,
    stat: TrialSuffStat,
}

impl Estimator {
    /// Create a new estimator with zero trials taken
    pub fn new(square: Square, max_generations: usize) -> Self {
        Estimator {
            square,
            max_generations,
            trials: Vec::with_capacity(max_generations),
            stat: TrialSuffStat::new(),
        }
    }

    /// Take one trial: draw a point, classify it, and fold it into the
    /// running counts. Returns the new trial, or `None` if the estimator has
    /// already taken `max_generations` trials.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Option<&Trial> {
        if self.is_saturated() {
            return None;
        }

        let point = self.square.draw(rng);
        let trial = Trial {
            point,
            inside: self.square.contains(&point),
        };

        self.stat.observe(&trial);
        self.trials.push(trial);
        self.trials.last()
    }

    /// Step until `max_generations` trials have been taken
    pub fn run<R: Rng>(&mut self, rng: &mut R) {
        while self.step(rng).is_some() {}
    }

    /// The current estimate of π, `4 * inside / total`, or `None` before the
    /// first trial has been taken.
    #[inline]
    pub fn estimate(&self) -> Option<f64> {
        self.stat.ratio()
    }

    /// Number of trials taken so far
    #[inline]
    pub fn generation(&self) -> usize {
        self.stat.n()
    }

    /// Number of trials that landed inside the circle
    #[inline]
    pub fn inside_count(&self) -> usize {
        self.stat.k()
    }

    /// The cap on the number of trials
    #[inline]
    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    /// Whether the estimator has taken all of its trials
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.generation() == self.max_generations
    }

    /// All trials taken so far, in generation order
    #[inline]
    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    /// The sampling square
    #[inline]
    pub fn square(&self) -> &Square {
        &self.square
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Estimator::new(Square::default(), DEFAULT_MAX_GENERATIONS)
    }
}
