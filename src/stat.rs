//! Incremental trial counts
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::estimator::Trial;

/// Running counts for a sequence of classified trials.
///
/// Contains the number of trials and the number of in-circle hits. The π
/// estimate `4k/n` only depends on these two counts, so the trial list never
/// needs to be rescanned.
///
/// # Example
///
/// ```
/// use mcpi::estimator::Trial;
/// use mcpi::geom::Point;
/// use mcpi::stat::TrialSuffStat;
///
/// let mut stat = TrialSuffStat::new();
/// assert!(stat.n() == 0 && stat.k() == 0);
///
/// stat.observe(&Trial { point: Point::new(200.0, 200.0), inside: true });
/// stat.observe(&Trial { point: Point::new(1.0, 1.0), inside: false });
///
/// assert!(stat.n() == 2 && stat.k() == 1);
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct TrialSuffStat {
    n: usize,
    k: usize,
}

impl TrialSuffStat {
    /// Create a new empty statistic
    #[inline]
    pub fn new() -> Self {
        TrialSuffStat { n: 0, k: 0 }
    }

    /// Create a statistic from components without checking whether they are
    /// valid.
    #[inline]
    pub fn from_parts_unchecked(n: usize, k: usize) -> Self {
        TrialSuffStat { n, k }
    }

    /// Get the total number of trials, n.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Get the number of trials that landed inside the circle, k.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Assimilate one classified trial
    #[inline]
    pub fn observe(&mut self, trial: &Trial) {
        self.n += 1;
        if trial.inside {
            self.k += 1;
        }
    }

    /// Remove one classified trial
    #[inline]
    pub fn forget(&mut self, trial: &Trial) {
        self.n -= 1;
        if trial.inside {
            self.k -= 1;
        }
    }

    /// Assimilate several trials
    pub fn observe_many(&mut self, trials: &[Trial]) {
        trials.iter().for_each(|trial| self.observe(trial));
    }

    /// The area-ratio estimate of π, `4k/n`, or `None` if no trials have
    /// been observed.
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::stat::TrialSuffStat;
    /// assert!(TrialSuffStat::new().ratio().is_none());
    ///
    /// let stat = TrialSuffStat::from_parts_unchecked(100, 78);
    /// assert_eq!(stat.ratio(), Some(3.12));
    /// ```
    #[inline]
    pub fn ratio(&self) -> Option<f64> {
        if self.n == 0 {
            None
        } else {
            Some(4.0 * self.k as f64 / self.n as f64)
        }
    }
}

impl Default for TrialSuffStat {
    fn default() -> Self {
        TrialSuffStat::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;

    fn trial(inside: bool) -> Trial {
        Trial {
            point: Point::new(0.0, 0.0),
            inside,
        }
    }

    #[test]
    fn new_should_be_empty() {
        let stat = TrialSuffStat::new();
        assert_eq!(stat.n, 0);
        assert_eq!(stat.k, 0);
    }

    #[test]
    fn from_parts_unchecked() {
        let stat = TrialSuffStat::from_parts_unchecked(10, 3);
        assert_eq!(stat.n(), 10);
        assert_eq!(stat.k(), 3);
    }

    #[test]
    fn observe_inside() {
        let mut stat = TrialSuffStat::new();
        stat.observe(&trial(true));
        assert_eq!(stat.n, 1);
        assert_eq!(stat.k, 1);
    }

    #[test]
    fn observe_outside() {
        let mut stat = TrialSuffStat::new();
        stat.observe(&trial(false));
        assert_eq!(stat.n, 1);
        assert_eq!(stat.k, 0);
    }

    #[test]
    fn observe_forget_is_identity() {
        let mut stat = TrialSuffStat::from_parts_unchecked(5, 2);
        stat.observe(&trial(true));
        stat.forget(&trial(true));
        assert_eq!(stat, TrialSuffStat::from_parts_unchecked(5, 2));
    }

    #[test]
    fn ratio_none_when_empty() {
        assert!(TrialSuffStat::new().ratio().is_none());
    }

    #[test]
    fn ratio_all_inside_is_four() {
        let stat = TrialSuffStat::from_parts_unchecked(42, 42);
        assert::close(stat.ratio().unwrap(), 4.0, 1E-12);
    }

    #[test]
    fn ratio_half_inside_is_two() {
        let stat = TrialSuffStat::from_parts_unchecked(10, 5);
        assert::close(stat.ratio().unwrap(), 2.0, 1E-12);
    }
}
