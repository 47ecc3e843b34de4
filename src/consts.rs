//! Default simulation constants

/// Default side length of the sampling square
pub const DEFAULT_SIDE: f64 = 400.0;
/// Default cap on the number of trials an estimator will take
pub const DEFAULT_MAX_GENERATIONS: usize = 1337;
