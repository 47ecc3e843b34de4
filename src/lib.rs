//! Incremental Monte Carlo estimation of π by rejection sampling.
//!
//! Points are drawn uniformly from a square with a perfectly inscribed
//! circle. The fraction that lands inside the circle estimates the ratio of
//! the two areas, which is π/4.
//!
//! # Example
//!
//! ```
//! use mcpi::prelude::*;
//!
//! let mut rng = rand::thread_rng();
//! let mut estimator = Estimator::new(Square::new(400.0).unwrap(), 10_000);
//!
//! estimator.run(&mut rng);
//!
//! let pi_est = estimator.estimate().unwrap();
//! assert!((pi_est - std::f64::consts::PI).abs() < 0.5);
//! ```
pub mod consts;
pub mod estimator;
pub mod geom;
pub mod prelude;
pub mod stat;
