// Use a Monte Carlo method known as 'rejection sampling' to estimate the
// value of pi. We draw samples from a square, within which there is a
// perfectly inscribed circle, then use an estimate of the ratio of the
// areas to estimate pi.
//
//  A_circle      pi * r^2    pi         # in circle
// ----------  =  -------- = ----  => 4 ------------- ~= pi
//  A_square      4 * r^2      4         # in square
//
use mcpi::estimator::Estimator;
use mcpi::geom::Square;
use std::f64::consts::PI;

fn main() {
    // The number of samples to use for the Monte Carlo estimate
    let n_samples: usize = 1_000_000;

    let mut rng = rand::thread_rng();
    let mut estimator = Estimator::new(Square::new(400.0).unwrap(), n_samples);

    estimator.run(&mut rng);

    let pi_est = estimator.estimate().unwrap();

    println!(
        "π_est: {}, π_true: {}, absolute error: {}",
        pi_est,
        PI,
        (pi_est - PI).abs()
    );
}
