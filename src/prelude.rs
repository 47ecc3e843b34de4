//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::consts::{DEFAULT_MAX_GENERATIONS, DEFAULT_SIDE};
#[doc(no_inline)]
pub use crate::estimator::{Estimator, Trial};
#[doc(no_inline)]
pub use crate::geom::{Point, Square, SquareError};
#[doc(no_inline)]
pub use crate::stat::TrialSuffStat;
