//! Sampling square with its inscribed circle
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SIDE;
use rand::Rng;
use std::fmt;

/// A single Monte Carlo trial coordinate in the sampling square.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn dist(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The square `[0, side) × [0, side)` from which trials are drawn, together
/// with the circle of radius `side/2` inscribed in it.
///
/// # Example
///
/// The center of the square always lies inside the inscribed circle
///
/// ```
/// use mcpi::geom::Square;
///
/// let square = Square::new(400.0).unwrap();
///
/// assert!(square.contains(&square.center()));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Square {
    side: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum SquareError {
    /// Side was infinite or NaN
    SideNotFinite { side: f64 },
    /// Side was zero or negative
    SideTooLow { side: f64 },
}

impl Square {
    /// Create a new square with the given side length
    #[inline]
    pub fn new(side: f64) -> Result<Self, SquareError> {
        if !side.is_finite() {
            Err(SquareError::SideNotFinite { side })
        } else if side <= 0.0 {
            Err(SquareError::SideTooLow { side })
        } else {
            Ok(Square::new_unchecked(side))
        }
    }

    /// Creates a new Square without checking whether the side is valid.
    #[inline]
    pub fn new_unchecked(side: f64) -> Self {
        Square { side }
    }

    /// Get the side length
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::geom::Square;
    /// let square = Square::new(400.0).unwrap();
    /// assert_eq!(square.side(), 400.0);
    /// ```
    #[inline]
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Radius of the inscribed circle, side/2
    #[inline]
    pub fn radius(&self) -> f64 {
        self.side / 2.0
    }

    /// Center of the square, which is also the center of the inscribed circle
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.side / 2.0, self.side / 2.0)
    }

    /// Determine whether a point lies within the inscribed circle, boundary
    /// inclusive.
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::geom::{Point, Square};
    /// let square = Square::new(400.0).unwrap();
    ///
    /// // the corner of the square is outside the circle
    /// assert!(!square.contains(&Point::new(0.0, 0.0)));
    ///
    /// // a point exactly on the boundary counts as inside
    /// assert!(square.contains(&Point::new(400.0, 200.0)));
    /// ```
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        point.dist(&self.center()) <= self.radius()
    }

    /// Draw a point with both coordinates uniform on `[0, side)`
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Point {
        let u = rand_distr::Uniform::new(0.0, self.side);
        Point::new(rng.sample(u), rng.sample(u))
    }

    /// Draw `n` points uniformly from the square
    pub fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<Point> {
        let u = rand_distr::Uniform::new(0.0, self.side);
        (0..n)
            .map(|_| Point::new(rng.sample(u), rng.sample(u)))
            .collect()
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::new_unchecked(DEFAULT_SIDE)
    }
}

impl From<&Square> for String {
    fn from(square: &Square) -> String {
        format!("Square({})", square.side)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from(self))
    }
}

impl std::error::Error for SquareError {}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SideNotFinite { side } => {
                write!(f, "non-finite side: {}", side)
            }
            Self::SideTooLow { side } => {
                write!(f, "side must be positive, got {}", side)
            }
        }
    }
}
