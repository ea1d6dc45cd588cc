use alloc::vec::Vec;
use core::str::FromStr;

use crate::traits::FloatScalar;

use super::InterpError;

/// A sample `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// Error from parsing a [`Point`] out of `"x,y"` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePointError {
    /// No `,` between the two coordinates.
    MissingSeparator,
    /// A coordinate is not a number.
    InvalidNumber,
}

impl core::fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParsePointError::MissingSeparator => write!(f, "expected a point as \"x,y\""),
            ParsePointError::InvalidNumber => write!(f, "point coordinate is not a number"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParsePointError {}

/// Parses `"x,y"`, ignoring whitespace around either coordinate.
///
/// ```
/// use numana::interp::Point;
///
/// let p: Point<f64> = " 1.5, -2 ".parse().unwrap();
/// assert_eq!(p, Point::new(1.5, -2.0));
/// ```
impl<T: FromStr> FromStr for Point<T> {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').ok_or(ParsePointError::MissingSeparator)?;
        let x = x.trim().parse().map_err(|_| ParsePointError::InvalidNumber)?;
        let y = y.trim().parse().map_err(|_| ParsePointError::InvalidNumber)?;
        Ok(Self { x, y })
    }
}

/// A sample with its slope, `(x, y, y')`, for Hermite interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HermitePoint<T> {
    pub x: T,
    pub y: T,
    pub dy: T,
}

impl<T> HermitePoint<T> {
    pub fn new(x: T, y: T, dy: T) -> Self {
        Self { x, y, dy }
    }
}

/// An owned, non-empty, ordered set of samples.
///
/// The points are copied on construction; node order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    points: Vec<Point<T>>,
}

impl<T: FloatScalar> Dataset<T> {
    /// Copy `points` into a new dataset.
    pub fn new(points: &[Point<T>]) -> Result<Self, InterpError> {
        Self::from_vec(points.to_vec())
    }

    /// Take ownership of `points`.
    pub fn from_vec(points: Vec<Point<T>>) -> Result<Self, InterpError> {
        if points.is_empty() {
            return Err(InterpError::Empty);
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = T> + '_ {
        self.points.iter().map(|p| p.x)
    }

    pub fn ys(&self) -> impl Iterator<Item = T> + '_ {
        self.points.iter().map(|p| p.y)
    }
}

impl<T: FloatScalar> TryFrom<Vec<Point<T>>> for Dataset<T> {
    type Error = InterpError;

    fn try_from(points: Vec<Point<T>>) -> Result<Self, Self::Error> {
        Self::from_vec(points)
    }
}
