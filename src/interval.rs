//! Half-open time interval occupied by a show.

use std::fmt::Display;

use qtty::{Quantity, Unit};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Interval bounds must be finite")]
    NonFiniteBound,

    #[error("Interval start must be strictly before its end")]
    Empty,
}

/// Half-open range `[start, end)` during which a show occupies a stage.
///
/// The half-open model makes back-to-back intervals (one ending exactly when
/// the next starts) non-overlapping, so touching shows may share a stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<U: Unit> {
    start: Quantity<U>,
    end: Quantity<U>,
}

impl<U: Unit> Interval<U> {
    /// Creates interval `[start, end)`.
    ///
    /// Fails if either bound is NaN or infinite, or if `start >= end`
    /// (zero-duration intervals are not representable).
    pub fn try_new(start: Quantity<U>, end: Quantity<U>) -> Result<Self, IntervalError> {
        if !start.value().is_finite() || !end.value().is_finite() {
            return Err(IntervalError::NonFiniteBound);
        }
        if start.value() >= end.value() {
            return Err(IntervalError::Empty);
        }
        Ok(Self { start, end })
    }

    pub fn from_f64(start: f64, end: f64) -> Result<Self, IntervalError> {
        Self::try_new(Quantity::<U>::new(start), Quantity::<U>::new(end))
    }

    pub const fn start(&self) -> Quantity<U> {
        self.start
    }

    pub const fn end(&self) -> Quantity<U> {
        self.end
    }

    pub fn duration(&self) -> Quantity<U> {
        self.end - self.start
    }

    /// Converts this interval to another unit of the same dimension.
    pub fn to<T: Unit<Dim = U::Dim>>(self) -> Interval<T> {
        Interval {
            start: self.start.to(),
            end: self.end.to(),
        }
    }

    /// Returns true if `position` ∈ `[start, end)`.
    pub const fn contains(&self, position: Quantity<U>) -> bool {
        self.start.value() <= position.value() && position.value() < self.end.value()
    }

    /// Checks if this interval overlaps with another interval.
    ///
    /// Strict on both sides: `[0, 10)` and `[10, 20)` do not overlap.
    pub const fn overlaps(&self, other: &Interval<U>) -> bool {
        self.start.value() < other.end.value() && other.start.value() < self.end.value()
    }
}

impl<U: Unit> Display for Interval<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start.value(), self.end.value())
    }
}
