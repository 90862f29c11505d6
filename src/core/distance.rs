//! # Distance
//!
//! Non-negative integer distances between indexed values.
//!
//! Distances key child edges inside the tree and bound radius searches, so
//! they must be totally ordered and must never be negative. Wrapping `u32`
//! makes negativity unrepresentable; the only place a negative quantity can
//! appear is a conversion from a signed integer, which fails fast instead
//! of clamping.

use std::fmt;

use thiserror::Error;

/// Error converting a signed quantity into a [`Distance`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DistanceError {
    /// A negative radius or distance is a caller bug. Rejected at the
    /// boundary rather than silently treated as zero.
    #[error("distance cannot be negative (got {0})")]
    Negative(i64),

    /// Larger than any representable distance.
    #[error("distance {0} exceeds u32::MAX")]
    Overflow(i64),
}

/// A distance in a metric space.
///
/// The index trusts the caller's metric to satisfy the metric axioms
/// (`d(x,x) = 0`, symmetry, triangle inequality); see [`Metric`].
///
/// [`Metric`]: crate::core::Metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u32);

impl Distance {
    /// Distance zero: an exact match.
    pub const ZERO: Distance = Distance(0);

    /// Create a distance from a raw count.
    pub const fn new(value: u32) -> Self {
        Distance(value)
    }

    /// The raw count.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Lower edge of a search window, clamped at zero.
    pub const fn saturating_sub(self, other: Distance) -> Distance {
        Distance(self.0.saturating_sub(other.0))
    }

    /// Upper edge of a search window, clamped at `u32::MAX`.
    pub const fn saturating_add(self, other: Distance) -> Distance {
        Distance(self.0.saturating_add(other.0))
    }
}

impl From<u32> for Distance {
    fn from(value: u32) -> Self {
        Distance(value)
    }
}

impl From<Distance> for u32 {
    fn from(value: Distance) -> Self {
        value.0
    }
}

impl TryFrom<i64> for Distance {
    type Error = DistanceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(DistanceError::Negative(value));
        }
        u32::try_from(value).map(Distance).map_err(|_| DistanceError::Overflow(value))
    }
}

impl TryFrom<i32> for Distance {
    type Error = DistanceError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Distance::try_from(i64::from(value))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
