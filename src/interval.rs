//! Interval arithmetic for ray parameter ranges and color clamping.

/// Numeric range [min, max].
///
/// `contains` treats both bounds as inclusive, `surrounds` as exclusive.
/// Intersection search relies on the exclusive form to reject hits that land
/// exactly on the search boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f64,
    /// Maximum value of the interval
    pub max: f64,
}

impl Interval {
    /// Interval that contains nothing (min > max).
    pub const EMPTY: Interval = Interval {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// Interval that contains every real number.
    pub const UNIVERSE: Interval = Interval {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Create a new interval with given min and max values
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the interval. Negative for an empty interval.
    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp the given value to be within this interval's bounds.
    ///
    /// Unlike `f64::clamp` this never panics, even on an empty interval.
    pub fn clamp(&self, x: f64) -> f64 {
        if x < self.min {
            return self.min;
        }
        if x > self.max {
            return self.max;
        }
        x
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::EMPTY
    }
}
