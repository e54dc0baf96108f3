//! Parameter ranges for ray hits and color channels.

/// Interval `[min, max)` over `f32`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Inclusive lower bound
    pub min: f32,
    /// Exclusive upper bound
    pub max: f32,
}

impl Interval {
    /// Unit range used when clamping color channels.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Hits in front of the ray origin and closer than `max_distance`.
    pub fn visible(max_distance: f32) -> Self {
        Self::new(0.0, max_distance)
    }

    /// `min <= x < max`
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x < self.max
    }

    /// Clamp `x` into `[min, max]`.
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}
