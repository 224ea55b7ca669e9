/// Tolerance used when the input has no better scale information.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Tuning knobs for hull construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullConfig {
    /// Absolute distance below which a point counts as lying on a plane, a line
    /// or another point.
    ///
    /// A point is inside the hull when its signed distance to every face plane is
    /// at most `epsilon`. When a point is added, faces it lies no more than
    /// `epsilon` in front of are replaced only if the new faces around them
    /// still bend outwards.
    pub epsilon: f64,
}

impl HullConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}
