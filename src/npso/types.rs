//! Particle state.

/// Personal-best fitness every particle starts with.
///
/// Lower than any Schaffer value, so the first evaluation always improves it.
pub const SENTINEL_FITNESS: f64 = -10000.0;

/// A point `(x1, x2)` of the search domain.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x1: f64,
    pub x2: f64,
}

impl Position {
    pub const fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2 }
    }

    /// Pins both coordinates into `[-|bound|, |bound|]`.
    ///
    /// Only the magnitude of `bound` is used. A NaN bound leaves the
    /// position unchanged.
    #[inline]
    pub fn clamp(&mut self, bound: f64) {
        let bound = bound.abs();
        if bound.is_nan() {
            return;
        }
        self.x1 = self.x1.clamp(-bound, bound);
        self.x2 = self.x2.clamp(-bound, bound);
    }

    /// Whether both coordinates lie in `[-|bound|, |bound|]`.
    pub fn within(&self, bound: f64) -> bool {
        let bound = bound.abs();
        self.x1.abs() <= bound && self.x2.abs() <= bound
    }
}

/// One member of the swarm.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Where the particle is now. Rewritten every step.
    pub position: Position,

    /// Best position this particle has visited.
    pub best_position: Position,

    /// Fitness at `best_position`, or [`SENTINEL_FITNESS`] before the
    /// first evaluation.
    pub best_fitness: f64,
}

impl Particle {
    /// A fresh particle whose personal best is its starting point.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            best_position: position,
            best_fitness: SENTINEL_FITNESS,
        }
    }
}
