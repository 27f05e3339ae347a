//! Schaffer benchmark function (maximization form).
//!
//! `f(x1, x2) = 0.5 - (sin²(√(x1² + x2²)) - 0.5) / (1 + 0.001·(x1² + x2²))²`
//!
//! The unique global maximum is `1` at the origin. Around it lies a ring of
//! local maxima at ≈0.990284 (radius just under π), which traps searches with
//! weak global exploration.

use crate::npso::Position;

/// Fitness at the global optimum `(0, 0)`.
pub const GLOBAL_MAXIMUM: f64 = 1.0;

/// Fitness of the innermost local-optimum ring.
pub const RING_PLATEAU: f64 = 0.990284;

/// Evaluates the Schaffer function. Higher is better.
///
/// Performs no bounds check; callers keep positions inside the domain.
#[inline]
pub fn evaluate(position: &Position) -> f64 {
    let r = position.x1 * position.x1 + position.x2 * position.x2;
    let s = r.sqrt().sin();
    let d = 1.0 + 0.001 * r;
    0.5 - (s * s - 0.5) / (d * d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    #[test]
    fn test_global_maximum_at_origin() {
        let f = evaluate(&Position::new(0.0, 0.0));
        assert!((f - GLOBAL_MAXIMUM).abs() < 1e-15, "got {f}");
    }

    #[test]
    fn test_ring_plateau() {
        // The innermost ring peaks just inside radius pi, where sin(sqrt(r)) = 0.
        let at_pi = evaluate(&Position::new(PI, 0.0));
        assert!((at_pi - RING_PLATEAU).abs() < 1e-4, "got {at_pi}");

        let peak = (0..40_000)
            .map(|i| evaluate(&Position::new(2.9 + i as f64 * 1e-5, 0.0)))
            .fold(f64::NEG_INFINITY, f64::max);
        assert!((peak - RING_PLATEAU).abs() < 1e-5, "got {peak}");
    }

    #[test]
    fn test_rotational_symmetry() {
        let a = evaluate(&Position::new(3.0, 4.0));
        let b = evaluate(&Position::new(5.0, 0.0));
        let c = evaluate(&Position::new(-4.0, -3.0));
        assert!((a - b).abs() < 1e-12);
        assert!((a - c).abs() < 1e-12);
    }

    #[test]
    fn test_away_from_origin_is_worse() {
        let origin = evaluate(&Position::new(0.0, 0.0));
        let near = evaluate(&Position::new(0.01, 0.0));
        assert!(near < origin);
    }

    proptest! {
        #[test]
        fn prop_fitness_in_unit_interval(x1 in -10.0f64..=10.0, x2 in -10.0f64..=10.0) {
            let f = evaluate(&Position::new(x1, x2));
            prop_assert!(f > 0.0, "fitness {} not positive", f);
            prop_assert!(f <= 1.0 + 1e-15, "fitness {} above 1", f);
        }
    }
}
