//! Swarm state and the NPSO update rule.
//!
//! Unlike canonical PSO there is no velocity: each step a particle jumps to
//! the global best, to its own best, or stays put, and is then perturbed by
//! a bounded random mutation.

use super::config::{ControlDraw, NpsoConfig};
use super::types::{Particle, Position};
use crate::error::Result;
use crate::random::UniformSource;
use crate::schaffer;

/// How many particles took each branch of the update rule in one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BranchCounts {
    /// Particles that adopted the global-best position.
    pub global: usize,
    /// Particles that returned to their own personal best.
    pub personal: usize,
    /// Particles that kept their current position.
    pub kept: usize,
}

/// A population of particles plus the index of the global best.
///
/// Invariant (after any [`evaluate_and_update_bests`](Self::evaluate_and_update_bests)):
/// `particles[global_best].best_fitness` is the maximum personal-best
/// fitness. A later tie never displaces the current global best.
#[derive(Debug, Clone)]
pub struct Swarm {
    particles: Vec<Particle>,
    global_best: usize,
    config: NpsoConfig,
}

impl Swarm {
    /// Samples a fresh swarm uniformly over `[-bound, bound]²`.
    ///
    /// Draws `x1` then `x2` for each particle in index order. Personal
    /// bests start at the sampled position with the sentinel fitness, and
    /// the global-best index is provisionally 0.
    pub fn initialize<R>(config: &NpsoConfig, rng: &mut R) -> Result<Self>
    where
        R: UniformSource + ?Sized,
    {
        config.validate()?;

        let bound = config.domain_bound;
        let particles = (0..config.particle_count)
            .map(|_| {
                let x1 = bound * rng.next_unit() * 2.0 - bound;
                let x2 = bound * rng.next_unit() * 2.0 - bound;
                Particle::new(Position::new(x1, x2))
            })
            .collect();

        Ok(Self {
            particles,
            global_best: 0,
            config: config.clone(),
        })
    }

    /// Evaluates every current position and updates personal and global bests.
    ///
    /// Only strict improvements are recorded, so an equal fitness never
    /// displaces an earlier best.
    pub fn evaluate_and_update_bests(&mut self) {
        for i in 0..self.particles.len() {
            let fitness = schaffer::evaluate(&self.particles[i].position);
            if fitness > self.particles[i].best_fitness {
                if fitness > self.particles[self.global_best].best_fitness {
                    self.global_best = i;
                }
                let particle = &mut self.particles[i];
                particle.best_fitness = fitness;
                particle.best_position = particle.position;
            }
        }
    }

    /// Applies one NPSO update to every particle.
    ///
    /// Per particle: draw a control value `r`; `r < c1` jumps to the global
    /// best, `r < c2` jumps to the personal best, otherwise the position is
    /// kept. The position is then mutated unconditionally.
    pub fn step<R: UniformSource + ?Sized>(&mut self, rng: &mut R) -> BranchCounts {
        let global_best = self.global_best_position();
        let NpsoConfig {
            c1,
            c2,
            domain_bound,
            max_mutation_radius,
            control_draw,
            ..
        } = self.config;

        let mut counts = BranchCounts::default();
        for particle in &mut self.particles {
            let r = match control_draw {
                ControlDraw::Uniform => rng.next_unit(),
                ControlDraw::Truncated => rng.next_unit().trunc(),
            };

            if r < c1 {
                particle.position = global_best;
                counts.global += 1;
            } else if r < c2 {
                particle.position = particle.best_position;
                counts.personal += 1;
            } else {
                counts.kept += 1;
            }

            mutate(&mut particle.position, domain_bound, max_mutation_radius, rng);
        }
        counts
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn global_best_index(&self) -> usize {
        self.global_best
    }

    /// The particle holding the global best.
    pub fn global_best(&self) -> &Particle {
        &self.particles[self.global_best]
    }

    pub fn global_best_fitness(&self) -> f64 {
        self.global_best().best_fitness
    }

    pub fn global_best_position(&self) -> Position {
        self.global_best().best_position
    }

    /// Settings the swarm was initialized with.
    pub fn config(&self) -> &NpsoConfig {
        &self.config
    }
}

/// Perturbs `position` by up to a random radius and clamps it to the domain.
///
/// The radius `l = U(0, 1) · max_radius` is drawn once per call; each
/// coordinate then moves by `U(0, 1) · 2l − l`, uniform in `[-l, l]`, and is
/// pinned into `[-|bound|, |bound|]`. A NaN `bound` skips the clamp; see
/// [`Position::clamp`].
pub fn mutate<R: UniformSource + ?Sized>(
    position: &mut Position,
    bound: f64,
    max_radius: f64,
    rng: &mut R,
) {
    let l = rng.next_unit() * max_radius;
    position.x1 += rng.next_unit() * l * 2.0 - l;
    position.x2 += rng.next_unit() * l * 2.0 - l;
    position.clamp(bound);
}
