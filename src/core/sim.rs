use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::block::reposition_particle;
use crate::core::collision::resolve_collisions;
use crate::core::constants::{RADIUS_MULTIPLIER, RHO};
use crate::core::grid::{BlockCount, BlockExtent};
use crate::core::integrate::advance_motion;
use crate::core::kernel::{particle_mass, smoothing_length, SmoothingKernel};
use crate::core::{Header, Particle};

/// Driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Initializing,
    Iterating,
    Done,
}

/// Outcome of [`Simulation::run`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    pub iterations: u32,
    /// Wall-clock time of initialization plus the iteration loop.
    pub elapsed: Duration,
}

/// SPH simulation of a particle collection inside the fixed box.
///
/// The smoothing length, particle mass and block grid are derived once from
/// the header's particles-per-meter. Iterations are strictly sequential and
/// pairs are visited in `(i, j)`, `i < j` order, so a run is reproducible bit
/// for bit.
#[derive(Debug)]
pub struct Simulation {
    header: Header,
    kernel: SmoothingKernel,
    blocks: BlockCount,
    block_size: BlockExtent,
    stage: Stage,
    pub particles: Vec<Particle>,
}

impl Simulation {
    /// Create a simulation over `particles`.
    ///
    /// The collection is expected to hold `header.np` particles; that is
    /// checked when the file is read, not here.
    pub fn new(header: Header, particles: Vec<Particle>) -> Self {
        let h = smoothing_length(RADIUS_MULTIPLIER, header.ppm);
        let mass = particle_mass(RHO, header.ppm);
        let blocks = BlockCount::for_smoothing_length(h);
        let block_size = BlockExtent::from_counts(&blocks);
        info!(
            particles = particles.len(),
            ppm = header.ppm,
            smoothing_length = h,
            mass,
            blocks = ?blocks.n,
            block_size = ?block_size.s,
            "simulation configured"
        );
        Self {
            header,
            kernel: SmoothingKernel::new(h, mass),
            blocks,
            block_size,
            stage: Stage::Initializing,
            particles,
        }
    }

    pub fn header(&self) -> Header {
        self.header
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Number of particles.
    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    pub fn smoothing_length(&self) -> f32 {
        self.kernel.smoothing_length()
    }

    pub fn particle_mass(&self) -> f32 {
        self.kernel.mass()
    }

    pub fn block_count(&self) -> BlockCount {
        self.blocks
    }

    pub fn block_extent(&self) -> BlockExtent {
        self.block_size
    }

    /// Compute total kinetic energy (diagnostic).
    pub fn kinetic_energy(&self) -> f64 {
        let mass = self.particle_mass();
        self.particles.iter().map(|p| p.kinetic_energy(mass)).sum()
    }

    /// Reset every particle's density and acceleration, then run
    /// `iterations` steps.
    ///
    /// Zero iterations only performs the reset.
    pub fn run(&mut self, iterations: u32) -> RunReport {
        let start = Instant::now();

        self.stage = Stage::Initializing;
        for p in &mut self.particles {
            p.reset_accumulators();
        }

        self.stage = Stage::Iterating;
        for it in 0..iterations {
            self.step();
            debug!(iteration = it, "iteration complete");
        }

        self.stage = Stage::Done;
        let elapsed = start.elapsed();
        info!(
            iterations,
            elapsed_s = elapsed.as_secs_f64(),
            kinetic_energy = self.kinetic_energy(),
            "simulation finished"
        );
        RunReport {
            iterations,
            elapsed,
        }
    }

    /// Advance all particles by one iteration.
    ///
    /// The stage is left untouched; only [`Simulation::run`] moves it.
    pub fn step(&mut self) {
        let kernel = self.kernel;

        for p in &mut self.particles {
            p.reset_accumulators();
            reposition_particle(p, &self.block_size, &self.blocks);
        }

        for_each_pair(&mut self.particles, |pi, pj| kernel.accumulate_density(pi, pj));
        for p in &mut self.particles {
            kernel.transform_density(p);
        }
        for_each_pair(&mut self.particles, |pi, pj| {
            kernel.accumulate_acceleration(pi, pj)
        });

        for p in &mut self.particles {
            resolve_collisions(p);
            advance_motion(p);
        }
    }
}

// ============ Utility helpers ============

/// Visit every unordered pair once, in `(0,1), (0,2), .., (1,2), ..` order.
fn for_each_pair<F>(particles: &mut [Particle], mut f: F)
where
    F: FnMut(&mut Particle, &mut Particle),
{
    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let pi = &mut head[i];
        for pj in tail {
            f(pi, pj);
        }
    }
}
