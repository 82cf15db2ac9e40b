//! Pairwise SPH density and force kernel.
//!
//! All particles share one smoothing length `h` and one mass. Density is
//! accumulated symmetrically over pairs and transformed once per particle;
//! pressure and viscosity increments are added to one particle of a pair and
//! subtracted from the other, so the pair exchanges equal and opposite
//! accelerations.

use super::constants::{
    DENSITY_MULTIPLIER, DIM, MU, PI, PRESSURE_TERM_CONSTANT, PS, SMALL_NUMBER,
    STIFFNESS_CONSTANT, VISCOSITY_CONSTANT,
};
use super::particle::Particle;

/// Smoothing length for a particle spacing of `1 / ppm`.
#[inline]
pub fn smoothing_length(radius_multiplier: f32, ppm: f32) -> f32 {
    radius_multiplier / ppm
}

/// Mass of a particle of fluid with `density` at `ppm` particles per meter.
#[inline]
pub fn particle_mass(density: f32, ppm: f32) -> f32 {
    density / (ppm * ppm * ppm)
}

/// Kernel coefficients for a fixed smoothing length and particle mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingKernel {
    h: f32,
    h_sq: f32,
    h6: f32,
    mass: f32,
    density_factor: f32,
    pressure_factor: f32,
    viscosity_factor: f32,
}

impl SmoothingKernel {
    pub fn new(h: f32, mass: f32) -> Self {
        let h_sq = h * h;
        let h6 = h * h * h * h * h * h;
        let h9 = h * h * h * h * h * h * h * h * h;
        Self {
            h,
            h_sq,
            h6,
            mass,
            density_factor: STIFFNESS_CONSTANT / (DENSITY_MULTIPLIER * PI * h9),
            pressure_factor: PRESSURE_TERM_CONSTANT / (PI * mass * PS),
            viscosity_factor: VISCOSITY_CONSTANT / (PI * MU * mass),
        }
    }

    pub fn smoothing_length(&self) -> f32 {
        self.h
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Unnormalised density contribution of a pair: `(h^2 - d^2)^3` inside
    /// the smoothing radius, zero on or beyond it.
    pub fn density_increment(&self, pi: &Particle, pj: &Particle) -> f32 {
        let (_, d2) = offset(pi, pj);
        if d2 < self.h_sq {
            let diff = self.h_sq - d2;
            diff * diff * diff
        } else {
            0.0
        }
    }

    /// Add the pair's density contribution to both particles.
    pub fn accumulate_density(&self, pi: &mut Particle, pj: &mut Particle) {
        let inc = self.density_increment(pi, pj);
        pi.rho += inc;
        pj.rho += inc;
    }

    /// Turn an accumulated density sum into the particle's density.
    ///
    /// Must run exactly once per particle per iteration, after every pair
    /// contribution to that particle has been added.
    pub fn transform_density(&self, p: &mut Particle) {
        p.rho = (p.rho + self.h6) * self.density_factor * self.mass;
    }

    /// Add pressure and viscosity accelerations for a pair.
    ///
    /// The increment is added to `pi` and subtracted from `pj`. Pairs on or
    /// beyond the smoothing radius, and coincident pairs, contribute nothing.
    pub fn accumulate_acceleration(&self, pi: &mut Particle, pj: &mut Particle) {
        let (d, d2) = offset(pi, pj);
        if d2 >= self.h_sq || d2 <= SMALL_NUMBER * SMALL_NUMBER {
            return;
        }
        let distance = d2.sqrt();
        let inv_distance = 1.0 / distance;
        let h_minus_d = self.h - distance;
        let pressure = self.pressure_factor * h_minus_d * h_minus_d * inv_distance;
        let viscosity = self.viscosity_factor * inv_distance * inv_distance;
        for k in 0..DIM {
            let inc = d[k] * pressure + (pj.v[k] - pi.v[k]) * viscosity;
            pi.a[k] += inc;
            pj.a[k] -= inc;
        }
    }
}

/// Position offset `pi - pj` and its squared length.
#[inline]
fn offset(pi: &Particle, pj: &Particle) -> ([f32; DIM], f32) {
    let d = [pi.p[0] - pj.p[0], pi.p[1] - pj.p[1], pi.p[2] - pj.p[2]];
    let d2 = d[0] * d[0] + d[1] * d[1] + d[2] * d[2];
    (d, d2)
}
