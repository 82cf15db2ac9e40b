use bytemuck::{Pod, Zeroable};

use super::constants::{EXTERNAL_ACCELERATION, DIM};

/// A fluid particle.
///
/// The in-memory layout is the on-disk record: thirteen consecutive `f32`
/// values in the order position, half-step velocity, velocity, density,
/// acceleration (52 bytes, no padding).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Particle {
    /// Position (px, py, pz).
    pub p: [f32; DIM],
    /// Half-step velocity (hvx, hvy, hvz).
    pub hv: [f32; DIM],
    /// Velocity (vx, vy, vz).
    pub v: [f32; DIM],
    /// Density.
    pub rho: f32,
    /// Acceleration (ax, ay, az).
    pub a: [f32; DIM],
}

impl Particle {
    /// Create a particle with the given kinematic state; density and
    /// acceleration start at zero.
    pub fn new(p: [f32; DIM], hv: [f32; DIM], v: [f32; DIM]) -> Self {
        Self {
            p,
            hv,
            v,
            ..Self::default()
        }
    }

    /// Create a particle at rest at `p`.
    pub fn at(p: [f32; DIM]) -> Self {
        Self::new(p, [0.0; DIM], [0.0; DIM])
    }

    /// Reset density to zero and acceleration to the external force.
    #[inline]
    pub fn reset_accumulators(&mut self) {
        self.rho = 0.0;
        self.a = EXTERNAL_ACCELERATION;
    }

    /// Returns the particle's kinetic energy 1/2 m |v|^2 for the given mass.
    #[inline]
    pub fn kinetic_energy(&self, mass: f32) -> f64 {
        let vsq: f64 = self.v.iter().map(|&c| f64::from(c) * f64::from(c)).sum();
        0.5 * f64::from(mass) * vsq
    }
}

/// Particle file header: particles per meter and particle count.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Header {
    pub ppm: f32,
    pub np: i32,
}

impl Header {
    pub fn new(ppm: f32, np: i32) -> Self {
        Self { ppm, np }
    }
}
