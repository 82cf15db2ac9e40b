use super::constants::{DELTA_T, DIM};
use super::particle::Particle;

/// Advance `particle` by one leapfrog step of `DELTA_T`.
///
/// The velocity is taken from the half-step velocity before the latter is
/// advanced.
pub fn advance_motion(particle: &mut Particle) {
    advance_motion_by(particle, DELTA_T);
}

/// Leapfrog step with an explicit time step.
pub fn advance_motion_by(particle: &mut Particle, dt: f32) {
    for k in 0..DIM {
        particle.p[k] += particle.hv[k] * dt + 0.5 * particle.a[k] * dt * dt;
    }
    for k in 0..DIM {
        particle.v[k] = particle.hv[k] + particle.a[k] * dt;
    }
    for k in 0..DIM {
        particle.hv[k] += particle.a[k] * dt;
    }
}
