//! Boundary collision detection and penalty response.
//!
//! Each axis is checked independently against the predicted position
//! `p + hv * dt`. A particle closer than `DP` to a wall gets a spring minus
//! damping acceleration, is placed back inside, and has its velocity and
//! half-step velocity reversed on that axis.

use super::constants::{DELTA_T, DIM, DP, DV, SC, SMALL_NUMBER};
use super::grid::{Bounds, Domain, SIM_BOX};
use super::particle::Particle;

/// Which wall of an axis was crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Low,
    High,
}

/// Collision check result for one particle on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisCollision {
    /// Predicted position on this axis after one step.
    pub next: f32,
    /// Wall that is too close, if any.
    pub side: Option<Side>,
    pub bounds: Bounds,
    pub axis: usize,
}

impl AxisCollision {
    /// Check `particle` on `axis` against `bounds`.
    pub fn detect(particle: &Particle, axis: usize, bounds: Bounds) -> Self {
        let displacement = particle.hv[axis] * DELTA_T;
        Self {
            next: particle.p[axis] + displacement,
            side: check_collision(particle.p[axis], displacement, &bounds, DP),
            bounds,
            axis,
        }
    }

    #[inline]
    pub fn is_collision(&self) -> bool {
        self.side.is_some()
    }
}

/// Detect whether moving by `displacement` from `pos` comes within `dp` of a
/// wall. The low wall is reported when both are.
pub fn check_collision(pos: f32, displacement: f32, bounds: &Bounds, dp: f32) -> Option<Side> {
    if pos + displacement - dp < bounds.min {
        Some(Side::Low)
    } else if pos + displacement + dp > bounds.max {
        Some(Side::High)
    } else {
        None
    }
}

/// Apply the penalty response described by `info` to `particle`.
pub fn resolve_axis(particle: &mut Particle, info: &AxisCollision) {
    let Some(side) = info.side else {
        return;
    };
    let k = info.axis;
    let delta = match side {
        Side::Low => DP - (info.next - info.bounds.min),
        Side::High => DP - (info.bounds.max - info.next),
    };
    if delta <= SMALL_NUMBER {
        return;
    }
    let vel = particle.v[k];
    match side {
        Side::Low => {
            particle.a[k] += SC * delta - DV * vel;
            particle.p[k] = info.bounds.min + delta;
        }
        Side::High => {
            particle.a[k] -= SC * delta + DV * vel;
            particle.p[k] = info.bounds.max - delta;
        }
    }
    particle.v[k] = -particle.v[k];
    particle.hv[k] = -particle.hv[k];
}

/// Check and resolve all axes of `particle` against `domain`.
///
/// Returns the number of axes on which a collision was detected.
pub fn resolve_collisions_in(particle: &mut Particle, domain: &Domain) -> usize {
    let mut hits = 0;
    for k in 0..DIM {
        let info = AxisCollision::detect(particle, k, domain.axes[k]);
        if info.is_collision() {
            hits += 1;
            resolve_axis(particle, &info);
        }
    }
    hits
}

/// Check and resolve all axes of `particle` against the simulation box.
pub fn resolve_collisions(particle: &mut Particle) -> usize {
    resolve_collisions_in(particle, &SIM_BOX)
}
