//! Particle-to-block classification.

use super::constants::{BOX_MIN, DIM, SMALL_NUMBER};
use super::grid::{BlockCount, BlockExtent};
use super::particle::Particle;

/// Block index of `particle` on each axis, clamped to `[0, n - 1]`.
///
/// Particles outside the box are assigned to the nearest edge block.
pub fn block_indices(particle: &Particle, size: &BlockExtent, blocks: &BlockCount) -> [i32; DIM] {
    let mut idx = [0i32; DIM];
    for (k, i) in idx.iter_mut().enumerate() {
        let raw = ((particle.p[k] - BOX_MIN[k]) / size.s[k]).floor() as i32;
        // not `clamp`: an empty axis gives an upper bound of -1
        *i = raw.min(blocks.n[k] - 1).max(0);
    }
    idx
}

/// Clamp `particle` into the bounds of the block it is classified in.
///
/// The lower edge of the block is shifted down by `SMALL_NUMBER`; each axis is
/// clamped independently. A grid with an empty axis has no block bounds, so
/// the particle is left where it is.
pub fn reposition_particle(particle: &mut Particle, size: &BlockExtent, blocks: &BlockCount) {
    if blocks.is_degenerate() {
        return;
    }
    let idx = block_indices(particle, size, blocks);
    for k in 0..DIM {
        let lo = BOX_MIN[k] + idx[k] as f32 * size.s[k] - SMALL_NUMBER;
        let hi = lo + size.s[k];
        let p = &mut particle.p[k];
        if *p < lo {
            *p = lo;
        } else if *p > hi {
            *p = hi;
        }
    }
}
