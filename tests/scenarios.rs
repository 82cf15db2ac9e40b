use fluidsim::core::collision::{resolve_axis, AxisCollision, Side};
use fluidsim::core::constants::{
    BOX_MAX, DIM, DP, EXTERNAL_ACCELERATION, RADIUS_MULTIPLIER, RHO,
};
use fluidsim::core::kernel::{particle_mass, smoothing_length};
use fluidsim::core::{BlockCount, BlockExtent, Particle, SmoothingKernel, SIM_BOX};

/// Two particles inside one smoothing radius with mirrored velocities see
/// equal densities and opposite pair forces on top of identical gravity.
#[test]
fn two_particle_pair_exchange() {
    let ppm = 204.0;
    let k = SmoothingKernel::new(
        smoothing_length(RADIUS_MULTIPLIER, ppm),
        particle_mass(RHO, ppm),
    );
    let d = 0.5 * k.smoothing_length();
    let mut pi = Particle::new([-0.5 * d, 0.01, 0.0], [0.0; DIM], [0.001, 0.0, 0.0]);
    let mut pj = Particle::new([0.5 * d, 0.01, 0.0], [0.0; DIM], [-0.001, 0.0, 0.0]);
    pi.reset_accumulators();
    pj.reset_accumulators();

    k.accumulate_density(&mut pi, &mut pj);
    k.transform_density(&mut pi);
    k.transform_density(&mut pj);
    k.accumulate_acceleration(&mut pi, &mut pj);

    assert_eq!(pi.rho, pj.rho);
    assert!(pi.rho > 0.0);
    for c in 0..DIM {
        let expected = -pj.a[c] + 2.0 * EXTERNAL_ACCELERATION[c];
        let tol = 1e-5 * pi.a[c].abs().max(1.0);
        assert!(
            (pi.a[c] - expected).abs() <= tol,
            "axis {c}: {} vs {}",
            pi.a[c],
            expected
        );
    }
    // approaching particles are pushed apart
    assert!(pi.a[0] < 0.0);
}

#[test]
fn particle_past_xmax_moving_out_rebounds() {
    let eps = 1e-4;
    let mut p = Particle::new([BOX_MAX[0] + DP + eps, 0.0, 0.0], [0.2, 0.0, 0.0], [0.2, 0.0, 0.0]);
    let info = AxisCollision::detect(&p, 0, SIM_BOX.axes[0]);
    assert!(info.is_collision());
    assert_eq!(info.side, Some(Side::High));
    let delta = DP - (BOX_MAX[0] - info.next);

    resolve_axis(&mut p, &info);
    assert!(p.p[0] >= BOX_MAX[0] - delta - 1e-6 && p.p[0] <= BOX_MAX[0]);
    assert!(p.hv[0] < 0.0);
    assert!(p.v[0] < 0.0);
    assert_eq!(p.p[1], 0.0);
}

#[test]
fn zero_smoothing_length_keeps_prior_grid() {
    let mut blocks = BlockCount::for_smoothing_length(0.025);
    let prior = blocks;
    blocks.recompute(0.0, &SIM_BOX);
    assert_eq!(blocks, prior);
    blocks.recompute(1e-12, &SIM_BOX);
    assert_eq!(blocks, prior);

    assert_eq!(BlockCount::for_smoothing_length(0.0), BlockCount::default());
    let size = BlockExtent::from_counts(&BlockCount::for_smoothing_length(0.0));
    assert!(size.s.iter().all(|s| s.is_finite()));
}
