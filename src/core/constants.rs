//! Physical, geometric and numerical constants shared by the simulation core.
//!
//! All values are single precision; the kernel and integrator rely on `f32`
//! evaluation order for bit-reproducible runs.

/// Spatial dimension.
pub const DIM: usize = 3;

pub const PI: f32 = std::f32::consts::PI;

/// Guard used for degenerate geometry and near-zero distances.
pub const SMALL_NUMBER: f32 = 1e-10;

// Kernel numerators
pub const STIFFNESS_CONSTANT: f32 = 315.0;
pub const VISCOSITY_CONSTANT: f32 = 45.0;
pub const PRESSURE_TERM_CONSTANT: f32 = 15.0;
pub const DENSITY_MULTIPLIER: f32 = 64.0;

/// Fluid density (kg/m^3).
pub const RHO: f32 = 1000.0;
/// Smoothing length as a multiple of the particle spacing.
pub const RADIUS_MULTIPLIER: f32 = 1.695;
/// Dynamic viscosity (Pa·s).
pub const MU: f32 = 0.4;
/// Gravity acceleration (m/s^2).
pub const G: f32 = 9.81;
/// Static pressure used by the pressure term.
pub const PS: f32 = 3.0;

/// External acceleration applied to every particle at the start of an iteration.
pub const EXTERNAL_ACCELERATION: [f32; DIM] = [0.0, -G, 0.0];

/// Lower corner of the simulation box.
pub const BOX_MIN: [f32; DIM] = [-0.065, -0.08, -0.065];
/// Upper corner of the simulation box.
pub const BOX_MAX: [f32; DIM] = [0.065, 0.1, 0.065];

/// Penetration distance (m).
pub const DP: f32 = 0.0002;
/// Spring constant of the boundary penalty.
pub const SC: f32 = 30000.0;
/// Damping coefficient of the boundary penalty.
pub const DV: f32 = 128.0;

/// Integration time step (s).
pub const DELTA_T: f32 = 0.001;
