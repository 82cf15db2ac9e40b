//! Simulation core: geometry, block classification, the SPH pair kernel,
//! boundary collisions, integration and the driver that sequences them.
//!
//! Nothing in this module fails; degenerate geometry is absorbed by leaving
//! values unchanged.

pub mod block;
pub mod collision;
pub mod constants;
pub mod grid;
pub mod integrate;
pub mod kernel;
pub mod particle;
pub mod sim;

pub use grid::{BlockCount, BlockExtent, Bounds, Domain, SIM_BOX};
pub use kernel::SmoothingKernel;
pub use particle::{Header, Particle};
pub use sim::{RunReport, Simulation, Stage};
