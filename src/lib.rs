//! Smoothed Particle Hydrodynamics simulation of an incompressible fluid in
//! a fixed rectangular box.
//!
//! - [`core`]: particle state, block grid, SPH pair kernel, boundary
//!   collisions, leapfrog integration and the [`Simulation`] driver.
//! - [`fld`]: reader and writer for the binary particle file.
//! - [`args`]: command-line validation for the `fluid` binary.
//! - [`report`]: run summary.
//!
//! ```no_run
//! use fluidsim::{fld, Simulation};
//!
//! # fn main() -> fluidsim::error::Result<()> {
//! let (header, particles) = fld::read_file("small.fld")?;
//! let mut sim = Simulation::new(header, particles);
//! sim.run(10);
//! fld::write_file("out.fld", &sim.header(), &sim.particles)?;
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod core;
pub mod error;
pub mod fld;
pub mod report;

pub use crate::core::{Header, Particle, RunReport, Simulation};
pub use crate::error::{Error, Result};
