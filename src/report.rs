use std::fmt;

use crate::core::{BlockCount, RunReport, Simulation};

/// End-of-run summary printed by the `fluid` binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub num_particles: usize,
    pub ppm: f32,
    pub smoothing_length: f32,
    pub particle_mass: f32,
    pub grid: [i32; 3],
    pub block_size: [f32; 3],
    pub seconds: f64,
}

impl Summary {
    pub fn new(sim: &Simulation, run: &RunReport) -> Self {
        Self {
            num_particles: sim.num_particles(),
            ppm: sim.header().ppm,
            smoothing_length: sim.smoothing_length(),
            particle_mass: sim.particle_mass(),
            grid: sim.block_count().n,
            block_size: sim.block_extent().s,
            seconds: run.elapsed.as_secs_f64(),
        }
    }

    pub fn num_blocks(&self) -> i64 {
        BlockCount { n: self.grid }.total()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [nx, ny, nz] = self.grid;
        let [sx, sy, sz] = self.block_size;
        writeln!(f, "Number of particles: {}", self.num_particles)?;
        writeln!(f, "Particles per meter: {}", self.ppm)?;
        writeln!(f, "Smoothing length: {}", self.smoothing_length)?;
        writeln!(f, "Mass of particles: {}", self.particle_mass)?;
        writeln!(f, "Grid size: {nx} x {ny} x {nz}")?;
        writeln!(f, "Number of blocks: {}", self.num_blocks())?;
        writeln!(f, "Block size: {sx} x {sy} x {sz}")?;
        write!(f, "Simulation time: {} s", self.seconds)
    }
}
