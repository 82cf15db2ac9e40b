use std::path::PathBuf;

use fluidsim::core::{Header, Particle, Simulation};
use fluidsim::error::{Error, Result};
use fluidsim::fld;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fluidsim-fld-{}", std::process::id()));
    let _ = std::fs::create_dir_all(&dir);
    dir.join(name)
}

fn block_of_fluid() -> Vec<Particle> {
    let mut particles = Vec::new();
    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                let p = [i as f32 * 0.004, j as f32 * 0.004 - 0.05, k as f32 * 0.004];
                particles.push(Particle::at(p));
            }
        }
    }
    particles
}

#[test]
fn file_round_trip_preserves_every_field() -> Result<()> {
    let path = scratch("round-trip.fld");
    let mut particles = block_of_fluid();
    particles[3].rho = 1000.5;
    particles[5].a = [0.5, -9.81, 0.25];
    particles[7].hv = [0.1, 0.2, 0.3];
    let header = Header::new(204.0, particles.len() as i32);

    fld::write_file(&path, &header, &particles)?;
    assert_eq!(std::fs::metadata(&path)?.len(), 8 + 52 * particles.len() as u64);

    let (h, read) = fld::read_file(&path)?;
    assert_eq!(h, header);
    assert_eq!(read, particles);
    Ok(())
}

#[test]
fn simulate_file_to_file() -> Result<()> {
    let input = scratch("in.fld");
    let output = scratch("out.fld");
    let particles = block_of_fluid();
    fld::write_file(&input, &Header::new(204.0, particles.len() as i32), &particles)?;

    let (header, particles) = fld::read_file(&input)?;
    let mut sim = Simulation::new(header, particles);
    sim.run(1);
    fld::write_file(&output, &sim.header(), &sim.particles)?;

    let (h, out) = fld::read_file(&output)?;
    assert_eq!(h, header);
    assert_eq!(out.len(), 64);
    assert_eq!(out, sim.particles);
    // the block starts at rest and gravity outweighs the pressure between layers
    assert!(out.iter().all(|p| p.v[1] < 0.0 && p.hv[1] < 0.0));
    Ok(())
}

#[test]
fn header_count_larger_than_body() -> Result<()> {
    let path = scratch("mismatch.fld");
    let particles = block_of_fluid();
    fld::write_file(&path, &Header::new(204.0, 65), &particles)?;
    match fld::read_file(&path) {
        Err(e @ Error::ParticleCountMismatch { header: 65, found: 64 }) => {
            assert_eq!(e.exit_code(), -5);
            Ok(())
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn negative_header_count() -> Result<()> {
    let path = scratch("negative.fld");
    fld::write_file(&path, &Header::new(204.0, -3), &[])?;
    assert!(matches!(fld::read_file(&path), Err(Error::InvalidParticleCount(-3))));
    Ok(())
}

#[test]
fn unwritable_output_path() {
    let path = scratch("missing-dir/out.fld");
    let err = fld::write_file(&path, &Header::new(204.0, 0), &[]).err();
    assert!(matches!(err, Some(Error::OutputFile { .. })));
}
