//! Binary particle file (`.fld`) reader and writer.
//!
//! Layout, native byte order: an 8-byte header (`f32` particles per meter,
//! `i32` particle count) followed by one 52-byte record per particle, see
//! [`Particle`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::mem::size_of;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::{Header, Particle};
use crate::error::{Error, Result};

/// Size of one particle record in bytes.
pub const RECORD_SIZE: usize = size_of::<Particle>();

/// Read a header and its particles from `reader`.
pub fn read_from<R: Read>(mut reader: R) -> Result<(Header, Vec<Particle>)> {
    let mut head = [0u8; size_of::<Header>()];
    reader.read_exact(&mut head)?;
    let header: Header = bytemuck::pod_read_unaligned(&head);

    if header.np <= 0 {
        warn!(np = header.np, "invalid particle count in header");
        return Err(Error::InvalidParticleCount(header.np));
    }

    let mut body = Vec::new();
    reader.read_to_end(&mut body)?;
    if body.len() != header.np as usize * RECORD_SIZE {
        let found = body.len() / RECORD_SIZE;
        warn!(header = header.np, found, bytes = body.len(), "particle count mismatch");
        return Err(Error::ParticleCountMismatch {
            header: header.np,
            found,
        });
    }

    let particles: Vec<Particle> = body
        .chunks_exact(RECORD_SIZE)
        .map(bytemuck::pod_read_unaligned)
        .collect();
    debug!(ppm = header.ppm, np = particles.len(), "particles decoded");
    Ok((header, particles))
}

/// Write `header` followed by `particles` to `writer`.
///
/// The header is written as given; callers keep `header.np` equal to
/// `particles.len()`.
pub fn write_to<W: Write>(mut writer: W, header: &Header, particles: &[Particle]) -> Result<()> {
    writer.write_all(bytemuck::bytes_of(header))?;
    writer.write_all(bytemuck::cast_slice(particles))?;
    writer.flush()?;
    Ok(())
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<(Header, Vec<Particle>)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::InputFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading particle file");
    read_from(BufReader::new(file))
}

pub fn write_file<P: AsRef<Path>>(path: P, header: &Header, particles: &[Particle]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::OutputFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), np = particles.len(), "writing particle file");
    write_to(BufWriter::new(file), header, particles)
}
