use tracing::error;
use tracing_subscriber::EnvFilter;

use fluidsim::args::ProgArgs;
use fluidsim::report::Summary;
use fluidsim::{fld, Result, Simulation};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        error!(error = %e, "run failed");
        eprintln!("Error: {e}");
        if matches!(e, fluidsim::Error::ArgCount { .. }) {
            eprintln!("Usage: fluid <iterations> <input>.fld <output>.fld");
        }
        std::process::exit(e.exit_code());
    }
}

fn run(args: &[String]) -> Result<()> {
    let args = ProgArgs::parse(args)?;
    let (header, particles) = fld::read_file(&args.input)?;

    let mut sim = Simulation::new(header, particles);
    let report = sim.run(args.iterations);
    fld::write_file(&args.output, &sim.header(), &sim.particles)?;

    println!("{}", Summary::new(&sim, &report));
    Ok(())
}
