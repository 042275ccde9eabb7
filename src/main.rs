//! Command-line driver.
//!
//! Reads a TOML input file, builds the hyperboloid-forebody grid, and
//! marches the freestream-initialized flow forward in time, printing one
//! line per step with the componentwise RMS residual. The run stops early
//! if the residual goes NaN.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use fv2d::{Config, Euler, FiniteVolume, ForwardEuler, PerfectGas, TimeIntegrator};

#[derive(Parser, Debug)]
#[command(name = "fv2d", about = "2D finite-volume Euler solver")]
struct Cli {
    /// Path to the TOML input file describing the run
    input_file: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_path(&cli.input_file)?;

    let size = [config.grid.size[0] as usize, config.grid.size[1] as usize];
    log::info!(
        "building {}x{} forebody grid (L = {} m, Rb = {} m, Rn = {} m)",
        size[0],
        size[1],
        config.grid.body_length,
        config.grid.base_radius,
        config.grid.nose_radius
    );
    let grid = fv2d::make_hyperbolic_forebody(
        config.grid.body_length,
        config.grid.base_radius,
        config.grid.nose_radius,
        config.grid.boundary_angle_radians(),
        size,
    )?;

    let mut physics = Euler::new(PerfectGas::default());
    physics.set_freestream(
        config.freestream.pressure,
        config.freestream.temperature,
        config.freestream.u_velocity,
        config.freestream.v_velocity,
    );
    let freestream = physics.freestream();

    let system = FiniteVolume::new(&grid, physics)?;
    let mut state = system.make_state_vector(freestream);

    log::info!(
        "running {} steps of dt = {} s from t = {} s",
        config.solver.iterations,
        config.solver.timestep,
        config.solver.start_time
    );
    let integrator = ForwardEuler;
    let dt = config.solver.timestep;
    let mut time = config.solver.start_time;
    for step in 0..config.solver.iterations {
        let rms = integrator.step(&system, dt, time, &mut state);
        println!(
            "{:>6}{:>16.8e}{:>16.8e}{:>16.8e}{:>16.8e}",
            step, rms.x, rms.y, rms.z, rms.w
        );
        if rms.is_nan() {
            log::warn!("residual went NaN after step {step}; stopping early");
            break;
        }
        time += dt;
    }

    Ok(())
}
