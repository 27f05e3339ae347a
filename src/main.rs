//! `npso`: run NPSO on the Schaffer function.
//!
//! `npso` (or `npso single`) prints one line per iteration of a single run.
//! `npso batch` prints one line per repetition and a closing average line.
//! Every flag is optional; the defaults are the reference configuration.
//! Logs go to stderr, controlled by `RUST_LOG`.

use clap::{Args, Parser, Subcommand};
use std::error::Error;
use u_npso::harness::{BatchConfig, BatchRunner};
use u_npso::npso::{ControlDraw, NpsoConfig, NpsoRunner};

#[derive(Parser, Debug)]
#[command(author, version, about = "New Particle Swarm Optimization on the Schaffer function")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One run, reporting the global best after every iteration.
    Single,

    /// Repeated independent runs with averaged statistics.
    Batch {
        /// Number of independent runs.
        #[arg(long, default_value_t = 10)]
        repetitions: usize,

        /// Run repetitions on the rayon pool. Needs the `parallel` feature;
        /// otherwise a warning is logged and runs are serial.
        #[arg(long, default_value_t = false)]
        parallel: bool,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Number of particles.
    #[arg(long, default_value_t = 200, global = true)]
    particles: usize,

    /// Per-coordinate domain bound.
    #[arg(long, default_value_t = 10.0, global = true)]
    bound: f64,

    /// Iteration cap per run.
    #[arg(long, default_value_t = 1000, global = true)]
    max_iterations: usize,

    /// Global-best adoption threshold.
    #[arg(long, default_value_t = 0.3, global = true)]
    c1: f64,

    /// Personal-best adoption threshold.
    #[arg(long, default_value_t = 0.6, global = true)]
    c2: f64,

    /// Early-stop fitness level.
    #[arg(long, default_value_t = 0.9999, global = true)]
    threshold: f64,

    /// Truncate the control draw to an integer (legacy behaviour).
    #[arg(long, default_value_t = false, global = true)]
    truncated_control: bool,

    /// Random seed. Omit for OS entropy.
    #[arg(long, global = true)]
    seed: Option<u64>,
}

impl RunArgs {
    fn to_config(&self) -> NpsoConfig {
        let control = if self.truncated_control {
            ControlDraw::Truncated
        } else {
            ControlDraw::Uniform
        };
        let config = NpsoConfig::default()
            .with_particle_count(self.particles)
            .with_domain_bound(self.bound)
            .with_max_iterations(self.max_iterations)
            .with_thresholds(self.c1, self.c2)
            .with_convergence_threshold(self.threshold)
            .with_control_draw(control);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let run = cli.run.to_config();

    match cli.command.unwrap_or(Command::Single) {
        Command::Single => {
            NpsoRunner::run_with_observer(&run, |snapshot| println!("{snapshot}"))?;
        }
        Command::Batch {
            repetitions,
            parallel,
        } => {
            let mut config = BatchConfig::default()
                .with_repetitions(repetitions)
                .with_parallel(parallel);
            if let Some(seed) = run.seed {
                config = config.with_seed(seed);
            }
            let summary = BatchRunner::run(&config.with_run(run))?;
            println!("{summary}");
        }
    }

    Ok(())
}
