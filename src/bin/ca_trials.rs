use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ca_harness::bodies::{ChainSimulation, SerialChain};
use ca_harness::collision::{ChainAdvancementBound, ContactTopologyMonitor, ZeroBound};
use ca_harness::core::{HarnessConfig, MultibodyEngine, ReportFormat, StepHooks, StepModel, DEFAULT_TRIALS};
use ca_harness::diagnostics::{
    DiagnosticSink, LineSink, StepTelemetry, KINETIC_ENERGY_LOG, MANIFOLD_CHANGE_LOG, POSE_LOG,
};
use ca_harness::integration::GeneralizedEuler;
use ca_harness::verification::{HarnessBuilder, ScenarioSampler};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Conservative advancement bound verification and contact topology logging")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run Monte-Carlo trials of the advancement bound on a serial chain
    Verify {
        /// Number of trials
        #[arg(long, default_value_t = DEFAULT_TRIALS)]
        trials: usize,
        /// Sampler seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of moving links in the chain
        #[arg(long, default_value_t = 6)]
        links: usize,
        /// Joint-to-joint distance
        #[arg(long, default_value_t = 0.5)]
        link_length: f64,
        /// Bounding radius of each link
        #[arg(long, default_value_t = 0.1)]
        radius: f64,
        /// Integration step shared by the oracle and the integrator
        #[arg(long, default_value_t = 1.0)]
        step: f64,
        /// Residual file (defaults to stdout; logs always go to stderr)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Write `bound actual` pairs instead of residuals
        #[arg(long)]
        pairs: bool,
        /// Use an oracle that always answers zero
        #[arg(long)]
        unsound: bool,
    },
    /// Step a chain over a ground plane, logging energy, pose and contact changes
    Monitor {
        /// Number of simulation steps
        #[arg(long, default_value_t = 1000)]
        steps: usize,
        /// Step size
        #[arg(long, default_value_t = 0.01)]
        step: f64,
        /// Number of moving links in the chain
        #[arg(long, default_value_t = 4)]
        links: usize,
        /// Height added to the random base pose, above the ground plane at y = 0
        #[arg(long, default_value_t = 2.0)]
        lift: f64,
        /// Seed for the initial pose, configuration and joint rates
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Directory receiving the log files
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Verify {
            trials,
            seed,
            links,
            link_length,
            radius,
            step,
            output,
            pairs,
            unsound,
        } => {
            let config = HarnessConfig {
                trials,
                seed,
                step: StepModel::new(step)?,
                report: if pairs { ReportFormat::BoundActual } else { ReportFormat::Residual },
            };
            let sink: Box<dyn DiagnosticSink> = match output {
                Some(path) => Box::new(
                    LineSink::create(&path).with_context(|| format!("opening {}", path.display()))?,
                ),
                None => Box::new(LineSink::stdout()),
            };

            let builder = HarnessBuilder::new(config).sink(sink);
            let mut driver = if unsound {
                builder.oracle(ZeroBound).build()?
            } else {
                builder.oracle(ChainAdvancementBound::new()).build()?
            };

            let mut chain = SerialChain::uniform(links, link_length, radius);
            let summary = driver.run(&mut chain)?;
            info!(
                reported = summary.reported,
                skipped = summary.skipped,
                violations = summary.violations,
                "verification complete"
            );
        }
        Command::Monitor {
            steps,
            step,
            links,
            lift,
            seed,
            dir,
        } => {
            run_monitor(steps, StepModel::new(step)?, links, lift, seed, &dir)?;
        }
    }

    Ok(())
}

fn run_monitor(steps: usize, step: StepModel, links: usize, lift: f64, seed: u64, dir: &Path) -> Result<()> {
    let chain = ScenarioSampler::seeded(seed).sample_chain(links, 0.5, 0.1, lift)?;
    let base = chain.link_transform(0)?;
    info!(seed, position = %base.position, rotation = %base.rotation, "chain base placed");

    let mut monitor = ContactTopologyMonitor::new(LineSink::create(dir.join(MANIFOLD_CHANGE_LOG))?);
    let mut telemetry = StepTelemetry::new(
        LineSink::create(dir.join(KINETIC_ENERGY_LOG))?,
        LineSink::create(dir.join(POSE_LOG))?,
    );

    let mut sim = ChainSimulation::new(chain, GeneralizedEuler::new(), step);
    {
        let mut hooks = StepHooks::new();
        hooks.on_constraints(&mut monitor).on_post_step(&mut telemetry);
        sim.run(steps, &mut hooks)?;
    }
    telemetry.flush()?;

    let mut sink = monitor.into_sink();
    sink.flush()?;
    info!(steps, changes = sink.lines_written(), "monitoring complete");
    Ok(())
}
