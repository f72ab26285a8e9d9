use blas_sweep::{
    cli::{CliArgs, Cmd},
    config::SweepConfig,
    drivers::{self, RoutineContext, SweepPlan},
    layout::BenchLayout,
    variant,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let layout = BenchLayout::new(args.bench_root);

    match args.command {
        Cmd::Sweep {
            max_size,
            increment,
            trials,
            label,
            inner_trials,
            routines,
            default_variant,
            accelerated_variant,
            make,
        } => {
            let plan = SweepPlan {
                config: SweepConfig::new(max_size, increment, trials, label.unwrap_or_default())?,
                inner_trials,
                routines,
                variants: variant::candidates(&default_variant, &accelerated_variant).to_vec(),
                layout,
                make,
                host: args.host,
            };
            let report = drivers::sweep(&plan);
            debug!(
                cycles = report.cycles.len(),
                invocations = report.invocations.len(),
                "sweep done"
            );
        }
        Cmd::Run {
            routine,
            max_size,
            increment,
            trials,
            label,
            build_config,
        } => {
            let config = SweepConfig::new(max_size, increment, trials, label.unwrap_or_default())?;
            let build_config = build_config.unwrap_or_else(|| layout.build_config());
            let ctx = RoutineContext {
                layout: &layout,
                build_config: &build_config,
                host: args.host.as_deref(),
            };
            drivers::routine::run(routine, &config, ctx)
                .with_context(|| format!("running {routine}"))?;
        }
    }

    Ok(())
}
