//! Benchmark drivers.
//!
//! This module orchestrates the external benchmark executables. Nothing is measured here: the
//! executables time the routines themselves and the drivers only decide what runs, in which
//! order, and where the output goes.
//!
//! # Sweep structure
//! A sweep is a strictly sequential nest of loops, each step blocking on the external process it
//! starts:
//!
//! ## 1. Rebuild cycles
//! The whole sweep is repeated `trials` times. Each repetition rebuilds the benchmarks, so
//! consecutive data points of a result file come from fresh builds.
//!
//! ## 2. Variant selection
//! Of the candidate library variants, only the one matching the run's label class is built:
//! the accelerated variant for labeled runs, the default one otherwise (see
//! [`crate::variant`]). A failed build is logged and the sweep carries on, but a variant whose
//! build configuration cannot be activated is skipped for this cycle.
//!
//! ## 3. Routines
//! Each routine of the sweep is then run by the [`routine`] runner from its own directory, with
//! the routine's size offset added to `max_size` and its own trial count (one unless overridden
//! from the command line). An unreadable build configuration ends the current variant cycle;
//! any other routine error only skips that routine.

mod build;
pub mod routine;

pub use build::rebuild;
pub use routine::{BenchInvocation, RoutineContext};

use crate::{config::SweepConfig, layout::BenchLayout, routines::Routine, variant::Variant};

use tracing::{debug, error, info, warn};

/// Everything a sweep needs.
#[derive(Clone, Debug)]
pub struct SweepPlan {
    /// Global sweep parameters; `trials` counts rebuild cycles.
    pub config: SweepConfig,
    /// Runs per parameter combination within one rebuild cycle.
    pub inner_trials: u32,
    pub routines: Vec<Routine>,
    /// Candidate variants, filtered by label at each cycle.
    pub variants: Vec<Variant>,
    pub layout: BenchLayout,
    /// Build program invoked as `<make> clean all`.
    pub make: String,
    pub host: Option<String>,
}

/// What a sweep did. Only meant for callers; nothing is printed from it.
#[derive(Clone, Debug, Default)]
pub struct SweepReport {
    /// Name of the variant built at each cycle, in order.
    pub cycles: Vec<String>,
    pub invocations: Vec<BenchInvocation>,
}

/// Runs the sweep described by `plan`.
pub fn sweep(plan: &SweepPlan) -> SweepReport {
    let mut report = SweepReport::default();
    let label = plan.config.label.as_str();

    for trial in 0..plan.config.trials {
        for variant in &plan.variants {
            if !variant.is_selected(label) {
                debug!(%variant, "skipping variant");
                continue;
            }

            info!(%variant, trial = trial + 1, of = plan.config.trials, "starting cycle");
            report.cycles.push(variant.name().to_owned());

            match rebuild(&plan.layout, variant, &plan.make) {
                Ok(()) => {}
                Err(e) if e.aborts_variant() => {
                    error!(%variant, "{e}, abandoning variant");
                    continue;
                }
                Err(e) => warn!("{e}"),
            }

            let build_config = plan.layout.variant_config(variant);
            let ctx = RoutineContext {
                layout: &plan.layout,
                build_config: &build_config,
                host: plan.host.as_deref(),
            };

            for &routine in &plan.routines {
                let result = plan
                    .config
                    .for_routine(routine.size_offset(), plan.inner_trials)
                    .and_then(|config| routine::run(routine, &config, ctx));

                match result {
                    Ok(invocations) => report.invocations.extend(invocations),
                    Err(e) if e.aborts_variant() => {
                        error!(%variant, "{e}, abandoning variant");
                        break;
                    }
                    Err(e) => error!(%routine, "{e}, skipping routine"),
                }
            }
        }
    }

    report
}
