//! Routine runner.
//!
//! This module runs the benchmark executable of a single routine over the benchmarked parameter
//! combinations, appending everything the executable prints to the combination's result file.

use crate::{
    config::SweepConfig,
    consts::ERROR_CHECK,
    error::{Result, SweepError},
    layout::BenchLayout,
    library::library_name,
    naming::{OutputFileName, ParameterCombination},
    routines::Routine,
    utils::{ensure_dir, hostname, tee},
};

use tracing::{debug, info, warn};

use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

/// Record of one benchmark executable invocation.
#[derive(Clone, Debug)]
pub struct BenchInvocation {
    /// Result file the output was appended to.
    pub output: PathBuf,
    /// Positional arguments passed to the executable.
    pub args: Vec<String>,
    /// Exit status, `None` when the executable could not be run at all.
    pub status: Option<ExitStatus>,
}

/// Everything a routine run needs besides its sweep parameters.
#[derive(Clone, Copy, Debug)]
pub struct RoutineContext<'a> {
    pub layout: &'a BenchLayout,
    /// Build configuration naming the library the executable is linked against.
    pub build_config: &'a Path,
    /// Host name override; looked up with `hostname` when `None`.
    pub host: Option<&'a str>,
}

/// Runs `routine` with `config`, `config.trials` times per benchmarked combination.
///
/// Failures of the executable itself are logged and recorded, never returned.
pub fn run(
    routine: Routine,
    config: &SweepConfig,
    ctx: RoutineContext,
) -> Result<Vec<BenchInvocation>> {
    let library = library_name(ctx.build_config)?;
    let host = match ctx.host {
        Some(host) => host.trim().to_owned(),
        None => hostname()?,
    };
    if host.is_empty() {
        return Err(SweepError::Hostname("empty host name".into()));
    }

    let datdir = ctx.layout.output_dir(routine);
    ensure_dir(&datdir)?;

    // The executable runs from the routine directory, so it must not be a relative path.
    let exe = ctx.layout.executable(routine);
    let exe = std::path::absolute(&exe).unwrap_or(exe);
    let workdir = ctx.layout.routine_dir(routine);
    let mut invocations = Vec::new();

    for order in ParameterCombination::ORDERS {
        for params in ParameterCombination::enumerate(order) {
            if !params.is_exercised() {
                debug!(%routine, combination = %params.tag(), "skipping combination");
                continue;
            }

            for _ in 0..config.trials {
                let name = OutputFileName {
                    routine,
                    params,
                    host: &host,
                    library: &library,
                    label: &config.label,
                };
                let output = datdir.join(name.to_string());
                info!(output = %output.display(), "benchmarking {routine}");

                let args = vec![
                    params.order.arg().to_string(),
                    params.transa.arg().to_string(),
                    params.transb.arg().to_string(),
                    config.max_size.to_string(),
                    config.increment.to_string(),
                    ERROR_CHECK.to_string(),
                ];
                let status = invoke(&exe, &workdir, &args, &output)?;

                invocations.push(BenchInvocation {
                    output,
                    args,
                    status,
                });
            }
        }
    }

    Ok(invocations)
}

/// Runs `exe` from `workdir`, appending its standard output to `output`.
///
/// Returns `None` when `exe` could not be started. Failing to write `output` is an error.
fn invoke(
    exe: &Path,
    workdir: &Path,
    args: &[String],
    output: &Path,
) -> Result<Option<ExitStatus>> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output)
        .map_err(|source| SweepError::OutputFile {
            path: output.to_path_buf(),
            source,
        })?;

    let mut cmd = Command::new(exe);
    cmd.args(args).current_dir(workdir);

    let outcome = match tee(&mut cmd, &mut file) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(exe = %exe.display(), error = %e, "benchmark could not be run");
            return Ok(None);
        }
    };

    if let Some(source) = outcome.sink_error {
        return Err(SweepError::OutputFile {
            path: output.to_path_buf(),
            source,
        });
    }
    if !outcome.status.success() {
        warn!(exe = %exe.display(), status = %outcome.status, "benchmark exited unsuccessfully");
    }
    Ok(Some(outcome.status))
}
