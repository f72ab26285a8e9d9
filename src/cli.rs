//! Command-Line Interface related code.
//!
//! This module handles the parsing of CLI arguments using the [`clap`][1] crate.
//! It defines the available runtime options and subcommands.
//!
//! Sweep parameters are positional, `[MAX_SIZE] [INCREMENT] [TRIALS] [LABEL]`, each optional
//! and defaulted independently by each subcommand.
//!
//! [1]: https://crates.io/crates/clap

use crate::{consts, routines::Routine};

use clap::{Parser, Subcommand};

use std::path::PathBuf;

/// Size-sweep orchestration of BLAS benchmarks.
///
/// Rebuilds the benchmark executables against the selected BLAS library, runs them over a range
/// of matrix sizes and appends their timings to result files named after the routine, the
/// storage order and transpositions, the host, the library and the run's label.
#[derive(Clone, Debug, Parser)]
#[command(name = "blas-sweep")]
pub struct CliArgs {
    /// Benchmark tree holding `Makefile.in`, the variant configurations and one directory per
    /// routine.
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub bench_root: PathBuf,

    /// Host name used in result file names, instead of the output of `hostname`.
    #[arg(long, value_name = "NAME")]
    pub host: Option<String>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Cmd,
}

/// Available commands.
#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum Cmd {
    /// Rebuild for the variant matching the label and run every routine of the sweep.
    Sweep {
        /// Largest matrix size (single-precision routines get 1024 more).
        #[arg(
            default_value_t = consts::SWEEP_MAX_SIZE,
            value_parser = clap::value_parser!(u32).range(1..),
        )]
        max_size: u32,

        /// Matrix size increment.
        #[arg(
            default_value_t = consts::INCREMENT,
            value_parser = clap::value_parser!(u32).range(1..),
        )]
        increment: u32,

        /// Number of rebuild-and-run cycles.
        #[arg(
            default_value_t = consts::TRIALS,
            value_parser = clap::value_parser!(u32).range(1..),
        )]
        trials: u32,

        /// Run label; a labeled run benchmarks the accelerated variant.
        label: Option<String>,

        /// Number of runs per parameter combination within one cycle.
        #[arg(
            long,
            value_name = "N",
            default_value_t = consts::INNER_TRIALS,
            value_parser = clap::value_parser!(u32).range(1..),
        )]
        inner_trials: u32,

        /// Routines to benchmark, comma-separated.
        #[arg(
            long,
            value_enum,
            value_delimiter = ',',
            default_values_t = crate::routines::LIVE_ROUTINES,
        )]
        routines: Vec<Routine>,

        /// Variant built for unlabeled runs (uses `Makefile.in.<NAME>`).
        #[arg(long, value_name = "NAME", default_value = consts::DEFAULT_VARIANT)]
        default_variant: String,

        /// Variant built for labeled runs (uses `Makefile.in.<NAME>`).
        #[arg(long, value_name = "NAME", default_value = consts::ACCELERATED_VARIANT)]
        accelerated_variant: String,

        /// Build program, invoked as `<MAKE> clean all` in the benchmark tree.
        #[arg(long, value_name = "PROGRAM", default_value = consts::MAKE)]
        make: String,
    },
    /// Run the benchmark executable of a single routine, without rebuilding.
    Run {
        /// Routine to benchmark.
        #[arg(value_enum)]
        routine: Routine,

        /// Largest matrix size.
        #[arg(
            default_value_t = consts::ROUTINE_MAX_SIZE,
            value_parser = clap::value_parser!(u32).range(1..),
        )]
        max_size: u32,

        /// Matrix size increment.
        #[arg(
            default_value_t = consts::INCREMENT,
            value_parser = clap::value_parser!(u32).range(1..),
        )]
        increment: u32,

        /// Number of runs per parameter combination.
        #[arg(
            default_value_t = consts::TRIALS,
            value_parser = clap::value_parser!(u32).range(1..),
        )]
        trials: u32,

        /// Run label.
        label: Option<String>,

        /// Build configuration naming the library, defaults to `<BENCH_ROOT>/Makefile.in`.
        #[arg(long, value_name = "FILE")]
        build_config: Option<PathBuf>,
    },
}
