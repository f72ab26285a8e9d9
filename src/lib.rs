//! blas-sweep - size-sweep orchestration of BLAS benchmarks
//!
//! # About
//! blas-sweep drives prebuilt BLAS benchmark executables (one per level-3 routine) over a range of
//! matrix sizes and collects their timing output for later comparison across hosts and library
//! variants. It does not measure anything itself: each executable times its routine and prints
//! human-readable lines, which blas-sweep appends verbatim to a result file while mirroring them
//! to the terminal.
//!
//! Result files are named after everything that identifies the measurements they hold:
//! ```text
//! <routine>/dat_<routine>/<routine>_<order><transa><transb>_<host>_<library>[_<label>].txt
//! ```
//! Re-running with the same parameters appends to the same file.
//!
//! # Quickstart
//! ## Pre-requisites
//! A benchmark tree with a `Makefile.in.<variant>` per BLAS library (whose first line ends with
//! the library's installation path) and a `<routine>/` directory per routine in which
//! `make clean all` produces `bench_<routine>`.
//!
//! ## Help
//! ```sh
//! cargo run -- help
//!
//! Size-sweep orchestration of BLAS benchmarks.
//!
//! Usage: blas-sweep [OPTIONS] <COMMAND>
//!
//! Commands:
//!   sweep  Rebuild for the variant matching the label and run every routine of the sweep
//!   run    Run the benchmark executable of a single routine, without rebuilding
//!   help   Print this message or the help of the given subcommand(s)
//! ```
//!
//! ## Example run
//! Sweep DGEMM up to 4096 and SGEMM up to 5120, by steps of 64, rebuilding three times against
//! the accelerated library:
//! ```sh
//! cargo run --release -- -C benchmark sweep 4096 64 3 tuned
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `info`).

pub mod cli;
pub mod config;
pub mod consts;
pub mod drivers;
pub mod error;
pub mod layout;
pub mod library;
pub mod naming;
pub mod routines;
pub mod utils;
pub mod variant;
