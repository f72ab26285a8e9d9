//! Crate-level constants.

/// Default largest matrix size passed to the benchmark executables by the sweep controller.
pub const SWEEP_MAX_SIZE: u32 = 7168;

/// Default largest matrix size when a routine is run on its own.
pub const ROUTINE_MAX_SIZE: u32 = 8192;

/// Default matrix size increment between two data points.
pub const INCREMENT: u32 = 16;

/// Default number of trials.
pub const TRIALS: u32 = 1;

/// Number of runs per parameter combination requested by the sweep controller for each rebuild.
pub const INNER_TRIALS: u32 = 1;

/// Extra matrix size granted to single-precision routines during a sweep.
pub const SINGLE_PRECISION_SIZE_OFFSET: u32 = 1024;

/// Name of the active build configuration, relative to the benchmark root.
pub const BUILD_CONFIG: &str = "Makefile.in";

/// Default CPU BLAS variant, built when no label is given.
pub const DEFAULT_VARIANT: &str = "atlas";

/// Accelerated BLAS variant, built for labeled runs.
pub const ACCELERATED_VARIANT: &str = "oclblas";

/// Default build program.
pub const MAKE: &str = "make";

/// Library name used when the build configuration does not name one.
pub const UNKNOWN_LIBRARY: &str = "unknown";

/// Extension of the result files.
pub const RESULT_EXTENSION: &str = "txt";

/// Value of the error-check flag passed to the benchmark executables.
// NOTE: accuracy checking is disabled for timing runs.
pub const ERROR_CHECK: u8 = 0;
