//! Error types.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type alias for sweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;

/// Errors that can stop a routine or a variant cycle.
///
/// Failures of the external programs (build tool, benchmark executables) are not represented
/// here: they are logged and the sweep carries on.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Rejected sweep parameters.
    #[error("invalid sweep configuration: {0}")]
    InvalidConfig(String),

    /// The build configuration could not be read.
    #[error("cannot read build configuration `{}`: {source}", .path.display())]
    BuildConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output directory could not be created.
    #[error("cannot create output directory `{}`: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A result file could not be opened or appended to.
    #[error("cannot append to result file `{}`: {source}", .path.display())]
    OutputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The host name could not be determined.
    #[error("cannot resolve host name: {0}")]
    Hostname(String),

    /// The variant's build configuration could not be made the active one.
    #[error("cannot activate build configuration `{}`: {source}", .path.display())]
    Activate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rebuilding for a library variant failed.
    #[error("rebuild for variant `{variant}` failed: {reason}")]
    Rebuild { variant: String, reason: String },
}

impl SweepError {
    /// Whether the error invalidates every remaining routine of the current variant cycle.
    pub fn aborts_variant(&self) -> bool {
        matches!(self, Self::BuildConfig { .. } | Self::Activate { .. })
    }
}
