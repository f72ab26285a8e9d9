//! Benchmarked BLAS routines.

use crate::consts::SINGLE_PRECISION_SIZE_OFFSET;

use std::fmt;

/// Floating-point precision of a routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precision {
    Single,
    Double,
}

/// Level-3 BLAS routines that have a benchmark executable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Routine {
    Dgemm,
    Dsymm,
    Dsyrk,
    #[value(name = "dsyr2k")]
    Dsyr2k,
    Dtrmm,
    Sgemm,
    Ssymm,
    Ssyrk,
    #[value(name = "ssyr2k")]
    Ssyr2k,
    Strmm,
}

/// Routines exercised by a sweep unless told otherwise.
pub const LIVE_ROUTINES: [Routine; 2] = [Routine::Dgemm, Routine::Sgemm];

impl Routine {
    /// Lower-case BLAS name, also used for directories, executables and result files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dgemm => "dgemm",
            Self::Dsymm => "dsymm",
            Self::Dsyrk => "dsyrk",
            Self::Dsyr2k => "dsyr2k",
            Self::Dtrmm => "dtrmm",
            Self::Sgemm => "sgemm",
            Self::Ssymm => "ssymm",
            Self::Ssyrk => "ssyrk",
            Self::Ssyr2k => "ssyr2k",
            Self::Strmm => "strmm",
        }
    }

    /// Precision class, given by the BLAS prefix letter.
    pub fn precision(self) -> Precision {
        match self.name().as_bytes()[0] {
            b'd' => Precision::Double,
            _ => Precision::Single,
        }
    }

    /// Amount added to the sweep's `max_size` for this routine.
    ///
    /// Single-precision kernels are benchmarked over a larger size range.
    pub fn size_offset(self) -> u32 {
        match self.precision() {
            Precision::Single => SINGLE_PRECISION_SIZE_OFFSET,
            Precision::Double => 0,
        }
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
