//! Parameter combinations and result file names.
//!
//! Each benchmarked combination of storage order and operand transpositions gets its own result
//! file. The file name encodes the provenance of the measurements it holds:
//!
//! ```text
//! <routine>_<order><transa><transb>_<host>_<library>[_<label>].txt
//! ```
//!
//! where `<order>` is `C` (column-major) or `R` (row-major) and the transpositions are `N` or
//! `T`. The name only depends on its components, so repeated runs accumulate in the same file.

use crate::{consts::RESULT_EXTENSION, routines::Routine};

use std::fmt;

/// Storage order of the matrices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageOrder {
    ColMajor,
    RowMajor,
}

impl StorageOrder {
    /// Positional value understood by the benchmark executables.
    pub fn arg(self) -> u8 {
        match self {
            Self::ColMajor => 0,
            Self::RowMajor => 1,
        }
    }
}

impl fmt::Display for StorageOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColMajor => write!(f, "C"),
            Self::RowMajor => write!(f, "R"),
        }
    }
}

/// Transposition applied to a matrix operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transpose {
    NoTrans,
    Trans,
}

impl Transpose {
    /// Positional value understood by the benchmark executables.
    pub fn arg(self) -> u8 {
        match self {
            Self::NoTrans => 0,
            Self::Trans => 1,
        }
    }
}

impl fmt::Display for Transpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTrans => write!(f, "N"),
            Self::Trans => write!(f, "T"),
        }
    }
}

/// One point of the (order, transa, transb) space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterCombination {
    pub order: StorageOrder,
    pub transa: Transpose,
    pub transb: Transpose,
}

impl ParameterCombination {
    /// Storage orders that are iterated.
    pub const ORDERS: [StorageOrder; 1] = [StorageOrder::ColMajor];

    /// Enumerates the four transpose combinations of `order`, `transa` varying slowest.
    pub fn enumerate(order: StorageOrder) -> impl Iterator<Item = Self> {
        [Transpose::NoTrans, Transpose::Trans]
            .into_iter()
            .flat_map(move |transa| {
                [Transpose::NoTrans, Transpose::Trans]
                    .into_iter()
                    .map(move |transb| Self {
                        order,
                        transa,
                        transb,
                    })
            })
    }

    /// Only the non-transposed product is benchmarked; the other combinations are skipped.
    pub fn is_exercised(&self) -> bool {
        self.order == StorageOrder::ColMajor
            && self.transa == Transpose::NoTrans
            && self.transb == Transpose::NoTrans
    }

    /// Three-letter tag, e.g. `CNN`.
    pub fn tag(&self) -> String {
        format!("{}{}{}", self.order, self.transa, self.transb)
    }
}

/// Name of the file collecting the output of one routine for one combination.
#[derive(Clone, Copy, Debug)]
pub struct OutputFileName<'a> {
    pub routine: Routine,
    pub params: ParameterCombination,
    pub host: &'a str,
    pub library: &'a str,
    /// Omitted from the name, separator included, when empty.
    pub label: &'a str,
}

impl fmt::Display for OutputFileName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}",
            self.routine,
            self.params.tag(),
            self.host,
            self.library
        )?;
        if !self.label.is_empty() {
            write!(f, "_{}", self.label)?;
        }
        write!(f, ".{RESULT_EXTENSION}")
    }
}
