//! On-disk layout of a benchmark tree.
//!
//! ```text
//! <root>/
//!   Makefile.in              active build configuration
//!   Makefile.in.<variant>    one build configuration per library variant
//!   <routine>/
//!     bench_<routine>        benchmark executable
//!     dat_<routine>/         result files
//! ```

use crate::{consts::BUILD_CONFIG, routines::Routine, variant::Variant};

use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct BenchLayout {
    root: PathBuf,
}

impl BenchLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Active build configuration.
    pub fn build_config(&self) -> PathBuf {
        self.root.join(BUILD_CONFIG)
    }

    /// Build configuration of `variant`.
    pub fn variant_config(&self, variant: &Variant) -> PathBuf {
        self.root.join(variant.build_config_name())
    }

    /// Working directory of `routine`.
    pub fn routine_dir(&self, routine: Routine) -> PathBuf {
        self.root.join(routine.name())
    }

    pub fn executable(&self, routine: Routine) -> PathBuf {
        self.routine_dir(routine)
            .join(format!("bench_{}", routine.name()))
    }

    pub fn output_dir(&self, routine: Routine) -> PathBuf {
        self.routine_dir(routine)
            .join(format!("dat_{}", routine.name()))
    }
}
