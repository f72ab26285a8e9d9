//! Library variants and their selection policy.

use crate::consts::BUILD_CONFIG;

use std::fmt;

/// Class of a library variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantKind {
    /// CPU BLAS, benchmarked by unlabeled runs.
    Default,
    /// Accelerated (OpenCL) BLAS, benchmarked by labeled runs.
    Accelerated,
}

/// A library variant the benchmark executables can be linked against.
///
/// The variant's build configuration is the file `Makefile.in.<name>` in the benchmark root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variant {
    kind: VariantKind,
    name: String,
}

impl Variant {
    pub fn new(kind: VariantKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn kind(&self) -> VariantKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File name of this variant's build configuration.
    pub fn build_config_name(&self) -> String {
        format!("{BUILD_CONFIG}.{}", self.name)
    }

    /// A variant is exercised iff it is the accelerated one exactly when a label is given.
    pub fn is_selected(&self, label: &str) -> bool {
        (self.kind == VariantKind::Accelerated) == !label.is_empty()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Candidate variants, in the order a sweep visits them.
pub fn candidates(default_name: &str, accelerated_name: &str) -> [Variant; 2] {
    [
        Variant::new(VariantKind::Default, default_name),
        Variant::new(VariantKind::Accelerated, accelerated_name),
    ]
}
