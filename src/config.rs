//! Sweep parameters.

use crate::error::{Result, SweepError};

/// Parameters of a size sweep, resolved once per invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    /// Largest matrix size benchmarked.
    pub max_size: u32,
    /// Matrix size step between two data points.
    pub increment: u32,
    /// Number of repetitions.
    pub trials: u32,
    /// Operator tag; empty when the run is unlabeled.
    pub label: String,
}

impl SweepConfig {
    /// Creates a validated `SweepConfig`.
    pub fn new(
        max_size: u32,
        increment: u32,
        trials: u32,
        label: impl Into<String>,
    ) -> Result<Self> {
        if max_size == 0 {
            return Err(SweepError::InvalidConfig("max_size must be positive".into()));
        }
        // A zero step would never let the executable reach `max_size`.
        if increment == 0 {
            return Err(SweepError::InvalidConfig("increment must be positive".into()));
        }
        if trials == 0 {
            return Err(SweepError::InvalidConfig("trials must be at least 1".into()));
        }

        Ok(Self {
            max_size,
            increment,
            trials,
            label: label.into(),
        })
    }

    /// Derives the configuration handed to one routine: its size offset is added to `max_size`
    /// and `trials` is replaced by the per-routine trial count.
    pub fn for_routine(&self, size_offset: u32, trials: u32) -> Result<Self> {
        let max_size = self.max_size.checked_add(size_offset).ok_or_else(|| {
            SweepError::InvalidConfig(format!(
                "max_size {} overflows with size offset {size_offset}",
                self.max_size
            ))
        })?;
        Self::new(max_size, self.increment, trials, self.label.clone())
    }
}
