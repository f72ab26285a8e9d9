//! Library variant rebuild.
//!
//! The benchmark executables are built by the tree's makefiles, which include the active build
//! configuration. Rebuilding for a variant re-points the active configuration at the variant's
//! own file and runs a clean build.

use crate::{
    error::{Result, SweepError},
    layout::BenchLayout,
    variant::Variant,
};

use tracing::info;

use std::{fs, io, path::Path, process::Command};

/// Makes `variant` the active build configuration, then runs `<make> clean all` in the
/// benchmark root.
///
/// A [`SweepError::Activate`] means the previous build was left in place.
pub fn rebuild(layout: &BenchLayout, variant: &Variant, make: &str) -> Result<()> {
    let rebuild_error = |reason: String| SweepError::Rebuild {
        variant: variant.name().to_owned(),
        reason,
    };

    activate(layout, variant).map_err(|source| SweepError::Activate {
        path: layout.variant_config(variant),
        source,
    })?;

    info!(%variant, make, "rebuilding benchmarks");
    let status = Command::new(make)
        .args(["clean", "all"])
        .current_dir(layout.root())
        .status()
        .map_err(|e| rebuild_error(format!("cannot run `{make}`: {e}")))?;

    match status.success() {
        true => Ok(()),
        false => Err(rebuild_error(format!("`{make} clean all` exited with {status}"))),
    }
}

/// Replaces the active build configuration by a link to the variant's configuration.
fn activate(layout: &BenchLayout, variant: &Variant) -> io::Result<()> {
    let active = layout.build_config();
    match fs::symlink_metadata(&active) {
        Ok(_) => fs::remove_file(&active)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    link(Path::new(&variant.build_config_name()), &active, layout)
}

#[cfg(unix)]
fn link(target: &Path, active: &Path, _layout: &BenchLayout) -> io::Result<()> {
    // Relative target, resolved from the benchmark root.
    std::os::unix::fs::symlink(target, active)
}

#[cfg(not(unix))]
fn link(target: &Path, active: &Path, layout: &BenchLayout) -> io::Result<()> {
    fs::copy(layout.root().join(target), active).map(|_| ())
}
