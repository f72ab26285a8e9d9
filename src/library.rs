//! Library name extraction.
//!
//! The first line of a build configuration holds the path of the BLAS installation the
//! benchmarks are linked against, e.g. `BLASDIR = /opt/blas/atlas-3.10.1`. Its trailing path
//! segment names the library in result files.

use crate::{
    consts::UNKNOWN_LIBRARY,
    error::{Result, SweepError},
};

use regex::Regex;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::OnceLock,
};

static LIBRARY_SEGMENT: OnceLock<Regex> = OnceLock::new();

fn library_segment() -> &'static Regex {
    LIBRARY_SEGMENT.get_or_init(|| {
        Regex::new(r"/([A-Za-z0-9_.\-]+)$").expect("library segment regex must compile")
    })
}

/// Extracts the trailing path segment of `line`, or [`UNKNOWN_LIBRARY`] when there is none.
pub fn extract_library_name(line: &str) -> String {
    library_segment()
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map_or_else(|| UNKNOWN_LIBRARY.to_owned(), |m| m.as_str().to_owned())
}

/// Reads the library name from the build configuration at `path`.
///
/// An unreadable file is an error; an empty or unrecognized first line is not.
pub fn library_name(path: &Path) -> Result<String> {
    let config_error = |source| SweepError::BuildConfig {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = BufReader::new(File::open(path).map_err(config_error)?);
    let mut first_line = Vec::new();
    reader
        .read_until(b'\n', &mut first_line)
        .map_err(config_error)?;

    Ok(extract_library_name(&String::from_utf8_lossy(&first_line)))
}
