//! Utility functions around the file system and external processes.

use crate::error::{Result, SweepError};

use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
    process::{Command, ExitStatus, Stdio},
};

/// Creates `dir` (and its parents) unless it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| SweepError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Returns the host name, trimmed, as reported by the platform's `hostname` utility.
pub fn hostname() -> Result<String> {
    let output = Command::new("hostname")
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| SweepError::Hostname(e.to_string()))?;
    if !output.status.success() {
        return Err(SweepError::Hostname(format!(
            "`hostname` exited with {}",
            output.status
        )));
    }

    let name = String::from_utf8_lossy(&output.stdout).trim().to_owned();
    match name.is_empty() {
        true => Err(SweepError::Hostname("`hostname` printed nothing".into())),
        false => Ok(name),
    }
}

/// Outcome of a [`tee`] whose process was started.
#[derive(Debug)]
pub struct TeeOutcome {
    pub status: ExitStatus,
    /// Error writing to the sink. Copying stopped there but the process still ran to completion.
    pub sink_error: Option<io::Error>,
}

/// Runs `cmd` to completion, copying its standard output both to `sink` and to our own
/// standard output as it arrives.
///
/// Standard error is inherited. Whatever was copied before a failure stays in `sink`. An `Err`
/// means the process could not be started or observed; sink failures are reported in the
/// outcome.
pub fn tee(cmd: &mut Command, sink: &mut dyn Write) -> io::Result<TeeOutcome> {
    let mut child = cmd.stdout(Stdio::piped()).spawn()?;
    let mut pipe = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "child stdout not captured"))?;

    let stdout = io::stdout();
    let mut buf = [0_u8; 8192];
    let mut sink_error = None;
    let read = loop {
        let n = match pipe.read(&mut buf) {
            Ok(0) => break Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => break Err(e),
        };
        if let Err(e) = sink.write_all(&buf[..n]).and_then(|_| sink.flush()) {
            sink_error = Some(e);
            break Ok(());
        }
        // Mirroring to the terminal is best effort.
        let mut out = stdout.lock();
        let _ = out.write_all(&buf[..n]).and_then(|_| out.flush());
    };

    // Reap the child even when copying failed.
    drop(pipe);
    let status = child.wait()?;
    read.map(|_| TeeOutcome { status, sink_error })
}
