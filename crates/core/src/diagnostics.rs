//! Diagnostics side channel
//!
//! Failed operations report `(kind, severity, location)` to a [`Diagnostics`]
//! sink before returning their error. Reporting is fire-and-forget: a sink
//! that cannot write never changes the outcome of the reporting operation.
//!
//! ## Sinks
//!
//! - [`TracingDiagnostics`]: structured `tracing` events (default)
//! - [`NoopDiagnostics`]: discards everything
//! - [`FileDiagnostics`]: appends one line per report to a log file
//! - [`RecordingDiagnostics`]: keeps reports in memory for inspection

use crate::error::{ErrorKind, VectorResult};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Severity attached to a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Informational
    Info,
    /// Recoverable or suspicious condition
    Warning,
    /// Operation failed
    Severe,
}

impl Severity {
    /// Upper-case label used by text sinks
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Severe => "SEVERE",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a report originated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Source file
    pub file: &'static str,
    /// Operation name
    pub function: &'static str,
    /// Source line
    pub line: u32,
}

impl SourceLocation {
    /// Create a new location
    pub fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        SourceLocation {
            file,
            function,
            line,
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} ({})", self.file, self.line, self.function)
    }
}

/// Sink for error reports
pub trait Diagnostics: Send + Sync {
    /// Record one report. Must not panic and must not block indefinitely.
    fn report(&self, kind: ErrorKind, severity: Severity, location: &SourceLocation);
}

/// Emits every report as a `tracing` event
///
/// Without an installed subscriber the events go nowhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, kind: ErrorKind, severity: Severity, location: &SourceLocation) {
        match severity {
            Severity::Info => tracing::info!(
                code = kind.code(),
                file = location.file,
                function = location.function,
                line = location.line,
                "{}",
                kind.description()
            ),
            Severity::Warning => tracing::warn!(
                code = kind.code(),
                file = location.file,
                function = location.function,
                line = location.line,
                "{}",
                kind.description()
            ),
            Severity::Severe => tracing::error!(
                code = kind.code(),
                file = location.file,
                function = location.function,
                line = location.line,
                "{}",
                kind.description()
            ),
        }
    }
}

/// Discards every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn report(&self, _kind: ErrorKind, _severity: Severity, _location: &SourceLocation) {}
}

/// Appends one line per report to a file
///
/// Line format: `SEVERE: <file> function : <fn>| line: <n> | <description>`.
/// Failed writes are counted, never propagated.
#[derive(Debug)]
pub struct FileDiagnostics {
    path: PathBuf,
    file: Mutex<File>,
    failed_writes: AtomicU64,
}

impl FileDiagnostics {
    /// Open `path` for reporting
    ///
    /// With `append` the existing content is kept, otherwise the file is
    /// truncated.
    ///
    /// # Errors
    /// - `Io` if the file cannot be opened
    pub fn open(path: impl AsRef<Path>, append: bool) -> VectorResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let file = options.open(&path)?;
        Ok(FileDiagnostics {
            path,
            file: Mutex::new(file),
            failed_writes: AtomicU64::new(0),
        })
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of reports that could not be written
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// Format a report the way it is written to disk
    pub fn format_line(kind: ErrorKind, severity: Severity, location: &SourceLocation) -> String {
        format!(
            "{}: {} function : {}| line: {} | {}",
            severity.as_str(),
            location.file,
            location.function,
            location.line,
            kind.description()
        )
    }
}

impl Diagnostics for FileDiagnostics {
    fn report(&self, kind: ErrorKind, severity: Severity, location: &SourceLocation) {
        let line = Self::format_line(kind, severity, location);
        let mut file = self.file.lock();
        if writeln!(file, "{}", line).and_then(|_| file.flush()).is_err() {
            self.failed_writes.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// One captured report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Error kind
    pub kind: ErrorKind,
    /// Severity
    pub severity: Severity,
    /// Origin
    pub location: SourceLocation,
}

/// Keeps every report in memory
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    reports: Mutex<Vec<Report>>,
}

impl RecordingDiagnostics {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all reports so far
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().clone()
    }

    /// Kinds of all reports so far, in order
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.reports.lock().iter().map(|r| r.kind).collect()
    }

    /// Number of reports
    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    /// Check if nothing was reported
    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }

    /// Forget all reports
    pub fn clear(&self) {
        self.reports.lock().clear();
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, kind: ErrorKind, severity: Severity, location: &SourceLocation) {
        self.reports.lock().push(Report {
            kind,
            severity,
            location: *location,
        });
    }
}

/// Report an error through a [`crate::Context`] and evaluate to it
///
/// ```ignore
/// return Err(fail!(self.ctx, "scale", VectorError::invalid("factor")));
/// ```
#[macro_export]
macro_rules! fail {
    ($ctx:expr, $function:expr, $err:expr) => {{
        let err: $crate::VectorError = $err;
        $ctx.report(
            err.kind(),
            $crate::Severity::Severe,
            &$crate::SourceLocation::new(file!(), $function, line!()),
        );
        err
    }};
}
