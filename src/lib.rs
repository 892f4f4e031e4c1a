//! # vecset
//!
//! Dense fixed-dimension vectors and tolerance-deduplicated vector sets.
//!
//! ## Quick Start
//!
//! ```
//! use vecset::prelude::*;
//!
//! let mut set = VectorSet::new();
//! set.insert(&Vector::from_vec(vec![1.0, 2.0])?, Norm::L2, 0.1)?;
//! set.insert(&Vector::from_vec(vec![1.05, 2.0])?, Norm::L2, 0.1)?; // duplicate
//! assert_eq!(set.len(), 1);
//!
//! let it = set.begin().expect("non-empty");
//! assert!(it.is_begin() && it.is_end());
//! assert_eq!(it.vector().coords(), &[1.0, 2.0]);
//! # Ok::<(), vecset::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`Vector`] - validated coordinates with in-place arithmetic and norms
//! - [`VectorSet`] - deduplicated storage with stable logical ids
//! - [`SetIterator`] - bidirectional cursor borrowing its set
//! - [`algebra`] - set algebra under a `(norm, tolerance)` metric
//!
//! ## Diagnostics
//!
//! Every failure is returned as a [`VectorError`] and also reported to the
//! [`Diagnostics`] sink of the [`Context`] the value was built with. The
//! default sink forwards to `tracing`; [`FileDiagnostics`] appends lines to a
//! log file and [`RecordingDiagnostics`] keeps reports in memory.

#![warn(missing_docs)]

pub mod prelude;

pub use vecset_core::{
    arithmetic, check_metric, fail, Context, ContextBuilder, Diagnostics, ErrorKind,
    FileDiagnostics, FiniteValidator, NoopDiagnostics, Norm, NumberValidator,
    RecordingDiagnostics, Report, Severity, SourceLocation, TracingDiagnostics, Vector,
    VectorError, VectorResult,
};
pub use vecset_primitives::{
    algebra, ControlBlock, ElementId, Insertion, SetControl, SetIterator, SetOptions, VectorSet,
};

/// Error type of every fallible operation
pub type Error = VectorError;

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
