//! Core types for vecset
//!
//! This crate defines the value type and the ambient collaborators every
//! other crate builds on:
//! - [`Vector`]: dense fixed-dimension coordinates with validated mutation
//! - [`Norm`]: L1, L2 and Chebyshev norms plus the `Unspecified` sentinel
//! - [`VectorError`] / [`ErrorKind`]: error taxonomy
//! - [`Diagnostics`]: side channel receiving every reported failure
//! - [`NumberValidator`]: predicate deciding which coordinates are acceptable
//! - [`Context`]: the injected diagnostics sink and validator

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arithmetic;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod norm;
pub mod validity;
pub mod vector;

pub use context::{Context, ContextBuilder};
pub use diagnostics::{
    Diagnostics, FileDiagnostics, NoopDiagnostics, RecordingDiagnostics, Report, Severity,
    SourceLocation, TracingDiagnostics,
};
pub use error::{ErrorKind, VectorError, VectorResult};
pub use norm::{check_metric, Norm};
pub use validity::{FiniteValidator, NumberValidator};
pub use vector::Vector;
