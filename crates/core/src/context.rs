//! Injected collaborators shared by vectors and sets
//!
//! A [`Context`] bundles the diagnostics sink and the validity predicate.
//! It is cheap to clone (two `Arc`s) and is inherited by every value derived
//! from the one it was injected into: clones, arithmetic results, set
//! algebra results.

use crate::diagnostics::{Diagnostics, NoopDiagnostics, Severity, SourceLocation, TracingDiagnostics};
use crate::error::ErrorKind;
use crate::validity::{FiniteValidator, NumberValidator};
use std::sync::Arc;

/// Diagnostics sink and validity predicate used by an operation
#[derive(Clone)]
pub struct Context {
    diagnostics: Arc<dyn Diagnostics>,
    validator: Arc<dyn NumberValidator>,
}

impl Context {
    /// Create a builder for context configuration
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    /// Context that reports nothing and accepts finite numbers
    pub fn silent() -> Self {
        Self::builder().silent().build()
    }

    /// Forward a report to the diagnostics sink
    pub fn report(&self, kind: ErrorKind, severity: Severity, location: &SourceLocation) {
        self.diagnostics.report(kind, severity, location);
    }

    /// Check a single value against the validity predicate
    pub fn is_valid(&self, value: f64) -> bool {
        self.validator.is_valid(value)
    }

    /// Position of the first invalid value, if any
    pub fn first_invalid(&self, values: &[f64]) -> Option<usize> {
        values.iter().position(|v| !self.is_valid(*v))
    }

    /// The installed diagnostics sink
    pub fn diagnostics(&self) -> &Arc<dyn Diagnostics> {
        &self.diagnostics
    }
}

impl Default for Context {
    fn default() -> Self {
        ContextBuilder::new().build()
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context").finish_non_exhaustive()
    }
}

/// Builder for [`Context`]
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use vecset_core::{Context, RecordingDiagnostics};
///
/// let sink = Arc::new(RecordingDiagnostics::new());
/// let ctx = Context::builder()
///     .diagnostics(sink.clone())
///     .validator(|x: f64| x.abs() < 1e6)
///     .build();
/// assert!(!ctx.is_valid(2e6));
/// ```
pub struct ContextBuilder {
    diagnostics: Arc<dyn Diagnostics>,
    validator: Arc<dyn NumberValidator>,
}

impl ContextBuilder {
    /// Builder with tracing diagnostics and the finite validator
    pub fn new() -> Self {
        Self {
            diagnostics: Arc::new(TracingDiagnostics),
            validator: Arc::new(FiniteValidator),
        }
    }

    /// Install a diagnostics sink
    pub fn diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Discard all reports
    pub fn silent(mut self) -> Self {
        self.diagnostics = Arc::new(NoopDiagnostics);
        self
    }

    /// Install a validity predicate
    ///
    /// Non-finite values stay invalid regardless of the predicate.
    pub fn validator(mut self, validator: impl NumberValidator + 'static) -> Self {
        self.validator = Arc::new(validator);
        self
    }

    /// Build the context
    pub fn build(self) -> Context {
        Context {
            diagnostics: self.diagnostics,
            validator: self.validator,
        }
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
