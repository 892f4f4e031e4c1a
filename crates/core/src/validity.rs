//! Numeric validity predicate
//!
//! Every coordinate accepted or produced by a [`crate::Vector`] passes through
//! a [`NumberValidator`] first.

/// Classifies a floating-point value as acceptable or not
pub trait NumberValidator: Send + Sync {
    /// Returns true if `value` may be stored as a coordinate
    fn is_valid(&self, value: f64) -> bool;
}

/// Accepts finite values only (rejects NaN and ±Infinity)
#[derive(Debug, Clone, Copy, Default)]
pub struct FiniteValidator;

impl NumberValidator for FiniteValidator {
    fn is_valid(&self, value: f64) -> bool {
        value.is_finite()
    }
}

impl<F> NumberValidator for F
where
    F: Fn(f64) -> bool + Send + Sync,
{
    fn is_valid(&self, value: f64) -> bool {
        value.is_finite() && self(value)
    }
}
