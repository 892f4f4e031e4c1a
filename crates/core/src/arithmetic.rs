//! Elementwise arithmetic building new vectors
//!
//! `Vector::add` and `Vector::subtract` are thin wrappers over [`elementwise`].
//! A result is only returned once every coordinate has been validated, so a
//! caller never observes a partially built vector.

use crate::error::{VectorError, VectorResult};
use crate::vector::Vector;

/// Combine two same-dimension vectors coordinate by coordinate
///
/// The result inherits the context of `a`.
///
/// # Errors
/// - `MismatchingDimensions` if `a.dim() != b.dim()`
/// - `InfinityOverflow` if any combined coordinate is invalid
pub fn elementwise<F>(a: &Vector, b: &Vector, op: F, operation: &'static str) -> VectorResult<Vector>
where
    F: Fn(f64, f64) -> f64,
{
    let ctx = a.context();
    let coords = combine(a, b, op, operation)?;
    Ok(Vector::from_parts(ctx.clone(), coords))
}

/// Combined coordinates of `a` and `b`, validated against `a`'s context
pub(crate) fn combine<F>(a: &Vector, b: &Vector, op: F, operation: &'static str) -> VectorResult<Vec<f64>>
where
    F: Fn(f64, f64) -> f64,
{
    let ctx = a.context();
    if a.dim() != b.dim() {
        return Err(crate::fail!(
            ctx,
            operation,
            VectorError::MismatchingDimensions {
                expected: a.dim(),
                got: b.dim(),
            }
        ));
    }
    let coords: Vec<f64> = a
        .coords()
        .iter()
        .zip(b.coords())
        .map(|(x, y)| op(*x, *y))
        .collect();
    if ctx.first_invalid(&coords).is_some() {
        return Err(crate::fail!(ctx, operation, VectorError::InfinityOverflow { operation }));
    }
    Ok(coords)
}
