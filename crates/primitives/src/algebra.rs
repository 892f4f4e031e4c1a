//! Set algebra over tolerance-deduplicated sets
//!
//! Membership is "some element lies within `tol` under `norm`". Every result
//! is a fresh set, built by inserting under the same metric, so results are
//! themselves deduplicated. Results report to the context of the first
//! operand.
//!
//! Shared preconditions: both operands non-empty, equal dimensions, a
//! specified norm and a finite non-negative tolerance.

use crate::set::VectorSet;
use vecset_core::{check_metric, fail, Norm, Vector, VectorError, VectorResult};

/// Elements of `a` that have a match in `b`
pub fn intersection(a: &VectorSet, b: &VectorSet, norm: Norm, tol: f64) -> VectorResult<VectorSet> {
    check_operands(a, b, norm, tol, "intersection")?;
    let mut out = VectorSet::with_context(a.context().clone());
    visit(a, |v| {
        if b.contains(v, norm, tol)? {
            out.insert(v, norm, tol)?;
        }
        Ok(true)
    })?;
    tracing::debug!(left = a.len(), right = b.len(), result = out.len(), "intersection");
    Ok(out)
}

/// Elements of `a`, then elements of `b` not already present
pub fn union(a: &VectorSet, b: &VectorSet, norm: Norm, tol: f64) -> VectorResult<VectorSet> {
    check_operands(a, b, norm, tol, "union")?;
    let mut out = VectorSet::with_context(a.context().clone());
    for operand in [a, b] {
        visit(operand, |v| {
            out.insert(v, norm, tol)?;
            Ok(true)
        })?;
    }
    tracing::debug!(left = a.len(), right = b.len(), result = out.len(), "union");
    Ok(out)
}

/// Elements of `a` with no match in `b`
pub fn difference(a: &VectorSet, b: &VectorSet, norm: Norm, tol: f64) -> VectorResult<VectorSet> {
    check_operands(a, b, norm, tol, "difference")?;
    let mut out = VectorSet::with_context(a.context().clone());
    collect_missing(a, b, &mut out, norm, tol)?;
    tracing::debug!(left = a.len(), right = b.len(), result = out.len(), "difference");
    Ok(out)
}

/// Elements of either operand with no match in the other
pub fn symmetric_difference(
    a: &VectorSet,
    b: &VectorSet,
    norm: Norm,
    tol: f64,
) -> VectorResult<VectorSet> {
    check_operands(a, b, norm, tol, "symmetric_difference")?;
    let mut out = VectorSet::with_context(a.context().clone());
    collect_missing(a, b, &mut out, norm, tol)?;
    collect_missing(b, a, &mut out, norm, tol)?;
    tracing::debug!(
        left = a.len(),
        right = b.len(),
        result = out.len(),
        "symmetric difference"
    );
    Ok(out)
}

/// True if every element of `a` has a match in `b`
///
/// Any precondition failure is reported and yields `false`.
pub fn is_subset(a: &VectorSet, b: &VectorSet, norm: Norm, tol: f64) -> bool {
    if check_operands(a, b, norm, tol, "is_subset").is_err() {
        return false;
    }
    visit(a, |v| b.contains(v, norm, tol)).unwrap_or(false)
}

/// True if each operand is a subset of the other
pub fn equals(a: &VectorSet, b: &VectorSet, norm: Norm, tol: f64) -> bool {
    is_subset(a, b, norm, tol) && is_subset(b, a, norm, tol)
}

/// Insert into `out` every element of `from` that has no match in `other`
fn collect_missing(
    from: &VectorSet,
    other: &VectorSet,
    out: &mut VectorSet,
    norm: Norm,
    tol: f64,
) -> VectorResult<()> {
    visit(from, |v| {
        if !other.contains(v, norm, tol)? {
            out.insert(v, norm, tol)?;
        }
        Ok(true)
    })?;
    Ok(())
}

/// Walk `set` from begin to end inclusive
///
/// `f` returns whether to keep going. Returns `Ok(false)` if `f` stopped the
/// walk early.
fn visit<F>(set: &VectorSet, mut f: F) -> VectorResult<bool>
where
    F: FnMut(&Vector) -> VectorResult<bool>,
{
    if set.is_empty() {
        return Ok(true);
    }
    let mut cursor = set.try_iter_at(0)?;
    loop {
        if !f(cursor.vector())? {
            return Ok(false);
        }
        if cursor.is_end() {
            return Ok(true);
        }
        cursor.next(1)?;
    }
}

fn check_operands(
    a: &VectorSet,
    b: &VectorSet,
    norm: Norm,
    tol: f64,
    function: &'static str,
) -> VectorResult<()> {
    let ctx = a.context();
    check_metric(norm, tol).map_err(|e| fail!(ctx, function, e))?;
    if a.is_empty() || b.is_empty() {
        return Err(fail!(ctx, function, VectorError::invalid("operand set is empty")));
    }
    if a.dim() != b.dim() {
        return Err(fail!(
            ctx,
            function,
            VectorError::MismatchingDimensions {
                expected: a.dim(),
                got: b.dim(),
            }
        ));
    }
    Ok(())
}
