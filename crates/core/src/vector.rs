//! Dense fixed-dimension vector
//!
//! A [`Vector`] owns its coordinates in a single boxed slice whose length is
//! the dimension. The dimension is fixed at creation and is always at least 1.
//!
//! ## Invariants
//!
//! - Every coordinate passes the context's validity predicate at all
//!   observable times.
//! - Mutators validate every new coordinate before committing any of them,
//!   so a failed call leaves the receiver unchanged.
//! - Cloning copies the storage; two vectors never share coordinates.

use crate::arithmetic;
use crate::context::Context;
use crate::error::{VectorError, VectorResult};
use crate::fail;
use crate::norm::{check_metric, Norm};

/// Dense vector of `f64` coordinates
#[derive(Clone)]
pub struct Vector {
    coords: Box<[f64]>,
    ctx: Context,
}

impl Vector {
    /// Create a vector with the default context
    ///
    /// # Example
    /// ```
    /// use vecset_core::{Norm, Vector};
    /// let v = Vector::create(2, &[3.0, -4.0]).unwrap();
    /// assert_eq!(v.norm(Norm::L2), 5.0);
    /// ```
    ///
    /// # Errors
    /// - `InvalidArgument` if `dim == 0`
    /// - `NullReference` if `coords` is empty
    /// - `MismatchingDimensions` if `coords.len() != dim`
    /// - `NotANumber` if any coordinate is invalid
    pub fn create(dim: usize, coords: &[f64]) -> VectorResult<Self> {
        Self::create_in(&Context::default(), dim, coords)
    }

    /// Create a vector bound to `ctx`
    pub fn create_in(ctx: &Context, dim: usize, coords: &[f64]) -> VectorResult<Self> {
        Self::check_new(ctx, dim, coords)?;
        Ok(Self::from_parts(ctx.clone(), coords.to_vec()))
    }

    /// Create a vector taking ownership of `coords`, dimension `coords.len()`
    pub fn from_vec(coords: Vec<f64>) -> VectorResult<Self> {
        Self::from_vec_in(&Context::default(), coords)
    }

    /// Like [`Vector::from_vec`], bound to `ctx`
    pub fn from_vec_in(ctx: &Context, coords: Vec<f64>) -> VectorResult<Self> {
        Self::check_new(ctx, coords.len(), &coords)?;
        Ok(Self::from_parts(ctx.clone(), coords))
    }

    /// All-zero vector of `dim` coordinates, usually as an output buffer
    pub fn zeros_in(ctx: &Context, dim: usize) -> VectorResult<Self> {
        if dim == 0 {
            return Err(fail!(ctx, "zeros", VectorError::invalid("dimension must be positive")));
        }
        Ok(Self::from_parts(ctx.clone(), vec![0.0; dim]))
    }

    /// Assemble an already-validated vector
    pub(crate) fn from_parts(ctx: Context, coords: Vec<f64>) -> Self {
        Vector {
            coords: coords.into_boxed_slice(),
            ctx,
        }
    }

    fn check_new(ctx: &Context, dim: usize, coords: &[f64]) -> VectorResult<()> {
        if dim == 0 {
            return Err(fail!(ctx, "create", VectorError::invalid("dimension must be positive")));
        }
        if coords.is_empty() {
            return Err(fail!(ctx, "create", VectorError::NullReference { what: "coordinates" }));
        }
        if coords.len() != dim {
            return Err(fail!(
                ctx,
                "create",
                VectorError::MismatchingDimensions {
                    expected: dim,
                    got: coords.len(),
                }
            ));
        }
        if let Some(index) = ctx.first_invalid(coords) {
            return Err(fail!(
                ctx,
                "create",
                VectorError::NotANumber {
                    index,
                    value: coords[index],
                }
            ));
        }
        Ok(())
    }

    /// Number of coordinates
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Read-only view of the coordinates
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Context this vector reports to
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Coordinate at `index`
    pub fn coordinate(&self, index: usize) -> VectorResult<f64> {
        match self.coords.get(index) {
            Some(value) => Ok(*value),
            None => Err(fail!(
                self.ctx,
                "coordinate",
                VectorError::IndexOutOfBound {
                    index,
                    len: self.dim(),
                }
            )),
        }
    }

    /// Replace the coordinate at `index`
    ///
    /// # Errors
    /// - `IndexOutOfBound` if `index >= dim`
    /// - `NotANumber` if `value` is invalid
    pub fn set_coordinate(&mut self, index: usize, value: f64) -> VectorResult<()> {
        if index >= self.dim() {
            return Err(fail!(
                self.ctx,
                "set_coordinate",
                VectorError::IndexOutOfBound {
                    index,
                    len: self.dim(),
                }
            ));
        }
        if !self.ctx.is_valid(value) {
            return Err(fail!(self.ctx, "set_coordinate", VectorError::NotANumber { index, value }));
        }
        self.coords[index] = value;
        Ok(())
    }

    /// Replace every coordinate at once
    ///
    /// # Errors
    /// - `MismatchingDimensions` if `coords.len() != dim`
    /// - `NotANumber` if any new coordinate is invalid
    pub fn set_data(&mut self, coords: &[f64]) -> VectorResult<()> {
        if coords.len() != self.dim() {
            return Err(fail!(
                self.ctx,
                "set_data",
                VectorError::MismatchingDimensions {
                    expected: self.dim(),
                    got: coords.len(),
                }
            ));
        }
        if let Some(index) = self.ctx.first_invalid(coords) {
            return Err(fail!(
                self.ctx,
                "set_data",
                VectorError::NotANumber {
                    index,
                    value: coords[index],
                }
            ));
        }
        self.coords.copy_from_slice(coords);
        Ok(())
    }

    /// Overwrite this vector with the coordinates of `src`
    pub fn copy_from(&mut self, src: &Vector) -> VectorResult<()> {
        self.set_data(src.coords())
    }

    /// Multiply every coordinate by `factor`
    ///
    /// # Errors
    /// - `InvalidArgument` if `factor` is invalid
    /// - `InfinityOverflow` if any scaled coordinate is invalid
    pub fn scale(&mut self, factor: f64) -> VectorResult<()> {
        if factor == 1.0 {
            return Ok(());
        }
        if !self.ctx.is_valid(factor) {
            return Err(fail!(
                self.ctx,
                "scale",
                VectorError::invalid(format!("scale factor {} is not a valid number", factor))
            ));
        }
        if self.coords.iter().any(|x| !self.ctx.is_valid(x * factor)) {
            return Err(fail!(self.ctx, "scale", VectorError::InfinityOverflow { operation: "scale" }));
        }
        self.coords.iter_mut().for_each(|x| *x *= factor);
        Ok(())
    }

    /// Add `other` to this vector in place
    ///
    /// # Errors
    /// - `MismatchingDimensions` if dimensions differ
    /// - `InfinityOverflow` if any sum is invalid
    pub fn increment(&mut self, other: &Vector) -> VectorResult<()> {
        let coords = arithmetic::combine(self, other, |x, y| x + y, "increment")?;
        self.coords.copy_from_slice(&coords);
        Ok(())
    }

    /// Subtract `other` from this vector in place
    pub fn decrement(&mut self, other: &Vector) -> VectorResult<()> {
        let coords = arithmetic::combine(self, other, |x, y| x - y, "decrement")?;
        self.coords.copy_from_slice(&coords);
        Ok(())
    }

    /// Norm of this vector, `NaN` on failure
    ///
    /// Failures (unspecified norm, overflow) are reported to the context.
    pub fn norm(&self, norm: Norm) -> f64 {
        self.try_norm(norm).unwrap_or(f64::NAN)
    }

    /// Norm of this vector
    pub fn try_norm(&self, norm: Norm) -> VectorResult<f64> {
        norm.measure(self.coords.iter().copied())
            .map_err(|e| fail!(self.ctx, "norm", e))
    }

    /// Replace every coordinate `x` with `f(x)`
    ///
    /// # Errors
    /// - `InfinityOverflow` if any `f(x)` is invalid; nothing is changed
    pub fn apply_function<F>(&mut self, f: F) -> VectorResult<()>
    where
        F: Fn(f64) -> f64,
    {
        let mapped: Vec<f64> = self.coords.iter().map(|x| f(*x)).collect();
        if self.ctx.first_invalid(&mapped).is_some() {
            return Err(fail!(
                self.ctx,
                "apply_function",
                VectorError::InfinityOverflow {
                    operation: "apply_function",
                }
            ));
        }
        self.coords.copy_from_slice(&mapped);
        Ok(())
    }

    /// Visit every coordinate in index order
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(f64),
    {
        self.coords.iter().for_each(|x| f(*x));
    }

    /// Dot product, `NaN` on dimension mismatch or overflow
    ///
    /// # Example
    /// ```
    /// use vecset_core::Vector;
    /// let a = Vector::from_vec(vec![1.0, 2.0, 3.0]).unwrap();
    /// let b = Vector::from_vec(vec![4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(Vector::dot(&a, &b), 32.0);
    /// ```
    pub fn dot(a: &Vector, b: &Vector) -> f64 {
        if a.dim() != b.dim() {
            fail!(
                a.ctx,
                "dot",
                VectorError::MismatchingDimensions {
                    expected: a.dim(),
                    got: b.dim(),
                }
            );
            return f64::NAN;
        }
        let mut sum = 0.0;
        for (x, y) in a.coords.iter().zip(b.coords.iter()) {
            sum += x * y;
            if !a.ctx.is_valid(sum) {
                fail!(a.ctx, "dot", VectorError::InfinityOverflow { operation: "dot" });
                return f64::NAN;
            }
        }
        sum
    }

    /// `a + b` as a new vector
    pub fn add(a: &Vector, b: &Vector) -> VectorResult<Vector> {
        arithmetic::elementwise(a, b, |x, y| x + y, "add")
    }

    /// `a - b` as a new vector
    pub fn subtract(a: &Vector, b: &Vector) -> VectorResult<Vector> {
        arithmetic::elementwise(a, b, |x, y| x - y, "subtract")
    }

    /// True iff `norm(a - b) < tol`
    ///
    /// Returns false for an invalid tolerance, an unspecified norm,
    /// mismatching dimensions or an overflowing difference.
    pub fn equals(a: &Vector, b: &Vector, norm: Norm, tol: f64) -> bool {
        if let Err(e) = check_metric(norm, tol) {
            fail!(a.ctx, "equals", e);
            return false;
        }
        match norm.distance(a.coords(), b.coords()) {
            Ok(distance) => distance < tol,
            Err(e) => {
                fail!(a.ctx, "equals", e);
                false
            }
        }
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        &self.coords
    }
}

impl std::fmt::Debug for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vector")
            .field("dim", &self.dim())
            .field("coords", &self.coords)
            .finish()
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}
