//! VectorSet: tolerance-deduplicated collection of same-dimension vectors
//!
//! ## Storage
//!
//! Coordinates of all live elements sit in one contiguous buffer, one
//! `dim`-length row per physical slot. A parallel, strictly ascending list of
//! [`ElementId`]s maps physical slot to logical identifier. Removing an
//! element shifts every later row (and id) down by one slot; logical ids are
//! never renumbered and never reused.
//!
//! ## Deduplication
//!
//! `insert` scans every live element and keeps the existing one if
//! `norm(element - candidate) < tol`. Dedup is only enforced at insert time
//! under the metric supplied to that call.
//!
//! ## Iteration
//!
//! [`VectorSet::begin`], [`VectorSet::end`] and [`VectorSet::iter_at`] hand out
//! [`SetIterator`]s that borrow the set, so the set cannot be mutated while
//! any of them is alive.

use crate::control::ControlBlock;
use crate::iterator::SetIterator;
use serde::{Deserialize, Serialize};
use vecset_core::{check_metric, fail, Context, Norm, Vector, VectorError, VectorResult};

/// Logical identifier of a set element
///
/// IMPORTANT: ElementIds are never reused.
/// Physical slots shift on removal, but the id value is monotonically
/// increasing within a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl ElementId {
    /// Create a new ElementId
    pub fn new(id: u64) -> Self {
        ElementId(id)
    }

    /// Get the underlying u64 value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

/// Outcome of [`VectorSet::insert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The vector was appended under a fresh id
    Added(ElementId),
    /// An element within tolerance already exists and was kept
    Duplicate {
        /// Id of the element that matched
        existing: ElementId,
    },
}

impl Insertion {
    /// True if a new element was appended
    pub fn is_added(&self) -> bool {
        matches!(self, Insertion::Added(_))
    }

    /// Id of the added or matching element
    pub fn id(&self) -> ElementId {
        match self {
            Insertion::Added(id) => *id,
            Insertion::Duplicate { existing } => *existing,
        }
    }
}

/// Storage options for a [`VectorSet`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetOptions {
    /// Elements reserved on the first insert. Must be > 0.
    pub initial_capacity: usize,
    /// Capacity multiplier applied when the buffer is full. Must be >= 2.
    pub growth_factor: usize,
}

impl Default for SetOptions {
    fn default() -> Self {
        SetOptions {
            initial_capacity: 16,
            growth_factor: 2,
        }
    }
}

impl SetOptions {
    /// Reserve room for a single element and grow by doubling
    pub fn compact() -> Self {
        SetOptions {
            initial_capacity: 1,
            ..Default::default()
        }
    }

    /// Reserve room for `elements` on the first insert
    pub fn preallocated(elements: usize) -> Self {
        SetOptions {
            initial_capacity: elements,
            ..Default::default()
        }
    }

    /// Check the option values
    pub fn validate(&self) -> VectorResult<()> {
        if self.initial_capacity == 0 {
            return Err(VectorError::invalid("initial_capacity must be > 0"));
        }
        if self.growth_factor < 2 {
            return Err(VectorError::invalid(format!(
                "growth_factor must be >= 2, got {}",
                self.growth_factor
            )));
        }
        Ok(())
    }
}

/// Deduplicated, insertion-ordered set of vectors
///
/// # Example
///
/// ```
/// use vecset_core::{Norm, Vector};
/// use vecset_primitives::VectorSet;
///
/// let mut set = VectorSet::new();
/// let a = Vector::from_vec(vec![1.0, 2.0]).unwrap();
/// let near_a = Vector::from_vec(vec![1.01, 2.0]).unwrap();
///
/// assert!(set.insert(&a, Norm::L2, 0.1).unwrap().is_added());
/// assert!(!set.insert(&near_a, Norm::L2, 0.1).unwrap().is_added());
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone)]
pub struct VectorSet {
    /// 0 until the first insert, then fixed
    dim: usize,
    /// `len() * dim` coordinates, row per physical slot
    data: Vec<f64>,
    /// Strictly ascending, one per live element
    ids: Vec<ElementId>,
    next_id: u64,
    options: SetOptions,
    ctx: Context,
}

impl VectorSet {
    /// Create an empty, untyped set with the default context
    pub fn new() -> Self {
        Self::with_context(Context::default())
    }

    /// Create an empty set reporting to `ctx`
    pub fn with_context(ctx: Context) -> Self {
        VectorSet {
            dim: 0,
            data: Vec::new(),
            ids: Vec::new(),
            next_id: 0,
            options: SetOptions::default(),
            ctx,
        }
    }

    /// Create an empty set with custom storage options
    ///
    /// # Errors
    /// - `InvalidArgument` if the options are out of range
    pub fn with_options(ctx: Context, options: SetOptions) -> VectorResult<Self> {
        options
            .validate()
            .map_err(|e| fail!(ctx, "with_options", e))?;
        let mut set = Self::with_context(ctx);
        set.options = options;
        Ok(set)
    }

    /// Dimension of every element, 0 while untyped
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the set holds no elements
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Elements that fit before the buffer grows again
    pub fn capacity(&self) -> usize {
        if self.dim == 0 {
            0
        } else {
            self.data.capacity() / self.dim
        }
    }

    /// Storage options in effect
    pub fn options(&self) -> &SetOptions {
        &self.options
    }

    /// Context this set reports to
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert `vector` unless an element within `tol` under `norm` exists
    ///
    /// The first insert into an untyped set fixes its dimension.
    ///
    /// # Errors
    /// - `InvalidArgument` for an unspecified norm or invalid tolerance
    /// - `NotANumber` if a coordinate fails this set's validity predicate
    /// - `MismatchingDimensions` if `vector.dim()` differs from the set's
    /// - `InfinityOverflow` if a distance cannot be measured
    /// - `AllocationFailure` if the buffer cannot grow
    pub fn insert(&mut self, vector: &Vector, norm: Norm, tol: f64) -> VectorResult<Insertion> {
        check_metric(norm, tol).map_err(|e| fail!(self.ctx, "insert", e))?;

        // The vector may carry a looser validator than the set
        if let Some(index) = self.ctx.first_invalid(vector.coords()) {
            return Err(fail!(
                self.ctx,
                "insert",
                VectorError::NotANumber {
                    index,
                    value: vector.coords()[index],
                }
            ));
        }

        if self.dim == 0 && self.ids.is_empty() {
            self.dim = vector.dim();
            return self.append(vector.coords());
        }

        self.check_dim(vector, "insert")?;

        if let Some(index) = self.scan(vector.coords(), norm, tol, 0, "insert")? {
            return Ok(Insertion::Duplicate {
                existing: self.ids[index],
            });
        }
        self.append(vector.coords())
    }

    /// Remove the element at physical slot `index`
    ///
    /// Later elements shift down one slot; their ids are unchanged.
    ///
    /// # Errors
    /// - `IndexOutOfBound` if `index >= len()`
    pub fn remove_at(&mut self, index: usize) -> VectorResult<()> {
        if index >= self.len() {
            return Err(fail!(
                self.ctx,
                "remove_at",
                VectorError::IndexOutOfBound {
                    index,
                    len: self.len(),
                }
            ));
        }
        self.ids.remove(index);
        let start = index * self.dim;
        self.data.drain(start..start + self.dim);
        Ok(())
    }

    /// Remove every element within `tol` of `pattern`
    ///
    /// Returns the number of removed elements.
    ///
    /// # Errors
    /// - `VectorNotFound` if nothing matched
    /// - `InvalidArgument` for an unspecified norm or invalid tolerance
    /// - `MismatchingDimensions` if `pattern` has the wrong dimension
    pub fn remove_matching(&mut self, pattern: &Vector, norm: Norm, tol: f64) -> VectorResult<usize> {
        check_metric(norm, tol).map_err(|e| fail!(self.ctx, "remove_matching", e))?;
        if !self.is_empty() {
            self.check_dim(pattern, "remove_matching")?;
        }

        let mut start = 0;
        let mut removed = 0;
        while let Some(index) = self.scan(pattern.coords(), norm, tol, start, "remove_matching")? {
            self.remove_at(index)?;
            start = index;
            removed += 1;
        }

        if removed == 0 {
            return Err(VectorError::VectorNotFound);
        }
        tracing::debug!(removed, remaining = self.len(), "removed matching elements");
        Ok(removed)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Physical slot of the first element at or after `start` within `tol`
    ///
    /// An empty set yields `Ok(None)`.
    pub fn position(
        &self,
        pattern: &Vector,
        norm: Norm,
        tol: f64,
        start: usize,
    ) -> VectorResult<Option<usize>> {
        check_metric(norm, tol).map_err(|e| fail!(self.ctx, "position", e))?;
        if self.is_empty() {
            return Ok(None);
        }
        self.check_dim(pattern, "position")?;
        self.scan(pattern.coords(), norm, tol, start, "position")
    }

    /// True if some element lies within `tol` of `pattern`
    pub fn contains(&self, pattern: &Vector, norm: Norm, tol: f64) -> VectorResult<bool> {
        Ok(self.position(pattern, norm, tol, 0)?.is_some())
    }

    /// Copy of the first element within `tol` of `pattern`
    ///
    /// # Errors
    /// - `InvalidArgument` if the set is empty, the norm unspecified or the
    ///   tolerance invalid
    /// - `VectorNotFound` if no element qualifies
    pub fn find_first(&self, pattern: &Vector, norm: Norm, tol: f64) -> VectorResult<Vector> {
        let index = self.locate(pattern, norm, tol, "find_first")?;
        self.get(index)
    }

    /// Fill `out` with the first element within `tol` of `pattern`
    ///
    /// Same errors as [`VectorSet::find_first`], plus `MismatchingDimensions`
    /// if `out` has the wrong dimension.
    pub fn find_first_into(
        &self,
        pattern: &Vector,
        norm: Norm,
        tol: f64,
        out: &mut Vector,
    ) -> VectorResult<()> {
        let index = self.locate(pattern, norm, tol, "find_first_into")?;
        self.get_into(index, out)
    }

    /// Copy of the element at physical slot `index`
    pub fn get(&self, index: usize) -> VectorResult<Vector> {
        let row = self.checked_row(index, "get")?;
        Vector::from_vec_in(&self.ctx, row.to_vec())
    }

    /// Fill `out` with the element at physical slot `index`
    pub fn get_into(&self, index: usize, out: &mut Vector) -> VectorResult<()> {
        let row = self.checked_row(index, "get_into")?;
        out.set_data(row)
    }

    /// Logical id of the element at physical slot `index`
    pub fn element_id(&self, index: usize) -> Option<ElementId> {
        self.ids.get(index).copied()
    }

    /// Current physical slot of a live element
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }

    /// Live ids in ascending order
    pub fn ids(&self) -> &[ElementId] {
        &self.ids
    }

    /// Coordinates of a live element
    pub fn coordinates(&self, id: ElementId) -> Option<&[f64]> {
        self.index_of(id).map(|index| self.row(index))
    }

    /// Every element with its id, in slot order
    pub fn rows(&self) -> impl Iterator<Item = (ElementId, &[f64])> + '_ {
        self.ids
            .iter()
            .copied()
            .zip(self.data.chunks_exact(self.dim.max(1)))
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Navigation handle shared by every iterator of this set
    pub fn control(&self) -> ControlBlock<'_> {
        ControlBlock::new(self)
    }

    /// Iterator positioned at physical slot `index`, `None` if out of range
    pub fn iter_at(&self, index: usize) -> Option<SetIterator<'_>> {
        if index >= self.len() {
            return None;
        }
        // In range, a failure here is already reported by `get`
        self.try_iter_at(index).ok()
    }

    /// Iterator positioned at physical slot `index`
    ///
    /// # Errors
    /// - `IndexOutOfBound` if `index >= len()`
    /// - any error from reading the element back
    pub fn try_iter_at(&self, index: usize) -> VectorResult<SetIterator<'_>> {
        let cached = self.get(index)?;
        let id = self.ids[index];
        Ok(SetIterator::new(self.control(), id, cached))
    }

    /// Iterator at the first live element, `None` if empty
    pub fn begin(&self) -> Option<SetIterator<'_>> {
        self.iter_at(0)
    }

    /// Iterator at the last live element, `None` if empty
    pub fn end(&self) -> Option<SetIterator<'_>> {
        self.iter_at(self.len().checked_sub(1)?)
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn row(&self, index: usize) -> &[f64] {
        let start = index * self.dim;
        &self.data[start..start + self.dim]
    }

    fn checked_row(&self, index: usize, function: &'static str) -> VectorResult<&[f64]> {
        if index >= self.len() {
            return Err(fail!(
                self.ctx,
                function,
                VectorError::IndexOutOfBound {
                    index,
                    len: self.len(),
                }
            ));
        }
        Ok(self.row(index))
    }

    fn check_dim(&self, vector: &Vector, function: &'static str) -> VectorResult<()> {
        if vector.dim() != self.dim {
            return Err(fail!(
                self.ctx,
                function,
                VectorError::MismatchingDimensions {
                    expected: self.dim,
                    got: vector.dim(),
                }
            ));
        }
        Ok(())
    }

    /// First slot in `start..len()` whose distance to `pattern` is below `tol`
    fn scan(
        &self,
        pattern: &[f64],
        norm: Norm,
        tol: f64,
        start: usize,
        function: &'static str,
    ) -> VectorResult<Option<usize>> {
        for index in start..self.len() {
            let distance = norm
                .distance(self.row(index), pattern)
                .map_err(|e| fail!(self.ctx, function, e))?;
            if distance < tol {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    fn locate(&self, pattern: &Vector, norm: Norm, tol: f64, function: &'static str) -> VectorResult<usize> {
        if self.is_empty() {
            return Err(fail!(self.ctx, function, VectorError::invalid("set is empty")));
        }
        match self.position(pattern, norm, tol, 0)? {
            Some(index) => Ok(index),
            None => Err(VectorError::VectorNotFound),
        }
    }

    fn append(&mut self, coords: &[f64]) -> VectorResult<Insertion> {
        self.reserve_one()?;
        self.data.extend_from_slice(coords);
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.ids.push(id);
        Ok(Insertion::Added(id))
    }

    /// Make room for one more row, growing by `growth_factor`
    fn reserve_one(&mut self) -> VectorResult<()> {
        if self.data.len() + self.dim <= self.data.capacity() {
            return Ok(());
        }
        let current = self.capacity();
        let target = if current == 0 {
            self.options.initial_capacity
        } else {
            current.saturating_mul(self.options.growth_factor)
        }
        .max(self.len() + 1);
        let requested = target.saturating_mul(self.dim);
        self.data
            .try_reserve_exact(requested.saturating_sub(self.data.len()))
            .map_err(|_| fail!(self.ctx, "insert", VectorError::AllocationFailure { requested }))?;
        tracing::trace!(elements = target, dim = self.dim, "grew coordinate buffer");
        Ok(())
    }
}

impl Default for VectorSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VectorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorSet")
            .field("dim", &self.dim)
            .field("len", &self.len())
            .field("ids", &self.ids)
            .finish()
    }
}
