//! Bidirectional cursor over the live elements of a set
//!
//! A [`SetIterator`] is positioned at one logical id and caches a copy of
//! that element's coordinates. It borrows its set for its whole lifetime, so
//! the cache cannot go stale.
//!
//! Steps past either end fail with `InvalidArgument` and leave the iterator
//! on the last position it reached.

use crate::control::{ControlBlock, SetControl};
use crate::set::{ElementId, VectorSet};
use vecset_core::{fail, Vector, VectorError, VectorResult};

/// Cursor positioned at one live element
#[derive(Clone)]
pub struct SetIterator<'a> {
    id: ElementId,
    cached: Vector,
    control: ControlBlock<'a>,
}

impl<'a> SetIterator<'a> {
    pub(crate) fn new(control: ControlBlock<'a>, id: ElementId, cached: Vector) -> Self {
        SetIterator {
            id,
            cached,
            control,
        }
    }

    /// Logical id of the current element
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Set being iterated
    pub fn set(&self) -> &'a VectorSet {
        self.control.set()
    }

    /// Advance `steps` elements
    ///
    /// # Errors
    /// - `InvalidArgument` if the end is reached first; the iterator stays on
    ///   the last element it reached
    pub fn next(&mut self, steps: usize) -> VectorResult<()> {
        for _ in 0..steps {
            let id = self.control.next_after(self.id)?;
            self.move_to(id)?;
        }
        Ok(())
    }

    /// Step back `steps` elements
    ///
    /// # Errors
    /// - `InvalidArgument` if the beginning is reached first
    pub fn previous(&mut self, steps: usize) -> VectorResult<()> {
        for _ in 0..steps {
            let id = self.control.previous_before(self.id)?;
            self.move_to(id)?;
        }
        Ok(())
    }

    /// Copy of this iterator advanced by `steps`
    ///
    /// A failed step is reported and the copy stops where it was; `self` is
    /// never modified.
    pub fn get_next(&self, steps: usize) -> Self {
        let mut it = self.clone();
        let _ = it.next(steps);
        it
    }

    /// Copy of this iterator moved back by `steps`
    pub fn get_previous(&self, steps: usize) -> Self {
        let mut it = self.clone();
        let _ = it.previous(steps);
        it
    }

    /// True at the first live element
    pub fn is_begin(&self) -> bool {
        self.control.is_first(self.id)
    }

    /// True at the last live element
    pub fn is_end(&self) -> bool {
        self.control.is_last(self.id)
    }

    /// Cached coordinates of the current element
    pub fn vector(&self) -> &Vector {
        &self.cached
    }

    /// Independent copy of the current element
    pub fn vector_copy(&self) -> Vector {
        self.cached.clone()
    }

    /// Copy the current element into `out`
    ///
    /// # Errors
    /// - `InvalidArgument` if `out` has a different dimension
    pub fn vector_into(&self, out: &mut Vector) -> VectorResult<()> {
        if out.dim() != self.cached.dim() {
            return Err(fail!(
                self.cached.context(),
                "vector_into",
                VectorError::invalid(format!(
                    "destination has dimension {}, element has {}",
                    out.dim(),
                    self.cached.dim()
                ))
            ));
        }
        out.copy_from(&self.cached)
    }

    fn move_to(&mut self, id: ElementId) -> VectorResult<()> {
        self.control.load(id, &mut self.cached)?;
        self.id = id;
        Ok(())
    }
}

impl PartialEq for SetIterator<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SetIterator<'_> {}

impl std::fmt::Debug for SetIterator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetIterator")
            .field("id", &self.id)
            .field("vector", &self.cached)
            .finish()
    }
}
