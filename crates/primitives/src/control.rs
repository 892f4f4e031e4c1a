//! Navigation over the live ids of a set
//!
//! Iterators never touch set storage directly. They hold a [`ControlBlock`]
//! and ask it to step between logical ids and to load coordinates.

use crate::set::{ElementId, VectorSet};
use vecset_core::{fail, Vector, VectorError, VectorResult};

/// Operations an iterator needs from its set
pub trait SetControl {
    /// Smallest live id, `None` if the set is empty
    fn first(&self) -> Option<ElementId>;

    /// Largest live id, `None` if the set is empty
    fn last(&self) -> Option<ElementId>;

    /// Smallest live id strictly greater than `id`
    ///
    /// # Errors
    /// - `InvalidArgument` if `id` is at or past the last live id
    fn next_after(&self, id: ElementId) -> VectorResult<ElementId>;

    /// Greatest live id strictly less than `id`
    ///
    /// # Errors
    /// - `InvalidArgument` if `id` is at or before the first live id
    fn previous_before(&self, id: ElementId) -> VectorResult<ElementId>;

    /// True if no live id precedes `id`
    fn is_first(&self, id: ElementId) -> bool;

    /// True if no live id follows `id`
    fn is_last(&self, id: ElementId) -> bool;

    /// Copy the coordinates of live element `id` into `out`
    ///
    /// # Errors
    /// - `VectorNotFound` if `id` is not live
    /// - `MismatchingDimensions` if `out` has the wrong dimension
    fn load(&self, id: ElementId, out: &mut Vector) -> VectorResult<()>;
}

/// Control block shared by every iterator of one set
#[derive(Clone, Copy)]
pub struct ControlBlock<'a> {
    set: &'a VectorSet,
}

impl<'a> ControlBlock<'a> {
    pub(crate) fn new(set: &'a VectorSet) -> Self {
        ControlBlock { set }
    }

    /// Set this block navigates
    pub fn set(&self) -> &'a VectorSet {
        self.set
    }
}

impl SetControl for ControlBlock<'_> {
    fn first(&self) -> Option<ElementId> {
        self.set.ids().first().copied()
    }

    fn last(&self) -> Option<ElementId> {
        self.set.ids().last().copied()
    }

    fn next_after(&self, id: ElementId) -> VectorResult<ElementId> {
        let ids = self.set.ids();
        let slot = ids.partition_point(|live| *live <= id);
        ids.get(slot).copied().ok_or_else(|| {
            fail!(
                self.set.context(),
                "next",
                VectorError::invalid(format!("no element after {}", id))
            )
        })
    }

    fn previous_before(&self, id: ElementId) -> VectorResult<ElementId> {
        let ids = self.set.ids();
        let slot = ids.partition_point(|live| *live < id);
        match slot.checked_sub(1) {
            Some(prev) => Ok(ids[prev]),
            None => Err(fail!(
                self.set.context(),
                "previous",
                VectorError::invalid(format!("no element before {}", id))
            )),
        }
    }

    fn is_first(&self, id: ElementId) -> bool {
        self.first().map_or(true, |first| id <= first)
    }

    fn is_last(&self, id: ElementId) -> bool {
        self.last().map_or(true, |last| id >= last)
    }

    fn load(&self, id: ElementId, out: &mut Vector) -> VectorResult<()> {
        let coords = self
            .set
            .coordinates(id)
            .ok_or(VectorError::VectorNotFound)?;
        out.set_data(coords)
    }
}

impl std::fmt::Debug for ControlBlock<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlBlock")
            .field("first", &self.first())
            .field("last", &self.last())
            .finish()
    }
}
