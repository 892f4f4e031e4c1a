//! Vector sets for vecset
//!
//! This crate builds on [`vecset_core`] with:
//! - [`VectorSet`]: insertion-ordered, tolerance-deduplicated storage
//! - [`SetIterator`]: bidirectional cursor over live elements
//! - [`SetControl`] / [`ControlBlock`]: navigation between logical ids
//! - [`algebra`]: intersection, union, difference, symmetric difference,
//!   subset and equality
//!
//! # Example
//!
//! ```
//! use vecset_core::{Norm, Vector};
//! use vecset_primitives::{algebra, VectorSet};
//!
//! let mut a = VectorSet::new();
//! let mut b = VectorSet::new();
//! for x in [1.0, 2.0, 3.0] {
//!     a.insert(&Vector::from_vec(vec![x]).unwrap(), Norm::L1, 0.1).unwrap();
//! }
//! b.insert(&Vector::from_vec(vec![2.0]).unwrap(), Norm::L1, 0.1).unwrap();
//!
//! let common = algebra::intersection(&a, &b, Norm::L1, 0.1).unwrap();
//! assert_eq!(common.len(), 1);
//! assert!(algebra::is_subset(&b, &a, Norm::L1, 0.1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algebra;
pub mod control;
pub mod iterator;
pub mod set;

pub use control::{ControlBlock, SetControl};
pub use iterator::SetIterator;
pub use set::{ElementId, Insertion, SetOptions, VectorSet};
