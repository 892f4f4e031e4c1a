//! Convenient imports for vecset.
//!
//! ```
//! use vecset::prelude::*;
//!
//! let v = Vector::from_vec(vec![3.0, 4.0])?;
//! assert_eq!(v.norm(Norm::L2), 5.0);
//! # Ok::<(), vecset::Error>(())
//! ```

// Values and metrics
pub use crate::{Norm, Vector};

// Sets
pub use crate::{algebra, ElementId, Insertion, SetIterator, SetOptions, VectorSet};

// Error handling
pub use crate::{Error, ErrorKind, Result};

// Ambient collaborators
pub use crate::{Context, Diagnostics, NumberValidator};
