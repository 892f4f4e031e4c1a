//! Error types for vector and set operations
//!
//! Every fallible operation returns [`VectorResult`]. Each [`VectorError`]
//! variant belongs to exactly one [`ErrorKind`], which is what the
//! diagnostics side channel receives.
//!
//! ## Error Kinds (Canonical)
//!
//! | Code | Description |
//! |------|-------------|
//! | NullReference | A required input was absent |
//! | AllocationFailure | Storage could not be reserved |
//! | MismatchingDimensions | Operand dimensions differ |
//! | InfinityOverflow | A finite operation produced a non-finite result |
//! | IndexOutOfBound | Index outside the valid range |
//! | InvalidArgument | Bad norm, tolerance, factor or position |
//! | NotANumber | An input coordinate was non-finite |
//! | VectorNotFound | No element matched under the given norm/tolerance |
//! | MemoryAliasing | Source and destination storage overlap |
//! | IoFailure | Diagnostics file could not be opened or written |
//! | Unknown | Anything else |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for vector and set operations
pub type VectorResult<T> = Result<T, VectorError>;

/// Error kind taxonomy, independent of the payload carried by [`VectorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A required input was absent
    NullReference,
    /// Storage could not be reserved
    AllocationFailure,
    /// Operand dimensions differ
    MismatchingDimensions,
    /// A finite operation produced a non-finite result
    InfinityOverflow,
    /// Index outside the valid range
    IndexOutOfBound,
    /// Bad norm, tolerance, factor or position
    InvalidArgument,
    /// An input coordinate was non-finite
    NotANumber,
    /// No element matched
    VectorNotFound,
    /// Source and destination storage overlap
    MemoryAliasing,
    /// I/O failure in a diagnostics sink
    IoFailure,
    /// Unclassified failure
    Unknown,
}

impl ErrorKind {
    /// All error kinds (for iteration)
    pub const ALL: [ErrorKind; 11] = [
        ErrorKind::NullReference,
        ErrorKind::AllocationFailure,
        ErrorKind::MismatchingDimensions,
        ErrorKind::InfinityOverflow,
        ErrorKind::IndexOutOfBound,
        ErrorKind::InvalidArgument,
        ErrorKind::NotANumber,
        ErrorKind::VectorNotFound,
        ErrorKind::MemoryAliasing,
        ErrorKind::IoFailure,
        ErrorKind::Unknown,
    ];

    /// Get the canonical error code
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NullReference => "NullReference",
            ErrorKind::AllocationFailure => "AllocationFailure",
            ErrorKind::MismatchingDimensions => "MismatchingDimensions",
            ErrorKind::InfinityOverflow => "InfinityOverflow",
            ErrorKind::IndexOutOfBound => "IndexOutOfBound",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::NotANumber => "NotANumber",
            ErrorKind::VectorNotFound => "VectorNotFound",
            ErrorKind::MemoryAliasing => "MemoryAliasing",
            ErrorKind::IoFailure => "IoFailure",
            ErrorKind::Unknown => "Unknown",
        }
    }

    /// Human-readable description written by text sinks
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::NullReference => "a required input is absent",
            ErrorKind::AllocationFailure => "problem with allocation",
            ErrorKind::MismatchingDimensions => "dimensions do not match",
            ErrorKind::InfinityOverflow => "going beyond the boundaries of double",
            ErrorKind::IndexOutOfBound => "index out of bound",
            ErrorKind::InvalidArgument => "arguments are invalid",
            ErrorKind::NotANumber => "it is not a number",
            ErrorKind::VectorNotFound => "vector not found",
            ErrorKind::MemoryAliasing => "found intersecting memory while copying instance",
            ErrorKind::IoFailure => "couldn't write/read to/from file",
            ErrorKind::Unknown => "unknown error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Errors produced by [`crate::Vector`] and the set primitives
#[derive(Debug, Error)]
pub enum VectorError {
    /// A required input was absent
    #[error("null reference: {what} is absent")]
    NullReference {
        /// Name of the missing input
        what: &'static str,
    },

    /// Storage could not be reserved
    #[error("allocation failed for {requested} coordinates")]
    AllocationFailure {
        /// Number of coordinates requested
        requested: usize,
    },

    /// Operand dimensions differ
    #[error("dimension mismatch: expected {expected}, got {got}")]
    MismatchingDimensions {
        /// Dimension required by the receiver
        expected: usize,
        /// Dimension actually supplied
        got: usize,
    },

    /// A finite operation produced a non-finite result
    #[error("{operation} overflowed to a non-finite value")]
    InfinityOverflow {
        /// Operation that overflowed
        operation: &'static str,
    },

    /// Index outside the valid range
    #[error("index {index} out of bound (len {len})")]
    IndexOutOfBound {
        /// Requested index
        index: usize,
        /// Number of valid positions
        len: usize,
    },

    /// Bad norm, tolerance, factor or position
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected
        reason: String,
    },

    /// An input coordinate was non-finite
    #[error("coordinate {index} is not a valid number ({value})")]
    NotANumber {
        /// Position of the offending coordinate
        index: usize,
        /// The rejected value
        value: f64,
    },

    /// No element matched under the given norm and tolerance
    #[error("vector not found")]
    VectorNotFound,

    /// Source and destination storage overlap
    #[error("source and destination storage overlap")]
    MemoryAliasing,

    /// I/O failure in a diagnostics sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unclassified failure
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl VectorError {
    /// Build an [`VectorError::InvalidArgument`] from any message
    pub fn invalid(reason: impl Into<String>) -> Self {
        VectorError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Get the taxonomy kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorError::NullReference { .. } => ErrorKind::NullReference,
            VectorError::AllocationFailure { .. } => ErrorKind::AllocationFailure,
            VectorError::MismatchingDimensions { .. } => ErrorKind::MismatchingDimensions,
            VectorError::InfinityOverflow { .. } => ErrorKind::InfinityOverflow,
            VectorError::IndexOutOfBound { .. } => ErrorKind::IndexOutOfBound,
            VectorError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            VectorError::NotANumber { .. } => ErrorKind::NotANumber,
            VectorError::VectorNotFound => ErrorKind::VectorNotFound,
            VectorError::MemoryAliasing => ErrorKind::MemoryAliasing,
            VectorError::Io(_) => ErrorKind::IoFailure,
            VectorError::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, VectorError::VectorNotFound)
    }
}
