//! Norms used to measure vectors and the distance between them
//!
//! Distance between two vectors is always `norm(candidate - reference)`.
//! Every supported norm is symmetric under negation, so argument order does
//! not change the result.

use crate::error::{VectorError, VectorResult};
use serde::{Deserialize, Serialize};

/// Vector norm
///
/// `Unspecified` is a sentinel: every measurement with it fails with
/// `InvalidArgument`. Set operations reject it up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Norm {
    /// Sum of absolute values
    L1,
    /// Euclidean length
    L2,
    /// Maximum absolute coordinate
    Chebyshev,
    /// No norm selected
    #[default]
    Unspecified,
}

impl Norm {
    /// The three measurable norms (for iteration)
    pub const MEASURABLE: [Norm; 3] = [Norm::L1, Norm::L2, Norm::Chebyshev];

    /// Human-readable name for display
    pub fn name(&self) -> &'static str {
        match self {
            Norm::L1 => "l1",
            Norm::L2 => "l2",
            Norm::Chebyshev => "chebyshev",
            Norm::Unspecified => "unspecified",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "l1" | "manhattan" | "first" => Some(Norm::L1),
            "l2" | "euclidean" | "second" => Some(Norm::L2),
            "chebyshev" | "linf" | "max" => Some(Norm::Chebyshev),
            _ => None,
        }
    }

    /// Check that this is not the `Unspecified` sentinel
    pub fn is_specified(&self) -> bool {
        !matches!(self, Norm::Unspecified)
    }

    /// Measure a sequence of coordinates
    ///
    /// Fails with `InfinityOverflow` as soon as the accumulation stops being
    /// finite, and with `InvalidArgument` for `Unspecified`.
    pub fn measure<I>(&self, coords: I) -> VectorResult<f64>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut acc = 0.0_f64;
        match self {
            Norm::L1 => {
                for x in coords {
                    acc += x.abs();
                    if !acc.is_finite() {
                        return Err(VectorError::InfinityOverflow { operation: "l1 norm" });
                    }
                }
            }
            Norm::L2 => {
                for x in coords {
                    acc += x * x;
                    if !acc.is_finite() {
                        return Err(VectorError::InfinityOverflow { operation: "l2 norm" });
                    }
                }
                acc = acc.sqrt();
            }
            Norm::Chebyshev => {
                for x in coords {
                    let a = x.abs();
                    if !a.is_finite() {
                        return Err(VectorError::InfinityOverflow {
                            operation: "chebyshev norm",
                        });
                    }
                    acc = acc.max(a);
                }
            }
            Norm::Unspecified => {
                return Err(VectorError::invalid("norm is unspecified"));
            }
        }
        Ok(acc)
    }

    /// Measure `norm(candidate - reference)` without building the difference
    ///
    /// # Errors
    /// - `MismatchingDimensions` if the slices differ in length
    /// - `InfinityOverflow` if a difference or the accumulation overflows
    /// - `InvalidArgument` for `Unspecified`
    pub fn distance(&self, candidate: &[f64], reference: &[f64]) -> VectorResult<f64> {
        if candidate.len() != reference.len() {
            return Err(VectorError::MismatchingDimensions {
                expected: candidate.len(),
                got: reference.len(),
            });
        }
        if !self.is_specified() {
            return Err(VectorError::invalid("norm is unspecified"));
        }
        let mut overflow = false;
        let diffs = candidate.iter().zip(reference).map(|(c, r)| {
            let d = c - r;
            if !d.is_finite() {
                overflow = true;
            }
            d
        });
        let result = self.measure(diffs);
        if overflow {
            return Err(VectorError::InfinityOverflow {
                operation: "difference",
            });
        }
        result
    }
}

impl std::fmt::Display for Norm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Validate a `(norm, tolerance)` pair
///
/// The norm must be specified and the tolerance finite and non-negative.
pub fn check_metric(norm: Norm, tol: f64) -> VectorResult<()> {
    if !norm.is_specified() {
        return Err(VectorError::invalid("norm is unspecified"));
    }
    if !tol.is_finite() || tol < 0.0 {
        return Err(VectorError::invalid(format!(
            "tolerance must be finite and non-negative, got {}",
            tol
        )));
    }
    Ok(())
}
