//! Core type definitions for kernel evaluation

use ndarray::Array2;
use std::fmt;

/// Dense similarity matrix of shape (rows of data_1, rows of data_2)
pub type Matrix = Array2<f64>;

/// Dimension of the feature space a kernel implicitly maps into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimensionality {
    /// A known, finite number of dimensions
    Finite(usize),
    /// Unbounded feature space (e.g. exponential-type kernels)
    Infinite,
    /// No closed form is known
    Unknown,
}

impl Dimensionality {
    /// Returns the dimension if it is finite
    pub fn as_finite(&self) -> Option<usize> {
        match self {
            Dimensionality::Finite(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Dimensionality::Infinite)
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimensionality::Finite(n) => write!(f, "{n}"),
            Dimensionality::Infinite => write!(f, "inf"),
            Dimensionality::Unknown => write!(f, "unknown"),
        }
    }
}

/// Mathematical category of a kernel
///
/// Categories are disjoint. Callers use them to decide whether a kernel
/// can be handed to a given learning algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelCategory {
    /// No restriction beyond the formula itself
    General,
    /// Histogram-type kernel built on non-negative features; the base
    /// kernels reject negative input, generalized variants lift it first
    PositiveOnly,
    /// Conditionally positive definite, not positive definite
    ConditionallyPositiveDefinite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensionality_accessors() {
        assert_eq!(Dimensionality::Finite(4).as_finite(), Some(4));
        assert_eq!(Dimensionality::Infinite.as_finite(), None);
        assert_eq!(Dimensionality::Unknown.as_finite(), None);
        assert!(Dimensionality::Infinite.is_infinite());
        assert!(!Dimensionality::Unknown.is_infinite());
    }

    #[test]
    fn test_dimensionality_display() {
        assert_eq!(Dimensionality::Finite(3).to_string(), "3");
        assert_eq!(Dimensionality::Infinite.to_string(), "inf");
        assert_eq!(Dimensionality::Unknown.to_string(), "unknown");
    }
}
