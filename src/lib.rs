//! Catalog of pairwise similarity kernels
//!
//! Every kernel turns two feature matrices (rows = samples, columns =
//! features) into the matrix of similarities between each pair of rows.

pub mod core;
pub mod kernel;

// Re-export main types for convenience
pub use crate::core::error::{KernelError, Result};
pub use crate::core::types::*;
pub use crate::kernel::*;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
