//! Core types for kernel evaluation

pub mod error;
pub mod types;

pub use self::error::*;
pub use self::types::*;
