//! Kernel functions

pub mod anova;
pub mod chi_square;
pub mod columns;
pub mod conditional;
pub mod distance;
pub mod exponential;
pub mod histogram_intersection;
pub mod param;
pub mod rational;
pub mod spec;
pub mod traits;

pub use self::anova::*;
pub use self::chi_square::*;
pub use self::conditional::*;
pub use self::distance::*;
pub use self::exponential::*;
pub use self::histogram_intersection::*;
pub use self::rational::*;
pub use self::spec::*;
pub use self::traits::*;
