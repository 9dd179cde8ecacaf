//! Polygon entities and plane geometry.
//!
//! Purpose
//! - Hold the parsed entities (`Point`, `Polygon`, `Triangle`) and derive
//!   facts from them: two area algorithms, rectangle classification,
//!   bounding-box intersection, and area folds over collections.
//!
//! Conventions
//! - Points are integer lattice coordinates; every derived vector quantity
//!   is a transient `Vector2<f64>`.
//! - All operations here are pure functions of their inputs. Entities are
//!   never mutated after construction.

pub mod kernel;
pub mod predicates;
pub mod rand;
pub mod reduce;
mod types;

pub use types::{Point, Polygon, Triangle};

#[cfg(test)]
mod tests;
