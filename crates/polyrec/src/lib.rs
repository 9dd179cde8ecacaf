//! Polygon records: strict textual parsing and exact plane geometry.
//!
//! Purpose
//! - Parse newline-terminated polygon records of the form
//!   `<N> (x1;y1) (x2;y2) ... (xN;yN)` under a fail-fast grammar, with
//!   per-record recovery in multi-record streams.
//! - Derive scalar and boolean facts from the parsed polygons: area by two
//!   algorithms, vertex count, rectangle classification, approximate
//!   (bounding-box) intersection, and predicate-filtered area folds.
//!
//! Design notes
//! - Parsing is cursor-driven and returns explicit `Result`s; there is no
//!   ambient fail state. A record either yields a fully populated `Polygon`
//!   or nothing at all.
//! - Geometry operations are pure functions of their inputs. Preconditions
//!   (no zero-length edge vectors) are documented, not guarded.

pub mod error;
pub mod geom;
pub mod scan;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::ParseError;
pub use geom::{Point, Polygon, Triangle};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::ParseError;
    pub use crate::geom::kernel::{area, area_triangulated, cos_between, edge, signed_area};
    pub use crate::geom::predicates::{bounding_box, is_intersect, is_rectangle};
    pub use crate::geom::rand::{draw_convex, draw_rectangle, draw_triangle, LatticeCfg, ReplayToken};
    pub use crate::geom::reduce::{add_area, add_area_if};
    pub use crate::geom::{Point, Polygon, Triangle};
    pub use crate::scan::{parse_point, parse_polygon, Cursor, RecordReader, ScanCfg, Trailing};
    pub use nalgebra::Vector2 as Vec2;
}
