//! Record scanning: cursor-driven, fail-fast, resumable per record.
//!
//! Purpose
//! - Parse the textual record grammar `<N> (x1;y1) ... (xN;yN)` into
//!   [`Polygon`](crate::geom::Polygon) values, one record per line.
//! - Keep record outcomes independent: a failed record never disturbs
//!   earlier results, and [`RecordReader`] resynchronizes to the next line
//!   so later records can still succeed.
//!
//! Why an explicit cursor
//! - The scanner returns tagged `Result`s instead of mutating an ambient
//!   fail state; callers check the returned value, never a flag. After a
//!   failure the cursor position within the record is unspecified; recovery
//!   is always "skip to the next line".

mod cursor;
mod record;

pub use cursor::Cursor;
pub use record::{parse_point, parse_polygon, RecordReader, ScanCfg, Trailing};
