//! Parse failures for polygon records.

use thiserror::Error;

/// Ways a polygon record can fail to parse.
///
/// Every failure invalidates the whole record; no partially populated
/// `Polygon` is ever handed to the caller. Failures never affect records
/// already parsed from the same stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The leading vertex count is missing or not a decimal integer.
    #[error("malformed vertex count")]
    MalformedCount,

    /// The declared vertex count is below 3.
    #[error("vertex count below 3")]
    VertexCountTooSmall,

    /// A point token does not match the `(x;y)` grammar.
    #[error("malformed point token")]
    MalformedPoint,

    /// The line ended before the declared number of points was read.
    #[error("fewer points than declared before end of line")]
    InsufficientPoints,

    /// Non-blank content after the last declared point.
    ///
    /// Only produced under [`Trailing::Reject`](crate::scan::Trailing); the
    /// default policy leaves trailing content to the caller.
    #[error("unexpected content after the last point")]
    TrailingContent,
}
