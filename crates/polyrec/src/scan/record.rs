//! Point and polygon record parsers.
//!
//! Grammar, one record per line:
//!
//! ```text
//! <N> (x1;y1) (x2;y2) ... (xN;yN)
//! ```
//!
//! `N` is a decimal integer >= 3 and exactly `N` point tokens must follow on
//! the same line. Blanks may surround delimiters but never appear inside an
//! integer literal. Every failure invalidates the whole record; points
//! collected so far are discarded.

use std::str::FromStr;

use super::cursor::Cursor;
use crate::error::ParseError;
use crate::geom::{Point, Polygon};

/// Policy for non-blank content after the last declared point.
///
/// The lenient default leaves trailing content unconsumed for the caller to
/// interpret; `Reject` fails the record instead. Both interpretations exist
/// in the wild for this grammar, so the choice is configuration, not a bug
/// fix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Trailing {
    #[default]
    Ignore,
    Reject,
}

/// Scanner configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScanCfg {
    pub trailing: Trailing,
}

/// Parse one `(x;y)` point token at the cursor.
///
/// On success the cursor sits past the closing parenthesis. On failure the
/// cursor position within the record is unspecified; the caller treats the
/// enclosing record as failed and resynchronizes by line.
pub fn parse_point(cur: &mut Cursor) -> Result<Point, ParseError> {
    cur.skip_blanks();
    if !cur.delimiter(b'(') {
        return Err(ParseError::MalformedPoint);
    }
    cur.skip_blanks();
    let x = cur.integer().ok_or(ParseError::MalformedPoint)?;
    cur.skip_blanks();
    if !cur.delimiter(b';') {
        return Err(ParseError::MalformedPoint);
    }
    cur.skip_blanks();
    let y = cur.integer().ok_or(ParseError::MalformedPoint)?;
    cur.skip_blanks();
    if !cur.delimiter(b')') {
        return Err(ParseError::MalformedPoint);
    }
    Ok(Point::new(x, y))
}

/// Parse one polygon record at the cursor.
///
/// Reads the declared vertex count, then exactly that many points, checking
/// for the line end before each one. On success the cursor sits after the
/// last point; trailing content on the line is handled per
/// [`ScanCfg::trailing`].
pub fn parse_polygon(cur: &mut Cursor, cfg: ScanCfg) -> Result<Polygon, ParseError> {
    cur.skip_blanks();
    let declared = cur.integer().ok_or(ParseError::MalformedCount)?;
    if declared < 3 {
        return Err(ParseError::VertexCountTooSmall);
    }
    let declared = declared as usize;
    // The count is untrusted input; cap the up-front reservation.
    let mut points = Vec::with_capacity(declared.min(1024));
    while points.len() < declared {
        cur.skip_blanks();
        if cur.at_line_end() {
            return Err(ParseError::InsufficientPoints);
        }
        points.push(parse_point(cur)?);
    }
    if cfg.trailing == Trailing::Reject {
        cur.skip_blanks();
        if !cur.at_line_end() {
            return Err(ParseError::TrailingContent);
        }
    }
    Ok(Polygon::new(points))
}

/// Iterator over the polygon records of a multi-line stream.
///
/// Yields one `Result` per non-blank line and resynchronizes to the next
/// line after every record, so a failure leaves later records parseable.
/// Skip-and-continue versus abort is the caller's call.
#[derive(Clone, Debug)]
pub struct RecordReader<'a> {
    cur: Cursor<'a>,
    cfg: ScanCfg,
}

impl<'a> RecordReader<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self::with_cfg(input, ScanCfg::default())
    }

    #[inline]
    pub fn with_cfg(input: &'a str, cfg: ScanCfg) -> Self {
        Self {
            cur: Cursor::new(input),
            cfg,
        }
    }
}

impl Iterator for RecordReader<'_> {
    type Item = Result<Polygon, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.cur.skip_blanks();
            if self.cur.is_eof() {
                return None;
            }
            if !self.cur.at_line_end() {
                break;
            }
            self.cur.skip_line();
        }
        let parsed = parse_polygon(&mut self.cur, self.cfg);
        self.cur.skip_line();
        Some(parsed)
    }
}

impl FromStr for Point {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        parse_point(&mut Cursor::new(s))
    }
}

impl FromStr for Polygon {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        parse_polygon(&mut Cursor::new(s), ScanCfg::default())
    }
}
