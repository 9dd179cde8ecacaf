//! Byte cursor over record text.
//!
//! The cursor only moves forward, except for [`Cursor::skip_line`], the
//! explicit resynchronization step after a failed record. Blank skipping
//! never crosses a line break: records are line-delimited and the record
//! parser must see the boundary.

/// Forward cursor over the raw input.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            src: input.as_bytes(),
            pos: 0,
        }
    }

    /// Byte offset from the start of the input.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Next unconsumed byte, if any.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    /// Consume and return the next byte.
    #[inline]
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Skip spaces and tabs. Stops at line breaks and all other bytes.
    pub fn skip_blanks(&mut self) {
        while matches!(self.peek(), Some(b' ') | Some(b'\t')) {
            self.pos += 1;
        }
    }

    /// True at end of input or just before a line break.
    #[inline]
    pub fn at_line_end(&self) -> bool {
        matches!(self.peek(), None | Some(b'\n') | Some(b'\r'))
    }

    /// Advance past the next `'\n'`, or to end of input.
    ///
    /// This is the only rewind-free recovery step: after any record failure
    /// the caller resynchronizes here and continues with the next record.
    pub fn skip_line(&mut self) {
        while let Some(b) = self.bump() {
            if b == b'\n' {
                break;
            }
        }
    }

    /// Match a single-character delimiter, consuming it on success.
    ///
    /// Matching lowers both sides first, tolerating letter-substituted
    /// encodings of the punctuation; for the actual punctuation bytes this
    /// reduces to an exact match.
    pub fn delimiter(&mut self, expected: u8) -> bool {
        match self.peek() {
            Some(b) if b.to_ascii_lowercase() == expected.to_ascii_lowercase() => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Scan a signed decimal integer. No blanks are permitted inside the
    /// literal; the cursor is restored when no digits are present.
    pub fn integer(&mut self) -> Option<i64> {
        let start = self.pos;
        if matches!(self.peek(), Some(b'+') | Some(b'-')) {
            self.pos += 1;
        }
        let digits = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == digits {
            self.pos = start;
            return None;
        }
        // Out-of-range literals fail the scan rather than wrapping.
        std::str::from_utf8(&self.src[start..self.pos])
            .ok()?
            .parse()
            .ok()
    }
}
