//! Locations inside a replacement text.
//!
//! Offsets are byte positions inside one macro's replacement text, not
//! inside the header the macro came from. Replacement texts longer than
//! `u32::MAX` bytes are rejected by the lexer, so every offset fits.

use std::fmt;

/// An offset did not fit in `u32`.
#[derive(Copy, Debug, Clone, PartialEq, Eq)]
pub struct SpanError {
    pub offset: usize,
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "text offset {} does not fit in a 32-bit span", self.offset)
    }
}

impl std::error::Error for SpanError {}

/// Half-open byte range `start..end` inside a replacement text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder for values built outside any text (tests, merged nodes
    /// with no operands).
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset`; used for "expected more input" errors.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span::new(offset, offset)
    }

    /// Span of a `usize` range, failing on the first offset past `u32::MAX`.
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        let offset = |at: usize| u32::try_from(at).map_err(|_| SpanError { offset: at });
        Ok(Span::new(offset(range.start)?, offset(range.end)?))
    }

    /// Span of all of `text`.
    pub fn covering(text: &str) -> Result<Self, SpanError> {
        Self::try_from_range(0..text.len())
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span containing both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }

    /// The part of `text` this span covers, if it lies on char boundaries.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.to_range())
    }
}

/// Prints as `start..end`.
impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}
