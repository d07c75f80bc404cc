//! Owned, zero-terminated copy of a replacement text.
//!
//! Scanning loops stop on the `0x00` that follows the text instead of
//! comparing positions. At least [`LOOKAHEAD`] zero bytes follow the
//! terminator, so `peek()` and `peek2()` stay in bounds from any position up
//! to the terminator itself. Storage is rounded up to a multiple of [`PAD_TO`].

use crate::Cursor;

/// Storage is rounded up to a multiple of this many bytes.
const PAD_TO: usize = 64;

/// Bytes the cursor may read past its position (`peek2`).
const LOOKAHEAD: usize = 2;

/// A replacement text followed by at least three zero bytes.
///
/// ```text
/// bytes:  1 < < 4 \0 \0 \0 ... \0
/// index:  0       len        >= len + 2, (multiple of 64) - 1
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
    len: u32,
}

impl SourceBuffer {
    /// Texts over `u32::MAX` bytes clamp `len`; the lexer refuses them first.
    pub fn new(source: &str) -> Self {
        let text = source.as_bytes();
        let padded = (text.len() + 1 + LOOKAHEAD).next_multiple_of(PAD_TO);
        let mut bytes = Vec::with_capacity(padded);
        bytes.extend_from_slice(text);
        bytes.resize(padded, 0);

        SourceBuffer {
            bytes,
            len: u32::try_from(text.len()).unwrap_or(u32::MAX),
        }
    }

    /// The replacement text alone.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Text, terminator and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.bytes, self.len)
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
