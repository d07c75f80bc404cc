//! Low-level scanner for C macro replacement text.
//!
//! Produces `(RawTag, len)` pairs over a sentinel-terminated buffer. The
//! scanner classifies bytes into token shapes only: it does not decode
//! literals, validate escapes or suffixes, or build values. That is the job
//! of the cooking layer in `cmacro_lexer`.
//!
//! Error conditions (unterminated literals and comments, bytes that begin
//! no C token) are encoded as [`RawTag`] variants rather than `Err` values,
//! so the scanner never stops early and every byte is covered by exactly one
//! token.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
