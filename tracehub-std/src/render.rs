//! Two-phase message rendering.
//!
//! The final length of a formatted message is unknown until it has been
//! formatted, so rendering first targets a fixed stack buffer while counting
//! the length the full text needs:
//!
//! 1. If everything fit, the stack buffer is delivered as is.
//! 2. Otherwise a heap buffer of exactly the required length is reserved and
//!    the message is formatted again into it.
//! 3. If that reservation fails (or the caller's heap limit forbids it), the
//!    truncated stack content is delivered instead.
//!
//! No step reports an error. A `Display` impl that fails halfway yields the
//! text produced up to that point.

use std::fmt::{self, Write};

/// How a message ended up being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The whole message fit in the stack buffer.
    Inline {
        /// Rendered length in bytes.
        len: usize,
    },
    /// The message was re-rendered into a heap buffer.
    Heap {
        /// Rendered length in bytes.
        len: usize,
    },
    /// The heap path was refused; the stack prefix was delivered.
    Truncated {
        /// Length the full message needed.
        required: usize,
        /// Length actually delivered.
        kept: usize,
    },
}

impl RenderOutcome {
    /// Length of the delivered text.
    pub fn delivered_len(&self) -> usize {
        match *self {
            RenderOutcome::Inline { len } | RenderOutcome::Heap { len } => len,
            RenderOutcome::Truncated { kept, .. } => kept,
        }
    }

    /// Returns `true` if the delivered text is shorter than the message.
    pub fn is_truncated(&self) -> bool {
        matches!(self, RenderOutcome::Truncated { .. })
    }
}

/// Writes into a fixed buffer and counts what did not fit.
///
/// The first chunk that does not fit is cut on a char boundary and every
/// later chunk is only counted, so the kept text is always a prefix of the
/// full message.
struct StackWriter<'a> {
    buf: &'a mut [u8],
    filled: usize,
    required: usize,
    cut: bool,
}

impl<'a> StackWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            filled: 0,
            required: 0,
            cut: false,
        }
    }

    fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf[..self.filled]).unwrap_or_default()
    }
}

impl Write for StackWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.required += s.len();
        if self.cut {
            return Ok(());
        }

        let room = self.buf.len() - self.filled;
        let take = floor_char_boundary(s, room);
        self.buf[self.filled..self.filled + take].copy_from_slice(&s.as_bytes()[..take]);
        self.filled += take;
        if take < s.len() {
            self.cut = true;
        }
        Ok(())
    }
}

/// Largest index `<= max` that lies on a char boundary of `s`.
fn floor_char_boundary(s: &str, max: usize) -> usize {
    if max >= s.len() {
        return s.len();
    }
    let mut idx = max;
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Render `args` and pass the text to `deliver`.
///
/// `B` is the stack buffer size. `heap_limit` caps the heap buffer; a
/// message needing more than that is delivered truncated, exactly as if the
/// allocation had failed.
///
/// The heap buffer, if any, is dropped after `deliver` returns.
pub fn render<const B: usize, R>(
    args: fmt::Arguments<'_>,
    heap_limit: usize,
    deliver: impl FnOnce(&str) -> R,
) -> (R, RenderOutcome) {
    let mut stack = [0u8; B];
    let mut writer = StackWriter::new(&mut stack);
    let _ = writer.write_fmt(args);

    let required = writer.required;
    if !writer.cut {
        let text = writer.as_str();
        let outcome = RenderOutcome::Inline { len: text.len() };
        return (deliver(text), outcome);
    }

    match reserve(required, heap_limit) {
        Some(mut heap) => {
            let _ = heap.write_fmt(args);
            let outcome = RenderOutcome::Heap { len: heap.len() };
            (deliver(&heap), outcome)
        }
        None => {
            let text = writer.as_str();
            let outcome = RenderOutcome::Truncated {
                required,
                kept: text.len(),
            };
            (deliver(text), outcome)
        }
    }
}

fn reserve(len: usize, heap_limit: usize) -> Option<String> {
    if len > heap_limit {
        return None;
    }
    let mut heap = String::new();
    heap.try_reserve_exact(len).ok()?;
    Some(heap)
}
