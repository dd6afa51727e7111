//! Raw text dispatch.
//!
//! Inside any verbatim mode every run is copied untouched; otherwise the
//! run's kind decides between passthrough, break constructs, and escaping.

use std::io::{self, Write};

use texdown_core::{RenderState, TextKind};

use crate::escape::escape_tex;

/// Handle a text event.
pub fn render_text<W: Write>(
    out: &mut W,
    kind: TextKind,
    text: &str,
    state: &RenderState,
) -> io::Result<()> {
    if state.in_verbatim() {
        return out.write_all(text.as_bytes());
    }
    match kind {
        TextKind::NullChar => Ok(()),
        TextKind::LineBreak => out.write_all(b"\\par"),
        TextKind::SoftBreak => out.write_all(b"\n"),
        TextKind::Html | TextKind::Entity => out.write_all(text.as_bytes()),
        TextKind::Normal => escape_tex(out, text),
    }
}
