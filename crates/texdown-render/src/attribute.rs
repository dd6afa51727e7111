//! Composite attribute rendering.
//!
//! Link targets, image sources, and code-block language tags arrive as
//! ordered typed sub-runs rather than plain strings. Each run is replayed
//! according to its kind, except in raw mode where the whole value is
//! emitted untouched.

use std::io::{self, Write};

use texdown_core::{Attribute, RenderState, TextKind, Verbatim};

use crate::escape::escape_tex;

/// Replay an attribute value under the current verbatim mode.
///
/// In [`Verbatim::RawAttribute`] mode every sub-run is emitted
/// byte-for-byte regardless of its kind; link and image targets must not
/// be LaTeX-escaped. Otherwise null runs vanish, entities pass through
/// uninterpreted, and everything else goes through the escaper.
pub fn render_attribute<W: Write>(
    out: &mut W,
    attr: &Attribute<'_>,
    state: &RenderState,
) -> io::Result<()> {
    for part in attr.parts() {
        if state.verbatim == Some(Verbatim::RawAttribute) {
            out.write_all(part.text.as_bytes())?;
            continue;
        }
        match part.kind {
            TextKind::NullChar => {}
            TextKind::Entity => out.write_all(part.text.as_bytes())?,
            _ => escape_tex(out, part.text)?,
        }
    }
    Ok(())
}
