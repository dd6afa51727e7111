//! Texdown Render
//!
//! This crate provides the LaTeX rendering engine for texdown, converting
//! the structural event stream produced by a markdown parser front-end
//! into LaTeX source bytes on an output sink.
//!
//! # Overview
//!
//! - [`escape`] - The character-escaping engine and its lookup table
//! - [`attribute`] - Replay of composite attribute values
//! - [`block`], [`span`], [`text`] - The per-event handlers
//! - [`Renderer`] - The facade that owns the sink and the render state
//!
//! The renderer is a strict single-pass consumer: no buffering, no
//! lookahead, every handler runs to completion before the next event.
//!
//! # Example
//!
//! ```
//! use texdown_core::{Block, Event, TextKind};
//! use texdown_render::Renderer;
//!
//! let mut out = Vec::new();
//! let mut renderer = Renderer::new(&mut out);
//! renderer.render_event(&Event::EnterBlock(Block::Paragraph)).unwrap();
//! renderer.render_event(&Event::Text(TextKind::Normal, "50% done")).unwrap();
//! renderer.render_event(&Event::LeaveBlock(Block::Paragraph)).unwrap();
//! drop(renderer);
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "50\\% done\\par\n");
//! ```

pub mod attribute;
pub mod block;
pub mod escape;
pub mod span;
pub mod text;

pub use attribute::render_attribute;
pub use block::{enter_block, leave_block};
pub use escape::{escape_tex, needs_escape};
pub use span::{enter_span, leave_span};
pub use text::render_text;

use std::io::Write;

use log::trace;
use texdown_core::{Event, RenderState, Result};

/// LaTeX renderer over an append-only byte sink.
///
/// Owns the sink and the per-pass [`RenderState`]; one value serves one
/// pass. Separate renderers are fully independent, so any number of
/// passes can run concurrently.
pub struct Renderer<W: Write> {
    writer: W,
    state: RenderState,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer for a fresh pass.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            state: RenderState::new(),
        }
    }

    /// Consume one event: write its output and update the render state.
    pub fn render_event(&mut self, event: &Event<'_>) -> Result<()> {
        trace!("event: {event:?}");
        match event {
            Event::EnterBlock(block) => enter_block(&mut self.writer, block, &mut self.state),
            Event::LeaveBlock(block) => leave_block(&mut self.writer, block, &mut self.state),
            Event::EnterSpan(span) => enter_span(&mut self.writer, span, &mut self.state),
            Event::LeaveSpan(span) => leave_span(&mut self.writer, span, &mut self.state),
            Event::Text(kind, text) => {
                render_text(&mut self.writer, *kind, text, &self.state).map_err(Into::into)
            }
        }
    }

    /// Consume a sequence of events.
    pub fn render(&mut self, events: &[Event<'_>]) -> Result<()> {
        for event in events {
            self.render_event(event)?;
        }
        Ok(())
    }

    /// Current render state (verbatim mode, list depth, table cursor).
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// Give the sink back once the pass is finished.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use texdown_core::{Attribute, Block, Span, TextKind};

    fn render_all(events: &[Event<'_>]) -> String {
        let mut out = Vec::new();
        Renderer::new(&mut out).render(events).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_paragraph_roundtrip() {
        let output = render_all(&[
            Event::EnterBlock(Block::Document),
            Event::EnterBlock(Block::Paragraph),
            Event::Text(TextKind::Normal, "hello"),
            Event::LeaveBlock(Block::Paragraph),
            Event::LeaveBlock(Block::Document),
        ]);
        assert_eq!(output, "hello\\par\n");
    }

    #[test]
    fn test_heading_with_styled_text() {
        let output = render_all(&[
            Event::EnterBlock(Block::Heading { level: 3 }),
            Event::Text(TextKind::Normal, "AT&T "),
            Event::EnterSpan(Span::Emphasis),
            Event::Text(TextKind::Normal, "history"),
            Event::LeaveSpan(Span::Emphasis),
            Event::LeaveBlock(Block::Heading { level: 3 }),
        ]);
        assert_eq!(output, "\\section{AT\\&T \\textit{history}}\n");
    }

    #[test]
    fn test_inline_code_suppresses_escaping() {
        let output = render_all(&[
            Event::EnterSpan(Span::Code),
            Event::Text(TextKind::Normal, "a_b & c"),
            Event::LeaveSpan(Span::Code),
        ]);
        assert_eq!(output, "\\verb!a_b & c!");
    }

    #[test]
    fn test_link_label_escaped_target_raw() {
        let output = render_all(&[
            Event::EnterSpan(Span::Link {
                href: Attribute::plain("http://x.io/50%_off"),
            }),
            Event::Text(TextKind::Normal, "50%_off"),
            Event::LeaveSpan(Span::Link {
                href: Attribute::plain("http://x.io/50%_off"),
            }),
        ]);
        assert_eq!(output, "\\href{http://x.io/50%_off}{50\\%\\_off}");
    }

    #[test]
    fn test_table_two_by_two() {
        let cells = |kind: fn() -> Block<'static>, text: &'static str| {
            vec![
                Event::EnterBlock(kind()),
                Event::Text(TextKind::Normal, text),
                Event::LeaveBlock(kind()),
            ]
        };

        let mut events = vec![
            Event::EnterBlock(Block::Table { columns: 2 }),
            Event::EnterBlock(Block::TableHead),
            Event::EnterBlock(Block::TableRow),
        ];
        events.extend(cells(|| Block::HeaderCell, "A"));
        events.extend(cells(|| Block::HeaderCell, "B"));
        events.extend([
            Event::LeaveBlock(Block::TableRow),
            Event::LeaveBlock(Block::TableHead),
            Event::EnterBlock(Block::TableBody),
            Event::EnterBlock(Block::TableRow),
        ]);
        events.extend(cells(|| Block::DataCell, "1"));
        events.extend(cells(|| Block::DataCell, "2"));
        events.extend([
            Event::LeaveBlock(Block::TableRow),
            Event::LeaveBlock(Block::TableBody),
            Event::LeaveBlock(Block::Table { columns: 2 }),
        ]);

        let output = render_all(&events);
        assert_eq!(
            output,
            "\\begin{tabular}{|l|l|}\n\\hline\n\
             A & B \\\\\n\\hline\n\
             1 & 2 \\\\\n\\hline\n\
             \\end{tabular}\n"
        );
    }

    #[test]
    fn test_underline_span() {
        let output = render_all(&[
            Event::EnterSpan(Span::Underline),
            Event::Text(TextKind::Normal, "u"),
            Event::LeaveSpan(Span::Underline),
        ]);
        assert_eq!(output, "\\underline{u}");
    }

    #[test]
    fn test_verbatim_overlap_reported() {
        let mut out = Vec::new();
        let mut renderer = Renderer::new(&mut out);
        renderer
            .render_event(&Event::EnterBlock(Block::Code { lang: None }))
            .unwrap();
        let err = renderer
            .render_event(&Event::EnterSpan(Span::Math { display: false }))
            .unwrap_err();
        assert!(err.to_string().contains("verbatim"));
    }

    #[test]
    fn test_independent_renderers_do_not_share_state() {
        let mut first_out = Vec::new();
        let mut second_out = Vec::new();
        let mut first = Renderer::new(&mut first_out);
        let mut second = Renderer::new(&mut second_out);

        first
            .render_event(&Event::EnterBlock(Block::Code { lang: None }))
            .unwrap();
        // The second pass is unaffected by the first one's verbatim mode.
        second
            .render_event(&Event::Text(TextKind::Normal, "100%"))
            .unwrap();

        drop(first);
        drop(second);
        assert_eq!(String::from_utf8(second_out).unwrap(), "100\\%");
    }
}
