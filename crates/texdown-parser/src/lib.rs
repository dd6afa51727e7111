//! Texdown Parser
//!
//! Markdown front-end for texdown. The grammar work is delegated to
//! `pulldown-cmark`; this crate translates its `Start`/`End`/`Text`
//! events into the [`texdown_core::Event`] stream the renderer consumes,
//! preserving the nesting discipline the renderer relies on: every enter
//! has exactly one matching leave, text occurs only inside an open
//! container, and table cells appear only inside a table whose column
//! count was declared at table-enter time.
//!
//! # Example
//!
//! ```
//! use texdown_parser::{parse, ParseOptions};
//!
//! let mut events = Vec::new();
//! parse("# Hi", &ParseOptions::default(), |event| {
//!     events.push(format!("{event:?}"));
//!     Ok(())
//! })
//! .unwrap();
//! assert!(events.iter().any(|e| e.contains("Heading")));
//! ```

use log::debug;
use pulldown_cmark::{
    CodeBlockKind, CowStr, Event as MdEvent, Options, Parser, Tag, TagEnd,
};
use texdown_core::{Attribute, Block, Event, Result, Span, TexdownError, TextKind};

/// Parser feature toggles.
///
/// The defaults match the fixed option set of the command-line tool:
/// tables, strikethrough, and math spans all enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// GFM tables
    pub tables: bool,
    /// GFM strikethrough
    pub strikethrough: bool,
    /// `$…$` and `$$…$$` math spans
    pub math: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            math: true,
        }
    }
}

impl ParseOptions {
    fn to_pulldown(self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.math {
            options.insert(Options::ENABLE_MATH);
        }
        options
    }
}

/// Parse a markdown document and feed the resulting event stream to `sink`.
///
/// The sink borrows each event for the duration of one call only. The
/// first error a sink call returns aborts the pass and is handed back to
/// the caller; output already produced by then is undefined and should be
/// discarded.
pub fn parse<F>(input: &str, options: &ParseOptions, sink: F) -> Result<()>
where
    F: FnMut(Event<'_>) -> Result<()>,
{
    let mut front = FrontEnd {
        sink,
        code_lang: None,
        links: Vec::new(),
        images: Vec::new(),
        table_cols: 0,
        in_head: false,
    };

    // pulldown-cmark has no document envelope; the event contract does.
    front.emit(Event::EnterBlock(Block::Document))?;
    for event in Parser::new_ext(input, options.to_pulldown()) {
        front.handle(event)?;
    }
    front.emit(Event::LeaveBlock(Block::Document))
}

/// Translation state threaded through one pass.
///
/// pulldown-cmark's leave events carry no payloads, so the strings the
/// renderer wants on leave (link targets, image sources and titles, the
/// code-block language tag) are retained here between the matching
/// enter and leave.
struct FrontEnd<'a, F> {
    sink: F,
    /// Language tag of the open code block, kept for the leave event
    code_lang: Option<Option<CowStr<'a>>>,
    /// Targets of open links, innermost last
    links: Vec<CowStr<'a>>,
    /// (source, title) of open images, innermost last
    images: Vec<(CowStr<'a>, CowStr<'a>)>,
    /// Column count of the current table
    table_cols: usize,
    /// Whether the cursor is inside the table head
    in_head: bool,
}

/// An empty title on the wire means "no title".
fn optional_attr<'s>(text: &'s CowStr<'_>) -> Option<Attribute<'s>> {
    if text.is_empty() {
        None
    } else {
        Some(Attribute::plain(text))
    }
}

impl<'a, F> FrontEnd<'a, F>
where
    F: FnMut(Event<'_>) -> Result<()>,
{
    fn emit(&mut self, event: Event<'_>) -> Result<()> {
        (self.sink)(event)
    }

    fn handle(&mut self, event: MdEvent<'a>) -> Result<()> {
        match event {
            MdEvent::Start(tag) => self.start(tag),
            MdEvent::End(tag) => self.end(tag),
            MdEvent::Text(text) => self.emit(Event::Text(TextKind::Normal, &text)),
            MdEvent::Code(code) => {
                self.emit(Event::EnterSpan(Span::Code))?;
                self.emit(Event::Text(TextKind::Normal, &code))?;
                self.emit(Event::LeaveSpan(Span::Code))
            }
            MdEvent::InlineMath(math) => {
                self.emit(Event::EnterSpan(Span::Math { display: false }))?;
                self.emit(Event::Text(TextKind::Normal, &math))?;
                self.emit(Event::LeaveSpan(Span::Math { display: false }))
            }
            MdEvent::DisplayMath(math) => {
                self.emit(Event::EnterSpan(Span::Math { display: true }))?;
                self.emit(Event::Text(TextKind::Normal, &math))?;
                self.emit(Event::LeaveSpan(Span::Math { display: true }))
            }
            MdEvent::Html(html) | MdEvent::InlineHtml(html) => {
                self.emit(Event::Text(TextKind::Html, &html))
            }
            MdEvent::SoftBreak => self.emit(Event::Text(TextKind::SoftBreak, "\n")),
            MdEvent::HardBreak => self.emit(Event::Text(TextKind::LineBreak, "\n")),
            MdEvent::Rule => {
                self.emit(Event::EnterBlock(Block::ThematicBreak))?;
                self.emit(Event::LeaveBlock(Block::ThematicBreak))
            }
            // Footnotes, task lists and metadata are never enabled.
            other => {
                debug!("ignoring markdown event from a disabled extension: {other:?}");
                Ok(())
            }
        }
    }

    fn start(&mut self, tag: Tag<'a>) -> Result<()> {
        match tag {
            Tag::Paragraph => self.emit(Event::EnterBlock(Block::Paragraph)),
            Tag::Heading { level, .. } => self.emit(Event::EnterBlock(Block::Heading {
                level: level as u8,
            })),
            Tag::BlockQuote(_) => self.emit(Event::EnterBlock(Block::Quote)),
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang),
                    _ => None,
                };
                self.emit(Event::EnterBlock(Block::Code {
                    lang: lang.as_deref().map(Attribute::plain),
                }))?;
                self.code_lang = Some(lang);
                Ok(())
            }
            Tag::HtmlBlock => self.emit(Event::EnterBlock(Block::HtmlBlock)),
            Tag::List(None) => self.emit(Event::EnterBlock(Block::BulletList)),
            Tag::List(Some(_)) => self.emit(Event::EnterBlock(Block::OrderedList)),
            Tag::Item => self.emit(Event::EnterBlock(Block::Item)),
            Tag::Table(alignments) => {
                self.table_cols = alignments.len();
                self.emit(Event::EnterBlock(Block::Table {
                    columns: alignments.len(),
                }))
            }
            Tag::TableHead => {
                // Header cells sit in a row of their own.
                self.in_head = true;
                self.emit(Event::EnterBlock(Block::TableHead))?;
                self.emit(Event::EnterBlock(Block::TableRow))
            }
            Tag::TableRow => self.emit(Event::EnterBlock(Block::TableRow)),
            Tag::TableCell => {
                if self.in_head {
                    self.emit(Event::EnterBlock(Block::HeaderCell))
                } else {
                    self.emit(Event::EnterBlock(Block::DataCell))
                }
            }
            Tag::Emphasis => self.emit(Event::EnterSpan(Span::Emphasis)),
            Tag::Strong => self.emit(Event::EnterSpan(Span::Strong)),
            Tag::Strikethrough => self.emit(Event::EnterSpan(Span::Strikethrough)),
            Tag::Link { dest_url, .. } => {
                self.emit(Event::EnterSpan(Span::Link {
                    href: Attribute::plain(&dest_url),
                }))?;
                self.links.push(dest_url);
                Ok(())
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.emit(Event::EnterSpan(Span::Image {
                    src: Attribute::plain(&dest_url),
                    title: optional_attr(&title),
                }))?;
                self.images.push((dest_url, title));
                Ok(())
            }
            other => {
                debug!("ignoring markdown block from a disabled extension: {other:?}");
                Ok(())
            }
        }
    }

    fn end(&mut self, tag: TagEnd) -> Result<()> {
        match tag {
            TagEnd::Paragraph => self.emit(Event::LeaveBlock(Block::Paragraph)),
            TagEnd::Heading(level) => self.emit(Event::LeaveBlock(Block::Heading {
                level: level as u8,
            })),
            TagEnd::BlockQuote(_) => self.emit(Event::LeaveBlock(Block::Quote)),
            TagEnd::CodeBlock => {
                let lang = self.code_lang.take().ok_or_else(|| {
                    TexdownError::Parse("code block leave without matching enter".into())
                })?;
                self.emit(Event::LeaveBlock(Block::Code {
                    lang: lang.as_deref().map(Attribute::plain),
                }))
            }
            TagEnd::HtmlBlock => self.emit(Event::LeaveBlock(Block::HtmlBlock)),
            TagEnd::List(false) => self.emit(Event::LeaveBlock(Block::BulletList)),
            TagEnd::List(true) => self.emit(Event::LeaveBlock(Block::OrderedList)),
            TagEnd::Item => self.emit(Event::LeaveBlock(Block::Item)),
            TagEnd::Table => {
                let columns = self.table_cols;
                self.table_cols = 0;
                self.emit(Event::LeaveBlock(Block::TableBody))?;
                self.emit(Event::LeaveBlock(Block::Table { columns }))
            }
            TagEnd::TableHead => {
                self.in_head = false;
                self.emit(Event::LeaveBlock(Block::TableRow))?;
                self.emit(Event::LeaveBlock(Block::TableHead))?;
                self.emit(Event::EnterBlock(Block::TableBody))
            }
            TagEnd::TableRow => self.emit(Event::LeaveBlock(Block::TableRow)),
            TagEnd::TableCell => {
                if self.in_head {
                    self.emit(Event::LeaveBlock(Block::HeaderCell))
                } else {
                    self.emit(Event::LeaveBlock(Block::DataCell))
                }
            }
            TagEnd::Emphasis => self.emit(Event::LeaveSpan(Span::Emphasis)),
            TagEnd::Strong => self.emit(Event::LeaveSpan(Span::Strong)),
            TagEnd::Strikethrough => self.emit(Event::LeaveSpan(Span::Strikethrough)),
            TagEnd::Link => {
                let href = self.links.pop().ok_or_else(|| {
                    TexdownError::Parse("link leave without matching enter".into())
                })?;
                self.emit(Event::LeaveSpan(Span::Link {
                    href: Attribute::plain(&href),
                }))
            }
            TagEnd::Image => {
                let (src, title) = self.images.pop().ok_or_else(|| {
                    TexdownError::Parse("image leave without matching enter".into())
                })?;
                self.emit(Event::LeaveSpan(Span::Image {
                    src: Attribute::plain(&src),
                    title: optional_attr(&title),
                }))
            }
            other => {
                debug!("ignoring markdown block end from a disabled extension: {other:?}");
                Ok(())
            }
        }
    }
}
