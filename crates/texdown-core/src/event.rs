//! Structural events driving the renderer.
//!
//! A parser front-end delivers one well-formed stream of events per
//! document: enter/leave pairs for blocks and spans, and raw text runs,
//! all in document order. Every enter has exactly one matching leave, and
//! text occurs only inside a currently open block or span.
//!
//! Event payloads borrow from the producer's buffers for the duration of a
//! single handler call; the renderer retains nothing.

use serde::{Deserialize, Serialize};

/// Classification of a raw text run (also used for attribute sub-runs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextKind {
    /// Ordinary text, subject to LaTeX escaping
    Normal,
    /// Null-character placeholder, dropped from output
    NullChar,
    /// Hard line break
    LineBreak,
    /// Soft line break
    SoftBreak,
    /// Raw HTML, passed through untouched
    Html,
    /// Resolved entity, passed through untouched
    Entity,
}

impl std::fmt::Display for TextKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextKind::Normal => write!(f, "normal"),
            TextKind::NullChar => write!(f, "nullchar"),
            TextKind::LineBreak => write!(f, "linebreak"),
            TextKind::SoftBreak => write!(f, "softbreak"),
            TextKind::Html => write!(f, "html"),
            TextKind::Entity => write!(f, "entity"),
        }
    }
}

/// One typed sub-run of a composite attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrPart<'a> {
    /// How the run is treated when the attribute is replayed
    pub kind: TextKind,
    /// The raw bytes of the run
    pub text: &'a str,
}

/// A composite attribute value (URL, title, code-block language tag).
///
/// Attribute values are assembled from typed sub-runs rather than a single
/// plain string, so a value can carry literal entities next to text that
/// still wants escaping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attribute<'a> {
    parts: Vec<AttrPart<'a>>,
}

impl<'a> Attribute<'a> {
    /// Attribute consisting of a single ordinary-text run.
    pub fn plain(text: &'a str) -> Self {
        Self {
            parts: vec![AttrPart {
                kind: TextKind::Normal,
                text,
            }],
        }
    }

    /// Attribute assembled from explicit typed sub-runs.
    pub fn from_parts(parts: Vec<AttrPart<'a>>) -> Self {
        Self { parts }
    }

    /// The sub-runs, in order.
    pub fn parts(&self) -> std::slice::Iter<'_, AttrPart<'a>> {
        self.parts.iter()
    }

    /// True when the attribute carries no sub-runs at all.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Block-level structural element, with the detail the renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// The document itself; wraps the whole stream
    Document,
    /// Block quote
    Quote,
    /// Unordered (bulleted) list
    BulletList,
    /// Ordered (numbered) list
    OrderedList,
    /// One list item
    Item,
    /// Thematic break (horizontal rule)
    ThematicBreak,
    /// Heading with level 1-6
    Heading { level: u8 },
    /// Fenced or indented code block, with optional language tag
    Code { lang: Option<Attribute<'a>> },
    /// Raw HTML block; dropped as a block, its text passes through raw
    HtmlBlock,
    /// Paragraph
    Paragraph,
    /// Table with a fixed column count declared up front
    Table { columns: usize },
    /// Table header section
    TableHead,
    /// Table body section
    TableBody,
    /// One table row
    TableRow,
    /// Header cell, inside the table head
    HeaderCell,
    /// Data cell, inside the table body
    DataCell,
}

/// Inline structural element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span<'a> {
    /// Emphasis (italic)
    Emphasis,
    /// Strong emphasis (bold)
    Strong,
    /// Underline
    Underline,
    /// Hyperlink; the target is emitted raw, never escaped
    Link { href: Attribute<'a> },
    /// Image with source and optional title (rendered as a figure caption)
    Image {
        src: Attribute<'a>,
        title: Option<Attribute<'a>>,
    },
    /// Inline code
    Code,
    /// Strikethrough
    Strikethrough,
    /// Math span; `display` selects `$$ … $$` over `$ … $`
    Math { display: bool },
    /// Wiki-style link, ignored by the renderer
    WikiLink,
}

/// One structural notification from the parser front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'a> {
    /// A block element opens
    EnterBlock(Block<'a>),
    /// A block element closes
    LeaveBlock(Block<'a>),
    /// An inline element opens
    EnterSpan(Span<'a>),
    /// An inline element closes
    LeaveSpan(Span<'a>),
    /// A raw text run inside the innermost open element
    Text(TextKind, &'a str),
}
