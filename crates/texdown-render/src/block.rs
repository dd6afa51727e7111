//! Block-level event handlers.
//!
//! Each handler writes the LaTeX construct for one structural event and
//! updates the render state that later events depend on.

use std::io::Write;

use texdown_core::{Block, RenderState, Result, TexdownError, Verbatim};

use crate::attribute::render_attribute;

/// Heading openers indexed by level - 1.
const HEADING_OPEN: [&str; 6] = [
    "\\title{",
    "\\chapter{",
    "\\section{",
    "\\subsection{",
    "\\subsubsection{",
    "\\paragraph{",
];

/// Handle a block-enter event.
pub fn enter_block<W: Write>(
    out: &mut W,
    block: &Block<'_>,
    state: &mut RenderState,
) -> Result<()> {
    match block {
        Block::Document => {}
        Block::Quote => out.write_all(b"\\begin{quote}\n")?,
        Block::BulletList => {
            out.write_all(b"\\begin{itemize}\n")?;
            state.list_depth += 1;
        }
        Block::OrderedList => {
            out.write_all(b"\\begin{enumerate}\n")?;
            state.list_depth += 1;
        }
        Block::Item => out.write_all(b"\\item ")?,
        Block::ThematicBreak => out.write_all(b"\\thematic\n")?,
        Block::Heading { level } => {
            let open = usize::from(*level)
                .checked_sub(1)
                .and_then(|at| HEADING_OPEN.get(at))
                .ok_or_else(|| {
                    TexdownError::Render(format!("heading level {level} out of range"))
                })?;
            out.write_all(open.as_bytes())?;
        }
        Block::Code { lang } => {
            out.write_all(b"\\begin{verbatim}")?;
            if let Some(lang) = lang {
                out.write_all(b"[language=")?;
                render_attribute(out, lang, state)?;
                out.write_all(b"]")?;
            }
            out.write_all(b"\n")?;
            state.enter_verbatim(Verbatim::CodeBlock)?;
        }
        Block::HtmlBlock => {}
        Block::Paragraph => {}
        Block::Table { columns } => {
            out.write_all(b"\\begin{tabular}{")?;
            for _ in 0..*columns {
                out.write_all(b"|l")?;
            }
            out.write_all(b"|}\n\\hline\n")?;
            state.table_cols = *columns;
            state.table_col = 0;
        }
        Block::TableHead | Block::TableBody | Block::TableRow => {}
        Block::HeaderCell | Block::DataCell => state.advance_column(),
    }
    Ok(())
}

/// Handle a block-leave event.
pub fn leave_block<W: Write>(
    out: &mut W,
    block: &Block<'_>,
    state: &mut RenderState,
) -> Result<()> {
    match block {
        Block::Document => {}
        Block::Quote => out.write_all(b"\\end{quote}\n")?,
        Block::BulletList => {
            out.write_all(b"\\end{itemize}\n")?;
            state.list_depth = state.list_depth.saturating_sub(1);
        }
        Block::OrderedList => {
            out.write_all(b"\\end{enumerate}\n")?;
            state.list_depth = state.list_depth.saturating_sub(1);
        }
        Block::Item => out.write_all(b"\n")?,
        Block::ThematicBreak => {}
        Block::Heading { .. } => out.write_all(b"}\n")?,
        Block::Code { .. } => {
            out.write_all(b"\\end{verbatim}\n")?;
            state.leave_verbatim();
        }
        Block::HtmlBlock => {}
        Block::Paragraph => {
            // Paragraphs that are list-item content delimit themselves.
            if state.list_depth == 0 {
                out.write_all(b"\\par\n")?;
            }
        }
        Block::Table { .. } => out.write_all(b"\\end{tabular}\n")?,
        Block::TableHead | Block::TableBody => {}
        Block::TableRow => out.write_all(b" \\\\\n\\hline\n")?,
        Block::HeaderCell | Block::DataCell => {
            // The cursor wrapped to zero on the row's last cell.
            if state.table_col != 0 {
                out.write_all(b" & ")?;
            }
        }
    }
    Ok(())
}
