//! Inline span event handlers.

use std::io::Write;

use texdown_core::{RenderState, Result, Span, Verbatim};

use crate::attribute::render_attribute;

/// Handle a span-enter event.
pub fn enter_span<W: Write>(out: &mut W, span: &Span<'_>, state: &mut RenderState) -> Result<()> {
    match span {
        Span::Emphasis => out.write_all(b"\\textit{")?,
        Span::Strong => out.write_all(b"\\textbf{")?,
        Span::Underline => out.write_all(b"\\underline{")?,
        Span::Link { href } => {
            out.write_all(b"\\href{")?;
            // The target bypasses escaping entirely; the label that
            // follows renders under whatever mode was active before.
            let saved = state.verbatim.take();
            state.verbatim = Some(Verbatim::RawAttribute);
            render_attribute(out, href, state)?;
            state.verbatim = saved;
            out.write_all(b"}{")?;
        }
        Span::Image { src, .. } => {
            out.write_all(b"\\begin{figure}[H]\n\\image{")?;
            render_attribute(out, src, state)?;
            out.write_all(b"}\\label{")?;
        }
        Span::Code => {
            out.write_all(b"\\verb!")?;
            state.enter_verbatim(Verbatim::InlineCode)?;
        }
        Span::Strikethrough => out.write_all(b"\\del{")?,
        Span::Math { display: false } => {
            out.write_all(b"$")?;
            state.enter_verbatim(Verbatim::Math)?;
        }
        Span::Math { display: true } => {
            out.write_all(b"$$")?;
            state.enter_verbatim(Verbatim::Math)?;
        }
        Span::WikiLink => {}
    }
    Ok(())
}

/// Handle a span-leave event.
pub fn leave_span<W: Write>(out: &mut W, span: &Span<'_>, state: &mut RenderState) -> Result<()> {
    match span {
        Span::Emphasis | Span::Strong | Span::Underline | Span::Strikethrough => {
            out.write_all(b"}")?
        }
        Span::Link { .. } => out.write_all(b"}")?,
        Span::Image { title, .. } => {
            out.write_all(b"}\n")?;
            if let Some(title) = title {
                out.write_all(b"\\caption{")?;
                render_attribute(out, title, state)?;
                out.write_all(b"}\n")?;
            }
            out.write_all(b"\\end{figure}\n")?;
        }
        Span::Code => {
            out.write_all(b"!")?;
            state.leave_verbatim();
        }
        Span::Math { display: false } => {
            out.write_all(b"$")?;
            state.leave_verbatim();
        }
        Span::Math { display: true } => {
            out.write_all(b"$$")?;
            state.leave_verbatim();
        }
        Span::WikiLink => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use texdown_core::Attribute;

    fn enter(span: &Span<'_>, state: &mut RenderState) -> String {
        let mut out = Vec::new();
        enter_span(&mut out, span, state).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn leave(span: &Span<'_>, state: &mut RenderState) -> String {
        let mut out = Vec::new();
        leave_span(&mut out, span, state).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_simple_wrappers() {
        let mut state = RenderState::new();
        assert_eq!(enter(&Span::Emphasis, &mut state), "\\textit{");
        assert_eq!(enter(&Span::Strong, &mut state), "\\textbf{");
        assert_eq!(enter(&Span::Underline, &mut state), "\\underline{");
        assert_eq!(enter(&Span::Strikethrough, &mut state), "\\del{");
        assert_eq!(leave(&Span::Emphasis, &mut state), "}");
        assert_eq!(leave(&Span::Strong, &mut state), "}");
    }

    #[test]
    fn test_link_target_is_raw() {
        let mut state = RenderState::new();
        let span = Span::Link {
            href: Attribute::plain("http://x.io/a_b&c"),
        };
        assert_eq!(enter(&span, &mut state), "\\href{http://x.io/a_b&c}{");
        // Raw mode is scoped to the target only.
        assert!(!state.in_verbatim());
        assert_eq!(leave(&span, &mut state), "}");
    }

    #[test]
    fn test_image_src_is_escaped_normally() {
        let mut state = RenderState::new();
        let span = Span::Image {
            src: Attribute::plain("img_1.png"),
            title: None,
        };
        assert_eq!(
            enter(&span, &mut state),
            "\\begin{figure}[H]\n\\image{img\\_1.png}\\label{"
        );
        assert_eq!(leave(&span, &mut state), "}\n\\end{figure}\n");
    }

    #[test]
    fn test_image_title_becomes_caption() {
        let mut state = RenderState::new();
        let span = Span::Image {
            src: Attribute::plain("img.png"),
            title: Some(Attribute::plain("A 100% caption")),
        };
        enter(&span, &mut state);
        assert_eq!(
            leave(&span, &mut state),
            "}\n\\caption{A 100\\% caption}\n\\end{figure}\n"
        );
    }

    #[test]
    fn test_inline_code_delimiters() {
        let mut state = RenderState::new();
        assert_eq!(enter(&Span::Code, &mut state), "\\verb!");
        assert_eq!(state.verbatim, Some(Verbatim::InlineCode));
        assert_eq!(leave(&Span::Code, &mut state), "!");
        assert!(!state.in_verbatim());
    }

    #[test]
    fn test_math_delimiters() {
        let mut state = RenderState::new();
        assert_eq!(enter(&Span::Math { display: false }, &mut state), "$");
        assert_eq!(state.verbatim, Some(Verbatim::Math));
        assert_eq!(leave(&Span::Math { display: false }, &mut state), "$");

        assert_eq!(enter(&Span::Math { display: true }, &mut state), "$$");
        assert_eq!(leave(&Span::Math { display: true }, &mut state), "$$");
        assert!(!state.in_verbatim());
    }

    #[test]
    fn test_wikilink_is_silent() {
        let mut state = RenderState::new();
        assert_eq!(enter(&Span::WikiLink, &mut state), "");
        assert_eq!(leave(&Span::WikiLink, &mut state), "");
    }
}
