//! Render state for one markdown-to-LaTeX pass.
//!
//! The [`RenderState`] struct carries the small amount of mutable context
//! the event handlers need to keep the output context-correct: the active
//! verbatim mode, the list nesting depth, and the table column cursor.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TexdownError};

/// Active verbatim mode: text is copied to output without escaping.
///
/// Code blocks, inline code, and math spans never nest in valid input, so
/// a single active mode is tracked rather than a stack. Entering a mode
/// while another is active is an upstream contract violation and is
/// reported as an error instead of silently overwriting the old mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verbatim {
    /// Inside a fenced or indented code block
    CodeBlock,
    /// Inside an inline code span
    InlineCode,
    /// Inside an inline or display math span
    Math,
    /// Replaying a link or image target that must not be escaped
    RawAttribute,
}

impl std::fmt::Display for Verbatim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verbatim::CodeBlock => write!(f, "code block"),
            Verbatim::InlineCode => write!(f, "inline code"),
            Verbatim::Math => write!(f, "math"),
            Verbatim::RawAttribute => write!(f, "raw attribute"),
        }
    }
}

/// Mutable context for a single render pass.
///
/// One instance lives for exactly one pass and is owned by the renderer
/// driving it. Independent passes get independent state, so any number of
/// renders can run concurrently.
///
/// # Example
///
/// ```
/// use texdown_core::{RenderState, Verbatim};
///
/// let mut state = RenderState::new();
/// state.enter_verbatim(Verbatim::CodeBlock).unwrap();
/// assert!(state.in_verbatim());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    /// Active verbatim mode, `None` while escaping is in effect
    pub verbatim: Option<Verbatim>,
    /// List nesting depth; nonzero suppresses paragraph breaks
    pub list_depth: usize,
    /// Position within the current table row
    pub table_col: usize,
    /// Column count declared by the current table
    pub table_cols: usize,
}

impl RenderState {
    /// Create state for a fresh render pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a verbatim mode.
    ///
    /// Fails if a mode is already active: code blocks, inline code, and
    /// math spans cannot overlap in well-formed input.
    pub fn enter_verbatim(&mut self, mode: Verbatim) -> Result<()> {
        match self.verbatim {
            Some(active) => Err(TexdownError::Render(format!(
                "cannot enter {mode} verbatim mode while {active} is active"
            ))),
            None => {
                self.verbatim = Some(mode);
                Ok(())
            }
        }
    }

    /// Leave the active verbatim mode.
    pub fn leave_verbatim(&mut self) {
        self.verbatim = None;
    }

    /// True while any verbatim mode is active.
    pub fn in_verbatim(&self) -> bool {
        self.verbatim.is_some()
    }

    /// Advance the table cell cursor, wrapping at the declared column
    /// count. The cursor sits at zero after the last cell of a row, which
    /// is what suppresses the trailing column separator.
    pub fn advance_column(&mut self) {
        self.table_col += 1;
        if self.table_col == self.table_cols {
            self.table_col = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim_display() {
        assert_eq!(Verbatim::CodeBlock.to_string(), "code block");
        assert_eq!(Verbatim::InlineCode.to_string(), "inline code");
        assert_eq!(Verbatim::Math.to_string(), "math");
        assert_eq!(Verbatim::RawAttribute.to_string(), "raw attribute");
    }

    #[test]
    fn test_enter_and_leave_verbatim() {
        let mut state = RenderState::new();
        assert!(!state.in_verbatim());

        state.enter_verbatim(Verbatim::Math).unwrap();
        assert_eq!(state.verbatim, Some(Verbatim::Math));

        state.leave_verbatim();
        assert!(!state.in_verbatim());
    }

    #[test]
    fn test_verbatim_overlap_is_an_error() {
        let mut state = RenderState::new();
        state.enter_verbatim(Verbatim::CodeBlock).unwrap();

        let err = state.enter_verbatim(Verbatim::Math).unwrap_err();
        assert!(matches!(err, TexdownError::Render(_)));
        // The original mode survives the failed transition.
        assert_eq!(state.verbatim, Some(Verbatim::CodeBlock));
    }

    #[test]
    fn test_column_cursor_wraps() {
        let mut state = RenderState::new();
        state.table_cols = 3;

        state.advance_column();
        assert_eq!(state.table_col, 1);
        state.advance_column();
        assert_eq!(state.table_col, 2);
        state.advance_column();
        assert_eq!(state.table_col, 0);
    }
}
