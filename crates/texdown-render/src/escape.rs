//! LaTeX text escaping.
//!
//! A 256-entry table classifies which bytes need replacing; runs of clean
//! bytes between specials are written in one call rather than one byte at
//! a time.

use std::io::{self, Write};

/// Bytes that must be replaced before they reach LaTeX.
const SPECIALS: &[u8] = b"~^#$%&{}_\\";

/// Per-byte "needs escape" classification.
static NEEDS_ESCAPE: [bool; 256] = build_escape_table();

const fn build_escape_table() -> [bool; 256] {
    let mut table = [false; 256];
    let mut i = 0;
    while i < SPECIALS.len() {
        table[SPECIALS[i] as usize] = true;
        i += 1;
    }
    table
}

/// True if `byte` has a LaTeX replacement sequence.
pub fn needs_escape(byte: u8) -> bool {
    NEEDS_ESCAPE[byte as usize]
}

/// Write `text` with LaTeX specials replaced and everything else intact.
///
/// Byte-oriented: the escape set is pure ASCII, so multi-byte UTF-8
/// sequences pass through untouched without being decoded.
pub fn escape_tex<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    let bytes = text.as_bytes();
    let mut clean = 0;
    for (at, &byte) in bytes.iter().enumerate() {
        if !NEEDS_ESCAPE[byte as usize] {
            continue;
        }
        if at > clean {
            out.write_all(&bytes[clean..at])?;
        }
        let replacement: &[u8] = match byte {
            b'~' => b"\\~{}",
            b'^' => b"\\^{}",
            b'#' => b"\\#",
            b'$' => b"\\$",
            b'%' => b"\\%",
            b'&' => b"\\&",
            b'{' => b"\\{",
            b'}' => b"\\}",
            b'_' => b"\\_",
            _ => b"\\textbackslash",
        };
        out.write_all(replacement)?;
        clean = at + 1;
    }
    if clean < bytes.len() {
        out.write_all(&bytes[clean..])?;
    }
    Ok(())
}
