//! Command-line interface for texdown.

use clap::Parser;
use std::path::PathBuf;

/// Texdown - a markdown to LaTeX renderer.
///
/// Reads one markdown file, runs a single render pass with tables,
/// strikethrough, and math spans enabled, and writes LaTeX source to the
/// output file.
#[derive(Parser, Debug)]
#[command(
    name = "txd",
    author = "Texdown Contributors",
    version,
    about = "Render a markdown document to LaTeX source",
    after_help = "Examples:\n  \
                  txd notes.md notes.tex\n  \
                  txd -l debug article.md article.tex"
)]
pub struct Cli {
    /// Input markdown file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output LaTeX file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_positional_paths() {
        let cli = Cli::parse_from(["txd", "in.md", "out.tex"]);
        assert_eq!(cli.input, PathBuf::from("in.md"));
        assert_eq!(cli.output, PathBuf::from("out.tex"));
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cli_requires_both_paths() {
        assert!(Cli::try_parse_from(["txd"]).is_err());
        assert!(Cli::try_parse_from(["txd", "in.md"]).is_err());
        assert!(Cli::try_parse_from(["txd", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_cli_parse_loglevel() {
        let cli = Cli::parse_from(["txd", "-l", "debug", "in.md", "out.tex"]);
        assert_eq!(cli.log_level, "debug");
    }
}
