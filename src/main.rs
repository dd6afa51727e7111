//! Texdown - a markdown to LaTeX renderer.
//!
//! This binary provides the CLI interface to the texdown library crates:
//! one render pass from an input markdown file to an output LaTeX file.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::fs;
use std::io::{BufWriter, Write};
use std::time::Instant;

use texdown_core::Result;
use texdown_parser::{parse, ParseOptions};
use texdown_render::Renderer;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    setup_logging(&cli.log_level);
    info!("Texdown v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic: one render pass from input file to output file.
fn run(cli: &Cli) -> Result<()> {
    let input = fs::read_to_string(&cli.input)?;
    debug!("read {} bytes from {}", input.len(), cli.input.display());

    let file = fs::File::create(&cli.output)?;
    let mut writer = BufWriter::new(file);

    let started = Instant::now();
    {
        let mut renderer = Renderer::new(&mut writer);
        parse(&input, &ParseOptions::default(), |event| {
            renderer.render_event(&event)
        })?;
    }
    debug!("render pass took {:.2?}", started.elapsed());

    writer.flush()?;
    debug!("wrote {}", cli.output.display());
    Ok(())
}
