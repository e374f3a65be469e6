//! ascdraw - LTspice schematic inspector
//!
//! Parses an `.asc` schematic against a symbol library and prints a
//! summary, the document model or its draw commands.
//!
//! # Usage
//!
//! ```bash
//! ascdraw filter.asc --library ~/LTspice/lib/sym --format commands > filter.json
//! ascdraw filter.asc --set R1=4k7 --sine V1:frequency=2k --write filter_edit.asc
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ascdraw_core::{
    edit::{parse_assignment, SineParameter},
    error::{AscError, Result},
    io,
    report::{self, OutputFormat},
    DrawConfig, LibraryResolver, MemoryResolver, SchematicEditor, SchematicParser, SymbolCache,
    SymbolResolver,
};

/// LTspice schematic parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the schematic file (.asc)
    #[arg(value_name = "SCHEMATIC")]
    schematic: PathBuf,

    /// Directory searched recursively for symbol files (.asy)
    #[arg(short, long, value_name = "DIR")]
    library: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,

    /// Base font size
    #[arg(long, default_value_t = ascdraw_core::config::DEFAULT_FONT_SIZE)]
    font_size: f64,

    /// Junction dot diameter
    #[arg(long, default_value_t = ascdraw_core::config::DEFAULT_JUNCTION_SIZE)]
    junction_size: f64,

    /// Replace a component value, e.g. R1=4k7
    #[arg(long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,

    /// Change one field of a SINE source, e.g. V1:amplitude=2
    #[arg(long = "sine", value_name = "NAME:PARAM=VALUE")]
    sine: Vec<String>,

    /// Write the edited schematic as UTF-16LE
    #[arg(short, long, value_name = "PATH")]
    write: Option<PathBuf>,

    /// Log parser progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DrawConfig::new()
        .with_font_size(args.font_size)
        .with_junction_size(args.junction_size);

    // Read and decode the schematic
    let lines = io::read_lines(&args.schematic)?;

    // Apply value edits
    let mut editor = SchematicEditor::new(lines);
    for assignment in &args.set {
        let (name, value) =
            parse_assignment(assignment).ok_or_else(|| invalid_argument("--set", assignment))?;
        editor.set_value(name, value)?;
    }
    for assignment in &args.sine {
        let (target, value) =
            parse_assignment(assignment).ok_or_else(|| invalid_argument("--sine", assignment))?;
        let (name, param) = target
            .split_once(':')
            .ok_or_else(|| invalid_argument("--sine", assignment))?;
        let param: SineParameter = param.parse()?;
        editor.set_sine_parameter(name, param, value)?;
    }
    if let Some(path) = &args.write {
        io::write_lines(path, editor.lines())?;
        info!("wrote {}", path.display());
    }
    let lines = editor.into_lines();

    // Resolve symbols
    let resolver: Box<dyn SymbolResolver> = match &args.library {
        Some(dir) => Box::new(LibraryResolver::new(dir)?),
        None => {
            warn!("no symbol library given, symbols will be unresolved");
            Box::new(MemoryResolver::new())
        }
    };

    // Parse and print
    let cache = SymbolCache::new();
    let parsed = SchematicParser::new(&config, resolver.as_ref(), &cache).parse(&lines)?;
    println!("{}", report::render(&parsed, &config, args.format)?);

    Ok(())
}

fn invalid_argument(flag: &str, value: &str) -> AscError {
    AscError::InvalidArgument {
        flag: flag.to_string(),
        value: value.to_string(),
    }
}
