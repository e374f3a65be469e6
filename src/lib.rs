//! # ascdraw Core
//!
//! A parser for LTspice schematics (`.asc`) and symbols (`.asy`).
//!
//! This library provides:
//! - A tolerant, line-oriented parser for schematic and symbol files
//! - Placement of symbol graphics under the eight schematic orientations
//! - Text anchor resolution for every alignment and orientation
//! - Junction detection on wire endpoints
//! - A renderer-agnostic list of draw commands
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`lexer`] - Line tokenizing and numeric field scanning
//! - [`geometry`] - Points, orientations and coordinate transforms
//! - [`text`] - Alignment names and text anchor tables
//! - [`symbol`] - Symbol definitions, libraries, caching and placement
//! - [`schematic`] - The schematic document model and its parser
//! - [`draw`] - Flattening a document into draw commands
//! - [`edit`] - Rewriting component values in schematic text
//! - [`io`] - Decoding UTF-16 and legacy encoded files
//! - [`report`] - Output formats for the command line (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! ascdraw filter.asc --library ~/LTspice/lib/sym --format commands > filter.json
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmSchematic } from 'ascdraw_core';
//!
//! const schematic = new WasmSchematic();
//! schematic.add_symbol('res', resAsy);
//! const model = JSON.parse(schematic.parse(ascText));
//! ```
//!
//! ## Parsing Model
//!
//! Parsing never aborts on a bad record. Each problem becomes a
//! [`Diagnostic`] next to the partial document in a [`Parsed`] value, and
//! the offending record is left out. The only fatal case is input with no
//! usable text.
//!
//! Symbol definitions are parsed once per library key and shared through
//! a [`SymbolCache`], which may be reused across documents and threads.

pub mod config;
pub mod draw;
pub mod edit;
pub mod error;
pub mod geometry;
pub mod io;
pub mod lexer;
pub mod schematic;
pub mod symbol;
pub mod text;

#[cfg(feature = "cli")]
pub mod report;

// Re-export main types for convenience
pub use config::DrawConfig;
pub use draw::{draw_commands, DrawCommand};
pub use edit::SchematicEditor;
pub use error::{AscError, Diagnostic, Parsed, Result};
pub use schematic::{parse_schematic, SchematicDocument, SchematicParser};
pub use symbol::{LibraryResolver, MemoryResolver, SymbolCache, SymbolResolver};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmSchematic;
