//! Schematic documents.
//!
//! A schematic file starts with a version line and a `SHEET` line, followed
//! by one record per line: wires, graphical lines, net flags, free text and
//! symbol placements. A `SYMBOL` record is followed by its `WINDOW`
//! overrides and `SYMATTR` attributes, which are found by bounded
//! lookahead rather than by a grammar.

mod document;
mod junction;
mod parser;
mod record;

pub use document::{Flag, SchematicDocument, SchematicLine, SchematicText, Sheet, TextKind, Wire};
pub use junction::{find_junctions, JUNCTION_MIN_ENDPOINTS};
pub use parser::{parse_schematic, SchematicParser, UNNAMED_INSTANCE};
