//! Symbol definition parser.

use tracing::{debug, warn};

use crate::error::{Diagnostic, Origin, Parsed};
use crate::lexer::Line;

use super::definition::{Primitive, SymbolDefinition};
use super::record::{classify, record_name, SymbolRecord};

/// Parse the lines of one symbol file.
///
/// Never fails as a whole: records that cannot be read are skipped with a
/// [`Diagnostic::MalformedLine`]. Line numbers in diagnostics refer to the
/// file as given, empty lines included.
pub fn parse_symbol<S: AsRef<str>>(lines: &[S], key: &str) -> Parsed<SymbolDefinition> {
    let mut diagnostics = Vec::new();
    let mut records = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = Line::new(i + 1, raw.as_ref());
        if line.is_empty() {
            continue;
        }
        match classify(&line) {
            Ok(record) => records.push(record),
            Err(reason) => {
                let diagnostic = Diagnostic::malformed(
                    Origin::Symbol(key.to_string()),
                    line.number,
                    record_name(line.keyword()),
                    reason,
                );
                warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
            }
        }
    }

    let mut definition = SymbolDefinition {
        key: key.to_string(),
        ..Default::default()
    };

    let mut iter = records.into_iter().peekable();
    while let Some(record) = iter.next() {
        let primitive = match record {
            SymbolRecord::SymbolType(t) => {
                definition.symbol_type = Some(t);
                continue;
            }
            SymbolRecord::SymAttr { name, value } => {
                definition.attributes.entry(name).or_insert(value);
                continue;
            }
            SymbolRecord::Line { start, end, style } => Primitive::Line { start, end, style },
            SymbolRecord::Circle { bounds } => Primitive::Arc {
                bounds,
                sweep: None,
                style: Default::default(),
            },
            SymbolRecord::Arc {
                bounds,
                sweep,
                style,
            } => Primitive::Arc {
                bounds,
                sweep: Some(sweep),
                style,
            },
            SymbolRecord::Rectangle { corners } => Primitive::Rectangle { corners },
            SymbolRecord::Window(w) => Primitive::Window(w),
            SymbolRecord::Text {
                position,
                alignment,
                font_size,
                text,
            } => Primitive::Text {
                position,
                alignment,
                font_size,
                text,
            },
            SymbolRecord::Pin {
                position,
                alignment,
                offset,
            } => {
                // Only named pins are drawn
                let name = match iter.peek() {
                    Some(SymbolRecord::PinAttr { name, value }) if name == "PinName" => {
                        value.clone()
                    }
                    _ => {
                        debug!("{}: pin at {} has no PinName, skipped", key, position);
                        continue;
                    }
                };
                Primitive::Pin {
                    position,
                    name,
                    alignment,
                    offset,
                }
            }
            SymbolRecord::PinAttr { .. } | SymbolRecord::Ignored => continue,
        };
        definition.primitives.push(primitive);
    }

    debug!(
        "parsed symbol {}: {} primitives, {} pins",
        key,
        definition.primitives.len(),
        definition.pin_count()
    );
    Parsed::new(definition, diagnostics)
}
