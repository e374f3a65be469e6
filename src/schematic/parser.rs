//! Schematic document parser.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::config::DrawConfig;
use crate::error::{AscError, Diagnostic, Origin, Parsed, Result};
use crate::geometry::{Placement, Point};
use crate::lexer::{self, Line};
use crate::symbol::{LabelSlots, SymbolCache, SymbolInstance, SymbolResolver, Window};

use super::document::{SchematicDocument, Sheet};
use super::junction::find_junctions;
use super::record::{classify, Record};

/// Instance name used when a placement has no `InstName` attribute.
pub const UNNAMED_INSTANCE: &str = "tbd";

/// Parses schematic lines against a symbol source.
///
/// Parsing is a pure function of the lines, the resolver contents and the
/// configuration. The cache only saves work across documents.
pub struct SchematicParser<'a> {
    config: &'a DrawConfig,
    resolver: &'a dyn SymbolResolver,
    cache: &'a SymbolCache,
}

impl<'a> SchematicParser<'a> {
    /// Create a parser.
    pub fn new(
        config: &'a DrawConfig,
        resolver: &'a dyn SymbolResolver,
        cache: &'a SymbolCache,
    ) -> Self {
        Self {
            config,
            resolver,
            cache,
        }
    }

    /// Parse a whole schematic.
    ///
    /// Fails only when there is no text to parse. Everything else that goes
    /// wrong is reported as a diagnostic and the offending record or symbol
    /// instance is left out.
    pub fn parse<S: AsRef<str>>(&self, raw: &[S]) -> Result<Parsed<SchematicDocument>> {
        if raw.iter().all(|l| l.as_ref().trim().is_empty()) {
            return Err(AscError::no_usable_text("schematic"));
        }
        let lines: Vec<Line<'_>> = raw
            .iter()
            .enumerate()
            .map(|(i, l)| Line::new(i + 1, l.as_ref()))
            .collect();

        let mut pass = Pass {
            parser: self,
            lines: &lines,
            diagnostics: Vec::new(),
            reported_symbols: HashSet::new(),
        };

        let sheet = lines.get(1).and_then(|line| pass.sheet(line));
        let mut doc = SchematicDocument::empty(lines[0].text, sheet);

        for (i, line) in lines.iter().enumerate().skip(2) {
            let record = match classify(line) {
                Ok(record) => record,
                Err((record, reason)) => {
                    pass.report(Diagnostic::malformed(Origin::Document, line.number, record, reason));
                    continue;
                }
            };
            match record {
                Record::Wire(wire) => doc.wires.push(wire),
                Record::Line(l) => doc.lines.push(l),
                Record::Flag(flag) => doc.flags.push(flag),
                Record::Text(text) => doc.texts.push(text),
                Record::Symbol {
                    name,
                    position,
                    orientation,
                } => {
                    if let Some(instance) = pass.symbol(i, name, position, orientation) {
                        doc.symbols.push(instance);
                    }
                }
                Record::SymbolDetail | Record::Other => {}
            }
        }

        doc.junctions = find_junctions(&doc.wires);

        info!(
            "parsed schematic: {} wires, {} lines, {} flags, {} texts, {} symbols, {} junctions, {} diagnostics",
            doc.wires.len(),
            doc.lines.len(),
            doc.flags.len(),
            doc.texts.len(),
            doc.symbols.len(),
            doc.junctions.len(),
            pass.diagnostics.len()
        );
        Ok(Parsed::new(doc, pass.diagnostics))
    }
}

/// Parse a schematic with a private symbol cache.
pub fn parse_schematic<S: AsRef<str>>(
    lines: &[S],
    resolver: &dyn SymbolResolver,
    config: &DrawConfig,
) -> Result<Parsed<SchematicDocument>> {
    let cache = SymbolCache::new();
    SchematicParser::new(config, resolver, &cache).parse(lines)
}

/// State of one parse.
struct Pass<'p, 'l> {
    parser: &'p SchematicParser<'p>,
    lines: &'l [Line<'l>],
    diagnostics: Vec<Diagnostic>,
    /// Symbol keys whose own diagnostics were already copied in
    reported_symbols: HashSet<String>,
}

impl Pass<'_, '_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    fn sheet(&mut self, line: &Line<'_>) -> Option<Sheet> {
        let n = line.len();
        let dims = (n >= 3).then(|| line.ints(n - 2, n)).flatten();
        match dims {
            Some(d) => Some(Sheet {
                number: line.int(1).unwrap_or(1),
                width: d[0],
                height: d[1],
            }),
            None => {
                self.report(Diagnostic::malformed(
                    Origin::Document,
                    line.number,
                    "SHEET",
                    "expected width and height, text scaling defaults to 1",
                ));
                None
            }
        }
    }

    /// Handle a `SYMBOL` record at line index `index`.
    fn symbol(
        &mut self,
        index: usize,
        name: &str,
        position: Point,
        orientation: &str,
    ) -> Option<SymbolInstance> {
        let line_number = index + 1;
        let (overrides, window_lines) = self.windows(index);
        let labels = self.attributes(index + window_lines);

        let placement = Placement::from_code(position, orientation);
        if placement.orientation.is_none() {
            self.report(Diagnostic::UnknownOrientation {
                line: line_number,
                code: orientation.to_string(),
            });
        }

        let parser = self.parser;
        let Some(key) = parser.resolver.locate(name) else {
            self.report(Diagnostic::UnresolvedSymbol {
                name: name.to_string(),
                position,
                reason: "not found in symbol library".to_string(),
            });
            return None;
        };

        let definition = match parser.cache.get_or_load(&key, parser.resolver) {
            Ok(definition) => definition,
            Err(e) => {
                self.report(Diagnostic::UnresolvedSymbol {
                    name: name.to_string(),
                    position,
                    reason: e.to_string(),
                });
                return None;
            }
        };
        if self.reported_symbols.insert(key) {
            for diagnostic in &definition.diagnostics {
                self.report(diagnostic.clone());
            }
        }

        debug!("symbol {} '{}' at {} {}", name, labels.name, position, orientation);
        Some(SymbolInstance::instantiate(
            name,
            &definition.value,
            placement,
            labels,
            &overrides,
        ))
    }

    /// Collect `WINDOW` overrides following the `SYMBOL` at `index`.
    ///
    /// Returns the parsed overrides and the number of `WINDOW` lines seen.
    fn windows(&mut self, index: usize) -> (Vec<Window>, usize) {
        let lines = self.lines;
        let lookahead = self.parser.config.window_lookahead;
        let mut windows = Vec::new();
        let mut seen = 0;
        for line in lines.iter().skip(index + 1).take(lookahead) {
            match line.keyword() {
                "SYMBOL" => break,
                "WINDOW" => {
                    seen += 1;
                    match Window::parse(line) {
                        Ok(w) => windows.push(w),
                        Err(reason) => self.report(Diagnostic::malformed(
                            Origin::Document,
                            line.number,
                            "WINDOW",
                            reason,
                        )),
                    }
                }
                _ => {}
            }
        }
        (windows, seen)
    }

    /// Read the `SYMATTR` attributes of a placement, scanning the lines
    /// after index `start`. The first occurrence of each attribute wins.
    fn attributes(&self, start: usize) -> LabelSlots {
        let mut name = None;
        let mut value = None;
        let mut value2 = None;
        let mut spice_line = None;

        let scan = self
            .lines
            .iter()
            .skip(start + 1)
            .take(self.parser.config.attribute_lookahead)
            .take_while(|line| line.keyword() != "SYMBOL");
        for line in scan {
            if line.keyword() != "SYMATTR" {
                continue;
            }
            let slot = match line.field(1) {
                Some("InstName") => &mut name,
                Some("Value") => &mut value,
                Some("Value2") => &mut value2,
                Some("SpiceLine") => &mut spice_line,
                _ => continue,
            };
            slot.get_or_insert_with(|| lexer::strip_quotes(&line.rest(2)));
            if name.is_some() && value.is_some() && value2.is_some() && spice_line.is_some() {
                break;
            }
        }

        LabelSlots {
            name: name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| UNNAMED_INSTANCE.to_string()),
            value: value.unwrap_or_default(),
            value2: value2.unwrap_or_default(),
            spice_line: spice_line.unwrap_or_default(),
        }
    }
}
