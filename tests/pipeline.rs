//! End-to-end tests: files on disk through parsing, drawing and editing.

use std::collections::BTreeSet;
use std::path::PathBuf;

use ascdraw_core::{
    config::LineStyle,
    draw_commands,
    error::Diagnostic,
    geometry::{Orientation, Point},
    io,
    schematic::TextKind,
    symbol::PlacedPrimitive,
    DrawCommand, DrawConfig, LibraryResolver, MemoryResolver, Parsed, SchematicDocument,
    SchematicEditor, SchematicParser, SymbolCache,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn library() -> LibraryResolver {
    LibraryResolver::new(fixture_path("sym")).expect("Fixture library should index")
}

fn parse_lines(lines: &[String]) -> Parsed<SchematicDocument> {
    let config = DrawConfig::default();
    let cache = SymbolCache::new();
    let resolver = library();
    SchematicParser::new(&config, &resolver, &cache)
        .parse(lines)
        .expect("Should parse")
}

fn parse_fixture(name: &str) -> Parsed<SchematicDocument> {
    let lines = io::read_lines(fixture_path(name)).expect("Fixture should be readable");
    parse_lines(&lines)
}

fn pin_positions(doc: &SchematicDocument, name: &str) -> BTreeSet<Point> {
    doc.symbol(name)
        .unwrap_or_else(|| panic!("Should place {}", name))
        .primitives
        .iter()
        .filter_map(|p| match p {
            PlacedPrimitive::Pin { position, .. } => Some(*position),
            _ => None,
        })
        .collect()
}

#[test]
fn test_library_indexes_nested_symbols() {
    let resolver = library();
    assert_eq!(resolver.len(), 3);
}

#[test]
fn test_parse_rc_filter() {
    let parsed = parse_fixture("rc_filter.asc");
    assert!(parsed.is_clean(), "Unexpected diagnostics: {:?}", parsed.diagnostics);

    let doc = parsed.value;
    assert_eq!(doc.wires.len(), 7);
    assert_eq!(doc.flags.len(), 3);
    assert_eq!(doc.texts.len(), 2);
    assert_eq!(doc.symbols.len(), 3);
    assert_eq!(doc.junctions, vec![Point::new(208, 80)]);

    let names: Vec<_> = doc.symbols.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["V1", "R1", "C1"]);

    let r1 = doc.symbol("R1").unwrap();
    assert_eq!(r1.orientation, Some(Orientation::R90));
    assert_eq!(r1.labels.value, "1k");
    assert_eq!(doc.symbol("V1").unwrap().labels.value, "SINE(0 1 1k)");
    assert_eq!(doc.symbol("C1").unwrap().symbol_type.as_deref(), Some("CELL"));
}

#[test]
fn test_pins_land_on_wire_ends() {
    let doc = parse_fixture("rc_filter.asc").value;

    let r1 = pin_positions(&doc, "R1");
    assert_eq!(r1, BTreeSet::from([Point::new(96, 80), Point::new(176, 80)]));

    let c1 = pin_positions(&doc, "C1");
    assert_eq!(c1, BTreeSet::from([Point::new(208, 112), Point::new(208, 176)]));

    let v1 = pin_positions(&doc, "V1");
    assert_eq!(v1, BTreeSet::from([Point::new(-16, 112), Point::new(-16, 192)]));
}

#[test]
fn test_texts_and_directives() {
    let doc = parse_fixture("rc_filter.asc").value;
    let config = DrawConfig::default();

    assert_eq!(doc.texts[0].kind, TextKind::Directive);
    assert_eq!(doc.texts[0].text, ".tran 5m");
    assert_eq!(doc.texts[1].kind, TextKind::Comment);
    assert_eq!(doc.texts[1].text, "RC low-pass\nfc = 1.6 kHz");
    assert!(doc.has_simulation_directive(&config));
}

#[test]
fn test_draw_rc_filter() {
    let doc = parse_fixture("rc_filter.asc").value;
    let commands = draw_commands(&doc, &DrawConfig::default());

    let grounds = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Ground { .. }))
        .count();
    assert_eq!(grounds, 2);

    let junctions: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Junction { position, .. } => Some(*position),
            _ => None,
        })
        .collect();
    assert_eq!(junctions, vec![Point::new(208, 80)]);

    // The voltage source's circle
    assert!(commands
        .iter()
        .any(|c| matches!(c, DrawCommand::Ellipse { .. })));

    let texts: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
        .collect();
    for expected in ["OUT", "V1", "SINE(0 1 1k)", "R1", "1k", "C1", "100n", ".tran 5m"] {
        assert!(texts.contains(&expected), "Missing text {}", expected);
    }
}

#[test]
fn test_styled_lines_and_malformed_record() {
    let parsed = parse_fixture("styled_lines.asc");

    assert_eq!(parsed.diagnostics.len(), 1);
    assert!(matches!(
        &parsed.diagnostics[0],
        Diagnostic::MalformedLine { line: 5, record: "LINE", .. }
    ));

    let doc = parsed.value;
    let styles: Vec<_> = doc.lines.iter().map(|l| l.style).collect();
    assert_eq!(styles, vec![LineStyle::Dashed, LineStyle::Solid]);
    assert_eq!(doc.wires.len(), 1);
    assert_eq!(doc.text_scaling_factor, 1.0);
}

#[test]
fn test_utf16_file_parses_the_same() {
    let lines = io::read_lines(fixture_path("rc_filter.asc")).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rc_filter_utf16.asc");
    io::write_lines(&path, &lines).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..4], &[b'V', 0, b'e', 0]);

    let decoded = io::read_lines(&path).unwrap();
    assert_eq!(parse_lines(&decoded), parse_lines(&lines));
}

#[test]
fn test_edit_then_reparse() {
    let lines = io::read_lines(fixture_path("rc_filter.asc")).unwrap();
    let mut editor = SchematicEditor::new(lines);
    editor.set_value("R1", "10k").unwrap();
    editor
        .set_sine_parameter("V1", "frequency".parse().unwrap(), "2k")
        .unwrap();

    let doc = parse_lines(editor.lines()).value;
    assert_eq!(doc.symbol("R1").unwrap().labels.value, "10k");
    assert_eq!(doc.symbol("V1").unwrap().labels.value, "SINE(0 1 2k)");
    assert_eq!(doc.symbol("C1").unwrap().labels.value, "100n");
}

#[test]
fn test_without_library_symbols_are_unresolved() {
    let lines = io::read_lines(fixture_path("rc_filter.asc")).unwrap();
    let config = DrawConfig::default();
    let cache = SymbolCache::new();
    let resolver = MemoryResolver::new();
    let parsed = SchematicParser::new(&config, &resolver, &cache)
        .parse(&lines)
        .unwrap();

    let unresolved = parsed
        .diagnostics
        .iter()
        .filter(|d| matches!(d, Diagnostic::UnresolvedSymbol { .. }))
        .count();
    assert_eq!(unresolved, 3);
    assert!(parsed.value.symbols.is_empty());
    assert_eq!(parsed.value.wires.len(), 7);
    assert_eq!(parsed.value.junctions.len(), 1);
}

#[test]
fn test_cache_shared_across_documents() {
    let config = DrawConfig::default();
    let cache = SymbolCache::new();
    let resolver = library();
    let parser = SchematicParser::new(&config, &resolver, &cache);

    let lines = io::read_lines(fixture_path("rc_filter.asc")).unwrap();
    let first = parser.parse(&lines).unwrap();
    assert_eq!(cache.len(), 3);
    let second = parser.parse(&lines).unwrap();
    assert_eq!(cache.len(), 3);
    assert_eq!(first, second);
}
