//! Output formats for the CLI frontend.
//!
//! Renders a parsed schematic as a human-readable summary or as JSON.

use clap::ValueEnum;
use serde::Serialize;

use crate::config::DrawConfig;
use crate::draw::{draw_commands, DrawCommand};
use crate::error::{Diagnostic, Parsed, Result};
use crate::schematic::SchematicDocument;

/// What the CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Element counts, placed symbols and diagnostics
    #[default]
    Summary,
    /// The parsed document and its diagnostics as JSON
    Json,
    /// The flattened draw commands as JSON
    Commands,
}

#[derive(Serialize)]
struct CommandReport<'a> {
    commands: Vec<DrawCommand>,
    diagnostics: &'a [Diagnostic],
}

/// Render a parse result in the chosen format.
pub fn render(
    parsed: &Parsed<SchematicDocument>,
    config: &DrawConfig,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Summary => Ok(summary(parsed, config)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(parsed)?),
        OutputFormat::Commands => {
            let report = CommandReport {
                commands: draw_commands(&parsed.value, config),
                diagnostics: &parsed.diagnostics,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

/// Plain text overview of a document.
pub fn summary(parsed: &Parsed<SchematicDocument>, config: &DrawConfig) -> String {
    let doc = &parsed.value;
    let mut out = format!("{}\n", doc.version);

    match doc.sheet {
        Some(sheet) => out.push_str(&format!(
            "sheet {}: {} x {} (text scaling {:.3})\n",
            sheet.number, sheet.width, sheet.height, doc.text_scaling_factor
        )),
        None => out.push_str("no sheet record\n"),
    }
    out.push_str(&format!(
        "{} wires, {} lines, {} flags, {} texts, {} symbols, {} junctions\n",
        doc.wires.len(),
        doc.lines.len(),
        doc.flags.len(),
        doc.texts.len(),
        doc.symbols.len(),
        doc.junctions.len()
    ));

    for symbol in &doc.symbols {
        let orientation = symbol
            .orientation
            .map_or_else(|| "?".to_string(), |o| o.to_string());
        out.push_str(&format!(
            "  {:<8} {:<16} {} {}",
            symbol.name(),
            symbol.reference,
            symbol.position,
            orientation
        ));
        if !symbol.labels.value.is_empty() {
            out.push_str("  ");
            out.push_str(&symbol.labels.value);
        }
        out.push('\n');
    }

    for directive in doc.simulation_directives(config) {
        out.push_str(&format!("  {}\n", directive.text.replace('\n', " | ")));
    }
    if !doc.has_simulation_directive(config) {
        out.push_str("no simulation directive\n");
    }

    if !parsed.is_clean() {
        out.push_str(&format!("{} diagnostics:\n", parsed.diagnostics.len()));
        for d in &parsed.diagnostics {
            out.push_str(&format!("  {}\n", d));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schematic::parse_schematic;
    use crate::symbol::MemoryResolver;

    const RES: &str = "Version 4\nSymbolType CELL\nLINE Normal 16 88 16 96\nWINDOW 0 36 40 Left 2\nWINDOW 3 36 76 Left 2\nSYMATTR Value R\nPIN 16 16 NONE 0\nPINATTR PinName A\nPIN 16 96 NONE 0\nPINATTR PinName B\n";

    fn parsed() -> Parsed<SchematicDocument> {
        let resolver = MemoryResolver::new().with_symbol("res", RES);
        let lines = [
            "Version 4",
            "SHEET 1 880 680",
            "WIRE 16 16 16 -32",
            "SYMBOL res 0 0 R0",
            "SYMATTR InstName R1",
            "SYMATTR Value 4k7",
            "SYMBOL missing 64 0 R90",
            "TEXT 0 128 Left 2 !.tran 10m",
        ];
        parse_schematic(&lines, &resolver, &DrawConfig::default()).unwrap()
    }

    #[test]
    fn test_summary() {
        let text = summary(&parsed(), &DrawConfig::default());
        assert!(text.starts_with("Version 4\nsheet 1: 880 x 680"));
        assert!(text.contains("1 wires, 0 lines, 0 flags, 1 texts, 1 symbols, 0 junctions"));
        assert!(text.contains("R1"));
        assert!(text.contains("4k7"));
        assert!(text.contains(".tran 10m"));
        assert!(!text.contains("no simulation directive"));
        assert!(text.contains("1 diagnostics:"));
        assert!(text.contains("'missing'"));
    }

    #[test]
    fn test_summary_lines() {
        let resolver = MemoryResolver::new().with_symbol("res", RES);
        let config = DrawConfig::default();
        let lines = [
            "Version 4",
            "SHEET 1 500 500",
            "WIRE 0 0 16 0",
            "SYMBOL res 0 0 M90",
        ];
        let parsed = parse_schematic(&lines, &resolver, &config).unwrap();
        let text = summary(&parsed, &config);
        let rows: Vec<_> = text.lines().collect();
        assert_eq!(
            rows,
            vec![
                "Version 4",
                "sheet 1: 500 x 500 (text scaling 1.000)",
                "1 wires, 0 lines, 0 flags, 0 texts, 1 symbols, 0 junctions",
                "  tbd      res              (0, 0) M90  R",
                "no simulation directive",
            ]
        );

        let parsed = parse_schematic(&["Version 4"], &resolver, &config).unwrap();
        assert_eq!(summary(&parsed, &config).lines().nth(1), Some("no sheet record"));
    }

    #[test]
    fn test_json_formats() {
        let config = DrawConfig::default();
        let parsed = parsed();

        let json: serde_json::Value =
            serde_json::from_str(&render(&parsed, &config, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["value"]["version"], "Version 4");
        assert_eq!(json["value"]["symbols"][0]["labels"]["name"], "R1");
        assert_eq!(json["diagnostics"][0]["kind"], "unresolved_symbol");

        let json: serde_json::Value =
            serde_json::from_str(&render(&parsed, &config, OutputFormat::Commands).unwrap())
                .unwrap();
        assert_eq!(json["commands"][0]["op"], "segment");
        assert_eq!(json["diagnostics"].as_array().unwrap().len(), 1);
    }
}
