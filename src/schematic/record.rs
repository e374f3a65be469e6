//! Classification of schematic lines into tagged records.

use crate::config::LineStyle;
use crate::geometry::Point;
use crate::lexer::{self, Line};
use crate::text::Alignment;

use super::document::{Flag, SchematicLine, SchematicText, TextKind, Wire};

/// One classified schematic line.
#[derive(Debug, Clone, PartialEq)]
pub enum Record<'a> {
    Wire(Wire),
    Line(SchematicLine),
    Flag(Flag),
    Text(SchematicText),
    Symbol {
        name: &'a str,
        position: Point,
        orientation: &'a str,
    },
    /// `WINDOW` and `SYMATTR` lines, read by the symbol lookahead
    SymbolDetail,
    /// Anything else
    Other,
}

/// Classify one line. On failure returns the record name and the reason.
pub fn classify<'a>(line: &Line<'a>) -> std::result::Result<Record<'a>, (&'static str, String)> {
    match line.keyword() {
        "WIRE" => {
            let c = line
                .ints(1, 5)
                .ok_or_else(|| ("WIRE", "expected 4 integer coordinates".to_string()))?;
            Ok(Record::Wire(Wire {
                start: Point::new(c[0], c[1]),
                end: Point::new(c[2], c[3]),
            }))
        }
        "LINE" => {
            let (c, style) = line_coordinates(line)
                .ok_or_else(|| ("LINE", "expected 4 integer coordinates".to_string()))?;
            Ok(Record::Line(SchematicLine {
                start: Point::new(c[0], c[1]),
                end: Point::new(c[2], c[3]),
                style,
            }))
        }
        "FLAG" => {
            let c = line
                .ints(1, 3)
                .ok_or_else(|| ("FLAG", "expected 2 integer coordinates".to_string()))?;
            Ok(Record::Flag(Flag {
                position: Point::new(c[0], c[1]),
                label: line.rest(3),
            }))
        }
        "TEXT" => classify_text(line).map_err(|reason| ("TEXT", reason)),
        "SYMBOL" => {
            let name = line
                .field(1)
                .filter(|n| !n.is_empty())
                .ok_or_else(|| ("SYMBOL", "missing symbol name".to_string()))?;
            let c = line
                .ints(2, 4)
                .ok_or_else(|| ("SYMBOL", "expected 2 integer coordinates".to_string()))?;
            Ok(Record::Symbol {
                name,
                position: Point::new(c[0], c[1]),
                orientation: line.field(4).unwrap_or(""),
            })
        }
        "WINDOW" | "SYMATTR" => Ok(Record::SymbolDetail),
        _ => Ok(Record::Other),
    }
}

/// Coordinates and style of a `LINE <layer> x1 y1 x2 y2 [style]` record.
///
/// The trailing field is taken as the style when the fields before it hold
/// four coordinates. Otherwise it is read as a coordinate, and as a last
/// resort a numeric layer field is read as one too.
fn line_coordinates(line: &Line<'_>) -> Option<(Vec<i32>, LineStyle)> {
    let n = line.len();
    if n > 2 {
        if let Some(c) = line.ints(2, n - 1).filter(|c| c.len() >= 4) {
            let style = line
                .int(n - 1)
                .map(LineStyle::from_index_or_solid)
                .unwrap_or_default();
            return Some((c, style));
        }
    }
    if let Some(c) = line.ints(2, n).filter(|c| c.len() >= 4) {
        return Some((c, LineStyle::Solid));
    }
    line.ints(1, n)
        .filter(|c| c.len() >= 4)
        .map(|c| (c, LineStyle::Solid))
}

fn classify_text<'a>(line: &Line<'a>) -> std::result::Result<Record<'a>, String> {
    let c = line
        .ints(1, 3)
        .ok_or_else(|| "expected 2 integer coordinates".to_string())?;
    let token = line.field(3).ok_or("missing alignment")?;
    let alignment =
        Alignment::from_token(token).ok_or_else(|| format!("unknown alignment '{}'", token))?;
    let size_token = line.field(4).ok_or("missing font size")?;
    let font_size = size_token
        .parse()
        .map_err(|_| format!("font size '{}' is not a size code", size_token))?;

    let body = line.rest(5);
    let (kind, text) = match body.chars().next() {
        Some('!') => (TextKind::Directive, &body[1..]),
        Some(';') => (TextKind::Comment, &body[1..]),
        _ => (TextKind::Comment, body.as_str()),
    };

    Ok(Record::Text(SchematicText {
        position: Point::new(c[0], c[1]),
        alignment,
        font_size,
        kind,
        text: lexer::unescape_newlines(text),
    }))
}
