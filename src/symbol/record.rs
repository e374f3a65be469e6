//! Classification of symbol file lines into tagged records.

use crate::config::LineStyle;
use crate::geometry::Point;
use crate::lexer::Line;
use crate::text::Alignment;

use super::window::Window;

/// One classified symbol file line.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolRecord {
    SymbolType(String),
    Line {
        start: Point,
        end: Point,
        style: LineStyle,
    },
    Circle {
        bounds: [Point; 2],
    },
    Rectangle {
        corners: [Point; 2],
    },
    Arc {
        bounds: [Point; 2],
        sweep: [Point; 2],
        style: LineStyle,
    },
    Window(Window),
    Pin {
        position: Point,
        alignment: Option<Alignment>,
        offset: i32,
    },
    PinAttr {
        name: String,
        value: String,
    },
    Text {
        position: Point,
        alignment: Alignment,
        font_size: u8,
        text: String,
    },
    SymAttr {
        name: String,
        value: String,
    },
    /// `Version` and anything unrecognized
    Ignored,
}

/// Classify one line. The error names what is wrong with the record.
pub fn classify(line: &Line<'_>) -> std::result::Result<SymbolRecord, String> {
    let keyword = line.keyword();
    let record = match keyword {
        "SymbolType" => SymbolRecord::SymbolType(line.fields()[1..].join("-")),
        "LINE" => {
            let n = numbers(line, 4)?;
            SymbolRecord::Line {
                start: Point::new(n[0], n[1]),
                end: Point::new(n[2], n[3]),
                style: style_at(&n, 4),
            }
        }
        "CIRCLE" => {
            let n = numbers(line, 4)?;
            SymbolRecord::Circle {
                bounds: [Point::new(n[0], n[1]), Point::new(n[2], n[3])],
            }
        }
        "RECTANGLE" => {
            let n = numbers(line, 4)?;
            SymbolRecord::Rectangle {
                corners: [Point::new(n[0], n[1]), Point::new(n[2], n[3])],
            }
        }
        "ARC" => {
            let n = numbers(line, 8)?;
            SymbolRecord::Arc {
                bounds: [Point::new(n[0], n[1]), Point::new(n[2], n[3])],
                sweep: [Point::new(n[4], n[5]), Point::new(n[6], n[7])],
                style: style_at(&n, 8),
            }
        }
        "WINDOW" => SymbolRecord::Window(Window::parse(line)?),
        "PIN" => {
            let n = numbers(line, 3)?;
            let token = line.field(3).ok_or("missing alignment")?;
            let alignment = if token.eq_ignore_ascii_case("NONE") {
                None
            } else {
                Some(
                    Alignment::from_token(token)
                        .ok_or_else(|| format!("unknown alignment '{}'", token))?,
                )
            };
            SymbolRecord::Pin {
                position: Point::new(n[0], n[1]),
                alignment,
                offset: n[2],
            }
        }
        "PINATTR" => SymbolRecord::PinAttr {
            name: line.field(1).unwrap_or("").to_string(),
            value: line.rest(2),
        },
        "TEXT" => {
            let n = numbers(line, 2)?;
            let token = line.field(3).ok_or("missing alignment")?;
            let alignment = Alignment::from_token(token)
                .ok_or_else(|| format!("unknown alignment '{}'", token))?;
            let font_size = line
                .field(4)
                .and_then(|f| f.parse().ok())
                .ok_or("missing font size")?;
            SymbolRecord::Text {
                position: Point::new(n[0], n[1]),
                alignment,
                font_size,
                text: line.rest(5),
            }
        }
        "SYMATTR" => SymbolRecord::SymAttr {
            name: line.field(1).unwrap_or("").to_string(),
            value: line.rest(2),
        },
        _ => SymbolRecord::Ignored,
    };
    Ok(record)
}

/// Kind name used in diagnostics.
pub fn record_name(keyword: &str) -> &'static str {
    match keyword {
        "LINE" => "LINE",
        "CIRCLE" => "CIRCLE",
        "RECTANGLE" => "RECTANGLE",
        "ARC" => "ARC",
        "WINDOW" => "WINDOW",
        "PIN" => "PIN",
        "TEXT" => "TEXT",
        _ => "symbol",
    }
}

fn numbers(line: &Line<'_>, required: usize) -> std::result::Result<Vec<i32>, String> {
    let n = line.numbers();
    if n.len() < required {
        return Err(format!(
            "expected {} numeric fields, got {}",
            required,
            n.len()
        ));
    }
    Ok(n)
}

fn style_at(numbers: &[i32], index: usize) -> LineStyle {
    numbers
        .get(index)
        .map(|&i| LineStyle::from_index_or_solid(i))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(text: &str) -> SymbolRecord {
        classify(&Line::new(1, text)).unwrap()
    }

    #[test]
    fn test_shapes() {
        assert_eq!(
            rec("LINE Normal 0 0 16 32 2"),
            SymbolRecord::Line {
                start: Point::new(0, 0),
                end: Point::new(16, 32),
                style: LineStyle::Dotted,
            }
        );
        assert_eq!(
            rec("LINE Normal 0 0 16 32"),
            SymbolRecord::Line {
                start: Point::new(0, 0),
                end: Point::new(16, 32),
                style: LineStyle::Solid,
            }
        );
        assert!(matches!(rec("CIRCLE Normal -8 -8 8 8"), SymbolRecord::Circle { .. }));
        assert!(matches!(
            rec("ARC Normal 0 0 32 32 16 0 0 16 1"),
            SymbolRecord::Arc {
                style: LineStyle::Dashed,
                ..
            }
        ));
    }

    #[test]
    fn test_pin() {
        assert_eq!(
            rec("PIN 16 0 NONE 8"),
            SymbolRecord::Pin {
                position: Point::new(16, 0),
                alignment: None,
                offset: 8,
            }
        );
        assert_eq!(
            rec("PIN 0 -32 TOP 4"),
            SymbolRecord::Pin {
                position: Point::new(0, -32),
                alignment: Some(Alignment::Top),
                offset: 4,
            }
        );
        assert_eq!(
            rec("PINATTR PinName A B"),
            SymbolRecord::PinAttr {
                name: "PinName".into(),
                value: "A B".into(),
            }
        );
    }

    #[test]
    fn test_text_and_attributes() {
        assert_eq!(
            rec("TEXT -8 16 Left 2 V+ in"),
            SymbolRecord::Text {
                position: Point::new(-8, 16),
                alignment: Alignment::Left,
                font_size: 2,
                text: "V+ in".into(),
            }
        );
        assert_eq!(rec("SymbolType CELL"), SymbolRecord::SymbolType("CELL".into()));
        assert_eq!(rec("Version 4"), SymbolRecord::Ignored);
    }

    #[test]
    fn test_short_records_fail() {
        assert!(classify(&Line::new(1, "LINE Normal 0 0 16")).is_err());
        assert!(classify(&Line::new(1, "ARC Normal 0 0 32 32 16 0 0")).is_err());
        assert!(classify(&Line::new(1, "PIN 0 0")).is_err());
        assert!(classify(&Line::new(1, "TEXT 0 0 Left")).is_err());
    }
}
