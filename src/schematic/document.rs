//! The parsed schematic model.

use serde::Serialize;

use crate::config::{DrawConfig, LineStyle};
use crate::geometry::{Orientation, Point};
use crate::symbol::SymbolInstance;
use crate::text::{self, Alignment, TextAnchor};

/// A net wire between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Wire {
    pub start: Point,
    pub end: Point,
}

/// A graphical line that carries no connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SchematicLine {
    pub start: Point,
    pub end: Point,
    pub style: LineStyle,
}

/// A net label attached to a point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flag {
    pub position: Point,
    pub label: String,
}

impl Flag {
    /// Ground flags are labelled `0`, or carry no label at all.
    pub fn is_ground(&self) -> bool {
        self.label.is_empty() || self.label == "0"
    }
}

/// What a free text item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    /// SPICE directive, written with a leading `!`
    Directive,
    /// Comment, written with a leading `;`
    Comment,
}

/// Free text on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchematicText {
    pub position: Point,
    pub alignment: Alignment,
    pub font_size: u8,
    pub kind: TextKind,
    /// Text with `\n` escapes already turned into line breaks
    pub text: String,
}

impl SchematicText {
    /// Anchors of sheet text; it is never rotated by a symbol.
    pub fn anchor(&self) -> TextAnchor {
        text::resolve(
            self.alignment,
            Orientation::R0,
            text::is_multiline(&self.text),
        )
    }
}

/// The `SHEET number width height` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sheet {
    pub number: i32,
    pub width: i32,
    pub height: i32,
}

impl Sheet {
    /// Ratio of the smaller to the larger sheet dimension, 1.0 when equal
    /// or when either dimension is not positive.
    pub fn text_scaling_factor(&self) -> f64 {
        let (a, b) = (self.width as f64, self.height as f64);
        if a <= 0.0 || b <= 0.0 {
            1.0
        } else if a > b {
            b / a
        } else if a < b {
            a / b
        } else {
            1.0
        }
    }
}

/// A fully parsed schematic.
///
/// Every element kind keeps file order. The document is immutable once
/// produced; re-parsing the same input yields an equal document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchematicDocument {
    /// First line of the file, e.g. `Version 4`
    pub version: String,
    pub sheet: Option<Sheet>,
    /// Scale applied to every font and junction size
    pub text_scaling_factor: f64,
    pub wires: Vec<Wire>,
    pub lines: Vec<SchematicLine>,
    pub flags: Vec<Flag>,
    pub texts: Vec<SchematicText>,
    pub symbols: Vec<SymbolInstance>,
    /// Points where three or more wire endpoints meet, sorted
    pub junctions: Vec<Point>,
}

impl SchematicDocument {
    /// A document with no elements.
    pub fn empty(version: impl Into<String>, sheet: Option<Sheet>) -> Self {
        Self {
            version: version.into(),
            sheet,
            text_scaling_factor: sheet.map_or(1.0, |s| s.text_scaling_factor()),
            wires: Vec::new(),
            lines: Vec::new(),
            flags: Vec::new(),
            texts: Vec::new(),
            symbols: Vec::new(),
            junctions: Vec::new(),
        }
    }

    /// True when the sheet holds nothing drawable.
    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
            && self.lines.is_empty()
            && self.flags.is_empty()
            && self.texts.is_empty()
            && self.symbols.is_empty()
    }

    /// Look up a placed symbol by instance name.
    pub fn symbol(&self, name: &str) -> Option<&SymbolInstance> {
        self.symbols.iter().find(|s| s.name() == name)
    }

    /// Directives with a line starting one of the configured simulation
    /// commands.
    pub fn simulation_directives<'a>(
        &'a self,
        config: &'a DrawConfig,
    ) -> impl Iterator<Item = &'a SchematicText> + 'a {
        self.texts.iter().filter(move |t| {
            t.kind == TextKind::Directive
                && t.text.lines().any(|line| {
                    let line = line.trim_start();
                    config
                        .spice_directives
                        .iter()
                        .any(|d| line.starts_with(d.as_str()))
                })
        })
    }

    /// Whether the schematic can be simulated as is.
    pub fn has_simulation_directive(&self, config: &DrawConfig) -> bool {
        self.simulation_directives(config).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_text_scaling_factor() {
        let sheet = |w, h| Sheet {
            number: 1,
            width: w,
            height: h,
        };
        assert_relative_eq!(sheet(880, 680).text_scaling_factor(), 680.0 / 880.0);
        assert_relative_eq!(sheet(680, 880).text_scaling_factor(), 680.0 / 880.0);
        assert_relative_eq!(sheet(500, 500).text_scaling_factor(), 1.0);
        assert_relative_eq!(sheet(-880, 680).text_scaling_factor(), 1.0);
        assert_relative_eq!(sheet(880, 0).text_scaling_factor(), 1.0);
        assert_relative_eq!(sheet(0, 0).text_scaling_factor(), 1.0);
    }

    #[test]
    fn test_ground_flag() {
        let flag = |label: &str| Flag {
            position: Point::ZERO,
            label: label.to_string(),
        };
        assert!(flag("0").is_ground());
        assert!(flag("").is_ground());
        assert!(!flag("OUT").is_ground());
    }

    #[test]
    fn test_simulation_directives() {
        let text = |kind, s: &str| SchematicText {
            position: Point::ZERO,
            alignment: Alignment::Left,
            font_size: 2,
            kind,
            text: s.to_string(),
        };
        let mut doc = SchematicDocument::empty("Version 4", None);
        doc.texts.push(text(TextKind::Comment, ".tran 1m"));
        doc.texts.push(text(TextKind::Directive, ".param R=1k"));
        let config = DrawConfig::default();
        assert!(!doc.has_simulation_directive(&config));

        doc.texts.push(text(TextKind::Directive, ".param C=1n\n.ac dec 10 1 1meg"));
        assert!(doc.has_simulation_directive(&config));
        doc.texts.push(text(TextKind::Directive, ".tran 0 10m 0 1u"));
        assert_eq!(doc.simulation_directives(&config).count(), 2);
    }
}
