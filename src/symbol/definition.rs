//! Parsed symbol definitions.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::LineStyle;
use crate::geometry::Point;
use crate::text::Alignment;

use super::window::Window;

/// One drawing element of a symbol, in the symbol's local frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Line {
        start: Point,
        end: Point,
        style: LineStyle,
    },
    /// Elliptic arc inside the box spanned by `bounds`.
    ///
    /// `sweep` holds the start and end points whose angles bound the arc;
    /// `None` is a full ellipse.
    Arc {
        bounds: [Point; 2],
        sweep: Option<[Point; 2]>,
        style: LineStyle,
    },
    Rectangle {
        corners: [Point; 2],
    },
    /// A connection point. `alignment` is `None` for pins drawn without a
    /// name label.
    Pin {
        position: Point,
        name: String,
        alignment: Option<Alignment>,
        offset: i32,
    },
    Window(Window),
    Text {
        position: Point,
        alignment: Alignment,
        font_size: u8,
        text: String,
    },
}

impl Primitive {
    /// Short kind name, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Line { .. } => "line",
            Primitive::Arc { sweep: None, .. } => "circle",
            Primitive::Arc { .. } => "arc",
            Primitive::Rectangle { .. } => "rectangle",
            Primitive::Pin { .. } => "pin",
            Primitive::Window(_) => "window",
            Primitive::Text { .. } => "text",
        }
    }
}

/// A symbol definition as read from one symbol file.
///
/// Immutable once parsed and shared between every placement through the
/// symbol cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SymbolDefinition {
    /// Resolved key the definition was loaded from
    pub key: String,
    /// `SymbolType` record, e.g. `CELL`
    pub symbol_type: Option<String>,
    /// Primitives in file order
    pub primitives: Vec<Primitive>,
    /// Every `SYMATTR name value` record
    pub attributes: BTreeMap<String, String>,
}

impl SymbolDefinition {
    /// Default text for the value slot.
    pub fn default_value(&self) -> Option<&str> {
        self.attributes.get("Value").map(String::as_str)
    }

    /// Default text for the second value slot.
    pub fn default_value2(&self) -> Option<&str> {
        self.attributes.get("Value2").map(String::as_str)
    }

    /// The symbol's default windows, in file order.
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Window(w) => Some(w),
            _ => None,
        })
    }

    /// Number of pins.
    pub fn pin_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Pin { .. }))
            .count()
    }
}
