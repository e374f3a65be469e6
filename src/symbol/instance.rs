//! Placing a symbol definition on the schematic.

use serde::Serialize;

use crate::config::LineStyle;
use crate::geometry::{Orientation, Placement, Point};
use crate::text::{self, Alignment, TextAnchor};

use super::definition::{Primitive, SymbolDefinition};
use super::window::{merge_windows, LabelSlot, LabelSlots, Window};

/// Font size code of pin name labels.
pub const PIN_FONT_SIZE: u8 = 2;

/// A label in schematic coordinates with its anchors resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedText {
    pub position: Point,
    pub text: String,
    pub alignment: Alignment,
    pub font_size: u8,
    pub anchor: TextAnchor,
}

impl PlacedText {
    /// Resolve a label under an orientation.
    pub fn new(
        position: Point,
        text: impl Into<String>,
        alignment: Alignment,
        font_size: u8,
        orientation: Orientation,
    ) -> Self {
        let text = text.into();
        let anchor = text::resolve(alignment, orientation, text::is_multiline(&text));
        Self {
            position,
            text,
            alignment,
            font_size,
            anchor,
        }
    }
}

/// A symbol primitive in schematic coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlacedPrimitive {
    Line {
        start: Point,
        end: Point,
        style: LineStyle,
    },
    Arc {
        bounds: [Point; 2],
        sweep: Option<[Point; 2]>,
        style: LineStyle,
    },
    Rectangle {
        corners: [Point; 2],
    },
    Pin {
        position: Point,
        label: Option<PlacedText>,
    },
    Text(PlacedText),
}

/// One placed symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolInstance {
    /// Symbol name as written in the schematic
    pub reference: String,
    pub position: Point,
    /// `None` when the schematic's orientation code was not recognized
    pub orientation: Option<Orientation>,
    pub labels: LabelSlots,
    pub symbol_type: Option<String>,
    pub primitives: Vec<PlacedPrimitive>,
}

impl SymbolInstance {
    /// Instance name, from the name slot.
    pub fn name(&self) -> &str {
        &self.labels.name
    }

    /// Place `definition`, applying window `overrides` from the schematic.
    ///
    /// Empty label slots fall back to the definition's `Value` and `Value2`
    /// attributes. Windows whose slot is still empty, or that are
    /// `Invisible`, are not placed.
    pub fn instantiate(
        reference: &str,
        definition: &SymbolDefinition,
        placement: Placement,
        mut labels: LabelSlots,
        overrides: &[Window],
    ) -> Self {
        labels.fill_default(LabelSlot::Value, definition.default_value());
        labels.fill_default(LabelSlot::Value2, definition.default_value2());

        let orientation = placement.text_orientation();
        let mut primitives = Vec::with_capacity(definition.primitives.len());

        for primitive in &definition.primitives {
            let placed = match primitive {
                Primitive::Line { start, end, style } => PlacedPrimitive::Line {
                    start: placement.apply(*start),
                    end: placement.apply(*end),
                    style: *style,
                },
                Primitive::Arc {
                    bounds,
                    sweep,
                    style,
                } => PlacedPrimitive::Arc {
                    bounds: bounds.map(|p| placement.apply(p)),
                    sweep: sweep.map(|s| s.map(|p| placement.apply(p))),
                    style: *style,
                },
                Primitive::Rectangle { corners } => PlacedPrimitive::Rectangle {
                    corners: corners.map(|p| placement.apply(p)),
                },
                Primitive::Pin {
                    position,
                    name,
                    alignment,
                    offset,
                } => {
                    let anchor = placement.apply(*position);
                    let label = alignment.map(|alignment| {
                        let at = text::offset_correct(anchor, orientation, alignment, *offset);
                        PlacedText::new(at, name.as_str(), alignment, PIN_FONT_SIZE, orientation)
                    });
                    PlacedPrimitive::Pin {
                        position: anchor,
                        label,
                    }
                }
                Primitive::Text {
                    position,
                    alignment,
                    font_size,
                    text,
                } => PlacedPrimitive::Text(PlacedText::new(
                    placement.apply(*position),
                    text.as_str(),
                    *alignment,
                    *font_size,
                    orientation,
                )),
                // Placed after merging with the overrides
                Primitive::Window(_) => continue,
            };
            primitives.push(placed);
        }

        let defaults: Vec<Window> = definition.windows().cloned().collect();
        for window in merge_windows(&defaults, overrides) {
            let Some(alignment) = window.alignment else {
                continue;
            };
            let text = labels.get(window.slot);
            if text.is_empty() {
                continue;
            }
            primitives.push(PlacedPrimitive::Text(PlacedText::new(
                placement.apply(window.offset),
                text,
                alignment,
                window.font_size,
                orientation,
            )));
        }

        Self {
            reference: reference.to_string(),
            position: placement.position,
            orientation: placement.orientation,
            labels,
            symbol_type: definition.symbol_type.clone(),
            primitives,
        }
    }

    /// Text primitives, window labels and pin names included.
    pub fn texts(&self) -> impl Iterator<Item = &PlacedText> {
        self.primitives.iter().filter_map(|p| match p {
            PlacedPrimitive::Text(t) => Some(t),
            PlacedPrimitive::Pin { label, .. } => label.as_ref(),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::parse_symbol;
    use crate::text::{HAlign, VAlign};

    const CAP: &[&str] = &[
        "Version 4",
        "SymbolType CELL",
        "LINE Normal 16 0 16 24",
        "RECTANGLE Normal 0 24 32 32",
        "WINDOW 0 24 8 Left 2",
        "WINDOW 3 24 56 Left 2",
        "SYMATTR Value C",
        "PIN 16 0 TOP 8",
        "PINATTR PinName +",
    ];

    fn cap() -> SymbolDefinition {
        parse_symbol(CAP, "cap.asy").value
    }

    fn labels(name: &str, value: &str) -> LabelSlots {
        LabelSlots {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_r0_instantiation() {
        let placement = Placement::new(Point::new(100, 200), Orientation::R0);
        let inst = SymbolInstance::instantiate("cap", &cap(), placement, labels("C1", "1u"), &[]);

        assert_eq!(
            inst.primitives[0],
            PlacedPrimitive::Line {
                start: Point::new(116, 200),
                end: Point::new(116, 224),
                style: LineStyle::Solid,
            }
        );
        let texts: Vec<_> = inst.texts().map(|t| (t.text.as_str(), t.position)).collect();
        assert_eq!(
            texts,
            vec![
                ("+", Point::new(116, 208)),
                ("C1", Point::new(124, 208)),
                ("1u", Point::new(124, 256)),
            ]
        );
    }

    #[test]
    fn test_value_default_fills_empty_slot() {
        let placement = Placement::new(Point::ZERO, Orientation::R0);
        let inst = SymbolInstance::instantiate("cap", &cap(), placement, labels("C2", ""), &[]);
        assert_eq!(inst.labels.value, "C");
        assert!(inst.texts().any(|t| t.text == "C"));
    }

    #[test]
    fn test_empty_window_not_rendered() {
        let placement = Placement::new(Point::ZERO, Orientation::R0);
        let overrides = [Window {
            slot: LabelSlot::SpiceLine,
            offset: Point::new(0, 0),
            alignment: Some(Alignment::Left),
            font_size: 2,
        }];
        let inst = SymbolInstance::instantiate("cap", &cap(), placement, labels("C3", "1n"), &overrides);
        assert_eq!(inst.texts().count(), 3);
    }

    #[test]
    fn test_override_and_rotation() {
        let placement = Placement::new(Point::new(0, 0), Orientation::R90);
        let overrides = [Window {
            slot: LabelSlot::Value,
            offset: Point::new(-8, 40),
            alignment: Some(Alignment::VBottom),
            font_size: 2,
        }];
        let inst = SymbolInstance::instantiate("cap", &cap(), placement, labels("C4", "10p"), &overrides);
        let value = inst.texts().find(|t| t.text == "10p").unwrap();
        assert_eq!(value.position, Point::new(-40, -8));
        assert_eq!(value.anchor.horizontal, HAlign::Center);
        assert_eq!(value.anchor.vertical, VAlign::Bottom);
        assert_eq!(value.anchor.rotation, 0);
    }

    #[test]
    fn test_invisible_window_hidden() {
        let placement = Placement::new(Point::ZERO, Orientation::R0);
        let overrides = [Window {
            slot: LabelSlot::Name,
            offset: Point::ZERO,
            alignment: None,
            font_size: 2,
        }];
        let inst = SymbolInstance::instantiate("cap", &cap(), placement, labels("C5", "1u"), &overrides);
        assert!(!inst.texts().any(|t| t.text == "C5"));
    }

    #[test]
    fn test_degenerate_placement() {
        let placement = Placement::from_code(Point::new(50, 50), "Q7");
        let inst = SymbolInstance::instantiate("cap", &cap(), placement, labels("C6", "1u"), &[]);
        assert_eq!(inst.orientation, None);
        assert_eq!(
            inst.primitives[0],
            PlacedPrimitive::Line {
                start: Point::ZERO,
                end: Point::ZERO,
                style: LineStyle::Solid,
            }
        );
        let name = inst.texts().find(|t| t.text == "C6").unwrap();
        assert_eq!(name.position, Point::ZERO);
    }
}
