//! Attribute label slots and `WINDOW` records.
//!
//! A `WINDOW` record positions one of a symbol's attribute labels. Symbol
//! definitions carry default windows, and a schematic may override them per
//! placement with records of the same shape.

use serde::Serialize;

use crate::geometry::Point;
use crate::lexer::Line;
use crate::text::Alignment;

/// The attribute a window displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSlot {
    /// Instance name, slot 0
    Name,
    /// Value, slot 3
    Value,
    /// SPICE line, slot 39
    SpiceLine,
    /// Second value, slot 123
    Value2,
}

impl LabelSlot {
    /// Slot for a numeric window code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Name),
            3 => Some(Self::Value),
            39 => Some(Self::SpiceLine),
            123 => Some(Self::Value2),
            _ => None,
        }
    }

    /// Numeric window code.
    pub fn code(&self) -> i32 {
        match self {
            Self::Name => 0,
            Self::Value => 3,
            Self::SpiceLine => 39,
            Self::Value2 => 123,
        }
    }
}

/// Attribute text of one placed symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelSlots {
    pub name: String,
    pub value: String,
    pub value2: String,
    pub spice_line: String,
}

impl LabelSlots {
    /// Text held by `slot`.
    pub fn get(&self, slot: LabelSlot) -> &str {
        match slot {
            LabelSlot::Name => &self.name,
            LabelSlot::Value => &self.value,
            LabelSlot::SpiceLine => &self.spice_line,
            LabelSlot::Value2 => &self.value2,
        }
    }

    /// Mutable access to `slot`.
    pub fn get_mut(&mut self, slot: LabelSlot) -> &mut String {
        match slot {
            LabelSlot::Name => &mut self.name,
            LabelSlot::Value => &mut self.value,
            LabelSlot::SpiceLine => &mut self.spice_line,
            LabelSlot::Value2 => &mut self.value2,
        }
    }

    /// Fill `slot` with `default` if it is empty.
    pub fn fill_default(&mut self, slot: LabelSlot, default: Option<&str>) {
        if let Some(default) = default {
            let current = self.get_mut(slot);
            if current.is_empty() {
                *current = default.to_string();
            }
        }
    }
}

/// A parsed `WINDOW slot x y alignment size` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    pub slot: LabelSlot,
    /// Offset in the symbol's local frame
    pub offset: Point,
    /// `None` for `Invisible`
    pub alignment: Option<Alignment>,
    pub font_size: u8,
}

impl Window {
    /// Parse a window record. The error is a human-readable reason.
    pub fn parse(line: &Line<'_>) -> std::result::Result<Self, String> {
        let numbers = line.numbers();
        if numbers.len() < 4 {
            return Err(format!("expected 4 numeric fields, got {}", numbers.len()));
        }
        let slot = LabelSlot::from_code(numbers[0])
            .ok_or_else(|| format!("unknown label slot {}", numbers[0]))?;

        let alignment_token = line.field_from_end(1).unwrap_or("");
        let alignment = if alignment_token.eq_ignore_ascii_case("Invisible") {
            None
        } else {
            Some(
                Alignment::from_token(alignment_token)
                    .ok_or_else(|| format!("unknown alignment '{}'", alignment_token))?,
            )
        };

        let size_token = line.field_from_end(0).unwrap_or("");
        let font_size = size_token
            .parse()
            .map_err(|_| format!("font size '{}' is not a size code", size_token))?;

        Ok(Self {
            slot,
            offset: Point::new(numbers[1], numbers[2]),
            alignment,
            font_size,
        })
    }

    /// Whether this window draws anything.
    pub fn is_visible(&self) -> bool {
        self.alignment.is_some()
    }
}

/// Apply placement overrides to a symbol's default windows.
///
/// An override replaces the window with the same slot and keeps its
/// position in the list; overrides for slots the symbol lacks are appended.
pub fn merge_windows(defaults: &[Window], overrides: &[Window]) -> Vec<Window> {
    let mut merged = defaults.to_vec();
    for window in overrides {
        match merged.iter_mut().find(|w| w.slot == window.slot) {
            Some(existing) => *existing = window.clone(),
            None => merged.push(window.clone()),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(text: &str) -> Window {
        Window::parse(&Line::new(1, text)).unwrap()
    }

    #[test]
    fn test_parse_window() {
        let w = window("WINDOW 0 24 -8 Left 2");
        assert_eq!(w.slot, LabelSlot::Name);
        assert_eq!(w.offset, Point::new(24, -8));
        assert_eq!(w.alignment, Some(Alignment::Left));
        assert_eq!(w.font_size, 2);

        let w = window("WINDOW 123 0 0 Invisible 2");
        assert_eq!(w.slot, LabelSlot::Value2);
        assert!(!w.is_visible());
    }

    #[test]
    fn test_parse_window_errors() {
        assert!(Window::parse(&Line::new(1, "WINDOW 0 24 Left")).is_err());
        assert!(Window::parse(&Line::new(1, "WINDOW 38 24 8 Left 2")).is_err());
        assert!(Window::parse(&Line::new(1, "WINDOW 0 24 8 Sideways 2")).is_err());
    }

    #[test]
    fn test_merge_replaces_same_slot() {
        let defaults = vec![window("WINDOW 0 24 8 Left 2"), window("WINDOW 3 24 56 Left 2")];
        let overrides = vec![window("WINDOW 3 -8 40 VBottom 2"), window("WINDOW 39 0 0 Left 1")];
        let merged = merge_windows(&defaults, &overrides);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0], defaults[0]);
        assert_eq!(merged[1].offset, Point::new(-8, 40));
        assert_eq!(merged[2].slot, LabelSlot::SpiceLine);
    }

    #[test]
    fn test_fill_default_keeps_existing() {
        let mut slots = LabelSlots {
            value: "10k".into(),
            ..Default::default()
        };
        slots.fill_default(LabelSlot::Value, Some("R"));
        slots.fill_default(LabelSlot::Value2, Some("x"));
        slots.fill_default(LabelSlot::SpiceLine, None);
        assert_eq!(slots.value, "10k");
        assert_eq!(slots.value2, "x");
        assert_eq!(slots.get(LabelSlot::SpiceLine), "");
    }
}
