//! Text alignment and anchor resolution.
//!
//! Labels in schematics and symbols declare an alignment intent such as
//! `Left` or `VTop`. Where the text actually sits depends on the
//! orientation of the enclosing symbol and on whether the label spans
//! several lines. [`resolve`] turns the intent into concrete anchors and a
//! rotation angle using the fixed tables in [`tables`].

mod anchor;
mod tables;

pub use anchor::{offset_correct, resolve};

use std::fmt;

use serde::Serialize;

/// Declared text alignment intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Top,
    Bottom,
    VLeft,
    VCenter,
    VRight,
    VTop,
    VBottom,
}

impl Alignment {
    /// All alignments, in table order.
    pub const ALL: [Alignment; 10] = [
        Self::Left,
        Self::Center,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::VLeft,
        Self::VCenter,
        Self::VRight,
        Self::VTop,
        Self::VBottom,
    ];

    /// Parse an alignment token. Pin records spell these in upper case
    /// (`LEFT`, `VTOP`), text and window records in mixed case.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "LEFT" => Some(Self::Left),
            "CENTER" => Some(Self::Center),
            "RIGHT" => Some(Self::Right),
            "TOP" => Some(Self::Top),
            "BOTTOM" => Some(Self::Bottom),
            "VLEFT" => Some(Self::VLeft),
            "VCENTER" => Some(Self::VCenter),
            "VRIGHT" => Some(Self::VRight),
            "VTOP" => Some(Self::VTop),
            "VBOTTOM" => Some(Self::VBottom),
            _ => None,
        }
    }

    /// Position in [`Alignment::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The canonical spelling.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Center => "Center",
            Self::Right => "Right",
            Self::Top => "Top",
            Self::Bottom => "Bottom",
            Self::VLeft => "VLeft",
            Self::VCenter => "VCenter",
            Self::VRight => "VRight",
            Self::VTop => "VTop",
            Self::VBottom => "VBottom",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Horizontal text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Fully resolved text placement relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TextAnchor {
    pub horizontal: HAlign,
    pub vertical: VAlign,
    /// Counter-clockwise rotation in degrees, 0 or 90
    pub rotation: u16,
}

/// Whether a label spans more than one line.
pub fn is_multiline(text: &str) -> bool {
    text.contains('\n')
}
