//! Symbol orientation codes.

use std::fmt;

use serde::Serialize;

/// One of the eight placement states of a symbol.
///
/// `R*` rotates the symbol by the given angle, `M*` mirrors it about the
/// vertical axis and then rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Orientation {
    R0,
    R90,
    R180,
    R270,
    M0,
    M90,
    M180,
    M270,
}

impl Orientation {
    /// All orientations, in table order.
    pub const ALL: [Orientation; 8] = [
        Self::R0,
        Self::R90,
        Self::R180,
        Self::R270,
        Self::M0,
        Self::M90,
        Self::M180,
        Self::M270,
    ];

    /// Parse an orientation code such as `R90` or `M180`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "R0" => Some(Self::R0),
            "R90" => Some(Self::R90),
            "R180" => Some(Self::R180),
            "R270" => Some(Self::R270),
            "M0" => Some(Self::M0),
            "M90" => Some(Self::M90),
            "M180" => Some(Self::M180),
            "M270" => Some(Self::M270),
            _ => None,
        }
    }

    /// The code as written in a schematic.
    pub fn code(&self) -> &'static str {
        match self {
            Self::R0 => "R0",
            Self::R90 => "R90",
            Self::R180 => "R180",
            Self::R270 => "R270",
            Self::M0 => "M0",
            Self::M90 => "M90",
            Self::M180 => "M180",
            Self::M270 => "M270",
        }
    }

    /// Position in [`Orientation::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether this state includes a mirror.
    pub fn is_mirrored(&self) -> bool {
        matches!(self, Self::M0 | Self::M90 | Self::M180 | Self::M270)
    }

    /// The orientation that undoes this one.
    pub fn inverse(&self) -> Self {
        match self {
            Self::R90 => Self::R270,
            Self::R270 => Self::R90,
            // The remaining maps are involutions
            other => *other,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for o in Orientation::ALL {
            assert_eq!(Orientation::from_code(o.code()), Some(o));
        }
        assert_eq!(Orientation::from_code("R45"), None);
        assert_eq!(Orientation::from_code("r90"), None);
    }

    #[test]
    fn test_index_matches_table_order() {
        for (i, o) in Orientation::ALL.iter().enumerate() {
            assert_eq!(o.index(), i);
        }
    }
}
