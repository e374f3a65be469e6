//! Drawing configuration.

use serde::Serialize;
use tracing::warn;

/// Default font size before per-label scaling.
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Default junction dot diameter before document scaling.
pub const DEFAULT_JUNCTION_SIZE: f64 = 12.0;

/// Scale factor for each font-size code, indexed by code.
pub const DEFAULT_FONT_SCALES: [f64; 8] = [0.625, 1.0, 1.5, 2.0, 2.5, 3.5, 5.0, 7.0];

/// SPICE analysis commands that make a schematic runnable.
pub const DEFAULT_SPICE_DIRECTIVES: [&str; 6] = [".tran", ".ac", ".dc", ".noise", ".tf", ".op"];

/// Configuration consumed by the parsers and the draw-command flattener.
///
/// Built once and passed by reference; nothing in the crate keeps a global
/// copy.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawConfig {
    /// Font scale per size code.
    pub font_scales: Vec<f64>,
    /// Font size of a size-code-1 label at scaling 1.0.
    pub default_font_size: f64,
    /// Junction dot diameter at scaling 1.0.
    pub junction_size: f64,
    /// Lines searched after a `SYMBOL` record for `WINDOW` overrides.
    pub window_lookahead: usize,
    /// Lines searched after the overrides for `SYMATTR` attributes.
    pub attribute_lookahead: usize,
    /// Directive prefixes that count as simulation commands.
    pub spice_directives: Vec<String>,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            font_scales: DEFAULT_FONT_SCALES.to_vec(),
            default_font_size: DEFAULT_FONT_SIZE,
            junction_size: DEFAULT_JUNCTION_SIZE,
            window_lookahead: 4,
            attribute_lookahead: 6,
            spice_directives: DEFAULT_SPICE_DIRECTIVES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl DrawConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.default_font_size = size;
        self
    }

    /// Set the junction dot diameter.
    pub fn with_junction_size(mut self, size: f64) -> Self {
        self.junction_size = size;
        self
    }

    /// Replace the font scale table.
    pub fn with_font_scales(mut self, scales: Vec<f64>) -> Self {
        self.font_scales = scales;
        self
    }

    /// Set how far the window and attribute scans look ahead.
    pub fn with_lookahead(mut self, windows: usize, attributes: usize) -> Self {
        self.window_lookahead = windows;
        self.attribute_lookahead = attributes;
        self
    }

    /// Replace the recognized simulation commands.
    pub fn with_spice_directives<I, S>(mut self, directives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spice_directives = directives.into_iter().map(Into::into).collect();
        self
    }

    /// Scale for a font-size code, if the code is known.
    pub fn font_scale(&self, code: u8) -> Option<f64> {
        self.font_scales.get(code as usize).copied()
    }

    /// Absolute font size for a size code under a document scaling factor.
    ///
    /// Unknown codes draw at scale 1.0.
    pub fn font_size(&self, code: u8, text_scaling: f64) -> f64 {
        let scale = self.font_scale(code).unwrap_or_else(|| {
            warn!("font size code {} unknown, using scale 1.0", code);
            1.0
        });
        self.default_font_size * scale * text_scaling
    }
}

/// Stroke style of lines and arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
    DashDotDot,
}

impl LineStyle {
    /// Style for a style index as stored in files.
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::Solid),
            1 => Some(Self::Dashed),
            2 => Some(Self::Dotted),
            3 => Some(Self::DashDot),
            4 => Some(Self::DashDotDot),
            _ => None,
        }
    }

    /// Like [`LineStyle::from_index`], falling back to solid.
    pub fn from_index_or_solid(index: i32) -> Self {
        Self::from_index(index).unwrap_or_else(|| {
            warn!("line style {} unknown, drawing solid", index);
            Self::Solid
        })
    }
}
