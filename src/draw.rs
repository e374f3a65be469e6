//! Flattening a document into draw commands.
//!
//! The commands are in schematic coordinates (y pointing down) and carry
//! everything a renderer needs: stroke styles, resolved text anchors and
//! absolute font sizes. No rendering backend is implied.

use std::f64::consts::PI;

use serde::Serialize;

use crate::config::{DrawConfig, LineStyle};
use crate::geometry::{Orientation, Point};
use crate::schematic::SchematicDocument;
use crate::symbol::{PlacedPrimitive, PlacedText, SymbolInstance};
use crate::text::{self, Alignment, TextAnchor};

/// Width of the ground glyph's bar.
pub const GROUND_WIDTH: i32 = 24;

/// Distance from the ground glyph's bar to its apex.
pub const GROUND_DEPTH: i32 = 16;

/// Font size code of net flag labels.
pub const FLAG_FONT_SIZE: u8 = 2;

/// Vertical lift of net flag labels above the flag point.
pub const FLAG_LABEL_LIFT: i32 = 5;

/// A text item ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextCommand {
    pub position: Point,
    /// Text without the overline marker
    pub text: String,
    pub anchor: TextAnchor,
    /// Absolute font size
    pub font_size: f64,
    /// Draw a bar over the text (active-low signal names)
    pub overline: bool,
}

/// One renderer-agnostic drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Segment {
        start: Point,
        end: Point,
        style: LineStyle,
    },
    /// Elliptic arc from angle `start` to angle `end` in radians. The sweep
    /// direction follows the sign of `end - start`.
    Ellipse {
        center: [f64; 2],
        radii: [f64; 2],
        start: f64,
        end: f64,
        style: LineStyle,
    },
    Rectangle {
        corners: [Point; 2],
    },
    Text(TextCommand),
    /// Ground symbol hanging below `position`, see [`ground_segments`]
    Ground {
        position: Point,
    },
    Junction {
        position: Point,
        diameter: f64,
    },
}

/// Flatten a document into draw commands.
///
/// Order: wires, lines, flags, symbols in file order, free text, then
/// junction dots.
pub fn draw_commands(doc: &SchematicDocument, config: &DrawConfig) -> Vec<DrawCommand> {
    let scaling = doc.text_scaling_factor;
    let mut out = Vec::new();

    for wire in &doc.wires {
        out.push(DrawCommand::Segment {
            start: wire.start,
            end: wire.end,
            style: LineStyle::Solid,
        });
    }

    for line in &doc.lines {
        out.push(DrawCommand::Segment {
            start: line.start,
            end: line.end,
            style: line.style,
        });
    }

    for flag in &doc.flags {
        if flag.is_ground() {
            out.push(DrawCommand::Ground {
                position: flag.position,
            });
        } else {
            let position = Point::new(
                flag.position.x,
                flag.position.y.saturating_sub(FLAG_LABEL_LIFT),
            );
            let anchor = text::resolve(
                Alignment::Center,
                Orientation::R0,
                text::is_multiline(&flag.label),
            );
            out.push(text_command(
                position,
                &flag.label,
                anchor,
                config.font_size(FLAG_FONT_SIZE, scaling),
            ));
        }
    }

    for symbol in &doc.symbols {
        draw_symbol(symbol, config, scaling, &mut out);
    }

    for t in &doc.texts {
        out.push(text_command(
            t.position,
            &t.text,
            t.anchor(),
            config.font_size(t.font_size, scaling),
        ));
    }

    let diameter = config.junction_size * scaling;
    out.extend(doc.junctions.iter().map(|&position| DrawCommand::Junction {
        position,
        diameter,
    }));

    out
}

fn draw_symbol(symbol: &SymbolInstance, config: &DrawConfig, scaling: f64, out: &mut Vec<DrawCommand>) {
    let placed_text = |t: &PlacedText| {
        text_command(t.position, &t.text, t.anchor, config.font_size(t.font_size, scaling))
    };
    let mirrored = symbol.orientation.map_or(false, |o| o.is_mirrored());

    for primitive in &symbol.primitives {
        match primitive {
            PlacedPrimitive::Line { start, end, style } => out.push(DrawCommand::Segment {
                start: *start,
                end: *end,
                style: *style,
            }),
            PlacedPrimitive::Arc {
                bounds,
                sweep,
                style,
            } => out.push(ellipse(*bounds, *sweep, mirrored, *style)),
            PlacedPrimitive::Rectangle { corners } => {
                out.push(DrawCommand::Rectangle { corners: *corners })
            }
            PlacedPrimitive::Pin { label, .. } => {
                if let Some(label) = label {
                    out.push(placed_text(label));
                }
            }
            PlacedPrimitive::Text(t) => out.push(placed_text(t)),
        }
    }
}

fn text_command(position: Point, label: &str, anchor: TextAnchor, font_size: f64) -> DrawCommand {
    let (text, overline) = match label.strip_prefix('_') {
        Some(rest) => (rest.to_string(), true),
        None => (label.to_string(), false),
    };
    DrawCommand::Text(TextCommand {
        position,
        text,
        anchor,
        font_size,
        overline,
    })
}

/// Build the ellipse for an arc or circle already in schematic coordinates.
///
/// The arc's start and end angles come from the sweep points as seen from
/// the center. Unmirrored symbols sweep with decreasing angle, mirrored
/// ones with increasing angle; the angles are shifted by a full turn where
/// needed to keep that direction.
pub fn ellipse(
    bounds: [Point; 2],
    sweep: Option<[Point; 2]>,
    mirrored: bool,
    style: LineStyle,
) -> DrawCommand {
    let [a, b] = bounds;
    let center = [
        (a.x as f64 + b.x as f64) / 2.0,
        (a.y as f64 + b.y as f64) / 2.0,
    ];
    let radii = [
        (a.x as f64 - b.x as f64).abs() / 2.0,
        (a.y as f64 - b.y as f64).abs() / 2.0,
    ];

    let (start, end) = match sweep {
        None => (0.0, 2.0 * PI),
        Some([s, e]) => {
            let angle = |p: Point| (p.y as f64 - center[1]).atan2(p.x as f64 - center[0]);
            sweep_angles(angle(s), angle(e), mirrored)
        }
    };

    DrawCommand::Ellipse {
        center,
        radii,
        start,
        end,
        style,
    }
}

fn sweep_angles(mut start: f64, mut end: f64, mirrored: bool) -> (f64, f64) {
    if !mirrored {
        // Both angles in the lower half plane, already decreasing
        if !(0.0 > start && start > end && end < 0.0) {
            if start < 0.0 {
                start += 2.0 * PI;
            }
            if end > start {
                end -= 2.0 * PI;
            }
        }
    } else if !(0.0 < start && start < end && end > 0.0) {
        if start > 0.0 {
            start -= 2.0 * PI;
        }
        if end < start {
            end += 2.0 * PI;
        }
    }
    (start, end)
}

/// The three strokes of a ground glyph: the bar and the two sides meeting
/// at the apex below it.
pub fn ground_segments(position: Point) -> [[Point; 2]; 3] {
    let half = GROUND_WIDTH / 2;
    let left = position.offset(Point::new(-half, 0));
    let right = position.offset(Point::new(half, 0));
    let apex = position.offset(Point::new(0, GROUND_DEPTH));
    [[left, right], [apex, left], [apex, right]]
}
