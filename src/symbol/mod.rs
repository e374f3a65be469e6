//! Symbol definitions and their placement.
//!
//! A symbol file describes one component's drawing in a local frame:
//! lines, arcs, rectangles, pins, attribute windows and free text. The
//! schematic places it with a position and an orientation and supplies the
//! attribute text (instance name, value, ...) that the windows display.

mod cache;
mod definition;
mod instance;
mod parser;
mod record;
mod resolver;
mod window;

pub use cache::SymbolCache;
pub use definition::{Primitive, SymbolDefinition};
pub use instance::{PlacedPrimitive, PlacedText, SymbolInstance, PIN_FONT_SIZE};
pub use parser::parse_symbol;
pub use resolver::{symbol_file_name, LibraryResolver, MemoryResolver, SymbolResolver};
pub use window::{merge_windows, LabelSlot, LabelSlots, Window};
