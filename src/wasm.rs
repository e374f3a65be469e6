//! WASM bindings for ascdraw Core.
//!
//! This module provides JavaScript-friendly bindings for rendering
//! schematics in a browser, e.g. onto a canvas or into SVG.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmSchematic } from 'ascdraw_core';
//!
//! await init();
//!
//! const schematic = new WasmSchematic();
//! schematic.add_symbol('res', await (await fetch('sym/res.asy')).text());
//! schematic.set_font_size(12);
//!
//! const { commands, diagnostics } = JSON.parse(schematic.draw(ascText));
//! for (const cmd of commands) {
//!   switch (cmd.op) {
//!     case 'segment': ctx.moveTo(...); break;
//!     // ...
//!   }
//! }
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::DrawConfig;
use crate::draw::{draw_commands, DrawCommand};
use crate::error::{Diagnostic, Parsed};
use crate::schematic::{SchematicDocument, SchematicParser};
use crate::symbol::{MemoryResolver, SymbolCache};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[derive(Serialize)]
struct DrawReport<'a> {
    commands: Vec<DrawCommand>,
    diagnostics: &'a [Diagnostic],
}

/// WASM-compatible schematic parser.
///
/// Symbol definitions are registered up front from their file text; the
/// browser has no library directory to search.
#[wasm_bindgen]
pub struct WasmSchematic {
    config: DrawConfig,
    resolver: MemoryResolver,
    cache: SymbolCache,
}

#[wasm_bindgen]
impl WasmSchematic {
    /// Create a parser with the default drawing configuration and no
    /// symbols.
    ///
    /// # Example
    /// ```javascript
    /// const schematic = new WasmSchematic();
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmSchematic {
        WasmSchematic {
            config: DrawConfig::default(),
            resolver: MemoryResolver::new(),
            cache: SymbolCache::new(),
        }
    }

    /// Register a symbol definition.
    ///
    /// # Arguments
    /// * `name` - Symbol name as used in `SYMBOL` records, e.g. `res` or `Opamps\\LT1001`
    /// * `text` - Contents of the `.asy` file
    #[wasm_bindgen]
    pub fn add_symbol(&mut self, name: &str, text: &str) {
        self.resolver.insert(name, text);
        // A replaced definition must be parsed again
        self.cache.clear();
    }

    /// Set the base font size.
    #[wasm_bindgen]
    pub fn set_font_size(&mut self, size: f64) {
        self.config = self.config.clone().with_font_size(size);
    }

    /// Set the junction dot diameter.
    #[wasm_bindgen]
    pub fn set_junction_size(&mut self, size: f64) {
        self.config = self.config.clone().with_junction_size(size);
    }

    /// Parse a schematic and return the document model as JSON.
    ///
    /// The JSON object has a `value` field holding the document and a
    /// `diagnostics` array.
    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> Result<String, JsValue> {
        let parsed = self.parse_text(text)?;
        serde_json::to_string(&parsed).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Parse a schematic and return its draw commands as JSON.
    ///
    /// The JSON object has a `commands` array, each entry tagged by `op`,
    /// and a `diagnostics` array.
    #[wasm_bindgen]
    pub fn draw(&self, text: &str) -> Result<String, JsValue> {
        let parsed = self.parse_text(text)?;
        let report = DrawReport {
            commands: draw_commands(&parsed.value, &self.config),
            diagnostics: &parsed.diagnostics,
        };
        serde_json::to_string(&report).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Whether the schematic carries a simulation command.
    #[wasm_bindgen]
    pub fn has_simulation_directive(&self, text: &str) -> Result<bool, JsValue> {
        let parsed = self.parse_text(text)?;
        Ok(parsed.value.has_simulation_directive(&self.config))
    }

    /// Number of registered symbols.
    #[wasm_bindgen(getter)]
    pub fn symbol_count(&self) -> usize {
        self.resolver.len()
    }
}

impl WasmSchematic {
    fn parse_text(&self, text: &str) -> Result<Parsed<SchematicDocument>, JsValue> {
        let lines: Vec<&str> = text.lines().collect();
        SchematicParser::new(&self.config, &self.resolver, &self.cache)
            .parse(&lines)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WasmSchematic {
    fn default() -> Self {
        Self::new()
    }
}
