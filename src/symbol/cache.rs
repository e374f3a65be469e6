//! Shared cache of parsed symbol definitions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::{Parsed, Result};

use super::parser::parse_symbol;
use super::definition::SymbolDefinition;
use super::resolver::SymbolResolver;

/// Parsed definitions keyed by resolver key.
///
/// Each file is parsed at most once per cache; later lookups share the
/// same immutable definition. The cache may be shared between threads
/// parsing different schematics.
#[derive(Debug, Default)]
pub struct SymbolCache {
    entries: RwLock<HashMap<String, Arc<Parsed<SymbolDefinition>>>>,
}

impl SymbolCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the parsed definition for `key`, reading and parsing it
    /// through `resolver` on first use.
    pub fn get_or_load(
        &self,
        key: &str,
        resolver: &dyn SymbolResolver,
    ) -> Result<Arc<Parsed<SymbolDefinition>>> {
        if let Some(found) = self.get(key) {
            return Ok(found);
        }

        let lines = resolver.read(key)?;
        let parsed = Arc::new(parse_symbol(&lines, key));

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        // Another writer may have won the race; keep its entry
        let entry = entries.entry(key.to_string()).or_insert(parsed);
        debug!("cached symbol {}", key);
        Ok(Arc::clone(entry))
    }

    /// Cached definition for `key`, if any.
    pub fn get(&self, key: &str) -> Option<Arc<Parsed<SymbolDefinition>>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    /// Number of cached definitions.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached definition.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}
