//! Locating symbol definitions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{AscError, Result};
use crate::io;

/// Source of symbol definition text.
///
/// `locate` maps the symbol name written in a schematic to a key, and
/// `read` returns the lines stored under that key. Keys are what the
/// symbol cache is indexed by, so two names resolving to the same key
/// share one parsed definition.
pub trait SymbolResolver {
    /// Find the definition for a schematic symbol name.
    fn locate(&self, name: &str) -> Option<String>;

    /// Read the definition stored under `key`.
    fn read(&self, key: &str) -> Result<Vec<String>>;
}

/// Normalize a schematic symbol name to a lowercase file name.
///
/// Schematics written on Windows use backslash separators and may carry a
/// library sub-path (`Opamps\\LT1001`). Only the last component matters.
pub fn symbol_file_name(name: &str) -> String {
    let name = name.replace('\\', "/");
    let base = name.rsplit('/').next().unwrap_or(&name);
    let mut file = base.to_lowercase();
    if !file.ends_with(".asy") {
        file.push_str(".asy");
    }
    file
}

/// Resolves symbols from a directory tree of `.asy` files.
#[derive(Debug, Clone)]
pub struct LibraryResolver {
    root: PathBuf,
    index: HashMap<String, PathBuf>,
}

impl LibraryResolver {
    /// Index every `.asy` file under `root`. When the same file name occurs
    /// more than once, the first in walk order wins.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(AscError::InvalidLibrary {
                path: root.display().to_string(),
            });
        }

        let mut index = HashMap::new();
        for entry in WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            let file_name = match path.file_name().and_then(|n| n.to_str()) {
                Some(n) => n.to_lowercase(),
                None => continue,
            };
            if file_name.ends_with(".asy") {
                index.entry(file_name).or_insert(path);
            }
        }

        info!("indexed {} symbols under {}", index.len(), root.display());
        Ok(Self { root, index })
    }

    /// The library root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of indexed symbol files.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when no symbol files were found.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl SymbolResolver for LibraryResolver {
    fn locate(&self, name: &str) -> Option<String> {
        let file = symbol_file_name(name);
        let found = self.index.get(&file).map(|p| p.display().to_string());
        if found.is_none() {
            debug!("symbol '{}' ({}) not in library", name, file);
        }
        found
    }

    fn read(&self, key: &str) -> Result<Vec<String>> {
        io::read_lines(key)
    }
}

/// Resolves symbols from definitions held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    symbols: HashMap<String, Vec<String>>,
}

impl MemoryResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition under a symbol name. Names are normalized like
    /// library file names, so `res`, `RES` and `misc\\res` all match.
    pub fn insert(&mut self, name: &str, text: &str) {
        self.symbols.insert(
            symbol_file_name(name),
            text.lines().map(str::to_string).collect(),
        );
    }

    /// Builder form of [`MemoryResolver::insert`].
    pub fn with_symbol(mut self, name: &str, text: &str) -> Self {
        self.insert(name, text);
        self
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl SymbolResolver for MemoryResolver {
    fn locate(&self, name: &str) -> Option<String> {
        let file = symbol_file_name(name);
        self.symbols.contains_key(&file).then_some(file)
    }

    fn read(&self, key: &str) -> Result<Vec<String>> {
        self.symbols
            .get(key)
            .cloned()
            .ok_or_else(|| {
                AscError::file_read(
                    key,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "symbol not registered"),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_symbol_file_name() {
        assert_eq!(symbol_file_name("res"), "res.asy");
        assert_eq!(symbol_file_name("Opamps\\LT1001"), "lt1001.asy");
        assert_eq!(symbol_file_name("Misc/NE555.asy"), "ne555.asy");
    }

    #[test]
    fn test_library_resolver() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        fs::write(dir.path().join("res.asy"), "Version 4\nSymbolType CELL\n").unwrap();
        fs::write(dir.path().join("sub/deeper/LT1001.asy"), "Version 4\n").unwrap();
        fs::write(dir.path().join("sub/notes.txt"), "x").unwrap();

        let lib = LibraryResolver::new(dir.path()).unwrap();
        assert_eq!(lib.len(), 2);

        let key = lib.locate("Opamps\\lt1001").unwrap();
        assert!(key.ends_with("LT1001.asy"));
        assert_eq!(lib.read(&lib.locate("RES").unwrap()).unwrap(), vec!["Version 4", "SymbolType CELL"]);
        assert_eq!(lib.locate("notes"), None);
    }

    #[test]
    fn test_library_root_must_be_directory() {
        let err = LibraryResolver::new("/nonexistent/library").unwrap_err();
        assert!(matches!(err, AscError::InvalidLibrary { .. }));
    }

    #[test]
    fn test_memory_resolver() {
        let resolver = MemoryResolver::new().with_symbol("res", "Version 4\nSymbolType CELL");
        assert_eq!(resolver.locate("RES").as_deref(), Some("res.asy"));
        assert_eq!(resolver.locate("cap"), None);
        assert_eq!(resolver.read("res.asy").unwrap().len(), 2);
        match resolver.read("cap.asy") {
            Err(AscError::FileReadError { path, source }) => {
                assert_eq!(path, "cap.asy");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected not found, got {:?}", other),
        }
    }
}
