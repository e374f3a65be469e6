//! Error types for the ascdraw schematic parser.
//!
//! Two kinds of failure exist. [`AscError`] is fatal for the input it
//! concerns: the document text could not be obtained or decoded, so no
//! partial document is produced. [`Diagnostic`] is recoverable: a single
//! record or symbol instance was skipped and the pass continued. Parsers
//! collect every diagnostic into a [`Parsed`] value.

use serde::Serialize;
use thiserror::Error;

use crate::geometry::Point;

/// Result type alias using [`AscError`].
pub type Result<T> = std::result::Result<T, AscError>;

/// Unified fatal error type for all ascdraw operations.
#[derive(Error, Debug)]
pub enum AscError {
    // ============ Input Errors ============
    /// The input decoded to nothing usable
    #[error("No usable text in '{origin}'")]
    NoUsableText { origin: String },

    /// Error reading a schematic or symbol file
    #[error("Failed to read '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing an edited schematic
    #[error("Failed to write '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Symbol library root could not be indexed
    #[error("Symbol library '{path}' is not a readable directory")]
    InvalidLibrary { path: String },

    /// A command line value could not be understood
    #[error("Invalid value '{value}' for {flag}")]
    InvalidArgument { flag: String, value: String },

    // ============ Edit Errors ============
    /// No `SYMATTR InstName` with this name exists in the schematic
    #[error("Component '{name}' not found in schematic")]
    ComponentNotFound { name: String },

    /// The component value is not a `SINE(...)` source
    #[error("Component '{name}' is not a SINE source (value '{value}')")]
    NotSineSource { name: String, value: String },

    /// The SINE source carries more fields than the known parameter set
    #[error("SINE source '{name}' has {count} parameters, at most {max} are supported")]
    TooManySineParameters {
        name: String,
        count: usize,
        max: usize,
    },

    /// Unknown SINE parameter name
    #[error("Unknown SINE parameter '{param}'")]
    UnknownSineParameter { param: String },

    // ============ Output Errors ============
    /// Draw model could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AscError {
    /// Create a no-usable-text error
    pub fn no_usable_text(origin: impl Into<String>) -> Self {
        Self::NoUsableText {
            origin: origin.into(),
        }
    }

    /// Create a file read error
    pub fn file_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a component not found error
    pub fn component_not_found(name: impl Into<String>) -> Self {
        Self::ComponentNotFound { name: name.into() }
    }
}

/// Where a diagnostic's line number points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "in", content = "name", rename_all = "snake_case")]
pub enum Origin {
    /// The schematic document itself
    Document,
    /// A symbol definition, by resolved key
    Symbol(String),
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Document => write!(f, "schematic"),
            Origin::Symbol(key) => write!(f, "symbol '{}'", key),
        }
    }
}

/// A recoverable problem found while parsing.
///
/// Line numbers are 1-indexed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A record had fewer fields than its kind requires
    #[error("{origin} line {line}: malformed {record} record: {reason}")]
    MalformedLine {
        origin: Origin,
        line: usize,
        record: &'static str,
        reason: String,
    },

    /// A placed symbol has no loadable definition
    #[error("symbol '{name}' at {position} unresolved: {reason}")]
    UnresolvedSymbol {
        name: String,
        position: Point,
        reason: String,
    },

    /// An orientation code outside R0..R270, M0..M270
    #[error("schematic line {line}: unknown orientation '{code}'")]
    UnknownOrientation { line: usize, code: String },
}

impl Diagnostic {
    /// Create a malformed line diagnostic
    pub fn malformed(
        origin: Origin,
        line: usize,
        record: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedLine {
            origin,
            line,
            record,
            reason: reason.into(),
        }
    }
}

/// A parse result together with every diagnostic raised while producing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parsed<T> {
    /// The parsed value
    pub value: T,
    /// Recoverable issues, in the order they were found
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Parsed<T> {
    /// Wrap a value with its diagnostics.
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// True when no diagnostics were raised.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Discard the diagnostics.
    pub fn into_value(self) -> T {
        self.value
    }
}
