//! Line tokenizer shared by the schematic and symbol parsers.
//!
//! Both formats are line oriented: a keyword followed by single-space
//! separated fields. Field positions matter, so a line is split on every
//! single space (runs of spaces yield empty fields) and joined back the
//! same way when a trailing free-text field is needed.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+\.?\d*").expect("number regex"));

/// One source line split into fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    /// Line number (1-indexed)
    pub number: usize,
    /// The raw text, without line terminator
    pub text: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> Line<'a> {
    /// Split a line into fields.
    pub fn new(number: usize, text: &'a str) -> Self {
        let text = text.trim_end_matches(['\r', '\n']);
        Self {
            number,
            text,
            fields: text.split(' ').collect(),
        }
    }

    /// The leading keyword, or `""` for an empty line.
    pub fn keyword(&self) -> &'a str {
        self.fields.first().copied().unwrap_or("")
    }

    /// Field `index`, counting the keyword as field 0.
    pub fn field(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }

    /// Field `index` counted from the end (0 is the last field).
    pub fn field_from_end(&self, index: usize) -> Option<&'a str> {
        self.fields.len().checked_sub(index + 1).and_then(|i| self.field(i))
    }

    /// All fields, keyword included.
    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    /// Number of fields, keyword included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the line has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Fields from `start` on, joined by single spaces.
    pub fn rest(&self, start: usize) -> String {
        self.fields.get(start..).map(|f| f.join(" ")).unwrap_or_default()
    }

    /// Field `index` parsed as an integer.
    pub fn int(&self, index: usize) -> Option<i32> {
        self.field(index).and_then(parse_int)
    }

    /// Fields `range` parsed as integers. `None` if any is not an integer.
    pub fn ints(&self, start: usize, end: usize) -> Option<Vec<i32>> {
        self.fields.get(start..end)?.iter().map(|f| parse_int(f)).collect()
    }

    /// Every number found anywhere in the line, see [`scan_numbers`].
    pub fn numbers(&self) -> Vec<i32> {
        scan_numbers(self.text)
    }
}

/// Permissively collect every number in `text`, in order.
///
/// Anything shaped like `-?digits[.digits]` counts, wherever it occurs,
/// including inside words. Fractions are truncated toward zero.
pub fn scan_numbers(text: &str) -> Vec<i32> {
    NUMBER
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .map(|v| v.trunc() as i32)
        .collect()
}

/// Parse a strict integer field.
pub fn parse_int(field: &str) -> Option<i32> {
    field.parse().ok()
}

/// Remove every double quote.
pub fn strip_quotes(text: &str) -> String {
    text.replace('"', "")
}

/// Turn literal `\n` escapes into line breaks.
pub fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields() {
        let line = Line::new(3, "SYMBOL res 96 80 R0\r");
        assert_eq!(line.keyword(), "SYMBOL");
        assert_eq!(line.field(1), Some("res"));
        assert_eq!(line.field_from_end(0), Some("R0"));
        assert_eq!(line.ints(2, 4), Some(vec![96, 80]));
        assert_eq!(line.ints(1, 3), None);
        assert_eq!(line.ints(4, 9), None);
        assert_eq!(line.rest(2), "96 80 R0");
        assert_eq!(line.rest(9), "");
    }

    #[test]
    fn test_double_space_keeps_empty_field() {
        let line = Line::new(1, "FLAG 0  OUT");
        assert_eq!(line.field(2), Some(""));
        assert_eq!(line.rest(2), " OUT");
    }

    #[test]
    fn test_empty_line() {
        let line = Line::new(1, "");
        assert!(line.is_empty());
        assert_eq!(line.keyword(), "");
    }

    #[test]
    fn test_scan_numbers() {
        assert_eq!(scan_numbers("WINDOW 0 24 -8 Left 2"), vec![0, 24, -8, 2]);
        assert_eq!(scan_numbers("ARC Normal 1.5 -2.75 3. 4"), vec![1, -2, 3, 4]);
        assert_eq!(scan_numbers("LINE Normal"), Vec::<i32>::new());
        assert_eq!(scan_numbers("PIN R2 x3"), vec![2, 3]);
    }

    #[test]
    fn test_text_helpers() {
        assert_eq!(strip_quotes("\"R1\""), "R1");
        assert_eq!(unescape_newlines(r"a\nb"), "a\nb");
    }
}
