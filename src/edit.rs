//! Editing component values in schematic text.
//!
//! Edits work on the raw lines, so everything the parser ignores survives
//! untouched. Re-parse [`SchematicEditor::lines`] to see the result.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{AscError, Result};

const INST_NAME: &str = "SYMATTR InstName ";
const VALUE: &str = "SYMATTR Value ";

/// A component's instance name and value as found in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentValue {
    pub name: String,
    pub value: String,
    /// Index of the `SYMATTR Value` line
    pub line: usize,
}

/// Find every `SYMATTR InstName` line directly followed by a
/// `SYMATTR Value` line.
pub fn component_values<S: AsRef<str>>(lines: &[S]) -> Vec<ComponentValue> {
    lines
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| {
            let name = pair[0].as_ref().strip_prefix(INST_NAME)?;
            let value = pair[1].as_ref().strip_prefix(VALUE)?;
            Some(ComponentValue {
                name: name.trim_end().to_string(),
                value: value.trim_end().to_string(),
                line: i + 1,
            })
        })
        .collect()
}

/// Parameters of a `SINE(...)` source, in field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SineParameter {
    DcOffset,
    Amplitude,
    Frequency,
    Delay,
    DampingFactor,
    Phase,
    Cycles,
}

impl SineParameter {
    /// All parameters, in field order.
    pub const ALL: [SineParameter; 7] = [
        Self::DcOffset,
        Self::Amplitude,
        Self::Frequency,
        Self::Delay,
        Self::DampingFactor,
        Self::Phase,
        Self::Cycles,
    ];

    /// Position of the field inside `SINE(...)`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::DcOffset => "DC_Offset",
            Self::Amplitude => "Amplitude",
            Self::Frequency => "Frequency",
            Self::Delay => "Delay",
            Self::DampingFactor => "Damping_factor",
            Self::Phase => "Phase",
            Self::Cycles => "Cycles",
        }
    }
}

impl FromStr for SineParameter {
    type Err = AscError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        // "dampfing_factor" is accepted for older scripts
        match key.as_str() {
            "dc_offset" | "offset" => Ok(Self::DcOffset),
            "amplitude" => Ok(Self::Amplitude),
            "frequency" => Ok(Self::Frequency),
            "delay" => Ok(Self::Delay),
            "damping_factor" | "dampfing_factor" => Ok(Self::DampingFactor),
            "phase" => Ok(Self::Phase),
            "cycles" => Ok(Self::Cycles),
            _ => Err(AscError::UnknownSineParameter {
                param: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SineParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Split a `SINE(a b c)` value into its fields.
pub fn sine_fields(value: &str) -> Option<Vec<String>> {
    let value = value.trim();
    if !value.get(..4)?.eq_ignore_ascii_case("SINE") {
        return None;
    }
    let inner = value[4..].trim_start().strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.split_whitespace().map(str::to_string).collect())
}

/// Edits component values in schematic lines.
#[derive(Debug, Clone)]
pub struct SchematicEditor {
    lines: Vec<String>,
    components: Vec<ComponentValue>,
}

impl SchematicEditor {
    /// Index the components of a schematic.
    pub fn new(lines: Vec<String>) -> Self {
        let components = component_values(&lines);
        debug!("editor indexed {} components", components.len());
        Self { lines, components }
    }

    /// Components in file order.
    pub fn components(&self) -> &[ComponentValue] {
        &self.components
    }

    /// Current value of a component.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.find(name).ok().map(|c| c.value.as_str())
    }

    /// Replace a component's whole value.
    pub fn set_value(&mut self, name: &str, value: &str) -> Result<()> {
        let index = self.position(name)?;
        self.write(index, value.to_string());
        Ok(())
    }

    /// Change one field of a `SINE(...)` source.
    ///
    /// Missing fields before `param` are filled with `0`.
    pub fn set_sine_parameter(
        &mut self,
        name: &str,
        param: SineParameter,
        value: &str,
    ) -> Result<()> {
        let index = self.position(name)?;
        let current = &self.components[index];
        let mut fields = sine_fields(&current.value).ok_or_else(|| AscError::NotSineSource {
            name: name.to_string(),
            value: current.value.clone(),
        })?;
        if fields.len() > SineParameter::ALL.len() {
            return Err(AscError::TooManySineParameters {
                name: name.to_string(),
                count: fields.len(),
                max: SineParameter::ALL.len(),
            });
        }

        let i = param.index();
        if fields.len() <= i {
            fields.resize(i + 1, "0".to_string());
        }
        fields[i] = value.to_string();
        self.write(index, format!("SINE({})", fields.join(" ")));
        Ok(())
    }

    /// The edited lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the editor, returning the edited lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    fn find(&self, name: &str) -> Result<&ComponentValue> {
        self.position(name).map(|i| &self.components[i])
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.components
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| AscError::component_not_found(name))
    }

    fn write(&mut self, index: usize, value: String) {
        let component = &mut self.components[index];
        info!("{}: '{}' -> '{}'", component.name, component.value, value);
        self.lines[component.line] = format!("{}{}", VALUE, value);
        component.value = value;
    }
}

/// Parse a `NAME=VALUE` assignment.
pub fn parse_assignment(text: &str) -> Option<(&str, &str)> {
    let (name, value) = text.split_once('=')?;
    let name = name.trim();
    (!name.is_empty()).then_some((name, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schematic() -> Vec<String> {
        [
            "Version 4",
            "SHEET 1 880 680",
            "SYMBOL res 96 80 R0",
            "SYMATTR InstName R1",
            "SYMATTR Value 10k",
            "SYMBOL voltage 0 0 R0",
            "WINDOW 123 0 0 Left 2",
            "SYMATTR InstName V1",
            "SYMATTR Value SINE(0 1 1k)",
            "SYMBOL cap 0 0 R0",
            "SYMATTR InstName C1",
            "SYMATTR SpiceLine V=50",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_component_values() {
        let values = component_values(&schematic());
        let names: Vec<_> = values.iter().map(|c| (c.name.as_str(), c.value.as_str(), c.line)).collect();
        assert_eq!(names, vec![("R1", "10k", 4), ("V1", "SINE(0 1 1k)", 8)]);
    }

    #[test]
    fn test_set_value() {
        let mut editor = SchematicEditor::new(schematic());
        editor.set_value("R1", "4k7").unwrap();
        assert_eq!(editor.value("R1"), Some("4k7"));
        assert_eq!(editor.lines()[4], "SYMATTR Value 4k7");
        assert!(matches!(
            editor.set_value("C1", "1u"),
            Err(AscError::ComponentNotFound { .. })
        ));
    }

    #[test]
    fn test_set_sine_parameter() {
        let mut editor = SchematicEditor::new(schematic());
        editor
            .set_sine_parameter("V1", SineParameter::Amplitude, "2.5")
            .unwrap();
        assert_eq!(editor.value("V1"), Some("SINE(0 2.5 1k)"));
        editor
            .set_sine_parameter("V1", SineParameter::Phase, "90")
            .unwrap();
        assert_eq!(editor.lines()[8], "SYMATTR Value SINE(0 2.5 1k 0 0 90)");
    }

    #[test]
    fn test_sine_errors() {
        let mut editor = SchematicEditor::new(schematic());
        assert!(matches!(
            editor.set_sine_parameter("R1", SineParameter::Delay, "1m"),
            Err(AscError::NotSineSource { .. })
        ));

        let mut lines = schematic();
        lines[8] = "SYMATTR Value SINE(0 1 1k 0 0 0 10 3)".to_string();
        let mut editor = SchematicEditor::new(lines);
        assert!(matches!(
            editor.set_sine_parameter("V1", SineParameter::Cycles, "5"),
            Err(AscError::TooManySineParameters { count: 8, max: 7, .. })
        ));
    }

    #[test]
    fn test_sine_parameter_names() {
        assert_eq!("Dampfing_factor".parse::<SineParameter>().unwrap(), SineParameter::DampingFactor);
        assert_eq!("frequency".parse::<SineParameter>().unwrap(), SineParameter::Frequency);
        assert!("Gain".parse::<SineParameter>().is_err());
        for p in SineParameter::ALL {
            assert_eq!(p.name().parse::<SineParameter>().unwrap(), p);
        }
    }

    #[test]
    fn test_sine_fields() {
        assert_eq!(sine_fields("SINE(0 1 1k)").unwrap(), vec!["0", "1", "1k"]);
        assert_eq!(sine_fields("sine (0 1)").unwrap(), vec!["0", "1"]);
        assert_eq!(sine_fields("10k"), None);
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("R1=4k7"), Some(("R1", "4k7")));
        assert_eq!(parse_assignment(" V1 = SINE(0 1 1k) "), Some(("V1", "SINE(0 1 1k)")));
        assert_eq!(parse_assignment("=4k7"), None);
        assert_eq!(parse_assignment("R1"), None);
    }
}
