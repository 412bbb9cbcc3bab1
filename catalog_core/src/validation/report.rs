use std::fmt;
use std::io::{self, Write};

use catalog_schema::HASH_PREFIX;
use serde_json::{Number, Value};

pub const PASS_MARKER: &str = "[schema-validate] PASS";
pub const FAIL_MARKER: &str = "[schema-validate] FAIL";

/// Declared primitive type of a required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Array,
    Object,
    /// A distance or dice notation; the notation itself is not parsed.
    NumberOrDice,
    /// Any JSON value, including null.
    Present,
}

impl FieldKind {
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Array => value.is_array(),
            FieldKind::Object => value.is_object(),
            FieldKind::NumberOrDice => value.is_number() || value.is_string(),
            FieldKind::Present => true,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Array => "array",
            FieldKind::Object => "object",
            FieldKind::NumberOrDice => "number or dice string",
            FieldKind::Present => "any value",
        };
        f.write_str(label)
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// What is wrong at a violation's location.
#[derive(Debug, Clone, PartialEq)]
pub enum Problem {
    Missing { expected: FieldKind },
    WrongType { expected: FieldKind, found: &'static str },
    MissingHashPrefix,
    EmptyCollection,
    NotDefaultFalse,
    ArrayWhenPresent { found: &'static str },
    ObjectWhenPresent { found: &'static str },
    MissingNameOrTitle,
    SequenceNotIncreasing { previous: Number, current: Number },
    DuplicateId { id: String, first_index: usize },
    NotPositiveInteger { found: Number },
    NotNonNegativeInteger { found: Number },
    NotInteger { found: Number },
    InvertedRange { min: Number, max: Number },
    MalformedRequirement { token: String },
    Unreadable { message: String },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Missing { expected } => write!(f, "missing (expected {expected})"),
            Problem::WrongType { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Problem::MissingHashPrefix => {
                write!(f, "must be a string starting with \"{HASH_PREFIX}\"")
            }
            Problem::EmptyCollection => f.write_str("must be a non-empty array"),
            Problem::NotDefaultFalse => f.write_str("must default to false"),
            Problem::ArrayWhenPresent { found } => {
                write!(f, "must be an array when present, found {found}")
            }
            Problem::ObjectWhenPresent { found } => {
                write!(f, "must be an object when present, found {found}")
            }
            Problem::MissingNameOrTitle => f.write_str("needs a string name or title"),
            Problem::SequenceNotIncreasing { previous, current } => write!(
                f,
                "sequence {current} does not increase on previous sequence {previous}"
            ),
            Problem::DuplicateId { id, first_index } => {
                write!(f, "duplicate id \"{id}\" (first seen at index {first_index})")
            }
            Problem::NotPositiveInteger { found } => {
                write!(f, "must be a positive integer, found {found}")
            }
            Problem::NotNonNegativeInteger { found } => {
                write!(f, "must be a non-negative integer, found {found}")
            }
            Problem::NotInteger { found } => write!(f, "must be an integer, found {found}"),
            Problem::InvertedRange { min, max } => write!(f, "min {min} exceeds max {max}"),
            Problem::MalformedRequirement { token } => {
                write!(f, "{token} is not a PREFIX-NNN requirement id")
            }
            Problem::Unreadable { message } => write!(f, "unreadable: {message}"),
        }
    }
}

/// One schema non-conformance, located precisely enough to fix by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub fixture: String,
    pub location: String,
    pub problem: Problem,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.fixture, self.location, self.problem)
    }
}

/// Accumulator owned by a single fixture check.
#[derive(Debug)]
pub struct Violations {
    fixture: String,
    items: Vec<Violation>,
}

impl Violations {
    pub fn new(fixture: impl Into<String>) -> Self {
        Self {
            fixture: fixture.into(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, location: impl Into<String>, problem: Problem) {
        self.items.push(Violation {
            fixture: self.fixture.clone(),
            location: location.into(),
            problem,
        });
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.items
    }
}

/// Outcome of one validation run over the whole fixture set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    fixtures_checked: usize,
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(fixtures_checked: usize, violations: Vec<Violation>) -> Self {
        Self {
            fixtures_checked,
            violations,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn fixtures_checked(&self) -> usize {
        self.fixtures_checked
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn for_fixture<'a>(&'a self, fixture: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations
            .iter()
            .filter(move |violation| violation.fixture == fixture)
    }

    /// One display line per violation, in registration order.
    pub fn lines(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Full console output: the itemized list then the failure marker, or the
    /// single pass marker.
    pub fn render(&self) -> String {
        if self.is_pass() {
            return format!("{PASS_MARKER}\n");
        }
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(" - ");
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(FAIL_MARKER);
        out.push('\n');
        out
    }

    /// Writes [`render`](Self::render) to `stdout` on a pass and to `stderr`
    /// on a failure.
    pub fn write_to<O: Write, E: Write>(&self, stdout: &mut O, stderr: &mut E) -> io::Result<()> {
        let rendered = self.render();
        if self.is_pass() {
            stdout.write_all(rendered.as_bytes())
        } else {
            stderr.write_all(rendered.as_bytes())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_or_dice_accepts_either() {
        assert!(FieldKind::NumberOrDice.accepts(&json!(4)));
        assert!(FieldKind::NumberOrDice.accepts(&json!("d6")));
        assert!(!FieldKind::NumberOrDice.accepts(&json!(true)));
        assert!(FieldKind::Present.accepts(&Value::Null));
    }

    #[test]
    fn violation_line_names_fixture_location_and_condition() {
        let mut violations = Violations::new("commands");
        violations.push(
            "commands[2].sequence",
            Problem::WrongType {
                expected: FieldKind::Number,
                found: "string",
            },
        );
        let lines: Vec<String> = violations.into_vec().iter().map(|v| v.to_string()).collect();
        assert_eq!(
            lines,
            vec!["[commands] commands[2].sequence: expected number, found string"]
        );
    }

    #[test]
    fn render_lists_every_violation_before_marker() {
        let mut violations = Violations::new("match_state");
        violations.push("match_state.state_hash", Problem::MissingHashPrefix);
        violations.push(
            "match_state.optional_rules",
            Problem::Missing {
                expected: FieldKind::Object,
            },
        );
        let report = ValidationReport::new(1, violations.into_vec());
        let rendered = report.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" - [match_state] match_state.state_hash"));
        assert_eq!(lines[2], FAIL_MARKER);
    }

    #[test]
    fn empty_report_passes() {
        let report = ValidationReport::new(4, Vec::new());
        assert!(report.is_pass());
        assert_eq!(report.render(), format!("{PASS_MARKER}\n"));
    }

    #[test]
    fn pass_goes_to_stdout_and_failure_to_stderr() {
        let (mut stdout, mut stderr) = (Vec::new(), Vec::new());
        ValidationReport::new(2, Vec::new())
            .write_to(&mut stdout, &mut stderr)
            .expect("write pass");
        assert_eq!(String::from_utf8(stdout).expect("utf8"), format!("{PASS_MARKER}\n"));
        assert!(stderr.is_empty());

        let mut violations = Violations::new("rng_seed");
        violations.push(
            "rng_seed.seed",
            Problem::Missing {
                expected: FieldKind::Number,
            },
        );
        let (mut stdout, mut stderr) = (Vec::new(), Vec::new());
        ValidationReport::new(1, violations.into_vec())
            .write_to(&mut stdout, &mut stderr)
            .expect("write failure");
        assert!(stdout.is_empty());
        let text = String::from_utf8(stderr).expect("utf8");
        assert!(text.starts_with(" - [rng_seed] rng_seed.seed: missing (expected number)\n"));
        assert!(text.ends_with(&format!("{FAIL_MARKER}\n")));
    }
}
